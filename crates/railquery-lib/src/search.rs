//! Route query algorithms over a [`Graph`].
//!
//! All functions here are pure reads: they borrow the graph, never mutate it,
//! and are total over any pair of stations. A station absent from the graph
//! simply has no outgoing edges, so every query degrades to zero paths or no
//! route rather than failing.
//!
//! The enumeration queries deliberately allow revisiting stations: cycles are
//! legitimate paths, so termination comes from an explicit hop or length
//! budget rather than a visited set.

use std::collections::{HashMap, VecDeque};

use crate::graph::{Graph, Station};

/// Total weight of an explicit route, following the direct edge between each
/// consecutive pair of stations. `None` as soon as any pair has no direct
/// edge. A single-station route has length 0 by convention.
pub fn route_length(graph: &Graph, route: &[Station]) -> Option<u32> {
    let mut total = 0;
    for pair in route.windows(2) {
        total += graph.direct_edge(pair[0], pair[1])?;
    }
    Some(total)
}

/// Number of distinct paths from `start` to `end` taking between 1 and
/// `max_stops` hops inclusive. Cycles are allowed and paths are counted with
/// multiplicity; a path may pass through `end` and still continue, so the
/// search recurses past arrivals rather than stopping at the first one. The
/// zero-hop self path is never counted when `start == end`.
pub fn count_routes_within_stops(
    graph: &Graph,
    start: Station,
    end: Station,
    max_stops: usize,
) -> usize {
    fn descend(graph: &Graph, current: Station, end: Station, remaining: usize) -> usize {
        if remaining == 0 {
            return 0;
        }
        let mut found = 0;
        for edge in graph.neighbours(current) {
            if edge.to == end {
                found += 1;
            }
            found += descend(graph, edge.to, end, remaining - 1);
        }
        found
    }

    descend(graph, start, end, max_stops)
}

/// Number of distinct paths from `start` to `end` taking exactly `stops`
/// hops. Arrivals at `end` before the full hop budget is spent are not
/// counted but the search continues through them; nothing expands past depth
/// `stops`.
pub fn count_routes_with_exact_stops(
    graph: &Graph,
    start: Station,
    end: Station,
    stops: usize,
) -> usize {
    fn descend(graph: &Graph, current: Station, end: Station, remaining: usize) -> usize {
        if remaining == 0 {
            return 0;
        }
        let mut found = 0;
        for edge in graph.neighbours(current) {
            if remaining == 1 && edge.to == end {
                found += 1;
            }
            found += descend(graph, edge.to, end, remaining - 1);
        }
        found
    }

    descend(graph, start, end, stops)
}

/// Number of distinct paths from `start` to `end` whose total weight is
/// strictly less than `max_length`, with no bound on hop count. Each complete
/// prefix ending at `end` under the bound counts independently, so the search
/// continues through `end` until the length budget prunes it.
///
/// Termination relies on every edge weight being strictly positive, which
/// [`Graph::parse`] guarantees.
pub fn count_routes_under_length(
    graph: &Graph,
    start: Station,
    end: Station,
    max_length: u32,
) -> usize {
    fn descend(
        graph: &Graph,
        current: Station,
        end: Station,
        travelled: u32,
        max_length: u32,
    ) -> usize {
        let mut found = 0;
        for edge in graph.neighbours(current) {
            let length = travelled + edge.weight;
            if length >= max_length {
                continue;
            }
            if edge.to == end {
                found += 1;
            }
            found += descend(graph, edge.to, end, length, max_length);
        }
        found
    }

    descend(graph, start, end, 0, max_length)
}

/// Minimum total weight over all paths of at least one hop from `start` to
/// `end`, or `None` when no such path exists. When `start == end` the result
/// is the shortest cycle back to the start, never the trivial zero-length
/// stay-put answer.
///
/// Worklist relaxation: tentative distances start unknown, `start`'s own
/// out-edges seed the map, and any improvement re-queues the improved station
/// for re-examination. Distances only strictly decrease on update and are
/// bounded below by zero, so the worklist drains.
pub fn shortest_distance(graph: &Graph, start: Station, end: Station) -> Option<u32> {
    let mut tentative: HashMap<Station, u32> = HashMap::new();
    let mut worklist: VecDeque<Station> = VecDeque::new();

    for edge in graph.neighbours(start) {
        if improves(&tentative, edge.to, edge.weight) {
            tentative.insert(edge.to, edge.weight);
            worklist.push_back(edge.to);
        }
    }

    while let Some(current) = worklist.pop_front() {
        let reached = tentative[&current];
        for edge in graph.neighbours(current) {
            let candidate = reached + edge.weight;
            if improves(&tentative, edge.to, candidate) {
                tentative.insert(edge.to, candidate);
                worklist.push_back(edge.to);
            }
        }
    }

    tentative.get(&end).copied()
}

fn improves(tentative: &HashMap<Station, u32>, station: Station, candidate: u32) -> bool {
    tentative
        .get(&station)
        .map_or(true, |&known| candidate < known)
}
