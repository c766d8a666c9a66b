//! Query façade: the methods callers use, with a friendly sentinel for
//! unreachable destinations.

use std::fmt;

use serde::Serialize;

use crate::graph::{Graph, Station};
use crate::route::Route;
use crate::search;

/// Sentinel rendered for queries with no satisfying path.
pub const NO_ROUTE: &str = "NO SUCH ROUTE";

/// Outcome of a distance query. `NoRoute` is a normal result, distinct from
/// any numeric distance (including 0), and is never conflated with an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Distance {
    Known(u32),
    NoRoute,
}

impl Distance {
    /// Numeric distance, if the query found a path.
    pub fn known(self) -> Option<u32> {
        match self {
            Distance::Known(distance) => Some(distance),
            Distance::NoRoute => None,
        }
    }
}

impl From<Option<u32>> for Distance {
    fn from(value: Option<u32>) -> Self {
        match value {
            Some(distance) => Distance::Known(distance),
            None => Distance::NoRoute,
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Known(distance) => write!(f, "{distance}"),
            Distance::NoRoute => f.write_str(NO_ROUTE),
        }
    }
}

impl Graph {
    /// Total distance of an explicit route, or [`Distance::NoRoute`] when any
    /// consecutive pair lacks a direct edge.
    pub fn route_length(&self, route: &Route) -> Distance {
        search::route_length(self, route.stations()).into()
    }

    /// Number of paths from `start` to `end` taking at most `max_stops` hops.
    pub fn count_routes_within_stops(
        &self,
        start: Station,
        end: Station,
        max_stops: usize,
    ) -> usize {
        search::count_routes_within_stops(self, start, end, max_stops)
    }

    /// Number of paths from `start` to `end` taking exactly `stops` hops.
    pub fn count_routes_with_exact_stops(
        &self,
        start: Station,
        end: Station,
        stops: usize,
    ) -> usize {
        search::count_routes_with_exact_stops(self, start, end, stops)
    }

    /// Number of paths from `start` to `end` shorter than `max_length`.
    pub fn count_routes_under_length(
        &self,
        start: Station,
        end: Station,
        max_length: u32,
    ) -> usize {
        search::count_routes_under_length(self, start, end, max_length)
    }

    /// Shortest distance from `start` to `end` over paths of at least one
    /// hop, or [`Distance::NoRoute`].
    pub fn shortest_distance(&self, start: Station, end: Station) -> Distance {
        search::shortest_distance(self, start, end).into()
    }
}
