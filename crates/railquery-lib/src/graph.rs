use std::collections::HashMap;

use crate::error::{Error, Result};

/// Station identifier: a single uppercase ASCII letter.
pub type Station = char;

/// Parse a station identifier from a textual token.
pub fn parse_station(token: &str) -> Result<Station> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(station), None) if station.is_ascii_uppercase() => Ok(station),
        _ => Err(Error::InvalidStation {
            token: token.to_string(),
        }),
    }
}

/// Directed edge within the station graph. The origin is the adjacency key,
/// so only the target and weight are stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub to: Station,
    pub weight: u32,
}

/// Directed, weighted graph of stations. Built once from a textual edge
/// specification and read-only afterwards; every query borrows `&self`.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: HashMap<Station, Vec<Edge>>,
}

impl Graph {
    /// Build a graph from a comma-separated edge specification such as
    /// `"AB5,BC4,CD8"`. Each valid token is two uppercase letters (origin,
    /// target) followed by one decimal digit (weight).
    ///
    /// Malformed tokens are dropped, and exact duplicates are merged. Two
    /// tokens giving the same directed edge different weights are rejected,
    /// as are zero-weight edges; a specification yielding no edges at all is
    /// rejected as [`Error::EmptyGraph`].
    pub fn parse(spec: &str) -> Result<Self> {
        let mut adjacency: HashMap<Station, Vec<Edge>> = HashMap::new();
        let mut edge_count = 0usize;

        for token in spec.split(',').map(str::trim) {
            let Some((from, edge)) = parse_edge_token(token) else {
                if !token.is_empty() {
                    tracing::debug!(token, "dropping malformed edge token");
                }
                continue;
            };
            if edge.weight == 0 {
                return Err(Error::ZeroWeightEdge {
                    token: token.to_string(),
                });
            }

            let outgoing = adjacency.entry(from).or_default();
            if let Some(existing) = outgoing.iter().find(|existing| existing.to == edge.to) {
                if existing.weight != edge.weight {
                    return Err(Error::ConflictingEdge { from, to: edge.to });
                }
                // Exact duplicate token, already recorded.
                continue;
            }
            outgoing.push(edge);
            edge_count += 1;
        }

        if edge_count == 0 {
            return Err(Error::EmptyGraph);
        }

        // Stations that only ever appear as targets still get an (empty)
        // adjacency entry, so lookups never distinguish "no outgoing edges"
        // from "unknown station".
        let targets: Vec<Station> = adjacency
            .values()
            .flatten()
            .map(|edge| edge.to)
            .collect();
        for target in targets {
            adjacency.entry(target).or_default();
        }

        tracing::debug!(
            stations = adjacency.len(),
            edges = edge_count,
            "parsed station graph"
        );

        Ok(Self { adjacency })
    }

    /// Outgoing edges of `station`, in specification order. Unknown stations
    /// have no outgoing edges.
    pub fn neighbours(&self, station: Station) -> &[Edge] {
        self.adjacency
            .get(&station)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Weight of the direct edge `from` -> `to`, if one exists. Scans only
    /// the origin's out-edges.
    pub fn direct_edge(&self, from: Station, to: Station) -> Option<u32> {
        self.neighbours(from)
            .iter()
            .find(|edge| edge.to == to)
            .map(|edge| edge.weight)
    }

    /// Stations known to the graph, as either edge origin or target.
    pub fn stations(&self) -> impl Iterator<Item = Station> + '_ {
        self.adjacency.keys().copied()
    }

    /// Total number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }
}

/// Decode one `XY9`-shaped token into its origin and edge, or `None` when the
/// token does not match the grammar.
fn parse_edge_token(token: &str) -> Option<(Station, Edge)> {
    let chars: Vec<char> = token.chars().collect();
    match chars.as_slice() {
        [from, to, digit]
            if from.is_ascii_uppercase() && to.is_ascii_uppercase() && digit.is_ascii_digit() =>
        {
            let weight = digit.to_digit(10)?;
            Some((*from, Edge { to: *to, weight }))
        }
        _ => None,
    }
}
