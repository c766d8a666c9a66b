use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::graph::{parse_station, Station};

/// Separator used by the dash-joined route notation (`"A-B-C"`).
const JOIN_CHAR: char = '-';

/// Ordered sequence of stations describing a path. Used both as query input
/// (an explicit route to measure) and as output notation; carries no graph
/// state of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route(pub Vec<Station>);

impl Route {
    /// Stations along the route, in traversal order.
    pub fn stations(&self) -> &[Station] {
        &self.0
    }

    /// Number of hops (edges) the route traverses.
    pub fn hops(&self) -> usize {
        self.0.len().saturating_sub(1)
    }
}

impl FromStr for Route {
    type Err = Error;

    fn from_str(notation: &str) -> Result<Self> {
        if notation.trim().is_empty() {
            return Err(Error::EmptyRoute);
        }
        let stations = notation
            .split(JOIN_CHAR)
            .map(|token| parse_station(token.trim()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self(stations))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, station) in self.0.iter().enumerate() {
            if index > 0 {
                write!(f, "{JOIN_CHAR}")?;
            }
            write!(f, "{station}")?;
        }
        Ok(())
    }
}
