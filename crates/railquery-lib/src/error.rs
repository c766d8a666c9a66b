use thiserror::Error;

use crate::graph::Station;

/// Convenient result alias for the railquery library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
///
/// "No such route" is deliberately absent: an unreachable destination is a
/// normal query outcome, reported as [`crate::Distance::NoRoute`] rather than
/// an error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Raised when a graph specification yields no edges at all.
    #[error("graph specification contained no valid edges")]
    EmptyGraph,

    /// Raised when two tokens describe the same directed edge with different
    /// weights.
    #[error("conflicting weights for edge {from}{to}")]
    ConflictingEdge { from: Station, to: Station },

    /// Raised when an edge token carries weight zero. Length-bounded
    /// enumeration only terminates when every edge strictly increases the
    /// accumulated distance, so zero weights are rejected at parse time.
    #[error("edge token {token} has zero weight")]
    ZeroWeightEdge { token: String },

    /// Raised when a station token is not a single uppercase ASCII letter.
    #[error("invalid station identifier: {token:?}")]
    InvalidStation { token: String },

    /// Raised when a route notation string contains no stations.
    #[error("route must name at least one station")]
    EmptyRoute,
}
