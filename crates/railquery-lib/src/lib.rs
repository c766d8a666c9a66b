//! Railquery library entry points.
//!
//! This crate parses a textual edge specification into an in-memory station
//! graph and answers route queries over it: explicit route length, path
//! counts under hop or length constraints, and shortest distances.
//! Higher-level consumers (the CLI) should only depend on the types and
//! functions exported here instead of reimplementing behavior.

#![deny(warnings)]

pub mod error;
pub mod graph;
pub mod queries;
pub mod route;
pub mod search;

pub use error::{Error, Result};
pub use graph::{parse_station, Edge, Graph, Station};
pub use queries::{Distance, NO_ROUTE};
pub use route::Route;
