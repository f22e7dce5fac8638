//! Best-first route search over a fixed geographic graph.
//!
//! Routes are ordered by their accumulated cost plus the straight-line distance to the
//! destination. See [`frontier::InsertionOrder`] for how routes with different scores are
//! ordered.

pub mod error;
pub mod frontier;
pub mod graph;
pub mod graph_impl;
pub mod route;
pub mod search_space;
pub mod spatial;

#[cfg(test)]
mod test_utils;

pub use error::{GraphBuildError, UnknownNodeError};
pub use frontier::{Frontier, InsertionOrder};
pub use graph_impl::{MapGraph, NodeRecord};
pub use route::{search, search_with_order, Route};
pub use search_space::{SearchSpace, SearchState, Step};
