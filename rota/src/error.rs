//! Error types.

use std::fmt::Debug;
use thiserror::Error;

/// A node was requested which is not part of the graph.
///
/// Returned by [`crate::graph::Metric::distance`] and propagated out of a search. A graph which
/// references missing nodes is a configuration error, so the search is aborted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown node {key:?}")]
pub struct UnknownNodeError<N: Debug> {
  pub key: N,
}

impl<N: Debug> UnknownNodeError<N> {
  pub fn new(key: N) -> Self {
    Self { key }
  }
}

/// Errors from [`crate::graph_impl::MapGraph::from_records`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphBuildError {
  /// Two records share the same key.
  #[error("node {0:?} is defined more than once")]
  DuplicateNode(String),
  /// A node lists itself as a neighbor.
  #[error("node {0:?} lists itself as a neighbor")]
  SelfLoop(String),
  /// A coordinate is NaN or infinite, which would make every score involving the node undefined.
  #[error("node {key:?} has a non-finite coordinate ({x}, {y})")]
  NonFiniteCoordinate { key: String, x: f64, y: f64 },
}
