use crate::error::UnknownNodeError;
use crate::graph::GraphBase;

/// Graph with a distance between any two of its nodes
///
/// The same distance is used as the cost of traversing an edge and as the estimate of the
/// remaining distance to the destination. Unlike [`crate::graph::IntoNeighbors`] the lookup is
/// strict: asking for a node which is not part of the graph is an error.
pub trait Metric: GraphBase {
  fn distance(&self, from: &Self::NodeId, to: &Self::NodeId) -> Result<f64, UnknownNodeError<Self::NodeId>>;
}

impl<'a, G: Metric> Metric for &'a G {
  fn distance(&self, from: &Self::NodeId, to: &Self::NodeId) -> Result<f64, UnknownNodeError<Self::NodeId>> {
    (*self).distance(from, to)
  }
}
