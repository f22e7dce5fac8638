use crate::graph::GraphBase;
use crate::spatial::Position;

/// Defines how to obtain a position of a graph node
///
/// Returns `None` for a node which is not part of the graph.
pub trait IntoPosition: GraphBase {
  fn position(&self, node: &Self::NodeId) -> Option<Position>;
}

/// Defines a spatial index for graph nodes
pub trait Spatial: GraphBase {
  fn nearest(&self, position: &Position) -> Option<Self::NodeId>;
}

impl<'a, G: IntoPosition> IntoPosition for &'a G {
  fn position(&self, node: &Self::NodeId) -> Option<Position> {
    (*self).position(node)
  }
}

impl<'a, G: Spatial> Spatial for &'a G {
  fn nearest(&self, position: &Position) -> Option<Self::NodeId> {
    (*self).nearest(position)
  }
}
