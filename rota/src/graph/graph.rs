use std::fmt::Debug;
use std::hash::Hash;
use std::iter::Iterator;

// ====== Basic traits =====

/// Requirements for a node identifier
pub trait Identifier: Eq + Hash + Clone + Debug {}
impl<T> Identifier for T where T: Eq + Hash + Clone + Debug {}

/// Defines type of the identifier for the graph
pub trait GraphBase {
  type NodeId: Identifier;
}

// ====== Neighbors access =====

/// Trait for defining graph connectivity
///
/// `neighbors()` for node `u` must return all nodes `v` such that there is an edge from `u` to `v`,
/// in the order they were declared. The lookup is lenient: a node which is not part of the graph
/// has no neighbors, so an empty iterator is returned instead of an error.
pub trait IntoNeighbors: GraphBase {
  type Neighbors: Iterator<Item = Self::NodeId>;
  fn neighbors(self, node: &Self::NodeId) -> Self::Neighbors;
}

// ====== Blanket implementations =====

impl<'a, G: GraphBase> GraphBase for &'a G {
  type NodeId = G::NodeId;
}
