use crate::spatial::Position;
use serde::{Deserialize, Serialize};

// Node index
pub type Idx = u32;

/// One row of the table a graph is built from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
  pub key: String,
  pub position: Position,
  /// Keys of the nodes reachable from this one, in the order they are expanded.
  #[serde(default)]
  pub neighbors: Vec<String>,
}

impl NodeRecord {
  pub fn new<K, I, S>(key: K, position: Position, neighbors: I) -> Self
  where
    K: Into<String>,
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self {
      key: key.into(),
      position,
      neighbors: neighbors.into_iter().map(Into::into).collect(),
    }
  }
}
