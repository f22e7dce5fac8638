use super::common::*;
use crate::error::{GraphBuildError, UnknownNodeError};
use crate::graph::*;
use crate::spatial::{bounding_box, euclidean_distance, BoundingBox, Position};
use log::warn;
use rstar::{PointDistance, RTree, RTreeObject, AABB};
use std::collections::HashMap;
use std::fmt;

#[derive(Debug)]
struct Node {
  key: String,
  position: Position,
  neighbors: Vec<String>,
}

#[derive(Debug)]
struct Entry {
  id: Idx,
  point: [f64; 2],
}

impl RTreeObject for Entry {
  type Envelope = AABB<[f64; 2]>;
  fn envelope(&self) -> Self::Envelope {
    AABB::from_point(self.point)
  }
}

impl PointDistance for Entry {
  fn distance_2(&self, point: &[f64; 2]) -> f64 {
    let dx = self.point[0] - point[0];
    let dy = self.point[1] - point[1];
    dx * dx + dy * dy
  }
}

/// Immutable graph of named places with a spatial index over their positions.
///
/// Nodes are stored in the order of the records they were built from, and each node keeps its
/// neighbors in declaration order, which is the order a search expands them in.
pub struct MapGraph {
  nodes: Vec<Node>,
  index: HashMap<String, Idx>,
  rtree: RTree<Entry>,
}

impl MapGraph {
  /// Builds a graph from a table of records.
  ///
  /// Neighbor keys which do not name any record are accepted, but reported with a warning: a
  /// search reaching such a neighbor fails with [`UnknownNodeError`].
  pub fn from_records<R: IntoIterator<Item = NodeRecord>>(records: R) -> Result<Self, GraphBuildError> {
    let mut nodes: Vec<Node> = Vec::new();
    let mut index: HashMap<String, Idx> = HashMap::new();

    for NodeRecord { key, position, neighbors } in records {
      if !position.x.is_finite() || !position.y.is_finite() {
        return Err(GraphBuildError::NonFiniteCoordinate {
          key,
          x: position.x,
          y: position.y,
        });
      }
      if neighbors.iter().any(|n| *n == key) {
        return Err(GraphBuildError::SelfLoop(key));
      }
      if index.contains_key(&key) {
        return Err(GraphBuildError::DuplicateNode(key));
      }
      index.insert(key.clone(), nodes.len() as Idx);
      nodes.push(Node { key, position, neighbors });
    }

    let entries = nodes
      .iter()
      .enumerate()
      .map(|(id, node)| Entry {
        id: id as Idx,
        point: [node.position.x, node.position.y],
      })
      .collect();

    let graph = Self {
      nodes,
      index,
      rtree: RTree::bulk_load(entries),
    };

    for (from, to) in graph.dangling_neighbors() {
      warn!("Node {} references unknown neighbor {}", from, to);
    }

    Ok(graph)
  }

  pub fn number_of_nodes(&self) -> usize {
    self.nodes.len()
  }

  pub fn number_of_edges(&self) -> usize {
    self.nodes.iter().map(|node| node.neighbors.len()).sum()
  }

  pub fn contains(&self, key: &str) -> bool {
    self.index.contains_key(key)
  }

  /// Node keys in the order of the records the graph was built from.
  pub fn keys(&self) -> impl Iterator<Item = &str> {
    self.nodes.iter().map(|node| node.key.as_str())
  }

  /// `(node, neighbor)` pairs where the neighbor is not part of the graph.
  pub fn dangling_neighbors(&self) -> Vec<(&str, &str)> {
    self
      .nodes
      .iter()
      .flat_map(|node| {
        node
          .neighbors
          .iter()
          .filter(move |n| !self.index.contains_key(n.as_str()))
          .map(move |n| (node.key.as_str(), n.as_str()))
      })
      .collect()
  }

  /// Bounding box of all node positions, `None` for an empty graph.
  pub fn bounds(&self) -> Option<BoundingBox> {
    bounding_box(self.nodes.iter().map(|node| node.position))
  }

  fn node(&self, key: &str) -> Option<&Node> {
    self.index.get(key).map(|id| &self.nodes[*id as usize])
  }

  fn known_position(&self, key: &String) -> Result<Position, UnknownNodeError<String>> {
    self
      .node(key)
      .map(|node| node.position)
      .ok_or_else(|| UnknownNodeError::new(key.clone()))
  }
}

impl fmt::Debug for MapGraph {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(self.nodes.iter()).finish()
  }
}

impl GraphBase for MapGraph {
  type NodeId = String;
}

impl<'a> IntoNeighbors for &'a MapGraph {
  type Neighbors = std::iter::Cloned<std::slice::Iter<'a, String>>;

  fn neighbors(self, node: &String) -> Self::Neighbors {
    match self.node(node) {
      Some(node) => node.neighbors.iter().cloned(),
      None => <&'a [String]>::default().iter().cloned(),
    }
  }
}

impl Metric for MapGraph {
  fn distance(&self, from: &String, to: &String) -> Result<f64, UnknownNodeError<String>> {
    let from = self.known_position(from)?;
    let to = self.known_position(to)?;
    Ok(euclidean_distance(&from, &to))
  }
}

impl IntoPosition for MapGraph {
  fn position(&self, node: &String) -> Option<Position> {
    self.node(node).map(|node| node.position)
  }
}

impl Spatial for MapGraph {
  fn nearest(&self, position: &Position) -> Option<String> {
    self
      .rtree
      .nearest_neighbor(&[position.x, position.y])
      .map(|entry| self.nodes[entry.id as usize].key.clone())
  }
}
