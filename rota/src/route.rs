//! Route finding.

use crate::error::UnknownNodeError;
use crate::frontier::InsertionOrder;
use crate::graph::*;
use crate::search_space::*;
use crate::spatial::Polyline;
use log::info;
use std::fmt;

/// A path from the search origin to some node.
///
/// `cost` is the length of the path travelled so far and `estimate` the straight-line distance
/// from the last node to the destination. A route is never modified, expanding it creates a new
/// one.
#[derive(Clone, Debug, PartialEq)]
pub struct Route<N: Identifier> {
  ids: Vec<N>,
  cost: f64,
  estimate: f64,
}

impl<N: Identifier> Route<N> {
  /// Route consisting of the origin only.
  pub fn start(origin: N, estimate: f64) -> Self {
    Self {
      ids: vec![origin],
      cost: 0.0,
      estimate,
    }
  }

  /// Returns `None` if `ids` is empty.
  pub fn new(ids: Vec<N>, cost: f64, estimate: f64) -> Option<Self> {
    if ids.is_empty() {
      return None;
    }
    Some(Self { ids, cost, estimate })
  }

  /// New route continuing this one to `next`, `step` away from the current last node.
  pub fn extend(&self, next: N, step: f64, estimate: f64) -> Self {
    let mut ids = Vec::with_capacity(self.ids.len() + 1);
    ids.extend(self.ids.iter().cloned());
    ids.push(next);
    Self {
      ids,
      cost: self.cost + step,
      estimate,
    }
  }

  pub fn ids(&self) -> &[N] {
    &self.ids
  }

  pub fn cost(&self) -> f64 {
    self.cost
  }

  pub fn estimate(&self) -> f64 {
    self.estimate
  }

  /// Value the frontier is ordered by.
  pub fn score(&self) -> f64 {
    self.cost + self.estimate
  }

  pub fn origin(&self) -> &N {
    &self.ids[0]
  }

  pub fn last(&self) -> &N {
    &self.ids[self.ids.len() - 1]
  }

  pub fn len(&self) -> usize {
    self.ids.len()
  }
}

impl<N: Identifier + fmt::Display> fmt::Display for Route<N> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (i, id) in self.ids.iter().enumerate() {
      if i > 0 {
        write!(f, " -> ")?;
      }
      write!(f, "{}", id)?;
    }
    write!(f, " (cost = {:.4}, estimate = {:.4})", self.cost, self.estimate)
  }
}

/// Searches a route from `origin` to `destination` with the default [`InsertionOrder`].
///
/// Returns `Ok(None)` if the destination can't be reached from the origin.
pub fn search<G>(graph: G, origin: &G::NodeId, destination: &G::NodeId) -> Result<Option<Route<G::NodeId>>, UnknownNodeError<G::NodeId>>
where
  G: Copy + Metric + IntoNeighbors,
{
  search_with_order(graph, origin, destination, InsertionOrder::default())
}

pub fn search_with_order<G>(
  graph: G,
  origin: &G::NodeId,
  destination: &G::NodeId,
  order: InsertionOrder,
) -> Result<Option<Route<G::NodeId>>, UnknownNodeError<G::NodeId>>
where
  G: Copy + Metric + IntoNeighbors,
{
  info!("Starting to search a route from {:?} to {:?}", origin, destination);

  let mut search_space = SearchSpace::new(order);
  search_space.init(graph, origin.clone(), destination.clone())?;

  while let Some(step) = search_space.update(graph)? {
    match step {
      Step::Found(route) => {
        info!(
          "Route to destination found: {:?}, cost = {}, expanded {} nodes",
          route.ids(),
          route.cost(),
          search_space.expanded()
        );
        return Ok(Some(route));
      }
      Step::Exhausted => break,
      Step::Expanded(_) | Step::Discarded(_) => {}
    }
  }

  info!(
    "No route found from {:?} to {:?}, expanded {} nodes",
    origin,
    destination,
    search_space.expanded()
  );
  Ok(None)
}

/// Positions of the route nodes, in route order. Nodes without a position are skipped.
pub fn collect_route_geometry<G: IntoPosition>(graph: G, ids: &[G::NodeId]) -> Polyline {
  ids
    .iter()
    .filter_map(|id| graph.position(id))
    .collect::<Vec<_>>()
    .into()
}

/// Total length of the path through `ids`.
pub fn route_length<G: Metric>(graph: G, ids: &[G::NodeId]) -> Result<f64, UnknownNodeError<G::NodeId>> {
  ids
    .windows(2)
    .map(|pair| graph.distance(&pair[0], &pair[1]))
    .sum()
}

#[cfg(test)]
mod tests {
  use super::super::test_utils::{graph_from_positions_and_edges, record};
  use super::*;
  use crate::graph_impl::MapGraph;
  use crate::spatial::Position;
  use rstest::rstest;

  fn key(id: &str) -> String {
    id.to_string()
  }

  fn keys(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|id| id.to_string()).collect()
  }

  fn triangle() -> MapGraph {
    MapGraph::from_records(vec![record("G", (0.0, 0.0), &["H"]), record("H", (3.0, 4.0), &["G"])]).unwrap()
  }

  #[test]
  fn test_route() {
    let route = Route::start(key("a"), 4.0).extend(key("b"), 1.5, 2.0).extend(key("c"), 2.5, 0.0);

    assert_eq!(route.ids(), keys(&["a", "b", "c"]).as_slice());
    assert_eq!(route.origin(), "a");
    assert_eq!(route.last(), "c");
    assert_eq!(route.len(), 3);
    assert_eq!(route.cost(), 4.0);
    assert_eq!(route.estimate(), 0.0);
    assert_eq!(route.score(), 4.0);
    assert_eq!(route.to_string(), "a -> b -> c (cost = 4.0000, estimate = 0.0000)");
  }

  #[test]
  fn test_extend_creates_new_route() {
    let start = Route::start(key("a"), 3.0);
    let extended = start.extend(key("b"), 1.0, 2.0);

    assert_eq!(start.ids(), keys(&["a"]).as_slice());
    assert_eq!(start.score(), 3.0);
    assert_eq!(extended.score(), 3.0);
  }

  #[test]
  fn test_new_requires_ids() {
    assert!(Route::<String>::new(Vec::new(), 0.0, 0.0).is_none());
    let route = Route::new(keys(&["a", "b"]), 1.0, 2.0).unwrap();
    assert_eq!(route.score(), 3.0);
  }

  #[rstest]
  #[case(InsertionOrder::Ascending)]
  #[case(InsertionOrder::Descending)]
  fn test_three_four_five(#[case] order: InsertionOrder) {
    let graph = triangle();
    let route = search_with_order(&graph, &key("G"), &key("H"), order).unwrap().unwrap();

    assert_eq!(route.ids(), keys(&["G", "H"]).as_slice());
    assert_eq!(route.cost(), 5.0);
    assert_eq!(route.estimate(), 0.0);
  }

  #[rstest]
  #[case(InsertionOrder::Ascending)]
  #[case(InsertionOrder::Descending)]
  fn test_same_origin_and_destination(#[case] order: InsertionOrder) {
    let graph = triangle();
    let route = search_with_order(&graph, &key("H"), &key("H"), order).unwrap().unwrap();

    assert_eq!(route.ids(), keys(&["H"]).as_slice());
    assert_eq!(route.cost(), 0.0);
    assert_eq!(route.estimate(), 0.0);
  }

  #[rstest]
  #[case(InsertionOrder::Ascending)]
  #[case(InsertionOrder::Descending)]
  fn test_direct_neighbor(#[case] order: InsertionOrder) {
    // n0 only leads to n1, which fans out further
    let graph = graph_from_positions_and_edges(
      &[(0.0, 0.0), (1.0, 2.0), (4.0, 2.0), (1.0, 6.0)],
      &[(0, 1), (1, 0), (1, 2), (1, 3), (2, 3)],
    );
    let route = search_with_order(&graph, &key("n0"), &key("n1"), order).unwrap().unwrap();

    assert_eq!(route.ids(), keys(&["n0", "n1"]).as_slice());
    assert_eq!(route.cost(), graph.distance(&key("n0"), &key("n1")).unwrap());
  }

  #[test]
  fn test_descending_takes_direct_neighbor_among_several() {
    let graph = graph_from_positions_and_edges(
      &[(0.0, 0.0), (2.0, 1.0), (1.0, 3.0), (-1.0, -1.0)],
      &[(0, 1), (0, 2), (0, 3), (2, 1), (3, 1)],
    );
    let route = search_with_order(&graph, &key("n0"), &key("n1"), InsertionOrder::Descending)
      .unwrap()
      .unwrap();

    assert_eq!(route.ids(), keys(&["n0", "n1"]).as_slice());
    assert_eq!(route.cost(), graph.distance(&key("n0"), &key("n1")).unwrap());
  }

  #[test]
  fn test_orders_pick_different_routes() {
    // Two ways from n0 to n3: the short one over n1 and a detour over n2
    let graph = graph_from_positions_and_edges(
      &[(0.0, 0.0), (1.0, 1.0), (1.0, -3.0), (2.0, 0.0)],
      &[(0, 1), (0, 2), (1, 3), (2, 3)],
    );

    let best_first = search_with_order(&graph, &key("n0"), &key("n3"), InsertionOrder::Descending)
      .unwrap()
      .unwrap();
    assert_eq!(best_first.ids(), keys(&["n0", "n1", "n3"]).as_slice());

    let ascending = search_with_order(&graph, &key("n0"), &key("n3"), InsertionOrder::Ascending)
      .unwrap()
      .unwrap();
    assert_eq!(ascending.ids(), keys(&["n0", "n2", "n3"]).as_slice());
    assert!(ascending.cost() > best_first.cost());
  }

  #[rstest]
  #[case(InsertionOrder::Ascending)]
  #[case(InsertionOrder::Descending)]
  fn test_unreachable_destination(#[case] order: InsertionOrder) {
    let graph = graph_from_positions_and_edges(
      &[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (5.0, 5.0)],
      &[(0, 1), (1, 0), (1, 2), (2, 1), (3, 2)],
    );
    assert_eq!(search_with_order(&graph, &key("n0"), &key("n3"), order), Ok(None));
  }

  #[test]
  fn test_unknown_nodes_fail() {
    let graph = triangle();

    assert_eq!(search(&graph, &key("G"), &key("X")), Err(UnknownNodeError::new(key("X"))));
    assert_eq!(search(&graph, &key("X"), &key("G")), Err(UnknownNodeError::new(key("X"))));
  }

  #[test]
  fn test_dangling_neighbor_fails_when_reached() {
    let graph = MapGraph::from_records(vec![
      record("a", (0.0, 0.0), &["b"]),
      record("b", (1.0, 0.0), &["ghost"]),
      record("c", (2.0, 0.0), &[]),
    ])
    .unwrap();

    assert_eq!(search(&graph, &key("a"), &key("c")), Err(UnknownNodeError::new(key("ghost"))));
  }

  #[test]
  fn test_route_geometry_and_length() {
    let graph = graph_from_positions_and_edges(&[(0.0, 0.0), (3.0, 4.0), (3.0, 0.0)], &[(0, 1), (1, 2)]);
    let ids = keys(&["n0", "n1", "n2"]);

    let geometry = collect_route_geometry(&graph, &ids);
    let points: Vec<Position> = geometry.0;
    assert_eq!(
      points,
      vec![Position { x: 0.0, y: 0.0 }, Position { x: 3.0, y: 4.0 }, Position { x: 3.0, y: 0.0 }]
    );

    assert_eq!(route_length(&graph, &ids), Ok(9.0));
    assert_eq!(route_length(&graph, &keys(&["n0"])), Ok(0.0));
    assert_eq!(route_length(&graph, &keys(&["n0", "zz"])), Err(UnknownNodeError::new(key("zz"))));
  }
}
