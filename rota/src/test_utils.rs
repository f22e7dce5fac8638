use crate::graph_impl::*;
use crate::spatial::Position;

/// Record with the given key, position and neighbor keys.
pub fn record(key: &str, at: (f64, f64), neighbors: &[&str]) -> NodeRecord {
  NodeRecord::new(key, Position { x: at.0, y: at.1 }, neighbors.iter().copied())
}

/// Graph with nodes named `n0`, `n1`, ... at the given positions and directed edges between them.
pub fn graph_from_positions_and_edges(positions: &[(f64, f64)], edges: &[(usize, usize)]) -> MapGraph {
  let mut records: Vec<NodeRecord> = positions
    .iter()
    .enumerate()
    .map(|(id, at)| record(&format!("n{}", id), *at, &[]))
    .collect();

  for (from, to) in edges {
    let key = records[*to].key.clone();
    records[*from].neighbors.push(key);
  }

  MapGraph::from_records(records).unwrap()
}
