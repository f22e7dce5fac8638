//! Set of traits for defining a graph abstraction.
//!
//! The module contains traits for a directed graph with keyed nodes, node positions and a
//! distance metric between nodes.
//!
mod graph;
mod metric;
mod spatial;

pub use graph::*;
pub use metric::*;
pub use spatial::*;
