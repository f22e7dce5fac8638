//! Graph data structures.
//!
//! [`MapGraph`] is an in-memory graph of named places. It is built once from a table of
//! [`NodeRecord`]s and cannot be modified afterwards, so it can be shared by any number of
//! searches.

mod common;
mod map_graph;

pub use common::*;
pub use map_graph::*;
