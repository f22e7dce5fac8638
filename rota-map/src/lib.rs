mod goias;
mod graph_builder;
mod graph_serde;

pub use goias::goias;
pub use graph_builder::*;
pub use graph_serde::{load_graph, load_table, parse_table, save_table, TableError};
