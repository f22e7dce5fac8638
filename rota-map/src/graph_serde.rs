use crate::graph_builder::RouteTable;
use rota::{GraphBuildError, MapGraph};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TableError {
  #[error("failed to access route table: {0}")]
  Io(#[from] std::io::Error),
  #[error("malformed route table: {0}")]
  Json(#[from] serde_json::Error),
  #[error("invalid route table: {0}")]
  Graph(#[from] GraphBuildError),
}

pub fn parse_table(json: &str) -> Result<RouteTable, TableError> {
  Ok(serde_json::from_str(json)?)
}

pub fn load_table<P: AsRef<Path>>(path: P) -> Result<RouteTable, TableError> {
  let file = BufReader::new(File::open(path)?);
  Ok(serde_json::from_reader(file)?)
}

pub fn save_table<P: AsRef<Path>>(table: &RouteTable, path: P) -> Result<(), TableError> {
  let mut file = BufWriter::new(File::create(path)?);
  serde_json::to_writer_pretty(&mut file, table)?;
  file.flush()?;
  Ok(())
}

/// Loads a route table and builds the graph from it.
pub fn load_graph<P: AsRef<Path>>(path: P) -> Result<MapGraph, TableError> {
  Ok(load_table(path)?.build_graph()?)
}
