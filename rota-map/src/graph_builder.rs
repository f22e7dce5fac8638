use rota::spatial::Position;
use rota::{GraphBuildError, MapGraph, NodeRecord};
use serde::{Deserialize, Serialize};

/// A named place with geographic coordinates and the places reachable from it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Place {
  pub key: String,
  pub lat: f64,
  pub lon: f64,
  #[serde(default)]
  pub neighbors: Vec<String>,
}

impl Place {
  pub fn new(key: &str, lat: f64, lon: f64, neighbors: &[&str]) -> Self {
    Self {
      key: key.to_string(),
      lat,
      lon,
      neighbors: neighbors.iter().map(|n| n.to_string()).collect(),
    }
  }

  pub fn position(&self) -> Position {
    Position {
      x: self.lon,
      y: self.lat,
    }
  }
}

/// Table of places a [`MapGraph`] is built from.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteTable {
  pub places: Vec<Place>,
}

impl RouteTable {
  pub fn new(places: Vec<Place>) -> Self {
    Self { places }
  }

  pub fn records(&self) -> impl Iterator<Item = NodeRecord> + '_ {
    self
      .places
      .iter()
      .map(|place| NodeRecord::new(place.key.as_str(), place.position(), place.neighbors.iter().cloned()))
  }

  pub fn build_graph(&self) -> Result<MapGraph, GraphBuildError> {
    MapGraph::from_records(self.records())
  }
}
