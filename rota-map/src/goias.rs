//! Cities in the south of Goiás, Brazil, connected by their main roads.

use crate::graph_builder::{Place, RouteTable};

pub fn goias() -> RouteTable {
  RouteTable::new(vec![
    Place::new("Goiania", -16.69, -49.25, &["Hidrolandia", "BelaVista"]),
    Place::new("Hidrolandia", -16.97, -49.22, &["Goiania", "ProfJamil", "BelaVista"]),
    Place::new("BelaVista", -16.97, -48.97, &["Goiania", "Hidrolandia", "Piracanjuba", "Cristianopolis"]),
    Place::new("ProfJamil", -17.25, -49.25, &["Hidrolandia", "Morrinhos", "Piracanjuba"]),
    Place::new("Cristianopolis", -17.19, -48.70, &["BelaVista", "Piracanjuba", "CaldasNovas"]),
    Place::new(
      "Piracanjuba",
      -17.30,
      -49.02,
      &["BelaVista", "ProfJamil", "CaldasNovas", "Cristianopolis", "Formiga"],
    ),
    Place::new("Formiga", -17.65, -49.08, &["Piracanjuba"]),
    Place::new("Morrinhos", -17.73, -49.12, &["ProfJamil", "CaldasNovas"]),
    Place::new("CaldasNovas", -17.74, -48.62, &["Cristianopolis", "Piracanjuba", "Morrinhos"]),
  ])
}
