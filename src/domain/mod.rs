// Domain layer: names, identifiers, templates and the ports between them. No external dependencies beyond std/serde.

pub mod model;
pub mod ports;
