// Domain layer: record model, translation tables and ports.

pub mod model;
pub mod ports;
