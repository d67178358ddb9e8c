// Domain layer: the service contract and the values it produces.

pub mod model;
pub mod ports;
