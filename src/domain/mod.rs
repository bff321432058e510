// Domain layer: catalog records and the ports adapters implement.

pub mod model;
pub mod ports;
