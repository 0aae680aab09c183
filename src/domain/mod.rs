// Domain layer: evaluation records and the configuration port shared by the core and adapters.

pub mod model;
pub mod ports;
