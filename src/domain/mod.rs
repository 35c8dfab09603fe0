// Domain layer: the item store and the ports the driver is built against.

pub mod model;
pub mod ports;
