// Domain layer: taxonomy model, query result shapes and ports. Only serde beyond std.

pub mod model;
pub mod ports;
pub mod results;
pub mod views;
