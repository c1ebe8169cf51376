// Domain layer: request/response models and ports. No dependencies beyond std/serde.

pub mod model;
pub mod ports;
