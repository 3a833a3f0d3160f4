// Domain layer: the values flowing through the pipeline and the seams (ports) between stages.

pub mod model;
pub mod ports;
