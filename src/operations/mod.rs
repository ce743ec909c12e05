mod sweep;

pub use sweep::{ParameterSweep, SweepValue};
