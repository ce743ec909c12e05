pub mod error;
pub mod evaluation;
pub mod geometry;
pub mod math;
pub mod operations;

pub use error::{Result, TrochoidError};
pub use evaluation::{RouletteCurve, TracePoint};
pub use geometry::{Hypotrochoid, Roulette, RouletteParams, ThetaInput, ThetaRange, Thetas};
