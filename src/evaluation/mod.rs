mod roulette_curve;

pub use roulette_curve::RouletteCurve;

use crate::math::Point2;

/// An evaluated sample together with the angle that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TracePoint {
    /// Position of the tracing point.
    pub point: Point2,
    /// Rolling angle in radians.
    pub theta: f64,
}
