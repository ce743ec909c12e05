mod hypotrochoid;

pub use hypotrochoid::Hypotrochoid;

use crate::error::{GeometryError, Result};
use crate::math::{Point2, Vector2, TOLERANCE};

/// The three scalar inputs of a roulette curve.
///
/// No invariant is enforced on sign or relative magnitude; degenerate and
/// self-intersecting curves are valid values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouletteParams {
    /// Radius `R` of the fixed circle.
    pub fixed_radius: f64,
    /// Radius `r` of the rolling circle.
    pub rolling_radius: f64,
    /// Distance `d` of the tracing point from the rolling circle's center.
    pub pen_distance: f64,
}

impl RouletteParams {
    /// Creates a new parameter triple `(R, r, d)`.
    #[must_use]
    pub fn new(fixed_radius: f64, rolling_radius: f64, pen_distance: f64) -> Self {
        Self {
            fixed_radius,
            rolling_radius,
            pen_distance,
        }
    }

    /// Returns the ratio `numerator / r`, failing when `r` is exactly zero.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DivisionByZero`] if the rolling radius is zero.
    pub fn per_rolling_radius(&self, numerator: f64) -> Result<f64> {
        if self.rolling_radius == 0.0 {
            return Err(GeometryError::DivisionByZero {
                parameter: "rolling_radius",
            }
            .into());
        }
        Ok(numerator / self.rolling_radius)
    }
}

/// A curve traced by a point attached to a circle rolling on a fixed circle.
///
/// Implementors supply the parametric formulas. Batch evaluation lives in
/// [`crate::evaluation::RouletteCurve`] and works for every implementor.
pub trait Roulette {
    /// Builds the curve from its parameters.
    fn from_params(params: RouletteParams) -> Self
    where
        Self: Sized;

    /// Returns the curve parameters.
    fn params(&self) -> &RouletteParams;

    /// Distance between the fixed and rolling circle centers.
    fn circle_offset(&self) -> f64;

    /// Evaluates the curve at rolling angle `theta`.
    ///
    /// # Errors
    ///
    /// Returns an error if the formulas are undefined for the parameters,
    /// e.g. a zero rolling radius.
    fn evaluate(&self, theta: f64) -> Result<Point2>;

    /// Derivative of the curve with respect to `theta`.
    ///
    /// # Errors
    ///
    /// Returns an error under the same conditions as [`Roulette::evaluate`].
    fn derivative(&self, theta: f64) -> Result<Vector2>;

    /// Unit tangent at `theta`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] at a cusp, where the derivative
    /// vanishes, or any error from [`Roulette::derivative`].
    fn tangent(&self, theta: f64) -> Result<Vector2> {
        let derivative = self.derivative(theta)?;
        let len = derivative.norm();
        if len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(derivative / len)
    }

    /// Center of the rolling circle at `theta`.
    fn rolling_center(&self, theta: f64) -> Point2 {
        let offset = self.circle_offset();
        Point2::new(offset * theta.cos(), offset * theta.sin())
    }
}
