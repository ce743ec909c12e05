use crate::error::Result;
use crate::math::{Point2, Vector2};

use super::{Roulette, RouletteParams};

/// A hypotrochoid: the curve traced by a point at distance `d` from the
/// center of a circle of radius `r` rolling inside a fixed circle of
/// radius `R`.
///
/// With `offset = R - r` and `k = offset / r`:
///
/// `x(t) = offset * cos(t) + d * cos(k * t)`
/// `y(t) = offset * sin(t) - d * sin(k * t)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hypotrochoid {
    params: RouletteParams,
}

impl Hypotrochoid {
    /// Creates a new hypotrochoid.
    ///
    /// # Arguments
    ///
    /// * `fixed_radius` - Radius `R` of the fixed circle
    /// * `rolling_radius` - Radius `r` of the rolling circle
    /// * `pen_distance` - Distance `d` of the tracing point from the rolling circle's center
    ///
    /// Every value is accepted. A zero rolling radius is reported when the
    /// curve is evaluated.
    #[must_use]
    pub fn new(fixed_radius: f64, rolling_radius: f64, pen_distance: f64) -> Self {
        Self::from_params(RouletteParams::new(
            fixed_radius,
            rolling_radius,
            pen_distance,
        ))
    }

    /// Angular speed of the tracing point relative to the rolling angle.
    fn frequency(&self) -> Result<f64> {
        self.params.per_rolling_radius(self.circle_offset())
    }
}

impl Roulette for Hypotrochoid {
    fn from_params(params: RouletteParams) -> Self {
        Self { params }
    }

    fn params(&self) -> &RouletteParams {
        &self.params
    }

    fn circle_offset(&self) -> f64 {
        self.params.fixed_radius - self.params.rolling_radius
    }

    fn evaluate(&self, theta: f64) -> Result<Point2> {
        let offset = self.circle_offset();
        let k = self.frequency()?;
        let d = self.params.pen_distance;
        let x = offset * theta.cos() + d * (k * theta).cos();
        let y = offset * theta.sin() - d * (k * theta).sin();
        Ok(Point2::new(x, y))
    }

    fn derivative(&self, theta: f64) -> Result<Vector2> {
        let offset = self.circle_offset();
        let k = self.frequency()?;
        let d = self.params.pen_distance;
        let dx = -offset * theta.sin() - d * k * (k * theta).sin();
        let dy = offset * theta.cos() - d * k * (k * theta).cos();
        Ok(Vector2::new(dx, dy))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::error::{GeometryError, TrochoidError};
    use crate::math::TOLERANCE;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, PI, TAU};

    #[test]
    fn offset_is_difference_of_radii() {
        let h = Hypotrochoid::new(5.0, 3.0, 5.0);
        assert_eq!(h.circle_offset(), 2.0);
    }

    #[test]
    fn evaluate_at_zero() {
        let h = Hypotrochoid::new(5.0, 3.0, 5.0);
        let p = h.evaluate(0.0).unwrap();
        assert_eq!(p, Point2::new(7.0, 0.0));
    }

    #[test]
    fn zero_angle_is_offset_plus_pen_distance() {
        for &(big_r, r, d) in &[(10.0, 3.0, 1.0), (2.0, 7.0, 4.5), (-1.0, 0.5, -3.0)] {
            let h = Hypotrochoid::new(big_r, r, d);
            let p = h.evaluate(0.0).unwrap();
            assert_eq!(p.x, (big_r - r) + d);
            assert_eq!(p.y, 0.0);
        }
    }

    #[test]
    fn evaluate_at_pi() {
        // offset = 2, k = 2: x = 2cos(pi) + 2cos(2pi) = 0, y = 0
        let h = Hypotrochoid::new(3.0, 1.0, 2.0);
        let p = h.evaluate(PI).unwrap();
        assert_abs_diff_eq!(p.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn evaluate_at_pi_over_2() {
        // x = 2cos(pi/2) + 2cos(pi) = -2, y = 2sin(pi/2) - 2sin(pi) = 2
        let h = Hypotrochoid::new(3.0, 1.0, 2.0);
        let p = h.evaluate(FRAC_PI_2).unwrap();
        assert_abs_diff_eq!(p.x, -2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.y, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn matches_direct_formula() {
        let (big_r, r, d) = (7.3, 2.1, 3.4);
        let h = Hypotrochoid::new(big_r, r, d);
        for i in 0..50 {
            let theta = f64::from(i) * 0.37 - 5.0;
            let p = h.evaluate(theta).unwrap();
            let offset = big_r - r;
            let x = offset * theta.cos() + d * ((offset / r) * theta).cos();
            let y = offset * theta.sin() - d * ((offset / r) * theta).sin();
            assert_eq!(p, Point2::new(x, y));
        }
    }

    #[test]
    fn evaluation_is_deterministic() {
        let h = Hypotrochoid::new(11.0, 4.0, 9.0);
        let first = h.evaluate(123.456).unwrap();
        for _ in 0..10 {
            assert_eq!(h.evaluate(123.456).unwrap(), first);
        }
    }

    #[test]
    fn x_is_even_and_y_is_odd() {
        let h = Hypotrochoid::new(8.0, 3.0, 2.5);
        for i in 1..40 {
            let theta = f64::from(i) * 0.29;
            let pos = h.evaluate(theta).unwrap();
            let neg = h.evaluate(-theta).unwrap();
            assert_abs_diff_eq!(neg.x, pos.x, epsilon = 1e-12);
            assert_abs_diff_eq!(neg.y, -pos.y, epsilon = 1e-12);
        }
    }

    #[test]
    fn large_angles_stay_finite() {
        let h = Hypotrochoid::new(5.0, 3.0, 5.0);
        let p = h.evaluate(1.0e9).unwrap();
        assert!(p.x.is_finite() && p.y.is_finite());
    }

    #[test]
    fn zero_rolling_radius_fails_for_every_angle() {
        let h = Hypotrochoid::new(5.0, 0.0, 1.0);
        for theta in [0.0, 1.0, -2.5, TAU] {
            let err = h.evaluate(theta).unwrap_err();
            assert!(matches!(
                err,
                TrochoidError::Geometry(GeometryError::DivisionByZero { .. })
            ));
            assert!(h.derivative(theta).is_err());
        }
    }

    #[test]
    fn derivative_matches_finite_difference() {
        let h = Hypotrochoid::new(5.0, 3.0, 5.0);
        let theta = 0.8;
        let step = 1e-6;
        let ahead = h.evaluate(theta + step).unwrap();
        let behind = h.evaluate(theta - step).unwrap();
        let numeric = (ahead - behind) / (2.0 * step);
        let analytic = h.derivative(theta).unwrap();
        assert_abs_diff_eq!(analytic.x, numeric.x, epsilon = 1e-6);
        assert_abs_diff_eq!(analytic.y, numeric.y, epsilon = 1e-6);
    }

    #[test]
    fn tangent_at_zero() {
        // dx = 0, dy = offset - d * k = 2 - 5 * (2/3) < 0 => tangent is -Y
        let h = Hypotrochoid::new(5.0, 3.0, 5.0);
        let t = h.tangent(0.0).unwrap();
        assert!((t - Vector2::new(0.0, -1.0)).norm() < 1e-9);
    }

    #[test]
    fn tangent_is_undefined_at_cusp() {
        // d = r gives a hypocycloid with cusps at theta = 0.
        let h = Hypotrochoid::new(3.0, 1.0, 1.0);
        let err = h.tangent(0.0).unwrap_err();
        assert!(matches!(
            err,
            TrochoidError::Geometry(GeometryError::ZeroVector)
        ));
    }

    #[test]
    fn rolling_center_lies_on_offset_circle() {
        let h = Hypotrochoid::new(5.0, 3.0, 5.0);
        let c = h.rolling_center(1.1);
        assert!((c.coords.norm() - 2.0).abs() < TOLERANCE);
        assert_eq!(h.rolling_center(0.0), Point2::new(2.0, 0.0));
    }

    #[test]
    fn from_params_round_trips_params() {
        let params = RouletteParams::new(4.0, 1.5, 0.5);
        let h = Hypotrochoid::from_params(params);
        assert_eq!(h.params(), &params);
    }
}
