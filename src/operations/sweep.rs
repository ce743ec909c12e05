use tracing::debug;

use crate::error::{OperationError, Result};
use crate::evaluation::RouletteCurve;
use crate::geometry::{Roulette, RouletteParams, ThetaInput};
use crate::math::Point2;

/// A curve parameter that is either held fixed or stepped through a list of
/// values.
#[derive(Debug, Clone, PartialEq)]
pub enum SweepValue {
    /// A single value shared by every curve.
    Fixed(f64),
    /// One curve per value, in order.
    Varied(Vec<f64>),
}

impl SweepValue {
    fn values(&self) -> &[f64] {
        match self {
            Self::Fixed(value) => std::slice::from_ref(value),
            Self::Varied(values) => values,
        }
    }

    fn is_varied(&self) -> bool {
        matches!(self, Self::Varied(_))
    }
}

impl From<f64> for SweepValue {
    fn from(value: f64) -> Self {
        Self::Fixed(value)
    }
}

impl From<Vec<f64>> for SweepValue {
    fn from(values: Vec<f64>) -> Self {
        Self::Varied(values)
    }
}

/// Builds a family of curves where one of `R`, `r` or `d` varies and the
/// others stay fixed.
///
/// Curves are produced by iterating the fixed radius values, then the rolling
/// radius values, then the pen distance values. Every curve shares the same
/// angles and origin.
pub struct ParameterSweep {
    fixed_radius: SweepValue,
    rolling_radius: SweepValue,
    pen_distance: SweepValue,
    thetas: ThetaInput,
    origin: Point2,
}

impl ParameterSweep {
    /// Creates a new `ParameterSweep` operation.
    #[must_use]
    pub fn new(
        fixed_radius: impl Into<SweepValue>,
        rolling_radius: impl Into<SweepValue>,
        pen_distance: impl Into<SweepValue>,
        thetas: impl Into<ThetaInput>,
    ) -> Self {
        Self {
            fixed_radius: fixed_radius.into(),
            rolling_radius: rolling_radius.into(),
            pen_distance: pen_distance.into(),
            thetas: thetas.into(),
            origin: Point2::origin(),
        }
    }

    /// Centers every produced curve at `origin`.
    #[must_use]
    pub fn with_origin(mut self, origin: Point2) -> Self {
        self.origin = origin;
        self
    }

    /// Executes the sweep, returning one curve per parameter combination.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::MultipleVaried`] if more than one parameter
    /// is varied, or an error if the theta range cannot be sampled.
    pub fn execute<S: Roulette>(&self) -> Result<Vec<RouletteCurve<S>>> {
        let varied = [&self.fixed_radius, &self.rolling_radius, &self.pen_distance]
            .into_iter()
            .filter(|value| value.is_varied())
            .count();
        if varied > 1 {
            return Err(OperationError::MultipleVaried { count: varied }.into());
        }

        // Resolved once so every curve shares one theta allocation.
        let thetas = self.thetas.clone().resolve()?;

        let mut curves = Vec::new();
        for &fixed_radius in self.fixed_radius.values() {
            for &rolling_radius in self.rolling_radius.values() {
                for &pen_distance in self.pen_distance.values() {
                    let params = RouletteParams::new(fixed_radius, rolling_radius, pen_distance);
                    let curve = RouletteCurve::new(S::from_params(params), thetas.clone())?;
                    curves.push(curve.with_origin(self.origin));
                }
            }
        }

        debug!(
            curves = curves.len(),
            samples = thetas.len(),
            "expanded parameter sweep"
        );
        Ok(curves)
    }
}
