#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::error::Result;
use crate::geometry::{Roulette, ThetaInput, Thetas};
use crate::math::{Point2, Vector2};

use super::TracePoint;

/// A roulette shape bound to the angles it is sampled at.
///
/// Parameters and angles are fixed at construction; every evaluation is a
/// pure function of them, so a curve can be shared across threads and
/// re-evaluated at any time.
#[derive(Debug, Clone)]
pub struct RouletteCurve<S> {
    shape: S,
    thetas: Thetas,
    origin: Point2,
}

impl<S: Roulette> RouletteCurve<S> {
    /// Creates a curve centered on the origin.
    ///
    /// # Arguments
    ///
    /// * `shape` - The roulette providing the parametric formulas
    /// * `thetas` - Explicit angles or a stepped range to sample
    ///
    /// # Errors
    ///
    /// Returns an error if a theta range cannot be sampled. Shape parameters
    /// are not checked here.
    pub fn new(shape: S, thetas: impl Into<ThetaInput>) -> Result<Self> {
        Ok(Self {
            shape,
            thetas: thetas.into().resolve()?,
            origin: Point2::origin(),
        })
    }

    /// Returns the curve translated so that its fixed circle is centered at
    /// `origin`.
    #[must_use]
    pub fn with_origin(mut self, origin: Point2) -> Self {
        self.origin = origin;
        self
    }

    /// Returns the underlying shape.
    #[must_use]
    pub fn shape(&self) -> &S {
        &self.shape
    }

    /// Returns the sampled angles.
    #[must_use]
    pub fn thetas(&self) -> &Thetas {
        &self.thetas
    }

    /// Returns the center of the fixed circle.
    #[must_use]
    pub fn origin(&self) -> &Point2 {
        &self.origin
    }

    /// Evaluates the curve at a single angle, translated by the origin.
    ///
    /// # Errors
    ///
    /// Returns an error if the shape cannot be evaluated.
    pub fn evaluate_point(&self, theta: f64) -> Result<Point2> {
        let point = self.shape.evaluate(theta)?;
        Ok(point + self.translation())
    }

    /// Evaluates every stored angle, in order.
    ///
    /// The output has exactly one point per angle. The first failing angle
    /// aborts the batch.
    ///
    /// # Errors
    ///
    /// Returns the error of the first angle that cannot be evaluated.
    pub fn evaluate_all(&self) -> Result<Vec<Point2>> {
        debug!(samples = self.thetas.len(), "evaluating roulette curve");
        self.thetas
            .iter()
            .map(|&theta| self.evaluate_point(theta))
            .collect::<Result<Vec<_>>>()
            .inspect_err(|err| warn!(%err, "roulette evaluation aborted"))
    }

    /// Evaluates every stored angle, keeping each angle with its point.
    ///
    /// # Errors
    ///
    /// Returns the error of the first angle that cannot be evaluated.
    pub fn trace(&self) -> Result<Vec<TracePoint>> {
        debug!(samples = self.thetas.len(), "tracing roulette curve");
        self.thetas
            .iter()
            .map(|&theta| -> Result<TracePoint> {
                Ok(TracePoint {
                    point: self.evaluate_point(theta)?,
                    theta,
                })
            })
            .collect::<Result<Vec<_>>>()
            .inspect_err(|err| warn!(%err, "roulette trace aborted"))
    }

    /// Center of the rolling circle at `theta`, translated by the origin.
    #[must_use]
    pub fn rolling_center(&self, theta: f64) -> Point2 {
        self.shape.rolling_center(theta) + self.translation()
    }

    fn translation(&self) -> Vector2 {
        self.origin.coords
    }
}

#[cfg(feature = "parallel")]
impl<S: Roulette + Sync> RouletteCurve<S> {
    /// Evaluates every stored angle in parallel.
    ///
    /// Produces the same points in the same order as
    /// [`RouletteCurve::evaluate_all`].
    ///
    /// # Errors
    ///
    /// Returns an error if any angle cannot be evaluated.
    pub fn par_evaluate_all(&self) -> Result<Vec<Point2>> {
        debug!(samples = self.thetas.len(), "evaluating roulette curve in parallel");
        self.thetas
            .as_slice()
            .par_iter()
            .map(|&theta| self.evaluate_point(theta))
            .collect::<Result<Vec<_>>>()
            .inspect_err(|err| warn!(%err, "parallel roulette evaluation aborted"))
    }
}
