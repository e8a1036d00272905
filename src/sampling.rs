//! Uniform sampling of curves into polylines.

use crate::error::CurveError;
use nalgebra::{RealField, Vector2};
use std::ops::Deref;

/// Whether the curve's end at `t = 1` is sampled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Endpoint {
    /// Sample the half open interval `[0, 1)`
    ///
    /// The last sample lies one step before the curve's end.
    #[default]
    Excluded,

    /// Sample the closed interval `[0, 1]` using one additional sample at `t = 1`
    Included,
}

/// Configuration for sampling a curve at uniformly spaced parameters.
///
/// The interval `[0, 1]` is divided into `count` steps of equal length.
/// Sample `i` is taken at `t = i / count`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sampling {
    /// Number of steps `[0, 1]` is divided into
    pub count: usize,

    /// Whether to add a final sample at `t = 1`
    pub endpoint: Endpoint,
}

impl Default for Sampling {
    /// 100 samples at `t = 0.00, 0.01, ..., 0.99`
    fn default() -> Self {
        Sampling::new(100)
    }
}

impl Sampling {
    /// Samples `[0, 1)` in `count` steps
    pub fn new(count: usize) -> Self {
        Sampling {
            count,
            endpoint: Endpoint::Excluded,
        }
    }

    /// Samples `[0, 1]` in `count` steps i.e. using `count + 1` samples
    pub fn closed(count: usize) -> Self {
        Sampling {
            count,
            endpoint: Endpoint::Included,
        }
    }

    /// Number of samples this configuration produces
    pub fn len(&self) -> usize {
        match self.endpoint {
            Endpoint::Excluded => self.count,
            Endpoint::Included => self.count.saturating_add(1),
        }
    }

    /// Whether this configuration produces no samples at all
    ///
    /// Without any steps there is nothing to sample, not even the endpoint.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Yields the parameters to sample at in increasing order.
    ///
    /// Fails with [`CurveError::NoSamples`] if `count` is zero.
    pub fn parameters<T: RealField>(&self) -> Result<impl Iterator<Item = T>, CurveError> {
        if self.count == 0 {
            return Err(CurveError::NoSamples);
        }
        let count = usize_to_real::<T>(self.count);
        Ok((0..self.len()).map(move |i| usize_to_real::<T>(i) / count.clone()))
    }
}

/// Helper function used when a formula treats an index as a scalar
fn usize_to_real<T: RealField>(n: usize) -> T {
    nalgebra::convert::<f64, T>(n as f64)
}

/// A point on a curve together with the parameter it was evaluated at.
#[derive(Clone, Debug, PartialEq)]
pub struct CurveSample<T: RealField> {
    /// Curve parameter
    pub t: T,
    /// Point on the curve at `t`
    pub point: Vector2<T>,
}

/// Samples of a curve ordered by increasing `t`.
///
/// Connecting consecutive points by straight lines approximates the curve.
#[derive(Clone, Debug, PartialEq)]
pub struct CurvePolyline<T: RealField> {
    samples: Vec<CurveSample<T>>,
}

impl<T: RealField> Deref for CurvePolyline<T> {
    type Target = [CurveSample<T>];
    fn deref(&self) -> &Self::Target {
        &self.samples
    }
}

impl<T: RealField> CurvePolyline<T> {
    pub(crate) fn new(samples: Vec<CurveSample<T>>) -> Self {
        CurvePolyline { samples }
    }

    /// Iterates over the sampled points
    pub fn points(&self) -> impl Iterator<Item = &Vector2<T>> + '_ {
        self.samples.iter().map(|sample| &sample.point)
    }

    /// Iterates over the line segments between consecutive points
    ///
    /// A polyline of `n` points has `n - 1` segments.
    pub fn segments(&self) -> impl Iterator<Item = (&Vector2<T>, &Vector2<T>)> + '_ {
        self.samples
            .windows(2)
            .map(|pair| (&pair[0].point, &pair[1].point))
    }

    /// Unwraps the samples
    pub fn into_samples(self) -> Vec<CurveSample<T>> {
        self.samples
    }
}
