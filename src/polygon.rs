//! Control polygons and their bezier curve.

use crate::bernstein::{bernstein_weights, binomial_coefficients};
use crate::bounding_box::BoundingBox;
use crate::error::CurveError;
use crate::graham_scan::convex_hull;
use crate::sampling::{CurvePolyline, CurveSample, Sampling};
use nalgebra::{RealField, Vector2};
use smallvec::SmallVec;
use std::ops::Deref;

type Points<T> = SmallVec<[Vector2<T>; 5]>;

/// Ordered control points `P_0, ..., P_n` of a bezier curve of degree `n`.
///
/// A polygon always contains at least one point and can't be changed after construction.
/// Duplicate points are allowed; degree 0 (a single stationary point) and degree 1 (a straight
/// line) are valid curves.
#[derive(Clone, Debug, PartialEq)]
pub struct ControlPolygon<T: RealField> {
    points: Points<T>,
    /// `C(n, 0), ..., C(n, n)` converted into `T`
    coefficients: SmallVec<[T; 8]>,
}

impl<T: RealField> Deref for ControlPolygon<T> {
    type Target = [Vector2<T>];
    fn deref(&self) -> &Self::Target {
        &self.points
    }
}

impl<T: RealField> ControlPolygon<T> {
    /// Builds a polygon from its control points.
    ///
    /// Fails with [`CurveError::EmptyPolygon`] if there are no points.
    /// Any number of points beyond that is accepted.
    pub fn new<I: IntoIterator<Item = Vector2<T>>>(points: I) -> Result<Self, CurveError> {
        let points: Points<T> = points.into_iter().collect();
        if points.is_empty() {
            return Err(CurveError::EmptyPolygon);
        }
        Ok(ControlPolygon {
            coefficients: binomial_coefficients(points.len() - 1),
            points,
        })
    }

    /// Returns the curve's degree which is one lower than its number of control points
    pub fn degree(&self) -> usize {
        self.points.len() - 1
    }

    /// The control points in order
    pub fn points(&self) -> &[Vector2<T>] {
        &self.points
    }

    /// Get the point on the curve at position `t`.
    ///
    /// Sums up the control points weighted by the Bernstein polynomials:
    /// `sum C(n, i) * (1 - t)^(n - i) * t^i * P_i`.
    ///
    /// `t` is expected to be in `[0, 1]`, but any value is accepted. Values outside the interval
    /// extrapolate the curve and non-finite values propagate into the result.
    pub fn evaluate(&self, t: T) -> Vector2<T> {
        match &self.points[..] {
            [p] => p.clone(),
            points => {
                let mut sum = Vector2::zeros();
                for (p, w) in points.iter().zip(bernstein_weights(&self.coefficients, t)) {
                    sum += p * w;
                }
                sum
            }
        }
    }

    /// Get the point on the curve at position `t` using de castlejau's algorithm.
    ///
    /// Yields the same points as [`ControlPolygon::evaluate`] up to rounding.
    pub fn castlejau_eval(&self, t: T) -> Vector2<T> {
        let t_inv = T::one() - t.clone();
        let mut points = self.points.clone();
        for len in (1..points.len()).rev() {
            for i in 0..len {
                points[i] = &points[i] * t_inv.clone() + &points[i + 1] * t.clone();
            }
        }
        points[0].clone()
    }

    /// Evaluates the curve at uniformly spaced parameters.
    ///
    /// With `Sampling::default()` this produces 100 samples at `t = 0.00, 0.01, ..., 0.99`;
    /// the curve's end at `t = 1` is only included with [`Endpoint::Included`].
    ///
    /// Fails with [`CurveError::NoSamples`] if `sampling.count` is zero.
    ///
    /// [`Endpoint::Included`]: crate::sampling::Endpoint::Included
    pub fn sample(&self, sampling: &Sampling) -> Result<CurvePolyline<T>, CurveError> {
        let samples = sampling
            .parameters::<T>()?
            .map(|t| CurveSample {
                point: self.evaluate(t.clone()),
                t,
            })
            .collect();
        Ok(CurvePolyline::new(samples))
    }

    /// Constructs an axis aligned bounding box containing all control points.
    ///
    /// This box will also contain the curve between `t = 0` and `t = 1`,
    /// but can highly overestimate it.
    /// For a more precise boundary consider: [`convex_hull`]
    ///
    /// [`convex_hull`]: ControlPolygon::convex_hull
    pub fn bounding_box(&self) -> BoundingBox<T> {
        let first = self.points[0].clone();
        BoundingBox::from_iter(self.points.iter().cloned()).unwrap_or(BoundingBox {
            min: first.clone(),
            max: first,
        })
    }

    /// Computes the control points' convex hull using [graham scan](https://en.wikipedia.org/wiki/Graham_scan).
    pub fn convex_hull(&self) -> Vec<Vector2<T>> {
        convex_hull(self.points.to_vec())
    }
}

/// Evaluates the bezier curve defined by `control_points` at `t`.
///
/// See [`ControlPolygon::evaluate`]. Fails if `control_points` is empty.
pub fn evaluate<T: RealField>(
    control_points: &[Vector2<T>],
    t: T,
) -> Result<Vector2<T>, CurveError> {
    let polygon = ControlPolygon::new(control_points.iter().cloned())?;
    Ok(polygon.evaluate(t))
}

/// Samples the bezier curve defined by `control_points` at `t = i / sample_count`
/// for `i = 0..sample_count`.
///
/// The curve's end at `t = 1` is not part of the result.
/// Fails if `control_points` is empty or `sample_count` is zero.
pub fn sample_curve<T: RealField>(
    control_points: &[Vector2<T>],
    sample_count: usize,
) -> Result<CurvePolyline<T>, CurveError> {
    let polygon = ControlPolygon::new(control_points.iter().cloned())?;
    polygon.sample(&Sampling::new(sample_count))
}
