//! Binomial coefficients and the Bernstein polynomial basis.
//!
//! The `i`-th Bernstein polynomial of degree `n` is `C(n, i) * (1 - t)^(n - i) * t^i`.
//! Its binomial coefficient is computed exactly on integers before being converted into the
//! curve's scalar type, so curves of any degree don't accumulate rounding errors.

use nalgebra::RealField;
use num::{BigUint, One, ToPrimitive};
use smallvec::SmallVec;
use std::ops::Add;

/// Computes a given layer of pascal's triangle
///
/// i.e. the binomial coefficients `C(layer, 0), ..., C(layer, layer)`.
pub fn pascal_triangle<N>(layer: usize) -> Vec<N>
where
    N: Add<Output = N> + One + Clone,
{
    let mut old_layer: Vec<N> = Vec::with_capacity(layer + 1);
    let mut new_layer = Vec::with_capacity(layer + 1);
    new_layer.push(N::one());

    for _ in 0..layer {
        old_layer.clone_from(&new_layer);

        new_layer.push(N::one());
        for i in 1..new_layer.len() - 1 {
            new_layer[i] = old_layer[i - 1].clone() + old_layer[i].clone();
        }
    }

    new_layer
}

/// Computes the binomial coefficients for a curve of the given degree as `T`.
///
/// The coefficients are computed exactly for every degree; the conversion into `T` rounds
/// once, when the value no longer fits the float's mantissa, and saturates to infinity past
/// `f64::MAX`.
pub fn binomial_coefficients<T: RealField>(degree: usize) -> SmallVec<[T; 8]> {
    pascal_triangle::<BigUint>(degree)
        .into_iter()
        .map(|c| nalgebra::convert::<f64, T>(c.to_f64().unwrap_or(f64::INFINITY)))
        .collect()
}

/// Evaluates every Bernstein polynomial of a degree at `t`.
///
/// `coefficients` are the degree's binomial coefficients (see [`binomial_coefficients`]).
/// For `t` in `[0, 1]` the returned weights sum up to one (up to rounding).
/// Far outside of that interval the powers can overflow, so the weights may become non-finite.
pub fn bernstein_weights<T: RealField>(coefficients: &[T], t: T) -> SmallVec<[T; 8]> {
    let n = coefficients.len().saturating_sub(1);
    let t_inv = T::one() - t.clone();
    coefficients
        .iter()
        .enumerate()
        .map(|(i, c)| {
            c.clone() * t_inv.clone().powi((n - i) as i32) * t.clone().powi(i as i32)
        })
        .collect()
}
