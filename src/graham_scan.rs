//! Implementation of [Graham scan](https://en.wikipedia.org/wiki/Graham_scan) for constructing
//! convex hulls.
//!
//! A bezier curve never leaves the convex hull of its control points for `t` in `[0, 1]`,
//! which makes the hull a cheap and tight check for sampled points.

use crate::bounding_box::BoundingBox;
use nalgebra::{RealField, Vector2};
use std::cmp::Ordering;

/// Different types of turns
///
/// This enum is returned by [`turn_type`] as a more readable duplicate of [`Ordering`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Turn {
    /// A left turn
    ///
    /// i.e. cross product > 0
    Left,

    /// No turn
    ///
    /// i.e. cross product = 0 (or not comparable)
    None,

    /// A right turn
    ///
    /// i.e. cross product < 0
    Right,
}

/// Third component of the 3d cross product between `y - x` and `z - x`.
pub fn cross<T: RealField>(x: &Vector2<T>, y: &Vector2<T>, z: &Vector2<T>) -> T {
    let a = y - x;
    let b = z - x;
    a.x.clone() * b.y.clone() - a.y.clone() * b.x.clone()
}

/// Identifies the turn 3 points form by computing the cross product of their differences.
pub fn turn_type<T: RealField>(x: &Vector2<T>, y: &Vector2<T>, z: &Vector2<T>) -> Turn {
    match cross(x, y, z).partial_cmp(&T::zero()) {
        Some(Ordering::Less) => Turn::Right,
        Some(Ordering::Greater) => Turn::Left,
        Some(Ordering::Equal) | None => Turn::None,
    }
}

/// Sorts points in increasing order of the angle they and `origin` make with the x-axis.
fn sort_angle<T: RealField>(origin: &Vector2<T>, points: &mut [Vector2<T>]) {
    points.sort_by(|x, y| match turn_type(origin, x, y) {
        Turn::Left => Ordering::Less,
        Turn::None => {
            let dist_x = (x - origin).norm_squared();
            let dist_y = (y - origin).norm_squared();
            dist_x.partial_cmp(&dist_y).unwrap_or(Ordering::Equal)
        }
        Turn::Right => Ordering::Greater,
    });
}

/// Computes the convex hull, a polygon, for a set of points.
///
/// The polygon is given as a set of its vertecies in counterclockwise order starting at the lowest
/// one. Points with a non-finite coordinate are skipped; without any finite point the hull is empty.
pub fn convex_hull<T: RealField>(mut points: Vec<Vector2<T>>) -> Vec<Vector2<T>> {
    // NaN and infinities can't be ordered by angle
    points.retain(|p| p.x.is_finite() && p.y.is_finite());
    if points.is_empty() {
        return points;
    }

    // Find point with lowest y-coord (if equal lowest x)
    let mut lowest_i = 0;
    for (i, p) in points.iter().enumerate().skip(1) {
        let lowest = &points[lowest_i];
        if p.y < lowest.y || (p.y == lowest.y && p.x < lowest.x) {
            lowest_i = i;
        }
    }

    // Add lowest point to stack and sort rest by angle
    let mut stack = Vec::with_capacity(points.len());
    stack.push(points.swap_remove(lowest_i));
    sort_angle(&stack[0], &mut points);

    // Populate stack only allowing left turns along the hull's boundary
    for p in points.into_iter() {
        while {
            let l = stack.len();
            l > 1 && turn_type(&stack[l - 2], &stack[l - 1], &p) == Turn::Right
        } {
            stack.pop();
        }
        stack.push(p);
    }

    stack
}

/// Checks whether `point` lies inside a hull returned by [`convex_hull`].
///
/// Points at most `tolerance` outside of the hull's edges are still accepted.
/// Degenerate hulls (a single point or a line) are handled as well.
pub fn hull_contains<T: RealField>(hull: &[Vector2<T>], point: &Vector2<T>, tolerance: T) -> bool {
    let bb = match BoundingBox::from_iter(hull.iter().cloned()) {
        Some(bb) => bb,
        None => return false,
    };
    if !bb.contains(point, tolerance.clone()) {
        return false;
    }
    if hull.len() < 3 {
        // The bounding box of one or two points only needs the distance to their line checked
        let (a, b) = (&hull[0], &hull[hull.len() - 1]);
        let length = (b - a).norm();
        if length <= tolerance {
            return true;
        }
        let limit = tolerance * length;
        let distance = cross(a, b, point);
        return -limit.clone() <= distance && distance <= limit;
    }
    hull.iter()
        .zip(hull.iter().cycle().skip(1))
        .all(|(a, b)| cross(a, b, point) >= -(tolerance.clone() * (b - a).norm()))
}
