//! Axis aligned bounding boxes

use nalgebra::{RealField, Vector2};

/// Axis aligned rectangle spanned by its lowest and highest corner.
#[derive(Clone, Debug, PartialEq)]
pub struct BoundingBox<T: RealField> {
    /// Corner with the lowest coordinates
    pub min: Vector2<T>,
    /// Corner with the highest coordinates
    pub max: Vector2<T>,
}

impl<T: RealField> BoundingBox<T> {
    /// Constructs the smallest box containing every point.
    ///
    /// Returns `None` for an empty iterator.
    pub fn from_iter<I: IntoIterator<Item = Vector2<T>>>(points: I) -> Option<BoundingBox<T>> {
        let mut points = points.into_iter();
        let first = points.next()?;
        let mut bb = BoundingBox {
            min: first.clone(),
            max: first,
        };
        for p in points {
            for i in 0..2 {
                if p[i] < bb.min[i] {
                    bb.min[i] = p[i].clone();
                }
                if p[i] > bb.max[i] {
                    bb.max[i] = p[i].clone();
                }
            }
        }
        Some(bb)
    }

    /// Extent along the x-axis
    pub fn width(&self) -> T {
        self.max.x.clone() - self.min.x.clone()
    }

    /// Extent along the y-axis
    pub fn height(&self) -> T {
        self.max.y.clone() - self.min.y.clone()
    }

    /// Checks whether `point` lies inside the box or at most `tolerance` outside of it.
    pub fn contains(&self, point: &Vector2<T>, tolerance: T) -> bool {
        (0..2).all(|i| {
            self.min[i].clone() - tolerance.clone() <= point[i]
                && point[i] <= self.max[i].clone() + tolerance.clone()
        })
    }
}
