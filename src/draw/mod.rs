//! Defines the helper trait [`DrawCurve`] for drawing sampled curves on various drawing contexts.
//!
//! A context receives the polyline approximating the curve and the control polygon it was
//! sampled from. How (and whether) axes are oriented is up to the context.
use crate::{ControlPolygon, CurvePolyline};
use std::fmt::{self, Display, Formatter};

/// Stroke settings used for drawing
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pen {
    /// Red, green and blue channel
    pub color: [u8; 3],
    /// Stroke width in canvas units
    pub width: f64,
}

impl Pen {
    /// Thick red pen used for control point markers
    pub const MARKER: Pen = Pen {
        color: [255, 0, 10],
        width: 3.0,
    };

    /// Black pen used for the curve itself
    pub const CURVE: Pen = Pen {
        color: [0, 0, 0],
        width: 2.0,
    };
}

/// Formats the pen's color as css `rgb(r,g,b)`
pub struct Rgb(pub [u8; 3]);

impl Display for Rgb {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "rgb({},{},{})", r, g, b)
    }
}

/// Radius of the markers drawn by [`DrawCurve::add_curve`]
pub const MARKER_RADIUS: f64 = 3.0;

/// Draw sampled bezier curves on different "drawing contexts" with ease.
///
/// Use different crate features to implement different contexts:
/// - `draw-svg` to draw curves as svg lines and circles
pub trait DrawCurve {
    /// Add straight lines between consecutive points of `polyline`.
    ///
    /// Polylines with less than two points don't add anything.
    fn add_polyline(&mut self, polyline: &CurvePolyline<f64>, pen: &Pen);

    /// Add a circular marker at every control point.
    fn add_markers(&mut self, polygon: &ControlPolygon<f64>, pen: &Pen, radius: f64);

    /// Add the control point markers followed by the curve using the default pens.
    fn add_curve(&mut self, polygon: &ControlPolygon<f64>, polyline: &CurvePolyline<f64>) {
        self.add_markers(polygon, &Pen::MARKER, MARKER_RADIUS);
        self.add_polyline(polyline, &Pen::CURVE);
    }
}

#[cfg(feature = "draw-svg")]
pub mod svg;
