//! Draw a sampled curve in a svg

use crate::draw::{DrawCurve, Pen, Rgb};
use crate::{ControlPolygon, CurvePolyline};
use nalgebra::Vector2;
use std::fmt::{self, Display, Formatter};

/// Svg document collecting elements to draw.
///
/// With `flip_y` set, the y-axis points upwards: a point `(x, y)` is drawn at
/// `(x, height - y)`, so curves given in "mathematical" coordinates don't appear upside down.
///
/// ```
/// # use nalgebra::Vector2;
/// use nbezier_sketch::draw::DrawCurve;
/// use nbezier_sketch::draw::svg::SVG;
/// use nbezier_sketch::{ControlPolygon, Sampling};
///
/// let polygon = ControlPolygon::new([Vector2::new(0.0, 0.0), Vector2::new(10.0, 10.0)]).unwrap();
/// let polyline = polygon.sample(&Sampling::closed(1)).unwrap();
///
/// let mut svg = SVG::new(20.0, 20.0);
/// svg.add_curve(&polygon, &polyline);
/// assert!(svg.to_string().contains("<line x1=\"0\" y1=\"20\" x2=\"10\" y2=\"10\""));
/// ```
pub struct SVG {
    /// Canvas width
    pub width: f64,
    /// Canvas height
    pub height: f64,
    /// Whether to mirror y-coordinates against `height`
    pub flip_y: bool,
    /// Elements in drawing order
    pub elements: Vec<Box<dyn Display>>,
}

impl SVG {
    /// Empty document of the given size with a flipped y-axis
    pub fn new(width: f64, height: f64) -> Self {
        SVG {
            width,
            height,
            flip_y: true,
            elements: Vec::new(),
        }
    }

    /// Append an arbitrary element
    pub fn add_elem<E: Display + 'static>(&mut self, elem: E) {
        self.elements.push(Box::new(elem));
    }

    /// Map a curve point to canvas coordinates
    pub fn to_canvas(&self, p: &Vector2<f64>) -> Vector2<f64> {
        if self.flip_y {
            Vector2::new(p.x, self.height - p.y)
        } else {
            *p
        }
    }
}

impl DrawCurve for SVG {
    fn add_polyline(&mut self, polyline: &CurvePolyline<f64>, pen: &Pen) {
        let lines: Vec<_> = polyline
            .segments()
            .map(|(from, to)| Line {
                from: self.to_canvas(from),
                to: self.to_canvas(to),
                pen: *pen,
            })
            .collect();
        for line in lines {
            self.add_elem(line);
        }
    }

    fn add_markers(&mut self, polygon: &ControlPolygon<f64>, pen: &Pen, radius: f64) {
        for p in polygon.iter() {
            let center = self.to_canvas(p);
            self.add_elem(Circle {
                center,
                radius,
                pen: *pen,
            });
        }
    }
}

impl Display for SVG {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "<svg width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\" xmlns=\"http://www.w3.org/2000/svg\">",
            self.width, self.height, self.width, self.height
        )?;
        for elem in self.elements.iter() {
            elem.fmt(f)?;
        }
        writeln!(f, "</svg>")
    }
}

/// Straight line between two canvas points
pub struct Line {
    /// Start point
    pub from: Vector2<f64>,
    /// End point
    pub to: Vector2<f64>,
    /// Stroke
    pub pen: Pen,
}

impl Display for Line {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>",
            self.from.x,
            self.from.y,
            self.to.x,
            self.to.y,
            Rgb(self.pen.color),
            self.pen.width
        )
    }
}

/// Outlined circle
pub struct Circle {
    /// Center in canvas coordinates
    pub center: Vector2<f64>,
    /// Radius
    pub radius: f64,
    /// Outline
    pub pen: Pen,
}

impl Display for Circle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" stroke=\"{}\" stroke-width=\"{}\" fill=\"white\"/>",
            self.center.x,
            self.center.y,
            self.radius,
            Rgb(self.pen.color),
            self.pen.width
        )
    }
}
