use nalgebra::Vector2;
use nbezier_sketch::draw::svg::SVG;
use nbezier_sketch::draw::DrawCurve;
use nbezier_sketch::{ControlPolygon, CurveError, Endpoint, Sampling};

/// Canvas size in pixels
const WIDTH: f64 = 400.0;
const HEIGHT: f64 = 300.0;

/// Control points in pixels with the y-axis pointing upwards
const CONTROL_POINTS: [(f64, f64); 5] = [
    (210.0, 135.0),
    (200.0, 205.0),
    (130.0, 110.0),
    (200.0, 100.0),
    (210.0, 50.0),
];

fn render(sampling: &Sampling) -> Result<SVG, CurveError> {
    let polygon = ControlPolygon::new(CONTROL_POINTS.iter().map(|&(x, y)| Vector2::new(x, y)))?;
    let polyline = polygon.sample(sampling)?;

    let mut svg = SVG::new(WIDTH, HEIGHT);
    svg.add_curve(&polygon, &polyline);
    Ok(svg)
}

fn main() {
    // `--closed` also draws the last step up to the final control point
    let mut sampling = Sampling::default();
    if std::env::args().skip(1).any(|arg| arg == "--closed") {
        sampling.endpoint = Endpoint::Included;
    }

    match render(&sampling) {
        Ok(svg) => print!("{}", svg),
        Err(err) => {
            eprintln!("error: {}", err);
            std::process::exit(1);
        }
    }
}
