#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

pub mod bernstein;
pub mod bounding_box;
pub mod draw;
pub mod error;
pub mod graham_scan;
pub mod polygon;
pub mod sampling;

pub use crate::error::CurveError;
pub use crate::polygon::{evaluate, sample_curve, ControlPolygon};
pub use crate::sampling::{CurvePolyline, CurveSample, Endpoint, Sampling};
