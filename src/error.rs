//! Errors returned when a curve can't be built or sampled.

use derive_more::derive::{Display, Error};

/// An error indicating that a curve couldn't be evaluated or sampled because of malformed inputs.
///
/// Every variant stems from static configuration, so callers should treat it as a programming
/// error instead of retrying.
#[derive(Debug, Error, Display, Clone, Copy, PartialEq, Eq)]
pub enum CurveError {
    /// The control polygon contained no points, so the curve's degree is undefined.
    #[display("control polygon must contain at least one point")]
    EmptyPolygon,

    /// A curve was asked for zero samples.
    #[display("sample count must be at least one")]
    NoSamples,
}

impl CurveError {
    /// Whether the error was caused by the caller's input.
    ///
    /// This is true for every variant; evaluation itself never fails on valid input.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, CurveError::EmptyPolygon | CurveError::NoSamples)
    }
}
