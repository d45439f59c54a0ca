//! Error types for the canvas input validation boundaries

use thiserror::Error;

/// Errors produced when canvas inputs are first constructed.
///
/// Every malformed input is rejected here, once, at construction; the
/// per-pixel kernels assume valid inputs and never validate anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CanvasError {
    /// A raw command stream has no terminator, so replay would run off the end
    #[error("command stream has no terminator")]
    UnterminatedStream,
    /// A `LineTo` appeared outside of any open contour
    #[error("LineTo at command index {0} is outside of any contour")]
    StrayLineTo(usize),
    /// An `EndContour` appeared outside of any open contour
    #[error("EndContour at command index {0} is outside of any contour")]
    StrayEndContour(usize),
    /// A contour was started but never closed
    #[error("contour started at command index {0} is never closed")]
    UnclosedContour(usize),
    /// A flat point list holds an odd number of points
    #[error("segment list holds {0} points, which cannot be paired into segments")]
    UnpairedSegmentPoint(usize),
    /// The samples-per-axis parameter is outside the supported range
    #[error("{0} samples per axis is outside the supported range of 1 to 5")]
    InvalidSampleCount(u32),
}

pub type CanvasResult<T> = Result<T, CanvasError>;
