//! Software rasterizer for 2D vector canvases in Rust
//!
//! [Documentation](https://docs.rs/softcanvas/)
//!
//! ### Example:
//!
//! See the [README.md](https://github.com/novacrazy/rust-softcanvas/blob/master/README.md) for examples.
//!
//! ### Current Features:
//!
//! * Contour rasterization driven by a replayable command stream of fill and stroke contours.
//! * Nonzero-winding fills and distance-falloff strokes, both with antialiased edges.
//! * Supersampled even-odd coverage masks for line-segment polygon boundaries.
//! * Pixel-parallel rendering with Rayon.
//! * Every pixel is a pure function of the input buffers, written exactly once per pass.
//! * Typestate command recorder, so malformed command streams don't compile.
//! * Raw command vectors and segment lists are validated once at construction,
//! never inside the per-pixel kernels.
//! * Flexible framebuffer generic over pixel formats.
//! * Includes `f32` and `u8` RGBA color formats, and
//! nalgebra's `Vector4<f32>` can also be used as a pixel.
//! * Built-in compatibility with the `image` crate, using the `image_compat` cargo feature.
//!
//! ### Planned Features:
//!
//! * Quadratic and cubic bezier contour segments, flattened onto the existing line machinery.
//! * Bounding-box bucketing of contours, so pixels skip command replay for
//! contours that can't reach them.

#[macro_use]
extern crate log;
extern crate nalgebra;
extern crate rayon;
extern crate thiserror;

#[cfg(feature = "image_compat")]
extern crate image;

pub mod error;
pub mod utils;
pub mod pixel;
pub mod geometry;
pub mod command;
pub mod segment;
pub mod render;

#[cfg(feature = "image_compat")]
pub mod image_compat;

pub use crate::error::{CanvasError, CanvasResult};
pub use crate::pixel::{PackedColor, Pixel, RGBAf32Pixel, RGBAu8Pixel};
pub use crate::geometry::LineSegment;
pub use crate::command::{Command, CommandList, CommandRecorder};
pub use crate::segment::{SampleCount, SegmentList};
pub use crate::render::{FrameBuffer, Pipeline};
