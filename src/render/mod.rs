//! Rasterizer kernels and the parallel rendering pipeline

pub mod framebuffer;
pub mod contour;
pub mod coverage;
pub mod pipeline;

pub use self::framebuffer::FrameBuffer;
pub use self::contour::{rasterize_pixel, DrawMode};
pub use self::coverage::{coverage_mask, coverage_pixel, SampleMask};
pub use self::pipeline::Pipeline;
