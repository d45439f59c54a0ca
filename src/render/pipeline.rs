//! Parallel rendering pipeline
//!
//! Owns the output framebuffer and walks the pixel grid with a worker pool,
//! invoking one kernel evaluation per pixel. The input buffers are shared
//! read-only, the per-pixel replay state lives on each worker's stack, and
//! each output cell is written by exactly one task, so a render pass needs
//! no synchronization at all.

use rayon::prelude::*;

use crate::command::CommandList;
use crate::pixel::{Pixel, RGBAf32Pixel};
use crate::segment::{SampleCount, SegmentList};

use super::contour::rasterize_pixel;
use super::coverage::coverage_pixel;
use super::framebuffer::FrameBuffer;

pub struct Pipeline<P> where P: Pixel + From<RGBAf32Pixel> {
    framebuffer: FrameBuffer<P>,
}

impl<P> Pipeline<P> where P: Pixel + From<RGBAf32Pixel> {
    /// Create a new rendering pipeline instance
    pub fn new(framebuffer: FrameBuffer<P>) -> Pipeline<P> {
        assert!(framebuffer.width() > 0, "Framebuffer must have a non-zero width");
        assert!(framebuffer.height() > 0, "Framebuffer must have a non-zero height");

        Pipeline { framebuffer }
    }

    /// Returns a reference to the framebuffer
    pub fn framebuffer(&self) -> &FrameBuffer<P> { &self.framebuffer }
    /// Returns a mutable reference to the framebuffer
    pub fn framebuffer_mut(&mut self) -> &mut FrameBuffer<P> { &mut self.framebuffer }
    /// Consume the pipeline, returning the framebuffer
    pub fn into_framebuffer(self) -> FrameBuffer<P> { self.framebuffer }

    /// Rasterize a command stream onto the framebuffer.
    ///
    /// Every pixel replays the whole stream independently; rows are handed
    /// to the worker pool as parallel chunks.
    pub fn draw_contours(&mut self, commands: &CommandList) {
        let width = self.framebuffer.width() as usize;
        let height = self.framebuffer.height();

        debug!("rasterizing {} commands over a {}x{} grid", commands.len(), width, height);

        self.framebuffer
            .color_buffer_mut()
            .par_chunks_mut(width)
            .enumerate()
            .for_each(|(y, row)| {
                for (x, pixel) in row.iter_mut().enumerate() {
                    *pixel = P::from(rasterize_pixel(commands, x as u32, y as u32));
                }
            });
    }

    /// Estimate the coverage of a segment list over the framebuffer,
    /// writing an opaque grayscale mask with the luma replicated across the
    /// color channels.
    pub fn draw_coverage(&mut self, segments: &SegmentList, samples: SampleCount) {
        let width = self.framebuffer.width() as usize;
        let height = self.framebuffer.height();

        debug!("estimating coverage of {} segments at {} samples per axis over a {}x{} grid",
               segments.num_segments(), samples.per_axis(), width, height);

        self.framebuffer
            .color_buffer_mut()
            .par_chunks_mut(width)
            .enumerate()
            .for_each(|(y, row)| {
                for (x, pixel) in row.iter_mut().enumerate() {
                    let luma = coverage_pixel(segments, samples, x as u32, y as u32);

                    *pixel = P::from(RGBAf32Pixel { r: luma, g: luma, b: luma, a: 1.0 });
                }
            });
    }
}
