//! Minimalist framebuffer structure with an emphasis on performance

use crate::pixel::Pixel;

/// Minimalist framebuffer structure with an emphasis on performance
///
/// It contains a single color buffer, written exactly once per render pass.
pub struct FrameBuffer<P: Pixel> {
    width: u32,
    height: u32,
    color: Vec<P>,
}

impl<P: Pixel> FrameBuffer<P> {
    /// Create a new framebuffer with every pixel set to the given value
    pub fn new_with(width: u32, height: u32, pixel: P) -> FrameBuffer<P> {
        FrameBuffer {
            width,
            height,
            color: vec![pixel; width as usize * height as usize],
        }
    }

    /// Create a new framebuffer filled with empty pixels
    pub fn new(width: u32, height: u32) -> FrameBuffer<P> {
        FrameBuffer::new_with(width, height, P::empty())
    }

    /// Get the width of the framebuffer in pixels
    #[inline(always)]
    pub fn width(&self) -> u32 { self.width }

    /// Get the height of the framebuffer in pixels
    #[inline(always)]
    pub fn height(&self) -> u32 { self.height }

    /// Check if some x and y coordinate is a valid pixel coordinate
    #[inline(always)]
    pub fn check_coordinate(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }

    /// Set every pixel to the given value
    pub fn clear(&mut self, pixel: P) {
        for p in &mut self.color {
            *p = pixel;
        }
    }

    /// Get a reference to the pixel at the given coordinate.
    ///
    /// No bounds checking is performed for performance reasons,
    /// so bounds should be checked elsewhere.
    #[inline]
    pub unsafe fn pixel(&self, x: u32, y: u32) -> &P {
        self.color.get_unchecked((x + y * self.width) as usize)
    }

    /// Get a mutable reference to the pixel at the given coordinate.
    ///
    /// No bounds checking is performed for performance reasons,
    /// so bounds should be checked elsewhere.
    #[inline]
    pub unsafe fn pixel_mut(&mut self, x: u32, y: u32) -> &mut P {
        self.color.get_unchecked_mut((x + y * self.width) as usize)
    }

    /// The color buffer in row-major order
    #[inline(always)]
    pub fn color_buffer(&self) -> &[P] {
        &self.color
    }

    /// The color buffer in row-major order
    #[inline(always)]
    pub fn color_buffer_mut(&mut self) -> &mut [P] {
        &mut self.color
    }
}
