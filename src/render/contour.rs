//! Contour rasterizer kernel
//!
//! Replays a whole command stream for a single pixel, accumulating winding
//! number and minimum edge distance per contour, and compositing each
//! contour onto a frame accumulator as it closes. Each pixel is a pure
//! function of the stream and its own coordinate, so pixels can be evaluated
//! in any order, or in parallel.

use nalgebra::{Point2, Vector4};

use crate::command::{Command, CommandList};
use crate::geometry::LineSegment;
use crate::pixel::{PackedColor, RGBAf32Pixel};
use crate::utils::smoothstep;

/// How an open contour composites once it ends
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawMode {
    /// Cover everything with nonzero winding, plus a 1-unit antialiased
    /// skirt outside the shape
    Fill,
    /// Cover a band around the contour's segments, antialiased over the last
    /// unit before the stroke width
    Stroke {
        /// Stroke width in pixels
        width: f32,
    },
}

/// Accumulator for the contour currently being replayed at one pixel.
///
/// Reset at every start command and discarded when the pixel completes;
/// nothing survives across pixels.
#[derive(Debug, Clone, Copy)]
struct PixelState {
    cursor: Point2<f32>,
    color: Vector4<f32>,
    mode: DrawMode,
    winding: i32,
    min_distance: f32,
}

impl PixelState {
    fn start(start: Point2<u16>, color: PackedColor, mode: DrawMode) -> PixelState {
        PixelState {
            cursor: Point2::new(start.x as f32, start.y as f32),
            color: RGBAf32Pixel::from(color).into(),
            mode,
            winding: 0,
            min_distance: f32::INFINITY,
        }
    }

    /// Accumulate one segment from the cursor, advancing the cursor to its end
    fn line_to(&mut self, point: Point2<u16>, pixel: Point2<f32>) {
        let end = Point2::new(point.x as f32, point.y as f32);

        let segment = LineSegment::new(self.cursor, end);

        if let DrawMode::Fill = self.mode {
            self.winding += segment.winding_at(pixel);
        }

        self.min_distance = self.min_distance.min(segment.distance_to(pixel));
        self.cursor = end;
    }

    /// Fractional opacity of this contour at the pixel.
    ///
    /// A contour with no segments keeps its infinite minimum distance, where
    /// `smoothstep` saturates to 1 and the coverage to 0, so it draws
    /// nothing.
    fn coverage(&self) -> f32 {
        match self.mode {
            DrawMode::Fill => {
                if self.winding != 0 {
                    1.0
                } else {
                    1.0 - smoothstep(0.0, 1.0, self.min_distance)
                }
            }
            DrawMode::Stroke { width } => 1.0 - smoothstep(width - 1.0, width, self.min_distance),
        }
    }

    /// Composite the closed contour onto the frame accumulator.
    ///
    /// All four channels are blended by the coverage-scaled alpha, then the
    /// result is rescaled to unit alpha. Deliberately not the standard
    /// `over` operator.
    fn composite(&self, frame: Vector4<f32>) -> Vector4<f32> {
        let alpha = self.color.w * self.coverage();

        let blended = self.color * alpha + frame * (1.0 - alpha);

        // blended.w stays positive: the frame starts at alpha 1 and this
        // division keeps it there
        blended / blended.w
    }
}

/// Produce the color of one pixel by replaying an entire command stream.
///
/// Pure function of the stream and the pixel coordinate; there is no
/// cross-pixel state, so any partitioning of the pixel grid over workers is
/// sound. Replay stops at the stream terminator regardless of what the list
/// holds beyond it.
pub fn rasterize_pixel(commands: &CommandList, x: u32, y: u32) -> RGBAf32Pixel {
    let pixel = Point2::new(x as f32, y as f32);

    // The frame accumulator starts as opaque black and is never read before written
    let mut frame = Vector4::new(0.0, 0.0, 0.0, 1.0);

    let mut state = None;

    for command in commands.commands() {
        match *command {
            Command::StartFill { start, color } => {
                state = Some(PixelState::start(start, color, DrawMode::Fill));
            }
            Command::StartStroke { start, color, width } => {
                state = Some(PixelState::start(start, color, DrawMode::Stroke { width: width as f32 }));
            }
            Command::LineTo { point } => {
                if let Some(ref mut state) = state {
                    state.line_to(point, pixel);
                }
            }
            Command::EndContour => {
                if let Some(state) = state.take() {
                    frame = state.composite(frame);
                }
            }
            Command::LastCommand => break,
        }
    }

    frame.into()
}
