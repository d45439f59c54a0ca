//! Canvas command streams
//!
//! A command stream describes fill and stroke contours as an ordered list of
//! commands, replayed in full for every pixel. Streams come either from the
//! [`CommandRecorder`], which makes invalid command orderings unrepresentable,
//! or from [`CommandList::from_commands`], which checks a raw vector once at
//! construction so replay never has to.

use std::marker::PhantomData;

use nalgebra::Point2;

use crate::error::{CanvasError, CanvasResult};
use crate::pixel::{PackedColor, RGBAu8Pixel};

/// A single canvas command.
///
/// A well-formed stream is `(StartFill | StartStroke), LineTo*, EndContour`,
/// repeated, ending in `LastCommand`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Begin a fill contour at a start point with a packed draw color
    StartFill {
        /// Contour start point, which becomes the initial cursor
        start: Point2<u16>,
        /// Packed draw color for the whole contour
        color: PackedColor,
    },
    /// Begin a stroke contour at a start point with a packed draw color and a stroke width
    StartStroke {
        /// Contour start point, which becomes the initial cursor
        start: Point2<u16>,
        /// Packed draw color for the whole contour
        color: PackedColor,
        /// Stroke width in pixels
        width: u16,
    },
    /// Draw a line from the contour cursor to this point, advancing the cursor
    LineTo {
        /// Line end point
        point: Point2<u16>,
    },
    /// Close out the open contour and composite it onto the frame
    EndContour,
    /// End of stream; replay stops here no matter what follows
    LastCommand,
}

/// An ordered, validated canvas command stream.
///
/// The stream is a dynamically sized sequence validated once at
/// construction, so replaying it performs no per-command checking. Anything
/// after the first `LastCommand` is carried along but never replayed, the
/// same way a reused fixed-capacity buffer carries a stale tail.
#[derive(Debug, Clone)]
pub struct CommandList {
    commands: Vec<Command>,
}

impl CommandList {
    /// Validate a raw command vector into a replayable stream.
    ///
    /// Checks, in one pass, that the commands up to the first `LastCommand`
    /// form well-shaped contours and that the terminator exists at all.
    pub fn from_commands(commands: Vec<Command>) -> CanvasResult<CommandList> {
        let mut open = None;

        for (index, command) in commands.iter().enumerate() {
            match *command {
                Command::StartFill { .. } |
                Command::StartStroke { .. } => {
                    if let Some(start) = open {
                        return Err(CanvasError::UnclosedContour(start));
                    }

                    open = Some(index);
                }
                Command::LineTo { .. } => {
                    if open.is_none() {
                        return Err(CanvasError::StrayLineTo(index));
                    }
                }
                Command::EndContour => {
                    if open.take().is_none() {
                        return Err(CanvasError::StrayEndContour(index));
                    }
                }
                Command::LastCommand => {
                    return if let Some(start) = open {
                        Err(CanvasError::UnclosedContour(start))
                    } else {
                        debug!("validated command stream of {} commands", index + 1);

                        Ok(CommandList { commands })
                    };
                }
            }
        }

        Err(CanvasError::UnterminatedStream)
    }

    /// The commands in replay order
    #[inline(always)]
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Total number of commands held, terminator included
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

/// Typestate marker for a recorder with no open contour
#[derive(Debug)]
pub struct Ready;

/// Typestate marker for a recorder inside an open contour
#[derive(Debug)]
pub struct InContour;

/// Records canvas commands, producing a well-formed stream by construction.
///
/// The typestate parameter only admits valid command orderings: a contour
/// must be started before lines are added to it and closed before the next
/// one starts or the stream is finished, so the resulting [`CommandList`]
/// needs no revalidation.
///
/// All drawing functions use physical pixel coordinates with `(0, 0)` at the
/// top left. It is the responsibility of the caller to handle DPI scaling.
#[derive(Debug)]
pub struct CommandRecorder<State> {
    commands: Vec<Command>,
    _state: PhantomData<State>,
}

impl CommandRecorder<Ready> {
    pub fn new() -> CommandRecorder<Ready> {
        CommandRecorder {
            commands: Vec::new(),
            _state: PhantomData,
        }
    }

    /// Begin a fill contour at the given start point
    pub fn start_fill(mut self, start: Point2<u16>, color: RGBAu8Pixel) -> CommandRecorder<InContour> {
        self.commands.push(Command::StartFill {
            start,
            color: PackedColor::pack(color),
        });

        self.transition()
    }

    /// Begin a stroke contour at the given start point
    pub fn start_stroke(mut self, start: Point2<u16>, color: RGBAu8Pixel, width: u16) -> CommandRecorder<InContour> {
        self.commands.push(Command::StartStroke {
            start,
            color: PackedColor::pack(color),
            width,
        });

        self.transition()
    }

    /// Terminate the stream and return it ready for replay
    pub fn finish(mut self) -> CommandList {
        self.commands.push(Command::LastCommand);

        CommandList { commands: self.commands }
    }
}

impl CommandRecorder<InContour> {
    /// Draw a line from the contour cursor to the given point
    pub fn line_to(mut self, point: Point2<u16>) -> CommandRecorder<InContour> {
        self.commands.push(Command::LineTo { point });

        self
    }

    /// Close the contour, compositing it onto the frame during replay
    pub fn end_contour(mut self) -> CommandRecorder<Ready> {
        self.commands.push(Command::EndContour);

        self.transition()
    }
}

impl<State> CommandRecorder<State> {
    fn transition<Next>(self) -> CommandRecorder<Next> {
        CommandRecorder {
            commands: self.commands,
            _state: PhantomData,
        }
    }
}

impl Default for CommandRecorder<Ready> {
    fn default() -> CommandRecorder<Ready> {
        CommandRecorder::new()
    }
}
