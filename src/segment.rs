//! Flat line-segment lists for coverage estimation

use nalgebra::Point2;

use crate::error::{CanvasError, CanvasResult};
use crate::geometry::LineSegment;

/// Samples per axis for the supersampled coverage kernel.
///
/// Validated on construction: the kernel divides by S² and packs S² parity
/// bits into a single mask word, so S must lie in `1..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleCount(u32);

impl SampleCount {
    /// Largest supported samples-per-axis value
    pub const MAX: u32 = 5;

    pub fn new(per_axis: u32) -> CanvasResult<SampleCount> {
        if per_axis >= 1 && per_axis <= SampleCount::MAX {
            Ok(SampleCount(per_axis))
        } else {
            Err(CanvasError::InvalidSampleCount(per_axis))
        }
    }

    /// Samples along each axis of the subsample grid
    #[inline(always)]
    pub fn per_axis(self) -> u32 {
        self.0
    }

    /// Total subsamples in the S×S grid
    #[inline(always)]
    pub fn total(self) -> u32 {
        self.0 * self.0
    }
}

/// A set of boundary line segments stored as a flat point list.
///
/// Segment `i` occupies list positions `2i` and `2i + 1`. Segments are drawn
/// relative to an internal cursor position. Note that it is the caller's
/// responsibility to ensure that boundaries form closed loops.
#[derive(Debug, Clone)]
pub struct SegmentList {
    points: Vec<Point2<f32>>,
    cursor: Point2<f32>,
}

impl SegmentList {
    pub fn new() -> SegmentList {
        SegmentList {
            points: Vec::new(),
            cursor: Point2::origin(),
        }
    }

    /// Wrap a flat point list, rejecting lists that cannot pair into segments
    pub fn from_points(points: Vec<Point2<f32>>) -> CanvasResult<SegmentList> {
        if points.len() % 2 != 0 {
            return Err(CanvasError::UnpairedSegmentPoint(points.len()));
        }

        let cursor = points.last().cloned().unwrap_or_else(Point2::origin);

        Ok(SegmentList { points, cursor })
    }

    /// Moves the cursor to a given position without drawing
    pub fn move_to(&mut self, pos: Point2<f32>) {
        self.cursor = pos;
    }

    /// Mark a boundary line from the cursor position to the given point
    pub fn line_to(&mut self, point: Point2<f32>) {
        self.points.push(self.cursor);
        self.points.push(point);
        self.cursor = point;
    }

    /// Number of segments in the list
    #[inline(always)]
    pub fn num_segments(&self) -> usize {
        self.points.len() / 2
    }

    /// The segment at list position `i`
    #[inline]
    pub fn segment(&self, i: usize) -> LineSegment {
        LineSegment::new(self.points[i * 2], self.points[i * 2 + 1])
    }

    /// Iterate over all segments in list order
    pub fn segments(&self) -> impl Iterator<Item = LineSegment> + '_ {
        self.points.chunks(2).map(|pair| LineSegment::new(pair[0], pair[1]))
    }

    /// The flat point list backing the segments
    #[inline(always)]
    pub fn points(&self) -> &[Point2<f32>] {
        &self.points
    }
}

impl Default for SegmentList {
    fn default() -> SegmentList {
        SegmentList::new()
    }
}
