//! Line segment geometry shared by both rasterizer kernels

use nalgebra::Point2;

use crate::utils::{clamp, sign};

/// A straight line segment between two points.
///
/// Segments are directed: the winding contribution depends on whether the
/// segment runs upward or downward past the query point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    /// Start point
    pub a: Point2<f32>,
    /// End point
    pub b: Point2<f32>,
}

impl LineSegment {
    #[inline(always)]
    pub fn new(a: Point2<f32>, b: Point2<f32>) -> LineSegment {
        LineSegment { a, b }
    }

    /// Euclidean distance from a point to the nearest point on the segment.
    ///
    /// The projection parameter is clamped to `[0, 1]`, and a zero-length
    /// segment clamps it to `0` so the math stays finite.
    pub fn distance_to(&self, p: Point2<f32>) -> f32 {
        let ab = self.b - self.a;
        let ap = p - self.a;

        let len_sq = ab.dot(&ab);

        let t = if len_sq == 0.0 {
            0.0
        } else {
            clamp(ap.dot(&ab) / len_sq, 0.0, 1.0)
        };

        (ap - ab * t).norm()
    }

    /// Signed crossing contribution of this segment at a point under the
    /// nonzero winding rule.
    ///
    /// Returns `0` when the point's scanline misses the segment's vertical
    /// extent. The extent is half-open, so adjacent segments sharing a
    /// vertex never count that scanline twice. Otherwise returns `+1` when
    /// the point lies to the "left" of the directed segment and `-1` when it
    /// lies to the right.
    pub fn winding_at(&self, p: Point2<f32>) -> i32 {
        let (y0, y1) = if self.a.y < self.b.y {
            (self.a.y, self.b.y)
        } else {
            (self.b.y, self.a.y)
        };

        if p.y < y0 || p.y >= y1 {
            return 0;
        }

        let d = self.b - self.a;
        let r = p - self.a;

        if d.x * r.y > d.y * r.x { 1 } else { -1 }
    }

    /// Even-odd crossing test for the horizontal ray cast rightward from
    /// `origin`.
    ///
    /// The endpoint y-signs are compared with `sign(0) == 0` and the x test
    /// is a strict `> 0`, which together are the tie-break for samples
    /// landing exactly on a boundary.
    pub fn crosses_ray(&self, origin: Point2<f32>) -> bool {
        let a = self.a - origin;
        let b = self.b - origin;

        sign(a.y) != sign(b.y) && (a.x > 0.0 || b.x > 0.0)
    }
}
