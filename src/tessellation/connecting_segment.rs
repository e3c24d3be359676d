use crate::math::vector_2d::{normalize_or_zero, perpendicular};
use crate::math::{Point2, Vector2};

use super::MeshBuilder;

/// The straight body of a stroke between two consecutive points.
///
/// Both ends are pulled in by the node radius so corners and end caps have
/// room to join. Left and right are relative to the direction of travel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConnectingSegment {
    /// Unit direction from start to end (zero for coincident points).
    pub direction: Vector2,
    pub start_l: Point2,
    pub start_r: Point2,
    pub end_l: Point2,
    pub end_r: Point2,
    /// The points are too close for a rectangular body; only the joins
    /// around them cover this span.
    pub is_stub: bool,
}

impl ConnectingSegment {
    /// Builds the segment between `start` and `end` for a stroke of `node_radius`.
    #[must_use]
    pub fn new(start: &Point2, end: &Point2, node_radius: f64) -> Self {
        let full_delta = end - start;
        let full_distance = full_delta.norm();
        let direction = normalize_or_zero(&full_delta);

        // Short segments shrink symmetrically instead of inverting.
        let draw_radius = node_radius.min(full_distance * 0.5);
        let body_start = start + direction * draw_radius;
        let body_end = end - direction * draw_radius;

        let r_offset = perpendicular(&direction, true) * node_radius;

        Self {
            direction,
            start_l: body_start - r_offset,
            start_r: body_start + r_offset,
            end_l: body_end - r_offset,
            end_r: body_end + r_offset,
            is_stub: full_distance <= node_radius * 2.0,
        }
    }

    /// Returns the end point on the requested side.
    #[must_use]
    pub fn end(&self, left: bool) -> Point2 {
        if left {
            self.end_l
        } else {
            self.end_r
        }
    }

    /// Returns the start point on the requested side.
    #[must_use]
    pub fn start(&self, left: bool) -> Point2 {
        if left {
            self.start_l
        } else {
            self.start_r
        }
    }

    /// Emits the body quad. Stubs emit nothing.
    pub fn draw(&self, builder: &mut MeshBuilder<'_>) {
        if self.is_stub {
            return;
        }
        builder.add_quad(self.start_l, self.end_l, self.end_r, self.start_r);
    }
}
