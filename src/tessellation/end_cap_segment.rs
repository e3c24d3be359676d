use crate::math::Point2;

use super::{ConnectingSegment, MeshBuilder};

/// A flat cap closing one free end of an open stroke.
///
/// Corners are stored in stroke order: the `start_*` edge is the one nearer
/// the beginning of the polyline, so both caps wind like the segment bodies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EndCapSegment {
    pub start_l: Point2,
    pub start_r: Point2,
    pub end_l: Point2,
    pub end_r: Point2,
}

impl EndCapSegment {
    /// Builds the cap for the terminal point `tip` of `segment`.
    ///
    /// The segment edge nearer `tip` is extended outward by `node_radius`.
    /// `first` breaks ties for collapsed segments whose two edges coincide.
    #[must_use]
    pub fn new(segment: &ConnectingSegment, tip: &Point2, node_radius: f64, first: bool) -> Self {
        let to_start = (segment.start_l - tip).norm();
        let to_end = (segment.end_l - tip).norm();
        let at_start = if (to_start - to_end).abs() <= f64::EPSILON {
            first
        } else {
            to_start < to_end
        };

        let extent = segment.direction * node_radius;
        if at_start {
            Self {
                start_l: segment.start_l - extent,
                start_r: segment.start_r - extent,
                end_l: segment.start_l,
                end_r: segment.start_r,
            }
        } else {
            Self {
                start_l: segment.end_l,
                start_r: segment.end_r,
                end_l: segment.end_l + extent,
                end_r: segment.end_r + extent,
            }
        }
    }

    /// Emits the cap quad.
    pub fn draw(&self, builder: &mut MeshBuilder<'_>) {
        builder.add_quad(self.start_l, self.end_l, self.end_r, self.start_r);
    }
}
