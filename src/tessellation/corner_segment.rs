use crate::math::intersect_2d::{directions_intersection, directions_parallel};
use crate::math::vector_2d::{midpoint, perpendicular, quadratic_lerp, unsigned_angle_deg};
use crate::math::{Point2, Vector2};

use super::{ConnectingSegment, MeshBuilder};

/// How a [`CornerLine`] pole was derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CornerKind {
    /// The offset edges meet ahead of both segment ends (a true miter apex).
    Miter,
    /// The offset edges only meet behind the segment ends; the line
    /// collapses to a single point and is drawn as a fan apex.
    Stub,
    /// The offset edges are parallel; the pole sits between the two ends.
    Fallback,
    /// The polyline doubles back on itself; the pole is pushed ahead of the
    /// corner so the turnaround is covered.
    Hairpin,
}

/// One side (left or right) of a corner join.
///
/// The side's boundary is the quadratic curve `start → pole → end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CornerLine {
    pub start: Point2,
    pub end: Point2,
    /// Middle control point of the boundary curve.
    pub pole: Point2,
    pub kind: CornerKind,
}

impl CornerLine {
    /// Builds the line joining `start` (travelling along `start_dir`) to `end`
    /// (reached along `-end_dir`), with the pole clamped to
    /// `[corner_radius, 2 * corner_radius]` from `origin`.
    ///
    /// `outward` is used as the clamp direction when the pole lands exactly
    /// on `origin`.
    #[must_use]
    pub fn new(
        start: Point2,
        start_dir: &Vector2,
        end: Point2,
        end_dir: &Vector2,
        origin: &Point2,
        corner_radius: f64,
        outward: &Vector2,
    ) -> Self {
        let mut line = if let Some(pole) =
            directions_intersection(&start, start_dir, &end, end_dir, true)
        {
            Self {
                start,
                end,
                pole,
                kind: CornerKind::Miter,
            }
        } else if directions_intersection(&start, &-start_dir, &end, &-end_dir, true).is_some() {
            let mid = midpoint(&start, &end);
            tracing::trace!(?origin, "corner side collapsed to a stub");
            Self {
                start: mid,
                end: mid,
                pole: mid,
                kind: CornerKind::Stub,
            }
        } else {
            Self {
                start,
                end,
                pole: midpoint(&start, &end),
                kind: CornerKind::Fallback,
            }
        };
        line.pole = clamp_pole(&line.pole, origin, corner_radius, outward);
        line
    }

    /// Returns `true` if this side is a single point.
    #[must_use]
    pub fn is_stub(&self) -> bool {
        self.kind == CornerKind::Stub
    }

    /// Evaluates the boundary curve at `t` in `[0, 1]`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        quadratic_lerp(&self.start, &self.pole, &self.end, t)
    }
}

/// The join between two connecting segments around one polyline vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CornerSegment {
    pub left: CornerLine,
    pub right: CornerLine,
    /// Number of strips (or fan triangles) the corner is drawn with.
    pub detail: u32,
}

impl CornerSegment {
    /// Builds the corner at `origin` between the `incoming` and `outgoing` segments.
    #[must_use]
    pub fn new(
        incoming: &ConnectingSegment,
        outgoing: &ConnectingSegment,
        origin: &Point2,
        corner_radius: f64,
        corner_detail: u32,
    ) -> Self {
        let in_dir = incoming.direction;
        let out_dir = outgoing.direction;
        let guide = if in_dir == Vector2::zeros() {
            out_dir
        } else {
            in_dir
        };

        let (left, right) = if directions_parallel(&in_dir, &out_dir) && in_dir.dot(&out_dir) < 0.0
        {
            tracing::trace!(?origin, "hairpin corner");
            hairpin_lines(incoming, outgoing, origin, corner_radius, &guide)
        } else {
            let side = |left: bool| {
                CornerLine::new(
                    incoming.end(left),
                    &in_dir,
                    outgoing.start(left),
                    &-out_dir,
                    origin,
                    corner_radius,
                    &perpendicular(&guide, !left),
                )
            };
            (side(true), side(false))
        };

        Self {
            left,
            right,
            detail: corner_subdivisions(&in_dir, &out_dir, corner_detail),
        }
    }

    /// Emits the corner as `detail` quads, or as a fan when one side is a stub.
    pub fn draw(&self, builder: &mut MeshBuilder<'_>) {
        let step = 1.0 / f64::from(self.detail);
        for i in 0..self.detail {
            let t0 = f64::from(i) * step;
            let t1 = f64::from(i + 1) * step;

            if self.left.is_stub() {
                builder.add_tri(self.right.point_at(t1), self.right.point_at(t0), self.left.pole);
            } else if self.right.is_stub() {
                builder.add_tri(self.left.point_at(t0), self.left.point_at(t1), self.right.pole);
            } else {
                builder.add_quad(
                    self.left.point_at(t0),
                    self.left.point_at(t1),
                    self.right.point_at(t1),
                    self.right.point_at(t0),
                );
            }
        }
    }
}

/// Corner lines for a full reversal.
///
/// Both offset edges run parallel, so neither side can find a pole. The right
/// side collapses to a stub and the left side is pushed ahead of the corner,
/// turning the join into a fan around the turnaround.
fn hairpin_lines(
    incoming: &ConnectingSegment,
    outgoing: &ConnectingSegment,
    origin: &Point2,
    corner_radius: f64,
    guide: &Vector2,
) -> (CornerLine, CornerLine) {
    let left_start = incoming.end(true);
    let left_end = outgoing.start(true);
    let left = CornerLine {
        start: left_start,
        end: left_end,
        pole: clamp_pole(
            &(origin + guide * (corner_radius * 2.0)),
            origin,
            corner_radius,
            guide,
        ),
        kind: CornerKind::Hairpin,
    };

    let mid = midpoint(&incoming.end(false), &outgoing.start(false));
    let right = CornerLine {
        start: mid,
        end: mid,
        pole: clamp_pole(&mid, origin, corner_radius, &-guide),
        kind: CornerKind::Stub,
    };

    (left, right)
}

/// Moves `pole` along its offset from `origin` so the distance lies in
/// `[radius, 2 * radius]`.
fn clamp_pole(pole: &Point2, origin: &Point2, radius: f64, outward: &Vector2) -> Point2 {
    let offset = pole - origin;
    let len = offset.norm();
    let dir = if len > f64::EPSILON {
        offset / len
    } else {
        *outward
    };
    origin + dir * len.clamp(radius, radius * 2.0)
}

/// Subdivision count: `corner_detail` per 90° of turn, at least one.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn corner_subdivisions(in_dir: &Vector2, out_dir: &Vector2, corner_detail: u32) -> u32 {
    let turn = 360.0 - unsigned_angle_deg(&-in_dir, out_dir);
    let steps = (turn / 90.0 * f64::from(corner_detail)).floor();
    (steps as u32).max(1)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::tessellation::{TriangleMesh2, WHITE};

    fn corner(points: [Point2; 3], radius: f64, detail: u32) -> CornerSegment {
        let s0 = ConnectingSegment::new(&points[0], &points[1], radius);
        let s1 = ConnectingSegment::new(&points[1], &points[2], radius);
        CornerSegment::new(&s0, &s1, &points[1], radius, detail)
    }

    fn assert_pole_in_bounds(line: &CornerLine, origin: &Point2, radius: f64) {
        let d = (line.pole - origin).norm();
        assert!(
            d >= radius - 1e-9 && d <= radius * 2.0 + 1e-9,
            "pole {} at distance {d} outside [{radius}, {}]",
            line.pole,
            radius * 2.0
        );
    }

    #[test]
    fn straight_through_poles_stay_on_edges() {
        let c = corner(
            [
                Point2::new(0.0, 0.0),
                Point2::new(10.0, 0.0),
                Point2::new(20.0, 0.0),
            ],
            1.0,
            8,
        );
        assert_eq!(c.left.kind, CornerKind::Fallback);
        assert_eq!(c.right.kind, CornerKind::Fallback);
        assert_relative_eq!(c.left.pole, Point2::new(10.0, 1.0), epsilon = 1e-9);
        assert_relative_eq!(c.right.pole, Point2::new(10.0, -1.0), epsilon = 1e-9);
        // 180° turn: 2 * corner_detail.
        assert_eq!(c.detail, 16);
    }

    #[test]
    fn right_angle_left_turn() {
        let origin = Point2::new(10.0, 0.0);
        let c = corner(
            [Point2::new(0.0, 0.0), origin, Point2::new(10.0, 10.0)],
            1.0,
            2,
        );
        assert_eq!(c.left.kind, CornerKind::Miter);
        assert_eq!(c.right.kind, CornerKind::Miter);
        assert_relative_eq!(c.left.pole, Point2::new(9.0, 1.0), epsilon = 1e-9);
        assert_relative_eq!(c.right.pole, Point2::new(11.0, -1.0), epsilon = 1e-9);
        // 270° turn: 3 * corner_detail.
        assert_eq!(c.detail, 6);
        assert_pole_in_bounds(&c.left, &origin, 1.0);
        assert_pole_in_bounds(&c.right, &origin, 1.0);
    }

    #[test]
    fn sharp_turn_collapses_inner_side() {
        let origin = Point2::new(10.0, 0.0);
        let c = corner(
            [Point2::new(0.0, 0.0), origin, Point2::new(0.0, 1.0)],
            1.0,
            4,
        );
        assert!(c.left.is_stub());
        assert_eq!(c.left.start, c.left.end);
        assert_eq!(c.right.kind, CornerKind::Miter);
        // The raw miter lies ~20 units out; the clamp pulls it back.
        assert_pole_in_bounds(&c.left, &origin, 1.0);
        assert_pole_in_bounds(&c.right, &origin, 1.0);
    }

    #[test]
    fn full_reversal_is_a_hairpin() {
        let origin = Point2::new(10.0, 0.0);
        let c = corner(
            [Point2::new(0.0, 0.0), origin, Point2::new(0.0, 0.0)],
            1.0,
            1,
        );
        assert!(c.right.is_stub());
        assert_eq!(c.left.kind, CornerKind::Hairpin);
        assert_relative_eq!(c.left.pole, Point2::new(12.0, 0.0), epsilon = 1e-9);
        assert_relative_eq!(c.right.pole, Point2::new(9.0, 0.0), epsilon = 1e-9);
        assert_eq!(c.detail, 4);
        assert_pole_in_bounds(&c.left, &origin, 1.0);
        assert_pole_in_bounds(&c.right, &origin, 1.0);
    }

    #[test]
    fn coincident_neighbor_uses_outgoing_normal() {
        let origin = Point2::new(0.0, 0.0);
        let c = corner([origin, origin, Point2::new(5.0, 0.0)], 0.5, 1);
        assert_pole_in_bounds(&c.left, &origin, 0.5);
        assert_pole_in_bounds(&c.right, &origin, 0.5);
    }

    #[test]
    fn regular_corner_draws_quads() {
        let c = corner(
            [
                Point2::new(0.0, 0.0),
                Point2::new(10.0, 0.0),
                Point2::new(10.0, 10.0),
            ],
            1.0,
            1,
        );
        let mut mesh = TriangleMesh2::default();
        c.draw(&mut MeshBuilder::new(&mut mesh, WHITE));
        assert_eq!(mesh.indices.len(), 2 * c.detail as usize);
        assert_eq!(mesh.vertices.len(), 4 * c.detail as usize);
    }

    #[test]
    fn stub_corner_draws_fan() {
        let c = corner(
            [
                Point2::new(0.0, 0.0),
                Point2::new(10.0, 0.0),
                Point2::new(0.0, 1.0),
            ],
            1.0,
            2,
        );
        let mut mesh = TriangleMesh2::default();
        c.draw(&mut MeshBuilder::new(&mut mesh, WHITE));
        assert_eq!(mesh.indices.len(), c.detail as usize);
        // Every fan triangle shares the stub apex.
        for tri in &mesh.indices {
            assert_eq!(mesh.vertices[tri[2] as usize], c.left.pole);
        }
    }

    #[test]
    fn subdivisions_follow_turn_angle() {
        let x = Vector2::new(1.0, 0.0);
        let y = Vector2::new(0.0, 1.0);
        assert_eq!(corner_subdivisions(&x, &x, 8), 16);
        assert_eq!(corner_subdivisions(&x, &y, 8), 24);
        assert_eq!(corner_subdivisions(&x, &-x, 1), 4);
        assert_eq!(corner_subdivisions(&x, &x, 0), 1);
    }
}
