use crate::math::vector_2d::{normalize_or_zero, perpendicular};
use crate::math::Point2;

use super::{Color, TriangleMesh2};

/// Appends colored triangles and quads to a [`TriangleMesh2`].
///
/// Every primitive gets its own vertices; nothing is shared between calls.
#[derive(Debug)]
pub struct MeshBuilder<'a> {
    mesh: &'a mut TriangleMesh2,
    color: Color,
}

impl<'a> MeshBuilder<'a> {
    /// Creates a builder that appends to `mesh` using a single vertex color.
    pub fn new(mesh: &'a mut TriangleMesh2, color: Color) -> Self {
        Self { mesh, color }
    }

    /// Appends triangle `(p1, p2, p3)`.
    pub fn add_tri(&mut self, p1: Point2, p2: Point2, p3: Point2) {
        let idx = self.push_vertices(&[p1, p2, p3]);
        self.mesh.indices.push([idx, idx + 1, idx + 2]);
    }

    /// Appends quad `(p1, p2, p3, p4)` as triangles `(p1, p2, p3)` and `(p3, p4, p1)`.
    pub fn add_quad(&mut self, p1: Point2, p2: Point2, p3: Point2, p4: Point2) {
        let idx = self.push_vertices(&[p1, p2, p3, p4]);
        self.mesh.indices.push([idx, idx + 1, idx + 2]);
        self.mesh.indices.push([idx + 2, idx + 3, idx]);
    }

    /// Appends a straight line of the given thickness as one quad.
    pub fn add_line(&mut self, start: Point2, end: Point2, thickness: f64) {
        let dir = normalize_or_zero(&(end - start));
        let r_offset = perpendicular(&dir, true) * (thickness * 0.5);
        self.add_quad(
            start - r_offset,
            end - r_offset,
            end + r_offset,
            start + r_offset,
        );
    }

    #[allow(clippy::cast_possible_truncation)]
    fn push_vertices(&mut self, points: &[Point2]) -> u32 {
        let idx = self.mesh.vertices.len() as u32;
        self.mesh.vertices.extend_from_slice(points);
        self.mesh
            .colors
            .extend(std::iter::repeat_n(self.color, points.len()));
        idx
    }
}
