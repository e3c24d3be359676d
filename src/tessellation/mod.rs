mod connecting_segment;
mod corner_segment;
mod end_cap_segment;
mod mesh_builder;
mod stroke_line;
mod stroke_style;
mod tessellate_grid;
mod tessellate_stroke;

pub use connecting_segment::ConnectingSegment;
pub use corner_segment::{CornerKind, CornerLine, CornerSegment};
pub use end_cap_segment::EndCapSegment;
pub use mesh_builder::MeshBuilder;
pub use stroke_line::{RebuildState, StrokeLine};
pub use stroke_style::StrokeStyle;
pub use tessellate_grid::TessellateGrid;
pub use tessellate_stroke::{StrokeGeometry, TessellateStroke};

use crate::math::Point2;

/// Per-vertex RGBA color.
pub type Color = rgb::Rgba<f32>;

/// Opaque white.
pub const WHITE: Color = Color {
    r: 1.0,
    g: 1.0,
    b: 1.0,
    a: 1.0,
};

/// A flat 2D triangle mesh with one color per vertex.
///
/// Triangles are wound clockwise in a y-up frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TriangleMesh2 {
    /// Vertex positions.
    pub vertices: Vec<Point2>,
    /// Vertex colors, parallel to `vertices`.
    pub colors: Vec<Color>,
    /// Triangle indices (each triple defines a triangle).
    pub indices: Vec<[u32; 3]>,
}

impl TriangleMesh2 {
    /// Returns `true` if the mesh has no triangles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Removes all vertices and triangles, keeping the allocations.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.colors.clear();
        self.indices.clear();
    }

    /// Axis-aligned bounds of the vertices as `(min, max)`.
    #[must_use]
    pub fn bounds(&self) -> Option<(Point2, Point2)> {
        let first = *self.vertices.first()?;
        Some(self.vertices.iter().fold((first, first), |(lo, hi), v| {
            (lo.inf(v), hi.sup(v))
        }))
    }
}
