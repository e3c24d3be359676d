use crate::math::Point2;

use super::stroke_style::StrokeStyle;
use super::{ConnectingSegment, CornerSegment, EndCapSegment, MeshBuilder, TriangleMesh2};

/// Everything derived from one stroke rebuild.
///
/// The segment arrays and the mesh always describe the same input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StrokeGeometry {
    /// One per consecutive point pair (wrapping for loops).
    pub connecting: Vec<ConnectingSegment>,
    /// One per interior vertex (every vertex for loops).
    pub corners: Vec<CornerSegment>,
    /// The two end caps of an open stroke; empty for loops.
    pub end_caps: Vec<EndCapSegment>,
    pub mesh: TriangleMesh2,
}

impl StrokeGeometry {
    /// Removes all derived data, keeping the allocations.
    pub fn clear(&mut self) {
        self.connecting.clear();
        self.corners.clear();
        self.end_caps.clear();
        self.mesh.clear();
    }
}

/// Generates a stroke ribbon mesh from a polyline and stroke style.
///
/// Straight bodies are shortened by the node radius at both ends, corners
/// are drawn as curved strips between the bodies, and open strokes get a flat
/// cap at each end. Fewer than two points produce an empty result.
#[derive(Debug)]
pub struct TessellateStroke<'a> {
    points: &'a [Point2],
    style: StrokeStyle,
    is_loop: bool,
}

impl<'a> TessellateStroke<'a> {
    /// Creates a new stroke tessellation operation.
    ///
    /// `is_loop` only takes effect with more than two points.
    #[must_use]
    pub fn new(points: &'a [Point2], style: StrokeStyle, is_loop: bool) -> Self {
        Self {
            points,
            style,
            is_loop,
        }
    }

    /// Executes the tessellation into a fresh [`StrokeGeometry`].
    #[must_use]
    pub fn execute(&self) -> StrokeGeometry {
        let mut geometry = StrokeGeometry::default();
        self.execute_into(&mut geometry);
        geometry
    }

    /// Executes the tessellation, replacing the contents of `geometry`.
    pub fn execute_into(&self, geometry: &mut StrokeGeometry) {
        geometry.clear();

        let n = self.points.len();
        if n < 2 {
            return;
        }

        let is_loop = self.is_loop && n > 2;
        let node_radius = self.style.node_radius();
        let connecting_count = if is_loop { n } else { n - 1 };
        let corner_count = if is_loop { n } else { n - 2 };

        geometry.connecting.extend((0..connecting_count).map(|i| {
            ConnectingSegment::new(&self.points[i], &self.points[(i + 1) % n], node_radius)
        }));

        let connecting = &geometry.connecting;
        geometry.corners.extend((0..corner_count).map(|i| {
            let incoming = i;
            let outgoing = (i + 1) % connecting_count;
            CornerSegment::new(
                &connecting[incoming],
                &connecting[outgoing],
                &self.points[(i + 1) % n],
                node_radius,
                self.style.corner_detail(),
            )
        }));

        if !is_loop {
            geometry.end_caps.push(EndCapSegment::new(
                &geometry.connecting[0],
                &self.points[0],
                node_radius,
                true,
            ));
            geometry.end_caps.push(EndCapSegment::new(
                &geometry.connecting[connecting_count - 1],
                &self.points[n - 1],
                node_radius,
                false,
            ));
        }

        let mut builder = MeshBuilder::new(&mut geometry.mesh, self.style.color());
        for segment in &geometry.connecting {
            segment.draw(&mut builder);
        }
        for corner in &geometry.corners {
            corner.draw(&mut builder);
        }
        for cap in &geometry.end_caps {
            cap.draw(&mut builder);
        }

        tracing::debug!(
            points = n,
            is_loop,
            connecting = geometry.connecting.len(),
            corners = geometry.corners.len(),
            end_caps = geometry.end_caps.len(),
            vertices = geometry.mesh.vertices.len(),
            triangles = geometry.mesh.indices.len(),
            "stroke rebuilt"
        );
    }
}
