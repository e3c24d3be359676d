use crate::error::{Result, TessellationError};
use crate::math::Point2;

use super::stroke_style::StrokeStyle;
use super::tessellate_stroke::{StrokeGeometry, TessellateStroke};
use super::{Color, TriangleMesh2};

/// Whether a [`StrokeLine`]'s cached geometry matches its inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RebuildState {
    Clean,
    Dirty,
}

/// A stroked polyline that rebuilds its geometry on demand.
///
/// Every setter marks the line dirty; the next call to [`geometry`](Self::geometry)
/// or [`mesh`](Self::mesh) rebuilds everything from scratch.
#[derive(Debug, Clone)]
pub struct StrokeLine {
    points: Vec<Point2>,
    style: StrokeStyle,
    is_loop: bool,
    geometry: StrokeGeometry,
    state: RebuildState,
}

impl Default for StrokeLine {
    fn default() -> Self {
        Self::new(Vec::new(), StrokeStyle::default(), false)
    }
}

impl StrokeLine {
    /// Creates a dirty stroke line.
    #[must_use]
    pub fn new(points: Vec<Point2>, style: StrokeStyle, is_loop: bool) -> Self {
        Self {
            points,
            style,
            is_loop,
            geometry: StrokeGeometry::default(),
            state: RebuildState::Dirty,
        }
    }

    /// Returns the current point sequence.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Replaces the point sequence.
    pub fn set_points(&mut self, points: &[Point2]) {
        self.points.clear();
        self.points.extend_from_slice(points);
        self.mark_dirty();
    }

    /// Moves a single point.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of range.
    pub fn set_point(&mut self, index: usize, point: Point2) -> Result<()> {
        let len = self.points.len();
        let slot = self
            .points
            .get_mut(index)
            .ok_or(TessellationError::PointIndexOutOfRange { index, len })?;
        *slot = point;
        self.mark_dirty();
        Ok(())
    }

    /// Returns the stroke style.
    #[must_use]
    pub fn style(&self) -> &StrokeStyle {
        &self.style
    }

    /// Sets the stroke thickness.
    ///
    /// # Errors
    ///
    /// Returns an error if `thickness` is not a positive finite number; the
    /// line keeps its previous thickness and state.
    pub fn set_thickness(&mut self, thickness: f64) -> Result<()> {
        self.style.set_thickness(thickness)?;
        self.mark_dirty();
        Ok(())
    }

    /// Sets the corner subdivisions per 90° of turn (clamped to at least 1).
    pub fn set_corner_detail(&mut self, corner_detail: u32) {
        self.style.set_corner_detail(corner_detail);
        self.mark_dirty();
    }

    /// Sets the vertex color.
    pub fn set_color(&mut self, color: Color) {
        self.style.set_color(color);
        self.mark_dirty();
    }

    /// Returns `true` if the last point connects back to the first.
    #[must_use]
    pub fn is_loop(&self) -> bool {
        self.is_loop
    }

    /// Sets whether the last point connects back to the first.
    pub fn set_loop(&mut self, is_loop: bool) {
        self.is_loop = is_loop;
        self.mark_dirty();
    }

    /// Returns the rebuild state.
    #[must_use]
    pub fn state(&self) -> RebuildState {
        self.state
    }

    /// Returns `true` if the cached geometry is out of date.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.state == RebuildState::Dirty
    }

    /// Returns the geometry, rebuilding it first if the line is dirty.
    pub fn geometry(&mut self) -> &StrokeGeometry {
        if self.is_dirty() {
            self.rebuild();
        }
        &self.geometry
    }

    /// Returns the mesh, rebuilding it first if the line is dirty.
    pub fn mesh(&mut self) -> &TriangleMesh2 {
        &self.geometry().mesh
    }

    /// Rebuilds the geometry unconditionally.
    pub fn rebuild(&mut self) -> &StrokeGeometry {
        TessellateStroke::new(&self.points, self.style, self.is_loop)
            .execute_into(&mut self.geometry);
        self.state = RebuildState::Clean;
        &self.geometry
    }

    fn mark_dirty(&mut self) {
        self.state = RebuildState::Dirty;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn line() -> StrokeLine {
        StrokeLine::new(
            vec![
                Point2::new(0.0, 0.0),
                Point2::new(4.0, 0.0),
                Point2::new(4.0, 4.0),
            ],
            StrokeStyle::new(1.0).unwrap(),
            false,
        )
    }

    #[test]
    fn new_line_is_dirty_until_queried() {
        let mut line = line();
        assert_eq!(line.state(), RebuildState::Dirty);
        assert_eq!(line.geometry().corners.len(), 1);
        assert_eq!(line.state(), RebuildState::Clean);
    }

    #[test]
    fn every_setter_marks_dirty() {
        let mut line = line();
        let setters: [fn(&mut StrokeLine); 6] = [
            |l| l.set_points(&[Point2::new(0.0, 0.0), Point2::new(1.0, 1.0)]),
            |l| l.set_point(0, Point2::new(-1.0, 0.0)).unwrap(),
            |l| l.set_thickness(2.0).unwrap(),
            |l| l.set_corner_detail(3),
            |l| l.set_loop(true),
            |l| l.set_color(Color::new(0.0, 0.0, 0.0, 1.0)),
        ];
        for set in setters {
            line.rebuild();
            assert!(!line.is_dirty());
            set(&mut line);
            assert!(line.is_dirty());
        }
    }

    #[test]
    fn geometry_tracks_latest_inputs() {
        let mut line = line();
        assert_eq!(line.geometry().end_caps.len(), 2);

        line.set_loop(true);
        let g = line.geometry();
        assert_eq!(g.connecting.len(), 3);
        assert_eq!(g.corners.len(), 3);
        assert!(g.end_caps.is_empty());

        line.set_points(&[Point2::new(0.0, 0.0)]);
        assert!(line.mesh().is_empty());
    }

    #[test]
    fn clean_query_does_not_rebuild() {
        let mut line = line();
        let first = line.geometry().clone();
        assert_eq!(line.geometry(), &first);
        assert_eq!(line.rebuild(), &first);
    }

    #[test]
    fn set_point_out_of_range_fails() {
        let mut line = line();
        line.rebuild();
        assert!(line.set_point(3, Point2::origin()).is_err());
        assert!(!line.is_dirty());
    }

    #[test]
    fn invalid_thickness_is_rejected() {
        let mut line = line();
        line.rebuild();
        assert!(line.set_thickness(0.0).is_err());
        assert!(!line.is_dirty());
        assert!((line.style().thickness() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn points_read_back() {
        let mut line = line();
        line.set_point(1, Point2::new(5.0, 0.0)).unwrap();
        assert_eq!(line.points()[1], Point2::new(5.0, 0.0));
        assert_eq!(line.points().len(), 3);
    }

    #[test]
    fn rebuild_matches_pure_tessellation() {
        let mut line = line();
        let expected = TessellateStroke::new(line.points(), *line.style(), false).execute();
        assert_eq!(line.geometry(), &expected);
    }
}
