use crate::error::{Result, TessellationError};
use crate::math::{Point2, Vector2};

use super::{Color, MeshBuilder, TriangleMesh2, WHITE};

/// Generates the ruled lines of a graph grid inside a rectangle.
///
/// Column lines run the full height. Row lines are split into one piece per
/// column so pieces never overlap the column lines they cross. With a border,
/// every line is also pulled in from the rectangle edge by half its thickness
/// and the four edges are drawn.
#[derive(Debug, Clone)]
pub struct TessellateGrid {
    min: Point2,
    width: f64,
    height: f64,
    columns: u32,
    rows: u32,
    line_thickness: f64,
    draw_border: bool,
    color: Color,
}

impl TessellateGrid {
    /// Creates a grid over the rectangle at `min` with the given size.
    #[must_use]
    pub fn new(min: Point2, width: f64, height: f64, columns: u32, rows: u32) -> Self {
        Self {
            min,
            width,
            height,
            columns,
            rows,
            line_thickness: 10.0,
            draw_border: true,
            color: WHITE,
        }
    }

    /// Sets the thickness of every line.
    #[must_use]
    pub fn with_line_thickness(mut self, line_thickness: f64) -> Self {
        self.line_thickness = line_thickness;
        self
    }

    /// Sets whether the rectangle outline is drawn.
    #[must_use]
    pub fn with_border(mut self, draw_border: bool) -> Self {
        self.draw_border = draw_border;
        self
    }

    /// Sets the vertex color.
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Executes the tessellation, producing one quad per line piece.
    ///
    /// # Errors
    ///
    /// Returns an error if the grid has no columns or rows, or if the size or
    /// line thickness is not positive.
    pub fn execute(&self) -> Result<TriangleMesh2> {
        if self.columns == 0 || self.rows == 0 {
            return Err(TessellationError::InvalidParameters(format!(
                "grid needs at least one column and row, got {}x{}",
                self.columns, self.rows
            ))
            .into());
        }
        for (name, value) in [
            ("width", self.width),
            ("height", self.height),
            ("line thickness", self.line_thickness),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(TessellationError::InvalidParameters(format!(
                    "grid {name} must be positive, got {value}"
                ))
                .into());
            }
        }

        let mut mesh = TriangleMesh2::default();
        let mut builder = MeshBuilder::new(&mut mesh, self.color);
        let right = Vector2::new(1.0, 0.0);
        let up = Vector2::new(0.0, 1.0);

        self.draw_bars(&mut builder, self.width, self.height, self.columns, right, up, 1);
        self.draw_bars(
            &mut builder,
            self.height,
            self.width,
            self.rows,
            up,
            right,
            self.columns,
        );
        if self.draw_border {
            self.draw_outline(&mut builder);
        }

        tracing::debug!(
            columns = self.columns,
            rows = self.rows,
            triangles = mesh.indices.len(),
            "grid rebuilt"
        );
        Ok(mesh)
    }

    /// Draws the `lines - 1` interior lines spaced along `axis_dir`, each split
    /// into `pieces` pieces along `piece_dir`.
    #[allow(clippy::too_many_arguments)]
    fn draw_bars(
        &self,
        builder: &mut MeshBuilder<'_>,
        axis_length: f64,
        line_length: f64,
        lines: u32,
        axis_dir: Vector2,
        piece_dir: Vector2,
        pieces: u32,
    ) {
        let spacing = axis_length / f64::from(lines);
        let half = self.line_thickness * 0.5;
        let piece_length = line_length / f64::from(pieces);

        for i in 1..lines {
            for piece in 0..pieces {
                let shorten_start = if (pieces > 1 && piece > 0) || self.draw_border {
                    half
                } else {
                    0.0
                };
                let shorten_end = if (pieces > 1 && piece + 1 < pieces) || self.draw_border {
                    half
                } else {
                    0.0
                };

                let origin = self.min
                    + axis_dir * (spacing * f64::from(i))
                    + piece_dir * (piece_length * f64::from(piece));
                let target = origin + piece_dir * piece_length;

                builder.add_line(
                    origin + piece_dir * shorten_start,
                    target - piece_dir * shorten_end,
                    self.line_thickness,
                );
            }
        }
    }

    fn draw_outline(&self, builder: &mut MeshBuilder<'_>) {
        let max = self.min + Vector2::new(self.width, self.height);
        let corners = [
            self.min,
            Point2::new(self.min.x, max.y),
            max,
            Point2::new(max.x, self.min.y),
        ];
        let half = self.line_thickness * 0.5;
        for i in 0..corners.len() {
            let start = corners[i];
            let end = corners[(i + 1) % corners.len()];
            // Shift back so each edge covers the corner it starts from.
            let shift = (end - start).normalize() * -half;
            builder.add_line(start + shift, end + shift, self.line_thickness);
        }
    }
}
