use crate::error::{Result, TessellationError};

use super::{Color, WHITE};

/// Style parameters for polyline stroke tessellation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    thickness: f64,
    corner_detail: u32,
    color: Color,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            thickness: 0.5,
            corner_detail: 8,
            color: WHITE,
        }
    }
}

impl StrokeStyle {
    /// Creates a new stroke style with default corner detail and color.
    ///
    /// # Errors
    ///
    /// Returns an error if `thickness` is not a positive finite number.
    pub fn new(thickness: f64) -> Result<Self> {
        validate_thickness(thickness)?;
        Ok(Self {
            thickness,
            ..Self::default()
        })
    }

    /// Sets the number of corner subdivisions per 90° of turn.
    ///
    /// Values below 1 are clamped to 1.
    #[must_use]
    pub fn with_corner_detail(mut self, corner_detail: u32) -> Self {
        self.set_corner_detail(corner_detail);
        self
    }

    /// Sets the uniform vertex color.
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Returns the stroke thickness.
    #[must_use]
    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    /// Returns half the stroke thickness, the offset from the centerline to each edge.
    #[must_use]
    pub fn node_radius(&self) -> f64 {
        self.thickness * 0.5
    }

    /// Returns the number of corner subdivisions per 90° of turn.
    #[must_use]
    pub fn corner_detail(&self) -> u32 {
        self.corner_detail
    }

    /// Returns the vertex color.
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    pub(crate) fn set_thickness(&mut self, thickness: f64) -> Result<()> {
        validate_thickness(thickness)?;
        self.thickness = thickness;
        Ok(())
    }

    pub(crate) fn set_corner_detail(&mut self, corner_detail: u32) {
        if corner_detail == 0 {
            tracing::warn!("corner detail 0 clamped to 1");
        }
        self.corner_detail = corner_detail.max(1);
    }

    pub(crate) fn set_color(&mut self, color: Color) {
        self.color = color;
    }
}

fn validate_thickness(thickness: f64) -> Result<()> {
    if !(thickness.is_finite() && thickness > 0.0) {
        return Err(TessellationError::InvalidParameters(format!(
            "stroke thickness must be positive and finite, got {thickness}"
        ))
        .into());
    }
    Ok(())
}
