use thiserror::Error;

/// Top-level error type for stroke tessellation.
#[derive(Debug, Error)]
pub enum StrokeError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Tessellation(#[from] TessellationError),
}

/// Errors related to polyline measurements.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("polyline has no vertices")]
    EmptyPolyline,
}

/// Errors related to tessellation configuration.
#[derive(Debug, Error)]
pub enum TessellationError {
    #[error("invalid tessellation parameters: {0}")]
    InvalidParameters(String),

    #[error("point index {index} is out of range for {len} points")]
    PointIndexOutOfRange { index: usize, len: usize },
}

/// Convenience type alias for results using [`StrokeError`].
pub type Result<T> = std::result::Result<T, StrokeError>;
