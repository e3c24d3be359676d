use crate::error::{GeometryError, Result};
use crate::math::vector_2d::{lerp, normalize_or_zero};
use crate::math::{Point2, Vector2};

/// Returns the total length of an open polyline.
#[must_use]
pub fn polyline_length(points: &[Point2]) -> f64 {
    points.windows(2).map(|w| (w[1] - w[0]).norm()).sum()
}

/// Samples the point and unit direction at `distance` along an open polyline.
///
/// The interpolation parameter within an edge is clamped to `[0, 1]`, so a
/// negative distance yields the first vertex. A distance past the end yields
/// the last vertex together with the direction of the last edge (zero for a
/// single-vertex polyline).
///
/// # Errors
///
/// Returns an error if `points` is empty.
pub fn sample_at_distance(points: &[Point2], distance: f64) -> Result<(Point2, Vector2)> {
    let Some(last) = points.last() else {
        return Err(GeometryError::EmptyPolyline.into());
    };

    let mut walked = 0.0;
    let mut last_dir = Vector2::zeros();
    for w in points.windows(2) {
        let edge = w[1] - w[0];
        let edge_len = edge.norm();
        last_dir = normalize_or_zero(&edge);
        if walked + edge_len >= distance {
            let t = edge_param(distance - walked, edge_len);
            return Ok((lerp(&w[0], &w[1], t), last_dir));
        }
        walked += edge_len;
    }

    Ok((*last, last_dir))
}

/// Splits an open polyline at `distance` along it.
///
/// The first half holds the vertices walked before `distance`, the second the
/// rest. With `insert_cut`, an interpolated vertex at the cut is appended to
/// the first half and prepended to the second. A distance at or past the end
/// returns the whole polyline and an empty second half.
///
/// # Errors
///
/// Returns an error if `distance` is not a positive finite number.
pub fn split_at_distance(
    points: &[Point2],
    distance: f64,
    insert_cut: bool,
) -> Result<(Vec<Point2>, Vec<Point2>)> {
    if !(distance.is_finite() && distance > 0.0) {
        return Err(GeometryError::ParameterOutOfRange {
            parameter: "distance",
            value: distance,
            min: 0.0,
            max: f64::INFINITY,
        }
        .into());
    }

    let mut walked = 0.0;
    let mut walked_count = 0;
    let mut cut = None;

    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            let prev = &points[i - 1];
            let edge_len = (p - prev).norm();
            if walked + edge_len >= distance {
                if insert_cut {
                    let t = edge_param(distance - walked, edge_len);
                    cut = Some(lerp(prev, p, t));
                }
                break;
            }
            walked += edge_len;
        }
        walked_count += 1;
    }

    let mut first = Vec::with_capacity(walked_count + 1);
    first.extend_from_slice(&points[..walked_count]);
    let mut second = Vec::with_capacity(points.len() - walked_count + 1);
    if let Some(cut) = cut {
        first.push(cut);
        second.push(cut);
    }
    second.extend_from_slice(&points[walked_count..]);

    Ok((first, second))
}

/// Removes `length` from the start of an open polyline.
///
/// # Errors
///
/// Returns an error if `length` is not a positive finite number.
pub fn trim_from_start(points: &[Point2], length: f64) -> Result<Vec<Point2>> {
    split_at_distance(points, length, true).map(|(_, rest)| rest)
}

/// Removes `length` from the end of an open polyline.
///
/// # Errors
///
/// Returns an error if the remaining length is not a positive finite number.
pub fn trim_from_end(points: &[Point2], length: f64) -> Result<Vec<Point2>> {
    split_at_distance(points, polyline_length(points) - length, true).map(|(kept, _)| kept)
}

/// Interpolation parameter of `along` within an edge of `edge_len`, clamped to `[0, 1]`.
fn edge_param(along: f64, edge_len: f64) -> f64 {
    if edge_len < f64::EPSILON {
        0.0
    } else {
        (along / edge_len).clamp(0.0, 1.0)
    }
}
