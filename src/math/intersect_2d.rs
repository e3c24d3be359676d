use super::vector_2d::normalize_or_zero;
use super::{Point2, Vector2, TOLERANCE};

/// Intersection of the infinite lines through `(a0, a1)` and `(b0, b1)`.
///
/// Returns `None` if the lines are parallel or coincident.
#[must_use]
pub fn line_intersection(a0: &Point2, a1: &Point2, b0: &Point2, b1: &Point2) -> Option<Point2> {
    // Lines in implicit form `A x + B y = C`.
    let a_1 = a1.y - a0.y;
    let b_1 = a0.x - a1.x;
    let c_1 = a_1 * a0.x + b_1 * a0.y;

    let a_2 = b1.y - b0.y;
    let b_2 = b0.x - b1.x;
    let c_2 = a_2 * b0.x + b_2 * b0.y;

    let denom = a_1 * b_2 - a_2 * b_1;
    if denom.abs() < TOLERANCE {
        return None;
    }

    Some(Point2::new(
        (b_2 * c_1 - b_1 * c_2) / denom,
        (a_1 * c_2 - a_2 * c_1) / denom,
    ))
}

/// Returns `true` if the two directions are parallel (or either is zero).
#[must_use]
pub fn directions_parallel(dir_a: &Vector2, dir_b: &Vector2) -> bool {
    (dir_a.x * dir_b.y - dir_a.y * dir_b.x).abs() < TOLERANCE
}

/// Intersection of the lines `origin_a + t * dir_a` and `origin_b + u * dir_b`.
///
/// With `ensure_forward`, the intersection is only returned when it lies
/// ahead of (or on) both origins along their directions. Returns `None`
/// for parallel directions.
#[must_use]
pub fn directions_intersection(
    origin_a: &Point2,
    dir_a: &Vector2,
    origin_b: &Point2,
    dir_b: &Vector2,
    ensure_forward: bool,
) -> Option<Point2> {
    if directions_parallel(dir_a, dir_b) {
        return None;
    }

    let cross = dir_a.x * dir_b.y - dir_a.y * dir_b.x;
    let diff = origin_b - origin_a;
    let t = (diff.x * dir_b.y - diff.y * dir_b.x) / cross;
    let hit = origin_a + dir_a * t;

    if ensure_forward {
        let a_to_hit = normalize_or_zero(&(hit - origin_a));
        let b_to_hit = normalize_or_zero(&(hit - origin_b));
        if a_to_hit.dot(dir_a) < 0.0 || b_to_hit.dot(dir_b) < 0.0 {
            return None;
        }
    }

    Some(hit)
}
