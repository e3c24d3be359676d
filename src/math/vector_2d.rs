use super::{Point2, Vector2};

/// Rotates `v` by 90°, clockwise or counter-clockwise in a y-up frame.
#[must_use]
pub fn perpendicular(v: &Vector2, clockwise: bool) -> Vector2 {
    if clockwise {
        Vector2::new(v.y, -v.x)
    } else {
        Vector2::new(-v.y, v.x)
    }
}

/// Returns the unit vector along `v`, or the zero vector when `v` has no length.
#[must_use]
pub fn normalize_or_zero(v: &Vector2) -> Vector2 {
    v.try_normalize(f64::EPSILON).unwrap_or_else(Vector2::zeros)
}

/// Unsigned angle between two vectors in degrees, in `[0, 180]`.
///
/// Returns `0` when either vector has no length.
#[must_use]
pub fn unsigned_angle_deg(a: &Vector2, b: &Vector2) -> f64 {
    let denom = a.norm() * b.norm();
    if denom < f64::EPSILON {
        return 0.0;
    }
    (a.dot(b) / denom).clamp(-1.0, 1.0).acos().to_degrees()
}

/// Linear interpolation between two points.
#[must_use]
pub fn lerp(a: &Point2, b: &Point2, t: f64) -> Point2 {
    a + (b - a) * t
}

/// Quadratic Bézier interpolation through control points `a`, `b`, `c`.
#[must_use]
pub fn quadratic_lerp(a: &Point2, b: &Point2, c: &Point2, t: f64) -> Point2 {
    lerp(&lerp(a, b, t), &lerp(b, c, t), t)
}

/// Cubic Bézier interpolation through control points `a`, `b`, `c`, `d`.
#[must_use]
pub fn cubic_lerp(a: &Point2, b: &Point2, c: &Point2, d: &Point2, t: f64) -> Point2 {
    lerp(&quadratic_lerp(a, b, c, t), &quadratic_lerp(b, c, d, t), t)
}

/// Midpoint of two points.
#[must_use]
pub fn midpoint(a: &Point2, b: &Point2) -> Point2 {
    nalgebra::center(a, b)
}

/// Twice the signed area of triangle `(a, b, c)`.
///
/// Positive for counter-clockwise, negative for clockwise (y-up).
#[must_use]
pub fn triangle_cross(a: &Point2, b: &Point2, c: &Point2) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn perpendicular_rotates_both_ways() {
        let v = Vector2::new(1.0, 0.0);
        assert_relative_eq!(perpendicular(&v, true), Vector2::new(0.0, -1.0));
        assert_relative_eq!(perpendicular(&v, false), Vector2::new(0.0, 1.0));
    }

    #[test]
    fn normalize_zero_vector_stays_zero() {
        let n = normalize_or_zero(&Vector2::zeros());
        assert_eq!(n, Vector2::zeros());
        let n = normalize_or_zero(&Vector2::new(3.0, 4.0));
        assert_relative_eq!(n, Vector2::new(0.6, 0.8));
    }

    #[test]
    fn angle_between_vectors() {
        let x = Vector2::new(1.0, 0.0);
        let y = Vector2::new(0.0, 2.0);
        assert_relative_eq!(unsigned_angle_deg(&x, &y), 90.0, epsilon = 1e-9);
        assert_relative_eq!(unsigned_angle_deg(&x, &-x), 180.0, epsilon = 1e-9);
        assert_relative_eq!(unsigned_angle_deg(&x, &Vector2::zeros()), 0.0);
    }

    #[test]
    fn quadratic_lerp_hits_endpoints_and_midpoint() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(1.0, 2.0);
        let c = Point2::new(2.0, 0.0);
        assert_relative_eq!(quadratic_lerp(&a, &b, &c, 0.0), a);
        assert_relative_eq!(quadratic_lerp(&a, &b, &c, 1.0), c);
        assert_relative_eq!(quadratic_lerp(&a, &b, &c, 0.5), Point2::new(1.0, 1.0));
    }

    #[test]
    fn cubic_lerp_symmetric_curve() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(0.0, 1.0);
        let c = Point2::new(1.0, 1.0);
        let d = Point2::new(1.0, 0.0);
        assert_relative_eq!(cubic_lerp(&a, &b, &c, &d, 0.5), Point2::new(0.5, 0.75));
    }

    #[test]
    fn triangle_cross_sign() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(1.0, 0.0);
        let c = Point2::new(0.0, 1.0);
        assert!(triangle_cross(&a, &b, &c) > 0.0);
        assert!(triangle_cross(&a, &c, &b) < 0.0);
    }
}
