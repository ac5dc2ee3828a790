//! Exact geometric predicates shared by both hull strategies.
//!
//! All products are evaluated in `i128`. With `i64` coordinates the
//! largest determinant magnitude is below 2^127, so the widened type makes
//! overflow impossible rather than merely unlikely; the `i128` return
//! types keep that guarantee visible in the signatures.

use super::types::{Orientation, Point};

/// Twice the signed area of the triangle (p, q, r).
///
/// Positive when the triplet turns counter-clockwise, negative when it
/// turns clockwise, zero when the points are collinear.
#[inline]
pub fn signed_area(p: Point, q: Point, r: Point) -> i128 {
    let (px, py) = (p.x as i128, p.y as i128);
    let (qx, qy) = (q.x as i128, q.y as i128);
    let (rx, ry) = (r.x as i128, r.y as i128);
    px * (qy - ry) + qx * (ry - py) + rx * (py - qy)
}

/// Turn direction of the ordered triplet (p, q, r).
///
/// Both hull strategies route every turn test through this predicate so
/// their inclusion decisions stay consistent.
#[inline]
pub fn orientation(p: Point, q: Point, r: Point) -> Orientation {
    match signed_area(p, q, r).cmp(&0) {
        std::cmp::Ordering::Equal => Orientation::Collinear,
        std::cmp::Ordering::Greater => Orientation::CounterClockwise,
        std::cmp::Ordering::Less => Orientation::Clockwise,
    }
}

/// Angle of the vector `p − origin` in [−π, π].
///
/// Used only to order brute-force output counter-clockwise around the
/// lowest point. Coordinate differences are widened before the float
/// conversion so extreme inputs cannot wrap.
#[inline]
pub fn polar_angle(origin: Point, p: Point) -> f64 {
    let dx = p.x as i128 - origin.x as i128;
    let dy = p.y as i128 - origin.y as i128;
    (dy as f64).atan2(dx as f64)
}

/// Exact squared Euclidean distance from `origin` to `p`.
#[inline]
pub fn squared_dist(origin: Point, p: Point) -> i128 {
    let dx = p.x as i128 - origin.x as i128;
    let dy = p.y as i128 - origin.y as i128;
    dx * dx + dy * dy
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orientation_signs() {
        let p = Point::new(0, 0);
        let q = Point::new(4, 0);
        assert_eq!(orientation(p, q, Point::new(2, 3)), Orientation::CounterClockwise);
        assert_eq!(orientation(p, q, Point::new(2, -3)), Orientation::Clockwise);
        assert_eq!(orientation(p, q, Point::new(9, 0)), Orientation::Collinear);
    }

    #[test]
    fn orientation_is_exact_at_extreme_coordinates() {
        // Products here are near 2^124; a 64-bit determinant would wrap.
        let m = 4_000_000_000_000_000_000i64;
        let p = Point::new(-m, -m);
        let q = Point::new(m, -m);
        let r = Point::new(m, m);
        assert_eq!(orientation(p, q, r), Orientation::CounterClockwise);
        assert_eq!(orientation(r, q, p), Orientation::Clockwise);
        assert_eq!(
            orientation(Point::new(-m, -m), Point::new(0, 0), Point::new(m, m)),
            Orientation::Collinear
        );
    }

    #[test]
    fn polar_angle_quadrants() {
        let o = Point::new(1, 1);
        assert!(polar_angle(o, Point::new(5, 1)).abs() < 1e-12);
        assert!((polar_angle(o, Point::new(1, 7)) - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        assert!((polar_angle(o, Point::new(-3, 1)) - std::f64::consts::PI).abs() < 1e-12);
        assert!((polar_angle(o, Point::new(1, -2)) + std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn squared_dist_exact() {
        assert_eq!(squared_dist(Point::new(1, 2), Point::new(4, 6)), 25);
        let m = 3_000_000_000_000_000_000i64;
        assert_eq!(
            squared_dist(Point::new(-m, 0), Point::new(m, 0)),
            (2 * m as i128) * (2 * m as i128)
        );
    }
}
