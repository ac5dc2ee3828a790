//! Brute-force hull construction (O(n³)).
//!
//! Every ordered pair of points is tested as a candidate hull edge against
//! all remaining points; qualifying endpoints are collected and then
//! ordered counter-clockwise around the lowest point. Cubic, but useful as
//! an oracle for the scan-based strategy and for runtime comparisons.

use std::cmp::Ordering;

use super::primitives::{orientation, polar_angle, squared_dist};
use super::types::{Orientation, Point};

/// Angle ties below this tolerance fall back to the exact distance order.
const ANGLE_EPS: f64 = 1e-9;

/// Convex hull of `points`, counter-clockwise, starting at the lowest
/// point (ties by smallest x).
///
/// Inputs with fewer than three points pass through unchanged. Collinear
/// points interior to a hull edge are not reported as vertices; only the
/// extreme points of a collinear run qualify, matching the scan strategy.
pub fn brute_force_convex_hull(points: &[Point]) -> Vec<Point> {
    if points.len() < 3 {
        return points.to_vec();
    }

    let mut hull: Vec<Point> = Vec::new();
    for (i, &p) in points.iter().enumerate() {
        for (j, &q) in points.iter().enumerate() {
            if j == i {
                continue;
            }
            if is_hull_edge(points, i, j) {
                if !hull.contains(&p) {
                    hull.push(p);
                }
                if !hull.contains(&q) {
                    hull.push(q);
                }
            }
        }
    }

    sort_counter_clockwise(&mut hull);
    hull
}

/// True iff the directed segment `points[i] -> points[j]` lies on the hull
/// boundary: every other point is strictly to its left, or collinear and
/// inside the closed segment.
fn is_hull_edge(points: &[Point], i: usize, j: usize) -> bool {
    let p = points[i];
    let q = points[j];
    for (k, &r) in points.iter().enumerate() {
        if k == i || k == j {
            continue;
        }
        match orientation(p, q, r) {
            Orientation::CounterClockwise => {}
            Orientation::Collinear if within_segment(p, q, r) => {}
            _ => return false,
        }
    }
    true
}

/// Assumes `r` collinear with (p, q): true iff `r` lies in the closed
/// segment between them.
fn within_segment(p: Point, q: Point, r: Point) -> bool {
    r.x >= p.x.min(q.x)
        && r.x <= p.x.max(q.x)
        && r.y >= p.y.min(q.y)
        && r.y <= p.y.max(q.y)
}

/// Order collected vertices counter-clockwise: lowest point first, the
/// rest by polar angle around it, angle ties by distance.
fn sort_counter_clockwise(hull: &mut [Point]) {
    let Some(origin) = hull.iter().copied().min_by_key(|p| (p.y, p.x)) else {
        return;
    };
    hull.sort_by(|&a, &b| {
        let ta = polar_angle(origin, a);
        let tb = polar_angle(origin, b);
        if (ta - tb).abs() < ANGLE_EPS {
            squared_dist(origin, a).cmp(&squared_dist(origin, b))
        } else {
            ta.partial_cmp(&tb).unwrap_or(Ordering::Equal)
        }
    });
}
