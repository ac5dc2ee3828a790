//! Graham scan via two monotone sweeps (O(n log n)).

use super::primitives::orientation;
use super::types::{Orientation, Point};

/// Convex hull of `points` in counter-clockwise order.
///
/// Sorts lexicographically by (x, y), sweeps the sorted order and its
/// reverse into two half hulls, then merges them. The sort dominates the
/// cost; each sweep is amortized linear (every point is pushed once and
/// pops are bounded by pushes). Inputs with fewer than three points pass
/// through unchanged.
pub fn graham_scan_convex_hull(points: &[Point]) -> Vec<Point> {
    if points.len() < 3 {
        return points.to_vec();
    }

    let mut pts = points.to_vec();
    pts.sort_unstable_by_key(|p| (p.x, p.y));

    let mut hull = half_hull(pts.iter().copied());
    let mut back = half_hull(pts.iter().rev().copied());

    // Each sweep terminates on the other's starting point; drop both
    // duplicates before joining.
    hull.pop();
    back.pop();
    hull.append(&mut back);
    hull.reverse();
    hull
}

/// One monotone sweep: grows a chain keeping only strict clockwise turns.
///
/// A collinear or counter-clockwise middle point pops, so interior points
/// of a collinear run never survive a chain.
fn half_hull(sweep: impl Iterator<Item = Point>) -> Vec<Point> {
    let mut chain: Vec<Point> = Vec::new();
    for p in sweep {
        while chain.len() >= 2 {
            let q = chain[chain.len() - 1];
            let r = chain[chain.len() - 2];
            if orientation(r, q, p) == Orientation::Clockwise {
                break;
            }
            chain.pop();
        }
        chain.push(p);
    }
    chain
}
