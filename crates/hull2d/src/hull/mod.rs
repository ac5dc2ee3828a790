//! Convex hull construction in the plane (integer coordinates).
//!
//! Purpose
//! - Provide two explicitly selectable hull strategies over the same
//!   `&[Point] -> Vec<Point>` contract: `brute_force_convex_hull` and
//!   `graham_scan_convex_hull`, plus the shared exact primitives.
//!
//! Conventions
//! - Coordinates are `i64`; every determinant and squared distance is
//!   computed in `i128`, so no coordinate pair can overflow a predicate.
//! - Hulls are returned in counter-clockwise order. Inputs with fewer than
//!   three points pass through unchanged.
//! - Collinear points interior to a hull edge are not hull vertices; only
//!   the two extreme points of a collinear run survive. Both strategies
//!   apply this policy, so their vertex sets are identical on every input.
//!
//! Code cross-refs: `primitives::orientation`, `strategy::HullAlgorithm`,
//! `rand::draw_point_cloud`.

mod brute;
mod graham;
mod primitives;
pub mod rand;
mod strategy;
mod types;

pub use brute::brute_force_convex_hull;
pub use graham::graham_scan_convex_hull;
pub use primitives::{orientation, polar_angle, signed_area, squared_dist};
pub use strategy::HullAlgorithm;
pub use types::{Orientation, Point};
