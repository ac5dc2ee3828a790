//! Planar convex hulls over exact integer coordinates.
//!
//! Two alternative strategies implement the same contract (point set →
//! counter-clockwise hull polygon): an O(n³) brute-force edge test and an
//! O(n log n) Graham scan. Both are pure functions over immutable slices
//! and share a single exact orientation predicate, so their vertex sets
//! agree on every input.
//!
//! The crate performs no I/O and reports no timings; file handling and the
//! side-by-side runtime comparison live in the `cli` crate.

pub mod hull;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Convenience re-exports for the common call sites.
pub use hull::{
    brute_force_convex_hull, graham_scan_convex_hull, orientation, HullAlgorithm, Orientation,
    Point,
};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::hull::rand::{draw_point_cloud, CloudCfg, PointCount, ReplayToken};
    pub use crate::hull::{
        brute_force_convex_hull, graham_scan_convex_hull, orientation, polar_angle, signed_area,
        squared_dist, HullAlgorithm, Orientation, Point,
    };
}
