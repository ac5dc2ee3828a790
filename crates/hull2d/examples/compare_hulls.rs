//! Side-by-side runtime probe for the two hull strategies.
//!
//! Draws one reproducible point cloud, times both constructions, and
//! checks that they agree on the hull vertex set before reporting.

use std::collections::BTreeSet;
use std::time::Instant;

use hull2d::prelude::*;

fn main() {
    let cfg = CloudCfg {
        count: PointCount::Fixed(512),
        x_range: 100_000,
        y_range: 100_000,
    };
    let points = draw_point_cloud(cfg, ReplayToken { seed: 7, index: 0 });

    let start = Instant::now();
    let brute = brute_force_convex_hull(&points);
    let brute_ms = start.elapsed().as_secs_f64() * 1e3;

    let start = Instant::now();
    let graham = graham_scan_convex_hull(&points);
    let graham_ms = start.elapsed().as_secs_f64() * 1e3;

    let brute_set: BTreeSet<(i64, i64)> = brute.iter().map(|p| (p.x, p.y)).collect();
    let graham_set: BTreeSet<(i64, i64)> = graham.iter().map(|p| (p.x, p.y)).collect();
    assert_eq!(
        brute_set, graham_set,
        "strategies disagree on the hull vertex set"
    );

    println!("points={} hull_vertices={}", points.len(), graham.len());
    println!("brute_force_time_ms={brute_ms:.3}");
    println!("graham_scan_time_ms={graham_ms:.3}");
}
