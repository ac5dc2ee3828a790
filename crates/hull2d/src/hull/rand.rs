//! Random integer point clouds (rectangle model + replay tokens).
//!
//! Purpose
//! - Provide a small, deterministic sampler for hull experiments and
//!   benchmarks. Coordinates are drawn uniformly from an axis-aligned
//!   integer rectangle, matching the inputs the runtime comparison is
//!   meant to stress.
//! - Determinism uses a replay token `(seed, index)` mixed into a single
//!   RNG, so individual clouds can be re-drawn without replaying a
//!   sequence.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::Point;

/// Cloud-size distribution.
#[derive(Clone, Copy, Debug)]
pub enum PointCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl PointCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            PointCount::Fixed(n) => n,
            PointCount::Uniform { min, max } => {
                let hi = max.max(min);
                rng.gen_range(min..=hi)
            }
        }
    }
}

/// Rectangle sampler configuration.
///
/// Coordinates are uniform in `0..x_range` × `0..y_range`; both ranges are
/// clamped to at least 1.
#[derive(Clone, Copy, Debug)]
pub struct CloudCfg {
    pub count: PointCount,
    pub x_range: i64,
    pub y_range: i64,
}

impl Default for CloudCfg {
    fn default() -> Self {
        Self {
            count: PointCount::Fixed(256),
            x_range: 1000,
            y_range: 1000,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a random point cloud; the same token always yields the same cloud.
pub fn draw_point_cloud(cfg: CloudCfg, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    let n = cfg.count.sample(&mut rng);
    let xr = cfg.x_range.max(1);
    let yr = cfg.y_range.max(1);
    (0..n)
        .map(|_| Point::new(rng.gen_range(0..xr), rng.gen_range(0..yr)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_tokens_replay_the_same_cloud() {
        let cfg = CloudCfg::default();
        let tok = ReplayToken { seed: 11, index: 3 };
        assert_eq!(draw_point_cloud(cfg, tok), draw_point_cloud(cfg, tok));
    }

    #[test]
    fn distinct_indices_give_independent_clouds() {
        let cfg = CloudCfg::default();
        let a = draw_point_cloud(cfg, ReplayToken { seed: 11, index: 0 });
        let b = draw_point_cloud(cfg, ReplayToken { seed: 11, index: 1 });
        assert_ne!(a, b);
    }

    #[test]
    fn coordinates_respect_the_configured_rectangle() {
        let cfg = CloudCfg {
            count: PointCount::Uniform { min: 10, max: 50 },
            x_range: 7,
            y_range: 3,
        };
        let cloud = draw_point_cloud(cfg, ReplayToken { seed: 5, index: 0 });
        assert!(cloud.len() >= 10 && cloud.len() <= 50);
        assert!(cloud.iter().all(|p| (0..7).contains(&p.x) && (0..3).contains(&p.y)));
    }
}
