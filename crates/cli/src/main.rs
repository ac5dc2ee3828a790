use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use hull2d::prelude::*;
use serde::Serialize;
use tracing_subscriber::fmt::SubscriberBuilder;

mod points_io;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Convex hull experiment runner")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute hulls for a point file, one output file per strategy
    Run {
        /// Input point file: a count followed by that many `x y` pairs
        #[arg(long)]
        input: PathBuf,
        /// Directory receiving `<strategy>_hull.txt` and `summary.json`
        #[arg(long)]
        out_dir: PathBuf,
        /// Which strategy to run
        #[arg(long, value_enum, default_value = "both")]
        algo: AlgoChoice,
    },
    /// Draw a reproducible random point cloud and write it as a point file
    Generate {
        #[arg(long)]
        count: usize,
        /// Exclusive upper bound for x coordinates
        #[arg(long, default_value_t = 100_000)]
        x_range: i64,
        /// Exclusive upper bound for y coordinates
        #[arg(long, default_value_t = 100_000)]
        y_range: i64,
        #[arg(long)]
        seed: u64,
        /// Replay index, for drawing several clouds from one seed
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long)]
        out: PathBuf,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum AlgoChoice {
    Brute,
    Graham,
    Both,
}

impl AlgoChoice {
    fn strategies(self) -> Vec<HullAlgorithm> {
        match self {
            AlgoChoice::Brute => vec![HullAlgorithm::BruteForce],
            AlgoChoice::Graham => vec![HullAlgorithm::GrahamScan],
            AlgoChoice::Both => HullAlgorithm::ALL.to_vec(),
        }
    }
}

#[derive(Serialize)]
struct RunSummary {
    input: String,
    point_count: usize,
    runs: Vec<StrategyRun>,
}

#[derive(Serialize)]
struct StrategyRun {
    strategy: &'static str,
    hull_vertices: usize,
    millis: f64,
    output: String,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Run {
            input,
            out_dir,
            algo,
        } => run(&input, &out_dir, algo),
        Action::Generate {
            count,
            x_range,
            y_range,
            seed,
            index,
            out,
        } => generate(count, x_range, y_range, seed, index, &out),
    }
}

fn run(input: &Path, out_dir: &Path, algo: AlgoChoice) -> Result<()> {
    let points = points_io::read_points(input)?;
    tracing::info!(input = %input.display(), points = points.len(), "loaded point file");

    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("creating output dir {}", out_dir.display()))?;

    let mut runs = Vec::new();
    for strategy in algo.strategies() {
        let start = Instant::now();
        let hull = strategy.compute(&points);
        let millis = start.elapsed().as_secs_f64() * 1e3;

        let out_path = out_dir.join(format!("{}_hull.txt", strategy.name()));
        points_io::write_points(&out_path, &hull)?;
        tracing::info!(
            strategy = strategy.name(),
            hull_vertices = hull.len(),
            millis,
            out = %out_path.display(),
            "hull written"
        );
        runs.push(StrategyRun {
            strategy: strategy.name(),
            hull_vertices: hull.len(),
            millis,
            output: out_path.to_string_lossy().into_owned(),
        });
    }

    let summary = RunSummary {
        input: input.to_string_lossy().into_owned(),
        point_count: points.len(),
        runs,
    };
    let summary_path = out_dir.join("summary.json");
    std::fs::write(&summary_path, serde_json::to_vec_pretty(&summary)?)
        .with_context(|| format!("writing {}", summary_path.display()))?;
    Ok(())
}

fn generate(count: usize, x_range: i64, y_range: i64, seed: u64, index: u64, out: &Path) -> Result<()> {
    let cfg = CloudCfg {
        count: PointCount::Fixed(count),
        x_range,
        y_range,
    };
    let points = draw_point_cloud(cfg, ReplayToken { seed, index });
    points_io::write_points(out, &points)?;
    tracing::info!(points = points.len(), seed, index, out = %out.display(), "point cloud written");
    Ok(())
}
