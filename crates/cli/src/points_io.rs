//! Point-file reader and writer.
//!
//! Format: the first token is the point count, followed by that many
//! `x y` integer pairs, all whitespace-separated. Tokens past the declared
//! count are ignored. The writer emits the count line and one pair per
//! line, so outputs parse back as inputs.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use hull2d::Point;

pub fn read_points(path: &Path) -> Result<Vec<Point>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let mut tokens = text.split_whitespace();
    let count: usize = tokens
        .next()
        .with_context(|| format!("{}: missing point count", path.display()))?
        .parse()
        .with_context(|| format!("{}: malformed point count", path.display()))?;

    let mut points = Vec::with_capacity(count);
    for i in 0..count {
        let x = parse_coord(&mut tokens, path, i, "x")?;
        let y = parse_coord(&mut tokens, path, i, "y")?;
        points.push(Point::new(x, y));
    }
    Ok(points)
}

fn parse_coord<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    path: &Path,
    i: usize,
    axis: &str,
) -> Result<i64> {
    tokens
        .next()
        .with_context(|| format!("{}: point {i} is missing its {axis} coordinate", path.display()))?
        .parse()
        .with_context(|| {
            format!("{}: point {i} has a malformed {axis} coordinate", path.display())
        })
}

pub fn write_points(path: &Path, points: &[Point]) -> Result<()> {
    let mut out = format!("{}\n", points.len());
    for p in points {
        out.push_str(&format!("{} {}\n", p.x, p.y));
    }
    fs::write(path, out).with_context(|| format!("writing {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_preserves_points_and_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("points.txt");
        let points = vec![Point::new(-3, 7), Point::new(0, 0), Point::new(12, -5)];
        write_points(&path, &points).unwrap();
        assert_eq!(read_points(&path).unwrap(), points);
    }

    #[test]
    fn count_header_limits_how_many_points_are_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("points.txt");
        fs::write(&path, "2\n0 0\n1 1\n9 9\n").unwrap();
        assert_eq!(read_points(&path).unwrap().len(), 2);
    }

    #[test]
    fn truncated_file_reports_the_missing_coordinate() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("points.txt");
        fs::write(&path, "2\n0 0\n5\n").unwrap();
        let err = read_points(&path).unwrap_err();
        assert!(format!("{err:#}").contains("missing its y coordinate"), "{err:#}");
    }

    #[test]
    fn malformed_count_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("points.txt");
        fs::write(&path, "many\n0 0\n").unwrap();
        assert!(read_points(&path).is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_points(&dir.path().join("absent.txt")).is_err());
    }
}
