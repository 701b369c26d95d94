//! Day 9, staying on the carpet: the red tiles are the corners of a closed
//! rectilinear loop, and the rectangle must lie entirely inside or on it.

use std::fs;

use anyhow::{Context, Result, ensure};
use itertools::Itertools;

const INPUT_PATH: &str = "inputs/day09.txt";

const EXAMPLE: &str = "\
7,1
11,1
11,7
9,7
9,5
2,5
2,3
7,3
";

type Point = (i64, i64);

fn parse_points(input: &str) -> Result<Vec<Point>> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            let (x, y) = line
                .split_once(',')
                .with_context(|| format!("expected 'X,Y' in line {line:?}"))?;
            Ok((
                x.trim().parse().with_context(|| format!("bad X in {line:?}"))?,
                y.trim().parse().with_context(|| format!("bad Y in {line:?}"))?,
            ))
        })
        .collect()
}

/// The closed loop through the red tiles, in input order.
struct TileLoop {
    edges: Vec<(Point, Point)>,
}

impl TileLoop {
    fn new(points: &[Point]) -> Self {
        let edges = (0..points.len())
            .map(|i| (points[i], points[(i + 1) % points.len()]))
            .collect();
        Self { edges }
    }

    /// Point-in-or-on-polygon test in doubled coordinates, so rectangle
    /// centers (half-integer in tile space) stay integral. Boundary first,
    /// then a rightward ray cast over vertical edges with the usual
    /// half-open `[ymin, ymax)` rule.
    fn contains_doubled(&self, px: i64, py: i64) -> bool {
        for &((x1, y1), (x2, y2)) in &self.edges {
            if x1 == x2 {
                if px == 2 * x1 && (2 * y1.min(y2)..=2 * y1.max(y2)).contains(&py) {
                    return true;
                }
            } else if y1 == y2
                && py == 2 * y1
                && (2 * x1.min(x2)..=2 * x1.max(x2)).contains(&px)
            {
                return true;
            }
        }

        let mut crossings = 0;
        for &((x1, y1), (x2, y2)) in &self.edges {
            if x1 != x2 {
                continue;
            }
            let (ylo, yhi) = (2 * y1.min(y2), 2 * y1.max(y2));
            if (ylo..yhi).contains(&py) && 2 * x1 > px {
                crossings += 1;
            }
        }
        crossings % 2 == 1
    }

    /// Does any loop edge run through the open interior of the rectangle?
    fn crosses_interior(&self, xlo: i64, ylo: i64, xhi: i64, yhi: i64) -> bool {
        for &((x1, y1), (x2, y2)) in &self.edges {
            if x1 == x2 {
                let (slo, shi) = (y1.min(y2), y1.max(y2));
                if xlo < x1 && x1 < xhi && slo.max(ylo) < shi.min(yhi) {
                    return true;
                }
            } else {
                let (slo, shi) = (x1.min(x2), x1.max(x2));
                if ylo < y1 && y1 < yhi && slo.max(xlo) < shi.min(xhi) {
                    return true;
                }
            }
        }
        false
    }
}

fn rectangle_inside(tiles: &TileLoop, (x1, y1): Point, (x2, y2): Point) -> bool {
    // A single red tile is trivially inside.
    if (x1, y1) == (x2, y2) {
        return true;
    }

    // The center of the rectangle, in doubled coordinates.
    if !tiles.contains_doubled(x1 + x2, y1 + y2) {
        return false;
    }

    let (xlo, xhi) = (x1.min(x2), x1.max(x2));
    let (ylo, yhi) = (y1.min(y2), y1.max(y2));
    if xlo < xhi && ylo < yhi {
        !tiles.crosses_interior(xlo, ylo, xhi, yhi)
    } else {
        // Width-1 or height-1 strip: no open interior, check both ends.
        tiles.contains_doubled(2 * x1, 2 * y1) && tiles.contains_doubled(2 * x2, 2 * y2)
    }
}

fn largest_inside_rectangle(points: &[Point]) -> u64 {
    let tiles = TileLoop::new(points);
    let mut best = 0;

    for (&a, &b) in points.iter().tuple_combinations::<(_, _)>() {
        let area = ((b.0 - a.0).unsigned_abs() + 1) * ((b.1 - a.1).unsigned_abs() + 1);
        if area > best && rectangle_inside(&tiles, a, b) {
            best = area;
        }
    }
    best
}

fn check_example() -> Result<()> {
    let area = largest_inside_rectangle(&parse_points(EXAMPLE)?);
    ensure!(area == 24, "example check failed: expected 24, got {area}");
    Ok(())
}

fn main() -> Result<()> {
    check_example()?;

    let input = fs::read_to_string(INPUT_PATH)
        .with_context(|| format!("reading {INPUT_PATH}"))?;
    let points = parse_points(&input)?;

    println!("Largest rectangle inside the loop: {}", largest_inside_rectangle(&points));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example_tiles() {
        assert_eq!(largest_inside_rectangle(&parse_points(EXAMPLE).unwrap()), 24);
    }

    #[test]
    fn boundary_points_count_as_inside() {
        let square = TileLoop::new(&[(0, 0), (4, 0), (4, 4), (0, 4)]);
        assert!(square.contains_doubled(0, 0));
        assert!(square.contains_doubled(8, 4));
        assert!(square.contains_doubled(4, 4));
        assert!(!square.contains_doubled(9, 4));
    }

    #[test]
    fn full_square_fits_itself() {
        let points = [(0, 0), (4, 0), (4, 4), (0, 4)];
        assert_eq!(largest_inside_rectangle(&points), 25);
    }

    #[test]
    fn concave_notch_blocks_the_big_rectangle() {
        // An L-shape: the full bounding box spills outside the loop.
        let points = [(0, 0), (4, 0), (4, 2), (2, 2), (2, 4), (0, 4)];
        let area = largest_inside_rectangle(&points);
        assert!(area < 25);
        assert_eq!(area, 15);
    }
}
