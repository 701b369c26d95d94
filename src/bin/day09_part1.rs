//! Day 9: pick two red tiles as opposite corners of a rectangle and maximize
//! its area, both corner columns and rows included.

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

fn inclusive_area((x1, y1): Point, (x2, y2): Point) -> u64 {
    ((x2 - x1).unsigned_abs() + 1) * ((y2 - y1).unsigned_abs() + 1)
}

fn largest_rectangle(points: &[Point]) -> u64 {
    points
        .iter()
        .tuple_combinations::<(_, _)>()
        .map(|(&a, &b)| inclusive_area(a, b))
        .max()
        .unwrap_or(0)
}

fn check_example() -> Result<()> {
    let area = largest_rectangle(&parse_points(EXAMPLE)?);
    ensure!(area == 50, "example check failed: expected 50, got {area}");
    Ok(())
}

fn main() -> Result<()> {
    check_example()?;

    let input = fs::read_to_string(INPUT_PATH)
        .with_context(|| format!("reading {INPUT_PATH}"))?;
    let points = parse_points(&input)?;

    println!("Largest rectangle: {}", largest_rectangle(&points));
    Ok(())
}
