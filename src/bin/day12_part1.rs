//! Day 12: shapes are blocks of # cells, regions are WxH grids with a
//! wishlist of shape counts. A region qualifies when the wished-for cells
//! fit in its area.

use std::collections::HashMap;
use std::fs;

use anyhow::{Context, Result, ensure};
use regex::Regex;
use thiserror::Error;

const INPUT_PATH: &str = "inputs/day12.txt";

// Shape 0 covers 4 cells, shape 1 covers 3; only the first region has
// room for its wishlist.
const SELF_TEST: &str = "\
0:
##
##

1:
##
#.

2x2: 1 0
2x2: 1 1
";

#[derive(Debug, Error)]
enum LayoutError {
    #[error("no shapes found (expected blocks like '0:' with #/. rows)")]
    NoShapes,
    #[error("no regions found (expected lines like '12x5: 1 0 2')")]
    NoRegions,
}

#[derive(Debug, PartialEq, Eq)]
struct Region {
    width: u64,
    height: u64,
    /// Requested count per shape index.
    counts: Vec<u64>,
}

fn parse_layout(input: &str) -> Result<(HashMap<u64, u64>, Vec<Region>)> {
    let shape_re = Regex::new(r"^\s*(\d+):\s*$").context("compiling shape header regex")?;
    let region_re =
        Regex::new(r"^\s*(\d+)x(\d+):\s*(.*?)\s*$").context("compiling region regex")?;

    let lines: Vec<&str> = input.lines().map(|line| line.trim_end_matches('\r')).collect();

    let mut shape_cells: HashMap<u64, u64> = HashMap::new();
    let mut i = 0;
    while i < lines.len() {
        let Some(caps) = shape_re.captures(lines[i]) else {
            break;
        };
        let index: u64 = caps[1].parse().context("shape index out of range")?;
        i += 1;

        let mut cells = 0;
        while i < lines.len() {
            let line = lines[i];
            if line.trim().is_empty() || shape_re.is_match(line) || region_re.is_match(line) {
                break;
            }
            cells += line.chars().filter(|&c| c == '#').count() as u64;
            i += 1;
        }
        shape_cells.insert(index, cells);

        while i < lines.len() && lines[i].trim().is_empty() {
            i += 1;
        }
    }

    let mut regions = Vec::new();
    for line in &lines {
        let Some(caps) = region_re.captures(line) else {
            continue;
        };
        regions.push(Region {
            width: caps[1].parse().context("region width out of range")?,
            height: caps[2].parse().context("region height out of range")?,
            counts: caps[3]
                .split_whitespace()
                .map(|count| {
                    count
                        .parse()
                        .with_context(|| format!("bad shape count in {line:?}"))
                })
                .collect::<Result<Vec<u64>>>()?,
        });
    }

    if shape_cells.is_empty() {
        return Err(LayoutError::NoShapes.into());
    }
    if regions.is_empty() {
        return Err(LayoutError::NoRegions.into());
    }
    Ok((shape_cells, regions))
}

/// Cell-count feasibility: the wished-for shapes' # cells must not exceed
/// the region's area, and every wished-for shape must exist.
fn region_can_fit(shape_cells: &HashMap<u64, u64>, region: &Region) -> bool {
    let mut required = 0;
    for (index, &count) in region.counts.iter().enumerate() {
        if count == 0 {
            continue;
        }
        match shape_cells.get(&(index as u64)) {
            Some(&cells) => required += count * cells,
            None => return false,
        }
    }
    required <= region.width * region.height
}

fn count_fitting_regions(input: &str) -> Result<usize> {
    let (shape_cells, regions) = parse_layout(input)?;
    Ok(regions
        .iter()
        .filter(|region| region_can_fit(&shape_cells, region))
        .count())
}

fn check_self_test() -> Result<()> {
    let fitting = count_fitting_regions(SELF_TEST)?;
    ensure!(fitting == 1, "self-test failed: expected 1, got {fitting}");
    Ok(())
}

fn main() -> Result<()> {
    check_self_test()?;

    let input = fs::read_to_string(INPUT_PATH)
        .with_context(|| format!("reading {INPUT_PATH}"))?;

    println!("{}", count_fitting_regions(&input)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn self_test_layout() {
        assert_eq!(count_fitting_regions(SELF_TEST).unwrap(), 1);
    }

    #[test]
    fn counts_only_filled_cells() {
        let (shape_cells, regions) = parse_layout(SELF_TEST).unwrap();
        assert_eq!(shape_cells[&0], 4);
        assert_eq!(shape_cells[&1], 3);
        assert_eq!(regions.len(), 2);
        assert_eq!(regions[0].counts, vec![1, 0]);
    }

    #[test]
    fn unknown_shape_index_cannot_fit() {
        let shape_cells = HashMap::from([(0u64, 1u64)]);
        let region = Region { width: 10, height: 10, counts: vec![0, 2] };
        assert!(!region_can_fit(&shape_cells, &region));
    }

    #[test]
    fn missing_sections_are_distinct_errors() {
        assert!(parse_layout("2x2: 1").is_err());
        assert!(parse_layout("0:\n##\n").is_err());
    }
}
