//! Day 7, many-worlds reading: every splitter forks the timeline, and a
//! tachyon leaving the manifold ends one. Count the distinct timelines.

use std::collections::HashSet;
use std::fs;

use anyhow::{Context, Result, ensure};

const INPUT_PATH: &str = "inputs/day07.txt";

const EXAMPLE: &str = "\
.......S.......
...............
.......^.......
...............
......^.^......
...............
.....^.^.^.....
...............
....^.^...^....
...............
...^.^...^.^...
...............
..^...^.....^..
...............
.^.^.^.^.^...^.
...............
";

fn parse_grid(input: &str) -> Vec<&str> {
    input.lines().filter(|line| !line.trim().is_empty()).collect()
}

fn find_start(grid: &[&str]) -> Result<(usize, usize)> {
    grid.iter()
        .enumerate()
        .find_map(|(row, line)| line.find('S').map(|col| (row, col)))
        .context("no 'S' in the manifold")
}

/// Beam-merging split count, as before.
fn count_splits(grid: &[&str]) -> Result<u64> {
    if grid.is_empty() {
        return Ok(0);
    }
    let height = grid.len();
    let width = grid[0].len();

    let mut active = HashSet::from([find_start(grid)?]);
    let mut splits = 0;

    while !active.is_empty() {
        let mut next = HashSet::new();
        for (row, col) in active {
            let below = row + 1;
            if below >= height {
                continue;
            }
            if grid[below].as_bytes().get(col) == Some(&b'^') {
                splits += 1;
                if col > 0 {
                    next.insert((below, col - 1));
                }
                if col + 1 < width {
                    next.insert((below, col + 1));
                }
            } else {
                next.insert((below, col));
            }
        }
        active = next;
    }

    Ok(splits)
}

/// Propagate per-column timeline counts row by row. A splitter sends a
/// column's count both ways; falling off the side or the bottom of the
/// grid finishes those timelines. The counts double up fast, hence u128.
fn count_timelines(grid: &[&str]) -> Result<u128> {
    if grid.is_empty() {
        return Ok(0);
    }
    let height = grid.len();
    let width = grid[0].len();
    let (start_row, start_col) = find_start(grid)?;

    let mut counts = vec![0u128; width];
    counts[start_col] = 1;
    let mut finished = 0u128;

    let mut row = start_row;
    while row + 1 < height && counts.iter().any(|&n| n > 0) {
        let below = row + 1;
        let mut next = vec![0u128; width];

        for (col, &n) in counts.iter().enumerate() {
            if n == 0 {
                continue;
            }
            if grid[below].as_bytes().get(col) == Some(&b'^') {
                if col > 0 {
                    next[col - 1] += n;
                } else {
                    finished += n;
                }
                if col + 1 < width {
                    next[col + 1] += n;
                } else {
                    finished += n;
                }
            } else {
                next[col] += n;
            }
        }

        counts = next;
        row = below;
    }

    finished += counts.iter().sum::<u128>();
    Ok(finished)
}

fn check_example() -> Result<()> {
    let grid = parse_grid(EXAMPLE);
    let splits = count_splits(&grid)?;
    ensure!(splits == 21, "example check failed: expected 21 splits, got {splits}");
    let timelines = count_timelines(&grid)?;
    ensure!(
        timelines == 40,
        "example check failed: expected 40 timelines, got {timelines}"
    );
    Ok(())
}

fn main() -> Result<()> {
    check_example()?;

    let input = fs::read_to_string(INPUT_PATH)
        .with_context(|| format!("reading {INPUT_PATH}"))?;
    let grid = parse_grid(&input);

    println!("Splits: {}", count_splits(&grid)?);
    println!("Timelines: {}", count_timelines(&grid)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example_manifold() {
        let grid = parse_grid(EXAMPLE);
        assert_eq!(count_splits(&grid).unwrap(), 21);
        assert_eq!(count_timelines(&grid).unwrap(), 40);
    }

    #[test]
    fn splitter_free_manifold_has_one_timeline() {
        let grid = parse_grid(".S.\n...\n...");
        assert_eq!(count_timelines(&grid).unwrap(), 1);
    }

    #[test]
    fn timelines_multiply_where_beams_would_merge() {
        // Two timelines pass through the center column separately even
        // though the beam picture merges them.
        let grid = parse_grid("..S..\n..^..\n.^.^.\n.....");
        assert_eq!(count_splits(&grid).unwrap(), 3);
        assert_eq!(count_timelines(&grid).unwrap(), 4);
    }

    #[test]
    fn leaving_the_side_ends_a_timeline() {
        let grid = parse_grid("S.\n^.\n..");
        assert_eq!(count_timelines(&grid).unwrap(), 2);
    }
}
