//! Day 7: tachyon beams fall straight down from S; every splitter (^) they
//! hit turns one beam into two. Count the splitter activations.

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

/// Step the set of beam positions one row at a time; beams that share a
/// position merge, which is what the set encodes.
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

fn check_example() -> Result<()> {
    let splits = count_splits(&parse_grid(EXAMPLE))?;
    ensure!(splits == 21, "example check failed: expected 21, got {splits}");
    Ok(())
}

fn main() -> Result<()> {
    check_example()?;

    let input = fs::read_to_string(INPUT_PATH)
        .with_context(|| format!("reading {INPUT_PATH}"))?;
    let grid = parse_grid(&input);

    println!("Splits: {}", count_splits(&grid)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example_manifold() {
        assert_eq!(count_splits(&parse_grid(EXAMPLE)).unwrap(), 21);
    }

    #[test]
    fn merged_beams_activate_a_splitter_once() {
        // The two middle splitters both feed the center column; the beams
        // merge there, so the bottom splitter fires once, not twice.
        let grid = parse_grid("..S..\n..^..\n.^.^.\n..^..\n.....");
        assert_eq!(count_splits(&grid).unwrap(), 4);
    }

    #[test]
    fn missing_start_is_an_error() {
        assert!(count_splits(&parse_grid("...\n.^.")).is_err());
    }
}
