//! Day 4: count the paper rolls (@) a forklift can reach, i.e. rolls with
//! fewer than four rolls in the eight surrounding positions.

use std::fs;

use anyhow::{Context, Result, ensure};

const INPUT_PATH: &str = "inputs/day04.txt";

const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

const EXAMPLE: &str = "\
..@@.@@@@.
@@@.@.@.@@
@@@@@.@.@@
@.@@@@..@.
@@.@@@@.@@
.@@@@@@@.@
.@.@.@.@@@
@.@@@.@@@@
.@@@@@@@@.
@.@.@@@.@.
";

fn parse_grid(input: &str) -> Vec<Vec<u8>> {
    input
        .lines()
        .filter(|line| !line.is_empty())
        .map(|line| line.as_bytes().to_vec())
        .collect()
}

fn roll_neighbors(grid: &[Vec<u8>], row: usize, col: usize) -> usize {
    NEIGHBOR_OFFSETS
        .iter()
        .filter(|&&(dr, dc)| {
            let r = row as i64 + dr;
            let c = col as i64 + dc;
            r >= 0
                && c >= 0
                && grid.get(r as usize).and_then(|line| line.get(c as usize)) == Some(&b'@')
        })
        .count()
}

fn count_accessible_rolls(grid: &[Vec<u8>]) -> usize {
    let mut accessible = 0;
    for (row, line) in grid.iter().enumerate() {
        for (col, &cell) in line.iter().enumerate() {
            if cell == b'@' && roll_neighbors(grid, row, col) < 4 {
                accessible += 1;
            }
        }
    }
    accessible
}

fn check_example() -> Result<()> {
    let accessible = count_accessible_rolls(&parse_grid(EXAMPLE));
    ensure!(
        accessible == 13,
        "example check failed: expected 13, got {accessible}"
    );
    Ok(())
}

fn main() -> Result<()> {
    check_example()?;

    let input = fs::read_to_string(INPUT_PATH)
        .with_context(|| format!("reading {INPUT_PATH}"))?;
    let grid = parse_grid(&input);

    println!("Accessible rolls: {}", count_accessible_rolls(&grid));
    Ok(())
}
