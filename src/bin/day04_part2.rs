//! Day 4, full clear-out: keep removing every currently accessible roll in
//! one sweep until none can be removed, and count the total taken.

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

/// Remove every accessible roll per round, all at once, until a fixpoint.
fn count_removed_rolls(grid: &[Vec<u8>]) -> usize {
    let mut grid = grid.to_vec();
    let mut removed_total = 0;

    loop {
        let mut removable = Vec::new();
        for (row, line) in grid.iter().enumerate() {
            for (col, &cell) in line.iter().enumerate() {
                if cell == b'@' && roll_neighbors(&grid, row, col) < 4 {
                    removable.push((row, col));
                }
            }
        }

        if removable.is_empty() {
            return removed_total;
        }
        removed_total += removable.len();
        for (row, col) in removable {
            grid[row][col] = b'.';
        }
    }
}

fn check_example() -> Result<()> {
    let grid = parse_grid(EXAMPLE);
    let accessible = count_accessible_rolls(&grid);
    ensure!(
        accessible == 13,
        "example check failed: expected 13 accessible, got {accessible}"
    );
    let removed = count_removed_rolls(&grid);
    ensure!(
        removed == 43,
        "example check failed: expected 43 removed, got {removed}"
    );
    Ok(())
}

fn main() -> Result<()> {
    check_example()?;

    let input = fs::read_to_string(INPUT_PATH)
        .with_context(|| format!("reading {INPUT_PATH}"))?;
    let grid = parse_grid(&input);

    println!("Accessible rolls: {}", count_accessible_rolls(&grid));
    println!("Rolls removed in total: {}", count_removed_rolls(&grid));
    Ok(())
}
