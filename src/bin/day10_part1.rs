//! Day 10: each button toggles a fixed set of indicator lights; reach the
//! target pattern from all-off with as few presses as possible.
//!
//! Pressing a button twice cancels out, so this is a linear system over
//! GF(2): eliminate, take a particular solution, and sweep the null space
//! for the minimum Hamming weight.

use std::fs;

use anyhow::{Context, Result, ensure};
use rayon::prelude::*;
use regex::Regex;

const INPUT_PATH: &str = "inputs/day10.txt";

const EXAMPLE: &str = "\
[.##.] (3) (1,3) (2) (2,3) (0,2) (0,1) {3,5,4,7}
[...#.] (0,2,3,4) (2,3) (0,4) (0,1,2) (1,2,3,4) {7,5,12,7,2}
[.###.#] (0,1,2,3,4) (0,3,4) (0,1,2,4,5) (1,2) {10,11,11,5,10,5}
";

#[derive(Debug)]
struct Machine {
    /// Bit i set: light i must end up on.
    target: u64,
    /// One mask per button; bit i set: the button toggles light i.
    buttons: Vec<u64>,
    lights: u32,
}

fn parse_machines(input: &str) -> Result<Vec<Machine>> {
    let lights_re = Regex::new(r"\[([.#]*)\]").context("compiling light pattern regex")?;
    let button_re = Regex::new(r"\(([^)]*)\)").context("compiling button regex")?;

    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            let pattern = lights_re
                .captures(line)
                .and_then(|caps| caps.get(1))
                .with_context(|| format!("line {line:?} is missing its [..] light pattern"))?
                .as_str();
            ensure!(pattern.len() <= 64, "more than 64 lights in {line:?}");

            let mut target = 0u64;
            for (i, ch) in pattern.chars().enumerate() {
                if ch == '#' {
                    target |= 1 << i;
                }
            }

            let mut buttons = Vec::new();
            for caps in button_re.captures_iter(line) {
                let body = caps[1].trim();
                if body.is_empty() {
                    continue;
                }
                let mut mask = 0u64;
                for index in body.split(',') {
                    let index: u32 = index
                        .trim()
                        .parse()
                        .with_context(|| format!("bad button index in {line:?}"))?;
                    ensure!(index < 64, "button index {index} out of range in {line:?}");
                    mask |= 1 << index;
                }
                buttons.push(mask);
            }

            Ok(Machine {
                target,
                buttons,
                lights: pattern.len() as u32,
            })
        })
        .collect()
}

/// Minimum number of buttons to press for one machine.
fn min_presses(machine: &Machine) -> Result<u32> {
    let vars = machine.buttons.len();
    if vars == 0 {
        ensure!(machine.target == 0, "machine has no buttons but lit targets");
        return Ok(0);
    }
    ensure!(vars <= 64, "more than 64 buttons on one machine");

    // One equation per light: a mask over the button variables plus the
    // right-hand side bit.
    let mut rows: Vec<(u64, u64)> = (0..machine.lights)
        .map(|light| {
            let mut mask = 0u64;
            for (col, &button) in machine.buttons.iter().enumerate() {
                if button >> light & 1 == 1 {
                    mask |= 1 << col;
                }
            }
            (mask, machine.target >> light & 1)
        })
        .collect();

    // Gauss-Jordan elimination to reduced row echelon form.
    let mut pivots: Vec<(usize, usize)> = Vec::new(); // (column, row)
    let mut is_pivot_col = vec![false; vars];
    let mut next_row = 0;
    for col in 0..vars {
        let Some(found) = (next_row..rows.len()).find(|&r| rows[r].0 >> col & 1 == 1) else {
            continue;
        };
        rows.swap(next_row, found);
        let (pivot_mask, pivot_rhs) = rows[next_row];
        for (r, row) in rows.iter_mut().enumerate() {
            if r != next_row && row.0 >> col & 1 == 1 {
                row.0 ^= pivot_mask;
                row.1 ^= pivot_rhs;
            }
        }
        pivots.push((col, next_row));
        is_pivot_col[col] = true;
        next_row += 1;
        if next_row == rows.len() {
            break;
        }
    }

    ensure!(
        rows.iter().all(|&(mask, rhs)| mask != 0 || rhs == 0),
        "inconsistent light system"
    );

    // Particular solution: all free variables zero.
    let mut particular = 0u64;
    for &(col, row) in &pivots {
        if rows[row].1 & 1 == 1 {
            particular |= 1 << col;
        }
    }

    // Null-space basis: one vector per free column.
    let free_cols: Vec<usize> = (0..vars).filter(|&c| !is_pivot_col[c]).collect();
    let basis: Vec<u64> = free_cols
        .iter()
        .map(|&free| {
            let mut vector = 1u64 << free;
            for &(col, row) in &pivots {
                if rows[row].0 >> free & 1 == 1 {
                    vector ^= 1 << col;
                }
            }
            vector
        })
        .collect();

    if basis.is_empty() {
        return Ok(particular.count_ones());
    }

    // Every solution is the particular one xor some basis combination;
    // sweep them all for the lightest.
    (0u64..1 << basis.len())
        .into_par_iter()
        .map(|combo| {
            let mut solution = particular;
            for (bit, &vector) in basis.iter().enumerate() {
                if combo >> bit & 1 == 1 {
                    solution ^= vector;
                }
            }
            solution.count_ones()
        })
        .min()
        .context("empty null-space sweep")
}

fn total_presses(machines: &[Machine]) -> Result<u64> {
    machines
        .iter()
        .map(|machine| min_presses(machine).map(u64::from))
        .sum()
}

fn check_example() -> Result<()> {
    let total = total_presses(&parse_machines(EXAMPLE)?)?;
    ensure!(total == 7, "example check failed: expected 7, got {total}");
    Ok(())
}

fn main() -> Result<()> {
    check_example()?;

    let input = fs::read_to_string(INPUT_PATH)
        .with_context(|| format!("reading {INPUT_PATH}"))?;
    let machines = parse_machines(&input)?;

    println!("Fewest button presses: {}", total_presses(&machines)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn example_machines() {
        let machines = parse_machines(EXAMPLE).unwrap();
        let per_machine: Vec<u32> =
            machines.iter().map(|m| min_presses(m).unwrap()).collect();
        assert_eq!(per_machine, vec![2, 3, 2]);
        assert_eq!(total_presses(&machines).unwrap(), 7);
    }

    #[test]
    fn already_solved_machine_needs_nothing() {
        let machine = Machine { target: 0, buttons: vec![0b01, 0b10], lights: 2 };
        assert_eq!(min_presses(&machine).unwrap(), 0);
    }

    #[test]
    fn unreachable_pattern_is_an_error() {
        // Only button toggles light 0, but light 1 must turn on.
        let machine = Machine { target: 0b10, buttons: vec![0b01], lights: 2 };
        assert!(min_presses(&machine).is_err());
    }

    /// Brute force over all button subsets.
    fn brute_min_presses(machine: &Machine) -> Option<u32> {
        (0u64..1 << machine.buttons.len())
            .filter(|&subset| {
                let toggled = machine
                    .buttons
                    .iter()
                    .enumerate()
                    .filter(|&(i, _)| subset >> i & 1 == 1)
                    .fold(0u64, |acc, (_, &mask)| acc ^ mask);
                toggled == machine.target
            })
            .map(u64::count_ones)
            .min()
    }

    proptest! {
        /// Elimination plus null-space sweep agrees with subset brute force
        /// on small machines.
        #[test]
        fn matches_subset_brute_force(
            buttons in prop::collection::vec(0u64..16, 1..7),
            target in 0u64..16,
        ) {
            let machine = Machine { target, buttons, lights: 4 };
            match brute_min_presses(&machine) {
                Some(best) => prop_assert_eq!(min_presses(&machine).unwrap(), best),
                None => prop_assert!(min_presses(&machine).is_err()),
            }
        }
    }
}
