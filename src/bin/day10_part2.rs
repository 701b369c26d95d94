//! Day 10, joltage counters: every press of a button adds 1 to each counter
//! it lists; hit all the targets exactly with the fewest total presses.
//!
//! Work through the targets binary digit by binary digit: the buttons
//! pressed an odd number of times must match the targets' parity without
//! overshooting, and what remains is the same problem on (target - picks) / 2
//! at double the cost. Memoize on the residual target vector.

use std::collections::HashMap;
use std::fs;

use anyhow::{Context, Result, bail, ensure};
use regex::Regex;

const INPUT_PATH: &str = "inputs/day10.txt";

const EXAMPLE: &str = "\
[.##.] (3) (1,3) (2) (2,3) (0,2) (0,1) {3,5,4,7}
[...#.] (0,2,3,4) (2,3) (0,4) (0,1,2) (1,2,3,4) {7,5,12,7,2}
[.###.#] (0,1,2,3,4) (0,3,4) (0,1,2,4,5) (1,2) {10,11,11,5,10,5}
";

#[derive(Debug)]
struct Machine {
    /// Counter indices each button feeds.
    buttons: Vec<Vec<usize>>,
    target: Vec<u64>,
}

fn parse_machines(input: &str) -> Result<Vec<Machine>> {
    let button_re = Regex::new(r"\(([^)]*)\)").context("compiling button regex")?;
    let target_re = Regex::new(r"\{([^}]*)\}").context("compiling target regex")?;

    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            let mut buttons = Vec::new();
            for caps in button_re.captures_iter(line) {
                let body = caps[1].trim();
                if body.is_empty() {
                    continue;
                }
                let counters = body
                    .split(',')
                    .map(|index| {
                        index
                            .trim()
                            .parse()
                            .with_context(|| format!("bad counter index in {line:?}"))
                    })
                    .collect::<Result<Vec<usize>>>()?;
                buttons.push(counters);
            }

            let target = target_re
                .captures(line)
                .and_then(|caps| caps.get(1))
                .with_context(|| format!("line {line:?} is missing its {{..}} targets"))?
                .as_str()
                .split(',')
                .map(|count| {
                    count
                        .trim()
                        .parse()
                        .with_context(|| format!("bad target count in {line:?}"))
                })
                .collect::<Result<Vec<u64>>>()?;

            Ok(Machine { buttons, target })
        })
        .collect()
}

/// Per-counter increments of one press of every button in `subset`.
fn subset_increments(buttons: &[Vec<usize>], counters: usize, subset: usize) -> Vec<u64> {
    let mut increments = vec![0u64; counters];
    for (button, feeds) in buttons.iter().enumerate() {
        if subset >> button & 1 == 1 {
            for &counter in feeds {
                if counter < counters {
                    increments[counter] += 1;
                }
            }
        }
    }
    increments
}

fn solve_layer(
    target: &[u64],
    subsets: &[(u64, Vec<u64>)],
    memo: &mut HashMap<Vec<u64>, Option<u64>>,
) -> Option<u64> {
    if target.iter().all(|&t| t == 0) {
        return Some(0);
    }
    if let Some(&cached) = memo.get(target) {
        return cached;
    }

    let mut best: Option<u64> = None;
    for (presses, increments) in subsets {
        let usable = increments
            .iter()
            .zip(target)
            .all(|(&inc, &t)| inc <= t && (inc ^ t) & 1 == 0);
        if !usable {
            continue;
        }
        let residual: Vec<u64> = increments
            .iter()
            .zip(target)
            .map(|(&inc, &t)| (t - inc) / 2)
            .collect();
        if let Some(deeper) = solve_layer(&residual, subsets, memo) {
            let candidate = presses + 2 * deeper;
            best = Some(best.map_or(candidate, |b| b.min(candidate)));
        }
    }

    memo.insert(target.to_vec(), best);
    best
}

/// Fewest total presses reaching the machine's targets exactly.
fn min_presses(machine: &Machine) -> Result<u64> {
    let counters = machine.target.len();
    ensure!(
        machine.buttons.len() < usize::BITS as usize,
        "too many buttons on one machine"
    );

    let subsets: Vec<(u64, Vec<u64>)> = (0..1usize << machine.buttons.len())
        .map(|subset| {
            (
                subset.count_ones() as u64,
                subset_increments(&machine.buttons, counters, subset),
            )
        })
        .collect();

    let mut memo = HashMap::new();
    match solve_layer(&machine.target, &subsets, &mut memo) {
        Some(best) => Ok(best),
        None => bail!("no combination of button presses reaches the targets"),
    }
}

fn total_presses(machines: &[Machine]) -> Result<u64> {
    machines.iter().map(min_presses).sum()
}

fn check_example() -> Result<()> {
    let total = total_presses(&parse_machines(EXAMPLE)?)?;
    ensure!(total == 33, "example check failed: expected 33, got {total}");
    Ok(())
}

fn main() -> Result<()> {
    check_example()?;

    let input = fs::read_to_string(INPUT_PATH)
        .with_context(|| format!("reading {INPUT_PATH}"))?;
    let machines = parse_machines(&input)?;

    println!("Fewest total presses: {}", total_presses(&machines)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example_machines() {
        let machines = parse_machines(EXAMPLE).unwrap();
        let per_machine: Vec<u64> =
            machines.iter().map(|m| min_presses(m).unwrap()).collect();
        assert_eq!(per_machine, vec![10, 12, 11]);
        assert_eq!(total_presses(&machines).unwrap(), 33);
    }

    #[test]
    fn single_button_machine_presses_it_target_times() {
        let machine = Machine { buttons: vec![vec![0]], target: vec![9] };
        assert_eq!(min_presses(&machine).unwrap(), 9);
    }

    #[test]
    fn combined_button_beats_pressing_singles() {
        // {4,4}: four presses of the pair button, not eight singles.
        let machine = Machine {
            buttons: vec![vec![0], vec![1], vec![0, 1]],
            target: vec![4, 4],
        };
        assert_eq!(min_presses(&machine).unwrap(), 4);
    }

    #[test]
    fn odd_parity_without_a_matching_button_fails() {
        let machine = Machine { buttons: vec![vec![0, 1]], target: vec![2, 3] };
        assert!(min_presses(&machine).is_err());
    }

    #[test]
    fn zero_targets_need_no_presses() {
        let machine = Machine { buttons: vec![vec![0], vec![1]], target: vec![0, 0] };
        assert_eq!(min_presses(&machine).unwrap(), 0);
    }
}
