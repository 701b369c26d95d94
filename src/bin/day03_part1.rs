//! Day 3: per battery bank, pick two batteries in order for the highest
//! 2-digit joltage, then sum over all banks.

use std::fs;

use anyhow::{Context, Result, ensure};

const INPUT_PATH: &str = "inputs/day03.txt";

const EXAMPLE: &str = "\
987654321111111
811111111111119
234234234234278
818181911112111
";

fn parse_banks(input: &str) -> Vec<Vec<u32>> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| line.chars().filter_map(|c| c.to_digit(10)).collect())
        .collect()
}

/// Highest `10 * d_i + d_j` with `i < j`: track the best first digit seen
/// so far while every later digit auditions as the second.
fn max_joltage(bank: &[u32]) -> Result<u32> {
    ensure!(bank.len() >= 2, "bank needs at least two batteries");

    let mut best_first = bank[0];
    let mut best = 0;
    for &digit in &bank[1..] {
        best = best.max(best_first * 10 + digit);
        best_first = best_first.max(digit);
    }
    Ok(best)
}

fn total_joltage(banks: &[Vec<u32>]) -> Result<u64> {
    banks
        .iter()
        .map(|bank| max_joltage(bank).map(u64::from))
        .sum()
}

fn check_example() -> Result<()> {
    let total = total_joltage(&parse_banks(EXAMPLE))?;
    ensure!(total == 357, "example check failed: expected 357, got {total}");
    Ok(())
}

fn main() -> Result<()> {
    check_example()?;

    let input = fs::read_to_string(INPUT_PATH)
        .with_context(|| format!("reading {INPUT_PATH}"))?;
    let banks = parse_banks(&input);

    println!("Total output joltage: {}", total_joltage(&banks)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example_banks() {
        let banks = parse_banks(EXAMPLE);
        let per_bank: Vec<u32> = banks.iter().map(|b| max_joltage(b).unwrap()).collect();
        assert_eq!(per_bank, vec![98, 89, 78, 92]);
        assert_eq!(total_joltage(&banks).unwrap(), 357);
    }

    #[test]
    fn keeps_digit_order() {
        // The 9 comes last, so it can only be the second digit.
        assert_eq!(max_joltage(&[1, 2, 9]).unwrap(), 29);
    }

    #[test]
    fn single_battery_is_an_error() {
        assert!(max_joltage(&[7]).is_err());
    }
}
