//! Day 3, upgraded adapters: per bank, pick twelve batteries in order for
//! the highest 12-digit joltage.

use std::fs;

use anyhow::{Context, Result, ensure};

const INPUT_PATH: &str = "inputs/day03.txt";
const CELLS_PER_BANK: usize = 12;

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

/// Lexicographically largest length-`keep` subsequence: a monotonic stack
/// with a budget of `len - keep` removals, trimmed from the tail if the
/// budget is left over.
fn max_joltage(bank: &[u32], keep: usize) -> Result<u64> {
    ensure!(
        bank.len() >= keep,
        "bank has {} batteries, need at least {keep}",
        bank.len()
    );

    let mut removals = bank.len() - keep;
    let mut stack: Vec<u32> = Vec::with_capacity(bank.len());
    for &digit in bank {
        while removals > 0 && stack.last().is_some_and(|&top| top < digit) {
            stack.pop();
            removals -= 1;
        }
        stack.push(digit);
    }
    stack.truncate(keep);

    Ok(stack.iter().fold(0u64, |value, &d| value * 10 + u64::from(d)))
}

fn total_joltage(banks: &[Vec<u32>], keep: usize) -> Result<u64> {
    banks.iter().map(|bank| max_joltage(bank, keep)).sum()
}

fn check_example() -> Result<()> {
    let total = total_joltage(&parse_banks(EXAMPLE), CELLS_PER_BANK)?;
    ensure!(
        total == 3_121_910_778_619,
        "example check failed: expected 3121910778619, got {total}"
    );
    Ok(())
}

fn main() -> Result<()> {
    check_example()?;

    let input = fs::read_to_string(INPUT_PATH)
        .with_context(|| format!("reading {INPUT_PATH}"))?;
    let banks = parse_banks(&input);

    println!("Total output joltage: {}", total_joltage(&banks, CELLS_PER_BANK)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn example_banks() {
        let banks = parse_banks(EXAMPLE);
        let per_bank: Vec<u64> = banks
            .iter()
            .map(|b| max_joltage(b, CELLS_PER_BANK).unwrap())
            .collect();
        assert_eq!(
            per_bank,
            vec![987_654_321_111, 811_111_111_119, 434_234_234_278, 888_911_112_111]
        );
        assert_eq!(
            total_joltage(&banks, CELLS_PER_BANK).unwrap(),
            3_121_910_778_619
        );
    }

    #[test]
    fn spends_leftover_budget_at_the_tail() {
        // Non-increasing bank: nothing to pop, so the tail is dropped.
        assert_eq!(max_joltage(&[9, 8, 7, 6], 2).unwrap(), 98);
    }

    #[test]
    fn short_bank_is_an_error() {
        assert!(max_joltage(&[1, 2, 3], 4).is_err());
    }

    proptest! {
        /// The greedy stack matches brute force over every order-preserving
        /// k-subsequence on small banks.
        #[test]
        fn greedy_matches_brute_force(
            bank in prop::collection::vec(0u32..10, 1..10),
            keep in 1usize..5,
        ) {
            prop_assume!(keep <= bank.len());
            let brute = bank
                .iter()
                .copied()
                .combinations(keep)
                .map(|digits| digits.iter().fold(0u64, |v, &d| v * 10 + u64::from(d)))
                .max()
                .unwrap();
            prop_assert_eq!(max_joltage(&bank, keep).unwrap(), brute);
        }
    }
}
