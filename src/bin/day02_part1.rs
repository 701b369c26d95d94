//! Day 2: an ID is invalid when its decimal form is one half repeated twice
//! (1212, 446446). Sum every invalid ID inside the given ranges.

use std::fs;

use anyhow::{Context, Result, ensure};

const INPUT_PATH: &str = "inputs/day02.txt";

const EXAMPLE: &str = "11-22,95-115,998-1012,1188511880-1188511890,222220-222224,\
1698522-1698528,446443-446449,38593856-38593862,\
565653-565659,824824821-824824827,2121212118-2121212124";

fn parse_ranges(input: &str) -> Result<Vec<(u64, u64)>> {
    input
        .trim()
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            let (lo, hi) = part
                .split_once('-')
                .with_context(|| format!("range {part:?} is missing '-'"))?;
            Ok((
                lo.trim().parse().with_context(|| format!("bad range start in {part:?}"))?,
                hi.trim().parse().with_context(|| format!("bad range end in {part:?}"))?,
            ))
        })
        .collect()
}

fn digit_count(n: u64) -> u32 {
    n.checked_ilog10().map_or(1, |log| log + 1)
}

/// All invalid IDs in `lo..=hi`: numbers `t * (10^m + 1)` where `t` has
/// exactly `m` digits, enumerated per even total width instead of
/// scanning the range.
fn invalid_ids_in_range(lo: u64, hi: u64) -> Vec<u64> {
    let mut invalid = Vec::new();

    for width in digit_count(lo)..=digit_count(hi) {
        if width % 2 != 0 {
            continue;
        }
        let half = width / 2;
        let base = 10u64.pow(half);
        let factor = base + 1;

        let t_lo = lo.div_ceil(factor).max(10u64.pow(half - 1));
        let t_hi = (hi / factor).min(base - 1);

        for t in t_lo..=t_hi {
            let id = t * factor;
            if (lo..=hi).contains(&id) {
                invalid.push(id);
            }
        }
    }

    invalid
}

fn sum_invalid_ids(ranges: &[(u64, u64)]) -> u64 {
    ranges
        .iter()
        .map(|&(lo, hi)| invalid_ids_in_range(lo, hi).iter().sum::<u64>())
        .sum()
}

fn check_example() -> Result<()> {
    let ranges = parse_ranges(EXAMPLE)?;
    let total = sum_invalid_ids(&ranges);
    ensure!(
        total == 1_227_775_554,
        "example check failed: expected 1227775554, got {total}"
    );
    Ok(())
}

fn main() -> Result<()> {
    check_example()?;

    let input = fs::read_to_string(INPUT_PATH)
        .with_context(|| format!("reading {INPUT_PATH}"))?;
    let ranges = parse_ranges(&input)?;

    println!("Sum of all invalid IDs: {}", sum_invalid_ids(&ranges));
    Ok(())
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn example_total() {
        let ranges = parse_ranges(EXAMPLE).unwrap();
        assert_eq!(sum_invalid_ids(&ranges), 1_227_775_554);
    }

    #[test]
    fn finds_doubled_halves_per_range() {
        assert_eq!(invalid_ids_in_range(11, 22), vec![11, 22]);
        assert_eq!(invalid_ids_in_range(95, 115), vec![99]);
        assert_eq!(invalid_ids_in_range(998, 1012), vec![1010]);
        assert_eq!(invalid_ids_in_range(1698522, 1698528), Vec::<u64>::new());
    }

    /// Reference check: is `n` a doubled half when written out?
    fn is_doubled(n: u64) -> bool {
        let digits = n.to_string();
        digits.len() % 2 == 0 && digits[..digits.len() / 2] == digits[digits.len() / 2..]
    }

    proptest! {
        /// The per-width enumeration agrees with a brute scan on small ranges.
        #[test]
        fn matches_brute_scan(lo in 1u64..30_000, span in 0u64..2_000) {
            let hi = lo + span;
            let expected: Vec<u64> = (lo..=hi).filter(|&n| is_doubled(n)).collect();
            prop_assert_eq!(invalid_ids_in_range(lo, hi), expected);
        }
    }
}
