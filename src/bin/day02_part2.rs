//! Day 2, revised rules: an ID is invalid when its decimal form is any block
//! of digits repeated at least twice (121212, 824824824).

use std::collections::BTreeSet;
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

/// All invalid IDs in `lo..=hi`: numbers `t` (no leading zero, `m` digits)
/// repeated `k >= 2` times, which is `t` times the base-10^m repunit of
/// length `k`. One ID can match several block widths, hence the set.
fn invalid_ids_in_range(lo: u64, hi: u64) -> BTreeSet<u64> {
    let mut invalid = BTreeSet::new();

    for width in digit_count(lo)..=digit_count(hi) {
        for block in 1..=width / 2 {
            if width % block != 0 {
                continue;
            }
            let repeats = width / block;
            let base = 10u64.pow(block);

            // block=2, repeats=3 -> 10101
            let mut factor = 0u64;
            for _ in 0..repeats {
                factor = factor * base + 1;
            }

            let t_lo = lo.div_ceil(factor).max(10u64.pow(block - 1));
            let t_hi = (hi / factor).min(base - 1);

            for t in t_lo..=t_hi {
                let id = t * factor;
                if (lo..=hi).contains(&id) {
                    invalid.insert(id);
                }
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
        total == 4_174_379_265,
        "example check failed: expected 4174379265, got {total}"
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
    use super::*;

    #[test]
    fn example_total() {
        let ranges = parse_ranges(EXAMPLE).unwrap();
        assert_eq!(sum_invalid_ids(&ranges), 4_174_379_265);
    }

    #[test]
    fn catches_longer_repeats_the_old_rules_missed() {
        // 111 = "1" x3, 565656 = "56" x3, 824824824 = "824" x3
        assert!(invalid_ids_in_range(95, 115).contains(&111));
        assert!(invalid_ids_in_range(565653, 565659).contains(&565656));
        assert!(invalid_ids_in_range(824824821, 824824827).contains(&824824824));
        assert!(invalid_ids_in_range(2121212118, 2121212124).contains(&2121212121));
    }

    #[test]
    fn deduplicates_multi_width_matches() {
        // 1111 matches both "1" x4 and "11" x2, but is one ID.
        let ids = invalid_ids_in_range(1111, 1111);
        assert_eq!(ids.into_iter().collect::<Vec<_>>(), vec![1111]);
    }

    #[test]
    fn doubled_halves_still_match() {
        let ids = invalid_ids_in_range(11, 22);
        assert_eq!(ids.into_iter().collect::<Vec<_>>(), vec![11, 22]);
    }
}
