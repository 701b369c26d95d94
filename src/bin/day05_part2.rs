//! Day 5, the ranges themselves: merge overlapping or adjacent freshness
//! ranges and count how many distinct IDs they cover.

use std::fs;

use anyhow::{Context, Result, ensure};

const INPUT_PATH: &str = "inputs/day05.txt";

const EXAMPLE_RANGES: &str = "\
3-5
10-14
16-20
12-18
";

fn parse_ranges(block: &str) -> Result<Vec<(u64, u64)>> {
    block
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            let (lo, hi) = line
                .split_once('-')
                .with_context(|| format!("range {line:?} is missing '-'"))?;
            Ok((
                lo.trim().parse().with_context(|| format!("bad range start in {line:?}"))?,
                hi.trim().parse().with_context(|| format!("bad range end in {line:?}"))?,
            ))
        })
        .collect()
}

/// Merge sorted ranges; a range touching the previous end (`lo <= end + 1`)
/// extends it.
fn merge_ranges(mut ranges: Vec<(u64, u64)>) -> Vec<(u64, u64)> {
    ranges.sort_unstable();

    let mut merged: Vec<(u64, u64)> = Vec::with_capacity(ranges.len());
    for (lo, hi) in ranges {
        match merged.last_mut() {
            Some(last) if lo <= last.1 + 1 => last.1 = last.1.max(hi),
            _ => merged.push((lo, hi)),
        }
    }
    merged
}

fn count_covered_ids(merged: &[(u64, u64)]) -> u64 {
    merged.iter().map(|&(lo, hi)| hi - lo + 1).sum()
}

fn check_example() -> Result<()> {
    let merged = merge_ranges(parse_ranges(EXAMPLE_RANGES)?);
    let covered = count_covered_ids(&merged);
    ensure!(covered == 14, "example check failed: expected 14, got {covered}");
    Ok(())
}

fn main() -> Result<()> {
    check_example()?;

    let input = fs::read_to_string(INPUT_PATH)
        .with_context(|| format!("reading {INPUT_PATH}"))?;
    // Only the first section matters here; the ID list below the blank
    // line is part 1 material.
    let ranges_block = input.split("\n\n").next().unwrap_or(&input);
    let merged = merge_ranges(parse_ranges(ranges_block)?);

    println!("IDs covered by the freshness ranges: {}", count_covered_ids(&merged));
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use proptest::prelude::*;

    use super::*;

    #[test]
    fn example_coverage() {
        let merged = merge_ranges(parse_ranges(EXAMPLE_RANGES).unwrap());
        assert_eq!(merged, vec![(3, 5), (10, 20)]);
        assert_eq!(count_covered_ids(&merged), 14);
    }

    #[test]
    fn adjacent_ranges_merge() {
        let merged = merge_ranges(vec![(1, 3), (4, 6)]);
        assert_eq!(merged, vec![(1, 6)]);
    }

    #[test]
    fn disjoint_ranges_stay_apart() {
        let merged = merge_ranges(vec![(8, 9), (1, 3), (5, 5)]);
        assert_eq!(merged, vec![(1, 3), (5, 5), (8, 9)]);
    }

    proptest! {
        /// Merged coverage equals the brute-force distinct-ID count.
        #[test]
        fn coverage_matches_brute_force(
            ranges in prop::collection::vec((0u64..200, 0u64..20), 0..12)
        ) {
            let ranges: Vec<(u64, u64)> = ranges
                .into_iter()
                .map(|(lo, span)| (lo, lo + span))
                .collect();
            let brute: HashSet<u64> = ranges
                .iter()
                .flat_map(|&(lo, hi)| lo..=hi)
                .collect();
            let merged = merge_ranges(ranges);
            prop_assert_eq!(count_covered_ids(&merged), brute.len() as u64);
        }
    }
}
