//! Day 5: count the ingredient IDs that fall inside at least one of the
//! freshness ranges listed above them.

use std::fs;

use anyhow::{Context, Result, ensure};

const INPUT_PATH: &str = "inputs/day05.txt";

const EXAMPLE: &str = "\
3-5
10-14
16-20
12-18

1
5
8
11
17
32
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

fn count_fresh_ids(ranges: &[(u64, u64)], ids: &str) -> Result<usize> {
    let mut fresh = 0;
    for line in ids.lines().map(str::trim).filter(|line| !line.is_empty()) {
        let id: u64 = line
            .parse()
            .with_context(|| format!("bad ingredient ID {line:?}"))?;
        if ranges.iter().any(|&(lo, hi)| (lo..=hi).contains(&id)) {
            fresh += 1;
        }
    }
    Ok(fresh)
}

fn split_sections(content: &str) -> Result<(&str, &str)> {
    content
        .split_once("\n\n")
        .context("expected one blank line between the ranges and the IDs")
}

fn check_example() -> Result<()> {
    let (ranges_block, ids_block) = split_sections(EXAMPLE)?;
    let fresh = count_fresh_ids(&parse_ranges(ranges_block)?, ids_block)?;
    ensure!(fresh == 3, "example check failed: expected 3, got {fresh}");
    Ok(())
}

fn main() -> Result<()> {
    check_example()?;

    let input = fs::read_to_string(INPUT_PATH)
        .with_context(|| format!("reading {INPUT_PATH}"))?;
    let (ranges_block, ids_block) = split_sections(&input)?;
    let ranges = parse_ranges(ranges_block)?;

    println!("Fresh ingredient IDs: {}", count_fresh_ids(&ranges, ids_block)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example_count() {
        let (ranges_block, ids_block) = split_sections(EXAMPLE).unwrap();
        let ranges = parse_ranges(ranges_block).unwrap();
        assert_eq!(count_fresh_ids(&ranges, ids_block).unwrap(), 3);
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let ranges = parse_ranges("10-14").unwrap();
        assert_eq!(count_fresh_ids(&ranges, "10\n14\n15").unwrap(), 2);
    }

    #[test]
    fn missing_separator_is_an_error() {
        assert!(split_sections("3-5\n1\n2").is_err());
    }
}
