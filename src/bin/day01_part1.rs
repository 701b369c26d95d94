//! Day 1: a 100-position dial starts at 50; count the rotations that end on 0.

use std::fs;

use anyhow::{Context, Result, bail, ensure};

const INPUT_PATH: &str = "inputs/day01.txt";

const DIAL_SIZE: i64 = 100;
const START_POSITION: i64 = 50;

const EXAMPLE: &str = "\
L68
L30
R48
L5
R60
L55
L1
L99
R14
L82
";

/// Parse `L<n>`/`R<n>` lines into signed rotations (left is negative).
fn parse_rotations(input: &str) -> Result<Vec<i64>> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            let leftward = match line.as_bytes().first() {
                Some(b'L') => true,
                Some(b'R') => false,
                _ => bail!("unknown direction in line {line:?}"),
            };
            let distance: i64 = line[1..]
                .parse()
                .with_context(|| format!("bad distance in line {line:?}"))?;
            ensure!(distance >= 0, "negative distance in line {line:?}");
            Ok(if leftward { -distance } else { distance })
        })
        .collect()
}

/// Count how often the dial rests on 0 after a rotation.
fn count_rest_zeros(rotations: &[i64]) -> u64 {
    let mut position = START_POSITION;
    let mut zeros = 0;
    for &rotation in rotations {
        position = (position + rotation).rem_euclid(DIAL_SIZE);
        if position == 0 {
            zeros += 1;
        }
    }
    zeros
}

fn check_example() -> Result<()> {
    let rotations = parse_rotations(EXAMPLE)?;
    let zeros = count_rest_zeros(&rotations);
    ensure!(zeros == 3, "example check failed: expected 3, got {zeros}");
    Ok(())
}

fn main() -> Result<()> {
    check_example()?;

    let input = fs::read_to_string(INPUT_PATH)
        .with_context(|| format!("reading {INPUT_PATH}"))?;
    let rotations = parse_rotations(&input)?;

    println!("Password: {}", count_rest_zeros(&rotations));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example_rests_on_zero_three_times() {
        let rotations = parse_rotations(EXAMPLE).unwrap();
        assert_eq!(count_rest_zeros(&rotations), 3);
    }

    #[test]
    fn wraps_in_both_directions() {
        // 50 -R60-> 10, -L10-> 0, -L30-> 70, -R30-> 0
        let rotations = parse_rotations("R60\nL10\nL30\nR30").unwrap();
        assert_eq!(count_rest_zeros(&rotations), 2);
    }

    #[test]
    fn rejects_unknown_direction() {
        assert!(parse_rotations("X12").is_err());
    }
}
