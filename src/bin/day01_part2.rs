//! Day 1, method 0x434C49434B: besides rest positions, count every click
//! on which the dial sits on 0 during a rotation.

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

/// Old method: only rest positions count.
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

/// How many clicks of this one rotation land on 0, end position included.
///
/// Every full turn passes 0 exactly once; the leftover clicks reach the
/// next 0 iff they cover the distance to it in the turn direction.
fn zeros_during_rotation(position: i64, rotation: i64) -> u64 {
    let distance = rotation.abs();
    let full_turns = distance / DIAL_SIZE;
    let remainder = distance % DIAL_SIZE;

    let to_next_zero = if position == 0 {
        DIAL_SIZE
    } else if rotation > 0 {
        DIAL_SIZE - position
    } else {
        position
    };

    full_turns as u64 + u64::from(remainder >= to_next_zero)
}

/// New method: every click on 0 counts, mid-rotation included.
fn count_click_zeros(rotations: &[i64]) -> u64 {
    let mut position = START_POSITION;
    let mut zeros = 0;
    for &rotation in rotations {
        zeros += zeros_during_rotation(position, rotation);
        position = (position + rotation).rem_euclid(DIAL_SIZE);
    }
    zeros
}

fn check_example() -> Result<()> {
    let rotations = parse_rotations(EXAMPLE)?;
    let rests = count_rest_zeros(&rotations);
    let clicks = count_click_zeros(&rotations);
    ensure!(rests == 3, "example check failed: expected 3 rest zeros, got {rests}");
    ensure!(clicks == 6, "example check failed: expected 6 click zeros, got {clicks}");
    Ok(())
}

fn main() -> Result<()> {
    check_example()?;

    let input = fs::read_to_string(INPUT_PATH)
        .with_context(|| format!("reading {INPUT_PATH}"))?;
    let rotations = parse_rotations(&input)?;

    println!("Password, end-of-rotation method: {}", count_rest_zeros(&rotations));
    println!("Password, method 0x434C49434B: {}", count_click_zeros(&rotations));
    Ok(())
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn example_counts_both_methods() {
        let rotations = parse_rotations(EXAMPLE).unwrap();
        assert_eq!(count_rest_zeros(&rotations), 3);
        assert_eq!(count_click_zeros(&rotations), 6);
    }

    #[test]
    fn full_turn_passes_zero_once() {
        // 50 -R100-> back to 50, passing 0 exactly once on the way.
        let rotations = parse_rotations("R100").unwrap();
        assert_eq!(count_rest_zeros(&rotations), 0);
        assert_eq!(count_click_zeros(&rotations), 1);
    }

    #[test]
    fn landing_on_zero_counts_in_both() {
        let rotations = parse_rotations("L50").unwrap();
        assert_eq!(count_rest_zeros(&rotations), 1);
        assert_eq!(count_click_zeros(&rotations), 1);
    }

    proptest! {
        /// Every rest on 0 is also a click on 0, so the per-click count
        /// can never be smaller than the end-of-rotation count.
        #[test]
        fn clicks_dominate_rests(
            rotations in prop::collection::vec(
                (-500i64..=500).prop_filter("rotations move the dial", |&r| r != 0),
                0..64,
            )
        ) {
            prop_assert!(count_click_zeros(&rotations) >= count_rest_zeros(&rotations));
        }

        /// The dial never leaves its 0..100 positions.
        #[test]
        fn dial_stays_on_the_dial(rotations in prop::collection::vec(-500i64..=500, 0..64)) {
            let mut position = START_POSITION;
            for rotation in rotations {
                position = (position + rotation).rem_euclid(DIAL_SIZE);
                prop_assert!((0..DIAL_SIZE).contains(&position));
            }
        }
    }
}
