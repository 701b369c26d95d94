//! Day 6, the cephalopod way: within a problem the columns are the numbers,
//! most significant digit on top, and they are read right to left.

use std::fs;

use anyhow::{Context, Result, ensure};
use thiserror::Error;

const INPUT_PATH: &str = "inputs/day06.txt";

const EXAMPLE: &str = r"123 328  51 64
 45 64  387 23
  6 98  215 314
*   +   *   +  ";

#[derive(Debug, Error)]
#[error("conflicting operators in worksheet column block {0}")]
struct ConflictingOperators(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Add,
    Mul,
}

#[derive(Debug)]
struct Problem {
    op: Op,
    operands: Vec<u64>,
}

/// Column blocks as in the row-wise reading, but every column above the
/// operator row is one number, and the rightmost column comes first.
/// The operator may repeat inside a block; only different symbols clash.
fn parse_worksheet(input: &str) -> Result<Vec<Problem>> {
    let width = input.lines().map(str::len).max().unwrap_or(0);
    let grid: Vec<Vec<u8>> = input
        .lines()
        .map(|line| {
            let mut row = line.as_bytes().to_vec();
            row.resize(width, b' ');
            row
        })
        .collect();
    let Some((operator_row, number_rows)) = grid.split_last() else {
        return Ok(Vec::new());
    };

    let has_content: Vec<bool> =
        (0..width).map(|c| grid.iter().any(|row| row[c] != b' ')).collect();

    let mut problems = Vec::new();
    let mut col = 0;
    let mut block = 0;
    while col < width {
        if !has_content[col] {
            col += 1;
            continue;
        }
        let start = col;
        while col < width && has_content[col] {
            col += 1;
        }
        block += 1;

        let mut op_byte = None;
        for &ch in &operator_row[start..col] {
            if ch == b'+' || ch == b'*' {
                if op_byte.is_some_and(|seen| seen != ch) {
                    return Err(ConflictingOperators(block).into());
                }
                op_byte = Some(ch);
            }
        }
        let Some(op_byte) = op_byte else { continue };
        let op = if op_byte == b'+' { Op::Add } else { Op::Mul };

        let mut operands = Vec::new();
        for c in (start..col).rev() {
            let digits: String = number_rows
                .iter()
                .map(|row| row[c])
                .filter(|b| b.is_ascii_digit())
                .map(char::from)
                .collect();
            if !digits.is_empty() {
                let value = digits
                    .parse()
                    .with_context(|| format!("number {digits:?} in column block {block}"))?;
                operands.push(value);
            }
        }
        problems.push(Problem { op, operands });
    }

    Ok(problems)
}

fn grand_total(problems: &[Problem]) -> u64 {
    problems
        .iter()
        .filter(|problem| !problem.operands.is_empty())
        .map(|problem| match problem.op {
            Op::Add => problem.operands.iter().sum::<u64>(),
            Op::Mul => problem.operands.iter().product::<u64>(),
        })
        .sum()
}

fn check_example() -> Result<()> {
    let total = grand_total(&parse_worksheet(EXAMPLE)?);
    ensure!(
        total == 3_263_827,
        "example check failed: expected 3263827, got {total}"
    );
    Ok(())
}

fn main() -> Result<()> {
    check_example()?;

    let input = fs::read_to_string(INPUT_PATH)
        .with_context(|| format!("reading {INPUT_PATH}"))?;
    let problems = parse_worksheet(&input)?;

    println!("Grand total: {}", grand_total(&problems));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example_worksheet() {
        let problems = parse_worksheet(EXAMPLE).unwrap();
        let operands: Vec<&[u64]> =
            problems.iter().map(|p| p.operands.as_slice()).collect();
        assert_eq!(
            operands,
            vec![&[356, 24, 1][..], &[8, 248, 369], &[175, 581, 32], &[4, 431, 623]]
        );
        assert_eq!(grand_total(&problems), 3_263_827);
    }

    #[test]
    fn repeated_identical_operator_is_fine() {
        let problems = parse_worksheet("12\n++").unwrap();
        assert_eq!(grand_total(&problems), 3);
    }

    #[test]
    fn different_operators_in_one_block_fail() {
        assert!(parse_worksheet("12\n+*").is_err());
    }
}
