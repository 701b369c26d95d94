//! Day 6: a cephalopod math worksheet. Blank columns separate problems, the
//! bottom row carries each problem's operator, the rows above its numbers.

use std::fs;

use anyhow::{Context, Result, ensure};
use thiserror::Error;

const INPUT_PATH: &str = "inputs/day06.txt";

const EXAMPLE: &str = r"123 328  51  64
 45  64 387  23
  6  98 215 314
  *   +   *   +";

#[derive(Debug, Error)]
#[error("more than one operator in worksheet column block {0}")]
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

/// Pad all rows to the worksheet width and cut it into column blocks; each
/// block with an operator on the bottom row is one problem, its numbers
/// read row by row.
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

        let mut op = None;
        for &ch in &operator_row[start..col] {
            if ch == b'+' || ch == b'*' {
                if op.is_some() {
                    return Err(ConflictingOperators(block).into());
                }
                op = Some(if ch == b'+' { Op::Add } else { Op::Mul });
            }
        }
        let Some(op) = op else { continue };

        let mut operands = Vec::new();
        for row in number_rows {
            let digits: String = row[start..col]
                .iter()
                .filter(|b| b.is_ascii_digit())
                .map(|&b| char::from(b))
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
        total == 4_277_556,
        "example check failed: expected 4277556, got {total}"
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
            vec![&[123, 45, 6][..], &[328, 64, 98], &[51, 387, 215], &[64, 23, 314]]
        );
        assert_eq!(grand_total(&problems), 4_277_556);
    }

    #[test]
    fn two_operators_in_one_block_fail() {
        assert!(parse_worksheet("12\n+*").is_err());
    }

    #[test]
    fn block_without_operator_is_skipped() {
        // Second block has digits but nothing on the operator row.
        let problems = parse_worksheet("12 34\n+    ").unwrap();
        assert_eq!(problems.len(), 1);
        assert_eq!(grand_total(&problems), 12);
    }
}
