//! Day 11, server to output: count all paths from "svr" to "out", and how
//! many of them pass through both "dac" and "fft".

use std::collections::HashMap;
use std::env;
use std::fs;

use anyhow::{Context, Result, ensure};

const DEFAULT_INPUT_PATH: &str = "inputs/day11.txt";

const START: &str = "svr";
const TARGET: &str = "out";
const REQUIRED_STOPS: [&str; 2] = ["dac", "fft"];

const EXAMPLE: &str = "\
svr: aaa bbb
aaa: fft
fft: ccc
bbb: tty
tty: ccc
ccc: ddd eee
ddd: hub
hub: fff
eee: dac
dac: fff
fff: ggg hhh
ggg: out
hhh: out
";

type Graph = HashMap<String, Vec<String>>;

fn parse_graph(input: &str) -> Result<Graph> {
    let mut graph = Graph::new();
    for line in input.lines().map(str::trim).filter(|line| !line.is_empty()) {
        let (device, outputs) = line
            .split_once(':')
            .with_context(|| format!("line {line:?} is missing ':'"))?;
        graph.insert(
            device.trim().to_string(),
            outputs.split_whitespace().map(str::to_string).collect(),
        );
    }
    Ok(graph)
}

/// (all paths, paths that have visited every required stop). The visited
/// set of required stops rides along in the memo key as a bitmask.
fn count_paths<'a>(
    graph: &'a Graph,
    node: &'a str,
    mut seen: u8,
    memo: &mut HashMap<(&'a str, u8), (u128, u128)>,
) -> (u128, u128) {
    if let Some(stop) = REQUIRED_STOPS.iter().position(|&s| s == node) {
        seen |= 1 << stop;
    }
    if node == TARGET {
        let all = (1u8 << REQUIRED_STOPS.len()) - 1;
        return (1, u128::from(seen == all));
    }
    if let Some(&known) = memo.get(&(node, seen)) {
        return known;
    }

    let mut counts = (0u128, 0u128);
    if let Some(outputs) = graph.get(node) {
        for next in outputs {
            let (total, constrained) = count_paths(graph, next, seen, memo);
            counts.0 += total;
            counts.1 += constrained;
        }
    }
    memo.insert((node, seen), counts);
    counts
}

fn path_counts(graph: &Graph) -> (u128, u128) {
    count_paths(graph, START, 0, &mut HashMap::new())
}

fn check_example() -> Result<()> {
    let (total, constrained) = path_counts(&parse_graph(EXAMPLE)?);
    ensure!(total == 8, "example check failed: expected 8 paths, got {total}");
    ensure!(
        constrained == 2,
        "example check failed: expected 2 paths through dac and fft, got {constrained}"
    );
    Ok(())
}

fn main() -> Result<()> {
    check_example()?;

    let path = env::args().nth(1).unwrap_or_else(|| DEFAULT_INPUT_PATH.to_string());
    let input = fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
    let graph = parse_graph(&input)?;

    let (total, constrained) = path_counts(&graph);
    println!("Paths from '{START}' to '{TARGET}': {total}");
    println!("Paths visiting both 'dac' and 'fft': {constrained}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example_graph() {
        assert_eq!(path_counts(&parse_graph(EXAMPLE).unwrap()), (8, 2));
    }

    #[test]
    fn one_required_stop_is_not_enough() {
        // Passes fft but never dac.
        let graph = parse_graph("svr: fft\nfft: out").unwrap();
        assert_eq!(path_counts(&graph), (1, 0));
    }

    #[test]
    fn stop_order_does_not_matter() {
        let one_way = parse_graph("svr: dac\ndac: fft\nfft: out").unwrap();
        let other_way = parse_graph("svr: fft\nfft: dac\ndac: out").unwrap();
        assert_eq!(path_counts(&one_way), (1, 1));
        assert_eq!(path_counts(&other_way), (1, 1));
    }
}
