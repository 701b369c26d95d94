//! Day 11: count the distinct paths through the device graph from "you"
//! to "out".

use std::collections::HashMap;
use std::env;
use std::fs;

use anyhow::{Context, Result, ensure};

const DEFAULT_INPUT_PATH: &str = "inputs/day11.txt";

const START: &str = "you";
const TARGET: &str = "out";

const EXAMPLE: &str = "\
aaa: you hhh
you: bbb ccc
bbb: ddd eee
ccc: ddd eee fff
ddd: ggg
eee: out
fff: out
ggg: out
hhh: ccc fff iii
iii: out
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

/// Memoized DFS; the graph is effectively a DAG, and the path counts blow
/// up well past 64 bits on real inputs.
fn count_paths<'a>(graph: &'a Graph, node: &'a str, memo: &mut HashMap<&'a str, u128>) -> u128 {
    if node == TARGET {
        return 1;
    }
    if let Some(&known) = memo.get(node) {
        return known;
    }

    let mut total = 0;
    if let Some(outputs) = graph.get(node) {
        for next in outputs {
            total += count_paths(graph, next, memo);
        }
    }
    memo.insert(node, total);
    total
}

fn path_count(graph: &Graph) -> u128 {
    count_paths(graph, START, &mut HashMap::new())
}

fn check_example() -> Result<()> {
    let paths = path_count(&parse_graph(EXAMPLE)?);
    ensure!(paths == 5, "example check failed: expected 5, got {paths}");
    Ok(())
}

fn main() -> Result<()> {
    check_example()?;

    let path = env::args().nth(1).unwrap_or_else(|| DEFAULT_INPUT_PATH.to_string());
    let input = fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
    let graph = parse_graph(&input)?;

    println!("Paths from '{START}' to '{TARGET}': {}", path_count(&graph));
    Ok(())
}
