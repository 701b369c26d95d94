//! Day 8: wire up the 1000 closest pairs of junction boxes and multiply the
//! sizes of the three biggest resulting circuits.

use std::collections::HashMap;
use std::fs;

use anyhow::{Context, Result, ensure};
use itertools::Itertools;
use rayon::prelude::*;

const INPUT_PATH: &str = "inputs/day08.txt";
const PAIRS_TO_CONNECT: usize = 1000;

const EXAMPLE: &str = "\
162,817,812
57,618,57
906,360,560
592,479,940
352,342,300
466,668,158
542,29,236
431,825,988
739,650,466
52,470,668
216,146,977
819,987,18
117,168,530
805,96,715
346,949,466
970,615,88
941,993,340
862,61,35
984,92,344
425,690,689
";

type Point = (i64, i64, i64);

fn parse_points(input: &str) -> Result<Vec<Point>> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            let mut coords = line.split(',').map(|c| {
                c.trim()
                    .parse::<i64>()
                    .with_context(|| format!("bad coordinate in {line:?}"))
            });
            match (coords.next(), coords.next(), coords.next(), coords.next()) {
                (Some(x), Some(y), Some(z), None) => Ok((x?, y?, z?)),
                _ => anyhow::bail!("expected 'X,Y,Z' in line {line:?}"),
            }
        })
        .collect()
}

/// Union-find with path halving and union by size.
struct Circuits {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl Circuits {
    fn new(boxes: usize) -> Self {
        Self {
            parent: (0..boxes).collect(),
            size: vec![1; boxes],
        }
    }

    fn find(&mut self, mut a: usize) -> usize {
        while self.parent[a] != a {
            self.parent[a] = self.parent[self.parent[a]];
            a = self.parent[a];
        }
        a
    }

    /// Returns whether two separate circuits were joined.
    fn connect(&mut self, a: usize, b: usize) -> bool {
        let (mut ra, mut rb) = (self.find(a), self.find(b));
        if ra == rb {
            return false;
        }
        if self.size[ra] < self.size[rb] {
            std::mem::swap(&mut ra, &mut rb);
        }
        self.parent[rb] = ra;
        self.size[ra] += self.size[rb];
        true
    }
}

/// All unordered pairs, sorted by squared Euclidean distance.
fn pairs_by_distance(points: &[Point]) -> Vec<(i64, usize, usize)> {
    let mut pairs: Vec<(i64, usize, usize)> = (0..points.len())
        .tuple_combinations::<(_, _)>()
        .map(|(i, j)| {
            let (x1, y1, z1) = points[i];
            let (x2, y2, z2) = points[j];
            let (dx, dy, dz) = (x1 - x2, y1 - y2, z1 - z2);
            (dx * dx + dy * dy + dz * dz, i, j)
        })
        .collect();
    pairs.par_sort_by_key(|&(dist, _, _)| dist);
    pairs
}

/// Sizes of all circuits after connecting the `pair_budget` closest pairs,
/// largest first, padded to at least three entries.
fn circuit_sizes(points: &[Point], pair_budget: usize) -> Vec<usize> {
    let mut circuits = Circuits::new(points.len());
    for &(_, i, j) in pairs_by_distance(points).iter().take(pair_budget) {
        circuits.connect(i, j);
    }

    let mut by_root: HashMap<usize, usize> = HashMap::new();
    for i in 0..points.len() {
        *by_root.entry(circuits.find(i)).or_default() += 1;
    }

    let mut sizes: Vec<usize> = by_root.into_values().collect();
    sizes.sort_unstable_by(|a, b| b.cmp(a));
    while sizes.len() < 3 {
        sizes.push(1);
    }
    sizes
}

fn top_three_product(sizes: &[usize]) -> u64 {
    sizes.iter().take(3).map(|&s| s as u64).product()
}

fn check_example() -> Result<()> {
    let points = parse_points(EXAMPLE)?;
    let sizes = circuit_sizes(&points, 10);
    let product = top_three_product(&sizes);
    ensure!(product == 40, "example check failed: expected 40, got {product}");
    Ok(())
}

fn main() -> Result<()> {
    check_example()?;

    let input = fs::read_to_string(INPUT_PATH)
        .with_context(|| format!("reading {INPUT_PATH}"))?;
    let points = parse_points(&input)?;
    let sizes = circuit_sizes(&points, PAIRS_TO_CONNECT);

    println!("Three largest circuits: {:?}", &sizes[..3]);
    println!("Product: {}", top_three_product(&sizes));
    Ok(())
}
