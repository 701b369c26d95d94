//! Day 8, keep going: connect ever-farther pairs until every junction box
//! sits in one circuit, then multiply the X coordinates of the final pair.

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

/// All unordered pairs, sorted by squared Euclidean distance. Ties keep
/// generation order, which fixes which pair closes the final circuit.
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

fn circuit_sizes(points: &[Point], pairs: &[(i64, usize, usize)], pair_budget: usize) -> Vec<usize> {
    let mut circuits = Circuits::new(points.len());
    for &(_, i, j) in pairs.iter().take(pair_budget) {
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

/// Keep connecting pairs until one circuit remains; the answer is the
/// product of the X coordinates of the pair that completed it.
fn last_connection_product(points: &[Point], pairs: &[(i64, usize, usize)]) -> Result<i64> {
    let mut circuits = Circuits::new(points.len());
    let mut remaining = points.len();

    for &(_, i, j) in pairs {
        if circuits.connect(i, j) {
            remaining -= 1;
            if remaining == 1 {
                return Ok(points[i].0 * points[j].0);
            }
        }
    }
    anyhow::bail!("the pair list ran out before the boxes formed one circuit")
}

fn check_example() -> Result<()> {
    let points = parse_points(EXAMPLE)?;
    let pairs = pairs_by_distance(&points);

    let product = top_three_product(&circuit_sizes(&points, &pairs, 10));
    ensure!(product == 40, "example check failed: expected 40, got {product}");

    let last = last_connection_product(&points, &pairs)?;
    ensure!(last == 25272, "example check failed: expected 25272, got {last}");
    Ok(())
}

fn main() -> Result<()> {
    check_example()?;

    let input = fs::read_to_string(INPUT_PATH)
        .with_context(|| format!("reading {INPUT_PATH}"))?;
    let points = parse_points(&input)?;
    let pairs = pairs_by_distance(&points);

    let sizes = circuit_sizes(&points, &pairs, PAIRS_TO_CONNECT);
    println!("Three largest circuits: {:?}", &sizes[..3]);
    println!("Product: {}", top_three_product(&sizes));
    println!(
        "Product of the final connection's X coordinates: {}",
        last_connection_product(&points, &pairs)?
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example_circuits() {
        let points = parse_points(EXAMPLE).unwrap();
        let pairs = pairs_by_distance(&points);
        assert_eq!(top_three_product(&circuit_sizes(&points, &pairs, 10)), 40);
        assert_eq!(last_connection_product(&points, &pairs).unwrap(), 25272);
    }

    #[test]
    fn example_closes_with_boxes_216_and_117() {
        // The final connection joins the boxes at X=216 and X=117.
        let points = parse_points(EXAMPLE).unwrap();
        let pairs = pairs_by_distance(&points);
        assert_eq!(last_connection_product(&points, &pairs).unwrap(), 216 * 117);
    }

    #[test]
    fn single_box_cannot_close_a_circuit() {
        let points = vec![(5, 5, 5)];
        let pairs = pairs_by_distance(&points);
        assert!(last_connection_product(&points, &pairs).is_err());
    }
}
