//! Shared problem generators for the benchmark suites.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

use statespace_kernel::problem::{AdjacencyGraph, LiteralTree, TreeChild};

/// Grid cell coordinate.
pub type Cell = (u32, u32);

/// A `side` x `side` grid with 4-neighborhood moves. Moving right or down
/// costs 1, left or up costs 2. Heuristics are the Manhattan distance to
/// the bottom-right corner, which is admissible and consistent for these
/// costs.
#[must_use]
pub fn grid_graph(side: u32) -> AdjacencyGraph<Cell> {
    let last = side.saturating_sub(1);
    let mut graph = AdjacencyGraph::new();
    for y in 0..side {
        for x in 0..side {
            graph.add_state((x, y));
            if x < last {
                graph.add_weighted_edge((x, y), (x + 1, y), 1.0);
            }
            if y < last {
                graph.add_weighted_edge((x, y), (x, y + 1), 1.0);
            }
            if x > 0 {
                graph.add_weighted_edge((x, y), (x - 1, y), 2.0);
            }
            if y > 0 {
                graph.add_weighted_edge((x, y), (x, y - 1), 2.0);
            }
            graph.set_heuristic((x, y), f64::from((last - x) + (last - y)));
        }
    }
    graph
}

/// Opposite corners of [`grid_graph`].
#[must_use]
pub fn grid_endpoints(side: u32) -> (Cell, Cell) {
    let last = side.saturating_sub(1);
    ((0, 0), (last, last))
}

/// A complete game tree of the given depth and branching factor. Leaf
/// values follow a fixed pseudo-random sequence so alpha-beta has real
/// cut-offs to make.
#[must_use]
pub fn uniform_game_tree(depth: u32, branching: usize) -> LiteralTree {
    let mut tree = LiteralTree::new();
    let mut seed: u64 = 0x2545_f491_4f6c_dd1d;
    let mut frontier = vec![String::from("n")];
    for level in 0..depth {
        let mut next = Vec::new();
        for name in frontier {
            let children: Vec<TreeChild> = (0..branching)
                .map(|i| {
                    if level + 1 == depth {
                        seed ^= seed << 13;
                        seed ^= seed >> 7;
                        seed ^= seed << 17;
                        TreeChild::leaf(f64::from(u32::try_from(seed % 100).unwrap_or(0)))
                    } else {
                        let child = format!("{name}.{i}");
                        next.push(child.clone());
                        TreeChild::Node(child)
                    }
                })
                .collect();
            tree = tree.node(&name, children);
        }
        frontier = next;
    }
    tree
}

/// Root of [`uniform_game_tree`].
#[must_use]
pub fn game_root() -> TreeChild {
    TreeChild::node("n")
}
