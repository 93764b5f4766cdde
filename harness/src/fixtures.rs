//! Named fixture problems.
//!
//! Each graph fixture carries its own start and goal so a run can be named
//! by fixture alone. States are strings; the numbered tree keeps its
//! numbers as decimal labels.

use statespace_kernel::problem::{AdjacencyGraph, LiteralTree, TreeChild};

/// Fixture name of the adversarial tree.
pub const GAME_FIXTURE: &str = "alpha_beta_tree";

/// Root node of [`game_tree`].
pub const GAME_ROOT: &str = "A";

/// Names of every graph fixture, in a stable order.
pub const GRAPH_FIXTURES: [&str; 5] = ["tree", "detour", "stale", "heuristic", "plateau"];

/// A graph problem with a designated start and goal.
#[derive(Debug, Clone)]
pub struct GraphFixture {
    pub name: &'static str,
    pub graph: AdjacencyGraph<String>,
    pub start: String,
    pub goal: String,
}

/// Look up a graph fixture by name.
#[must_use]
pub fn graph_fixture(name: &str) -> Option<GraphFixture> {
    let fixture = match name {
        "tree" => GraphFixture {
            name: "tree",
            graph: tree_graph(),
            start: "0".into(),
            goal: "15".into(),
        },
        "detour" => GraphFixture {
            name: "detour",
            graph: detour_graph(),
            start: "A".into(),
            goal: "G".into(),
        },
        "stale" => GraphFixture {
            name: "stale",
            graph: stale_graph(),
            start: "A".into(),
            goal: "G".into(),
        },
        "heuristic" => GraphFixture {
            name: "heuristic",
            graph: heuristic_graph(),
            start: "A".into(),
            goal: "G".into(),
        },
        "plateau" => GraphFixture {
            name: "plateau",
            graph: plateau_graph(),
            start: "A".into(),
            goal: "D".into(),
        },
        _ => return None,
    };
    Some(fixture)
}

fn unweighted(rows: &[(&str, &[&str])]) -> AdjacencyGraph<String> {
    AdjacencyGraph::from_unweighted(rows.iter().map(|(from, to)| {
        (
            (*from).to_string(),
            to.iter().map(|t| (*t).to_string()).collect::<Vec<_>>(),
        )
    }))
}

fn weighted(rows: &[(&str, &[(&str, f64)])]) -> AdjacencyGraph<String> {
    AdjacencyGraph::from_weighted(rows.iter().map(|(from, to)| {
        (
            (*from).to_string(),
            to.iter()
                .map(|(t, cost)| ((*t).to_string(), *cost))
                .collect::<Vec<_>>(),
        )
    }))
}

fn heuristics(table: &[(&str, f64)]) -> Vec<(String, f64)> {
    table.iter().map(|(s, h)| ((*s).to_string(), *h)).collect()
}

/// Unweighted tree over states 0..=17. BFS from 0 reaches 15 in two hops.
#[must_use]
pub fn tree_graph() -> AdjacencyGraph<String> {
    unweighted(&[
        ("0", &["4", "1", "16"]),
        ("4", &["9", "13"]),
        ("13", &["10", "12"]),
        ("1", &["2", "5", "7"]),
        ("5", &["11", "14"]),
        ("16", &["15", "8"]),
        ("8", &["17", "6", "3"]),
    ])
}

/// The direct A-B edge is cheaper than A-C but leads to a dearer route.
/// Cheapest A to G is A, C, G at 5.
#[must_use]
pub fn detour_graph() -> AdjacencyGraph<String> {
    weighted(&[
        ("A", &[("B", 2.0), ("C", 1.0)]),
        ("B", &[("G", 5.0)]),
        ("C", &[("B", 1.0), ("G", 4.0)]),
    ])
}

/// B is first queued at 10, then improved to 2 through C, leaving a stale
/// entry behind. Cheapest A to G is 22.
#[must_use]
pub fn stale_graph() -> AdjacencyGraph<String> {
    weighted(&[
        ("A", &[("B", 10.0), ("C", 1.0)]),
        ("C", &[("B", 1.0)]),
        ("B", &[("G", 20.0)]),
    ])
}

/// Weighted graph with an exact (so admissible and consistent) heuristic.
/// Cheapest A to G is A, B, D, G at 4.
#[must_use]
pub fn heuristic_graph() -> AdjacencyGraph<String> {
    weighted(&[
        ("A", &[("B", 1.0), ("C", 4.0)]),
        ("B", &[("D", 2.0), ("E", 5.0)]),
        ("C", &[("F", 3.0)]),
        ("D", &[("G", 1.0)]),
        ("E", &[("G", 2.0)]),
        ("F", &[("G", 2.0)]),
    ])
    .with_heuristics(heuristics(&[
        ("A", 4.0),
        ("B", 3.0),
        ("C", 5.0),
        ("D", 1.0),
        ("E", 2.0),
        ("F", 2.0),
        ("G", 0.0),
    ]))
}

/// A(5) -> B(3) -> C(3) -> D(1). Crossing B to C needs a sideways move.
#[must_use]
pub fn plateau_graph() -> AdjacencyGraph<String> {
    unweighted(&[("A", &["B"]), ("B", &["C"]), ("C", &["D"])]).with_heuristics(heuristics(&[
        ("A", 5.0),
        ("B", 3.0),
        ("C", 3.0),
        ("D", 1.0),
    ]))
}

/// Three-ply max/min/max tree rooted at [`GAME_ROOT`]. Its value is 15.
#[must_use]
pub fn game_tree() -> LiteralTree {
    let node = TreeChild::node;
    let leaf = TreeChild::leaf;
    LiteralTree::new()
        .node("A", [node("B"), node("C"), node("D")])
        .node("B", [leaf(9.0), node("F")])
        .node("F", [leaf(10.0), leaf(12.0)])
        .node("C", [leaf(2.0), node("H"), leaf(7.0)])
        .node("H", [leaf(11.0), leaf(14.0)])
        .node("D", [leaf(15.0), node("K")])
        .node("K", [leaf(17.0), leaf(6.0), leaf(3.0)])
}
