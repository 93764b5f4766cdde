//! Worked examples on the harness fixtures: exact visit orders, paths,
//! costs, plateau behavior, and alpha-beta pruning.

use statespace_harness::fixtures::{game_tree, graph_fixture, GraphFixture, GAME_ROOT};
use statespace_kernel::problem::TreeChild;
use statespace_search::adversarial::{alpha_beta, minimax, Annotation, NodePath};
use statespace_search::climb::{hill_climb, StopReason};
use statespace_search::error::{ErrorKind, SearchError};
use statespace_search::informed::{a_star, uniform_cost};
use statespace_search::policy::{HillClimbConfig, MissingCostPolicy, SearchPolicy};
use statespace_search::search::{search, SearchOutcome, SearchStatus, Strategy};
use statespace_search::uninformed::backtrack;

fn fixture(name: &str) -> GraphFixture {
    graph_fixture(name).unwrap()
}

fn run(name: &str, strategy: Strategy) -> SearchOutcome<String> {
    let f = fixture(name);
    search(&f.graph, &f.start, &f.goal, strategy, &SearchPolicy::default()).unwrap()
}

fn states(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|s| (*s).to_string()).collect()
}

#[test]
fn tree_breadth_first() {
    let outcome = run("tree", Strategy::BreadthFirst);
    assert_eq!(
        outcome.visited_order,
        states(&["0", "4", "1", "16", "9", "13", "2", "5", "7", "15"])
    );
    assert_eq!(outcome.path, states(&["0", "16", "15"]));
}

#[test]
fn tree_depth_first_frontier_and_backtracking_differ() {
    let frontier = run("tree", Strategy::DepthFirst);
    assert_eq!(
        frontier.visited_order,
        states(&["0", "16", "8", "3", "6", "17", "15"])
    );

    let f = fixture("tree");
    let recursive = backtrack(&f.graph, &f.start, &f.goal, &SearchPolicy::default()).unwrap();
    assert_eq!(
        recursive.visited_order,
        states(&["0", "4", "9", "13", "10", "12", "1", "2", "5", "11", "14", "7", "16", "15"])
    );
    assert_eq!(frontier.path, recursive.path);
}

#[test]
fn detour_uniform_cost_is_optimal_and_bfs_is_not() {
    let ucs = run("detour", Strategy::UniformCost);
    assert_eq!(ucs.path, states(&["A", "C", "G"]));
    assert_eq!(ucs.cost, 5.0);

    let bfs = run("detour", Strategy::BreadthFirst);
    assert_eq!(bfs.path, states(&["A", "B", "G"]));
    assert_eq!(bfs.cost, 7.0);
}

#[test]
fn stale_entry_is_skipped_once() {
    let outcome = run("stale", Strategy::UniformCost);
    assert_eq!(outcome.visited_order, states(&["A", "C", "B", "G"]));
    assert_eq!(outcome.path, states(&["A", "C", "B", "G"]));
    assert_eq!(outcome.cost, 22.0);
    assert_eq!(outcome.trace.stale_count(), 1);
}

#[test]
fn heuristic_fixture_a_star_beats_uniform_cost_on_expansions() {
    let f = fixture("heuristic");
    let policy = SearchPolicy::default();
    let ucs = uniform_cost(&f.graph, &f.start, &f.goal, &policy).unwrap();
    let astar = a_star(&f.graph, &f.start, &f.goal, &policy).unwrap();
    assert_eq!(ucs.cost, 4.0);
    assert_eq!(astar.cost, 4.0);
    assert_eq!(astar.path, states(&["A", "B", "D", "G"]));
    assert!(astar.visited_order.len() < ucs.visited_order.len());
}

#[test]
fn plateau_needs_sideways_moves() {
    let f = fixture("plateau");
    let with = hill_climb(&f.graph, &f.start, Some(&f.goal), &HillClimbConfig::default()).unwrap();
    assert_eq!(with.path, states(&["A", "B", "C", "D"]));
    assert_eq!(with.reason, StopReason::GoalReached);

    let strict = HillClimbConfig {
        allow_sideways: false,
        ..HillClimbConfig::default()
    };
    let without = hill_climb(&f.graph, &f.start, Some(&f.goal), &strict).unwrap();
    assert_eq!(without.path, states(&["A", "B"]));
    assert_eq!(without.reason, StopReason::NoImprovement);
}

#[test]
fn alpha_beta_tree_value_and_pruning() {
    let tree = game_tree();
    let root = TreeChild::node(GAME_ROOT);
    let pruned = alpha_beta(&tree, &root, None, true).unwrap();
    let full = minimax(&tree, &root, None, true).unwrap();
    assert_eq!(pruned.value, full.value);
    assert_eq!(pruned.value, 15.0);
    assert!(pruned.evaluated_count() < full.evaluated_count());

    // H (second child of C) and K's last two leaves are never evaluated.
    let h = NodePath::from(vec![1, 1]);
    assert_eq!(pruned.annotation(&h), Annotation::Pruned);
    assert_eq!(full.annotation(&h), Annotation::Evaluated(11.0));
    assert_eq!(
        pruned.annotation(&NodePath::from(vec![2, 1, 2])),
        Annotation::Pruned
    );
    assert_eq!(
        pruned.annotation(&NodePath::from(vec![2, 1])),
        Annotation::Evaluated(17.0)
    );
}

#[test]
fn unreachable_goal_is_a_status_not_an_error() {
    let f = fixture("tree");
    for strategy in Strategy::ALL {
        let outcome = search(&f.graph, &"4".to_string(), &f.goal, strategy, &SearchPolicy::default()).unwrap();
        assert_eq!(outcome.status, SearchStatus::NotFound);
        assert!(outcome.path.is_empty());
    }
}

#[test]
fn missing_cost_policy_reject_classifies_as_configuration() {
    let f = fixture("tree");
    let policy = SearchPolicy {
        missing_cost: MissingCostPolicy::Reject,
        ..SearchPolicy::default()
    };
    let err = search(&f.graph, &f.start, &f.goal, Strategy::UniformCost, &policy).unwrap_err();
    assert!(matches!(err, SearchError::MissingEdgeCost { .. }));
    assert_eq!(err.kind(), ErrorKind::Configuration);
}

#[test]
fn unknown_start_classifies_as_precondition() {
    let f = fixture("detour");
    let err = search(&f.graph, &"Z".to_string(), &f.goal, Strategy::AStar, &SearchPolicy::default())
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Precondition);
}
