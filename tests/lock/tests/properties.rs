//! Property tests over random small graphs and game trees.
//!
//! Reference answers come from exhaustive enumeration in
//! `lock_tests::oracle`.

use std::collections::HashSet;

use lock_tests::oracle::{min_hops, min_path_cost, minimax_value, node_count, path_cost};
use proptest::prelude::*;
use statespace_kernel::problem::{AdjacencyGraph, GameTree};
use statespace_search::adversarial::{alpha_beta, minimax};
use statespace_search::policy::SearchPolicy;
use statespace_search::search::{search, SearchStatus, Strategy as SearchStrategy};
use statespace_search::uninformed::backtrack;

const MAX_STATES: u32 = 7;

/// Random directed graph over states `0..n` with integer costs in `0..10`.
fn weighted_graph() -> impl Strategy<Value = AdjacencyGraph<u32>> {
    (2..=MAX_STATES).prop_flat_map(|n| {
        prop::collection::vec((0..n, 0..n, 0u8..10), 0..24).prop_map(move |edges| {
            let mut graph = AdjacencyGraph::new();
            for state in 0..n {
                graph.add_state(state);
            }
            for (from, to, cost) in edges {
                graph.add_weighted_edge(from, to, f64::from(cost));
            }
            graph
        })
    })
}

/// Same shape as [`weighted_graph`] but with no edge costs.
fn unweighted_graph() -> impl Strategy<Value = AdjacencyGraph<u32>> {
    (2..=MAX_STATES).prop_flat_map(|n| {
        prop::collection::vec((0..n, 0..n), 0..24).prop_map(move |edges| {
            let mut graph = AdjacencyGraph::new();
            for state in 0..n {
                graph.add_state(state);
            }
            for (from, to) in edges {
                graph.add_edge(from, to);
            }
            graph
        })
    })
}

/// Half the exact remaining cost: admissible and consistent. Unreachable
/// states get `+inf`.
fn with_half_exact_heuristic(graph: &AdjacencyGraph<u32>, goal: u32) -> AdjacencyGraph<u32> {
    let table: Vec<(u32, f64)> = graph
        .states()
        .iter()
        .map(|&s| (s, min_path_cost(graph, &s, &goal).map_or(f64::INFINITY, |d| d / 2.0)))
        .collect();
    graph.clone().with_heuristics(table)
}

#[derive(Debug, Clone)]
enum Game {
    Leaf(i8),
    Node(Vec<Game>),
}

impl GameTree for Game {
    type Node = Game;

    fn children(&self, node: &Game) -> Vec<Game> {
        match node {
            Game::Leaf(_) => Vec::new(),
            Game::Node(children) => children.clone(),
        }
    }

    fn static_value(&self, node: &Game) -> Option<f64> {
        match node {
            Game::Leaf(v) => Some(f64::from(*v)),
            Game::Node(_) => None,
        }
    }
}

fn game() -> impl Strategy<Value = Game> {
    let leaf = any::<i8>().prop_map(Game::Leaf);
    leaf.prop_recursive(4, 64, 4, |inner| {
        prop::collection::vec(inner, 1..4).prop_map(Game::Node)
    })
}

proptest! {
    #[test]
    fn cost_aware_strategies_are_optimal(graph in weighted_graph(), goal_pick in 0u32..MAX_STATES) {
        let n = u32::try_from(graph.state_count()).unwrap();
        let goal = goal_pick % n;
        let expected = min_path_cost(&graph, &0, &goal);
        let informed = with_half_exact_heuristic(&graph, goal);
        for strategy in [SearchStrategy::UniformCost, SearchStrategy::AStar] {
            let outcome = search(&informed, &0, &goal, strategy, &SearchPolicy::default()).unwrap();
            match expected {
                Some(cost) => {
                    prop_assert_eq!(outcome.status, SearchStatus::Found);
                    prop_assert_eq!(outcome.cost, cost);
                    prop_assert_eq!(outcome.path.first(), Some(&0));
                    prop_assert_eq!(outcome.path.last(), Some(&goal));
                    prop_assert_eq!(path_cost(&graph, &outcome.path), Some(cost));
                }
                None => prop_assert_eq!(outcome.status, SearchStatus::NotFound),
            }
        }
    }

    #[test]
    fn breadth_first_finds_fewest_hops(graph in unweighted_graph(), goal_pick in 0u32..MAX_STATES) {
        let n = u32::try_from(graph.state_count()).unwrap();
        let goal = goal_pick % n;
        let outcome = search(&graph, &0, &goal, SearchStrategy::BreadthFirst, &SearchPolicy::default()).unwrap();
        match min_hops(&graph, &0, &goal) {
            Some(hops) => prop_assert_eq!(outcome.path.len(), hops + 1),
            None => prop_assert!(outcome.path.is_empty()),
        }
    }

    #[test]
    fn found_paths_follow_edges(graph in weighted_graph(), goal_pick in 0u32..MAX_STATES) {
        let n = u32::try_from(graph.state_count()).unwrap();
        let goal = goal_pick % n;
        let policy = SearchPolicy::default();
        for strategy in SearchStrategy::ALL {
            let outcome = search(&graph, &0, &goal, strategy, &policy).unwrap();
            if outcome.is_found() {
                prop_assert!(path_cost(&graph, &outcome.path).is_some());
                prop_assert_eq!(outcome.visited_order.last(), Some(&goal));
            }
        }
        let recursive = backtrack(&graph, &0, &goal, &policy).unwrap();
        if recursive.is_found() {
            prop_assert!(path_cost(&graph, &recursive.path).is_some());
            prop_assert_eq!(recursive.path.last(), Some(&goal));
        }
    }

    #[test]
    fn every_strategy_finds_a_reachable_goal(graph in weighted_graph(), goal_pick in 0u32..MAX_STATES) {
        let n = u32::try_from(graph.state_count()).unwrap();
        let goal = goal_pick % n;
        let reachable = min_hops(&graph, &0, &goal).is_some();
        let informed = with_half_exact_heuristic(&graph, goal);
        let policy = SearchPolicy::default();
        for strategy in SearchStrategy::ALL {
            let outcome = search(&informed, &0, &goal, strategy, &policy).unwrap();
            prop_assert_eq!(outcome.is_found(), reachable, "{:?}", strategy);
            if !reachable {
                prop_assert_eq!(outcome.status, SearchStatus::NotFound);
            }
        }
        let recursive = backtrack(&graph, &0, &goal, &policy).unwrap();
        prop_assert_eq!(recursive.is_found(), reachable, "backtrack");
    }

    #[test]
    fn visited_order_has_no_duplicates(graph in weighted_graph(), goal_pick in 0u32..MAX_STATES) {
        let n = u32::try_from(graph.state_count()).unwrap();
        let goal = goal_pick % n;
        let policy = SearchPolicy::default();
        let mut orders: Vec<Vec<u32>> = SearchStrategy::ALL
            .iter()
            .map(|&s| search(&graph, &0, &goal, s, &policy).unwrap().visited_order)
            .collect();
        orders.push(backtrack(&graph, &0, &goal, &policy).unwrap().visited_order);
        for order in orders {
            let unique: HashSet<&u32> = order.iter().collect();
            prop_assert_eq!(unique.len(), order.len());
        }
    }

    #[test]
    fn repeated_searches_are_identical(graph in weighted_graph(), goal_pick in 0u32..MAX_STATES) {
        let n = u32::try_from(graph.state_count()).unwrap();
        let goal = goal_pick % n;
        let policy = SearchPolicy::default();
        for strategy in SearchStrategy::ALL {
            let a = search(&graph, &0, &goal, strategy, &policy).unwrap();
            let b = search(&graph, &0, &goal, strategy, &policy).unwrap();
            prop_assert_eq!(&a.visited_order, &b.visited_order);
            prop_assert_eq!(&a.path, &b.path);
            prop_assert_eq!(a.trace.digest().unwrap(), b.trace.digest().unwrap());
        }
    }

    #[test]
    fn alpha_beta_matches_minimax(tree in game(), maximizing in any::<bool>()) {
        let pruned = alpha_beta(&tree, &tree, None, maximizing).unwrap();
        let full = minimax(&tree, &tree, None, maximizing).unwrap();
        let reference = minimax_value(&tree, &tree, maximizing).unwrap();
        prop_assert_eq!(pruned.value, reference);
        prop_assert_eq!(full.value, reference);
        prop_assert!(pruned.evaluated_count() <= full.evaluated_count());
        prop_assert_eq!(full.evaluated_count(), node_count(&tree, &tree));
        prop_assert!(full.pruned().is_empty());
    }
}
