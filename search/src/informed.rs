//! Cost-aware and heuristic-guided strategies.
//!
//! - Uniform-cost search and A* relax successors by numeric cost and are
//!   optimal for non-negative costs (A* additionally needs an admissible,
//!   consistent heuristic; with an inconsistent one it still terminates but
//!   may return a costlier path, since finalized states are never reopened).
//! - Greedy best-first records each state on first discovery and makes no
//!   optimality claim.

use statespace_kernel::problem::SearchProblem;

use crate::error::SearchResult;
use crate::policy::SearchPolicy;
use crate::search::{search, SearchOutcome, Strategy};

/// Uniform-cost search keyed by `g(n)`.
///
/// # Errors
///
/// See [`search`].
pub fn uniform_cost<P: SearchProblem>(
    problem: &P,
    start: &P::State,
    goal: &P::State,
    policy: &SearchPolicy,
) -> SearchResult<SearchOutcome<P::State>> {
    search(problem, start, goal, Strategy::UniformCost, policy)
}

/// Greedy best-first search keyed by `h(n)`.
///
/// # Errors
///
/// See [`search`].
pub fn greedy_best_first<P: SearchProblem>(
    problem: &P,
    start: &P::State,
    goal: &P::State,
    policy: &SearchPolicy,
) -> SearchResult<SearchOutcome<P::State>> {
    search(problem, start, goal, Strategy::GreedyBestFirst, policy)
}

/// A* keyed by `g(n) + h(n)`.
///
/// # Errors
///
/// See [`search`].
pub fn a_star<P: SearchProblem>(
    problem: &P,
    start: &P::State,
    goal: &P::State,
    policy: &SearchPolicy,
) -> SearchResult<SearchOutcome<P::State>> {
    search(problem, start, goal, Strategy::AStar, policy)
}
