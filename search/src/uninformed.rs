//! Uninformed strategies: breadth-first, depth-first, and backtracking.
//!
//! Breadth-first and depth-first run on the shared driver and record each
//! state once, on discovery. They make no cost-optimality claim; the reported
//! cost is simply the cost of the path they found.

use std::collections::HashSet;

use statespace_kernel::problem::SearchProblem;
use tracing::debug;

use crate::error::SearchResult;
use crate::policy::SearchPolicy;
use crate::search::{check_preconditions, search, SearchOutcome, SearchStatus, Strategy};
use crate::trace::{SearchEvent, SearchTrace};

/// Breadth-first search. On unit costs the path has the fewest edges.
///
/// # Errors
///
/// See [`search`].
pub fn breadth_first<P: SearchProblem>(
    problem: &P,
    start: &P::State,
    goal: &P::State,
    policy: &SearchPolicy,
) -> SearchResult<SearchOutcome<P::State>> {
    search(problem, start, goal, Strategy::BreadthFirst, policy)
}

/// Frontier depth-first search: the most recently discovered state is
/// expanded next, so siblings are explored last-first.
///
/// # Errors
///
/// See [`search`].
pub fn depth_first<P: SearchProblem>(
    problem: &P,
    start: &P::State,
    goal: &P::State,
    policy: &SearchPolicy,
) -> SearchResult<SearchOutcome<P::State>> {
    search(problem, start, goal, Strategy::DepthFirst, policy)
}

/// One level of the backtracking stack.
struct Level<S> {
    state: S,
    g: f64,
    pending: std::vec::IntoIter<statespace_kernel::problem::Edge<S>>,
}

/// Recursive-order depth-first search with backtracking.
///
/// Enters successors in the order given, first successor first. When a state
/// is entered its successors are filtered once and queued: a successor is
/// skipped if it is on the current path, is a dead end, or is already queued
/// below some ancestor. A queued state is entered only from the level that
/// queued it, so a sibling waiting its turn is never reached through a
/// deeper detour. Fully explored states become dead ends and are never
/// re-entered, so `visited_order` has no duplicates. The recursion is run on
/// an explicit stack and does not grow the call stack.
///
/// The trace uses [`Strategy::DepthFirst`]; `Finalized` marks entering a
/// state and `Backtracked` marks leaving it as a dead end.
///
/// # Errors
///
/// See [`search`]. `max_expansions` bounds the number of states entered.
pub fn backtrack<P: SearchProblem>(
    problem: &P,
    start: &P::State,
    goal: &P::State,
    policy: &SearchPolicy,
) -> SearchResult<SearchOutcome<P::State>> {
    policy.validate()?;
    check_preconditions(problem, start)?;

    let mut trace = SearchTrace::new(Strategy::DepthFirst);
    let mut visited_order = Vec::new();
    let mut on_path: HashSet<P::State> = HashSet::new();
    let mut dead_ends: HashSet<P::State> = HashSet::new();
    let mut queued: HashSet<P::State> = HashSet::new();
    let mut stack: Vec<Level<P::State>> = Vec::new();
    let mut high_water: u64 = 0;

    let mut entering = Some((start.clone(), 0.0));
    let status = loop {
        if let Some((state, g)) = entering.take() {
            if policy
                .max_expansions
                .is_some_and(|max| visited_order.len() as u64 >= max)
            {
                break SearchStatus::BudgetExhausted;
            }
            queued.remove(&state);
            visited_order.push(state.clone());
            trace.record(SearchEvent::Finalized {
                state: state.clone(),
                g,
            });
            on_path.insert(state.clone());
            if state == *goal {
                stack.push(Level {
                    state,
                    g,
                    pending: Vec::new().into_iter(),
                });
                break SearchStatus::Found;
            }
            let edges = problem.successors(&state);
            trace.record(SearchEvent::Expanded {
                state: state.clone(),
                successors: edges.len(),
            });
            let pending: Vec<_> = edges
                .into_iter()
                .filter(|edge| {
                    !on_path.contains(&edge.to)
                        && !dead_ends.contains(&edge.to)
                        && queued.insert(edge.to.clone())
                })
                .collect();
            stack.push(Level {
                state,
                g,
                pending: pending.into_iter(),
            });
            high_water = high_water.max(stack.len() as u64);
        }

        let Some(top) = stack.last_mut() else {
            break SearchStatus::NotFound;
        };
        let next = match top.pending.next() {
            Some(edge) => {
                let step = policy.step_cost(&top.state, &edge)?;
                Some((edge.to, top.g + step))
            }
            None => None,
        };
        match next {
            Some(child) => entering = Some(child),
            None => {
                if let Some(level) = stack.pop() {
                    on_path.remove(&level.state);
                    trace.record(SearchEvent::Backtracked {
                        state: level.state.clone(),
                    });
                    dead_ends.insert(level.state);
                }
            }
        }
    };

    let (path, cost) = if status == SearchStatus::Found {
        let cost = stack.last().map_or(0.0, |level| level.g);
        (stack.into_iter().map(|level| level.state).collect(), cost)
    } else {
        (Vec::new(), f64::INFINITY)
    };

    debug!(
        status = status.as_str(),
        entered = visited_order.len(),
        path_len = path.len(),
        "backtracking search finished"
    );

    Ok(SearchOutcome {
        status,
        path,
        visited_order,
        cost,
        trace,
        frontier_high_water: high_water,
    })
}
