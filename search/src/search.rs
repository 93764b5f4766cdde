//! Search entry point and expansion loop.
//!
//! One driver runs breadth-first, depth-first, uniform-cost, greedy
//! best-first and A*. Variants differ only in the priority key and in
//! whether successors are relaxed by numeric cost or recorded once on first
//! discovery.

use serde::{Deserialize, Serialize};
use statespace_kernel::problem::SearchProblem;
use tracing::{debug, trace};

use crate::error::{SearchError, SearchResult};
use crate::frontier::Frontier;
use crate::ledger::VisitationLedger;
use crate::path::reconstruct_path;
use crate::policy::SearchPolicy;
use crate::trace::{SearchEvent, SearchTrace};

/// Frontier-based strategy selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// FIFO over insertion order.
    BreadthFirst,
    /// LIFO over insertion order.
    DepthFirst,
    /// Keyed by `g(n)`.
    UniformCost,
    /// Keyed by `h(n)`.
    GreedyBestFirst,
    /// Keyed by `g(n) + h(n)`.
    AStar,
}

impl Strategy {
    pub const ALL: [Self; 5] = [
        Self::BreadthFirst,
        Self::DepthFirst,
        Self::UniformCost,
        Self::GreedyBestFirst,
        Self::AStar,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BreadthFirst => "breadth_first",
            Self::DepthFirst => "depth_first",
            Self::UniformCost => "uniform_cost",
            Self::GreedyBestFirst => "greedy_best_first",
            Self::AStar => "a_star",
        }
    }

    /// Whether successors are relaxed by numeric cost (and may be re-queued
    /// when a cheaper route appears).
    #[must_use]
    pub fn relaxes_by_cost(self) -> bool {
        matches!(self, Self::UniformCost | Self::AStar)
    }

    /// Whether the priority key reads the heuristic.
    #[must_use]
    pub fn uses_heuristic(self) -> bool {
        matches!(self, Self::GreedyBestFirst | Self::AStar)
    }

    /// Priority key for an entry with cost-to-reach `g`, estimate `h`, and
    /// insertion sequence `sequence`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn priority(self, g: f64, h: f64, sequence: u64) -> f64 {
        match self {
            Self::BreadthFirst => sequence as f64,
            Self::DepthFirst => -(sequence as f64),
            Self::UniformCost => g,
            Self::GreedyBestFirst => h,
            Self::AStar => g + h,
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStatus {
    /// The goal was finalized; `path` leads to it.
    Found,
    /// The frontier emptied without reaching the goal.
    NotFound,
    /// `max_expansions` was reached first.
    BudgetExhausted,
}

impl SearchStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Found => "found",
            Self::NotFound => "not_found",
            Self::BudgetExhausted => "budget_exhausted",
        }
    }
}

/// Result of one search call, returned by value.
#[derive(Debug, Clone)]
pub struct SearchOutcome<S> {
    pub status: SearchStatus,
    /// Start to goal inclusive when found; empty otherwise.
    pub path: Vec<S>,
    /// States in the order they were finalized. Each appears at most once.
    pub visited_order: Vec<S>,
    /// Sum of step costs along `path`; infinity when not found.
    pub cost: f64,
    pub trace: SearchTrace<S>,
    pub frontier_high_water: u64,
}

impl<S> SearchOutcome<S> {
    #[must_use]
    pub fn is_found(&self) -> bool {
        self.status == SearchStatus::Found
    }
}

/// Reject calls that cannot be searched.
///
/// # Errors
///
/// [`SearchError::EmptyProblem`] or [`SearchError::StartNotInProblem`].
pub(crate) fn check_preconditions<P: SearchProblem>(problem: &P, start: &P::State) -> SearchResult<()> {
    if problem.is_empty() {
        return Err(SearchError::EmptyProblem);
    }
    if !problem.contains(start) {
        return Err(SearchError::StartNotInProblem {
            state: format!("{start:?}"),
        });
    }
    Ok(())
}

/// Run `strategy` from `start` until `goal` is finalized or the frontier
/// empties.
///
/// Successor order is preserved exactly; identical inputs give identical
/// `visited_order`, `path`, and trace.
///
/// # Errors
///
/// - Precondition errors before the loop starts (empty problem, unknown start).
/// - [`SearchError::InvalidPolicy`] for an out-of-range policy.
/// - Configuration errors at the point a bad edge cost or heuristic estimate
///   is consumed, before it influences any relaxation.
pub fn search<P: SearchProblem>(
    problem: &P,
    start: &P::State,
    goal: &P::State,
    strategy: Strategy,
    policy: &SearchPolicy,
) -> SearchResult<SearchOutcome<P::State>> {
    policy.validate()?;
    check_preconditions(problem, start)?;

    let mut frontier = Frontier::new();
    let mut ledger = VisitationLedger::new();
    let mut trace = SearchTrace::new(strategy);
    let mut visited_order = Vec::new();
    let mut expansions: u64 = 0;

    debug!(%strategy, start = ?start, goal = ?goal, "search started");

    let start_h = if strategy.uses_heuristic() {
        policy.estimate(problem, start)?
    } else {
        0.0
    };
    ledger.relax(start, 0.0, None);
    let priority = strategy.priority(0.0, start_h, frontier.next_sequence());
    frontier.push(start.clone(), priority, 0.0);
    trace.record(SearchEvent::Enqueued {
        state: start.clone(),
        priority,
        g: 0.0,
    });

    let status = loop {
        if policy.max_expansions.is_some_and(|max| expansions >= max) {
            break SearchStatus::BudgetExhausted;
        }
        let Some(entry) = frontier.pop() else {
            break SearchStatus::NotFound;
        };

        if !ledger.is_current(&entry.state, entry.g) {
            trace!(state = ?entry.state, g = entry.g, "stale entry skipped");
            trace.record(SearchEvent::StaleSkipped {
                state: entry.state,
                g: entry.g,
            });
            continue;
        }

        let current = entry.state;
        let g = entry.g;
        ledger.finalize(&current);
        expansions += 1;
        visited_order.push(current.clone());
        trace.record(SearchEvent::Finalized {
            state: current.clone(),
            g,
        });
        trace!(state = ?current, g, priority = entry.key.priority, "finalized");

        if current == *goal {
            break SearchStatus::Found;
        }

        let edges = problem.successors(&current);
        let successor_count = edges.len();
        for edge in edges {
            let step = policy.step_cost(&current, &edge)?;
            let candidate = g + step;
            let improved = if strategy.relaxes_by_cost() {
                ledger.relax(&edge.to, candidate, Some(current.clone()))
            } else {
                ledger.discover(&edge.to, candidate, Some(current.clone()))
            };
            if !improved {
                continue;
            }
            let h = if strategy.uses_heuristic() {
                policy.estimate(problem, &edge.to)?
            } else {
                0.0
            };
            let priority = strategy.priority(candidate, h, frontier.next_sequence());
            frontier.push(edge.to.clone(), priority, candidate);
            trace.record(SearchEvent::Enqueued {
                state: edge.to,
                priority,
                g: candidate,
            });
        }
        trace.record(SearchEvent::Expanded {
            state: current,
            successors: successor_count,
        });
    };

    let (path, cost) = if status == SearchStatus::Found {
        (reconstruct_path(&ledger, goal), ledger.best_cost(goal))
    } else {
        (Vec::new(), f64::INFINITY)
    };

    debug!(
        %strategy,
        status = status.as_str(),
        expansions,
        path_len = path.len(),
        cost,
        "search finished"
    );

    Ok(SearchOutcome {
        status,
        path,
        visited_order,
        cost,
        trace,
        frontier_high_water: frontier.high_water(),
    })
}
