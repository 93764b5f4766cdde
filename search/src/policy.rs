//! Search policy types.
//!
//! Missing-data defaults are explicit here instead of being silent fallbacks
//! inside the strategies. Costs and estimates are validated at the point a
//! strategy consumes them, through [`SearchPolicy::step_cost`] and
//! [`resolve_estimate`].

use std::fmt::Debug;

use serde::{Deserialize, Serialize};
use statespace_kernel::problem::{Edge, SearchProblem};

use crate::error::{SearchError, SearchResult};

/// What an edge without a defined cost costs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingCostPolicy {
    /// Missing costs count as 1.
    #[default]
    Unit,
    /// Missing costs are a configuration error.
    Reject,
}

/// What a state without a heuristic estimate is estimated at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingHeuristicPolicy {
    /// Missing estimates count as 0 (always admissible).
    #[default]
    Zero,
    /// Missing estimates are a configuration error.
    Reject,
}

/// Configuration for the frontier-based strategies.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchPolicy {
    pub missing_cost: MissingCostPolicy,
    pub missing_heuristic: MissingHeuristicPolicy,
    /// Stop after this many finalized expansions. `None` = unbounded.
    pub max_expansions: Option<u64>,
}

impl SearchPolicy {
    /// Reject out-of-range settings before any search step.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if `max_expansions` is zero.
    pub fn validate(&self) -> SearchResult<()> {
        if self.max_expansions == Some(0) {
            return Err(SearchError::InvalidPolicy {
                detail: "max_expansions must be at least 1".into(),
            });
        }
        Ok(())
    }

    /// The cost of stepping along `edge` out of `from`.
    ///
    /// # Errors
    ///
    /// - [`SearchError::InvalidEdgeCost`] for negative, NaN, or infinite costs.
    /// - [`SearchError::MissingEdgeCost`] for an undefined cost under
    ///   [`MissingCostPolicy::Reject`].
    pub fn step_cost<S: Debug>(&self, from: &S, edge: &Edge<S>) -> SearchResult<f64> {
        match edge.cost {
            Some(cost) if cost.is_finite() && cost >= 0.0 => Ok(cost),
            Some(cost) => Err(SearchError::InvalidEdgeCost {
                from: format!("{from:?}"),
                to: format!("{:?}", edge.to),
                cost,
            }),
            None => match self.missing_cost {
                MissingCostPolicy::Unit => Ok(1.0),
                MissingCostPolicy::Reject => Err(SearchError::MissingEdgeCost {
                    from: format!("{from:?}"),
                    to: format!("{:?}", edge.to),
                }),
            },
        }
    }

    /// The heuristic estimate of `state` under this policy.
    ///
    /// # Errors
    ///
    /// See [`resolve_estimate`].
    pub fn estimate<P: SearchProblem>(&self, problem: &P, state: &P::State) -> SearchResult<f64> {
        resolve_estimate(self.missing_heuristic, problem, state)
    }
}

/// Read and validate `problem.heuristic(state)`.
///
/// `+inf` is accepted and marks a state the heuristic considers hopeless.
///
/// # Errors
///
/// - [`SearchError::InvalidHeuristic`] for negative or NaN estimates.
/// - [`SearchError::MissingHeuristic`] for an undefined estimate under
///   [`MissingHeuristicPolicy::Reject`].
pub fn resolve_estimate<P: SearchProblem>(
    policy: MissingHeuristicPolicy,
    problem: &P,
    state: &P::State,
) -> SearchResult<f64> {
    match problem.heuristic(state) {
        Some(h) if h >= 0.0 => Ok(h),
        Some(h) => Err(SearchError::InvalidHeuristic {
            state: format!("{state:?}"),
            estimate: h,
        }),
        None => match policy {
            MissingHeuristicPolicy::Zero => Ok(0.0),
            MissingHeuristicPolicy::Reject => Err(SearchError::MissingHeuristic {
                state: format!("{state:?}"),
            }),
        },
    }
}

/// Configuration for hill climbing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HillClimbConfig {
    /// Accept moves to a successor whose estimate equals the current one.
    pub allow_sideways: bool,
    /// Stop after this many moves. `None` = unbounded.
    pub max_steps: Option<u64>,
    pub missing_heuristic: MissingHeuristicPolicy,
}

impl Default for HillClimbConfig {
    fn default() -> Self {
        Self {
            allow_sideways: true,
            max_steps: None,
            missing_heuristic: MissingHeuristicPolicy::Zero,
        }
    }
}
