//! Typed search errors.
//!
//! `SearchError` covers configuration and precondition failures only. An
//! unreachable goal is a normal outcome ([`crate::search::SearchStatus::NotFound`]),
//! never an error. No partial result accompanies an error.

use thiserror::Error;

/// Result alias for search operations.
pub type SearchResult<T> = Result<T, SearchError>;

/// Broad class of a [`SearchError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The problem data or policy is unusable for the requested strategy.
    Configuration,
    /// The call itself is malformed (empty problem, unknown start, ...).
    Precondition,
}

/// Typed failure for search validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    /// An edge cost was negative, NaN, or infinite.
    #[error("invalid edge cost {cost} on {from} -> {to}: costs must be finite and non-negative")]
    InvalidEdgeCost { from: String, to: String, cost: f64 },

    /// An edge had no cost and the policy rejects missing costs.
    #[error("edge {from} -> {to} has no cost and missing costs are rejected")]
    MissingEdgeCost { from: String, to: String },

    /// A heuristic estimate was negative or NaN.
    #[error("invalid heuristic {estimate} for {state}: estimates must be non-negative")]
    InvalidHeuristic { state: String, estimate: f64 },

    /// A state had no heuristic estimate and the policy rejects missing estimates.
    #[error("state {state} has no heuristic estimate and missing estimates are rejected")]
    MissingHeuristic { state: String },

    /// A policy field is out of range.
    #[error("invalid policy: {detail}")]
    InvalidPolicy { detail: String },

    /// The problem has no states.
    #[error("problem has no states")]
    EmptyProblem,

    /// The start state is not a state of the problem.
    #[error("start state {state} is not part of the problem")]
    StartNotInProblem { state: String },

    /// A node reached by the search had no static value to return.
    #[error("node {node} has no static value")]
    MissingStaticValue { node: String },

    /// A static value was NaN and cannot be ordered.
    #[error("node {node} has unordered static value {value}")]
    InvalidStaticValue { node: String, value: f64 },
}

impl SearchError {
    /// Classify this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidEdgeCost { .. }
            | Self::MissingEdgeCost { .. }
            | Self::InvalidHeuristic { .. }
            | Self::MissingHeuristic { .. }
            | Self::InvalidPolicy { .. }
            | Self::InvalidStaticValue { .. } => ErrorKind::Configuration,
            Self::EmptyProblem | Self::StartNotInProblem { .. } | Self::MissingStaticValue { .. } => {
                ErrorKind::Precondition
            }
        }
    }
}
