//! Hill climbing: a greedy single-path walk over heuristic estimates.
//!
//! There is no frontier and no visited set; the walk never backtracks. The
//! returned path is a best-effort path, not a found path: it is whatever the
//! walk traversed before it stopped, goal or not.
//!
//! With sideways moves enabled and a cycle of equal estimates, the walk can
//! loop forever. Bounding it (with [`HillClimbConfig::max_steps`] or by
//! supplying an acyclic problem) is the caller's responsibility.

use serde::Serialize;
use statespace_kernel::problem::SearchProblem;
use statespace_kernel::proof::canon::{
    canonical_json_bytes, canonical_real, to_json_value, CanonError,
};
use statespace_kernel::proof::hash::{canonical_hash, ContentHash, DOMAIN_CLIMB_TRACE};
use tracing::{debug, trace};

use crate::error::SearchResult;
use crate::policy::{resolve_estimate, HillClimbConfig};
use crate::search::check_preconditions;

/// Why the walk stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    GoalReached,
    NoSuccessors,
    /// The best successor was worse, or tied while sideways moves are off.
    NoImprovement,
    StepLimit,
}

impl StopReason {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::GoalReached => "goal_reached",
            Self::NoSuccessors => "no_successors",
            Self::NoImprovement => "no_improvement",
            Self::StepLimit => "step_limit",
        }
    }
}

/// One step of the walk.
#[derive(Debug, Clone, PartialEq)]
pub enum ClimbEvent<S> {
    Moved {
        from: S,
        to: S,
        h: f64,
        sideways: bool,
    },
    Stopped {
        at: S,
        reason: StopReason,
    },
}

/// Result of a hill-climbing walk.
#[derive(Debug, Clone)]
pub struct ClimbOutcome<S> {
    /// Best-effort path: every state the walk occupied, in order.
    pub path: Vec<S>,
    /// Heuristic estimate at each position of `path`.
    pub estimates: Vec<f64>,
    pub reason: StopReason,
    pub events: Vec<ClimbEvent<S>>,
}

impl<S> ClimbOutcome<S> {
    #[must_use]
    pub fn reached_goal(&self) -> bool {
        self.reason == StopReason::GoalReached
    }
}

impl<S: Serialize> ClimbOutcome<S> {
    /// Serialize the walk to canonical JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if a state does not serialize or serializes to
    /// a non-integer number.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, CanonError> {
        canonical_json_bytes(&self.to_json_value()?)
    }

    /// Content hash of the canonical JSON bytes.
    ///
    /// # Errors
    ///
    /// See [`ClimbOutcome::to_canonical_json_bytes`].
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        Ok(canonical_hash(
            DOMAIN_CLIMB_TRACE,
            &self.to_canonical_json_bytes()?,
        ))
    }

    /// JSON value of the walk, before canonicalization.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError::Unserializable`] if a state does not serialize.
    pub fn to_json_value(&self) -> Result<serde_json::Value, CanonError> {
        let events = self
            .events
            .iter()
            .map(|event| {
                Ok(match event {
                    ClimbEvent::Moved {
                        from,
                        to,
                        h,
                        sideways,
                    } => serde_json::json!({
                        "from": to_json_value(from)?,
                        "h": canonical_real(*h),
                        "sideways": sideways,
                        "to": to_json_value(to)?,
                        "type": "moved",
                    }),
                    ClimbEvent::Stopped { at, reason } => serde_json::json!({
                        "at": to_json_value(at)?,
                        "reason": reason.as_str(),
                        "type": "stopped",
                    }),
                })
            })
            .collect::<Result<Vec<_>, CanonError>>()?;
        let path = self
            .path
            .iter()
            .map(to_json_value)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(serde_json::json!({
            "estimates": self.estimates.iter().map(|h| canonical_real(*h)).collect::<Vec<_>>(),
            "events": events,
            "path": path,
            "reason": self.reason.as_str(),
        }))
    }
}

/// Walk from `start`, always moving to the successor with the lowest
/// estimate.
///
/// Ties among successors go to the first one in successor order. A move is
/// taken when the candidate's estimate is strictly lower than the current
/// state's, or equal when `allow_sideways` is set. The comparison is always
/// against the current state, never against an earlier transition.
///
/// # Errors
///
/// Precondition errors for an empty problem or unknown start; configuration
/// errors for invalid or (under a `Reject` policy) missing estimates.
pub fn hill_climb<P: SearchProblem>(
    problem: &P,
    start: &P::State,
    goal: Option<&P::State>,
    config: &HillClimbConfig,
) -> SearchResult<ClimbOutcome<P::State>> {
    check_preconditions(problem, start)?;

    let mut current = start.clone();
    let mut current_h = resolve_estimate(config.missing_heuristic, problem, &current)?;
    let mut path = vec![current.clone()];
    let mut estimates = vec![current_h];
    let mut events = Vec::new();
    let mut steps: u64 = 0;

    let reason = loop {
        if goal.is_some_and(|g| *g == current) {
            break StopReason::GoalReached;
        }
        if config.max_steps.is_some_and(|max| steps >= max) {
            break StopReason::StepLimit;
        }

        let mut best: Option<(P::State, f64)> = None;
        for edge in problem.successors(&current) {
            let h = resolve_estimate(config.missing_heuristic, problem, &edge.to)?;
            let better = match &best {
                Some((_, best_h)) => h < *best_h,
                None => true,
            };
            if better {
                best = Some((edge.to, h));
            }
        }
        let Some((candidate, candidate_h)) = best else {
            break StopReason::NoSuccessors;
        };

        let improves = candidate_h < current_h;
        #[allow(clippy::float_cmp)]
        let sideways = candidate_h == current_h;
        if !improves && !(sideways && config.allow_sideways) {
            break StopReason::NoImprovement;
        }

        trace!(from = ?current, to = ?candidate, h = candidate_h, sideways, "hill climb move");
        events.push(ClimbEvent::Moved {
            from: current.clone(),
            to: candidate.clone(),
            h: candidate_h,
            sideways,
        });
        path.push(candidate.clone());
        estimates.push(candidate_h);
        current = candidate;
        current_h = candidate_h;
        steps += 1;
    };

    events.push(ClimbEvent::Stopped {
        at: current,
        reason,
    });
    debug!(reason = reason.as_str(), steps, "hill climb finished");

    Ok(ClimbOutcome {
        path,
        estimates,
        reason,
        events,
    })
}
