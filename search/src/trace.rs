//! Structured trace of a graph search.
//!
//! The ordered event list is the decision surface a presentation layer
//! renders from; the kernel never renders anything itself. Traces serialize
//! to canonical JSON and are content-addressed, so two runs made the same
//! decisions exactly when their digests match.

use serde::Serialize;
use statespace_kernel::proof::canon::{
    canonical_json_bytes, canonical_real, to_json_value, CanonError,
};
use statespace_kernel::proof::hash::{canonical_hash, ContentHash, DOMAIN_SEARCH_TRACE};

use crate::search::Strategy;

/// One step of a graph search.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchEvent<S> {
    /// `state` was queued with this priority and cost-to-reach.
    Enqueued { state: S, priority: f64, g: f64 },
    /// A popped entry was older than the ledger's best cost and was dropped.
    StaleSkipped { state: S, g: f64 },
    /// `state` was popped as current and committed to the visited order.
    Finalized { state: S, g: f64 },
    /// The successors of `state` were examined.
    Expanded { state: S, successors: usize },
    /// Depth-first backtracking left `state` as a dead end.
    Backtracked { state: S },
}

impl<S> SearchEvent<S> {
    /// The state the event is about.
    #[must_use]
    pub fn state(&self) -> &S {
        match self {
            Self::Enqueued { state, .. }
            | Self::StaleSkipped { state, .. }
            | Self::Finalized { state, .. }
            | Self::Expanded { state, .. }
            | Self::Backtracked { state } => state,
        }
    }
}

/// Ordered events of one search call.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchTrace<S> {
    pub strategy: Strategy,
    pub events: Vec<SearchEvent<S>>,
}

impl<S> SearchTrace<S> {
    #[must_use]
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            events: Vec::new(),
        }
    }

    pub fn record(&mut self, event: SearchEvent<S>) {
        self.events.push(event);
    }

    /// Number of entries dropped as stale.
    #[must_use]
    pub fn stale_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, SearchEvent::StaleSkipped { .. }))
            .count()
    }
}

impl<S: Serialize> SearchTrace<S> {
    /// Serialize to canonical JSON bytes.
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
    /// See [`SearchTrace::to_canonical_json_bytes`].
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        let bytes = self.to_canonical_json_bytes()?;
        Ok(canonical_hash(DOMAIN_SEARCH_TRACE, &bytes))
    }

    /// JSON value of the trace, before canonicalization.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError::Unserializable`] if a state does not serialize.
    pub fn to_json_value(&self) -> Result<serde_json::Value, CanonError> {
        let events = self
            .events
            .iter()
            .map(event_to_json)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(serde_json::json!({
            "events": events,
            "strategy": self.strategy.as_str(),
        }))
    }
}

fn event_to_json<S: Serialize>(event: &SearchEvent<S>) -> Result<serde_json::Value, CanonError> {
    let state = to_json_value(event.state())?;
    Ok(match event {
        SearchEvent::Enqueued { priority, g, .. } => serde_json::json!({
            "g": canonical_real(*g),
            "priority": canonical_real(*priority),
            "state": state,
            "type": "enqueued",
        }),
        SearchEvent::StaleSkipped { g, .. } => serde_json::json!({
            "g": canonical_real(*g),
            "state": state,
            "type": "stale_skipped",
        }),
        SearchEvent::Finalized { g, .. } => serde_json::json!({
            "g": canonical_real(*g),
            "state": state,
            "type": "finalized",
        }),
        SearchEvent::Expanded { successors, .. } => serde_json::json!({
            "state": state,
            "successors": successors,
            "type": "expanded",
        }),
        SearchEvent::Backtracked { .. } => serde_json::json!({
            "state": state,
            "type": "backtracked",
        }),
    })
}
