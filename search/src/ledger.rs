//! Visitation ledger: best-known cost, parent link, and finalization per state.
//!
//! [`VisitationLedger::relax`] is the only way a cost-aware strategy updates
//! a recorded cost. Once a state is finalized no further update is accepted,
//! so any frontier entry still queued for it is stale by construction.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Best-known route to one state.
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerEntry<S> {
    pub cost: f64,
    pub parent: Option<S>,
}

/// Per-call record of discovered and finalized states.
#[derive(Debug)]
pub struct VisitationLedger<S> {
    entries: HashMap<S, LedgerEntry<S>>,
    finalized: HashSet<S>,
}

impl<S: Clone + Eq + Hash> VisitationLedger<S> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            finalized: HashSet::new(),
        }
    }

    /// Record `(cost, parent)` for `state` if `cost` strictly improves on the
    /// recorded cost, or nothing is recorded yet.
    ///
    /// Returns `false` and changes nothing otherwise, including when `state`
    /// is already finalized.
    pub fn relax(&mut self, state: &S, cost: f64, parent: Option<S>) -> bool {
        if self.finalized.contains(state) {
            return false;
        }
        match self.entries.get_mut(state) {
            Some(entry) if cost < entry.cost => {
                entry.cost = cost;
                entry.parent = parent;
                true
            }
            Some(_) => false,
            None => {
                self.entries
                    .insert(state.clone(), LedgerEntry { cost, parent });
                true
            }
        }
    }

    /// Record `state` on first discovery only, ignoring cost.
    ///
    /// The boolean form used by strategies that make no optimality claim:
    /// a state is relaxed at most once.
    pub fn discover(&mut self, state: &S, cost: f64, parent: Option<S>) -> bool {
        if self.entries.contains_key(state) {
            return false;
        }
        self.entries
            .insert(state.clone(), LedgerEntry { cost, parent });
        true
    }

    /// Whether a popped entry queued with cost `g` is the current one.
    ///
    /// An entry is current when the state is not yet finalized and `g` is
    /// exactly the recorded best cost. Relaxation stores the same `f64` that
    /// is queued, so exact comparison is sound.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_current(&self, state: &S, g: f64) -> bool {
        !self.finalized.contains(state) && self.entries.get(state).is_some_and(|e| e.cost == g)
    }

    /// Commit `state`: no later relaxation will change it.
    pub fn finalize(&mut self, state: &S) {
        self.finalized.insert(state.clone());
    }

    /// Whether `state` has been committed by [`VisitationLedger::finalize`].
    #[must_use]
    pub fn is_finalized(&self, state: &S) -> bool {
        self.finalized.contains(state)
    }

    /// Best known cost to reach `state`; infinity if undiscovered.
    #[must_use]
    pub fn best_cost(&self, state: &S) -> f64 {
        self.entries.get(state).map_or(f64::INFINITY, |e| e.cost)
    }

    #[must_use]
    pub fn parent(&self, state: &S) -> Option<&S> {
        self.entries.get(state).and_then(|e| e.parent.as_ref())
    }

    #[must_use]
    pub fn entry(&self, state: &S) -> Option<&LedgerEntry<S>> {
        self.entries.get(state)
    }

    /// Number of discovered states.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Clone + Eq + Hash> Default for VisitationLedger<S> {
    fn default() -> Self {
        Self::new()
    }
}
