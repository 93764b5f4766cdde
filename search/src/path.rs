//! Path reconstruction from parent links.

use std::hash::Hash;

use crate::ledger::VisitationLedger;

/// Follow parent links from `goal` back to the root and reverse.
///
/// Returns the start-to-goal sequence, inclusive; a single element when the
/// goal is the start. Returns an empty path if `goal` was never discovered.
#[must_use]
pub fn reconstruct_path<S: Clone + Eq + Hash>(ledger: &VisitationLedger<S>, goal: &S) -> Vec<S> {
    if ledger.entry(goal).is_none() {
        return Vec::new();
    }
    let mut path = vec![goal.clone()];
    let mut cursor = goal;
    while let Some(parent) = ledger.parent(cursor) {
        path.push(parent.clone());
        cursor = parent;
    }
    path.reverse();
    path
}
