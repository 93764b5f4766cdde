//! Frontier entry and ordering key.

use std::cmp::Ordering;

/// The frontier ordering key: `(priority, sequence)`.
///
/// Lower priority first; equal priorities are broken by the older insertion
/// sequence. States themselves are never compared.
///
/// Priorities are ordered with [`f64::total_cmp`], so the key is a total
/// order even for infinite estimates.
#[derive(Debug, Clone, Copy)]
pub struct FrontierKey {
    pub priority: f64,
    pub sequence: u64,
}

impl PartialEq for FrontierKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierKey {}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .total_cmp(&other.priority)
            .then(self.sequence.cmp(&other.sequence))
    }
}

/// A pending state with the cost-to-reach it was queued with.
///
/// `g` is compared against the ledger at pop time to detect stale entries.
#[derive(Debug, Clone)]
pub struct FrontierEntry<S> {
    pub key: FrontierKey,
    pub state: S,
    pub g: f64,
}
