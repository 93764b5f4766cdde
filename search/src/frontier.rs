//! Priority frontier with deterministic tie-breaking.
//!
//! One structure serves every strategy: the driver chooses the priority, the
//! frontier assigns a strictly increasing insertion sequence. LIFO and FIFO
//! orderings are priority orderings over that sequence.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::node::{FrontierEntry, FrontierKey};

/// Heap slot. Ordered by key only; `BinaryHeap` is a max-heap, so the key is
/// wrapped in `Reverse` for lowest-first extraction.
#[derive(Debug)]
struct Slot<S> {
    key: Reverse<FrontierKey>,
    state: S,
    g: f64,
}

impl<S> PartialEq for Slot<S> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<S> Eq for Slot<S> {}

impl<S> PartialOrd for Slot<S> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<S> Ord for Slot<S> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

/// Min-priority frontier.
///
/// The frontier does not deduplicate; the same state may be queued several
/// times with different costs. Deciding which entry is current belongs to
/// the visitation ledger.
#[derive(Debug)]
pub struct Frontier<S> {
    heap: BinaryHeap<Slot<S>>,
    next_sequence: u64,
    high_water: u64,
}

impl<S> Frontier<S> {
    /// Create an empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_sequence: 0,
            high_water: 0,
        }
    }

    /// The sequence number the next push will receive.
    #[must_use]
    pub fn next_sequence(&self) -> u64 {
        self.next_sequence
    }

    /// Queue `state` with `priority`. Returns the key it was queued under.
    pub fn push(&mut self, state: S, priority: f64, g: f64) -> FrontierKey {
        let key = FrontierKey {
            priority,
            sequence: self.next_sequence,
        };
        self.next_sequence += 1;
        self.heap.push(Slot {
            key: Reverse(key),
            state,
            g,
        });
        self.high_water = self.high_water.max(self.heap.len() as u64);
        key
    }

    /// Remove the entry with the lowest key.
    #[must_use]
    pub fn pop(&mut self) -> Option<FrontierEntry<S>> {
        self.heap.pop().map(|slot| FrontierEntry {
            key: slot.key.0,
            state: slot.state,
            g: slot.g,
        })
    }

    /// Current frontier size.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the frontier is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Largest size the frontier has reached.
    #[must_use]
    pub fn high_water(&self) -> u64 {
        self.high_water
    }
}

impl<S> Default for Frontier<S> {
    fn default() -> Self {
        Self::new()
    }
}
