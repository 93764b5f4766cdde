//! Problem contracts consumed by every search strategy.
//!
//! Strategies never own a problem. They borrow one for the duration of a
//! call, read successors and estimates from it, and return results by value.
//! Implementations must be deterministic: the same state always yields the
//! same successors in the same order.

pub mod adjacency;
pub mod implicit;
pub mod tree;

use std::fmt::Debug;
use std::hash::Hash;

pub use adjacency::AdjacencyGraph;
pub use implicit::FnProblem;
pub use tree::{LiteralTree, TreeChild};

/// An outgoing edge produced by [`SearchProblem::successors`].
///
/// `cost` is `None` when the problem does not define a cost for this edge.
/// What a missing cost means is decided by the caller's search policy, not
/// by the problem.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge<S> {
    pub to: S,
    pub cost: Option<f64>,
}

impl<S> Edge<S> {
    /// An edge with no defined cost.
    #[must_use]
    pub fn unweighted(to: S) -> Self {
        Self { to, cost: None }
    }

    /// An edge with an explicit cost.
    #[must_use]
    pub fn weighted(to: S, cost: f64) -> Self {
        Self {
            to,
            cost: Some(cost),
        }
    }
}

/// An implicit or explicit state graph.
///
/// # Contract
///
/// - `successors` preserves caller order; strategies iterate it as given.
/// - `heuristic` returns `None` when no estimate is defined for a state.
/// - `contains` and `is_empty` let strategies reject malformed inputs before
///   searching. Implicit problems keep the defaults (everything is
///   contained, never empty).
pub trait SearchProblem {
    /// Opaque state identity. Only equality and hashing are used.
    type State: Clone + Eq + Hash + Debug;

    /// Ordered outgoing edges of `state`.
    fn successors(&self, state: &Self::State) -> Vec<Edge<Self::State>>;

    /// Heuristic estimate of the remaining cost from `state` to the goal.
    fn heuristic(&self, _state: &Self::State) -> Option<f64> {
        None
    }

    /// Whether `state` is a known state of this problem.
    fn contains(&self, _state: &Self::State) -> bool {
        true
    }

    /// Whether the problem has no states at all.
    fn is_empty(&self) -> bool {
        false
    }
}

/// A two-player, zero-sum game tree.
///
/// Nodes are evaluated top-down; no parent links are required.
pub trait GameTree {
    type Node: Clone + Debug;

    /// Ordered children of `node`. Empty for leaves.
    fn children(&self, node: &Self::Node) -> Vec<Self::Node>;

    /// Whether `node` ends the game.
    fn is_terminal(&self, node: &Self::Node) -> bool {
        self.children(node).is_empty()
    }

    /// Static evaluation of `node`, if one is defined.
    ///
    /// Terminal nodes must define one. Internal nodes only need one when a
    /// depth limit can cut the search off at them.
    fn static_value(&self, node: &Self::Node) -> Option<f64>;

    /// Human-readable label used in traces.
    fn label(&self, node: &Self::Node) -> String {
        format!("{node:?}")
    }
}
