//! Explicit adjacency-list problems.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use super::{Edge, SearchProblem};

/// An explicit directed graph with optional edge costs and heuristic table.
///
/// States are kept in first-seen order so that [`AdjacencyGraph::states`]
/// is deterministic. Targets of edges are known states even when they have
/// no outgoing edges of their own.
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<S> {
    order: Vec<S>,
    adjacency: HashMap<S, Vec<Edge<S>>>,
    heuristics: HashMap<S, f64>,
}

impl<S: Clone + Eq + Hash + Debug> AdjacencyGraph<S> {
    /// Create an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self {
            order: Vec::new(),
            adjacency: HashMap::new(),
            heuristics: HashMap::new(),
        }
    }

    /// Build from `(state, [neighbor, ..])` rows with no edge costs.
    pub fn from_unweighted<I, N>(rows: I) -> Self
    where
        I: IntoIterator<Item = (S, N)>,
        N: IntoIterator<Item = S>,
    {
        let mut graph = Self::new();
        for (from, neighbors) in rows {
            graph.add_state(from.clone());
            for to in neighbors {
                graph.add_edge(from.clone(), to);
            }
        }
        graph
    }

    /// Build from `(state, [(neighbor, cost), ..])` rows.
    pub fn from_weighted<I, N>(rows: I) -> Self
    where
        I: IntoIterator<Item = (S, N)>,
        N: IntoIterator<Item = (S, f64)>,
    {
        let mut graph = Self::new();
        for (from, neighbors) in rows {
            graph.add_state(from.clone());
            for (to, cost) in neighbors {
                graph.add_weighted_edge(from.clone(), to, cost);
            }
        }
        graph
    }

    /// Register a state without edges. No-op if already known.
    pub fn add_state(&mut self, state: S) {
        if !self.adjacency.contains_key(&state) {
            self.order.push(state.clone());
            self.adjacency.insert(state, Vec::new());
        }
    }

    /// Append an edge with no defined cost.
    pub fn add_edge(&mut self, from: S, to: S) {
        self.push_edge(from, Edge::unweighted(to));
    }

    /// Append an edge with an explicit cost.
    ///
    /// Costs are stored as given; validation happens where a strategy
    /// consumes them.
    pub fn add_weighted_edge(&mut self, from: S, to: S, cost: f64) {
        self.push_edge(from, Edge::weighted(to, cost));
    }

    fn push_edge(&mut self, from: S, edge: Edge<S>) {
        self.add_state(from.clone());
        self.add_state(edge.to.clone());
        if let Some(edges) = self.adjacency.get_mut(&from) {
            edges.push(edge);
        }
    }

    /// Set the heuristic estimate for `state`.
    pub fn set_heuristic(&mut self, state: S, estimate: f64) {
        self.heuristics.insert(state, estimate);
    }

    /// Builder form of [`AdjacencyGraph::set_heuristic`] for a whole table.
    #[must_use]
    pub fn with_heuristics<I>(mut self, table: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
    {
        for (state, estimate) in table {
            self.set_heuristic(state, estimate);
        }
        self
    }

    /// All known states in first-seen order.
    #[must_use]
    pub fn states(&self) -> &[S] {
        &self.order
    }

    /// Number of known states.
    #[must_use]
    pub fn state_count(&self) -> usize {
        self.order.len()
    }
}

impl<S: Clone + Eq + Hash + Debug> Default for AdjacencyGraph<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Clone + Eq + Hash + Debug> SearchProblem for AdjacencyGraph<S> {
    type State = S;

    fn successors(&self, state: &S) -> Vec<Edge<S>> {
        self.adjacency.get(state).cloned().unwrap_or_default()
    }

    fn heuristic(&self, state: &S) -> Option<f64> {
        self.heuristics.get(state).copied()
    }

    fn contains(&self, state: &S) -> bool {
        self.adjacency.contains_key(state)
    }

    fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
