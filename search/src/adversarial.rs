//! Minimax with alpha-beta pruning over a two-player, zero-sum game tree.
//!
//! Structurally separate from the graph strategies: this is a top-down
//! recursion over children, not a frontier loop. Nodes are identified in
//! traces by their child-index path from the root, so repeated labels or
//! equal leaf values never collide.
//!
//! # Cut-off contract
//!
//! After each child a maximizing node sets `alpha = max(alpha, value)` and a
//! minimizing node sets `beta = min(beta, value)`. As soon as
//! `alpha >= beta` the remaining children are skipped (a beta cut-off at a
//! maximizing node, an alpha cut-off at a minimizing node) and recorded as
//! pruned. The comparison is non-strict; a strict one would prune less and
//! could record different traces on shared fixtures.

use statespace_kernel::problem::GameTree;
use statespace_kernel::proof::canon::{canonical_json_bytes, canonical_real, CanonError};
use statespace_kernel::proof::hash::{canonical_hash, ContentHash, DOMAIN_GAME_TRACE};
use tracing::{debug, trace};

use crate::error::{SearchError, SearchResult};

/// Child-index path from the root. The root is the empty path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct NodePath(Vec<usize>);

impl NodePath {
    #[must_use]
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Path of the `index`-th child of this node.
    #[must_use]
    pub fn child(&self, index: usize) -> Self {
        let mut indices = self.0.clone();
        indices.push(index);
        Self(indices)
    }

    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    /// Whether this path is `other` or one of its ancestors.
    #[must_use]
    pub fn is_prefix_of(&self, other: &NodePath) -> bool {
        other.0.starts_with(&self.0)
    }
}

impl From<Vec<usize>> for NodePath {
    fn from(indices: Vec<usize>) -> Self {
        Self(indices)
    }
}

impl std::fmt::Display for NodePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.is_empty() {
            return f.write_str("root");
        }
        let parts: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        f.write_str(&parts.join("."))
    }
}

/// Which bound triggered a cut-off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CutOffKind {
    /// At a minimizing node: `beta` fell to `alpha`.
    Alpha,
    /// At a maximizing node: `alpha` rose to `beta`.
    Beta,
}

/// What happened at one node.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// The node's value was computed.
    Evaluated { value: f64 },
    /// The node stopped iterating its children.
    CutOff { kind: CutOffKind, alpha: f64, beta: f64 },
    /// The node was skipped by its parent's cut-off and has no value.
    Pruned,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameTraceEntry {
    pub path: NodePath,
    pub label: String,
    pub event: GameEvent,
}

/// Per-node status after an evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Annotation {
    Evaluated(f64),
    /// The node or one of its ancestors was pruned.
    Pruned,
    NotVisited,
}

/// Result of a minimax or alpha-beta evaluation.
#[derive(Debug, Clone)]
pub struct GameOutcome {
    pub value: f64,
    pub pruning: bool,
    /// Events in the order they occurred. Each visited node has exactly one
    /// `Evaluated` entry, recorded once its value is known.
    pub trace: Vec<GameTraceEntry>,
}

impl GameOutcome {
    /// Number of nodes whose value was computed.
    #[must_use]
    pub fn evaluated_count(&self) -> usize {
        self.trace
            .iter()
            .filter(|e| matches!(e.event, GameEvent::Evaluated { .. }))
            .count()
    }

    /// Roots of the pruned subtrees, in the order they were pruned.
    #[must_use]
    pub fn pruned(&self) -> Vec<&NodePath> {
        self.trace
            .iter()
            .filter(|e| e.event == GameEvent::Pruned)
            .map(|e| &e.path)
            .collect()
    }

    /// Distinguish evaluated, pruned, and never-reached nodes.
    #[must_use]
    pub fn annotation(&self, path: &NodePath) -> Annotation {
        let mut pruned = false;
        for entry in &self.trace {
            match entry.event {
                GameEvent::Evaluated { value } if entry.path == *path => {
                    return Annotation::Evaluated(value);
                }
                GameEvent::Pruned if entry.path.is_prefix_of(path) => pruned = true,
                _ => {}
            }
        }
        if pruned {
            Annotation::Pruned
        } else {
            Annotation::NotVisited
        }
    }

    /// Serialize the trace to canonical JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] on a non-integer JSON number (not produced by
    /// this type; reals are written as strings).
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, CanonError> {
        canonical_json_bytes(&self.to_json_value())
    }

    /// Content hash of the canonical JSON bytes.
    ///
    /// # Errors
    ///
    /// See [`GameOutcome::to_canonical_json_bytes`].
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        Ok(canonical_hash(
            DOMAIN_GAME_TRACE,
            &self.to_canonical_json_bytes()?,
        ))
    }

    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "pruning": self.pruning,
            "trace": self.trace.iter().map(entry_to_json).collect::<Vec<_>>(),
            "value": canonical_real(self.value),
        })
    }
}

fn entry_to_json(entry: &GameTraceEntry) -> serde_json::Value {
    let mut obj = serde_json::json!({
        "label": entry.label,
        "path": entry.path.indices(),
    });
    match &entry.event {
        GameEvent::Evaluated { value } => {
            obj["type"] = "evaluated".into();
            obj["value"] = canonical_real(*value).into();
        }
        GameEvent::CutOff { kind, alpha, beta } => {
            obj["type"] = "cut_off".into();
            obj["kind"] = match kind {
                CutOffKind::Alpha => "alpha",
                CutOffKind::Beta => "beta",
            }
            .into();
            obj["alpha"] = canonical_real(*alpha).into();
            obj["beta"] = canonical_real(*beta).into();
        }
        GameEvent::Pruned => obj["type"] = "pruned".into(),
    }
    obj
}

struct Evaluator<'t, T: GameTree> {
    tree: &'t T,
    pruning: bool,
    trace: Vec<GameTraceEntry>,
}

impl<T: GameTree> Evaluator<'_, T> {
    fn static_value(&self, node: &T::Node) -> SearchResult<f64> {
        match self.tree.static_value(node) {
            Some(value) if value.is_nan() => Err(SearchError::InvalidStaticValue {
                node: self.tree.label(node),
                value,
            }),
            Some(value) => Ok(value),
            None => Err(SearchError::MissingStaticValue {
                node: self.tree.label(node),
            }),
        }
    }

    fn value(
        &mut self,
        node: &T::Node,
        path: &NodePath,
        depth_limit: Option<u32>,
        maximizing: bool,
        mut alpha: f64,
        mut beta: f64,
    ) -> SearchResult<f64> {
        let children = if depth_limit == Some(0) || self.tree.is_terminal(node) {
            Vec::new()
        } else {
            self.tree.children(node)
        };

        let value = if children.is_empty() {
            self.static_value(node)?
        } else {
            let child_limit = depth_limit.map(|d| d - 1);
            let mut value = if maximizing {
                f64::NEG_INFINITY
            } else {
                f64::INFINITY
            };
            for (index, child) in children.iter().enumerate() {
                let child_value = self.value(
                    child,
                    &path.child(index),
                    child_limit,
                    !maximizing,
                    alpha,
                    beta,
                )?;
                if maximizing {
                    value = value.max(child_value);
                    alpha = alpha.max(value);
                } else {
                    value = value.min(child_value);
                    beta = beta.min(value);
                }
                if self.pruning && alpha >= beta {
                    let kind = if maximizing {
                        CutOffKind::Beta
                    } else {
                        CutOffKind::Alpha
                    };
                    trace!(%path, ?kind, alpha, beta, "cut-off");
                    self.trace.push(GameTraceEntry {
                        path: path.clone(),
                        label: self.tree.label(node),
                        event: GameEvent::CutOff { kind, alpha, beta },
                    });
                    for (skipped, sibling) in children.iter().enumerate().skip(index + 1) {
                        self.trace.push(GameTraceEntry {
                            path: path.child(skipped),
                            label: self.tree.label(sibling),
                            event: GameEvent::Pruned,
                        });
                    }
                    break;
                }
            }
            value
        };

        self.trace.push(GameTraceEntry {
            path: path.clone(),
            label: self.tree.label(node),
            event: GameEvent::Evaluated { value },
        });
        Ok(value)
    }
}

/// Evaluate `node` under explicit bounds.
///
/// The raw recursion: a leaf, or any node once `depth_limit` reaches
/// `Some(0)`, returns its static value; otherwise children are evaluated in
/// order with the cut-off rule from the module docs. The top-level call uses
/// `alpha = -inf`, `beta = +inf`; see [`alpha_beta`].
///
/// # Errors
///
/// [`SearchError::MissingStaticValue`] when a node that must be statically
/// evaluated has no value, [`SearchError::InvalidStaticValue`] for NaN.
pub fn evaluate<T: GameTree>(
    tree: &T,
    node: &T::Node,
    depth_limit: Option<u32>,
    maximizing: bool,
    alpha: f64,
    beta: f64,
) -> SearchResult<f64> {
    let mut evaluator = Evaluator {
        tree,
        pruning: true,
        trace: Vec::new(),
    };
    evaluator.value(node, &NodePath::root(), depth_limit, maximizing, alpha, beta)
}

fn run<T: GameTree>(
    tree: &T,
    root: &T::Node,
    depth_limit: Option<u32>,
    maximizing: bool,
    pruning: bool,
) -> SearchResult<GameOutcome> {
    let mut evaluator = Evaluator {
        tree,
        pruning,
        trace: Vec::new(),
    };
    let value = evaluator.value(
        root,
        &NodePath::root(),
        depth_limit,
        maximizing,
        f64::NEG_INFINITY,
        f64::INFINITY,
    )?;
    let outcome = GameOutcome {
        value,
        pruning,
        trace: evaluator.trace,
    };
    debug!(
        value,
        pruning,
        evaluated = outcome.evaluated_count(),
        pruned = outcome.pruned().len(),
        "game tree evaluated"
    );
    Ok(outcome)
}

/// Alpha-beta evaluation from `root` with full bounds.
///
/// `depth_limit = None` searches to the leaves.
///
/// # Errors
///
/// See [`evaluate`].
pub fn alpha_beta<T: GameTree>(
    tree: &T,
    root: &T::Node,
    depth_limit: Option<u32>,
    maximizing: bool,
) -> SearchResult<GameOutcome> {
    run(tree, root, depth_limit, maximizing, true)
}

/// Plain minimax: same recursion, no pruning. Reference for alpha-beta.
///
/// # Errors
///
/// See [`evaluate`].
pub fn minimax<T: GameTree>(
    tree: &T,
    root: &T::Node,
    depth_limit: Option<u32>,
    maximizing: bool,
) -> SearchResult<GameOutcome> {
    run(tree, root, depth_limit, maximizing, false)
}
