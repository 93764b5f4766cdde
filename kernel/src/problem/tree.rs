//! Literal game trees: named internal nodes and numeric leaves.

use std::collections::HashMap;

use super::GameTree;
use crate::proof::canon::canonical_real;

/// A node reference inside a [`LiteralTree`].
#[derive(Debug, Clone, PartialEq)]
pub enum TreeChild {
    /// A named node, internal if it has a row in the tree.
    Node(String),
    /// A terminal leaf carrying its value.
    Leaf(f64),
}

impl TreeChild {
    #[must_use]
    pub fn node(name: &str) -> Self {
        Self::Node(name.to_string())
    }

    #[must_use]
    pub fn leaf(value: f64) -> Self {
        Self::Leaf(value)
    }
}

/// A game tree written out as `name -> [children]` rows.
///
/// Named nodes without a row are terminal; they need a static value from
/// [`LiteralTree::with_static_value`] to be evaluated. Internal nodes may
/// also carry a static value, which is used when a depth limit cuts the
/// search off at them.
#[derive(Debug, Clone, Default)]
pub struct LiteralTree {
    rows: HashMap<String, Vec<TreeChild>>,
    static_values: HashMap<String, f64>,
}

impl LiteralTree {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the children of `name`.
    #[must_use]
    pub fn node<I>(mut self, name: &str, children: I) -> Self
    where
        I: IntoIterator<Item = TreeChild>,
    {
        self.rows
            .insert(name.to_string(), children.into_iter().collect());
        self
    }

    /// Attach a static evaluation to a named node.
    #[must_use]
    pub fn with_static_value(mut self, name: &str, value: f64) -> Self {
        self.static_values.insert(name.to_string(), value);
        self
    }

    /// Reference to the named node, for use as a search root.
    #[must_use]
    pub fn root(&self, name: &str) -> TreeChild {
        TreeChild::node(name)
    }
}

impl GameTree for LiteralTree {
    type Node = TreeChild;

    fn children(&self, node: &TreeChild) -> Vec<TreeChild> {
        match node {
            TreeChild::Leaf(_) => Vec::new(),
            TreeChild::Node(name) => self.rows.get(name).cloned().unwrap_or_default(),
        }
    }

    fn static_value(&self, node: &TreeChild) -> Option<f64> {
        match node {
            TreeChild::Leaf(value) => Some(*value),
            TreeChild::Node(name) => self.static_values.get(name).copied(),
        }
    }

    fn label(&self, node: &TreeChild) -> String {
        match node {
            TreeChild::Leaf(value) => canonical_real(*value),
            TreeChild::Node(name) => name.clone(),
        }
    }
}
