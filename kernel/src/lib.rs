//! Statespace Kernel: the problem contracts every search strategy consumes.
//!
//! # API Surface
//!
//! - [`problem::SearchProblem`] -- implicit or explicit graph: successors, edge
//!   costs, heuristic estimates
//! - [`problem::GameTree`] -- two-player game tree: children, terminal test,
//!   static evaluation
//! - [`proof::canon::canonical_json_bytes`] and [`proof::hash::canonical_hash`]
//!   -- the single canonicalization and digest path for search traces
//!
//! # Module Dependency Direction
//!
//! `proof` ← `problem`
//!
//! `proof` only formats values; it does not know about problems. `problem`
//! uses `proof::canon` only to label literal-tree leaves.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod problem;
pub mod proof;
