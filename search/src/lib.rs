//! Statespace Search: frontier-driven graph search, hill climbing, and
//! adversarial game-tree evaluation.
//!
//! This crate depends only on `statespace_kernel`; it does NOT depend on
//! `statespace_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! statespace_kernel  ←  statespace_search  ←  statespace_harness
//! (problem contracts)   (strategies, traces)  (fixtures, runner, reports)
//! ```
//!
//! # Key types
//!
//! - [`frontier::Frontier`] -- min-first pending set with sequence tie-break
//! - [`ledger::VisitationLedger`] -- best cost, parent, and finalization per state
//! - [`search::search`] -- one driver for BFS, DFS, UCS, greedy, and A*
//! - [`uninformed::backtrack`] -- recursive-order depth-first search
//! - [`climb::hill_climb`] -- greedy single-path walk with sideways moves
//! - [`adversarial::alpha_beta`] -- minimax with pruning and per-node trace
//! - [`error::SearchError`] -- configuration and precondition failures
//!
//! An unreachable goal is a status ([`search::SearchStatus::NotFound`]),
//! never an error.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod adversarial;
pub mod climb;
pub mod error;
pub mod frontier;
pub mod informed;
pub mod ledger;
pub mod node;
pub mod path;
pub mod policy;
pub mod search;
pub mod trace;
pub mod uninformed;
