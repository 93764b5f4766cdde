//! Statespace Harness: fixture-level orchestration for the search crate.
//!
//! The harness runs a described configuration against a named fixture
//! (`RunConfig` → `run` → `RunReport`) and persists the result as a
//! self-verifying report directory.
//!
//! The harness does NOT implement search logic; it delegates to
//! `statespace_search`. Fixtures provide problem data only; the harness owns
//! orchestration and packaging.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod fixtures;
pub mod report_dir;
pub mod runner;
