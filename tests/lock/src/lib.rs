//! Shared helpers for the lock tests and the `search_fixture` binary.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod runs;
