//! Proof module: canonical JSON bytes and content-addressed hashing.
//!
//! Nothing in `problem` depends on `proof`.

pub mod canon;
pub mod hash;
