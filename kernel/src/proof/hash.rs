//! Content hashing with domain separation.
//!
//! Algorithm: SHA-256. Every digest is `sha256(domain || data)` where the
//! domain prefix is a null-terminated ASCII tag, so bytes hashed for one
//! artifact kind can never collide with another kind.

use sha2::{Digest, Sha256};

/// A content-addressed hash with algorithm identifier.
///
/// Format: `"algorithm:hex_digest"` (e.g., `"sha256:abcdef..."`)
///
/// Invariant: the inner string always contains a `:` separator with
/// non-empty substrings on both sides (enforced by [`ContentHash::parse`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentHash {
    full: String,
    colon: usize,
}

impl ContentHash {
    /// Parse from `"algorithm:hex"` format.
    ///
    /// Returns `None` if the colon is missing or either side is empty.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let colon = s.find(':')?;
        if colon == 0 || colon == s.len() - 1 {
            return None;
        }
        Some(Self {
            full: s.to_string(),
            colon,
        })
    }

    /// The algorithm portion (e.g., "sha256").
    #[must_use]
    pub fn algorithm(&self) -> &str {
        &self.full[..self.colon]
    }

    /// The hex digest portion.
    #[must_use]
    pub fn hex_digest(&self) -> &str {
        &self.full[self.colon + 1..]
    }

    /// The full string representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.full
    }
}

impl std::fmt::Display for ContentHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.full)
    }
}

/// Domain prefix for graph-search traces.
pub const DOMAIN_SEARCH_TRACE: &[u8] = b"STATESPACE::SEARCH_TRACE::V1\0";

/// Domain prefix for hill-climbing traces.
pub const DOMAIN_CLIMB_TRACE: &[u8] = b"STATESPACE::CLIMB_TRACE::V1\0";

/// Domain prefix for adversarial (minimax) traces.
pub const DOMAIN_GAME_TRACE: &[u8] = b"STATESPACE::GAME_TRACE::V1\0";

/// Domain prefix for harness run reports.
pub const DOMAIN_RUN_REPORT: &[u8] = b"STATESPACE::RUN_REPORT::V1\0";

/// Compute `sha256(domain || data)`.
///
/// Result format: `"sha256:<hex_digest>"`.
#[must_use]
pub fn canonical_hash(domain: &[u8], data: &[u8]) -> ContentHash {
    let mut hasher = Sha256::new();
    hasher.update(domain);
    hasher.update(data);
    let digest = hasher.finalize();
    let full = format!("sha256:{}", hex::encode(digest));
    ContentHash { full, colon: 6 }
}
