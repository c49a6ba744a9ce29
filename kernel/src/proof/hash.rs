//! Content hashing with typed domain separation.
//!
//! Algorithm: SHA-256. Every digest is computed over
//! `domain_prefix || payload`, so a search trace and a value table with
//! identical bytes still hash differently.

use sha2::{Digest, Sha256};

/// A content-addressed hash, `"sha256:<hex_digest>"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentHash {
    full: String,
}

impl ContentHash {
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

/// Typed domain separator for [`canonical_hash`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashDomain {
    /// A grid rendered in its text form.
    Grid,
    /// A complete exploration trace (explored order + path).
    SearchTrace,
    /// A converged value table plus policy.
    Solution,
    /// A simulated trajectory.
    Trajectory,
}

impl HashDomain {
    /// All domains in declaration order.
    pub const ALL: &'static [HashDomain] =
        &[Self::Grid, Self::SearchTrace, Self::Solution, Self::Trajectory];

    /// Null-terminated prefix bytes.
    #[must_use]
    pub const fn as_bytes(self) -> &'static [u8] {
        match self {
            Self::Grid => b"WAYPOINT::GRID::V1\0",
            Self::SearchTrace => b"WAYPOINT::SEARCH_TRACE::V1\0",
            Self::Solution => b"WAYPOINT::MDP_SOLUTION::V1\0",
            Self::Trajectory => b"WAYPOINT::TRAJECTORY::V1\0",
        }
    }
}

/// SHA-256 of `domain || data`, formatted as `"sha256:<hex>"`.
#[must_use]
pub fn canonical_hash(domain: HashDomain, data: &[u8]) -> ContentHash {
    let mut hasher = Sha256::new();
    hasher.update(domain.as_bytes());
    hasher.update(data);
    let hex = hex::encode(hasher.finalize());
    let full = format!("sha256:{hex}");
    ContentHash { full }
}
