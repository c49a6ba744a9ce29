//! `ExplorationTrace`: the full record of one finished run.
//!
//! The explored order and the final path are the observable surface of a
//! search. Two runs are "the same run" exactly when their canonical trace
//! bytes are equal, which is what [`ExplorationTrace::digest`] commits to.

use serde_json::{json, Value};
use waypoint_kernel::grid::Coord;
use waypoint_kernel::proof::canon::{canonical_json_bytes, CanonError};
use waypoint_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};

use crate::path::Path;
use crate::search::SearchStats;
use crate::strategy::Strategy;

/// Everything a finished run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplorationTrace {
    pub strategy: Strategy,
    /// Digest of the grid's rendered text.
    pub grid_digest: ContentHash,
    pub start: Coord,
    pub goal: Coord,
    /// States in the order they were reported as `Exploring`.
    pub explored: Vec<Coord>,
    /// Start→goal path, empty when the goal was unreachable.
    pub path: Path,
    pub stats: SearchStats,
}

impl ExplorationTrace {
    #[must_use]
    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }

    /// JSON view of the trace. Coordinates are `[row, col]` pairs.
    #[must_use]
    pub fn to_json_value(&self) -> Value {
        json!({
            "strategy": self.strategy.name(),
            "grid_digest": self.grid_digest.as_str(),
            "start": coord_json(self.start),
            "goal": coord_json(self.goal),
            "explored": self.explored.iter().map(|&c| coord_json(c)).collect::<Vec<_>>(),
            "path": self.path.coords().iter().map(|&c| coord_json(c)).collect::<Vec<_>>(),
            "found": self.found(),
            "stats": {
                "expansions": self.stats.expansions,
                "discovered": self.stats.discovered,
                "stale_skipped": self.stats.stale_skipped,
                "frontier_high_water": self.stats.frontier_high_water,
            },
        })
    }

    /// Canonical JSON bytes of [`ExplorationTrace::to_json_value`].
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if canonicalization fails. The trace holds
    /// integers only, so this does not happen in practice.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, CanonError> {
        canonical_json_bytes(&self.to_json_value())
    }

    /// Domain-separated digest of the canonical bytes.
    ///
    /// # Errors
    ///
    /// Same as [`ExplorationTrace::to_canonical_json_bytes`].
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        let bytes = self.to_canonical_json_bytes()?;
        Ok(canonical_hash(HashDomain::SearchTrace, &bytes))
    }
}

fn coord_json(c: Coord) -> Value {
    json!([c.row, c.col])
}
