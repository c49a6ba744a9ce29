//! `Path` and parent-chain reconstruction, shared by every strategy.

use std::collections::BTreeMap;

use waypoint_kernel::grid::{Coord, SearchGrid};

/// Ordered start→goal coordinates, inclusive. Empty means unreachable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Path(Vec<Coord>);

impl Path {
    #[must_use]
    pub fn new(coords: Vec<Coord>) -> Self {
        Self(coords)
    }

    /// The "no path" value.
    #[must_use]
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    #[must_use]
    pub fn coords(&self) -> &[Coord] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of unit steps: `len - 1`, or 0 for the empty path.
    #[must_use]
    pub fn cost(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    /// Check that this is a walkable path from `grid.start()` to `grid.goal()`.
    ///
    /// The empty path is never valid here; callers that accept "no path"
    /// check [`Path::is_empty`] first.
    ///
    /// # Errors
    ///
    /// Returns the first [`PathDefect`] found.
    pub fn validate_on(&self, grid: &SearchGrid) -> Result<(), PathDefect> {
        let (Some(&first), Some(&last)) = (self.0.first(), self.0.last()) else {
            return Err(PathDefect::Empty);
        };
        if first != grid.start() {
            return Err(PathDefect::WrongStart { at: first });
        }
        if last != grid.goal() {
            return Err(PathDefect::WrongEnd { at: last });
        }
        for (index, &at) in self.0.iter().enumerate() {
            if !grid.is_traversable(at) {
                return Err(PathDefect::Blocked { index, at });
            }
        }
        for (index, pair) in self.0.windows(2).enumerate() {
            if !pair[0].is_adjacent(pair[1]) {
                return Err(PathDefect::NotAdjacent {
                    index,
                    from: pair[0],
                    to: pair[1],
                });
            }
        }
        Ok(())
    }
}

impl From<Path> for Vec<Coord> {
    fn from(path: Path) -> Self {
        path.0
    }
}

/// Why a path failed [`Path::validate_on`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathDefect {
    Empty,
    WrongStart { at: Coord },
    WrongEnd { at: Coord },
    Blocked { index: usize, at: Coord },
    NotAdjacent { index: usize, from: Coord, to: Coord },
}

/// Walk parent links back from `terminal` to `start`.
///
/// A state with no parent that is not `start`, or a chain longer than the
/// parent map (a cycle), yields the empty path. Both mean the run's parent
/// bookkeeping is broken, so they are logged at `warn`.
#[must_use]
pub fn reconstruct_path(parents: &BTreeMap<Coord, Coord>, start: Coord, terminal: Coord) -> Path {
    let mut reversed = Vec::new();
    let mut current = terminal;
    while current != start {
        reversed.push(current);
        if reversed.len() > parents.len() {
            tracing::warn!(%start, %terminal, "parent chain cycles; returning empty path");
            return Path::empty();
        }
        let Some(&parent) = parents.get(&current) else {
            tracing::warn!(%start, %terminal, orphan = %current, "parent chain broken; returning empty path");
            return Path::empty();
        };
        current = parent;
    }
    reversed.push(start);
    reversed.reverse();
    Path(reversed)
}
