//! Shared helpers for waypoint benchmark suites.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use waypoint_kernel::grid::{SearchCell, SearchGrid};

/// An `n × n` grid with no walls, start top-left, goal bottom-right.
///
/// # Panics
///
/// Panics if `n < 2`.
#[must_use]
pub fn open_grid(n: usize) -> SearchGrid {
    assert!(n >= 2, "open grid needs at least 2×2 cells");
    build(n, |_, _| SearchCell::Road)
}

/// An `n × n` grid whose interior cells are walls with probability
/// `density`, drawn from `seed`. Start top-left, goal bottom-right; the goal
/// may be unreachable.
///
/// # Panics
///
/// Panics if `n < 2`.
#[must_use]
pub fn random_maze(seed: u64, n: usize, density: f64) -> SearchGrid {
    assert!(n >= 2, "maze needs at least 2×2 cells");
    let mut rng = StdRng::seed_from_u64(seed);
    build(n, |_, _| {
        if rng.gen_bool(density) {
            SearchCell::Wall
        } else {
            SearchCell::Road
        }
    })
}

fn build(n: usize, mut interior: impl FnMut(usize, usize) -> SearchCell) -> SearchGrid {
    let rows = (0..n)
        .map(|row| {
            (0..n)
                .map(|col| match (row, col) {
                    (0, 0) => SearchCell::Start,
                    (r, c) if r == n - 1 && c == n - 1 => SearchCell::Goal,
                    (r, c) => interior(r, c),
                })
                .collect()
        })
        .collect();
    match SearchGrid::from_rows(rows) {
        Ok(grid) => grid,
        Err(e) => unreachable!("generated grid has one start and one goal: {e}"),
    }
}
