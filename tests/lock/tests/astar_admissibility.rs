//! A* admissibility with the Manhattan heuristic.
//!
//! Proves, for every state A* explores on a reachable grid:
//! 1. `cost_so_far + heuristic` never exceeds the optimal start→goal cost
//! 2. `cost_so_far` is already the true distance from the start (the
//!    heuristic is consistent, so no explored state is later improved)
//! 3. A* explores no more states than uniform-cost search

use lock_tests::grids::{all_three_by_three, random_grids};
use lock_tests::oracle::{distances_from, shortest_distance};
use waypoint_kernel::grid::SearchGrid;
use waypoint_search::search::{search, SearchRun, SearchStep};
use waypoint_search::strategy::Strategy;

fn check_grid(grid: &SearchGrid, context: &str) {
    let Some(optimal) = shortest_distance(grid) else {
        return;
    };
    let optimal = i64::try_from(optimal).unwrap();
    let from_start = distances_from(grid, grid.start());

    let mut run = SearchRun::new(grid, Strategy::AStar);
    while let Some(step) = run.advance() {
        let SearchStep::Exploring(at) = step else {
            continue;
        };
        let g = run.cost_so_far(at).unwrap();
        let f = g + run.heuristic(at);
        assert!(
            f <= optimal,
            "{context}: explored {at} with f={f} > optimal {optimal}"
        );
        assert_eq!(
            g,
            i64::try_from(from_start[&at]).unwrap(),
            "{context}: {at} explored before its cost was final"
        );
    }

    let astar = search(grid, Strategy::AStar);
    let ucs = search(grid, Strategy::UniformCost);
    assert!(
        astar.explored.len() <= ucs.explored.len(),
        "{context}: A* explored {} > UCS {}",
        astar.explored.len(),
        ucs.explored.len()
    );
}

#[test]
fn exhaustive_three_by_three() {
    for (mask, grid) in all_three_by_three().iter().enumerate() {
        check_grid(grid, &format!("3x3 mask {mask}"));
    }
}

#[test]
fn seeded_random_grids() {
    for (i, grid) in random_grids(11, 200, 8, 8, 0.3).iter().enumerate() {
        check_grid(grid, &format!("8x8 grid {i}"));
    }
}

#[test]
fn explored_states_never_repeat() {
    for grid in random_grids(12, 100, 7, 9, 0.2) {
        for strategy in Strategy::ALL {
            let trace = search(&grid, strategy);
            let mut seen = std::collections::BTreeSet::new();
            for &at in &trace.explored {
                assert!(seen.insert(at), "[{strategy}] explored {at} twice");
            }
            assert_eq!(
                trace.stats.expansions,
                trace.explored.len() as u64,
                "[{strategy}]"
            );
        }
    }
}
