//! Search determinism, in-process and across processes.
//!
//! Proves:
//! 1. Ten runs of the same strategy on the same grid produce byte-identical
//!    canonical traces
//! 2. Step-by-step driving and `run_to_completion` agree
//! 3. The `search_fixture` binary prints identical output under every
//!    environment variant and working directory

use lock_tests::fixture::{assert_stable_across_processes, parse_lines};
use lock_tests::grids::random_grids;
use waypoint_kernel::grid::SearchGrid;
use waypoint_search::search::{search, SearchRun, SearchStep};
use waypoint_search::strategy::Strategy;

#[test]
fn repeated_runs_are_identical() {
    for grid in random_grids(21, 25, 10, 10, 0.25) {
        for strategy in Strategy::ALL {
            let first = search(&grid, strategy);
            let bytes = first.to_canonical_json_bytes().unwrap();
            for _ in 0..10 {
                let again = search(&grid, strategy);
                assert_eq!(again, first, "[{strategy}]");
                assert_eq!(again.to_canonical_json_bytes().unwrap(), bytes);
            }
        }
    }
}

#[test]
fn stepping_matches_run_to_completion() {
    let grid = SearchGrid::parse(&["@,0,0,0", "1,1,0,1", "0,0,0,0", "0,1,1,$"]).unwrap();
    for strategy in Strategy::ALL {
        let trace = search(&grid, strategy);
        let steps: Vec<SearchStep> = SearchRun::new(&grid, strategy).collect();
        let (last, exploring) = steps.split_last().unwrap();
        let explored: Vec<_> = exploring
            .iter()
            .map(|s| match s {
                SearchStep::Exploring(at) => *at,
                other => panic!("[{strategy}] non-terminal step {other:?}"),
            })
            .collect();
        assert_eq!(explored, trace.explored, "[{strategy}]");
        assert_eq!(last, &SearchStep::Found(trace.path.clone()), "[{strategy}]");
    }
}

#[test]
fn digests_differ_between_strategies() {
    let grid = SearchGrid::parse(&["@,0,0,0", "0,0,0,0", "0,0,0,0", "0,0,0,$"]).unwrap();
    let digests: std::collections::BTreeSet<_> = Strategy::ALL
        .into_iter()
        .map(|s| search(&grid, s).digest().unwrap())
        .collect();
    assert_eq!(digests.len(), Strategy::ALL.len());
}

#[test]
fn crossproc_search_fixture() {
    let baseline = assert_stable_across_processes(env!("CARGO_BIN_EXE_search_fixture"));
    let lines = parse_lines(&baseline);
    for strategy in Strategy::ALL {
        let name = strategy.name();
        assert!(
            lines[&format!("{name}.trace_digest")].starts_with("sha256:"),
            "missing {name}.trace_digest"
        );
        assert_eq!(lines[&format!("{name}.found")], "true");
    }
    // Shortest-path strategies agree on the cost through the fixture maze.
    assert_eq!(lines["bfs.path_cost"], lines["ucs.path_cost"]);
    assert_eq!(lines["bfs.path_cost"], lines["astar.path_cost"]);
    assert_eq!(lines["bfs.path_cost"], "14");
}
