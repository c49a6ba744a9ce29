//! Policy simulation lock tests.
//!
//! Proves:
//! 1. Every episode stops within its step bound and never enters an
//!    obstacle, across seeds, bounds, and trap settings
//! 2. A fixed seed reproduces the trajectory exactly, in-process and across
//!    processes (`mdp_fixture`)
//! 3. Terminal traps end episodes with `ReachedTrap`

use lock_tests::fixture::{assert_stable_across_processes, parse_lines};
use rand::rngs::StdRng;
use rand::SeedableRng;
use waypoint_kernel::grid::RewardGrid;
use waypoint_mdp::config::MdpConfig;
use waypoint_mdp::model::MdpModel;
use waypoint_mdp::simulate::{simulate, PolicySimulator, SimulationOutcome};
use waypoint_mdp::solver::solve;

#[test]
fn episodes_bounded_and_obstacle_free() {
    for (discount, traps_are_terminal) in [(0.5, false), (0.9, false), (0.9, true)] {
        for max_steps in [1, 5, 40, 200] {
            let config = MdpConfig {
                discount,
                traps_are_terminal,
                max_simulation_steps: max_steps,
                ..MdpConfig::default()
            };
            let model = MdpModel::new(&RewardGrid::classic(), &config).unwrap();
            let solution = solve(&model).unwrap();
            for seed in 0..40 {
                let mut rng = StdRng::seed_from_u64(seed);
                let t = simulate(&model, &solution, &mut rng);
                let ctx =
                    format!("γ={discount} traps={traps_are_terminal} max={max_steps} seed={seed}");
                assert!(t.steps() <= max_steps, "{ctx}: {} steps", t.steps());
                for s in &t.states {
                    assert!(!model.obstacles().contains(s), "{ctx}: entered obstacle {s}");
                    assert!(model.is_valid_state(*s), "{ctx}: left the grid at {s}");
                }
                if t.outcome == SimulationOutcome::StepLimit {
                    assert_eq!(t.steps(), max_steps, "{ctx}");
                }
                assert_ne!(t.outcome, SimulationOutcome::PolicyUndefined, "{ctx}");
            }
        }
    }
}

#[test]
fn far_sighted_policy_reaches_exit_despite_slip() {
    let config = MdpConfig {
        discount: 0.9,
        ..MdpConfig::default()
    };
    let model = MdpModel::new(&RewardGrid::classic(), &config).unwrap();
    let solution = solve(&model).unwrap();
    let simulator = PolicySimulator::new(&model, &solution).with_max_steps(200);
    for seed in 0..30 {
        let t = simulator.run(&mut StdRng::seed_from_u64(seed));
        assert_eq!(t.outcome, SimulationOutcome::ReachedExit, "seed {seed}");
        assert!(t.steps() >= 14, "seed {seed}: faster than Manhattan distance");
    }
}

#[test]
fn seed_reproduces_trajectory() {
    let config = MdpConfig {
        discount: 0.9,
        ..MdpConfig::default()
    };
    let model = MdpModel::new(&RewardGrid::classic(), &config).unwrap();
    let solution = solve(&model).unwrap();
    let first = simulate(&model, &solution, &mut StdRng::seed_from_u64(99));
    for _ in 0..10 {
        let again = simulate(&model, &solution, &mut StdRng::seed_from_u64(99));
        assert_eq!(again, first);
    }
    assert_eq!(
        first.digest().unwrap(),
        simulate(&model, &solution, &mut StdRng::seed_from_u64(99))
            .digest()
            .unwrap()
    );
}

#[test]
fn terminal_trap_stops_episode() {
    let config = MdpConfig {
        traps_are_terminal: true,
        slip_probability: 0.0,
        move_cost: -100,
        ..MdpConfig::default()
    };
    let model = MdpModel::parse(&[["A", "-10", "+10"]], &config).unwrap();
    let solution = solve(&model).unwrap();
    let t = simulate(&model, &solution, &mut StdRng::seed_from_u64(0));
    assert_eq!(t.outcome, SimulationOutcome::ReachedTrap);
    assert_eq!(t.steps(), 1);
}

#[test]
fn crossproc_mdp_fixture() {
    let baseline = assert_stable_across_processes(env!("CARGO_BIN_EXE_mdp_fixture"));
    let lines = parse_lines(&baseline);
    for label in ["state", "transition", "terminal_traps"] {
        assert!(lines[&format!("{label}.solution_digest")].starts_with("sha256:"));
        assert!(lines[&format!("{label}.trajectory_digest")].starts_with("sha256:"));
        assert_eq!(lines[&format!("{label}.policy_row_7")].chars().last(), Some('*'));
    }
    assert_ne!(lines["state.solution_digest"], lines["transition.solution_digest"]);
    assert_ne!(lines["state.solution_digest"], lines["terminal_traps.solution_digest"]);
    // The trap at (4,6) is terminal only under `traps_are_terminal`.
    assert_eq!(lines["terminal_traps.policy_row_4"].chars().nth(6), Some('*'));
    assert_ne!(lines["state.policy_row_4"].chars().nth(6), Some('*'));
    assert_eq!(lines["state.policy_row_4"].chars().nth(4), Some('#'));
}
