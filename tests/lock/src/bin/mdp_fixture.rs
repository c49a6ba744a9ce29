//! Binary that solves the classic 8×8 reward grid, simulates a seeded
//! episode, and prints deterministic output lines for cross-process
//! verification.
//!
//! Usage: `mdp_fixture`
//!
//! Output: key=value lines; logs go to stderr and are filtered by `RUST_LOG`.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;
use waypoint_kernel::grid::RewardGrid;
use waypoint_mdp::config::{MdpConfig, RewardConvention};
use waypoint_mdp::model::MdpModel;
use waypoint_mdp::simulate::simulate;
use waypoint_mdp::solver::solve;

const SEED: u64 = 42;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let grid = RewardGrid::classic();
    for (label, config) in [
        ("state", MdpConfig::default()),
        (
            "transition",
            MdpConfig {
                reward_convention: RewardConvention::TransitionReward,
                ..MdpConfig::default()
            },
        ),
        (
            "terminal_traps",
            MdpConfig {
                traps_are_terminal: true,
                ..MdpConfig::default()
            },
        ),
    ] {
        let model = MdpModel::new(&grid, &config).expect("classic model builds");
        let solution = solve(&model).expect("classic model converges");
        let trajectory = simulate(&model, &solution, &mut StdRng::seed_from_u64(SEED));

        println!(
            "{label}.solution_digest={}",
            solution.digest().expect("solution canonicalizes")
        );
        println!("{label}.sweeps={}", solution.sweeps());
        println!(
            "{label}.trajectory_digest={}",
            trajectory.digest().expect("trajectory canonicalizes")
        );
        println!("{label}.trajectory_steps={}", trajectory.steps());
        println!("{label}.outcome={}", trajectory.outcome.name());
        for (row, line) in solution.render_policy(&model).iter().enumerate() {
            println!("{label}.policy_row_{row}={line}");
        }
    }
}
