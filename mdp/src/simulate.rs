//! Sampled episodes under a solved policy.
//!
//! All randomness comes from the caller's [`rand::Rng`], so a seeded
//! generator reproduces a trajectory exactly.

use rand::Rng;
use serde_json::{json, Value};
use waypoint_kernel::grid::Coord;
use waypoint_kernel::proof::canon::{canonical_json_bytes, CanonError};
use waypoint_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};

use crate::model::{MdpModel, Transition};
use crate::solver::Solution;

/// Why an episode stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationOutcome {
    ReachedExit,
    /// Only reachable when traps are terminal.
    ReachedTrap,
    /// The step bound ran out first.
    StepLimit,
    /// The current state has no policy action (it is not a solved state).
    PolicyUndefined,
}

impl SimulationOutcome {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ReachedExit => "reached_exit",
            Self::ReachedTrap => "reached_trap",
            Self::StepLimit => "step_limit",
            Self::PolicyUndefined => "policy_undefined",
        }
    }
}

/// One episode: visited states (start first) and the summed reward of every
/// state entered after the start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trajectory {
    pub states: Vec<Coord>,
    pub total_reward: i64,
    pub outcome: SimulationOutcome,
}

impl Trajectory {
    /// Moves taken.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.states.len().saturating_sub(1)
    }

    #[must_use]
    pub fn to_json_value(&self) -> Value {
        json!({
            "states": self.states.iter().map(|s| json!([s.row, s.col])).collect::<Vec<_>>(),
            "total_reward": self.total_reward,
            "outcome": self.outcome.name(),
        })
    }

    /// Domain-separated digest of the canonical JSON view.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if canonicalization fails.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        let bytes = canonical_json_bytes(&self.to_json_value())?;
        Ok(canonical_hash(HashDomain::Trajectory, &bytes))
    }
}

/// Runs episodes of a solved policy from the model's agent start.
#[derive(Debug, Clone, Copy)]
pub struct PolicySimulator<'a> {
    model: &'a MdpModel,
    solution: &'a Solution,
    max_steps: usize,
}

impl<'a> PolicySimulator<'a> {
    /// Bounded by the model's `max_simulation_steps`.
    #[must_use]
    pub fn new(model: &'a MdpModel, solution: &'a Solution) -> Self {
        Self {
            model,
            solution,
            max_steps: model.config().max_simulation_steps,
        }
    }

    /// Override the configured step bound for this simulator.
    #[must_use]
    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    /// Sample one episode.
    pub fn run<R: Rng + ?Sized>(&self, rng: &mut R) -> Trajectory {
        let mut current = self.model.agent_start();
        let mut states = vec![current];
        let mut total_reward: i64 = 0;

        let outcome = loop {
            if current == self.model.exit() {
                break SimulationOutcome::ReachedExit;
            }
            if self.model.is_terminal(current) {
                break SimulationOutcome::ReachedTrap;
            }
            if states.len() > self.max_steps {
                break SimulationOutcome::StepLimit;
            }
            let Some(action) = self.solution.action(current) else {
                break SimulationOutcome::PolicyUndefined;
            };
            let transitions = self.model.transitions(current, action);
            let Some(next) = sample(&transitions, rng.gen::<f64>()) else {
                break SimulationOutcome::PolicyUndefined;
            };
            total_reward = total_reward.saturating_add(self.model.reward(next));
            states.push(next);
            current = next;
        };

        tracing::debug!(
            steps = states.len() - 1,
            total_reward,
            outcome = outcome.name(),
            "simulated episode"
        );

        Trajectory {
            states,
            total_reward,
            outcome,
        }
    }
}

/// Invert the cumulative distribution at `u ∈ [0, 1)`. Rounding slack at
/// the top end lands on the last outcome.
fn sample(transitions: &[Transition], u: f64) -> Option<Coord> {
    let mut cumulative = 0.0;
    for t in transitions {
        cumulative += t.probability;
        if u < cumulative {
            return Some(t.next);
        }
    }
    transitions.last().map(|t| t.next)
}

/// Sample one episode of at most `max_simulation_steps` moves.
pub fn simulate<R: Rng + ?Sized>(
    model: &MdpModel,
    solution: &Solution,
    rng: &mut R,
) -> Trajectory {
    PolicySimulator::new(model, solution).run(rng)
}
