//! MDP configuration: the single value object holding every numeric knob.

use crate::error::MdpError;

/// How rewards enter the Bellman backup.
///
/// Both forms share the transition model and the policy tie-break; they
/// differ in where the reward is collected and what a terminal state is
/// worth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewardConvention {
    /// `V(s) = R(s) + γ·max_a Σ P(s'|s,a)·V(s')`.
    /// Terminal states are worth their own reward.
    StateReward,
    /// `V(s) = max_a Σ P(s'|s,a)·(R(s') + γ·V(s'))`.
    /// The reward is collected on entering `s'`; terminal states are worth 0.
    TransitionReward,
}

impl RewardConvention {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::StateReward => "state_reward",
            Self::TransitionReward => "transition_reward",
        }
    }
}

/// Parameters for model construction, solving, and simulation.
#[derive(Debug, Clone, PartialEq)]
pub struct MdpConfig {
    /// γ, in `(0, 1]`.
    pub discount: f64,
    /// Stop once a sweep changes no value by `epsilon` or more.
    pub epsilon: f64,
    /// Reward of road and agent-start cells.
    pub move_cost: i64,
    /// Probability mass moved off the intended action, split evenly over
    /// the two perpendicular actions. In `[0, 1)`.
    pub slip_probability: f64,
    /// Whether trap cells end an episode like the exit does.
    pub traps_are_terminal: bool,
    pub reward_convention: RewardConvention,
    /// Hard cap on value-iteration sweeps.
    pub max_sweeps: u64,
    /// Hard cap on simulated moves per episode.
    pub max_simulation_steps: usize,
}

impl Default for MdpConfig {
    fn default() -> Self {
        Self {
            discount: 0.5,
            epsilon: 0.01,
            move_cost: -1,
            slip_probability: 0.2,
            traps_are_terminal: false,
            reward_convention: RewardConvention::StateReward,
            max_sweeps: 10_000,
            max_simulation_steps: 100,
        }
    }
}

impl MdpConfig {
    /// Probability of executing the intended action.
    #[must_use]
    pub fn intended_probability(&self) -> f64 {
        1.0 - self.slip_probability
    }

    /// Reject out-of-range values before any work starts.
    ///
    /// # Errors
    ///
    /// Returns [`MdpError::InvalidConfig`] naming the first bad field.
    pub fn validate(&self) -> Result<(), MdpError> {
        if !(self.discount > 0.0 && self.discount <= 1.0) {
            return Err(invalid("discount", format!("{} not in (0, 1]", self.discount)));
        }
        if !(self.epsilon > 0.0 && self.epsilon.is_finite()) {
            return Err(invalid("epsilon", format!("{} must be positive", self.epsilon)));
        }
        if !(self.slip_probability >= 0.0 && self.slip_probability < 1.0) {
            return Err(invalid(
                "slip_probability",
                format!("{} not in [0, 1)", self.slip_probability),
            ));
        }
        if self.max_sweeps == 0 {
            return Err(invalid("max_sweeps", "must be at least 1".into()));
        }
        if self.max_simulation_steps == 0 {
            return Err(invalid("max_simulation_steps", "must be at least 1".into()));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, detail: String) -> MdpError {
    MdpError::InvalidConfig { field, detail }
}
