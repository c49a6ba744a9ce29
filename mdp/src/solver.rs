//! Value iteration and greedy policy extraction.
//!
//! Sweeps are Jacobi-style: every backup in sweep `k` reads the snapshot
//! taken at the end of sweep `k - 1`, so the order states are visited in
//! never changes the result. The loop stops when the largest change in a
//! sweep drops below `epsilon`.

use std::collections::BTreeMap;

use serde_json::{json, Value};
use waypoint_kernel::grid::{Coord, Direction};
use waypoint_kernel::proof::canon::{canonical_json_bytes, CanonError};
use waypoint_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};

use crate::config::RewardConvention;
use crate::error::MdpError;
use crate::model::MdpModel;

/// Fixed-point scale for values in canonical JSON (micro-units).
pub const VALUE_SCALE: f64 = 1_000_000.0;

/// Converged values and the policy read off them.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    values: BTreeMap<Coord, f64>,
    policy: BTreeMap<Coord, Option<Direction>>,
    sweeps: u64,
    delta_history: Vec<f64>,
    reward_convention: RewardConvention,
}

impl Solution {
    /// `V(at)`, or `None` if `at` is not a state.
    #[must_use]
    pub fn value(&self, at: Coord) -> Option<f64> {
        self.values.get(&at).copied()
    }

    /// Policy action at `at`. `None` for terminal states and non-states.
    #[must_use]
    pub fn action(&self, at: Coord) -> Option<Direction> {
        self.policy.get(&at).copied().flatten()
    }

    /// Value table, total over the state space.
    #[must_use]
    pub fn values(&self) -> &BTreeMap<Coord, f64> {
        &self.values
    }

    /// Policy table, total over the state space.
    #[must_use]
    pub fn policy(&self) -> &BTreeMap<Coord, Option<Direction>> {
        &self.policy
    }

    /// Number of sweeps run, the converging sweep included.
    #[must_use]
    pub fn sweeps(&self) -> u64 {
        self.sweeps
    }

    /// Max absolute change per sweep, in sweep order.
    #[must_use]
    pub fn delta_history(&self) -> &[f64] {
        &self.delta_history
    }

    /// One string per row: `^ v < >` for actions, `*` for terminal states,
    /// `#` for obstacles.
    #[must_use]
    pub fn render_policy(&self, model: &MdpModel) -> Vec<String> {
        (0..model.height())
            .map(|row| {
                (0..model.width())
                    .map(|col| {
                        let at = Coord::new(row, col);
                        match self.policy.get(&at) {
                            None => '#',
                            Some(None) => '*',
                            Some(Some(d)) => d.arrow(),
                        }
                    })
                    .collect()
            })
            .collect()
    }

    /// JSON view. Values are fixed-point integers scaled by [`VALUE_SCALE`]
    /// so the view can be canonicalized.
    #[must_use]
    pub fn to_json_value(&self) -> Value {
        let states: Vec<Value> = self
            .values
            .iter()
            .map(|(&at, &v)| {
                json!({
                    "at": [at.row, at.col],
                    "value_micro": to_micro(v),
                    "action": self.action(at).map(Direction::name),
                })
            })
            .collect();
        json!({
            "reward_convention": self.reward_convention.name(),
            "sweeps": self.sweeps,
            "states": states,
        })
    }

    /// Domain-separated digest of the canonical JSON view.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if canonicalization fails.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        let bytes = canonical_json_bytes(&self.to_json_value())?;
        Ok(canonical_hash(HashDomain::Solution, &bytes))
    }
}

#[allow(clippy::cast_possible_truncation)]
fn to_micro(v: f64) -> i64 {
    (v * VALUE_SCALE).round() as i64
}

/// Expected backup value of taking `action` in `at` against `values`.
fn q_value(model: &MdpModel, values: &BTreeMap<Coord, f64>, at: Coord, action: Direction) -> f64 {
    let config = model.config();
    let gamma = config.discount;
    let value_of = |s: Coord| values.get(&s).copied().unwrap_or(0.0);
    let transitions = model.transitions(at, action);
    match config.reward_convention {
        RewardConvention::StateReward => {
            let expected: f64 = transitions
                .iter()
                .map(|t| t.probability * value_of(t.next))
                .sum();
            reward_f64(model, at) + gamma * expected
        }
        RewardConvention::TransitionReward => transitions
            .iter()
            .map(|t| t.probability * (reward_f64(model, t.next) + gamma * value_of(t.next)))
            .sum(),
    }
}

/// First action in `Direction::ALL` order attaining the max Q-value.
fn best_action(
    model: &MdpModel,
    values: &BTreeMap<Coord, f64>,
    at: Coord,
) -> Option<(Direction, f64)> {
    let mut best: Option<(Direction, f64)> = None;
    for &action in model.actions(at) {
        let q = q_value(model, values, at, action);
        let improves = match best {
            None => true,
            Some((_, b)) => q > b,
        };
        if improves {
            best = Some((action, q));
        }
    }
    best
}

#[allow(clippy::cast_precision_loss)]
fn reward_f64(model: &MdpModel, at: Coord) -> f64 {
    model.reward(at) as f64
}

/// Run value iteration to convergence and extract the greedy policy.
///
/// Discount, epsilon, reward convention, and the sweep cap come from the
/// model's own [`MdpModel::config`].
///
/// # Errors
///
/// Returns [`MdpError::NotConverged`] if `max_sweeps` sweeps pass without
/// `delta < epsilon`.
pub fn solve(model: &MdpModel) -> Result<Solution, MdpError> {
    let config = model.config();

    let mut values: BTreeMap<Coord, f64> = model
        .states()
        .iter()
        .map(|&s| {
            let initial = match (model.is_terminal(s), config.reward_convention) {
                (true, RewardConvention::StateReward) => reward_f64(model, s),
                _ => 0.0,
            };
            (s, initial)
        })
        .collect();

    let mut delta_history = Vec::new();
    loop {
        let sweep = delta_history.len() as u64;
        if sweep >= config.max_sweeps {
            let last_delta = delta_history.last().copied().unwrap_or(f64::INFINITY);
            tracing::warn!(sweeps = sweep, last_delta, "value iteration hit max_sweeps");
            return Err(MdpError::NotConverged {
                sweeps: sweep,
                last_delta,
            });
        }

        let snapshot = values.clone();
        let mut delta: f64 = 0.0;
        for &s in model.states() {
            let Some((_, backed_up)) = best_action(model, &snapshot, s) else {
                continue;
            };
            let old = snapshot.get(&s).copied().unwrap_or(0.0);
            delta = delta.max((backed_up - old).abs());
            values.insert(s, backed_up);
        }
        delta_history.push(delta);
        tracing::debug!(sweep = sweep + 1, delta, "value iteration sweep");

        if delta < config.epsilon {
            break;
        }
    }

    let policy: BTreeMap<Coord, Option<Direction>> = model
        .states()
        .iter()
        .map(|&s| (s, best_action(model, &values, s).map(|(a, _)| a)))
        .collect();

    tracing::info!(
        sweeps = delta_history.len(),
        final_delta = delta_history.last().copied().unwrap_or(0.0),
        "value iteration converged"
    );

    Ok(Solution {
        values,
        policy,
        sweeps: delta_history.len() as u64,
        delta_history,
        reward_convention: config.reward_convention,
    })
}
