//! Waypoint MDP: value iteration over a reward-labelled grid.
//!
//! ```text
//! RewardGrid ──MdpModel::new──▶ MdpModel ──solve──▶ Solution ──PolicySimulator──▶ Trajectory
//! ```
//!
//! - [`MdpModel`](model::MdpModel) -- states, rewards, terminal set, slip transitions
//! - [`solve`](solver::solve) -- Jacobi value iteration plus greedy policy extraction
//! - [`PolicySimulator`](simulate::PolicySimulator) -- one sampled episode,
//!   randomness supplied by the caller
//! - [`MdpConfig`](config::MdpConfig) -- every numeric knob, with defaults

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod error;
pub mod model;
pub mod simulate;
pub mod solver;
