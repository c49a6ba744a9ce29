//! Waypoint Kernel: the immutable grid model shared by search and MDP solving.
//!
//! # API Surface
//!
//! - [`grid::SearchGrid`] -- wall/road map with exactly one start and one goal
//! - [`grid::RewardGrid`] -- reward-labelled map with one agent start and one exit
//! - [`proof::canon::canonical_json_bytes`] + [`proof::hash::canonical_hash`] --
//!   the single path from a result to a comparable digest
//!
//! # Module Dependency Direction
//!
//! `grid` and `proof` depend on nothing internal. Neither module knows about search
//! strategies or value iteration; those live in `waypoint_search` and
//! `waypoint_mdp`.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod grid;
pub mod proof;
