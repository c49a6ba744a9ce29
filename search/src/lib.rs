//! Waypoint Search: five uninformed and informed strategies over a
//! [`SearchGrid`](waypoint_kernel::grid::SearchGrid), driven one step at a time.
//!
//! This crate depends only on `waypoint_kernel`.
//!
//! # Crate dependency graph
//!
//! ```text
//! waypoint_kernel  ←  waypoint_search
//! (grid, digests)     (frontier, runs, paths)
//! ```
//!
//! # Key types
//!
//! - [`Strategy`](strategy::Strategy) -- DFS, BFS, uniform-cost, greedy, A*
//! - [`SearchRun`](search::SearchRun) -- per-run state machine; `advance()` yields
//!   one [`SearchStep`](search::SearchStep) per call
//! - [`Path`](path::Path) -- start→goal coordinates, empty when unreachable
//! - [`ExplorationTrace`](trace::ExplorationTrace) -- explored order + path,
//!   with a canonical digest for determinism checks

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod frontier;
pub mod path;
pub mod search;
pub mod strategy;
pub mod trace;
