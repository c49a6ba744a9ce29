//! `MdpModel`: states, rewards, terminal set, and the slip transition model.

use std::collections::{BTreeMap, BTreeSet};

use waypoint_kernel::grid::{Coord, Direction, RewardCell, RewardGrid};

use crate::config::MdpConfig;
use crate::error::MdpError;

/// One possible outcome of taking an action.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub next: Coord,
    pub probability: f64,
}

/// A grid MDP. Immutable once built.
#[derive(Debug, Clone)]
pub struct MdpModel {
    height: usize,
    width: usize,
    /// Every non-obstacle cell, row-major.
    states: Vec<Coord>,
    rewards: BTreeMap<Coord, i64>,
    obstacles: BTreeSet<Coord>,
    traps: BTreeSet<Coord>,
    terminals: BTreeSet<Coord>,
    exit: Coord,
    agent_start: Coord,
    config: MdpConfig,
}

impl MdpModel {
    /// Build the model for `grid` under `config`. The model keeps `config`;
    /// solving and simulation read their knobs from it.
    ///
    /// Road and agent-start cells get `config.move_cost`; traps and the exit
    /// keep the reward in their label. The exit is always terminal; traps
    /// are terminal iff `config.traps_are_terminal`.
    ///
    /// # Errors
    ///
    /// Returns [`MdpError::InvalidConfig`] if `config` fails validation.
    pub fn new(grid: &RewardGrid, config: &MdpConfig) -> Result<Self, MdpError> {
        config.validate()?;

        let mut states = Vec::new();
        let mut rewards = BTreeMap::new();
        let mut obstacles = BTreeSet::new();
        let mut traps = BTreeSet::new();
        let mut terminals = BTreeSet::new();

        for (at, cell) in grid.iter() {
            let reward = match cell {
                RewardCell::Obstacle => {
                    obstacles.insert(at);
                    continue;
                }
                RewardCell::Road | RewardCell::AgentStart => config.move_cost,
                RewardCell::Trap(reward) => {
                    traps.insert(at);
                    if config.traps_are_terminal {
                        terminals.insert(at);
                    }
                    reward
                }
                RewardCell::Exit(reward) => {
                    terminals.insert(at);
                    reward
                }
            };
            states.push(at);
            rewards.insert(at, reward);
        }

        tracing::debug!(
            states = states.len(),
            obstacles = obstacles.len(),
            traps = traps.len(),
            traps_are_terminal = config.traps_are_terminal,
            "built MDP model"
        );

        Ok(Self {
            height: grid.height(),
            width: grid.width(),
            states,
            rewards,
            obstacles,
            traps,
            terminals,
            exit: grid.exit(),
            agent_start: grid.agent_start(),
            config: config.clone(),
        })
    }

    /// Parse labels and build in one go.
    ///
    /// # Errors
    ///
    /// Returns [`MdpError::Grid`] for a malformed map, otherwise as
    /// [`MdpModel::new`].
    pub fn parse<R, S>(labels: &[R], config: &MdpConfig) -> Result<Self, MdpError>
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let grid = RewardGrid::parse(labels)?;
        Self::new(&grid, config)
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// All states, row-major.
    #[must_use]
    pub fn states(&self) -> &[Coord] {
        &self.states
    }

    #[must_use]
    pub fn exit(&self) -> Coord {
        self.exit
    }

    #[must_use]
    pub fn agent_start(&self) -> Coord {
        self.agent_start
    }

    /// The configuration this model was built with.
    #[must_use]
    pub fn config(&self) -> &MdpConfig {
        &self.config
    }

    #[must_use]
    pub fn traps(&self) -> &BTreeSet<Coord> {
        &self.traps
    }

    #[must_use]
    pub fn obstacles(&self) -> &BTreeSet<Coord> {
        &self.obstacles
    }

    /// In bounds and not an obstacle.
    #[must_use]
    pub fn is_valid_state(&self, at: Coord) -> bool {
        at.row < self.height && at.col < self.width && !self.obstacles.contains(&at)
    }

    #[must_use]
    pub fn is_terminal(&self, at: Coord) -> bool {
        self.terminals.contains(&at)
    }

    /// The four cardinal actions for a non-terminal state, none otherwise.
    #[must_use]
    pub fn actions(&self, at: Coord) -> &'static [Direction] {
        if self.is_valid_state(at) && !self.is_terminal(at) {
            &Direction::ALL
        } else {
            &[]
        }
    }

    /// Fixed reward for `at`. Cells that are not states fall back to the
    /// move cost; they are never entered.
    #[must_use]
    pub fn reward(&self, at: Coord) -> i64 {
        self.rewards.get(&at).copied().unwrap_or(self.config.move_cost)
    }

    /// Outcome distribution for taking `action` in `at`.
    ///
    /// The intended move gets `1 - slip`, each perpendicular move
    /// `slip / 2`. A move that would leave the grid or hit an obstacle
    /// stays in `at`. Outcomes landing on the same cell are merged, in
    /// first-seen order; zero-probability outcomes are dropped.
    #[must_use]
    pub fn transitions(&self, at: Coord, action: Direction) -> Vec<Transition> {
        let slip = self.config.slip_probability / 2.0;
        let [left, right] = action.perpendicular();
        let outcomes = [
            (action, self.config.intended_probability()),
            (left, slip),
            (right, slip),
        ];

        let mut merged: Vec<Transition> = Vec::with_capacity(3);
        for (direction, probability) in outcomes {
            if probability <= 0.0 {
                continue;
            }
            let next = at
                .step(direction, self.height, self.width)
                .filter(|&n| self.is_valid_state(n))
                .unwrap_or(at);
            if let Some(existing) = merged.iter_mut().find(|t| t.next == next) {
                existing.probability += probability;
            } else {
                merged.push(Transition { next, probability });
            }
        }
        merged
    }
}
