//! `SearchRun`: one resumable search over a grid.
//!
//! A run owns its frontier, visited bookkeeping, and parent map. Each call
//! to [`SearchRun::advance`] pops exactly one state and returns it as
//! [`SearchStep::Exploring`]; once the goal has been explored the next call
//! returns [`SearchStep::Found`], or [`SearchStep::NotFound`] when the
//! frontier runs dry. After the terminal step every call returns `None`.
//!
//! Dropping a run mid-way is the cancellation mechanism; nothing needs
//! cleaning up.

use std::collections::{BTreeMap, BTreeSet};

use waypoint_kernel::grid::{Coord, SearchGrid};
use waypoint_kernel::proof::hash::{canonical_hash, HashDomain};

use crate::error::{Endpoint, SearchError};
use crate::frontier::{Frontier, FrontierEntry, Priority};
use crate::path::{reconstruct_path, Path};
use crate::strategy::Strategy;
use crate::trace::ExplorationTrace;

/// The externally observable output of one `advance()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchStep {
    /// A state was removed from the frontier.
    Exploring(Coord),
    /// The goal was explored; this is the reconstructed path.
    Found(Path),
    /// The frontier emptied without reaching the goal.
    NotFound,
}

impl SearchStep {
    /// True for `Found` and `NotFound`.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Exploring(_))
    }
}

/// Counters for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// States popped and reported as `Exploring`.
    pub expansions: u64,
    /// Distinct states that received a cost (the start included).
    pub discovered: u64,
    /// Heap entries discarded because their state was already closed.
    pub stale_skipped: u64,
    /// Largest frontier size observed.
    pub frontier_high_water: u64,
}

/// A single search run: the state machine behind the step protocol.
#[derive(Debug)]
pub struct SearchRun<'g> {
    grid: &'g SearchGrid,
    strategy: Strategy,
    start: Coord,
    goal: Coord,
    frontier: Frontier,
    /// Best known cost per discovered state.
    cost_so_far: BTreeMap<Coord, i64>,
    /// States whose expansion is final (cost-based strategies only).
    closed: BTreeSet<Coord>,
    parents: BTreeMap<Coord, Coord>,
    /// Terminal step queued behind the goal's `Exploring` event.
    pending: Option<SearchStep>,
    done: bool,
    stats: SearchStats,
}

impl<'g> SearchRun<'g> {
    /// Run from the grid's own start to its own goal.
    #[must_use]
    pub fn new(grid: &'g SearchGrid, strategy: Strategy) -> Self {
        Self::unchecked(grid, strategy, grid.start(), grid.goal())
    }

    /// Run between explicit endpoints.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::EndpointOutOfBounds`] or
    /// [`SearchError::EndpointBlocked`] if either endpoint cannot be stood on.
    pub fn with_endpoints(
        grid: &'g SearchGrid,
        strategy: Strategy,
        start: Coord,
        goal: Coord,
    ) -> Result<Self, SearchError> {
        for (endpoint, at) in [(Endpoint::Start, start), (Endpoint::Goal, goal)] {
            if grid.cell(at).is_none() {
                return Err(SearchError::EndpointOutOfBounds { endpoint, at });
            }
            if !grid.is_traversable(at) {
                return Err(SearchError::EndpointBlocked { endpoint, at });
            }
        }
        Ok(Self::unchecked(grid, strategy, start, goal))
    }

    fn unchecked(grid: &'g SearchGrid, strategy: Strategy, start: Coord, goal: Coord) -> Self {
        let mut run = Self {
            grid,
            strategy,
            start,
            goal,
            frontier: Frontier::for_strategy(strategy),
            cost_so_far: BTreeMap::new(),
            closed: BTreeSet::new(),
            parents: BTreeMap::new(),
            pending: None,
            done: false,
            stats: SearchStats::default(),
        };
        run.cost_so_far.insert(start, 0);
        run.stats.discovered = 1;
        let priority = run.priority(start, 0);
        run.frontier.push(
            FrontierEntry {
                coord: start,
                cost: 0,
            },
            priority,
        );
        run.sync_high_water();
        run
    }

    #[must_use]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    #[must_use]
    pub fn start(&self) -> Coord {
        self.start
    }

    #[must_use]
    pub fn goal(&self) -> Coord {
        self.goal
    }

    /// True once the terminal step has been handed out.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.done
    }

    #[must_use]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Best known step count from the start to `at`, if discovered.
    ///
    /// For DFS, BFS, and greedy this is fixed at discovery; for uniform-cost
    /// and A* it can drop until `at` is explored.
    #[must_use]
    pub fn cost_so_far(&self, at: Coord) -> Option<i64> {
        self.cost_so_far.get(&at).copied()
    }

    /// Manhattan distance from `at` to this run's goal.
    #[must_use]
    pub fn heuristic(&self, at: Coord) -> i64 {
        to_cost(at.manhattan(self.goal))
    }

    /// Pop one state, or hand out the terminal result.
    pub fn advance(&mut self) -> Option<SearchStep> {
        if let Some(step) = self.pending.take() {
            self.done = true;
            return Some(step);
        }
        if self.done {
            return None;
        }

        loop {
            let Some(entry) = self.frontier.pop() else {
                self.done = true;
                tracing::debug!(
                    strategy = %self.strategy,
                    expansions = self.stats.expansions,
                    "frontier exhausted; goal unreachable"
                );
                return Some(SearchStep::NotFound);
            };

            if self.strategy.is_cost_based() && !self.closed.insert(entry.coord) {
                self.stats.stale_skipped += 1;
                continue;
            }

            self.stats.expansions += 1;
            tracing::trace!(strategy = %self.strategy, at = %entry.coord, cost = entry.cost, "exploring");

            if entry.coord == self.goal {
                let path = reconstruct_path(&self.parents, self.start, entry.coord);
                if path.is_empty() {
                    // Broken parent chain: never report an empty `Found`.
                    tracing::warn!(strategy = %self.strategy, "goal explored without a path");
                    self.pending = Some(SearchStep::NotFound);
                } else {
                    tracing::debug!(
                        strategy = %self.strategy,
                        expansions = self.stats.expansions,
                        path_cost = path.cost(),
                        "goal reached"
                    );
                    self.pending = Some(SearchStep::Found(path));
                }
            } else {
                self.expand(entry);
            }
            return Some(SearchStep::Exploring(entry.coord));
        }
    }

    fn expand(&mut self, entry: FrontierEntry) {
        let child_cost = entry.cost + 1;
        for next in self.grid.neighbors(entry.coord) {
            let improves = if self.strategy.is_cost_based() {
                !self.closed.contains(&next)
                    && match self.cost_so_far.get(&next) {
                        Some(&known) => child_cost < known,
                        None => true,
                    }
            } else {
                !self.cost_so_far.contains_key(&next)
            };
            if !improves {
                continue;
            }

            if self.cost_so_far.insert(next, child_cost).is_none() {
                self.stats.discovered += 1;
            }
            self.parents.insert(next, entry.coord);
            let priority = self.priority(next, child_cost);
            self.frontier.push(
                FrontierEntry {
                    coord: next,
                    cost: child_cost,
                },
                priority,
            );
        }
        self.sync_high_water();
    }

    fn priority(&self, at: Coord, cost: i64) -> Priority {
        match self.strategy {
            Strategy::DepthFirst | Strategy::BreadthFirst => Priority::default(),
            Strategy::UniformCost => Priority {
                primary: cost,
                secondary: 0,
            },
            Strategy::Greedy => Priority {
                primary: self.heuristic(at),
                secondary: 0,
            },
            Strategy::AStar => Priority {
                primary: cost.saturating_add(self.heuristic(at)),
                secondary: cost,
            },
        }
    }

    fn sync_high_water(&mut self) {
        self.stats.frontier_high_water = self.frontier.high_water() as u64;
    }

    /// Drive the run to its terminal step and collect the trace.
    #[must_use]
    pub fn run_to_completion(mut self) -> ExplorationTrace {
        let mut explored = Vec::new();
        let mut path = Path::empty();
        while let Some(step) = self.advance() {
            match step {
                SearchStep::Exploring(at) => explored.push(at),
                SearchStep::Found(found) => path = found,
                SearchStep::NotFound => {}
            }
        }
        let grid_digest = canonical_hash(HashDomain::Grid, self.grid.render().join("\n").as_bytes());
        ExplorationTrace {
            strategy: self.strategy,
            grid_digest,
            start: self.start,
            goal: self.goal,
            explored,
            path,
            stats: self.stats,
        }
    }
}

impl Iterator for SearchRun<'_> {
    type Item = SearchStep;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance()
    }
}

fn to_cost(steps: usize) -> i64 {
    i64::try_from(steps).unwrap_or(i64::MAX)
}

/// Run `strategy` on `grid` from its start to its goal.
#[must_use]
pub fn search(grid: &SearchGrid, strategy: Strategy) -> ExplorationTrace {
    SearchRun::new(grid, strategy).run_to_completion()
}
