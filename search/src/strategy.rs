//! The five frontier disciplines.

use std::fmt;
use std::str::FromStr;

use crate::error::SearchError;

/// Which ordering rule a run uses to pick the next state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Most recently inserted first.
    DepthFirst,
    /// First inserted first.
    BreadthFirst,
    /// Lowest accumulated cost first.
    UniformCost,
    /// Lowest Manhattan distance to the goal first.
    Greedy,
    /// Lowest `cost + Manhattan distance` first.
    AStar,
}

impl Strategy {
    pub const ALL: [Strategy; 5] = [
        Self::DepthFirst,
        Self::BreadthFirst,
        Self::UniformCost,
        Self::Greedy,
        Self::AStar,
    ];

    /// Stable short name, also accepted by `FromStr`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::DepthFirst => "dfs",
            Self::BreadthFirst => "bfs",
            Self::UniformCost => "ucs",
            Self::Greedy => "greedy",
            Self::AStar => "astar",
        }
    }

    /// Strategies that track `cost_so_far`, allow a cheaper re-insert,
    /// and close states on pop rather than on discovery.
    #[must_use]
    pub const fn is_cost_based(self) -> bool {
        matches!(self, Self::UniformCost | Self::AStar)
    }

    /// Strategies guaranteed to return a minimum-step path.
    #[must_use]
    pub const fn is_optimal(self) -> bool {
        matches!(self, Self::BreadthFirst | Self::UniformCost | Self::AStar)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dfs" | "depth-first" => Ok(Self::DepthFirst),
            "bfs" | "breadth-first" => Ok(Self::BreadthFirst),
            "ucs" | "uniform-cost" => Ok(Self::UniformCost),
            "greedy" => Ok(Self::Greedy),
            "astar" | "a*" => Ok(Self::AStar),
            _ => Err(SearchError::UnknownStrategy {
                name: s.to_string(),
            }),
        }
    }
}
