//! Typed search errors.
//!
//! `SearchError` represents pre-flight failures only. An unreachable goal
//! is not an error: the run ends with [`crate::search::SearchStep::NotFound`].

use waypoint_kernel::grid::Coord;

/// Which end of the search an endpoint error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Goal,
}

/// Typed failure for pre-flight search validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// A strategy name did not match any known strategy.
    UnknownStrategy { name: String },
    /// An endpoint lies outside the grid.
    EndpointOutOfBounds { endpoint: Endpoint, at: Coord },
    /// An endpoint lies on a wall.
    EndpointBlocked { endpoint: Endpoint, at: Coord },
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownStrategy { name } => write!(f, "unknown search strategy {name:?}"),
            Self::EndpointOutOfBounds { endpoint, at } => {
                write!(f, "{endpoint:?} {at} is outside the grid")
            }
            Self::EndpointBlocked { endpoint, at } => write!(f, "{endpoint:?} {at} is a wall"),
        }
    }
}

impl std::error::Error for SearchError {}
