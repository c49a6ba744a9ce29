//! Grid module: coordinates, directions, and the two map flavours.
//!
//! Both grids are validated once at construction and never mutated
//! afterwards. Consumers only see semantic cell categories.

pub mod coord;
pub mod error;
pub mod reward_grid;
pub mod search_grid;

pub use coord::{Coord, Direction};
pub use error::{GridError, Marker};
pub use reward_grid::{RewardCell, RewardGrid};
pub use search_grid::{SearchCell, SearchGrid};
