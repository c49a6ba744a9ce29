//! Typed grid construction errors.
//!
//! A `GridError` means no grid was produced. Nothing downstream ever sees a
//! partially validated map.

use crate::grid::coord::Coord;

/// Which marker a cardinality error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// `@` in a search grid.
    Start,
    /// `$` in a search grid.
    Goal,
    /// `A` in a reward grid.
    AgentStart,
    /// The `+N` cell in a reward grid.
    Exit,
}

impl Marker {
    const fn name(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Goal => "goal",
            Self::AgentStart => "agent start",
            Self::Exit => "exit",
        }
    }
}

/// Failure to build a grid from its textual form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// No rows, or a first row with no cells.
    Empty,
    /// A row whose length differs from the first row.
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },
    /// A cell label outside the grid's vocabulary.
    UnknownLabel { at: Coord, label: String },
    /// A required marker does not appear.
    MissingMarker { marker: Marker },
    /// A marker that must be unique appears more than once.
    DuplicateMarker {
        marker: Marker,
        first: Coord,
        second: Coord,
    },
}

impl std::fmt::Display for GridError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "grid has no cells"),
            Self::RaggedRow {
                row,
                expected,
                actual,
            } => write!(f, "row {row} has {actual} cells, expected {expected}"),
            Self::UnknownLabel { at, label } => {
                write!(f, "unknown cell label {label:?} at {at}")
            }
            Self::MissingMarker { marker } => write!(f, "grid has no {}", marker.name()),
            Self::DuplicateMarker {
                marker,
                first,
                second,
            } => write!(
                f,
                "grid has more than one {}: {first} and {second}",
                marker.name()
            ),
        }
    }
}

impl std::error::Error for GridError {}
