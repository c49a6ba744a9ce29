//! `SearchGrid`: the wall/road map consumed by the search engine.
//!
//! # Text format
//!
//! One string per row, cells separated by commas:
//!
//! ```text
//! @,0,1
//! 1,0,0
//! 0,0,$
//! ```
//!
//! `1` wall, `0` road, `@` start, `$` goal. Exactly one `@` and one `$`.

use crate::grid::coord::{Coord, Direction};
use crate::grid::error::{GridError, Marker};

/// Semantic category of a search-grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchCell {
    Wall,
    Road,
    Start,
    Goal,
}

impl SearchCell {
    fn from_label(label: &str) -> Option<Self> {
        match label {
            "1" => Some(Self::Wall),
            "0" => Some(Self::Road),
            "@" => Some(Self::Start),
            "$" => Some(Self::Goal),
            _ => None,
        }
    }

    /// The label this cell parses from.
    #[must_use]
    pub const fn label(self) -> char {
        match self {
            Self::Wall => '1',
            Self::Road => '0',
            Self::Start => '@',
            Self::Goal => '$',
        }
    }

    /// Roads, the start, and the goal can be entered. Walls cannot.
    #[must_use]
    pub const fn is_traversable(self) -> bool {
        !matches!(self, Self::Wall)
    }
}

/// An immutable, validated search map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchGrid {
    height: usize,
    width: usize,
    /// Row-major, `height * width` cells.
    cells: Vec<SearchCell>,
    start: Coord,
    goal: Coord,
}

impl SearchGrid {
    /// Parse the comma-separated row format.
    ///
    /// Whitespace around each label is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`GridError`] if the grid is empty or ragged, contains an
    /// unknown label, or does not have exactly one start and one goal.
    pub fn parse<S: AsRef<str>>(rows: &[S]) -> Result<Self, GridError> {
        let mut parsed = Vec::with_capacity(rows.len());
        for (r, line) in rows.iter().enumerate() {
            let mut row = Vec::new();
            for (c, label) in line.as_ref().split(',').enumerate() {
                let label = label.trim();
                let cell = SearchCell::from_label(label).ok_or_else(|| GridError::UnknownLabel {
                    at: Coord::new(r, c),
                    label: label.to_string(),
                })?;
                row.push(cell);
            }
            parsed.push(row);
        }
        Self::from_rows(parsed)
    }

    /// Build from already-classified rows.
    ///
    /// # Errors
    ///
    /// Same conditions as [`SearchGrid::parse`], minus label errors.
    pub fn from_rows(rows: Vec<Vec<SearchCell>>) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if height == 0 || width == 0 {
            return Err(GridError::Empty);
        }

        let mut cells = Vec::with_capacity(height * width);
        let mut start: Option<Coord> = None;
        let mut goal: Option<Coord> = None;

        for (r, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(GridError::RaggedRow {
                    row: r,
                    expected: width,
                    actual: row.len(),
                });
            }
            for (c, cell) in row.into_iter().enumerate() {
                let at = Coord::new(r, c);
                match cell {
                    SearchCell::Start => record_marker(&mut start, at, Marker::Start)?,
                    SearchCell::Goal => record_marker(&mut goal, at, Marker::Goal)?,
                    SearchCell::Wall | SearchCell::Road => {}
                }
                cells.push(cell);
            }
        }

        Ok(Self {
            height,
            width,
            cells,
            start: start.ok_or(GridError::MissingMarker {
                marker: Marker::Start,
            })?,
            goal: goal.ok_or(GridError::MissingMarker {
                marker: Marker::Goal,
            })?,
        })
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn start(&self) -> Coord {
        self.start
    }

    #[must_use]
    pub fn goal(&self) -> Coord {
        self.goal
    }

    /// Cell at `at`, or `None` when out of bounds.
    #[must_use]
    pub fn cell(&self, at: Coord) -> Option<SearchCell> {
        if at.row < self.height && at.col < self.width {
            Some(self.cells[at.row * self.width + at.col])
        } else {
            None
        }
    }

    /// In bounds and not a wall.
    #[must_use]
    pub fn is_traversable(&self, at: Coord) -> bool {
        self.cell(at).is_some_and(SearchCell::is_traversable)
    }

    /// Traversable 4-neighbours of `at`, in [`Direction::ALL`] order.
    #[must_use]
    pub fn neighbors(&self, at: Coord) -> Vec<Coord> {
        Direction::ALL
            .iter()
            .filter_map(|&d| at.step(d, self.height, self.width))
            .filter(|&n| self.is_traversable(n))
            .collect()
    }

    /// Inverse of [`SearchGrid::parse`]: one comma-separated line per row.
    #[must_use]
    pub fn render(&self) -> Vec<String> {
        self.cells
            .chunks(self.width)
            .map(|row| {
                row.iter()
                    .map(|cell| cell.label().to_string())
                    .collect::<Vec<_>>()
                    .join(",")
            })
            .collect()
    }
}

fn record_marker(slot: &mut Option<Coord>, at: Coord, marker: Marker) -> Result<(), GridError> {
    match *slot {
        Some(first) => Err(GridError::DuplicateMarker {
            marker,
            first,
            second: at,
        }),
        None => {
            *slot = Some(at);
            Ok(())
        }
    }
}
