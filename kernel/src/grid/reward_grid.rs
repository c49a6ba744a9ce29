//! `RewardGrid`: the reward-labelled map an MDP is built from.
//!
//! Labels: `"1"` obstacle, `"0"` road, `"A"` agent start, a negative
//! integer such as `"-10"` is a trap carrying that reward, and a
//! `+`-signed positive integer such as `"+10"` is the exit.

use crate::grid::coord::Coord;
use crate::grid::error::{GridError, Marker};

/// Semantic category of a reward-grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RewardCell {
    Road,
    Obstacle,
    AgentStart,
    /// Penalty cell; the payload is the (negative) reward.
    Trap(i64),
    /// Goal cell; the payload is the (positive) reward.
    Exit(i64),
}

impl RewardCell {
    fn from_label(label: &str) -> Option<Self> {
        match label {
            "1" => Some(Self::Obstacle),
            "0" => Some(Self::Road),
            "A" => Some(Self::AgentStart),
            _ => {
                if let Some(digits) = label.strip_prefix('+') {
                    let value: i64 = digits.parse().ok()?;
                    (value > 0).then_some(Self::Exit(value))
                } else if label.starts_with('-') {
                    let value: i64 = label.parse().ok()?;
                    (value < 0).then_some(Self::Trap(value))
                } else {
                    None
                }
            }
        }
    }

    /// The label this cell parses from.
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::Road => "0".into(),
            Self::Obstacle => "1".into(),
            Self::AgentStart => "A".into(),
            Self::Trap(v) => v.to_string(),
            Self::Exit(v) => format!("+{v}"),
        }
    }
}

/// An immutable, validated reward map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewardGrid {
    height: usize,
    width: usize,
    cells: Vec<RewardCell>,
    agent_start: Coord,
    exit: Coord,
}

impl RewardGrid {
    /// Parse a 2-D array of labels.
    ///
    /// # Errors
    ///
    /// Returns [`GridError`] if the grid is empty or ragged, contains an
    /// unknown label, or does not have exactly one agent start and one exit.
    pub fn parse<R, S>(rows: &[R]) -> Result<Self, GridError>
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        if height == 0 || width == 0 {
            return Err(GridError::Empty);
        }

        let mut cells = Vec::with_capacity(height * width);
        let mut agent_start: Option<Coord> = None;
        let mut exit: Option<Coord> = None;

        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(GridError::RaggedRow {
                    row: r,
                    expected: width,
                    actual: row.len(),
                });
            }
            for (c, label) in row.iter().enumerate() {
                let at = Coord::new(r, c);
                let label = label.as_ref().trim();
                let cell = RewardCell::from_label(label).ok_or_else(|| GridError::UnknownLabel {
                    at,
                    label: label.to_string(),
                })?;
                match cell {
                    RewardCell::AgentStart => {
                        if let Some(first) = agent_start {
                            return Err(GridError::DuplicateMarker {
                                marker: Marker::AgentStart,
                                first,
                                second: at,
                            });
                        }
                        agent_start = Some(at);
                    }
                    RewardCell::Exit(_) => {
                        if let Some(first) = exit {
                            return Err(GridError::DuplicateMarker {
                                marker: Marker::Exit,
                                first,
                                second: at,
                            });
                        }
                        exit = Some(at);
                    }
                    RewardCell::Road | RewardCell::Obstacle | RewardCell::Trap(_) => {}
                }
                cells.push(cell);
            }
        }

        Ok(Self {
            height,
            width,
            cells,
            agent_start: agent_start.ok_or(GridError::MissingMarker {
                marker: Marker::AgentStart,
            })?,
            exit: exit.ok_or(GridError::MissingMarker {
                marker: Marker::Exit,
            })?,
        })
    }

    /// The 8x8 reference map: two traps, four obstacles, exit in the
    /// bottom-right corner.
    #[must_use]
    #[allow(clippy::missing_panics_doc)]
    pub fn classic() -> Self {
        const MAP: [[&str; 8]; 8] = [
            ["A", "0", "0", "0", "0", "0", "0", "0"],
            ["0", "0", "0", "0", "0", "0", "0", "0"],
            ["0", "0", "1", "0", "0", "0", "0", "0"],
            ["0", "0", "0", "0", "1", "0", "0", "0"],
            ["0", "0", "0", "0", "1", "0", "-10", "0"],
            ["0", "0", "1", "0", "0", "0", "0", "0"],
            ["0", "-10", "0", "0", "0", "0", "0", "0"],
            ["0", "0", "0", "0", "0", "0", "0", "+10"],
        ];
        match Self::parse(&MAP) {
            Ok(grid) => grid,
            Err(e) => unreachable!("classic map literal is invalid: {e}"),
        }
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
    pub fn agent_start(&self) -> Coord {
        self.agent_start
    }

    #[must_use]
    pub fn exit(&self) -> Coord {
        self.exit
    }

    /// Cell at `at`, or `None` when out of bounds.
    #[must_use]
    pub fn cell(&self, at: Coord) -> Option<RewardCell> {
        if at.row < self.height && at.col < self.width {
            Some(self.cells[at.row * self.width + at.col])
        } else {
            None
        }
    }

    /// Every coordinate with its cell, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, RewardCell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &cell)| (Coord::new(i / self.width, i % self.width), cell))
    }
}
