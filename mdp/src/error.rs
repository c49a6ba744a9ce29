//! Typed MDP errors.
//!
//! Construction and configuration problems surface here. Running out of
//! simulation steps is not an error; see
//! [`crate::simulate::SimulationOutcome::StepLimit`].

use waypoint_kernel::grid::GridError;

#[derive(Debug, Clone, PartialEq)]
pub enum MdpError {
    /// The reward grid itself was malformed.
    Grid(GridError),
    /// A configuration value is outside its allowed range.
    InvalidConfig { field: &'static str, detail: String },
    /// Value iteration hit `max_sweeps` with `delta` still above epsilon.
    NotConverged { sweeps: u64, last_delta: f64 },
}

impl std::fmt::Display for MdpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "invalid reward grid: {e}"),
            Self::InvalidConfig { field, detail } => {
                write!(f, "invalid MDP config field `{field}`: {detail}")
            }
            Self::NotConverged { sweeps, last_delta } => write!(
                f,
                "value iteration did not converge after {sweeps} sweeps (last delta {last_delta})"
            ),
        }
    }
}

impl std::error::Error for MdpError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::InvalidConfig { .. } | Self::NotConverged { .. } => None,
        }
    }
}

impl From<GridError> for MdpError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}
