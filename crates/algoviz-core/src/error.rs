//! The error type shared by engines and sessions.

use thiserror::Error;

use crate::geom::Point;

/// Everything that can stop a run from starting or finishing normally.
///
/// Every variant is recoverable: the session stays usable for the next run.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RunError {
    /// Start or end was not set when a search was requested.
    #[error("start and end points must both be set")]
    MissingEndpoints,

    /// The requested algorithm name is not known.
    #[error("invalid algorithm selected: {0}")]
    InvalidAlgorithmSelection(String),

    /// The search exhausted the reachable cells without meeting the end.
    #[error("no path found")]
    NoPathFound,

    /// Custom array input did not yield an acceptable number of values.
    #[error("custom array must have between {min} and {max} elements (got {len})")]
    InvalidCustomArray {
        /// Number of values that survived parsing.
        len: usize,
        /// Minimum accepted length.
        min: usize,
        /// Maximum accepted length.
        max: usize,
    },

    /// A run is already active.
    #[error("a run is already in progress")]
    Busy,

    /// The run was invalidated by a reset.
    #[error("run abandoned")]
    Abandoned,

    /// A coordinate outside the grid was given.
    #[error("point {0} is outside the grid")]
    OutOfBounds(Point),

    /// A text grid contained an unknown character.
    #[error("unexpected character {ch:?} on line {line}")]
    InvalidGridText {
        /// One-based line number.
        line: usize,
        /// The offending character.
        ch: char,
    },
}

impl RunError {
    /// Whether this error is the normal terminal state of a search rather
    /// than a rejected request.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::NoPathFound | Self::Abandoned)
    }
}
