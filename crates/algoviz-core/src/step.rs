//! Observable units of work and the signals carried to a renderer.

use crate::geom::Point;

/// One observable unit of work emitted by an engine.
///
/// Steps are produced in strict temporal order and must be applied in the
/// order received.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Step {
    /// Two array positions are about to be compared.
    Compare { a: usize, b: usize },
    /// Two array positions were exchanged.
    Swap { a: usize, b: usize },
    /// An array position was overwritten.
    Write { index: usize, value: i32 },
    /// An array position reached its final place.
    Sorted { index: usize },
    /// The whole array is sorted.
    AllSorted,
    /// A grid cell was expanded by a search.
    Visit(Point),
    /// All visit marks were cleared ahead of path display.
    ClearVisited,
    /// A grid cell belongs to the reconstructed path.
    PathMark(Point),
}

impl Step {
    /// Whether the emitter suspends the algorithm after this step.
    ///
    /// Bookkeeping steps keep a renderer mirror in sync but are not shown
    /// as a frame of their own.
    #[inline]
    pub fn is_paced(&self) -> bool {
        !matches!(self, Self::Write { .. } | Self::ClearVisited | Self::AllSorted)
    }

    /// Short lowercase label, used in logs and summaries.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Compare { .. } => "compare",
            Self::Swap { .. } => "swap",
            Self::Write { .. } => "write",
            Self::Sorted { .. } => "sorted-mark",
            Self::AllSorted => "all-sorted",
            Self::Visit(_) => "visit",
            Self::ClearVisited => "clear-visited",
            Self::PathMark(_) => "path-mark",
        }
    }
}

/// How a completed run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// The search reached the end; the route runs from start (exclusive)
    /// to end (inclusive).
    PathFound(Vec<Point>),
    /// The search space was exhausted.
    NoPathFound,
    /// The array is sorted; final values attached.
    Sorted(Vec<i32>),
}

/// What a renderer receives from a running engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Signal {
    Step(Step),
    Finished(Outcome),
}
