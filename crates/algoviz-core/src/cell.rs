//! The [`Cell`] type: per-square state of the pathfinding grid.

/// One square of a [`Grid`](crate::grid::Grid).
///
/// Start and end markers live on the grid itself so that cells are always
/// identified by coordinate. `visited` and `on_path` belong to the current
/// search and are cleared at the start of each run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub obstacle: bool,
    pub visited: bool,
    pub on_path: bool,
}

impl Cell {
    /// An open cell with no marks.
    pub const OPEN: Self = Self {
        obstacle: false,
        visited: false,
        on_path: false,
    };

    /// Drop the transient search marks, keeping the obstacle flag.
    #[inline]
    pub const fn cleared(self) -> Self {
        Self {
            obstacle: self.obstacle,
            visited: false,
            on_path: false,
        }
    }
}
