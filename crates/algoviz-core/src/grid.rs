//! The [`Grid`] type: a fixed-size matrix of [`Cell`]s with one start and
//! one end marker.
//!
//! Invariants kept by every mutator:
//!
//! - at most one start and one end, and never on the same square;
//! - obstacles never cover the start or end square.

use crate::cell::Cell;
use crate::error::RunError;
use crate::geom::{Point, Range};

/// Default number of rows.
pub const ROWS: i32 = 20;
/// Default number of columns.
pub const COLS: i32 = 20;

/// The pathfinding board.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    cells: Vec<Cell>,
    bounds: Range,
    start: Option<Point>,
    end: Option<Point>,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(ROWS, COLS)
    }
}

impl Grid {
    /// Create an empty grid of the given dimensions.
    pub fn new(rows: i32, cols: i32) -> Self {
        let bounds = Range::sized(rows, cols);
        Self {
            cells: vec![Cell::OPEN; bounds.len()],
            bounds,
            start: None,
            end: None,
        }
    }

    /// Build a grid from text rows.
    ///
    /// `#` is an obstacle, `S` the start, `E` the end, `.` or a space an open
    /// cell. Short rows are padded with open cells to the widest row.
    pub fn from_text(text: &str) -> Result<Self, RunError> {
        let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
        let rows = lines.len() as i32;
        let cols = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0) as i32;
        let mut grid = Self::new(rows, cols);
        for (r, line) in lines.iter().enumerate() {
            for (c, ch) in line.chars().enumerate() {
                let p = Point::new(r as i32, c as i32);
                match ch {
                    '#' => {
                        grid.paint_obstacle(p)?;
                    }
                    'S' | 's' => {
                        grid.set_start(p)?;
                    }
                    'E' | 'e' => {
                        grid.set_end(p)?;
                    }
                    '.' | ' ' => {}
                    other => {
                        return Err(RunError::InvalidGridText {
                            line: r + 1,
                            ch: other,
                        });
                    }
                }
            }
        }
        Ok(grid)
    }

    /// The bounding range of the grid.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.bounds.rows()
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.bounds.cols()
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Flat index of `p`, or `None` if outside.
    #[inline]
    pub fn index(&self, p: Point) -> Option<usize> {
        self.bounds.index(p)
    }

    /// Inverse of [`index`](Self::index).
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        self.bounds.point(idx)
    }

    /// The cell at `p`, or `None` if outside.
    #[inline]
    pub fn at(&self, p: Point) -> Option<Cell> {
        self.index(p).map(|i| self.cells[i])
    }

    /// The start marker.
    #[inline]
    pub fn start(&self) -> Option<Point> {
        self.start
    }

    /// The end marker.
    #[inline]
    pub fn end(&self) -> Option<Point> {
        self.end
    }

    /// Whether `p` is the start cell.
    #[inline]
    pub fn is_start(&self, p: Point) -> bool {
        self.start == Some(p)
    }

    /// Whether `p` is the end cell.
    #[inline]
    pub fn is_end(&self, p: Point) -> bool {
        self.end == Some(p)
    }

    /// Whether `p` is start or end.
    #[inline]
    pub fn is_endpoint(&self, p: Point) -> bool {
        self.is_start(p) || self.is_end(p)
    }

    /// Whether `p` is an obstacle. Out-of-range points count as blocked.
    #[inline]
    pub fn is_obstacle(&self, p: Point) -> bool {
        self.at(p).is_none_or(|c| c.obstacle)
    }

    /// Whether a search may step onto `p`.
    #[inline]
    pub fn is_passable(&self, p: Point) -> bool {
        self.at(p).is_some_and(|c| !c.obstacle)
    }

    /// Both endpoints, or [`RunError::MissingEndpoints`].
    pub fn endpoints(&self) -> Result<(Point, Point), RunError> {
        match (self.start, self.end) {
            (Some(s), Some(e)) => Ok((s, e)),
            _ => Err(RunError::MissingEndpoints),
        }
    }

    fn checked_index(&self, p: Point) -> Result<usize, RunError> {
        self.index(p).ok_or(RunError::OutOfBounds(p))
    }

    /// Move the start marker to `p`, replacing any prior start.
    ///
    /// An obstacle under `p` is removed; if `p` was the end, the end is
    /// cleared.
    pub fn set_start(&mut self, p: Point) -> Result<(), RunError> {
        let i = self.checked_index(p)?;
        self.cells[i].obstacle = false;
        if self.end == Some(p) {
            self.end = None;
        }
        self.start = Some(p);
        Ok(())
    }

    /// Move the end marker to `p`, replacing any prior end.
    ///
    /// An obstacle under `p` is removed; if `p` was the start, the start is
    /// cleared.
    pub fn set_end(&mut self, p: Point) -> Result<(), RunError> {
        let i = self.checked_index(p)?;
        self.cells[i].obstacle = false;
        if self.start == Some(p) {
            self.start = None;
        }
        self.end = Some(p);
        Ok(())
    }

    /// Flip the obstacle flag at `p`. No-op on start/end.
    ///
    /// Returns the new obstacle state.
    pub fn toggle_obstacle(&mut self, p: Point) -> Result<bool, RunError> {
        let i = self.checked_index(p)?;
        if self.is_endpoint(p) {
            return Ok(false);
        }
        self.cells[i].obstacle = !self.cells[i].obstacle;
        Ok(self.cells[i].obstacle)
    }

    /// Set the obstacle flag at `p` (drag painting). No-op on start/end.
    ///
    /// Returns whether `p` is now an obstacle.
    pub fn paint_obstacle(&mut self, p: Point) -> Result<bool, RunError> {
        let i = self.checked_index(p)?;
        if self.is_endpoint(p) {
            return Ok(false);
        }
        self.cells[i].obstacle = true;
        Ok(true)
    }

    /// Remove every obstacle.
    pub fn clear_obstacles(&mut self) {
        for c in &mut self.cells {
            c.obstacle = false;
        }
    }

    /// Clear `visited` and `on_path` everywhere.
    pub fn clear_trace(&mut self) {
        for c in &mut self.cells {
            *c = c.cleared();
        }
    }

    /// Clear only the `visited` marks.
    pub fn clear_visited(&mut self) {
        for c in &mut self.cells {
            c.visited = false;
        }
    }

    /// Mark `p` as visited. Ignored outside the grid.
    pub fn mark_visited(&mut self, p: Point) {
        if let Some(i) = self.index(p) {
            self.cells[i].visited = true;
        }
    }

    /// Mark `p` as part of the reconstructed path. Ignored outside the grid.
    pub fn mark_path(&mut self, p: Point) {
        if let Some(i) = self.index(p) {
            self.cells[i].on_path = true;
        }
    }

    /// Number of cells currently marked visited.
    pub fn visited_count(&self) -> usize {
        self.cells.iter().filter(|c| c.visited).count()
    }

    /// Points currently marked on the path, in row-major order.
    pub fn path_cells(&self) -> Vec<Point> {
        self.iter()
            .filter(|(_, c)| c.on_path)
            .map(|(p, _)| p)
            .collect()
    }

    /// Row-major iterator over `(Point, Cell)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Cell)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }
}
