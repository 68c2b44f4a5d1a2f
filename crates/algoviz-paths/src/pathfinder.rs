use algoviz_core::{Grid, Point, RunError, Step, StepSink};

use crate::algorithm::PathAlgorithm;
use crate::neighbors::Neighbors;

/// Sentinel distance meaning "not reached yet".
pub const UNREACHABLE: u32 = u32::MAX;

// ---------------------------------------------------------------------------
// SearchNode / Route
// ---------------------------------------------------------------------------

/// A node in the per-run search tree.
///
/// `parent` indexes the [`Pathfinder`] node arena; following parents always
/// ends at the start node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchNode {
    pub cell: Point,
    pub g: u32,
    pub h: u32,
    pub f: u32,
    pub parent: Option<usize>,
}

impl SearchNode {
    /// A node with no cost information, as used by BFS.
    pub fn plain(cell: Point, parent: Option<usize>) -> Self {
        Self {
            cell,
            g: 0,
            h: 0,
            f: 0,
            parent,
        }
    }
}

/// The result of a successful search.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    /// Cells from start (exclusive) to end (inclusive); the length equals
    /// the number of moves.
    pub cells: Vec<Point>,
    /// Number of `Visit` steps emitted before the end was reached.
    pub visited: usize,
}

impl Route {
    /// Number of moves from start to end.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the route has no moves.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of cells covered, counting both start and end.
    pub fn span(&self) -> usize {
        self.cells.len() + 1
    }
}

// ---------------------------------------------------------------------------
// Pathfinder
// ---------------------------------------------------------------------------

/// Runs the search algorithms against a [`Grid`].
///
/// `Pathfinder` owns the node arena and neighbour scratch buffer so that
/// repeated runs reuse their allocations.
#[derive(Debug, Default)]
pub struct Pathfinder {
    pub(crate) nodes: Vec<SearchNode>,
    pub(crate) nbuf: Neighbors,
}

impl Pathfinder {
    /// Create a new pathfinder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `algorithm` on `grid`, emitting every step into `sink`.
    pub fn run<S: StepSink>(
        &mut self,
        algorithm: PathAlgorithm,
        grid: &mut Grid,
        sink: &mut S,
    ) -> Result<Route, RunError> {
        log::debug!("starting {} on {}x{} grid", algorithm, grid.rows(), grid.cols());
        let res = match algorithm {
            PathAlgorithm::AStar => self.astar(grid, sink),
            PathAlgorithm::Dijkstra => self.dijkstra(grid, sink),
            PathAlgorithm::Bfs => self.bfs(grid, sink),
        };
        match &res {
            Ok(route) => log::debug!(
                "{} found a route of {} moves after {} visits",
                algorithm,
                route.len(),
                route.visited
            ),
            Err(e) => log::debug!("{} stopped: {}", algorithm, e),
        }
        res
    }

    /// The search tree of the last A* or BFS run.
    pub fn nodes(&self) -> &[SearchNode] {
        &self.nodes
    }

    /// Validate endpoints and clear the marks of any previous run.
    pub(crate) fn prepare(grid: &mut Grid) -> Result<(Point, Point), RunError> {
        let endpoints = grid.endpoints()?;
        grid.clear_trace();
        Ok(endpoints)
    }

    /// Walk parent links from arena node `idx` back to the root.
    ///
    /// The root itself is not included; the result is in start→end order.
    pub(crate) fn unwind(&self, mut idx: usize) -> Vec<Point> {
        let mut cells = Vec::new();
        while let Some(parent) = self.nodes[idx].parent {
            cells.push(self.nodes[idx].cell);
            idx = parent;
        }
        cells.reverse();
        cells
    }
}

/// Mark a cell as expanded and emit its `Visit` step.
pub(crate) fn visit<S: StepSink>(grid: &mut Grid, p: Point, sink: &mut S) -> Result<(), RunError> {
    grid.mark_visited(p);
    sink.step(Step::Visit(p))
}

/// Show the reconstructed route: clear the visit marks, then mark each
/// intermediate cell in order.
pub(crate) fn reveal<S: StepSink>(
    grid: &mut Grid,
    cells: &[Point],
    sink: &mut S,
) -> Result<(), RunError> {
    grid.clear_visited();
    sink.step(Step::ClearVisited)?;
    for &p in cells {
        if grid.is_endpoint(p) {
            continue;
        }
        grid.mark_path(p);
        sink.step(Step::PathMark(p))?;
    }
    Ok(())
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn route_round_trip() {
        let route = Route {
            cells: vec![Point::new(0, 1), Point::new(1, 1)],
            visited: 3,
        };
        let json = serde_json::to_string(&route).unwrap();
        let back: Route = serde_json::from_str(&json).unwrap();
        assert_eq!(route, back);
    }
}
