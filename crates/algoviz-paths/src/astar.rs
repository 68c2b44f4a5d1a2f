use algoviz_core::{Grid, RunError, StepSink};

use crate::Pathfinder;
use crate::distance::manhattan;
use crate::pathfinder::{Route, SearchNode, reveal, visit};

impl Pathfinder {
    /// Shortest route from start to end using A* with the Manhattan
    /// heuristic and unit edge costs.
    ///
    /// The open list is stable-sorted by `f` before every pop, so among equal
    /// `f` the node that sits earlier in the list is expanded first. A cheaper
    /// way to an open node rewrites that node in place instead of adding a
    /// duplicate.
    pub fn astar<S: StepSink>(&mut self, grid: &mut Grid, sink: &mut S) -> Result<Route, RunError> {
        let (start, end) = Self::prepare(grid)?;

        self.nodes.clear();
        let mut closed = vec![false; grid.len()];
        // Arena index of each cell while it sits in the open list.
        let mut open_at: Vec<Option<usize>> = vec![None; grid.len()];

        let h = manhattan(start, end);
        self.nodes.push(SearchNode {
            cell: start,
            g: 0,
            h,
            f: h,
            parent: None,
        });
        let mut open: Vec<usize> = vec![0];
        if let Some(si) = grid.index(start) {
            open_at[si] = Some(0);
        }

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut visited = 0;

        let found = 'search: loop {
            if open.is_empty() {
                break 'search None;
            }
            open.sort_by_key(|&n| self.nodes[n].f);
            let ci = open.remove(0);
            let current = self.nodes[ci];

            let Some(ck) = grid.index(current.cell) else {
                continue;
            };
            open_at[ck] = None;

            if current.cell == end {
                break 'search Some(ci);
            }
            closed[ck] = true;

            for &np in nbuf.cardinal(current.cell, |p| grid.is_passable(p)) {
                let Some(nk) = grid.index(np) else {
                    continue;
                };
                if closed[nk] {
                    continue;
                }
                let g = current.g + 1;
                let h = manhattan(np, end);
                let candidate = SearchNode {
                    cell: np,
                    g,
                    h,
                    f: g + h,
                    parent: Some(ci),
                };
                match open_at[nk] {
                    Some(ni) => {
                        if g < self.nodes[ni].g {
                            self.nodes[ni] = candidate;
                        }
                    }
                    None => {
                        let ni = self.nodes.len();
                        self.nodes.push(candidate);
                        open.push(ni);
                        open_at[nk] = Some(ni);
                    }
                }
            }

            if current.cell != start {
                visit(grid, current.cell, sink)?;
                visited += 1;
            }
        };

        self.nbuf = nbuf;

        let Some(goal) = found else {
            return Err(RunError::NoPathFound);
        };
        let cells = self.unwind(goal);
        reveal(grid, &cells, sink)?;
        Ok(Route { cells, visited })
    }
}
