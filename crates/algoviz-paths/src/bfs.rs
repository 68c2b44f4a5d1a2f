use std::collections::VecDeque;

use algoviz_core::{Grid, RunError, StepSink};

use crate::Pathfinder;
use crate::pathfinder::{Route, SearchNode, reveal, visit};

impl Pathfinder {
    /// Route from start to end by breadth-first search.
    ///
    /// Cells are marked as seen when enqueued, so each is queued at most
    /// once. On a grid with unit costs the route is a shortest one.
    pub fn bfs<S: StepSink>(&mut self, grid: &mut Grid, sink: &mut S) -> Result<Route, RunError> {
        let (start, end) = Self::prepare(grid)?;

        self.nodes.clear();
        let mut seen = vec![false; grid.len()];
        if let Some(si) = grid.index(start) {
            seen[si] = true;
        }
        self.nodes.push(SearchNode::plain(start, None));
        let mut queue: VecDeque<usize> = VecDeque::from([0]);

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut visited = 0;
        let mut found = None;

        while let Some(ci) = queue.pop_front() {
            let cur = self.nodes[ci].cell;
            if cur == end {
                found = Some(ci);
                break;
            }

            for &np in nbuf.cardinal(cur, |p| grid.is_passable(p)) {
                let Some(nk) = grid.index(np) else {
                    continue;
                };
                if seen[nk] {
                    continue;
                }
                seen[nk] = true;
                let ni = self.nodes.len();
                self.nodes.push(SearchNode::plain(np, Some(ci)));
                queue.push_back(ni);
            }

            if cur != start {
                visit(grid, cur, sink)?;
                visited += 1;
            }
        }

        self.nbuf = nbuf;

        let Some(goal) = found else {
            return Err(RunError::NoPathFound);
        };
        let cells = self.unwind(goal);
        reveal(grid, &cells, sink)?;
        Ok(Route { cells, visited })
    }
}
