use algoviz_core::{Grid, Point, RunError, StepSink};

use crate::Pathfinder;
use crate::pathfinder::{Route, UNREACHABLE, reveal, visit};

impl Pathfinder {
    /// Shortest route from start to end using Dijkstra's algorithm with unit
    /// edge costs.
    ///
    /// Queue entries are `(cell, distance)` pairs kept in a list that is
    /// stable-sorted by distance before every pop. Entries whose cell was
    /// already settled are skipped without a visit.
    pub fn dijkstra<S: StepSink>(
        &mut self,
        grid: &mut Grid,
        sink: &mut S,
    ) -> Result<Route, RunError> {
        let (start, end) = Self::prepare(grid)?;

        self.nodes.clear();
        let mut dist = vec![UNREACHABLE; grid.len()];
        let mut prev: Vec<Option<Point>> = vec![None; grid.len()];
        let mut done = vec![false; grid.len()];

        if let Some(si) = grid.index(start) {
            dist[si] = 0;
        }
        let mut queue: Vec<(Point, u32)> = vec![(start, 0)];

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut visited = 0;
        let mut reached = false;

        while !queue.is_empty() {
            queue.sort_by_key(|&(_, d)| d);
            let (cur, d) = queue.remove(0);
            let Some(ck) = grid.index(cur) else {
                continue;
            };

            if cur == end {
                reached = true;
                break;
            }
            if done[ck] {
                continue;
            }
            done[ck] = true;

            for &np in nbuf.cardinal(cur, |p| grid.is_passable(p)) {
                let Some(nk) = grid.index(np) else {
                    continue;
                };
                if done[nk] {
                    continue;
                }
                let nd = d + 1;
                if nd < dist[nk] {
                    dist[nk] = nd;
                    prev[nk] = Some(cur);
                    queue.push((np, nd));
                }
            }

            if cur != start {
                visit(grid, cur, sink)?;
                visited += 1;
            }
        }

        self.nbuf = nbuf;

        if !reached {
            return Err(RunError::NoPathFound);
        }

        // Follow predecessors back from the end; start has none.
        let mut cells = Vec::new();
        let mut at = end;
        while let Some(p) = grid.index(at).and_then(|i| prev[i]) {
            cells.push(at);
            at = p;
        }
        cells.reverse();

        reveal(grid, &cells, sink)?;
        Ok(Route { cells, visited })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use algoviz_core::Recorder;

    #[test]
    fn finds_shortest_route() {
        let mut g = Grid::from_text(
            "S...\n\
             ###.\n\
             E...\n",
        )
        .unwrap();
        let mut rec = Recorder::new();
        let route = Pathfinder::new().dijkstra(&mut g, &mut rec).unwrap();
        assert_eq!(route.len(), 8);
        assert_eq!(route.cells.first(), Some(&Point::new(0, 1)));
        assert_eq!(route.cells.last(), Some(&Point::new(2, 0)));
        // Consecutive cells are adjacent.
        let mut prev = Point::new(0, 0);
        for &p in &route.cells {
            assert_eq!(prev.row.abs_diff(p.row) + prev.col.abs_diff(p.col), 1);
            prev = p;
        }
    }

    #[test]
    fn adjacent_endpoints_give_single_move() {
        let mut g = Grid::from_text("SE\n").unwrap();
        let mut rec = Recorder::new();
        let route = Pathfinder::new().dijkstra(&mut g, &mut rec).unwrap();
        assert_eq!(route.cells, vec![Point::new(0, 1)]);
        assert_eq!(route.visited, 0);
        // Only the clear step; the end itself is never marked.
        assert_eq!(rec.count("path-mark"), 0);
        assert_eq!(rec.count("clear-visited"), 1);
    }

    #[test]
    fn walled_off_end_visits_whole_component() {
        let mut g = Grid::from_text(
            "S.#..\n\
             ..#.E\n",
        )
        .unwrap();
        let mut rec = Recorder::new();
        let err = Pathfinder::new().dijkstra(&mut g, &mut rec).unwrap_err();
        assert_eq!(err, RunError::NoPathFound);
        assert_eq!(rec.count("visit"), 3);
    }

    #[test]
    fn missing_end_is_rejected_before_any_step() {
        let mut g = Grid::new(3, 3);
        g.set_start(Point::new(0, 0)).unwrap();
        let mut rec = Recorder::new();
        let err = Pathfinder::new().dijkstra(&mut g, &mut rec).unwrap_err();
        assert_eq!(err, RunError::MissingEndpoints);
        assert!(rec.steps().is_empty());
    }
}
