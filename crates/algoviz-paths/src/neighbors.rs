use algoviz_core::Point;

/// Cached neighbour computation helper.
///
/// Enumerates the 4-directional neighbours of a grid point in the fixed
/// search order up, down, left, right, filtered by a predicate.
#[derive(Debug)]
pub struct Neighbors {
    buf: Vec<Point>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// Return the cardinal neighbours of `p` for which `keep` returns `true`.
    pub fn cardinal(&mut self, p: Point, keep: impl Fn(Point) -> bool) -> &[Point] {
        self.buf.clear();
        for n in p.neighbors_4() {
            if keep(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use algoviz_core::Grid;

    #[test]
    fn corner_has_two_neighbors() {
        let g = Grid::new(3, 3);
        let mut nb = Neighbors::new();
        let got = nb.cardinal(Point::new(0, 0), |n| g.is_passable(n));
        assert_eq!(got, &[Point::new(1, 0), Point::new(0, 1)]);
    }

    #[test]
    fn obstacles_are_filtered() {
        let mut g = Grid::new(3, 3);
        g.paint_obstacle(Point::new(0, 1)).unwrap();
        g.paint_obstacle(Point::new(1, 2)).unwrap();
        let mut nb = Neighbors::new();
        let got = nb.cardinal(Point::new(1, 1), |n| g.is_passable(n));
        assert_eq!(got, &[Point::new(2, 1), Point::new(1, 0)]);
    }
}
