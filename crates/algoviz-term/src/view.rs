//! Renderer-side mirrors of the models.
//!
//! A view is rebuilt from the session's model when idle and follows the
//! step stream while a run is active, so the screen shows every step in
//! the order it was emitted.

use algoviz_core::{Bars, Grid, Point, Step};

use crate::canvas::{Canvas, Color, Glyph, Style};

const OPEN: Color = Color::from_rgb(0x30, 0x30, 0x38);
const WALL: Color = Color::from_rgb(0x10, 0x10, 0x10);
const START: Color = Color::from_rgb(0x2e, 0xcc, 0x71);
const END: Color = Color::from_rgb(0xe7, 0x4c, 0x3c);
const VISITED: Color = Color::from_rgb(0x34, 0x98, 0xdb);
const PATH: Color = Color::from_rgb(0xf1, 0xc4, 0x0f);

const BAR: Color = Color::from_rgb(0x5d, 0xad, 0xe2);
const COMPARING: Color = Color::from_rgb(0xf1, 0xc4, 0x0f);
const SWAPPING: Color = Color::from_rgb(0xe7, 0x4c, 0x3c);
const SORTED: Color = Color::from_rgb(0x2e, 0xcc, 0x71);

// ---------------------------------------------------------------------------
// GridView
// ---------------------------------------------------------------------------

/// Screen columns per grid cell.
pub const CELL_WIDTH: u16 = 2;

#[derive(Debug, Clone)]
pub struct GridView {
    grid: Grid,
}

impl GridView {
    pub fn new(grid: &Grid) -> Self {
        Self { grid: grid.clone() }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Take over the session's grid.
    pub fn sync(&mut self, grid: &Grid) {
        self.grid.clone_from(grid);
    }

    /// A search clears the previous trace before its first step.
    pub fn begin_run(&mut self) {
        self.grid.clear_trace();
    }

    pub fn apply(&mut self, step: &Step) {
        match *step {
            Step::Visit(p) => self.grid.mark_visited(p),
            Step::ClearVisited => self.grid.clear_visited(),
            Step::PathMark(p) => self.grid.mark_path(p),
            _ => {}
        }
    }

    /// Grid cell under screen position `(x, y)` when the grid is drawn at
    /// `origin`.
    pub fn cell_at(&self, origin: (u16, u16), x: u16, y: u16) -> Option<Point> {
        let col = x.checked_sub(origin.0)? / CELL_WIDTH;
        let row = y.checked_sub(origin.1)?;
        let p = Point::new(i32::from(row), i32::from(col));
        self.grid.contains(p).then_some(p)
    }

    pub fn draw(&self, canvas: &mut Canvas, origin: (u16, u16)) {
        for (p, cell) in self.grid.iter() {
            let (ch, bg) = if self.grid.is_start(p) {
                ('S', START)
            } else if self.grid.is_end(p) {
                ('E', END)
            } else if cell.obstacle {
                (' ', WALL)
            } else if cell.on_path {
                (' ', PATH)
            } else if cell.visited {
                (' ', VISITED)
            } else {
                (' ', OPEN)
            };
            let style = Style::default()
                .with_fg(Color::from_rgb(0xff, 0xff, 0xff))
                .with_bg(bg)
                .bold();
            let (Ok(col), Ok(row)) = (u16::try_from(p.col), u16::try_from(p.row)) else {
                continue;
            };
            let x = origin.0 + col * CELL_WIDTH;
            let y = origin.1 + row;
            canvas.set(x, y, Glyph::new(ch, style));
            canvas.set(x + 1, y, Glyph::new(' ', style));
        }
    }
}

// ---------------------------------------------------------------------------
// BarsView
// ---------------------------------------------------------------------------

/// The highlight left by the most recent step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Highlight {
    #[default]
    None,
    Comparing(usize, usize),
    Swapping(usize, usize),
    Sorted(usize),
    AllSorted,
}

#[derive(Debug, Clone)]
pub struct BarsView {
    values: Vec<i32>,
    highlight: Highlight,
}

impl BarsView {
    pub fn new(bars: &Bars) -> Self {
        Self {
            values: bars.values().to_vec(),
            highlight: Highlight::None,
        }
    }

    pub fn values(&self) -> &[i32] {
        &self.values
    }

    pub fn highlight(&self) -> Highlight {
        self.highlight
    }

    pub fn sync(&mut self, bars: &Bars) {
        self.values.clear();
        self.values.extend_from_slice(bars.values());
        self.highlight = Highlight::None;
    }

    pub fn apply(&mut self, step: &Step) {
        match *step {
            Step::Compare { a, b } => self.highlight = Highlight::Comparing(a, b),
            Step::Swap { a, b } => {
                if a < self.values.len() && b < self.values.len() {
                    self.values.swap(a, b);
                }
                self.highlight = Highlight::Swapping(a, b);
            }
            Step::Write { index, value } => {
                if let Some(v) = self.values.get_mut(index) {
                    *v = value;
                }
            }
            Step::Sorted { index } => self.highlight = Highlight::Sorted(index),
            Step::AllSorted => self.highlight = Highlight::AllSorted,
            _ => {}
        }
    }

    fn color(&self, i: usize) -> Color {
        match self.highlight {
            Highlight::AllSorted => SORTED,
            Highlight::Comparing(a, b) if i == a || i == b => COMPARING,
            Highlight::Swapping(a, b) if i == a || i == b => SWAPPING,
            Highlight::Sorted(k) if i == k => SORTED,
            _ => BAR,
        }
    }

    /// Draw one column per value, bottom-aligned in a `height`-row area
    /// starting at `origin`. Heights scale with the largest value.
    pub fn draw(&self, canvas: &mut Canvas, origin: (u16, u16), height: u16) {
        let top = self.values.iter().copied().max().unwrap_or(1).max(1);
        for (i, &v) in self.values.iter().enumerate() {
            let Ok(col) = u16::try_from(i) else {
                break;
            };
            let v = i64::from(v.max(0));
            let h = (v * i64::from(height) + i64::from(top) - 1) / i64::from(top);
            let h = u16::try_from(h).unwrap_or(height).min(height);
            let style = Style::default().with_fg(self.color(i));
            for dy in 0..h {
                canvas.set(origin.0 + col, origin.1 + height - 1 - dy, Glyph::new('█', style));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_view_follows_steps() {
        let mut g = Grid::new(2, 3);
        g.set_start(Point::new(0, 0)).unwrap();
        g.set_end(Point::new(0, 2)).unwrap();
        let mut v = GridView::new(&g);
        v.apply(&Step::Visit(Point::new(1, 1)));
        assert_eq!(v.grid().visited_count(), 1);
        v.apply(&Step::ClearVisited);
        v.apply(&Step::PathMark(Point::new(0, 1)));
        assert_eq!(v.grid().visited_count(), 0);
        assert_eq!(v.grid().path_cells(), vec![Point::new(0, 1)]);
        v.begin_run();
        assert!(v.grid().path_cells().is_empty());
    }

    #[test]
    fn cell_at_maps_double_width_cells() {
        let v = GridView::new(&Grid::new(3, 3));
        assert_eq!(v.cell_at((2, 1), 2, 1), Some(Point::new(0, 0)));
        assert_eq!(v.cell_at((2, 1), 5, 2), Some(Point::new(1, 1)));
        assert_eq!(v.cell_at((2, 1), 1, 1), None);
        assert_eq!(v.cell_at((2, 1), 8, 1), None);
    }

    #[test]
    fn grid_draws_endpoints() {
        let mut g = Grid::new(1, 3);
        g.set_start(Point::new(0, 0)).unwrap();
        g.set_end(Point::new(0, 2)).unwrap();
        let mut c = Canvas::new(6, 1);
        GridView::new(&g).draw(&mut c, (0, 0));
        assert_eq!(c.at(0, 0).ch, 'S');
        assert_eq!(c.at(4, 0).ch, 'E');
        assert_eq!(c.at(2, 0).style.bg, OPEN);
    }

    #[test]
    fn bars_view_mirrors_swaps_and_writes() {
        let mut v = BarsView::new(&Bars::new(vec![3, 1, 2]));
        v.apply(&Step::Compare { a: 0, b: 1 });
        assert_eq!(v.highlight(), Highlight::Comparing(0, 1));
        v.apply(&Step::Swap { a: 0, b: 1 });
        assert_eq!(v.values(), &[1, 3, 2]);
        v.apply(&Step::Write { index: 2, value: 9 });
        assert_eq!(v.values(), &[1, 3, 9]);
        // Writes keep the previous highlight.
        assert_eq!(v.highlight(), Highlight::Swapping(0, 1));
        v.apply(&Step::AllSorted);
        assert_eq!(v.color(1), SORTED);
    }

    #[test]
    fn bars_scale_to_area() {
        let v = BarsView::new(&Bars::new(vec![100, 50, 0]));
        let mut c = Canvas::new(3, 4);
        v.draw(&mut c, (0, 0), 4);
        assert_eq!(c.to_text(), "█\n█\n██\n██\n");
    }
}
