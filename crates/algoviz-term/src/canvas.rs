//! An off-screen cell buffer and the diff that the terminal flushes.

// ---------------------------------------------------------------------------
// Color / Style / Glyph
// ---------------------------------------------------------------------------

/// An RGB colour packed into a `u32` (0x00RRGGBB). `DEFAULT` leaves the
/// terminal's own colour in place.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Color(pub u32);

impl Color {
    pub const DEFAULT: Self = Self(0);

    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | (b as u32))
    }

    #[inline]
    pub const fn r(self) -> u8 {
        ((self.0 >> 16) & 0xFF) as u8
    }

    #[inline]
    pub const fn g(self) -> u8 {
        ((self.0 >> 8) & 0xFF) as u8
    }

    #[inline]
    pub const fn b(self) -> u8 {
        (self.0 & 0xFF) as u8
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Style {
    pub fg: Color,
    pub bg: Color,
    pub bold: bool,
}

impl Style {
    #[inline]
    pub const fn with_fg(mut self, fg: Color) -> Self {
        self.fg = fg;
        self
    }

    #[inline]
    pub const fn with_bg(mut self, bg: Color) -> Self {
        self.bg = bg;
        self
    }

    #[inline]
    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

/// A styled character.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Glyph {
    pub ch: char,
    pub style: Style,
}

impl Glyph {
    #[inline]
    pub const fn new(ch: char, style: Style) -> Self {
        Self { ch, style }
    }
}

impl Default for Glyph {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: Style::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// Canvas
// ---------------------------------------------------------------------------

/// A `width` x `height` buffer of [`Glyph`]s addressed by `(x, y)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    cells: Vec<Glyph>,
    width: u16,
    height: u16,
}

impl Canvas {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            cells: vec![Glyph::default(); usize::from(width) * usize::from(height)],
            width,
            height,
        }
    }

    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| usize::from(y) * usize::from(self.width) + usize::from(x))
    }

    /// The glyph at `(x, y)`; a blank glyph outside the canvas.
    pub fn at(&self, x: u16, y: u16) -> Glyph {
        self.index(x, y).map(|i| self.cells[i]).unwrap_or_default()
    }

    /// Set one glyph. Ignored outside the canvas.
    pub fn set(&mut self, x: u16, y: u16, glyph: Glyph) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = glyph;
        }
    }

    /// Write `text` left to right from `(x, y)`, clipped at the right edge.
    /// Returns the column after the last character written.
    pub fn print(&mut self, x: u16, y: u16, text: &str, style: Style) -> u16 {
        let mut cx = x;
        for ch in text.chars() {
            if cx >= self.width {
                break;
            }
            self.set(cx, y, Glyph::new(ch, style));
            cx += 1;
        }
        cx
    }

    /// Glyphs that differ from `prev`, row by row. A canvas of another size
    /// is redrawn completely.
    pub fn diff(&self, prev: &Canvas) -> Vec<(u16, u16, Glyph)> {
        let same_size = prev.width == self.width && prev.height == self.height;
        let mut out = Vec::new();
        for y in 0..self.height {
            for x in 0..self.width {
                let g = self.at(x, y);
                if !same_size || prev.at(x, y) != g {
                    out.push((x, y, g));
                }
            }
        }
        out
    }

    /// Plain text rendering, one line per row with trailing blanks removed.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for y in 0..self.height {
            let line: String = (0..self.width).map(|x| self.at(x, y).ch).collect();
            out.push_str(line.trim_end());
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_components() {
        let c = Color::from_rgb(0xAB, 0xCD, 0xEF);
        assert_eq!((c.r(), c.g(), c.b()), (0xAB, 0xCD, 0xEF));
    }

    #[test]
    fn print_clips_at_edge() {
        let mut c = Canvas::new(4, 1);
        let end = c.print(2, 0, "hello", Style::default());
        assert_eq!(end, 4);
        assert_eq!(c.to_text(), "  he\n");
    }

    #[test]
    fn out_of_range_is_ignored() {
        let mut c = Canvas::new(2, 2);
        c.set(5, 5, Glyph::new('x', Style::default()));
        assert_eq!(c.at(5, 5), Glyph::default());
    }

    #[test]
    fn diff_reports_changes_only() {
        let a = Canvas::new(3, 2);
        let mut b = Canvas::new(3, 2);
        b.set(1, 0, Glyph::new('A', Style::default().bold()));
        let d = b.diff(&a);
        assert_eq!(d.len(), 1);
        assert_eq!(d[0].0, 1);
        assert_eq!(d[0].2.ch, 'A');
    }

    #[test]
    fn diff_after_resize_is_full() {
        let a = Canvas::new(2, 2);
        let b = Canvas::new(3, 2);
        assert_eq!(b.diff(&a).len(), 6);
    }
}
