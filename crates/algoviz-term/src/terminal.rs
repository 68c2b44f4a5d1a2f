//! Crossterm terminal driver: raw mode, alternate screen, mouse capture,
//! event polling and diffed drawing.

use std::io::{self, Stdout, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyEvent, KeyEventKind, MouseButton, MouseEventKind},
    execute, queue,
    style::{self, Attribute, Color as CtColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};

use crate::canvas::{Canvas, Color};
use crate::input::{Input, action_for};

/// Maps a canvas [`Color`] to a crossterm colour.
fn to_ct_color(c: Color) -> CtColor {
    if c == Color::DEFAULT {
        CtColor::Reset
    } else {
        CtColor::Rgb {
            r: c.r(),
            g: c.g(),
            b: c.b(),
        }
    }
}

/// The interactive terminal. Restores the terminal on [`close`](Self::close)
/// or drop.
pub struct Terminal {
    out: Stdout,
    prev: Option<Canvas>,
    active: bool,
}

impl Terminal {
    /// Enter raw mode and the alternate screen, and capture the mouse.
    pub fn open() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = io::stdout();
        execute!(
            out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All),
            event::EnableMouseCapture
        )?;
        tracing::debug!("terminal opened");
        Ok(Self {
            out,
            prev: None,
            active: true,
        })
    }

    /// Current terminal size as `(width, height)`.
    pub fn size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }

    /// Wait up to `timeout` for one input event.
    pub fn poll(&mut self, timeout: Duration) -> io::Result<Option<Input>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        let input = match event::read()? {
            Event::Key(KeyEvent {
                code,
                modifiers,
                kind,
                ..
            }) if kind != KeyEventKind::Release => action_for(code, modifiers).map(Input::Key),
            Event::Mouse(me) => match me.kind {
                MouseEventKind::Down(MouseButton::Left) => Some(Input::Press {
                    x: me.column,
                    y: me.row,
                }),
                MouseEventKind::Drag(MouseButton::Left) => Some(Input::Drag {
                    x: me.column,
                    y: me.row,
                }),
                MouseEventKind::Up(_) => Some(Input::Release),
                _ => None,
            },
            Event::Resize(..) => {
                // Force a full redraw.
                self.prev = None;
                execute!(self.out, terminal::Clear(ClearType::All))?;
                Some(Input::Resize)
            }
            _ => None,
        };
        Ok(input)
    }

    /// Draw the glyphs of `canvas` that changed since the last flush.
    pub fn flush(&mut self, canvas: &Canvas) -> io::Result<()> {
        let changes = match &self.prev {
            Some(prev) => canvas.diff(prev),
            None => canvas.diff(&Canvas::new(0, 0)),
        };
        for (x, y, glyph) in changes {
            queue!(
                self.out,
                cursor::MoveTo(x, y),
                SetForegroundColor(to_ct_color(glyph.style.fg)),
                SetBackgroundColor(to_ct_color(glyph.style.bg))
            )?;
            if glyph.style.bold {
                queue!(self.out, style::SetAttribute(Attribute::Bold))?;
            }
            write!(self.out, "{}", glyph.ch)?;
            if glyph.style.bold {
                queue!(self.out, style::SetAttribute(Attribute::Reset))?;
            }
        }
        queue!(self.out, style::ResetColor)?;
        self.out.flush()?;
        self.prev = Some(canvas.clone());
        Ok(())
    }

    /// Give the terminal back.
    pub fn close(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        let _ = execute!(
            self.out,
            event::DisableMouseCapture,
            style::ResetColor,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
        tracing::debug!("terminal closed");
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        self.close();
    }
}
