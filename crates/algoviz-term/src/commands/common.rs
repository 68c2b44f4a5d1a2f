//! Helpers shared by the `path` and `sort` commands.

use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;

use algoviz_core::{Outcome, RunState};
use anyhow::Context;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use crate::canvas::{Canvas, Color, Style};

/// How long the interactive loop waits for input before redrawing.
pub const FRAME: Duration = Duration::from_millis(16);

/// Install the tracing subscriber.
///
/// With `--log-file` records go to that file. Headless runs log to stderr.
/// The interactive terminal owns the screen, so without a file nothing is
/// installed.
pub fn init_logging(log_file: Option<&Path>, headless: bool) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());
    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None if headless => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::stderr)
                .init();
        }
        None => {}
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Headless summary
// ---------------------------------------------------------------------------

/// What a headless run prints.
#[derive(Debug, Serialize)]
pub struct Summary {
    pub algorithm: &'static str,
    pub outcome: Outcome,
    pub steps: usize,
    pub comparisons: u64,
    pub swaps: u64,
    pub visited: usize,
    pub elapsed_ms: u64,
}

impl Summary {
    pub fn to_text(&self) -> String {
        let result = match &self.outcome {
            Outcome::PathFound(route) => {
                format!("path found ({} moves, {} cells)", route.len(), route.len() + 1)
            }
            Outcome::NoPathFound => "no path found".to_string(),
            Outcome::Sorted(values) => format!("sorted {values:?}"),
        };
        let mut out = format!("algorithm:   {}\nresult:      {result}\n", self.algorithm);
        out.push_str(&format!("steps:       {}\n", self.steps));
        if matches!(self.outcome, Outcome::Sorted(_)) {
            out.push_str(&format!("comparisons: {}\n", self.comparisons));
            out.push_str(&format!("swaps:       {}\n", self.swaps));
        } else {
            out.push_str(&format!("visited:     {}\n", self.visited));
        }
        out.push_str(&format!("elapsed:     {} ms\n", self.elapsed_ms));
        out
    }

    pub fn print(&self, json: bool) -> anyhow::Result<()> {
        if json {
            println!("{}", serde_json::to_string_pretty(self)?);
        } else {
            print!("{}", self.to_text());
        }
        Ok(())
    }
}

pub fn millis(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}

// ---------------------------------------------------------------------------
// Screen furniture
// ---------------------------------------------------------------------------

pub fn title_style() -> Style {
    Style::default()
        .with_fg(Color::from_rgb(0xff, 0xff, 0xff))
        .bold()
}

pub fn dim_style() -> Style {
    Style::default().with_fg(Color::from_rgb(0x90, 0x90, 0x90))
}

pub fn message_style() -> Style {
    Style::default().with_fg(Color::from_rgb(0xf3, 0x9c, 0x12))
}

/// `running`, `paused` or `idle`.
pub fn run_label(state: &RunState) -> &'static str {
    match (state.is_running, state.is_paused) {
        (true, true) => "paused",
        (true, false) => "running",
        _ => "idle",
    }
}

/// Print the bottom lines: status, message and key help.
pub fn draw_footer(canvas: &mut Canvas, status: &str, message: &str, help: &str) {
    let h = canvas.height();
    if h < 3 {
        return;
    }
    canvas.print(1, h - 3, status, Style::default());
    canvas.print(1, h - 2, message, message_style());
    canvas.print(1, h - 1, help, dim_style());
}
