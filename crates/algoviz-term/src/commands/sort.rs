//! `algoviz sort`: the sorting visualizer.

use std::path::PathBuf;
use std::time::Instant;

use algoviz_core::config::{DEFAULT_ARRAY_SIZE, DEFAULT_SORT_SPEED, SORT_SPEED_MAX};
use algoviz_core::{Outcome, Recorder, RunError, Signal, VizConfig};
use algoviz_session::SortSession;
use algoviz_sort::SortAlgorithm;
use clap::Args;

use super::common::{self, FRAME, Summary};
use crate::canvas::Canvas;
use crate::input::{Action, Input};
use crate::terminal::Terminal;
use crate::view::BarsView;

const SPEED_STEP: u32 = 5;

#[derive(Args, Debug)]
pub struct SortArgs {
    /// Sort algorithm: bubble, selection, insertion, merge, quick or heap
    #[arg(short, long, default_value = "bubble")]
    algorithm: String,

    /// Speed, 0 (slowest) to 100 (fastest)
    #[arg(long, default_value_t = DEFAULT_SORT_SPEED)]
    speed: u32,

    /// Number of random values (5-100)
    #[arg(long, default_value_t = DEFAULT_ARRAY_SIZE)]
    size: usize,

    /// Comma-separated values to sort instead of a random array
    #[arg(long, value_name = "VALUES")]
    array: Option<String>,

    /// Seed for the random array
    #[arg(long)]
    seed: Option<u64>,

    /// Run without animation and print a summary
    #[arg(long)]
    headless: bool,

    /// Print the headless summary as JSON
    #[arg(long, requires = "headless")]
    json: bool,

    /// Write logs to this file
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

pub fn run(args: SortArgs) -> anyhow::Result<()> {
    common::init_logging(args.log_file.as_deref(), args.headless)?;

    let config = VizConfig {
        sort_speed: args.speed,
        array_size: args.size,
        ..VizConfig::default()
    };
    let mut session = match args.seed {
        Some(seed) => SortSession::seeded(&config, seed),
        None => SortSession::new(&config),
    };
    session.select_algorithm(&args.algorithm)?;
    if let Some(text) = &args.array {
        session.use_custom(text)?;
    }
    tracing::info!(
        "sorting {} values with {}",
        session.bars().len(),
        session.algorithm()
    );

    if args.headless {
        headless(&session, args.json)
    } else {
        interactive(session)
    }
}

// ---------------------------------------------------------------------------
// Headless
// ---------------------------------------------------------------------------

fn headless(session: &SortSession, json: bool) -> anyhow::Result<()> {
    let algorithm = session.algorithm();
    let mut bars = session.bars().clone();
    let mut recorder = Recorder::new();
    let started = Instant::now();
    algoviz_sort::sort(algorithm, &mut bars, &mut recorder)?;
    let summary = Summary {
        algorithm: algorithm.label(),
        outcome: Outcome::Sorted(bars.into_inner()),
        steps: recorder.steps().len(),
        comparisons: recorder.comparisons(),
        swaps: recorder.swaps(),
        visited: 0,
        elapsed_ms: common::millis(started.elapsed()),
    };
    summary.print(json)
}

// ---------------------------------------------------------------------------
// Interactive
// ---------------------------------------------------------------------------

struct SortApp {
    session: SortSession,
    view: BarsView,
    message: String,
}

impl SortApp {
    fn new(session: SortSession) -> Self {
        let view = BarsView::new(session.bars());
        Self {
            session,
            view,
            message: String::new(),
        }
    }

    fn set_algorithm(&mut self, algorithm: SortAlgorithm) {
        self.session.set_algorithm(algorithm);
        self.message = self.session.description().to_string();
    }

    /// Returns false on quit.
    fn handle(&mut self, input: Input) -> bool {
        match input {
            Input::Key(Action::Quit) => return false,
            Input::Key(Action::Run) => match self.start_run() {
                Ok(()) => {
                    self.view.sync(self.session.bars());
                    self.message.clear();
                }
                Err(e) => self.message = e.to_string(),
            },
            Input::Key(Action::PauseToggle) => {
                self.session.pause_toggle();
            }
            Input::Key(Action::Faster) => {
                let v = (self.session.speed() + SPEED_STEP).min(SORT_SPEED_MAX);
                self.session.set_speed(v);
            }
            Input::Key(Action::Slower) => {
                let v = self.session.speed().saturating_sub(SPEED_STEP);
                self.session.set_speed(v);
            }
            Input::Key(Action::NextAlgorithm) => {
                let next = self.session.algorithm().next();
                self.set_algorithm(next);
            }
            Input::Key(Action::Reset) => {
                self.session.reset();
                self.view.sync(self.session.bars());
                self.message.clear();
            }
            Input::Key(Action::Regenerate) => match self.session.generate() {
                Ok(()) => self.view.sync(self.session.bars()),
                Err(e) => self.message = e.to_string(),
            },
            Input::Key(Action::Place(_) | Action::ClearObstacles)
            | Input::Press { .. }
            | Input::Drag { .. }
            | Input::Release
            | Input::Resize => {}
        }
        true
    }

    /// Apply what the previous run still has queued, then start.
    fn start_run(&mut self) -> Result<(), RunError> {
        self.pump();
        self.session.run()
    }

    fn pump(&mut self) {
        for signal in self.session.poll() {
            self.apply(signal);
        }
    }

    fn apply(&mut self, signal: Signal) {
        match signal {
            Signal::Step(step) => self.view.apply(&step),
            Signal::Finished(Outcome::Sorted(values)) => {
                self.message = format!("sorted {} values", values.len());
            }
            Signal::Finished(_) => {}
        }
    }

    fn draw(&self, canvas: &mut Canvas) {
        let title = format!(
            "algoviz sort | {} | speed {} | size {}",
            self.session.algorithm(),
            self.session.speed(),
            self.session.size()
        );
        canvas.print(1, 0, &title, common::title_style());
        canvas.print(1, 1, self.session.description(), common::dim_style());

        // Title, description and a gap above; status, message and help below.
        let height = canvas.height().saturating_sub(7);
        if height > 0 {
            self.view.draw(canvas, (1, 3), height);
        }

        let state = self.session.state();
        let status = format!(
            "{} | comparisons {} | swaps {} | {} ms",
            common::run_label(&state),
            state.comparisons,
            state.swaps,
            state.elapsed_ms()
        );
        common::draw_footer(
            canvas,
            &status,
            &self.message,
            "enter run  space pause  +/- speed  tab algorithm  g new array  r reset  q quit",
        );
    }
}

fn interactive(session: SortSession) -> anyhow::Result<()> {
    let mut app = SortApp::new(session);
    let mut term = Terminal::open()?;
    loop {
        if let Some(input) = term.poll(FRAME)? {
            if !app.handle(input) {
                break;
            }
        }
        app.pump();
        let (w, h) = term.size()?;
        let mut canvas = Canvas::new(w, h);
        app.draw(&mut canvas);
        term.flush(&canvas)?;
    }
    term.close();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::Highlight;

    fn app() -> SortApp {
        let mut session = SortSession::seeded(&VizConfig::default(), 11);
        session.set_speed(SORT_SPEED_MAX);
        SortApp::new(session)
    }

    #[test]
    fn run_streams_into_view() {
        let mut app = app();
        app.session.use_custom("5,3,8,1,2").unwrap();
        app.view.sync(app.session.bars());
        app.handle(Input::Key(Action::Run));
        app.session.wait();
        for signal in app.session.poll() {
            app.apply(signal);
        }
        assert_eq!(app.view.values(), &[1, 2, 3, 5, 8]);
        assert_eq!(app.view.highlight(), Highlight::AllSorted);
        assert_eq!(app.message, "sorted 5 values");
    }

    #[test]
    fn tab_cycles_and_describes() {
        let mut app = app();
        app.handle(Input::Key(Action::NextAlgorithm));
        assert_eq!(app.session.algorithm(), SortAlgorithm::Selection);
        assert_eq!(app.message, SortAlgorithm::Selection.description());
    }

    #[test]
    fn speed_keys_clamp() {
        let mut app = app();
        app.handle(Input::Key(Action::Faster));
        assert_eq!(app.session.speed(), SORT_SPEED_MAX);
        for _ in 0..30 {
            app.handle(Input::Key(Action::Slower));
        }
        assert_eq!(app.session.speed(), 0);
    }

    #[test]
    fn regenerate_refreshes_view() {
        let mut app = app();
        app.handle(Input::Key(Action::Regenerate));
        assert_eq!(app.view.values(), app.session.bars().values());
        assert!(!app.handle(Input::Key(Action::Quit)));
    }

    #[test]
    fn draw_fits_small_screens() {
        let app = app();
        let mut canvas = Canvas::new(20, 4);
        app.draw(&mut canvas);
        assert!(canvas.to_text().starts_with(" algoviz sort"));
    }
}
