//! `algoviz path`: the pathfinding visualizer.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use algoviz_core::config::{self, PATH_SPEED_MAX};
use algoviz_core::{Grid, Outcome, Point, Recorder, RunError, Signal, VizConfig, grid};
use algoviz_paths::{PathAlgorithm, Pathfinder};
use algoviz_session::PathSession;
use anyhow::Context;
use clap::Args;
use rand::rngs::StdRng;
use rand::{Rng, RngExt, SeedableRng};

use super::common::{self, FRAME, Summary};
use crate::canvas::Canvas;
use crate::input::{Action, Input, PlaceMode};
use crate::terminal::Terminal;
use crate::view::GridView;

const SPEED_STEP: u32 = 10;
const GRID_ORIGIN: (u16, u16) = (1, 2);

#[derive(Args, Debug)]
pub struct PathArgs {
    /// Search algorithm: astar, dijkstra or bfs
    #[arg(short, long, default_value = "astar")]
    algorithm: String,

    /// Speed, 0 (slowest) to 200 (fastest)
    #[arg(long, default_value_t = config::default_path_speed())]
    speed: u32,

    /// Grid rows
    #[arg(long, default_value_t = grid::ROWS)]
    rows: i32,

    /// Grid columns
    #[arg(long, default_value_t = grid::COLS)]
    cols: i32,

    /// Fraction of cells turned into random obstacles (0-1)
    #[arg(long, default_value_t = 0.0)]
    density: f64,

    /// Seed for the obstacle layout
    #[arg(long)]
    seed: Option<u64>,

    /// Load the board from a text file (`S` start, `E` end, `#` wall, `.` open)
    #[arg(long, value_name = "FILE")]
    maze: Option<PathBuf>,

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

pub fn run(args: PathArgs) -> anyhow::Result<()> {
    common::init_logging(args.log_file.as_deref(), args.headless)?;

    let config = VizConfig {
        path_speed: args.speed,
        ..VizConfig::default()
    };
    let mut session = PathSession::new(&config);
    session.load_grid(build_grid(&args)?)?;
    session.select_algorithm(&args.algorithm)?;
    tracing::info!(
        "path board {}x{} with {}",
        session.grid().rows(),
        session.grid().cols(),
        session.algorithm()
    );

    if args.headless {
        headless(session.algorithm(), session.grid().clone(), args.json)
    } else {
        interactive(session)
    }
}

/// The board from `--maze`, or an open board with corner endpoints and
/// `--density` random obstacles.
fn build_grid(args: &PathArgs) -> anyhow::Result<Grid> {
    if let Some(path) = &args.maze {
        let text = fs::read_to_string(path)
            .with_context(|| format!("cannot read maze {}", path.display()))?;
        let grid = Grid::from_text(&text)
            .with_context(|| format!("invalid maze {}", path.display()))?;
        return Ok(grid);
    }
    let config = VizConfig {
        rows: args.rows,
        cols: args.cols,
        ..VizConfig::default()
    }
    .normalized();
    let mut grid = Grid::new(config.rows, config.cols);
    grid.set_start(Point::new(0, 0))?;
    grid.set_end(Point::new(config.rows - 1, config.cols - 1))?;
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };
    scatter_obstacles(&mut grid, args.density, &mut rng);
    Ok(grid)
}

/// Turn each open cell into an obstacle with probability `density`.
/// Endpoints are never covered.
fn scatter_obstacles<R: Rng + ?Sized>(grid: &mut Grid, density: f64, rng: &mut R) {
    let density = density.clamp(0.0, 1.0);
    if density == 0.0 {
        return;
    }
    let cells: Vec<Point> = grid.iter().map(|(p, _)| p).collect();
    for p in cells {
        if rng.random_bool(density) {
            grid.paint_obstacle(p).ok();
        }
    }
}

/// One character per cell: `S`, `E`, `#`, `*` on the route, `o` visited.
pub fn board_text(grid: &Grid) -> String {
    let mut out = String::new();
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let p = Point::new(row, col);
            let ch = match grid.at(p) {
                _ if grid.is_start(p) => 'S',
                _ if grid.is_end(p) => 'E',
                Some(c) if c.obstacle => '#',
                Some(c) if c.on_path => '*',
                Some(c) if c.visited => 'o',
                _ => '.',
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}

// ---------------------------------------------------------------------------
// Headless
// ---------------------------------------------------------------------------

fn headless(algorithm: PathAlgorithm, mut grid: Grid, json: bool) -> anyhow::Result<()> {
    let mut recorder = Recorder::new();
    let started = Instant::now();
    let outcome = match Pathfinder::new().run(algorithm, &mut grid, &mut recorder) {
        Ok(route) => Outcome::PathFound(route.cells),
        Err(RunError::NoPathFound) => Outcome::NoPathFound,
        Err(e) => return Err(e.into()),
    };
    let summary = Summary {
        algorithm: algorithm.label(),
        outcome,
        steps: recorder.steps().len(),
        comparisons: recorder.comparisons(),
        swaps: recorder.swaps(),
        visited: recorder.count("visit"),
        elapsed_ms: common::millis(started.elapsed()),
    };
    summary.print(json)?;
    if !json {
        print!("\n{}", board_text(&grid));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Interactive
// ---------------------------------------------------------------------------

struct PathApp {
    session: PathSession,
    view: GridView,
    mode: PlaceMode,
    painting: bool,
    message: String,
}

impl PathApp {
    fn new(session: PathSession) -> Self {
        let view = GridView::new(session.grid());
        Self {
            session,
            view,
            mode: PlaceMode::default(),
            painting: false,
            message: String::new(),
        }
    }

    /// Report an edit failure, then mirror the session's grid.
    fn edited<T>(&mut self, res: Result<T, RunError>) {
        match res {
            Ok(_) => self.view.sync(self.session.grid()),
            Err(e) => self.message = e.to_string(),
        }
    }

    /// Returns false on quit.
    fn handle(&mut self, input: Input) -> bool {
        match input {
            Input::Key(Action::Quit) => return false,
            Input::Key(Action::Run) => match self.start_run() {
                Ok(()) => {
                    self.view.sync(self.session.grid());
                    self.view.begin_run();
                    self.message.clear();
                }
                Err(e) => self.message = e.to_string(),
            },
            Input::Key(Action::PauseToggle) => {
                self.session.pause_toggle();
            }
            Input::Key(Action::Faster) => {
                let v = (self.session.speed() + SPEED_STEP).min(PATH_SPEED_MAX);
                self.session.set_speed(v);
            }
            Input::Key(Action::Slower) => {
                let v = self.session.speed().saturating_sub(SPEED_STEP);
                self.session.set_speed(v);
            }
            Input::Key(Action::NextAlgorithm) => {
                let next = self.session.algorithm().next();
                self.session.set_algorithm(next);
            }
            Input::Key(Action::Reset) => {
                self.session.reset();
                self.view.sync(self.session.grid());
                self.message.clear();
            }
            Input::Key(Action::ClearObstacles) => {
                let res = self.session.clear_obstacles();
                self.edited(res);
            }
            Input::Key(Action::Place(mode)) => self.mode = mode,
            Input::Key(Action::Regenerate) => {}
            Input::Press { x, y } => {
                let Some(p) = self.view.cell_at(GRID_ORIGIN, x, y) else {
                    return true;
                };
                match self.mode {
                    PlaceMode::Start => {
                        let res = self.session.set_start(p);
                        self.edited(res);
                    }
                    PlaceMode::End => {
                        let res = self.session.set_end(p);
                        self.edited(res);
                    }
                    PlaceMode::Obstacle => {
                        let res = self.session.toggle_obstacle(p);
                        self.painting = res.is_ok();
                        self.edited(res);
                    }
                }
            }
            Input::Drag { x, y } => {
                if !self.painting {
                    return true;
                }
                if let Some(p) = self.view.cell_at(GRID_ORIGIN, x, y) {
                    let res = self.session.paint_obstacle(p);
                    self.edited(res);
                }
            }
            Input::Release => self.painting = false,
            Input::Resize => {}
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
            Signal::Finished(Outcome::PathFound(route)) => {
                self.message = format!("path found: {} moves", route.len());
            }
            Signal::Finished(Outcome::NoPathFound) => self.message = "no path found".into(),
            Signal::Finished(Outcome::Sorted(_)) => {}
        }
    }

    fn draw(&self, canvas: &mut Canvas) {
        let title = format!(
            "algoviz path | {} | speed {} | placing {}",
            self.session.algorithm(),
            self.session.speed(),
            self.mode.label()
        );
        canvas.print(1, 0, &title, common::title_style());
        self.view.draw(canvas, GRID_ORIGIN);

        let state = self.session.state();
        let grid = self.view.grid();
        let status = format!(
            "{} | visited {} | path {} | {} ms",
            common::run_label(&state),
            grid.visited_count(),
            grid.path_cells().len(),
            state.elapsed_ms()
        );
        common::draw_footer(
            canvas,
            &status,
            &self.message,
            "enter run  space pause  +/- speed  tab algorithm  s/e/o place  c clear  r reset  q quit",
        );
    }
}

fn interactive(session: PathSession) -> anyhow::Result<()> {
    let mut app = PathApp::new(session);
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

    #[test]
    fn scatter_keeps_endpoints_open() {
        let mut g = Grid::new(4, 4);
        g.set_start(Point::new(0, 0)).unwrap();
        g.set_end(Point::new(3, 3)).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        scatter_obstacles(&mut g, 1.0, &mut rng);
        assert!(!g.is_obstacle(Point::new(0, 0)));
        assert!(!g.is_obstacle(Point::new(3, 3)));
        assert!(g.is_obstacle(Point::new(1, 2)));
    }

    #[test]
    fn zero_density_adds_nothing() {
        let mut g = Grid::new(3, 3);
        let mut rng = StdRng::seed_from_u64(2);
        scatter_obstacles(&mut g, 0.0, &mut rng);
        assert!(g.iter().all(|(_, c)| !c.obstacle));
    }

    #[test]
    fn board_text_marks_cells() {
        let mut g = Grid::from_text("S.#\n..E\n").unwrap();
        g.mark_visited(Point::new(1, 0));
        g.mark_path(Point::new(0, 1));
        assert_eq!(board_text(&g), "S*#\no.E\n");
    }

    #[test]
    fn press_in_obstacle_mode_toggles_and_paints() {
        let mut app = PathApp::new(PathSession::with_grid(Grid::new(3, 3), 200));
        // Column 1 is drawn at x = 1 + 2 * 1.
        assert!(app.handle(Input::Press { x: 3, y: 2 }));
        assert!(app.session.grid().is_obstacle(Point::new(0, 1)));
        app.handle(Input::Drag { x: 5, y: 3 });
        assert!(app.session.grid().is_obstacle(Point::new(1, 2)));
        app.handle(Input::Release);
        app.handle(Input::Drag { x: 1, y: 4 });
        assert!(!app.session.grid().is_obstacle(Point::new(2, 0)));
        assert!(app.view.grid().is_obstacle(Point::new(1, 2)));

        app.handle(Input::Key(Action::ClearObstacles));
        assert!(!app.view.grid().is_obstacle(Point::new(1, 2)));
    }

    #[test]
    fn run_without_endpoints_shows_message() {
        let mut app = PathApp::new(PathSession::with_grid(Grid::new(3, 3), 200));
        app.handle(Input::Key(Action::Run));
        assert_eq!(app.message, RunError::MissingEndpoints.to_string());
        assert!(!app.handle(Input::Key(Action::Quit)));
    }

    #[test]
    fn run_streams_into_view() {
        let mut app = PathApp::new(PathSession::with_grid(
            Grid::from_text("S..\n...\n..E\n").unwrap(),
            200,
        ));
        app.handle(Input::Key(Action::Run));
        app.session.wait();
        for signal in app.session.poll() {
            app.apply(signal);
        }
        assert_eq!(app.view.grid().path_cells().len(), 3);
        assert_eq!(app.message, "path found: 4 moves");
    }
}
