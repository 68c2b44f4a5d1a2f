use algoviz_core::config::{self, PATH_SPEED_MAX};
use algoviz_core::{Grid, Outcome, Point, RunError, RunState, Signal, VizConfig};
use algoviz_paths::{PathAlgorithm, Pathfinder};

use crate::runner::Runner;

/// Controller for the pathfinding visualizer.
///
/// Owns the grid, the selected algorithm and the speed. [`run`](Self::run)
/// searches a copy of the grid on a worker thread; the steps arrive through
/// [`poll`](Self::poll) and the searched grid replaces the session's own
/// when the worker returns.
pub struct PathSession {
    runner: Runner<Grid>,
    algorithm: PathAlgorithm,
    speed: u32,
}

impl Default for PathSession {
    fn default() -> Self {
        Self::new(&VizConfig::default())
    }
}

impl PathSession {
    /// An empty grid sized by `config`.
    pub fn new(config: &VizConfig) -> Self {
        let config = config.normalized();
        Self::with_grid(Grid::new(config.rows, config.cols), config.path_speed)
    }

    /// Start from an existing grid.
    pub fn with_grid(grid: Grid, speed: u32) -> Self {
        let speed = speed.min(PATH_SPEED_MAX);
        Self {
            runner: Runner::new(grid, config::path_delay(speed)),
            algorithm: PathAlgorithm::default(),
            speed,
        }
    }

    /// The session's grid. While a run is active this is the pre-run state.
    pub fn grid(&self) -> &Grid {
        self.runner.model()
    }

    pub fn algorithm(&self) -> PathAlgorithm {
        self.algorithm
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    pub fn is_running(&self) -> bool {
        self.runner.is_running()
    }

    // -----------------------------------------------------------------------
    // Grid editing
    // -----------------------------------------------------------------------

    pub fn set_start(&mut self, p: Point) -> Result<(), RunError> {
        let grid = self.runner.model_mut()?;
        grid.clear_trace();
        grid.set_start(p)
    }

    pub fn set_end(&mut self, p: Point) -> Result<(), RunError> {
        let grid = self.runner.model_mut()?;
        grid.clear_trace();
        grid.set_end(p)
    }

    /// Flip the obstacle at `p`. Returns whether `p` is now an obstacle.
    pub fn toggle_obstacle(&mut self, p: Point) -> Result<bool, RunError> {
        self.runner.model_mut()?.toggle_obstacle(p)
    }

    /// Make `p` an obstacle; used while dragging.
    pub fn paint_obstacle(&mut self, p: Point) -> Result<bool, RunError> {
        self.runner.model_mut()?.paint_obstacle(p)
    }

    pub fn clear_obstacles(&mut self) -> Result<(), RunError> {
        self.runner.model_mut()?.clear_obstacles();
        Ok(())
    }

    /// Replace the grid wholesale, e.g. with one read from a maze file.
    pub fn load_grid(&mut self, grid: Grid) -> Result<(), RunError> {
        *self.runner.model_mut()? = grid;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Run control
    // -----------------------------------------------------------------------

    /// Select an algorithm by name (`astar`, `dijkstra`, `bfs`).
    pub fn select_algorithm(&mut self, name: &str) -> Result<PathAlgorithm, RunError> {
        let algorithm = name.parse::<PathAlgorithm>().inspect_err(|_| {
            log::warn!("unknown path algorithm {name:?}");
        })?;
        self.set_algorithm(algorithm);
        Ok(algorithm)
    }

    pub fn set_algorithm(&mut self, algorithm: PathAlgorithm) {
        self.algorithm = algorithm;
    }

    /// Move the speed slider (`0..=200`, higher is faster). Applies to an
    /// active run at its next step.
    pub fn set_speed(&mut self, v: u32) {
        self.speed = v.min(PATH_SPEED_MAX);
        self.runner.pacer().set_delay(config::path_delay(self.speed));
    }

    /// Start the selected search.
    ///
    /// Fails with [`RunError::Busy`] if a run is active and with
    /// [`RunError::MissingEndpoints`] if start or end is unset; in both
    /// cases nothing starts.
    pub fn run(&mut self) -> Result<(), RunError> {
        if self.runner.is_running() {
            return Err(RunError::Busy);
        }
        self.runner.model().endpoints()?;
        let algorithm = self.algorithm;
        self.runner.start("path", move |grid, emitter| {
            let route = Pathfinder::new().run(algorithm, grid, emitter)?;
            Ok(Outcome::PathFound(route.cells))
        })
    }

    /// Pause or resume the active run. Returns whether it is now paused;
    /// without an active run this does nothing and returns `false`.
    pub fn pause_toggle(&mut self) -> bool {
        self.runner.pause_toggle()
    }

    /// Abandon any run and clear the board: obstacles, markers and trace.
    pub fn reset(&mut self) {
        self.runner.abandon();
        let (rows, cols) = {
            let g = self.runner.model();
            (g.rows(), g.cols())
        };
        if let Ok(grid) = self.runner.model_mut() {
            *grid = Grid::new(rows, cols);
        }
        log::debug!("path session reset");
    }

    /// Signals received since the last call.
    pub fn poll(&mut self) -> Vec<Signal> {
        self.runner.poll()
    }

    /// Block until the active run returns. `None` if nothing is running or
    /// the worker failed.
    pub fn wait(&mut self) -> Option<Result<Outcome, RunError>> {
        self.runner.wait()
    }

    /// How the last completed run ended.
    pub fn outcome(&self) -> Option<&Outcome> {
        self.runner.outcome()
    }

    pub fn state(&self) -> RunState {
        self.runner.state()
    }
}
