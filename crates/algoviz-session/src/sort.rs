use rand::SeedableRng;
use rand::rngs::StdRng;

use algoviz_core::config::{self, SORT_SPEED_MAX};
use algoviz_core::{Bars, Outcome, RunError, RunState, Signal, VizConfig};
use algoviz_sort::{SortAlgorithm, sort};

use crate::runner::Runner;

/// Controller for the sorting visualizer.
pub struct SortSession {
    runner: Runner<Bars>,
    algorithm: SortAlgorithm,
    speed: u32,
    size: usize,
    rng: StdRng,
}

impl Default for SortSession {
    fn default() -> Self {
        Self::new(&VizConfig::default())
    }
}

impl SortSession {
    /// A random array of `config.array_size` values.
    pub fn new(config: &VizConfig) -> Self {
        Self::with_rng(config, StdRng::from_rng(&mut rand::rng()))
    }

    /// Like [`new`](Self::new) but with reproducible arrays.
    pub fn seeded(config: &VizConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: &VizConfig, mut rng: StdRng) -> Self {
        let config = config.normalized();
        let bars = Bars::random(config.array_size, &mut rng);
        Self {
            runner: Runner::new(bars, config::sort_delay(config.sort_speed)),
            algorithm: SortAlgorithm::default(),
            speed: config.sort_speed,
            size: bars_len(config.array_size),
            rng,
        }
    }

    /// The session's array. While a run is active this is the pre-run
    /// state.
    pub fn bars(&self) -> &Bars {
        self.runner.model()
    }

    pub fn algorithm(&self) -> SortAlgorithm {
        self.algorithm
    }

    /// One-line description of the selected algorithm.
    pub fn description(&self) -> &'static str {
        self.algorithm.description()
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    /// Current array size.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_running(&self) -> bool {
        self.runner.is_running()
    }

    // -----------------------------------------------------------------------
    // Array
    // -----------------------------------------------------------------------

    /// Replace the array with fresh random values of the current size.
    pub fn generate(&mut self) -> Result<(), RunError> {
        let bars = Bars::random(self.size, &mut self.rng);
        *self.runner.model_mut()? = bars;
        Ok(())
    }

    /// Change the size (clamped to `5..=100`) and regenerate.
    pub fn set_size(&mut self, n: usize) -> Result<(), RunError> {
        if self.runner.is_running() {
            return Err(RunError::Busy);
        }
        self.size = bars_len(n);
        self.generate()
    }

    /// Replace the array with comma-separated user input.
    ///
    /// On failure the previous array is kept. On success the size follows
    /// the new length.
    pub fn use_custom(&mut self, text: &str) -> Result<(), RunError> {
        if self.runner.is_running() {
            return Err(RunError::Busy);
        }
        let bars = Bars::parse_custom(text).inspect_err(|e| log::warn!("custom array rejected: {e}"))?;
        self.size = bars.len();
        *self.runner.model_mut()? = bars;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Run control
    // -----------------------------------------------------------------------

    /// Select an algorithm by name (`bubble`, `quick`, `heapSort`, ...).
    pub fn select_algorithm(&mut self, name: &str) -> Result<SortAlgorithm, RunError> {
        let algorithm = name.parse::<SortAlgorithm>().inspect_err(|_| {
            log::warn!("unknown sort algorithm {name:?}");
        })?;
        self.set_algorithm(algorithm);
        Ok(algorithm)
    }

    pub fn set_algorithm(&mut self, algorithm: SortAlgorithm) {
        self.algorithm = algorithm;
    }

    /// Move the speed slider (`0..=100`, higher is faster).
    pub fn set_speed(&mut self, v: u32) {
        self.speed = v.min(SORT_SPEED_MAX);
        self.runner.pacer().set_delay(config::sort_delay(self.speed));
    }

    /// Start sorting with the selected algorithm.
    pub fn run(&mut self) -> Result<(), RunError> {
        let algorithm = self.algorithm;
        self.runner.start("sort", move |bars, emitter| {
            sort(algorithm, bars, emitter)?;
            Ok(Outcome::Sorted(bars.values().to_vec()))
        })
    }

    pub fn pause_toggle(&mut self) -> bool {
        self.runner.pause_toggle()
    }

    /// Abandon any run, zero the counters and generate a new array of the
    /// current size.
    pub fn reset(&mut self) {
        self.runner.abandon();
        if let Err(e) = self.generate() {
            log::warn!("reset could not regenerate: {e}");
        }
        log::debug!("sort session reset");
    }

    pub fn poll(&mut self) -> Vec<Signal> {
        self.runner.poll()
    }

    pub fn wait(&mut self) -> Option<Result<Outcome, RunError>> {
        self.runner.wait()
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        self.runner.outcome()
    }

    pub fn state(&self) -> RunState {
        self.runner.state()
    }
}

fn bars_len(n: usize) -> usize {
    n.clamp(algoviz_core::bars::MIN_LEN, algoviz_core::bars::MAX_LEN)
}
