//! Step pacing: the cooperative suspension point every algorithm calls.
//!
//! Engines are generic over [`StepSink`]. Two sinks are provided:
//!
//! - [`StepEmitter`] is the live sink. It is bound to a shared [`Pacer`],
//!   blocks while the pacer is paused, sleeps for the current delay after
//!   each paced step and forwards every step to a renderer channel.
//! - [`Recorder`] keeps the steps in memory and never sleeps. Tests and
//!   headless runs use it.
//!
//! A [`Pacer`] tags each run with a generation number. [`Pacer::abandon`]
//! moves to a new generation and wakes every suspended emitter; a stale
//! emitter then fails its next step with [`RunError::Abandoned`], so the
//! algorithm unwinds through `?` without touching its model again.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::Sender;
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use crate::error::RunError;
use crate::step::{Outcome, Signal, Step};

/// Receives the steps of a running algorithm.
pub trait StepSink {
    /// Record `step`, possibly suspending the caller.
    ///
    /// Returns [`RunError::Abandoned`] if the run is no longer current; the
    /// algorithm must stop without further mutation.
    fn step(&mut self, step: Step) -> Result<(), RunError>;
}

impl<S: StepSink + ?Sized> StepSink for &mut S {
    #[inline]
    fn step(&mut self, step: Step) -> Result<(), RunError> {
        (**self).step(step)
    }
}

// ---------------------------------------------------------------------------
// Pacer
// ---------------------------------------------------------------------------

#[derive(Debug)]
struct PaceState {
    paused: bool,
    generation: u64,
}

#[derive(Debug)]
struct Shared {
    state: Mutex<PaceState>,
    wake: Condvar,
    delay_ms: AtomicU64,
    comparisons: AtomicU64,
    swaps: AtomicU64,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, PaceState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Controller-side handle to the pause flag, delay, counters and run
/// generation. Cloning yields another handle to the same state.
#[derive(Debug, Clone)]
pub struct Pacer {
    shared: Arc<Shared>,
}

impl Default for Pacer {
    fn default() -> Self {
        Self::new(Duration::ZERO)
    }
}

impl Pacer {
    /// Create a pacer with the given per-step delay.
    pub fn new(delay: Duration) -> Self {
        Self {
            shared: Arc::new(Shared {
                state: Mutex::new(PaceState {
                    paused: false,
                    generation: 0,
                }),
                wake: Condvar::new(),
                delay_ms: AtomicU64::new(delay.as_millis() as u64),
                comparisons: AtomicU64::new(0),
                swaps: AtomicU64::new(0),
            }),
        }
    }

    /// Current per-step delay.
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.shared.delay_ms.load(Ordering::Relaxed))
    }

    /// Change the per-step delay. Takes effect at the next suspension.
    pub fn set_delay(&self, delay: Duration) {
        self.shared
            .delay_ms
            .store(delay.as_millis() as u64, Ordering::Relaxed);
    }

    /// Whether emitters are held at their next step.
    pub fn is_paused(&self) -> bool {
        self.shared.lock().paused
    }

    /// Pause or resume.
    pub fn set_paused(&self, paused: bool) {
        let mut state = self.shared.lock();
        state.paused = paused;
        if !paused {
            self.shared.wake.notify_all();
        }
    }

    /// Flip the pause flag, returning the new value.
    pub fn toggle_pause(&self) -> bool {
        let mut state = self.shared.lock();
        state.paused = !state.paused;
        if !state.paused {
            self.shared.wake.notify_all();
        }
        state.paused
    }

    /// The current run generation.
    pub fn generation(&self) -> u64 {
        self.shared.lock().generation
    }

    /// Invalidate every emitter handed out so far.
    ///
    /// Clears the pause flag and wakes suspended emitters so they can observe
    /// the new generation. Returns the new generation.
    pub fn abandon(&self) -> u64 {
        let mut state = self.shared.lock();
        state.generation = state.generation.wrapping_add(1);
        state.paused = false;
        self.shared.wake.notify_all();
        log::debug!("pacer moved to generation {}", state.generation);
        state.generation
    }

    /// Comparisons counted in the current run.
    pub fn comparisons(&self) -> u64 {
        self.shared.comparisons.load(Ordering::Relaxed)
    }

    /// Swaps counted in the current run.
    pub fn swaps(&self) -> u64 {
        self.shared.swaps.load(Ordering::Relaxed)
    }

    /// Zero the counters.
    pub fn reset_counters(&self) {
        self.shared.comparisons.store(0, Ordering::Relaxed);
        self.shared.swaps.store(0, Ordering::Relaxed);
    }

    /// Begin a run: zero the counters and hand out an emitter tagged with the
    /// current generation. Steps are forwarded to `tx` when given.
    pub fn emitter(&self, tx: Option<Sender<Signal>>) -> StepEmitter {
        self.reset_counters();
        StepEmitter {
            shared: Arc::clone(&self.shared),
            generation: self.generation(),
            tx,
        }
    }
}

// ---------------------------------------------------------------------------
// StepEmitter
// ---------------------------------------------------------------------------

/// The live [`StepSink`] for one run.
#[derive(Debug)]
pub struct StepEmitter {
    shared: Arc<Shared>,
    generation: u64,
    tx: Option<Sender<Signal>>,
}

impl StepEmitter {
    /// The generation this emitter belongs to.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether the run is still current.
    pub fn is_current(&self) -> bool {
        self.shared.lock().generation == self.generation
    }

    /// Send the terminal signal, unless the run was abandoned.
    pub fn finish(&self, outcome: Outcome) {
        if !self.is_current() {
            log::debug!("suppressing outcome of abandoned run {}", self.generation);
            return;
        }
        if let Some(tx) = &self.tx {
            tx.send(Signal::Finished(outcome)).ok();
        }
    }

    fn wait_while_paused(&self) -> Result<(), RunError> {
        let mut state = self.shared.lock();
        while state.paused && state.generation == self.generation {
            state = self
                .shared
                .wake
                .wait(state)
                .unwrap_or_else(PoisonError::into_inner);
        }
        if state.generation == self.generation {
            Ok(())
        } else {
            Err(RunError::Abandoned)
        }
    }

    fn suspend(&self, delay: Duration) -> Result<(), RunError> {
        let deadline = Instant::now() + delay;
        let mut state = self.shared.lock();
        while state.generation == self.generation {
            let now = Instant::now();
            if now >= deadline {
                return Ok(());
            }
            state = self
                .shared
                .wake
                .wait_timeout(state, deadline - now)
                .unwrap_or_else(PoisonError::into_inner)
                .0;
        }
        Err(RunError::Abandoned)
    }
}

impl StepSink for StepEmitter {
    fn step(&mut self, step: Step) -> Result<(), RunError> {
        self.wait_while_paused()?;

        match step {
            Step::Compare { .. } => {
                self.shared.comparisons.fetch_add(1, Ordering::Relaxed);
            }
            Step::Swap { .. } => {
                self.shared.swaps.fetch_add(1, Ordering::Relaxed);
            }
            _ => {}
        }
        if let Some(tx) = &self.tx {
            tx.send(Signal::Step(step)).ok();
        }

        if step.is_paced() {
            // Read at suspension time so speed changes apply immediately.
            let delay = Duration::from_millis(self.shared.delay_ms.load(Ordering::Relaxed));
            if !delay.is_zero() {
                self.suspend(delay)?;
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Recorder
// ---------------------------------------------------------------------------

/// An in-memory [`StepSink`] that never sleeps.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    steps: Vec<Step>,
    comparisons: u64,
    swaps: u64,
    limit: Option<usize>,
}

impl Recorder {
    /// An unbounded recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// A recorder that abandons the run once `limit` steps were taken.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit: Some(limit),
            ..Self::default()
        }
    }

    /// Every step recorded so far, in order.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Number of `Compare` steps.
    pub fn comparisons(&self) -> u64 {
        self.comparisons
    }

    /// Number of `Swap` steps.
    pub fn swaps(&self) -> u64 {
        self.swaps
    }

    /// Number of steps whose [`Step::kind`] equals `kind`.
    pub fn count(&self, kind: &str) -> usize {
        self.steps.iter().filter(|s| s.kind() == kind).count()
    }
}

impl StepSink for Recorder {
    fn step(&mut self, step: Step) -> Result<(), RunError> {
        if self.limit.is_some_and(|n| self.steps.len() >= n) {
            return Err(RunError::Abandoned);
        }
        match step {
            Step::Compare { .. } => self.comparisons += 1,
            Step::Swap { .. } => self.swaps += 1,
            _ => {}
        }
        self.steps.push(step);
        Ok(())
    }
}
