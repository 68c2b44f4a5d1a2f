//! The worker-thread plumbing shared by both sessions.

use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::{Arc, OnceLock};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use algoviz_core::{Outcome, Pacer, RunError, RunState, Signal, StepEmitter};

/// What a worker hands back when its algorithm returns.
struct Done<M> {
    model: M,
    result: Result<Outcome, RunError>,
    elapsed: Duration,
}

struct Worker<M> {
    handle: JoinHandle<Done<M>>,
    started: Instant,
    /// Set by the worker just before it returns.
    took: Arc<OnceLock<Duration>>,
}

impl<M> Worker<M> {
    fn is_active(&self) -> bool {
        !self.handle.is_finished()
    }

    fn elapsed(&self) -> Duration {
        self.took
            .get()
            .copied()
            .unwrap_or_else(|| self.started.elapsed())
    }
}

/// Owns a model and runs one algorithm at a time over a copy of it.
///
/// While a run is active the model held here is the pre-run snapshot and
/// edits are refused with [`RunError::Busy`]. When the worker returns, its
/// copy replaces the snapshot at the next `poll`, `wait` or mutable access.
pub(crate) struct Runner<M> {
    model: M,
    pacer: Pacer,
    worker: Option<Worker<M>>,
    rx: Option<Receiver<Signal>>,
    /// Signals drained from a channel that `poll` has not handed out yet.
    pending: Vec<Signal>,
    elapsed: Duration,
    outcome: Option<Outcome>,
}

impl<M: Clone + Send + 'static> Runner<M> {
    pub(crate) fn new(model: M, delay: Duration) -> Self {
        Self {
            model,
            pacer: Pacer::new(delay),
            worker: None,
            rx: None,
            pending: Vec::new(),
            elapsed: Duration::ZERO,
            outcome: None,
        }
    }

    #[inline]
    pub(crate) fn model(&self) -> &M {
        &self.model
    }

    /// Mutable access to the model, refused while a run is active.
    pub(crate) fn model_mut(&mut self) -> Result<&mut M, RunError> {
        self.reap();
        if self.is_running() {
            return Err(RunError::Busy);
        }
        Ok(&mut self.model)
    }

    #[inline]
    pub(crate) fn pacer(&self) -> &Pacer {
        &self.pacer
    }

    /// Whether a worker is still executing its job.
    pub(crate) fn is_running(&self) -> bool {
        self.worker.as_ref().is_some_and(Worker::is_active)
    }

    pub(crate) fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    /// Start `job` on a worker thread over a copy of the model.
    pub(crate) fn start<F>(&mut self, name: &str, job: F) -> Result<(), RunError>
    where
        F: FnOnce(&mut M, &mut StepEmitter) -> Result<Outcome, RunError> + Send + 'static,
    {
        self.reap();
        if self.worker.is_some() {
            log::warn!("{name}: run requested while another is active");
            return Err(RunError::Busy);
        }
        // Keep what the previous run sent until `poll` hands it out.
        self.drain();
        // A fresh run always starts unpaused.
        self.pacer.set_paused(false);
        let (tx, rx) = mpsc::channel();
        let mut emitter = self.pacer.emitter(Some(tx));
        let mut model = self.model.clone();

        self.outcome = None;
        self.elapsed = Duration::ZERO;
        let started = Instant::now();
        let took = Arc::new(OnceLock::new());
        let worker_took = Arc::clone(&took);
        let handle = thread::spawn(move || {
            let result = job(&mut model, &mut emitter);
            match &result {
                Ok(outcome) => emitter.finish(outcome.clone()),
                Err(RunError::NoPathFound) => emitter.finish(Outcome::NoPathFound),
                Err(_) => {}
            }
            let elapsed = started.elapsed();
            worker_took.set(elapsed).ok();
            Done {
                model,
                result,
                elapsed,
            }
        });

        log::info!("{name}: run started (generation {})", self.pacer.generation());
        self.worker = Some(Worker {
            handle,
            started,
            took,
        });
        self.rx = Some(rx);
        Ok(())
    }

    /// Drain the signals that have arrived so far. Collects the worker once
    /// it has returned.
    pub(crate) fn poll(&mut self) -> Vec<Signal> {
        // Checked before draining: a finished worker has sent everything.
        let finished = self.worker.as_ref().is_some_and(|w| !w.is_active());
        self.drain();
        if finished {
            self.collect();
        }
        std::mem::take(&mut self.pending)
    }

    fn drain(&mut self) {
        let Some(rx) = &self.rx else {
            return;
        };
        loop {
            match rx.try_recv() {
                Ok(signal) => self.pending.push(signal),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    self.rx = None;
                    break;
                }
            }
        }
    }

    /// Collect a worker whose job has already returned.
    fn reap(&mut self) {
        if self.worker.as_ref().is_some_and(|w| !w.is_active()) {
            self.drain();
            self.collect();
        }
    }

    /// Block until the active run returns and report how it ended.
    ///
    /// Returns `None` when nothing is running. Signals still queued stay
    /// available to [`poll`](Self::poll).
    pub(crate) fn wait(&mut self) -> Option<Result<Outcome, RunError>> {
        self.collect()
    }

    fn collect(&mut self) -> Option<Result<Outcome, RunError>> {
        let worker = self.worker.take()?;
        match worker.handle.join() {
            Ok(done) => {
                self.elapsed = done.elapsed;
                match &done.result {
                    Ok(outcome) => {
                        self.model = done.model;
                        self.outcome = Some(outcome.clone());
                    }
                    Err(RunError::NoPathFound) => {
                        self.model = done.model;
                        self.outcome = Some(Outcome::NoPathFound);
                    }
                    Err(err) => log::debug!("run ended without outcome: {err}"),
                }
                log::info!("run finished in {} ms", self.elapsed.as_millis());
                self.pacer.set_paused(false);
                Some(done.result)
            }
            Err(_) => {
                log::warn!("worker thread panicked; keeping the pre-run model");
                self.elapsed = worker.started.elapsed();
                self.pacer.set_paused(false);
                None
            }
        }
    }

    /// Flip pause while a run is active. Returns the pause state.
    pub(crate) fn pause_toggle(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        let paused = self.pacer.toggle_pause();
        log::debug!("{}", if paused { "paused" } else { "resumed" });
        paused
    }

    /// Invalidate any active run, wait for its worker to stop, and drop its
    /// pending signals. The pre-run model is kept.
    pub(crate) fn abandon(&mut self) {
        self.pacer.abandon();
        if let Some(worker) = self.worker.take() {
            if worker.handle.join().is_err() {
                log::warn!("worker thread panicked during reset");
            }
            log::info!("active run abandoned");
        }
        self.rx = None;
        self.pending.clear();
        self.pacer.reset_counters();
        self.elapsed = Duration::ZERO;
        self.outcome = None;
    }

    pub(crate) fn state(&self) -> RunState {
        let running = self.is_running();
        RunState {
            is_running: running,
            is_paused: running && self.pacer.is_paused(),
            comparisons: self.pacer.comparisons(),
            swaps: self.pacer.swaps(),
            elapsed: self.worker.as_ref().map_or(self.elapsed, Worker::elapsed),
        }
    }
}

impl<M> Drop for Runner<M> {
    fn drop(&mut self) {
        // Wake a paused or sleeping worker so it can exit.
        self.pacer.abandon();
    }
}
