//! Session control: start, stop, resume, reset.
//!
//! A session owns one engine plus the pacing policy and exposes the
//! user-facing controls. Stopping is cooperative: a [`StopHandle`] set
//! from any thread is observed at the next step boundary, and the
//! engine keeps its in-progress state so a later start resumes the run
//! instead of restarting it.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::engine::StepEngine;
use crate::scheduler::{RunOutcome, Scheduler};

/// Cloneable cancellation flag for a running session.
#[derive(Debug, Clone, Default)]
pub struct StopHandle {
    flag: Arc<AtomicBool>,
}

impl StopHandle {
    /// Request a stop at the next step boundary.
    pub fn stop(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    /// Whether a stop has been requested.
    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }

    fn clear(&self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}

/// One visualization run: an engine, its pacing, and its controls.
#[derive(Debug)]
pub struct VizSession<E: StepEngine> {
    engine: E,
    initial: E,
    scheduler: Scheduler,
    stop: StopHandle,
    paused: bool,
}

impl<E: StepEngine + Clone> VizSession<E> {
    /// Create a session; the engine's starting state is kept for reset.
    #[must_use]
    pub fn new(engine: E, scheduler: Scheduler) -> Self {
        Self {
            initial: engine.clone(),
            engine,
            scheduler,
            stop: StopHandle::default(),
            paused: false,
        }
    }

    /// The engine being driven.
    #[must_use]
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Mutable access to the engine.
    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    /// Handle for stopping this session from another thread.
    #[must_use]
    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    /// Whether the session was stopped before completing.
    #[must_use]
    pub const fn is_paused(&self) -> bool {
        self.paused
    }

    /// Whether the engine has reached its terminal state.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.engine.is_done()
    }

    /// Replace the pacing policy; takes effect on the next start.
    pub fn set_scheduler(&mut self, scheduler: Scheduler) {
        self.scheduler = scheduler;
    }

    /// Advance the engine by one step without pacing.
    pub fn step(&mut self) -> crate::engine::StepOutcome<E::Emit> {
        self.engine.step_once()
    }

    /// Start the run, or resume it where the last stop left off.
    ///
    /// Blocks until the engine completes or the stop handle fires.
    /// `on_step` runs after every step with the emission and the
    /// engine's post-step state.
    pub fn start_or_resume<F>(&mut self, on_step: F) -> RunOutcome
    where
        F: FnMut(Option<&E::Emit>, &E),
    {
        self.stop.clear();
        self.paused = false;

        let stop = self.stop.clone();
        let outcome = self
            .scheduler
            .run(&mut self.engine, on_step, move || stop.is_stopped());

        if outcome == RunOutcome::Cancelled {
            self.paused = true;
        }
        outcome
    }

    /// Restore the engine to its starting state and clear progress.
    pub fn reset(&mut self) {
        self.engine = self.initial.clone();
        self.paused = false;
        self.stop.clear();
    }
}
