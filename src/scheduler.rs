//! Cooperative pacing of step engines.
//!
//! The scheduler owns the timing policy only: it never touches
//! algorithm state. Between steps it sleeps for a fixed delay derived
//! from the user-facing speed; cancellation is polled at step
//! boundaries, so a cancelled run leaves its engine exactly where the
//! last completed step put it and a later run resumes with no lost or
//! duplicated emissions.

use std::thread;
use std::time::Duration;

use crate::config::{SPEED_MAX, SPEED_MIN};
use crate::engine::StepEngine;

/// Delay at the slowest speed setting.
const DELAY_MAX_MS: u64 = 2000;
/// Delay at the fastest speed setting.
const DELAY_MIN_MS: u64 = 100;

/// How a scheduler run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The engine reached its terminal state.
    Completed,
    /// Cancellation was observed at a step boundary; the engine keeps
    /// its in-progress state.
    Cancelled,
}

/// Paces an engine with a fixed inter-step delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scheduler {
    delay: Duration,
}

impl Scheduler {
    /// Scheduler with the delay mapped from a speed setting.
    #[must_use]
    pub fn from_speed(speed: u32) -> Self {
        Self {
            delay: delay_from_speed(speed),
        }
    }

    /// Scheduler with an explicit inter-step delay.
    #[must_use]
    pub const fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }

    /// Scheduler with no delay, for headless and test runs.
    #[must_use]
    pub const fn immediate() -> Self {
        Self {
            delay: Duration::ZERO,
        }
    }

    /// The configured inter-step delay.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Drive `engine` until it finishes or `is_cancelled` returns true.
    ///
    /// `on_step` runs after every step with the emission (if any) and
    /// the engine's post-step state; this is where a caller redraws.
    /// No delay follows the final step.
    pub fn run<E, F, C>(&self, engine: &mut E, mut on_step: F, mut is_cancelled: C) -> RunOutcome
    where
        E: StepEngine,
        F: FnMut(Option<&E::Emit>, &E),
        C: FnMut() -> bool,
    {
        loop {
            if is_cancelled() {
                return RunOutcome::Cancelled;
            }
            if engine.is_done() {
                return RunOutcome::Completed;
            }

            let outcome = engine.step_once();
            on_step(outcome.emitted.as_ref(), engine);
            if outcome.done {
                return RunOutcome::Completed;
            }

            if !self.delay.is_zero() {
                thread::sleep(self.delay);
            }
        }
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::from_speed(crate::config::DEFAULT_SPEED)
    }
}

/// Map a speed setting to an inter-step delay.
///
/// Affine and decreasing: `SPEED_MIN` maps to 2000 ms, `SPEED_MAX` to
/// 100 ms. Out-of-range speeds clamp to the endpoints.
#[must_use]
pub fn delay_from_speed(speed: u32) -> Duration {
    let speed = u64::from(speed.clamp(SPEED_MIN, SPEED_MAX));
    let span = u64::from(SPEED_MAX - SPEED_MIN);
    let ms = DELAY_MAX_MS - (speed - u64::from(SPEED_MIN)) * (DELAY_MAX_MS - DELAY_MIN_MS) / span;
    Duration::from_millis(ms)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::engine::sort::{SortAlgorithm, SortStepper};
    use crate::engine::StepEngine;

    #[test]
    fn test_delay_endpoints() {
        assert_eq!(delay_from_speed(SPEED_MIN), Duration::from_millis(2000));
        assert_eq!(delay_from_speed(SPEED_MAX), Duration::from_millis(100));
    }

    #[test]
    fn test_delay_monotonically_decreasing() {
        let mut previous = delay_from_speed(SPEED_MIN);
        for speed in (SPEED_MIN..=SPEED_MAX).step_by(49) {
            let delay = delay_from_speed(speed);
            assert!(delay <= previous, "delay must not increase with speed");
            previous = delay;
        }
    }

    #[test]
    fn test_delay_clamps_out_of_range() {
        assert_eq!(delay_from_speed(0), delay_from_speed(SPEED_MIN));
        assert_eq!(delay_from_speed(10_000), delay_from_speed(SPEED_MAX));
    }

    #[test]
    fn test_immediate_run_completes() {
        let mut engine = SortStepper::new(vec![5, 3, 8, 1], SortAlgorithm::Bubble);
        let mut calls = 0usize;
        let outcome = Scheduler::immediate().run(&mut engine, |_, _| calls += 1, || false);
        assert_eq!(outcome, RunOutcome::Completed);
        assert!(engine.is_done());
        assert_eq!(calls as u64, engine.steps_taken());
        assert_eq!(engine.values(), &[1, 3, 5, 8]);
    }

    #[test]
    fn test_cancellation_preserves_state() {
        let mut engine = SortStepper::new(vec![9, 7, 5, 3, 1], SortAlgorithm::Bubble);
        let mut remaining = 3usize;
        let outcome = Scheduler::immediate().run(
            &mut engine,
            |_, _| {},
            || {
                if remaining == 0 {
                    true
                } else {
                    remaining -= 1;
                    false
                }
            },
        );
        assert_eq!(outcome, RunOutcome::Cancelled);
        assert!(!engine.is_done());
        assert_eq!(engine.steps_taken(), 3);
    }

    #[test]
    fn test_stop_then_resume_matches_uninterrupted() {
        let input = vec![6, 2, 9, 4, 8, 1, 7, 3];

        let mut uninterrupted = SortStepper::new(input.clone(), SortAlgorithm::Quick);
        let expected = uninterrupted.run_to_completion();

        for cut in [1usize, 3, 7, 12] {
            let mut engine = SortStepper::new(input.clone(), SortAlgorithm::Quick);
            let mut collected = Vec::new();

            let mut budget = cut;
            let first = Scheduler::immediate().run(
                &mut engine,
                |emit, _| collected.extend(emit.copied()),
                || {
                    if budget == 0 {
                        true
                    } else {
                        budget -= 1;
                        false
                    }
                },
            );
            assert_eq!(first, RunOutcome::Cancelled);

            let second = Scheduler::immediate().run(
                &mut engine,
                |emit, _| collected.extend(emit.copied()),
                || false,
            );
            assert_eq!(second, RunOutcome::Completed);
            assert_eq!(collected, expected, "cut after {cut} steps");
        }
    }

    #[test]
    fn test_run_on_finished_engine_is_noop() {
        let mut engine = SortStepper::new(vec![1, 2], SortAlgorithm::Bubble);
        let _ = engine.run_to_completion();
        let steps_before = engine.steps_taken();

        let mut calls = 0usize;
        let outcome = Scheduler::immediate().run(&mut engine, |_, _| calls += 1, || false);
        assert_eq!(outcome, RunOutcome::Completed);
        assert_eq!(calls, 0);
        assert_eq!(engine.steps_taken(), steps_before);
    }

    #[test]
    fn test_cancel_before_first_step() {
        let mut engine = SortStepper::new(vec![3, 1, 2], SortAlgorithm::Insertion);
        let outcome = Scheduler::immediate().run(&mut engine, |_, _| {}, || true);
        assert_eq!(outcome, RunOutcome::Cancelled);
        assert_eq!(engine.steps_taken(), 0);
    }

    #[test]
    fn test_default_uses_default_speed() {
        let scheduler = Scheduler::default();
        assert_eq!(
            scheduler.delay(),
            delay_from_speed(crate::config::DEFAULT_SPEED)
        );
    }
}
