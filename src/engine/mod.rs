//! Step engines: resumable algorithm execution.
//!
//! Each engine encapsulates one algorithm's step function as a
//! resumable unit of work. A call to [`StepEngine::step_once`]
//! performs exactly one primitive operation (one comparison/swap, one
//! emitted node, one merge placement) and returns control, so a paced
//! loop can interleave delays and redraws between steps.
//!
//! Engines own their traversal state and serialize it in full; a
//! stopped engine resumes from the exact state with no lost or
//! duplicated emissions.

pub mod rng;
pub mod search;
pub mod sort;
pub mod traversal;
pub mod tree_walk;

use std::fmt::Debug;

pub use rng::VizRng;
pub use search::{SearchAlgorithm, SearchOutcome, SearchStep, SearchStepper};
pub use sort::{SortAlgorithm, SortStep, SortStepper};
pub use traversal::{GraphAlgorithm, GraphTraversal, TraversalCompletion};
pub use tree_walk::{TreeOrder, TreeTraversal};

/// Result of a single step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepOutcome<E> {
    /// What this step produced (a node id, a comparison, ...), if anything.
    pub emitted: Option<E>,
    /// True when the algorithm has reached a terminal state.
    pub done: bool,
}

impl<E> StepOutcome<E> {
    /// A step that emitted a unit of progress.
    #[must_use]
    pub const fn emitted(value: E) -> Self {
        Self {
            emitted: Some(value),
            done: false,
        }
    }

    /// The terminal step; nothing further will be emitted.
    #[must_use]
    pub const fn finished() -> Self {
        Self {
            emitted: None,
            done: true,
        }
    }
}

/// A resumable algorithm stepper.
///
/// `step_once` is synchronous and never blocks; suspension between
/// steps is the scheduler's job. Calling `step_once` on a finished
/// engine is a no-op that reports `done`.
pub trait StepEngine {
    /// Unit of progress emitted by one step.
    type Emit: Clone + Debug;

    /// Advance the algorithm by exactly one primitive operation.
    fn step_once(&mut self) -> StepOutcome<Self::Emit>;

    /// Whether the algorithm has reached a terminal state.
    fn is_done(&self) -> bool;

    /// Number of steps taken so far.
    fn steps_taken(&self) -> u64;

    /// Drive the engine to completion, collecting every emission.
    ///
    /// Equivalent to a scheduler run with zero delay and no
    /// cancellation; used by tests and headless callers.
    fn run_to_completion(&mut self) -> Vec<Self::Emit> {
        let mut emissions = Vec::new();
        while !self.is_done() {
            let outcome = self.step_once();
            if let Some(e) = outcome.emitted {
                emissions.push(e);
            }
            if outcome.done {
                break;
            }
        }
        emissions
    }
}
