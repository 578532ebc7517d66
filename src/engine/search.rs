//! Search steppers: linear scan and binary search.
//!
//! A step is one element probe. The engine carries its outcome
//! explicitly: an absent or invalid target is a normal terminal state
//! of the visualization, not an error.

use serde::{Deserialize, Serialize};

use crate::engine::{StepEngine, StepOutcome};

/// Which search algorithm a [`SearchStepper`] runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchAlgorithm {
    /// Probe each index left to right.
    Linear,
    /// Halve a `[left, right]` window around the midpoint. Requires
    /// the input to be sorted ascending.
    Binary,
}

/// Terminal state of a finished search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchOutcome {
    /// Target located at this index.
    Found(usize),
    /// Every candidate exhausted without a match.
    NotFound,
    /// The target could not be parsed or was never supplied.
    InvalidTarget,
}

/// One probe: the index examined and whether it matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStep {
    /// Index probed.
    pub index: usize,
    /// Whether the probe matched the target.
    pub matched: bool,
}

/// Cursor state for the active algorithm.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
enum SearchState {
    Linear { cursor: usize },
    Binary { left: usize, right: usize },
}

/// Resumable search engine over an immutable array.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchStepper {
    values: Vec<i64>,
    target: Option<i64>,
    algorithm: SearchAlgorithm,
    state: SearchState,
    outcome: Option<SearchOutcome>,
    steps: u64,
    last_probe: Option<SearchStep>,
}

impl SearchStepper {
    /// Create a stepper for `algorithm` over `values`.
    ///
    /// `target` is `None` when the input could not be parsed; the
    /// engine is then terminal immediately with
    /// [`SearchOutcome::InvalidTarget`]. An empty array resolves to
    /// [`SearchOutcome::NotFound`] without any probes.
    #[must_use]
    pub fn new(values: Vec<i64>, target: Option<i64>, algorithm: SearchAlgorithm) -> Self {
        let n = values.len();
        let outcome = if target.is_none() {
            Some(SearchOutcome::InvalidTarget)
        } else if n == 0 {
            Some(SearchOutcome::NotFound)
        } else {
            None
        };

        let state = match algorithm {
            SearchAlgorithm::Linear => SearchState::Linear { cursor: 0 },
            SearchAlgorithm::Binary => SearchState::Binary {
                left: 0,
                right: n.saturating_sub(1),
            },
        };

        Self {
            values,
            target,
            algorithm,
            state,
            outcome,
            steps: 0,
            last_probe: None,
        }
    }

    /// The array being searched.
    #[must_use]
    pub fn values(&self) -> &[i64] {
        &self.values
    }

    /// The target value, if one was supplied.
    #[must_use]
    pub const fn target(&self) -> Option<i64> {
        self.target
    }

    /// The algorithm this stepper runs.
    #[must_use]
    pub const fn algorithm(&self) -> SearchAlgorithm {
        self.algorithm
    }

    /// Terminal outcome, once the search has finished.
    #[must_use]
    pub const fn outcome(&self) -> Option<SearchOutcome> {
        self.outcome
    }

    /// The most recent probe (the current highlight).
    #[must_use]
    pub const fn last_probe(&self) -> Option<SearchStep> {
        self.last_probe
    }

    /// The active `[left, right]` window for binary search; the full
    /// index range for linear search.
    #[must_use]
    pub fn window(&self) -> Option<(usize, usize)> {
        if self.outcome.is_some() && !matches!(self.outcome, Some(SearchOutcome::Found(_))) {
            return None;
        }
        match self.state {
            SearchState::Linear { cursor } => {
                Some((cursor.min(self.values.len().saturating_sub(1)), self.values.len().saturating_sub(1)))
            }
            SearchState::Binary { left, right } => Some((left, right)),
        }
    }
}

impl StepEngine for SearchStepper {
    type Emit = SearchStep;

    fn step_once(&mut self) -> StepOutcome<SearchStep> {
        if self.outcome.is_some() {
            return StepOutcome::finished();
        }
        // Both branches below have a target and a non-empty array.
        let Some(target) = self.target else {
            self.outcome = Some(SearchOutcome::InvalidTarget);
            return StepOutcome::finished();
        };

        let probe = match &mut self.state {
            SearchState::Linear { cursor } => {
                let index = *cursor;
                let matched = self.values[index] == target;
                if matched {
                    self.outcome = Some(SearchOutcome::Found(index));
                } else {
                    *cursor += 1;
                    if *cursor >= self.values.len() {
                        self.outcome = Some(SearchOutcome::NotFound);
                    }
                }
                SearchStep { index, matched }
            }
            SearchState::Binary { left, right } => {
                let index = *left + (*right - *left) / 2;
                let matched = self.values[index] == target;
                if matched {
                    self.outcome = Some(SearchOutcome::Found(index));
                } else if self.values[index] < target {
                    if index + 1 > *right {
                        self.outcome = Some(SearchOutcome::NotFound);
                    } else {
                        *left = index + 1;
                    }
                } else if index == 0 || index - 1 < *left {
                    self.outcome = Some(SearchOutcome::NotFound);
                } else {
                    *right = index - 1;
                }
                SearchStep { index, matched }
            }
        };

        self.steps += 1;
        self.last_probe = Some(probe);
        StepOutcome {
            emitted: Some(probe),
            done: self.outcome.is_some(),
        }
    }

    fn is_done(&self) -> bool {
        self.outcome.is_some()
    }

    fn steps_taken(&self) -> u64 {
        self.steps
    }
}
