//! Sort steppers: bubble, selection, insertion, merge, quick.
//!
//! A step is one comparison/swap or one merge placement. Bubble,
//! selection, and insertion are naturally iterative and carry plain
//! cursors. Merge and quick sort are naturally recursive; recursion is
//! flattened into an explicit stack of tagged pending operations so
//! each `step_once` performs one primitive and yields — the call stack
//! never holds algorithm state across steps.

use serde::{Deserialize, Serialize};

use crate::engine::{StepEngine, StepOutcome};

/// Which sorting algorithm a [`SortStepper`] runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortAlgorithm {
    /// Adjacent compare-and-swap passes.
    Bubble,
    /// Scan for the minimum, then swap it into place.
    Selection,
    /// Sink each element into the sorted prefix.
    Insertion,
    /// Top-down merge sort with an explicit split/merge stack.
    Merge,
    /// Lomuto-partition quicksort with an explicit range stack.
    Quick,
}

/// One primitive sorting operation, named by the indices it touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortStep {
    /// Compared two elements; no exchange.
    Compare {
        /// First index.
        i: usize,
        /// Second index.
        j: usize,
    },
    /// Compared (where applicable) and exchanged two elements.
    Swap {
        /// First index.
        i: usize,
        /// Second index.
        j: usize,
    },
    /// Wrote one element of a merge run back into the array.
    Place {
        /// Destination index.
        index: usize,
        /// Value placed.
        value: i64,
    },
}

impl SortStep {
    /// Indices to highlight for this step.
    #[must_use]
    pub const fn highlight(&self) -> (usize, usize) {
        match *self {
            Self::Compare { i, j } | Self::Swap { i, j } => (i, j),
            Self::Place { index, .. } => (index, index),
        }
    }
}

/// Pending merge-sort operation. Ranges are half-open.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
enum MergeOp {
    /// Split `[lo, hi)` and queue the merge of its halves.
    Split { lo: usize, hi: usize },
    /// Merge the sorted halves `[lo, mid)` and `[mid, hi)`.
    Merge { lo: usize, mid: usize, hi: usize },
}

/// An in-progress merge: both halves buffered, one placement per step.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct MergeRun {
    left: Vec<i64>,
    right: Vec<i64>,
    li: usize,
    ri: usize,
    dest: usize,
}

impl MergeRun {
    fn finished(&self) -> bool {
        self.li >= self.left.len() && self.ri >= self.right.len()
    }
}

/// An in-progress Lomuto partition of `[lo, hi)` with pivot `arr[hi - 1]`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct PartitionRun {
    lo: usize,
    hi: usize,
    /// Boundary of the below-pivot region.
    store: usize,
    /// Scan cursor over `[lo, hi - 1)`.
    scan: usize,
}

/// Algorithm-specific cursors and operation stacks.
#[derive(Debug, Clone, Serialize, Deserialize)]
enum SortState {
    Bubble {
        pass: usize,
        j: usize,
    },
    Selection {
        i: usize,
        j: usize,
        min_idx: usize,
    },
    Insertion {
        i: usize,
        j: usize,
    },
    Merge {
        ops: Vec<MergeOp>,
        run: Option<MergeRun>,
    },
    Quick {
        ops: Vec<(usize, usize)>,
        run: Option<PartitionRun>,
    },
}

/// Resumable sorting engine over a private copy of the input values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SortStepper {
    values: Vec<i64>,
    algorithm: SortAlgorithm,
    state: SortState,
    steps: u64,
    done: bool,
    last_step: Option<SortStep>,
}

impl SortStepper {
    /// Create a stepper for `algorithm` over `values`.
    #[must_use]
    pub fn new(values: Vec<i64>, algorithm: SortAlgorithm) -> Self {
        let n = values.len();
        let state = match algorithm {
            SortAlgorithm::Bubble => SortState::Bubble { pass: 0, j: 0 },
            SortAlgorithm::Selection => SortState::Selection {
                i: 0,
                j: 1,
                min_idx: 0,
            },
            SortAlgorithm::Insertion => SortState::Insertion { i: 1, j: 1 },
            SortAlgorithm::Merge => SortState::Merge {
                ops: if n > 1 {
                    vec![MergeOp::Split { lo: 0, hi: n }]
                } else {
                    Vec::new()
                },
                run: None,
            },
            SortAlgorithm::Quick => SortState::Quick {
                ops: if n > 1 { vec![(0, n)] } else { Vec::new() },
                run: None,
            },
        };

        let mut stepper = Self {
            values,
            algorithm,
            state,
            steps: 0,
            done: false,
            last_step: None,
        };
        stepper.done = !stepper.has_work();
        stepper
    }

    /// Current array contents.
    #[must_use]
    pub fn values(&self) -> &[i64] {
        &self.values
    }

    /// The algorithm this stepper runs.
    #[must_use]
    pub const fn algorithm(&self) -> SortAlgorithm {
        self.algorithm
    }

    /// The last primitive operation performed (the current highlight).
    #[must_use]
    pub const fn last_step(&self) -> Option<SortStep> {
        self.last_step
    }

    /// Whether the array is currently in non-decreasing order.
    #[must_use]
    pub fn is_sorted(&self) -> bool {
        self.values.windows(2).all(|w| w[0] <= w[1])
    }

    /// Whether any primitive operation remains; normalizes cursors and
    /// drains bookkeeping (splits, trivial ranges) in the process.
    fn has_work(&mut self) -> bool {
        let n = self.values.len();
        match &mut self.state {
            SortState::Bubble { pass, j } => {
                // Skip exhausted passes until a comparison is possible.
                while *pass < n && *j >= n.saturating_sub(*pass + 1) {
                    *j = 0;
                    *pass += 1;
                }
                *pass < n
            }
            SortState::Selection { i, j, min_idx } => {
                // A pass with nothing left to compare and the minimum
                // already in place needs no swap step.
                while *i + 1 < n && *j >= n && *min_idx == *i {
                    *i += 1;
                    *min_idx = *i;
                    *j = *i + 1;
                }
                *i + 1 < n
            }
            SortState::Insertion { i, .. } => *i < n,
            SortState::Merge { ops, run } => {
                loop {
                    if run.is_some() {
                        return true;
                    }
                    match ops.pop() {
                        Some(MergeOp::Split { lo, hi }) => {
                            if hi - lo > 1 {
                                let mid = lo + (hi - lo) / 2;
                                ops.push(MergeOp::Merge { lo, mid, hi });
                                ops.push(MergeOp::Split { lo: mid, hi });
                                ops.push(MergeOp::Split { lo, hi: mid });
                            }
                        }
                        Some(MergeOp::Merge { lo, mid, hi }) => {
                            *run = Some(MergeRun {
                                left: self.values[lo..mid].to_vec(),
                                right: self.values[mid..hi].to_vec(),
                                li: 0,
                                ri: 0,
                                dest: lo,
                            });
                        }
                        None => return false,
                    }
                }
            }
            SortState::Quick { ops, run } => {
                loop {
                    if run.is_some() {
                        return true;
                    }
                    match ops.pop() {
                        Some((lo, hi)) => {
                            if hi - lo > 1 {
                                *run = Some(PartitionRun {
                                    lo,
                                    hi,
                                    store: lo,
                                    scan: lo,
                                });
                            }
                        }
                        None => return false,
                    }
                }
            }
        }
    }

    fn bubble_step(values: &mut [i64], j: &mut usize) -> SortStep {
        let idx = *j;
        *j += 1;

        if values[idx] > values[idx + 1] {
            values.swap(idx, idx + 1);
            SortStep::Swap { i: idx, j: idx + 1 }
        } else {
            SortStep::Compare { i: idx, j: idx + 1 }
        }
    }

    fn selection_step(
        values: &mut [i64],
        i: &mut usize,
        j: &mut usize,
        min_idx: &mut usize,
    ) -> SortStep {
        if *j < values.len() {
            let (a, b) = (*j, *min_idx);
            if values[a] < values[b] {
                *min_idx = a;
            }
            *j += 1;
            return SortStep::Compare { i: a, j: b };
        }

        // Scan finished: one swap puts the minimum at the boundary.
        let (a, b) = (*i, *min_idx);
        values.swap(a, b);
        *i += 1;
        *min_idx = *i;
        *j = *i + 1;
        SortStep::Swap { i: a, j: b }
    }

    fn insertion_step(values: &mut [i64], i: &mut usize, j: &mut usize) -> SortStep {
        let idx = *j;
        if values[idx - 1] > values[idx] {
            values.swap(idx - 1, idx);
            *j -= 1;
            if *j == 0 {
                // Sunk to the front; move to the next prefix.
                *i += 1;
                *j = *i;
            }
            SortStep::Swap { i: idx - 1, j: idx }
        } else {
            // Element settled; move to the next prefix.
            *i += 1;
            *j = *i;
            SortStep::Compare { i: idx - 1, j: idx }
        }
    }

    fn merge_step(values: &mut [i64], run: &mut Option<MergeRun>) -> Option<SortStep> {
        let active = run.as_mut()?;

        let take_left = match (active.left.get(active.li), active.right.get(active.ri)) {
            (Some(l), Some(r)) => l <= r,
            (Some(_), None) => true,
            (None, Some(_) | None) => false,
        };

        let value = if take_left {
            let v = active.left[active.li];
            active.li += 1;
            v
        } else {
            let v = active.right[active.ri];
            active.ri += 1;
            v
        };

        let index = active.dest;
        values[index] = value;
        active.dest += 1;

        if active.finished() {
            *run = None;
        }
        Some(SortStep::Place { index, value })
    }

    fn quick_step(
        values: &mut [i64],
        ops: &mut Vec<(usize, usize)>,
        run: &mut Option<PartitionRun>,
    ) -> Option<SortStep> {
        let active = run.as_mut()?;

        let pivot_idx = active.hi - 1;
        if active.scan < pivot_idx {
            let idx = active.scan;
            active.scan += 1;
            if values[idx] < values[pivot_idx] {
                let store = active.store;
                active.store += 1;
                if store != idx {
                    values.swap(store, idx);
                    return Some(SortStep::Swap { i: store, j: idx });
                }
            }
            return Some(SortStep::Compare { i: idx, j: pivot_idx });
        }

        // Scan complete: settle the pivot and queue the sub-ranges.
        let store = active.store;
        let (lo, hi) = (active.lo, active.hi);
        *run = None;
        ops.push((store + 1, hi));
        ops.push((lo, store));

        if store != pivot_idx {
            values.swap(store, pivot_idx);
            return Some(SortStep::Swap {
                i: store,
                j: pivot_idx,
            });
        }
        // Pivot already in place: pure bookkeeping, no primitive op.
        None
    }
}

impl StepEngine for SortStepper {
    type Emit = SortStep;

    fn step_once(&mut self) -> StepOutcome<SortStep> {
        if self.done {
            return StepOutcome::finished();
        }

        loop {
            if !self.has_work() {
                self.done = true;
                self.last_step = None;
                return StepOutcome::finished();
            }

            let values = &mut self.values;
            let step = match &mut self.state {
                SortState::Bubble { j, .. } => Some(Self::bubble_step(values, j)),
                SortState::Selection { i, j, min_idx } => {
                    Some(Self::selection_step(values, i, j, min_idx))
                }
                SortState::Insertion { i, j } => Some(Self::insertion_step(values, i, j)),
                SortState::Merge { run, .. } => Self::merge_step(values, run),
                SortState::Quick { ops, run } => Self::quick_step(values, ops, run),
            };

            if let Some(step) = step {
                self.steps += 1;
                self.last_step = Some(step);
                if !self.has_work() {
                    self.done = true;
                }
                return StepOutcome {
                    emitted: Some(step),
                    done: self.done,
                };
            }
            // Bookkeeping only (e.g. a pivot that was already in
            // place); keep going until a primitive op happens.
        }
    }

    fn is_done(&self) -> bool {
        self.done
    }

    fn steps_taken(&self) -> u64 {
        self.steps
    }
}
