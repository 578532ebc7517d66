//! Checkpointing for stop/resume and scrubbing.
//!
//! Engines serialize their complete state, so a checkpoint is a
//! snapshot of the full run at one step boundary. Every checkpoint
//! carries a blake3 hash; restoring verifies integrity before
//! deserializing, so a corrupted snapshot fails loudly instead of
//! resuming a subtly wrong run.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::engine::StepEngine;
use crate::error::{VizError, VizResult};

/// A verified snapshot of one engine at a step boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Step count at capture time.
    pub step: u64,
    /// Serialized engine state.
    pub data: Vec<u8>,
    /// Blake3 hash of `data` for integrity verification.
    pub hash: [u8; 32],
}

impl Checkpoint {
    /// Capture an engine's full state.
    ///
    /// # Errors
    ///
    /// Returns `VizError::Serialization` if encoding fails.
    pub fn capture<E>(engine: &E) -> VizResult<Self>
    where
        E: StepEngine + Serialize,
    {
        let data = bincode::serialize(engine)
            .map_err(|e| VizError::serialization(e.to_string()))?;
        let hash = blake3::hash(&data);

        Ok(Self {
            step: engine.steps_taken(),
            data,
            hash: *hash.as_bytes(),
        })
    }

    /// Rebuild the engine this checkpoint captured.
    ///
    /// # Errors
    ///
    /// Returns `VizError::CheckpointIntegrity` if the stored hash does
    /// not match the data, or `VizError::Serialization` if decoding
    /// fails.
    pub fn restore<E>(&self) -> VizResult<E>
    where
        E: DeserializeOwned,
    {
        let computed = blake3::hash(&self.data);
        if computed.as_bytes() != &self.hash {
            return Err(VizError::CheckpointIntegrity);
        }

        bincode::deserialize(&self.data).map_err(|e| VizError::serialization(e.to_string()))
    }

    /// Snapshot size in bytes.
    #[must_use]
    pub fn size(&self) -> usize {
        self.data.len()
    }
}

/// Periodic checkpoint store, keyed by step count.
///
/// Scrubbing back to step `s` restores the latest checkpoint at or
/// before `s` and replays forward from there.
#[derive(Debug, Default)]
pub struct CheckpointLog {
    checkpoints: BTreeMap<u64, Checkpoint>,
    interval: u64,
}

impl CheckpointLog {
    /// Log that captures every `interval` steps. An interval of zero
    /// captures every step.
    #[must_use]
    pub fn new(interval: u64) -> Self {
        Self {
            checkpoints: BTreeMap::new(),
            interval,
        }
    }

    /// Whether a checkpoint is due at this step.
    #[must_use]
    pub const fn should_checkpoint(&self, step: u64) -> bool {
        self.interval == 0 || step % self.interval == 0
    }

    /// Capture and store a checkpoint of `engine`.
    ///
    /// # Errors
    ///
    /// Returns `VizError::Serialization` if encoding fails.
    pub fn record<E>(&mut self, engine: &E) -> VizResult<()>
    where
        E: StepEngine + Serialize,
    {
        let checkpoint = Checkpoint::capture(engine)?;
        self.checkpoints.insert(checkpoint.step, checkpoint);
        Ok(())
    }

    /// Latest checkpoint at or before `step`.
    #[must_use]
    pub fn latest_at_or_before(&self, step: u64) -> Option<&Checkpoint> {
        self.checkpoints.range(..=step).next_back().map(|(_, c)| c)
    }

    /// Number of stored checkpoints.
    #[must_use]
    pub fn len(&self) -> usize {
        self.checkpoints.len()
    }

    /// Whether no checkpoints are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.checkpoints.is_empty()
    }

    /// Drop all stored checkpoints.
    pub fn clear(&mut self) {
        self.checkpoints.clear();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::engine::sort::{SortAlgorithm, SortStepper};
    use crate::engine::traversal::{GraphAlgorithm, GraphTraversal};
    use crate::engine::StepEngine;
    use crate::structure::graph::Graph;

    #[test]
    fn test_capture_restore_roundtrip() {
        let mut engine = SortStepper::new(vec![5, 3, 8, 1, 9], SortAlgorithm::Quick);
        for _ in 0..4 {
            let _ = engine.step_once();
        }

        let checkpoint = Checkpoint::capture(&engine).unwrap();
        assert_eq!(checkpoint.step, 4);

        let mut restored: SortStepper = checkpoint.restore().unwrap();
        assert_eq!(restored.values(), engine.values());

        let _ = engine.run_to_completion();
        let _ = restored.run_to_completion();
        assert_eq!(engine.values(), restored.values());
    }

    #[test]
    fn test_tampered_data_is_rejected() {
        let engine = SortStepper::new(vec![4, 2, 6], SortAlgorithm::Bubble);
        let mut checkpoint = Checkpoint::capture(&engine).unwrap();
        checkpoint.data[0] ^= 0xFF;

        let result: VizResult<SortStepper> = checkpoint.restore();
        assert!(matches!(result, Err(VizError::CheckpointIntegrity)));
    }

    #[test]
    fn test_tampered_hash_is_rejected() {
        let engine = SortStepper::new(vec![4, 2, 6], SortAlgorithm::Bubble);
        let mut checkpoint = Checkpoint::capture(&engine).unwrap();
        checkpoint.hash[0] ^= 0xFF;

        let result: VizResult<SortStepper> = checkpoint.restore();
        assert!(matches!(result, Err(VizError::CheckpointIntegrity)));
    }

    #[test]
    fn test_checkpoint_graph_traversal() {
        let graph = Graph::from_adjacency(vec![vec![1, 2], vec![2], vec![]], true).unwrap();
        let mut engine = GraphTraversal::new(graph, GraphAlgorithm::TopologicalSort);
        let _ = engine.step_once();

        let checkpoint = Checkpoint::capture(&engine).unwrap();
        let mut restored: GraphTraversal = checkpoint.restore().unwrap();

        assert_eq!(engine.run_to_completion(), restored.run_to_completion());
    }

    #[test]
    fn test_log_interval() {
        let log = CheckpointLog::new(5);
        assert!(log.should_checkpoint(0));
        assert!(!log.should_checkpoint(3));
        assert!(log.should_checkpoint(10));

        let every_step = CheckpointLog::new(0);
        assert!(every_step.should_checkpoint(7));
    }

    #[test]
    fn test_log_scrubbing() {
        let mut log = CheckpointLog::new(2);
        let mut engine = SortStepper::new(vec![9, 7, 5, 3, 1], SortAlgorithm::Bubble);

        log.record(&engine).unwrap();
        while !engine.is_done() {
            let _ = engine.step_once();
            if log.should_checkpoint(engine.steps_taken()) {
                log.record(&engine).unwrap();
            }
        }
        assert!(!log.is_empty());

        // Scrub back to step 3: the step-2 snapshot is the base.
        let base = log.latest_at_or_before(3).unwrap();
        assert_eq!(base.step, 2);

        let mut replayed: SortStepper = base.restore().unwrap();
        let _ = replayed.step_once();
        assert_eq!(replayed.steps_taken(), 3);
    }

    #[test]
    fn test_log_before_first_checkpoint() {
        let log = CheckpointLog::new(2);
        assert!(log.latest_at_or_before(100).is_none());
    }

    #[test]
    fn test_clear() {
        let mut log = CheckpointLog::new(1);
        let engine = SortStepper::new(vec![2, 1], SortAlgorithm::Bubble);
        log.record(&engine).unwrap();
        assert_eq!(log.len(), 1);
        log.clear();
        assert!(log.is_empty());
    }
}
