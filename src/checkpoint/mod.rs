//! Checkpoint and resume of animator playback.
//!
//! A checkpoint captures where an animator is (state, frame, time on the
//! frame, play state, history), not the animation graph itself. Predicates
//! are closures and cannot be serialized, so the graph is rebuilt by the
//! host and the checkpoint is resumed on top of it.

use crate::animator::{Animator, AnimatorConfig, PlayState};
use crate::core::{StateGraph, StateId, TransitionHistory};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable snapshot of an animator's playback cursor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnimatorCheckpoint {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: String,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    pub initial_state: StateId,
    pub current_state: StateId,
    pub frame_index: usize,

    /// Time already spent on the current frame
    pub elapsed: Duration,

    pub finished: bool,
    pub play_state: PlayState,
    pub tick_count: u64,
    pub history: TransitionHistory,
}

impl AnimatorCheckpoint {
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string(self).map_err(|e| CheckpointError::Encode(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        let checkpoint: Self = serde_json::from_str(json)
            .map_err(|e| CheckpointError::Decode(e.to_string()))?;
        checkpoint.check_version()?;
        Ok(checkpoint)
    }

    pub fn to_binary(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::Encode(e.to_string()))
    }

    pub fn from_binary(bytes: &[u8]) -> Result<Self, CheckpointError> {
        let checkpoint: Self = bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::Decode(e.to_string()))?;
        checkpoint.check_version()?;
        Ok(checkpoint)
    }

    fn check_version(&self) -> Result<(), CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }
        Ok(())
    }

    /// Make sure the checkpoint can be applied to `graph`.
    fn validate<T>(&self, graph: &StateGraph<T>) -> Result<(), CheckpointError> {
        self.check_version()?;

        for (label, id) in [("initial", self.initial_state), ("current", self.current_state)] {
            if !graph.contains(id) {
                return Err(CheckpointError::IncompatibleGraph(format!(
                    "{label} state {id} is not in the graph"
                )));
            }
        }

        let frame_count = graph
            .state(self.current_state)
            .map(|node| node.frames().len())
            .unwrap_or(0);
        let frame_ok = if frame_count == 0 {
            self.frame_index == 0
        } else {
            self.frame_index < frame_count
        };
        if !frame_ok {
            return Err(CheckpointError::IncompatibleGraph(format!(
                "frame index {} out of range for state {} with {} frames",
                self.frame_index, self.current_state, frame_count
            )));
        }
        Ok(())
    }
}

impl<T> Animator<T> {
    /// Capture the current playback position.
    pub fn checkpoint(&self) -> AnimatorCheckpoint {
        AnimatorCheckpoint {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            initial_state: self.initial,
            current_state: self.current,
            frame_index: self.frame_index,
            elapsed: self.elapsed,
            finished: self.finished,
            play_state: self.play_state,
            tick_count: self.tick_count,
            history: self.history.clone(),
        }
    }

    /// Rebuild an animator on `graph` at the position stored in `checkpoint`.
    pub fn resume(
        graph: StateGraph<T>,
        checkpoint: AnimatorCheckpoint,
        config: AnimatorConfig,
    ) -> Result<Self, CheckpointError> {
        checkpoint.validate(&graph)?;
        tracing::debug!(
            checkpoint = %checkpoint.id,
            state = %checkpoint.current_state,
            frame = checkpoint.frame_index,
            "resuming animator from checkpoint"
        );

        Ok(Self {
            graph,
            initial: checkpoint.initial_state,
            current: checkpoint.current_state,
            frame_index: checkpoint.frame_index,
            elapsed: checkpoint.elapsed,
            finished: checkpoint.finished,
            play_state: checkpoint.play_state,
            tick_count: checkpoint.tick_count,
            history: checkpoint.history,
            config,
        })
    }
}
