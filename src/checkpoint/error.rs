//! Checkpoint error types.

use thiserror::Error;

/// Errors raised while saving or restoring animator playback.
#[derive(Debug, Error)]
pub enum CheckpointError {
    #[error("failed to encode checkpoint: {0}")]
    Encode(String),

    #[error("failed to decode checkpoint: {0}")]
    Decode(String),

    #[error("unsupported checkpoint version {found} (expected {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// The checkpoint refers to states or frames the graph does not have
    #[error("checkpoint does not match the animation graph: {0}")]
    IncompatibleGraph(String),
}
