//! Per-tick outcomes and playback state.

use crate::core::StateId;
use serde::{Deserialize, Serialize};

/// Whether the animator advances on `tick`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayState {
    Playing,
    /// Cursor kept where it is
    Paused,
    /// Cursor rewound to the first frame
    Stopped,
}

/// Result of a single [`Animator::tick`](super::Animator::tick).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickResult {
    /// Not playing; nothing advanced and no transition was evaluated
    Idle,

    /// Still in the same state
    Playing {
        frame_index: usize,
        frame_changed: bool,
        wrapped: bool,
    },

    /// A non-looping state has reached its last frame and is holding it
    Holding { frame_index: usize },

    /// Moved to a new state; playback restarted at its first frame
    Transitioned { from: StateId, to: StateId },
}

impl TickResult {
    pub fn is_transition(&self) -> bool {
        matches!(self, Self::Transitioned { .. })
    }
}
