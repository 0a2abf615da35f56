//! Core error types.

use super::node::StateId;
use thiserror::Error;

/// Errors raised while authoring or driving an animation graph.
///
/// Both variants are recoverable: the operation that produced them
/// leaves the graph exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnimationError {
    #[error("transition index {index} out of range (state has {len} transitions)")]
    OutOfRange { index: usize, len: usize },

    #[error("unknown state {id}")]
    UnknownState { id: StateId },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_message_names_index_and_len() {
        let err = AnimationError::OutOfRange { index: 4, len: 2 };
        assert_eq!(
            err.to_string(),
            "transition index 4 out of range (state has 2 transitions)"
        );
    }

    #[test]
    fn unknown_state_message_names_handle() {
        let err = AnimationError::UnknownState { id: StateId(7) };
        assert_eq!(err.to_string(), "unknown state #7");
    }
}
