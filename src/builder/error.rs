//! Build errors for animator and state builders.

use crate::core::AnimationError;
use thiserror::Error;

/// Errors that can occur when building an animator.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Animation graph not specified. Call .graph(graph) before .build()")]
    MissingGraph,

    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error(transparent)]
    Animation(#[from] AnimationError),
}
