//! Builder for constructing animators.

use crate::animator::{Animator, AnimatorConfig};
use crate::builder::error::BuildError;
use crate::core::{StateGraph, StateId};

/// Builder for an [`Animator`] with a fluent API.
pub struct AnimatorBuilder<T> {
    graph: Option<StateGraph<T>>,
    initial: Option<StateId>,
    config: AnimatorConfig,
}

impl<T> AnimatorBuilder<T> {
    pub fn new() -> Self {
        Self {
            graph: None,
            initial: None,
            config: AnimatorConfig::default(),
        }
    }

    /// Set the animation graph (required).
    pub fn graph(mut self, graph: StateGraph<T>) -> Self {
        self.graph = Some(graph);
        self
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: StateId) -> Self {
        self.initial = Some(state);
        self
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: AnimatorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn history_limit(mut self, limit: Option<usize>) -> Self {
        self.config.history_limit = limit;
        self
    }

    pub fn playback_speed(mut self, speed: f32) -> Self {
        self.config.playback_speed = speed;
        self
    }

    pub fn autoplay(mut self, autoplay: bool) -> Self {
        self.config.autoplay = autoplay;
        self
    }

    /// Build the animator.
    /// Returns an error if required fields are missing or the initial state
    /// is not in the graph.
    pub fn build(self) -> Result<Animator<T>, BuildError> {
        let graph = self.graph.ok_or(BuildError::MissingGraph)?;
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;
        Ok(Animator::with_config(graph, initial, self.config)?)
    }
}

impl<T> Default for AnimatorBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
