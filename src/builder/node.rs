//! Builder for constructing state nodes.

use crate::core::{Frame, StateNode};
use std::time::Duration;

/// Fluent construction of a [`StateNode`].
///
/// Transitions are not set here: they need target handles, which only
/// exist once the node has been added to a graph.
pub struct StateNodeBuilder<T> {
    name: Option<String>,
    frames: Vec<Frame<T>>,
    looping: bool,
}

impl<T> StateNodeBuilder<T> {
    pub fn new() -> Self {
        Self {
            name: None,
            frames: Vec::new(),
            looping: false,
        }
    }

    /// Set a diagnostic name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Append one frame.
    pub fn frame(mut self, region: T, duration: Duration) -> Self {
        self.frames.push(Frame::new(region, duration));
        self
    }

    /// Append several frames.
    pub fn frames(mut self, frames: impl IntoIterator<Item = Frame<T>>) -> Self {
        self.frames.extend(frames);
        self
    }

    pub fn looping(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    pub fn build(self) -> StateNode<T> {
        let mut node = StateNode::new();
        node.set_name(self.name);
        node.set_frames(self.frames);
        node.set_should_loop(self.looping);
        node
    }
}

impl<T> Default for StateNodeBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
