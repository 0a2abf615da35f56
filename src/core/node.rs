//! Animation state nodes and their outgoing transitions.
//!
//! A [`StateNode`] bundles a frame sequence, a loop flag, and an ordered list
//! of [`Transition`]s. Transitions point at other nodes through [`StateId`]
//! handles into a [`StateGraph`](super::StateGraph), so any node may target
//! any other node, itself included, without ownership cycles.

use super::error::AnimationError;
use super::frame::Frame;
use super::predicate::Predicate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Stable handle to a state node inside a [`StateGraph`](super::StateGraph).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateId(pub(crate) usize);

impl StateId {
    /// Position of the node in its graph.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A guarded edge to another state.
///
/// The predicate list never contains absent entries; an empty list makes the
/// transition unconditional.
#[derive(Debug)]
pub struct Transition {
    target: StateId,
    predicates: Vec<Predicate>,
}

impl Transition {
    /// The state this transition leads to.
    pub fn target(&self) -> StateId {
        self.target
    }

    /// The guard conditions, in evaluation order.
    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    /// True when the transition has no guards at all.
    pub fn is_unconditional(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Evaluate the guards left to right, stopping at the first `false`.
    pub fn is_satisfied(&self) -> bool {
        self.predicates.iter().all(Predicate::evaluate)
    }
}

/// One animation state.
///
/// # Example
///
/// ```rust
/// use sprite_animator::core::{Frame, Predicate, StateGraph, StateNode};
/// use std::time::Duration;
///
/// let mut graph = StateGraph::new();
/// let idle = graph.add_state(StateNode::named("idle"));
/// let run = graph.add_state(StateNode::named("run"));
///
/// let node = graph.state_mut(idle).unwrap();
/// node.set_frames(vec![Frame::new(0u32, Duration::from_millis(100))]);
/// node.insert_transition(run, vec![Predicate::new(|| true)]);
///
/// assert_eq!(node.try_find_valid_transition(), Some(run));
/// ```
#[derive(Debug)]
pub struct StateNode<T> {
    name: Option<String>,
    frames: Vec<Frame<T>>,
    should_loop: bool,
    transitions: Vec<Transition>,
}

impl<T> Default for StateNode<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> StateNode<T> {
    /// Create an empty, non-looping state with no frames and no transitions.
    pub fn new() -> Self {
        Self {
            name: None,
            frames: Vec::new(),
            should_loop: false,
            transitions: Vec::new(),
        }
    }

    /// Create an empty state carrying a diagnostic name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::new()
        }
    }

    /// Diagnostic name, if one was given.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub(crate) fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    pub(crate) fn label(&self) -> &str {
        self.name.as_deref().unwrap_or("<unnamed>")
    }

    /// The frame sequence, in playback order.
    pub fn frames(&self) -> &[Frame<T>] {
        &self.frames
    }

    /// Replace the frame sequence.
    pub fn set_frames(&mut self, frames: Vec<Frame<T>>) {
        self.frames = frames;
    }

    /// Whether playback restarts after the last frame.
    ///
    /// The node only stores the flag; the animator applies it.
    pub fn should_loop(&self) -> bool {
        self.should_loop
    }

    /// Set whether playback restarts after the last frame.
    pub fn set_should_loop(&mut self, value: bool) {
        self.should_loop = value;
    }

    /// Sum of all frame durations, saturating at `Duration::MAX`.
    pub fn total_duration(&self) -> Duration {
        self.frames
            .iter()
            .fold(Duration::ZERO, |total, frame| total.saturating_add(frame.duration()))
    }

    /// Append a transition to `target` guarded by `conditions`.
    ///
    /// An absent target makes this a no-op. Absent entries in `conditions`
    /// are discarded before storing; if nothing remains the transition is
    /// unconditional. Transitions are checked in the order they were
    /// inserted, so earlier insertions take priority.
    pub fn insert_transition<I, P>(&mut self, target: impl Into<Option<StateId>>, conditions: I)
    where
        I: IntoIterator<Item = P>,
        P: Into<Option<Predicate>>,
    {
        let Some(target) = target.into() else {
            tracing::warn!(state = self.label(), "ignoring transition without a target state");
            return;
        };

        let mut discarded = 0usize;
        let predicates: Vec<Predicate> = conditions
            .into_iter()
            .filter_map(|condition| {
                let condition = condition.into();
                if condition.is_none() {
                    discarded += 1;
                }
                condition
            })
            .collect();

        if discarded > 0 {
            tracing::debug!(
                state = self.label(),
                %target,
                discarded,
                "discarded absent transition predicates"
            );
        }

        self.transitions.push(Transition { target, predicates });
    }

    /// Remove the transition at `index`, shifting later ones down.
    pub fn remove_transition_at(&mut self, index: usize) -> Result<Transition, AnimationError> {
        if index >= self.transitions.len() {
            return Err(AnimationError::OutOfRange {
                index,
                len: self.transitions.len(),
            });
        }
        Ok(self.transitions.remove(index))
    }

    /// Stored transitions, in evaluation order.
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    /// Number of stored transitions.
    pub fn transition_count(&self) -> usize {
        self.transitions.len()
    }

    /// Find the first transition whose guards all hold.
    ///
    /// Transitions are scanned in insertion order and the first satisfied
    /// one wins. Within a transition, guards short-circuit on the first
    /// `false`. `None` means "stay in this state".
    ///
    /// The target is returned as stored. The scan stops at the first
    /// satisfied transition even if its target is not part of the graph the
    /// node lives in; [`Animator::tick`](crate::Animator::tick) then holds the
    /// current state rather than trying later transitions.
    pub fn try_find_valid_transition(&self) -> Option<StateId> {
        self.transitions
            .iter()
            .find(|transition| transition.is_satisfied())
            .map(Transition::target)
    }
}
