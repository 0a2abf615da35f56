//! Builder API for ergonomic animator construction.
//!
//! This module provides fluent builders for state nodes and animators, plus
//! shorthands for the two most common kinds of transition.

pub mod animator;
pub mod error;
pub mod node;

pub use animator::AnimatorBuilder;
pub use error::BuildError;
pub use node::StateNodeBuilder;

use crate::core::{AnimationError, Predicate, StateGraph, StateId};

/// Add an unconditional transition from `from` to `to`.
///
/// # Example
///
/// ```
/// use sprite_animator::builder::connect;
/// use sprite_animator::core::{StateGraph, StateNode};
///
/// let mut graph: StateGraph<()> = StateGraph::new();
/// let land = graph.add_state(StateNode::named("land"));
/// let idle = graph.add_state(StateNode::named("idle"));
///
/// connect(&mut graph, land, idle).unwrap();
/// assert_eq!(graph.try_find_valid_transition(land).unwrap(), Some(idle));
/// ```
pub fn connect<T>(
    graph: &mut StateGraph<T>,
    from: StateId,
    to: StateId,
) -> Result<(), AnimationError> {
    graph.insert_transition(from, to, Vec::<Predicate>::new())
}

/// Add a transition guarded by a single closure.
///
/// # Example
///
/// ```
/// use sprite_animator::builder::connect_when;
/// use sprite_animator::core::{StateGraph, StateNode};
///
/// let mut graph: StateGraph<()> = StateGraph::new();
/// let idle = graph.add_state(StateNode::named("idle"));
/// let fall = graph.add_state(StateNode::named("fall"));
///
/// connect_when(&mut graph, idle, fall, || false).unwrap();
/// assert_eq!(graph.try_find_valid_transition(idle).unwrap(), None);
/// ```
pub fn connect_when<T, F>(
    graph: &mut StateGraph<T>,
    from: StateId,
    to: StateId,
    condition: F,
) -> Result<(), AnimationError>
where
    F: Fn() -> bool + 'static,
{
    graph.insert_transition(from, to, vec![Predicate::new(condition)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::StateNode;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn connect_adds_unconditional_transition() {
        let mut graph: StateGraph<u8> = StateGraph::new();
        let a = graph.add_state(StateNode::new());
        let b = graph.add_state(StateNode::new());

        connect(&mut graph, a, b).unwrap();

        let node = graph.state(a).unwrap();
        assert!(node.transitions()[0].is_unconditional());
        assert_eq!(node.try_find_valid_transition(), Some(b));
    }

    #[test]
    fn connect_when_respects_guard() {
        let mut graph: StateGraph<u8> = StateGraph::new();
        let a = graph.add_state(StateNode::new());
        let b = graph.add_state(StateNode::new());
        let flag = Rc::new(Cell::new(false));
        let guard = Rc::clone(&flag);

        connect_when(&mut graph, a, b, move || guard.get()).unwrap();

        assert_eq!(graph.try_find_valid_transition(a).unwrap(), None);
        flag.set(true);
        assert_eq!(graph.try_find_valid_transition(a).unwrap(), Some(b));
    }

    #[test]
    fn connect_rejects_unknown_states() {
        let mut graph: StateGraph<u8> = StateGraph::new();
        let a = graph.add_state(StateNode::new());

        assert!(connect(&mut graph, a, StateId(3)).is_err());
        assert!(connect_when(&mut graph, StateId(3), a, || true).is_err());
    }
}
