//! Core animation graph types.
//!
//! This module contains the data side of the state machine:
//! - Frames, the per-state playback content
//! - Predicates, the guard conditions on transitions
//! - State nodes and the arena graph that links them
//! - Transition history records
//!
//! Nothing here advances time; that is the animator's job.

mod error;
mod frame;
mod graph;
mod history;
mod node;
mod predicate;

pub use error::AnimationError;
pub use frame::Frame;
pub use graph::StateGraph;
pub use history::{TransitionHistory, TransitionRecord};
pub use node::{StateId, StateNode, Transition};
pub use predicate::Predicate;
