//! Sprite Animator: a predicate-driven animation state machine
//!
//! Each sprite owns an [`Animator`] that plays the frames of its current
//! state and, on every tick, asks that state whether one of its outgoing
//! transitions is satisfied. Guards are plain closures over gameplay state,
//! so the machine itself stays free of global engine state.
//!
//! # Core Concepts
//!
//! - **Frame**: one still image and how long it is shown
//! - **Predicate**: a zero-argument guard condition
//! - **State node**: frames, a loop flag and ordered, guarded transitions
//! - **Animator**: the driver that ticks playback and applies transitions
//!
//! Transitions are checked in insertion order and the first one whose
//! guards all hold is taken; ordering is the priority mechanism.
//!
//! # Example
//!
//! ```rust
//! use sprite_animator::animator::{Animator, TickResult};
//! use sprite_animator::builder::{connect, StateNodeBuilder};
//! use sprite_animator::core::{Predicate, StateGraph};
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use std::time::Duration;
//!
//! let ms = Duration::from_millis;
//! let attacking = Rc::new(Cell::new(false));
//!
//! let mut graph = StateGraph::new();
//! let idle = graph.add_state(
//!     StateNodeBuilder::new()
//!         .name("idle")
//!         .frame("idle_0", ms(200))
//!         .frame("idle_1", ms(200))
//!         .looping(true)
//!         .build(),
//! );
//! let attack = graph.add_state(
//!     StateNodeBuilder::new()
//!         .name("attack")
//!         .frame("attack_0", ms(50))
//!         .frame("attack_1", ms(50))
//!         .build(),
//! );
//! graph
//!     .insert_transition(idle, attack, vec![Predicate::from_flag(Rc::clone(&attacking))])
//!     .unwrap();
//! connect(&mut graph, attack, idle).unwrap();
//!
//! let mut animator = Animator::new(graph, idle).unwrap();
//! animator.tick(ms(250));
//! assert_eq!(animator.current_frame().map(|f| *f.region()), Some("idle_1"));
//!
//! attacking.set(true);
//! assert!(matches!(animator.tick(ms(16)), TickResult::Transitioned { .. }));
//! assert_eq!(animator.current_state(), attack);
//! ```

pub mod animator;
pub mod builder;
pub mod checkpoint;
pub mod core;

// Re-export commonly used types
pub use animator::{Animator, AnimatorConfig, PlayState, TickResult};
pub use builder::{AnimatorBuilder, BuildError, StateNodeBuilder};
pub use checkpoint::{AnimatorCheckpoint, CheckpointError};
pub use crate::core::{
    AnimationError, Frame, Predicate, StateGraph, StateId, StateNode, Transition,
};
