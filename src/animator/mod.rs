//! Runtime side of the state machine.
//!
//! The [`Animator`] owns an animation graph and a playback cursor. Each
//! [`tick`](Animator::tick) advances the cursor, asks the current state for
//! a valid transition, and swaps state when one is found.

mod config;
mod machine;
mod tick;

pub use config::{AnimatorConfig, DEFAULT_HISTORY_LIMIT};
pub use machine::Animator;
pub use tick::{PlayState, TickResult};
