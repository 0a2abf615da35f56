//! Animation frames.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One still image of an animation and how long it stays on screen.
///
/// `T` is the renderable payload (a texture handle, an atlas region, ...).
/// The state machine never looks inside it; it is handed back unchanged
/// through [`Animator::current_frame`](crate::animator::Animator::current_frame).
///
/// # Example
///
/// ```rust
/// use sprite_animator::core::Frame;
/// use std::time::Duration;
///
/// let frame = Frame::new("hero_idle_0", Duration::from_millis(100));
/// assert_eq!(*frame.region(), "hero_idle_0");
/// assert_eq!(frame.duration(), Duration::from_millis(100));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Frame<T> {
    region: T,
    duration: Duration,
}

impl<T> Frame<T> {
    /// Create a frame showing `region` for `duration`.
    pub fn new(region: T, duration: Duration) -> Self {
        Self { region, duration }
    }

    /// The opaque renderable payload.
    pub fn region(&self) -> &T {
        &self.region
    }

    /// How long this frame is displayed before playback advances.
    pub fn duration(&self) -> Duration {
        self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_exposes_region_and_duration() {
        let frame = Frame::new(3u32, Duration::from_millis(40));
        assert_eq!(*frame.region(), 3);
        assert_eq!(frame.duration(), Duration::from_millis(40));
    }

    #[test]
    fn frame_copies_are_independent_values() {
        let frame = Frame::new(String::from("walk_1"), Duration::from_millis(80));
        let copy = frame.clone();
        assert_eq!(frame, copy);
        drop(frame);
        assert_eq!(copy.region(), "walk_1");
    }
}
