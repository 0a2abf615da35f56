//! Animator configuration.

use serde::{Deserialize, Serialize};

/// Default number of transitions kept in an animator's history.
pub const DEFAULT_HISTORY_LIMIT: usize = 64;

/// Tunables for an [`Animator`](super::Animator).
///
/// Missing fields fall back to their defaults when deserializing, so a host
/// can load a partial configuration from JSON.
///
/// # Example
///
/// ```rust
/// use sprite_animator::animator::AnimatorConfig;
///
/// let config = AnimatorConfig::from_json(r#"{ "playback_speed": 2.0 }"#).unwrap();
/// assert_eq!(config.playback_speed, 2.0);
/// assert!(config.autoplay);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimatorConfig {
    /// Maximum recorded transitions; `None` keeps everything
    pub history_limit: Option<usize>,
    /// Multiplier applied to every tick's delta time
    pub playback_speed: f32,
    /// Start in the playing state instead of stopped
    pub autoplay: bool,
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self {
            history_limit: Some(DEFAULT_HISTORY_LIMIT),
            playback_speed: 1.0,
            autoplay: true,
        }
    }
}

impl AnimatorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn with_history_limit(mut self, limit: Option<usize>) -> Self {
        self.history_limit = limit;
        self
    }

    pub fn with_playback_speed(mut self, speed: f32) -> Self {
        self.playback_speed = speed;
        self
    }

    pub fn with_autoplay(mut self, autoplay: bool) -> Self {
        self.autoplay = autoplay;
        self
    }

    /// Playback speed clamped to a finite, non-negative value.
    pub fn effective_speed(&self) -> f64 {
        let speed = f64::from(self.playback_speed);
        if speed.is_finite() && speed > 0.0 {
            speed
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = AnimatorConfig::default();
        assert_eq!(config.history_limit, Some(DEFAULT_HISTORY_LIMIT));
        assert_eq!(config.playback_speed, 1.0);
        assert!(config.autoplay);
    }

    #[test]
    fn chained_setters() {
        let config = AnimatorConfig::new()
            .with_history_limit(None)
            .with_playback_speed(0.5)
            .with_autoplay(false);

        assert_eq!(config.history_limit, None);
        assert_eq!(config.playback_speed, 0.5);
        assert!(!config.autoplay);
    }

    #[test]
    fn partial_json_uses_defaults() {
        let config = AnimatorConfig::from_json(r#"{ "autoplay": false }"#).unwrap();
        assert!(!config.autoplay);
        assert_eq!(config.history_limit, Some(DEFAULT_HISTORY_LIMIT));
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(AnimatorConfig::from_json("{ not json").is_err());
    }

    #[test]
    fn effective_speed_rejects_negative_and_nan() {
        assert_eq!(AnimatorConfig::new().with_playback_speed(-1.0).effective_speed(), 0.0);
        assert_eq!(AnimatorConfig::new().with_playback_speed(f32::NAN).effective_speed(), 0.0);
        assert_eq!(AnimatorConfig::new().with_playback_speed(2.0).effective_speed(), 2.0);
    }
}
