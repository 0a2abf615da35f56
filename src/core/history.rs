//! Transition history tracking.
//!
//! Keeps an ordered record of the state changes an animator has made,
//! useful for debugging overlays and for checkpointing playback.

use super::node::StateId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single state change.
///
/// # Example
///
/// ```rust
/// use sprite_animator::core::{StateGraph, StateNode, TransitionRecord};
/// use chrono::Utc;
///
/// let mut graph: StateGraph<()> = StateGraph::new();
/// let idle = graph.add_state(StateNode::named("idle"));
/// let run = graph.add_state(StateNode::named("run"));
///
/// let record = TransitionRecord {
///     from: idle,
///     to: run,
///     tick: 12,
///     timestamp: Utc::now(),
/// };
/// assert_eq!(record.to, run);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// The state being left
    pub from: StateId,
    /// The state being entered
    pub to: StateId,
    /// Animator tick on which the change happened
    pub tick: u64,
    /// Wall-clock time of the change
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of state changes.
///
/// `record` is pure: it returns a new history and leaves `self` untouched.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TransitionHistory {
    transitions: Vec<TransitionRecord>,
}

impl TransitionHistory {
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    pub fn record(&self, transition: TransitionRecord) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Record a transition, keeping at most `limit` of the newest entries.
    ///
    /// A `limit` of zero yields an empty history.
    pub fn record_bounded(&self, transition: TransitionRecord, limit: usize) -> Self {
        let mut history = self.record(transition);
        let excess = history.transitions.len().saturating_sub(limit);
        history.transitions.drain(..excess);
        history
    }

    /// States visited in order: the first `from`, then every `to`.
    pub fn get_path(&self) -> Vec<StateId> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.first() {
            path.push(first.from);
        }
        path.extend(self.transitions.iter().map(|transition| transition.to));
        path
    }

    /// Wall-clock time between the first and last recorded transition.
    ///
    /// `None` when the history is empty.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    pub fn transitions(&self) -> &[TransitionRecord] {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// The most recent transition, if any.
    pub fn last(&self) -> Option<&TransitionRecord> {
        self.transitions.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(from: usize, to: usize, tick: u64) -> TransitionRecord {
        TransitionRecord {
            from: StateId(from),
            to: StateId(to),
            tick,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history = TransitionHistory::new();
        assert!(history.is_empty());
        assert!(history.get_path().is_empty());
        assert!(history.duration().is_none());
        assert!(history.last().is_none());
    }

    #[test]
    fn record_is_immutable() {
        let history = TransitionHistory::new();
        let new_history = history.record(record(0, 1, 1));

        assert_eq!(history.len(), 0);
        assert_eq!(new_history.len(), 1);
    }

    #[test]
    fn get_path_returns_state_sequence() {
        let history = TransitionHistory::new()
            .record(record(0, 1, 3))
            .record(record(1, 2, 9));

        assert_eq!(history.get_path(), vec![StateId(0), StateId(1), StateId(2)]);
        assert_eq!(history.last().map(|r| r.tick), Some(9));
    }

    #[test]
    fn record_bounded_drops_oldest() {
        let mut history = TransitionHistory::new();
        for tick in 0..5 {
            history = history.record_bounded(record(tick as usize, tick as usize + 1, tick), 3);
        }

        let ticks: Vec<u64> = history.transitions().iter().map(|r| r.tick).collect();
        assert_eq!(ticks, vec![2, 3, 4]);
    }

    #[test]
    fn record_bounded_with_zero_limit_keeps_nothing() {
        let history = TransitionHistory::new().record_bounded(record(0, 1, 0), 0);
        assert!(history.is_empty());
    }

    #[test]
    fn single_transition_has_duration_zero() {
        let history = TransitionHistory::new().record(record(0, 1, 0));
        assert_eq!(history.duration(), Some(Duration::from_secs(0)));
    }

    #[test]
    fn duration_spans_first_to_last() {
        let start = Utc::now();
        let first = TransitionRecord {
            timestamp: start,
            ..record(0, 1, 0)
        };
        let second = TransitionRecord {
            timestamp: start + chrono::Duration::milliseconds(250),
            ..record(1, 0, 15)
        };

        let history = TransitionHistory::new().record(first).record(second);
        assert_eq!(history.duration(), Some(Duration::from_millis(250)));
    }

    #[test]
    fn history_serializes_correctly() {
        let history = TransitionHistory::new().record(record(2, 0, 4));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: TransitionHistory = serde_json::from_str(&json).unwrap();

        assert_eq!(history, deserialized);
    }
}
