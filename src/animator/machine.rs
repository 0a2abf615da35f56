//! Animator that plays frames and applies transitions.

use super::config::AnimatorConfig;
use super::tick::{PlayState, TickResult};
use crate::core::{
    AnimationError, Frame, StateGraph, StateId, StateNode, TransitionHistory, TransitionRecord,
};
use chrono::Utc;
use std::time::Duration;

/// Drives one sprite through an animation graph.
///
/// The animator owns the graph and a playback cursor (current state, frame
/// index, time spent on the frame). Its visible state only changes inside
/// [`tick`](Self::tick) and the explicit control methods. Editing the graph
/// through [`graph_mut`](Self::graph_mut) needs `&mut self`, so it can never
/// overlap a tick.
///
/// # Example
///
/// ```rust
/// use sprite_animator::animator::{Animator, TickResult};
/// use sprite_animator::core::{Frame, Predicate, StateGraph, StateNode};
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use std::time::Duration;
///
/// let ms = Duration::from_millis;
/// let moving = Rc::new(Cell::new(false));
///
/// let mut graph = StateGraph::new();
/// let idle = graph.add_state(StateNode::named("idle"));
/// let run = graph.add_state(StateNode::named("run"));
/// graph.state_mut(idle).unwrap().set_frames(vec![Frame::new("idle_0", ms(100))]);
/// graph.state_mut(run).unwrap().set_frames(vec![Frame::new("run_0", ms(80))]);
/// graph
///     .insert_transition(idle, run, vec![Predicate::from_flag(Rc::clone(&moving))])
///     .unwrap();
///
/// let mut animator = Animator::new(graph, idle).unwrap();
/// assert_eq!(animator.current_frame().map(|f| *f.region()), Some("idle_0"));
///
/// moving.set(true);
/// assert_eq!(
///     animator.tick(ms(16)),
///     TickResult::Transitioned { from: idle, to: run }
/// );
/// assert_eq!(animator.current_frame().map(|f| *f.region()), Some("run_0"));
/// ```
#[derive(Debug)]
pub struct Animator<T> {
    pub(crate) graph: StateGraph<T>,
    pub(crate) initial: StateId,
    pub(crate) current: StateId,
    pub(crate) frame_index: usize,
    pub(crate) elapsed: Duration,
    pub(crate) finished: bool,
    pub(crate) play_state: PlayState,
    pub(crate) tick_count: u64,
    pub(crate) history: TransitionHistory,
    pub(crate) config: AnimatorConfig,
}

#[derive(Default)]
struct Advance {
    frame_changed: bool,
    wrapped: bool,
}

impl<T> Animator<T> {
    /// Create an animator in `initial` with the default configuration.
    pub fn new(graph: StateGraph<T>, initial: StateId) -> Result<Self, AnimationError> {
        Self::with_config(graph, initial, AnimatorConfig::default())
    }

    pub fn with_config(
        graph: StateGraph<T>,
        initial: StateId,
        config: AnimatorConfig,
    ) -> Result<Self, AnimationError> {
        if !graph.contains(initial) {
            return Err(AnimationError::UnknownState { id: initial });
        }
        let play_state = if config.autoplay {
            PlayState::Playing
        } else {
            PlayState::Stopped
        };
        Ok(Self {
            graph,
            initial,
            current: initial,
            frame_index: 0,
            elapsed: Duration::ZERO,
            finished: false,
            play_state,
            tick_count: 0,
            history: TransitionHistory::new(),
            config,
        })
    }

    /// Advance playback by `delta`, then evaluate the current state's
    /// transitions.
    ///
    /// When a transition is taken the cursor restarts at frame 0 of the
    /// target state. If the first satisfied transition points outside the
    /// graph, a warning is logged and the state is held for this tick.
    pub fn tick(&mut self, delta: Duration) -> TickResult {
        if self.play_state != PlayState::Playing {
            return TickResult::Idle;
        }
        self.tick_count += 1;

        let advance = self.advance_playback(delta);

        if let Some(to) = self.evaluate_transition() {
            let from = self.current;
            self.enter(to);
            return TickResult::Transitioned { from, to };
        }

        if self.finished {
            TickResult::Holding {
                frame_index: self.frame_index,
            }
        } else {
            TickResult::Playing {
                frame_index: self.frame_index,
                frame_changed: advance.frame_changed,
                wrapped: advance.wrapped,
            }
        }
    }

    fn advance_playback(&mut self, delta: Duration) -> Advance {
        // Float-to-int `as` saturates, so oversized products clamp to u64::MAX.
        let scaled_nanos = delta.as_nanos() as f64 * self.config.effective_speed();
        let scaled = Duration::from_nanos(scaled_nanos as u64);

        let node = self.graph.node(self.current);
        let frames = node.frames();
        if frames.is_empty() {
            return Advance::default();
        }
        // The frame list may have been replaced during an edit phase.
        if self.frame_index >= frames.len() {
            self.frame_index = 0;
            self.elapsed = Duration::ZERO;
            self.finished = false;
        }
        if self.finished {
            if node.should_loop() {
                self.finished = false;
            } else {
                return Advance::default();
            }
        }

        let start = self.frame_index;
        let mut wrapped = false;
        self.elapsed = self.elapsed.saturating_add(scaled);

        loop {
            let duration = frames[self.frame_index].duration();
            if self.elapsed < duration {
                break;
            }

            if self.frame_index + 1 < frames.len() {
                self.elapsed -= duration;
                self.frame_index += 1;
            } else if node.should_loop() {
                self.elapsed -= duration;
                self.frame_index = 0;
                wrapped = true;

                let cycle = node.total_duration();
                if cycle.is_zero() {
                    self.elapsed = Duration::ZERO;
                    break;
                }
                // Skip whole cycles so a long delta cannot spin the loop.
                let remainder = self.elapsed.as_nanos() % cycle.as_nanos();
                self.elapsed = Duration::from_nanos(remainder as u64);
            } else {
                self.elapsed = duration;
                self.finished = true;
                break;
            }
        }

        let frame_changed = wrapped || self.frame_index != start;
        if frame_changed {
            tracing::trace!(
                state = node.label(),
                frame = self.frame_index,
                wrapped,
                "frame advanced"
            );
        }
        Advance {
            frame_changed,
            wrapped,
        }
    }

    fn evaluate_transition(&self) -> Option<StateId> {
        let target = self.graph.node(self.current).try_find_valid_transition()?;
        if self.graph.contains(target) {
            Some(target)
        } else {
            tracing::warn!(
                state = self.graph.node(self.current).label(),
                %target,
                "transition target is not part of this graph; holding state"
            );
            None
        }
    }

    /// Switch to `to`, restart its playback, and record the change.
    fn enter(&mut self, to: StateId) {
        let from = self.current;
        tracing::debug!(
            from = self.graph.node(from).label(),
            to = self.graph.node(to).label(),
            tick = self.tick_count,
            "animation state changed"
        );

        let record = TransitionRecord {
            from,
            to,
            tick: self.tick_count,
            timestamp: Utc::now(),
        };
        self.history = match self.config.history_limit {
            Some(limit) => self.history.record_bounded(record, limit),
            None => self.history.record(record),
        };

        self.current = to;
        self.reset_cursor();
    }

    fn reset_cursor(&mut self) {
        self.frame_index = 0;
        self.elapsed = Duration::ZERO;
        self.finished = false;
    }

    /// Jump straight to `state`, bypassing its guards.
    pub fn force_state(&mut self, state: StateId) -> Result<(), AnimationError> {
        if !self.graph.contains(state) {
            return Err(AnimationError::UnknownState { id: state });
        }
        self.enter(state);
        Ok(())
    }

    /// Return to the initial state with a fresh cursor.
    ///
    /// History is kept; the jump is not recorded as a transition.
    pub fn reset(&mut self) {
        self.current = self.initial;
        self.reset_cursor();
    }

    pub fn play(&mut self) {
        self.play_state = PlayState::Playing;
    }

    pub fn pause(&mut self) {
        if self.play_state == PlayState::Playing {
            self.play_state = PlayState::Paused;
        }
    }

    /// Stop and rewind the current state to its first frame.
    pub fn stop(&mut self) {
        self.play_state = PlayState::Stopped;
        self.reset_cursor();
    }

    pub fn play_state(&self) -> PlayState {
        self.play_state
    }

    pub fn current_state(&self) -> StateId {
        self.current
    }

    pub fn initial_state(&self) -> StateId {
        self.initial
    }

    pub fn current_node(&self) -> &StateNode<T> {
        self.graph.node(self.current)
    }

    /// The frame to render right now; `None` if the state has no frames.
    ///
    /// If the frames were replaced with a shorter list since the last tick,
    /// this is the first frame, where the next tick rewinds to.
    pub fn current_frame(&self) -> Option<&Frame<T>> {
        let frames = self.current_node().frames();
        frames.get(self.frame_index).or_else(|| frames.first())
    }

    pub fn frame_index(&self) -> usize {
        self.frame_index
    }

    /// Time spent on the current frame.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// True once a non-looping state has reached and is holding its last frame.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Number of ticks processed while playing.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn history(&self) -> &TransitionHistory {
        &self.history
    }

    pub fn graph(&self) -> &StateGraph<T> {
        &self.graph
    }

    /// Mutable access to the graph for an edit phase between ticks.
    pub fn graph_mut(&mut self) -> &mut StateGraph<T> {
        &mut self.graph
    }

    pub fn config(&self) -> &AnimatorConfig {
        &self.config
    }

    /// Give the graph back, consuming the animator.
    pub fn into_graph(self) -> StateGraph<T> {
        self.graph
    }
}
