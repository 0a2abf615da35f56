//! Arena of animation states.
//!
//! States live in one vector and refer to each other by [`StateId`]. Nodes
//! are never removed, so a handle stays valid for the lifetime of the graph.

use super::error::AnimationError;
use super::node::{StateId, StateNode, Transition};
use super::predicate::Predicate;

/// A directed, possibly cyclic graph of animation states.
#[derive(Debug)]
pub struct StateGraph<T> {
    nodes: Vec<StateNode<T>>,
}

impl<T> Default for StateGraph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> StateGraph<T> {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Add a state and return its handle.
    pub fn add_state(&mut self, node: StateNode<T>) -> StateId {
        let id = StateId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Whether `id` was issued by this graph.
    pub fn contains(&self, id: StateId) -> bool {
        id.0 < self.nodes.len()
    }

    /// Look up a state, failing with `UnknownState` for a foreign handle.
    pub fn state(&self, id: StateId) -> Result<&StateNode<T>, AnimationError> {
        self.nodes
            .get(id.0)
            .ok_or(AnimationError::UnknownState { id })
    }

    /// Mutable lookup, for edits between ticks.
    pub fn state_mut(&mut self, id: StateId) -> Result<&mut StateNode<T>, AnimationError> {
        self.nodes
            .get_mut(id.0)
            .ok_or(AnimationError::UnknownState { id })
    }

    /// Nodes are never removed, so a handle validated against this graph
    /// stays in bounds.
    pub(crate) fn node(&self, id: StateId) -> &StateNode<T> {
        &self.nodes[id.0]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over all states with their handles, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (StateId, &StateNode<T>)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(index, node)| (StateId(index), node))
    }

    /// Handle of the first state with the given diagnostic name.
    pub fn find_by_name(&self, name: &str) -> Option<StateId> {
        self.iter()
            .find(|(_, node)| node.name() == Some(name))
            .map(|(id, _)| id)
    }

    /// Add a guarded transition from `from` to `target`.
    ///
    /// Same policy as [`StateNode::insert_transition`]: an absent target is
    /// ignored and absent predicates are filtered. A target handle that does
    /// not belong to this graph is rejected, and nothing is inserted.
    pub fn insert_transition<I, P>(
        &mut self,
        from: StateId,
        target: impl Into<Option<StateId>>,
        conditions: I,
    ) -> Result<(), AnimationError>
    where
        I: IntoIterator<Item = P>,
        P: Into<Option<Predicate>>,
    {
        let target = target.into();
        if let Some(id) = target {
            if !self.contains(id) {
                return Err(AnimationError::UnknownState { id });
            }
        }
        self.state_mut(from)?.insert_transition(target, conditions);
        Ok(())
    }

    /// Remove the transition at `index` from state `from`.
    pub fn remove_transition_at(
        &mut self,
        from: StateId,
        index: usize,
    ) -> Result<Transition, AnimationError> {
        self.state_mut(from)?.remove_transition_at(index)
    }

    /// Evaluate the transitions of `from`.
    pub fn try_find_valid_transition(
        &self,
        from: StateId,
    ) -> Result<Option<StateId>, AnimationError> {
        Ok(self.state(from)?.try_find_valid_transition())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Frame;
    use std::time::Duration;

    fn graph_with(names: &[&str]) -> (StateGraph<u32>, Vec<StateId>) {
        let mut graph = StateGraph::new();
        let ids = names
            .iter()
            .map(|name| graph.add_state(StateNode::named(*name)))
            .collect();
        (graph, ids)
    }

    #[test]
    fn new_graph_is_empty() {
        let graph: StateGraph<u32> = StateGraph::new();
        assert!(graph.is_empty());
        assert_eq!(graph.len(), 0);
    }

    #[test]
    fn add_state_issues_sequential_handles() {
        let (graph, ids) = graph_with(&["idle", "run", "jump"]);
        assert_eq!(graph.len(), 3);
        assert_eq!(ids.iter().map(|id| id.index()).collect::<Vec<_>>(), vec![0, 1, 2]);
        assert!(ids.iter().all(|id| graph.contains(*id)));
    }

    #[test]
    fn unknown_handle_is_rejected() {
        let (mut graph, _) = graph_with(&["idle"]);
        let stray = StateId(9);

        assert_eq!(
            graph.state(stray).unwrap_err(),
            AnimationError::UnknownState { id: stray }
        );
        assert!(graph.state_mut(stray).is_err());
    }

    #[test]
    fn find_by_name_returns_first_match() {
        let (graph, ids) = graph_with(&["idle", "run", "run"]);
        assert_eq!(graph.find_by_name("run"), Some(ids[1]));
        assert_eq!(graph.find_by_name("swim"), None);
    }

    #[test]
    fn insert_transition_through_graph() {
        let (mut graph, ids) = graph_with(&["idle", "run"]);
        graph
            .insert_transition(ids[0], ids[1], vec![Predicate::new(|| true)])
            .unwrap();

        assert_eq!(graph.state(ids[0]).unwrap().transition_count(), 1);
        assert_eq!(graph.try_find_valid_transition(ids[0]).unwrap(), Some(ids[1]));
    }

    #[test]
    fn insert_with_absent_target_is_silent_noop() {
        let (mut graph, ids) = graph_with(&["idle"]);
        graph
            .insert_transition(ids[0], None::<StateId>, Vec::<Predicate>::new())
            .unwrap();
        assert_eq!(graph.state(ids[0]).unwrap().transition_count(), 0);
    }

    #[test]
    fn insert_with_dangling_target_fails_without_mutation() {
        let (mut graph, ids) = graph_with(&["idle"]);
        let result = graph.insert_transition(ids[0], StateId(5), Vec::<Predicate>::new());

        assert_eq!(result, Err(AnimationError::UnknownState { id: StateId(5) }));
        assert_eq!(graph.state(ids[0]).unwrap().transition_count(), 0);
    }

    #[test]
    fn insert_from_unknown_state_fails() {
        let (mut graph, ids) = graph_with(&["idle"]);
        let result = graph.insert_transition(StateId(3), ids[0], Vec::<Predicate>::new());
        assert_eq!(result, Err(AnimationError::UnknownState { id: StateId(3) }));
    }

    #[test]
    fn cycles_and_shared_targets_are_allowed() {
        let (mut graph, ids) = graph_with(&["a", "b", "c"]);
        let (a, b, c) = (ids[0], ids[1], ids[2]);
        graph.insert_transition(a, c, Vec::<Predicate>::new()).unwrap();
        graph.insert_transition(b, c, Vec::<Predicate>::new()).unwrap();
        graph.insert_transition(c, a, Vec::<Predicate>::new()).unwrap();
        graph.insert_transition(c, c, vec![Predicate::new(|| false)]).unwrap();

        assert_eq!(graph.try_find_valid_transition(a).unwrap(), Some(c));
        assert_eq!(graph.try_find_valid_transition(b).unwrap(), Some(c));
        assert_eq!(graph.try_find_valid_transition(c).unwrap(), Some(a));
    }

    #[test]
    fn remove_transition_through_graph() {
        let (mut graph, ids) = graph_with(&["a", "b"]);
        graph.insert_transition(ids[0], ids[1], Vec::<Predicate>::new()).unwrap();

        assert!(matches!(
            graph.remove_transition_at(ids[0], 1),
            Err(AnimationError::OutOfRange { index: 1, len: 1 })
        ));
        let removed = graph.remove_transition_at(ids[0], 0).unwrap();
        assert_eq!(removed.target(), ids[1]);
        assert_eq!(graph.state(ids[0]).unwrap().transition_count(), 0);
    }

    #[test]
    fn iter_yields_handles_in_order() {
        let (mut graph, ids) = graph_with(&["a", "b"]);
        graph
            .state_mut(ids[1])
            .unwrap()
            .set_frames(vec![Frame::new(7, Duration::from_millis(10))]);

        let collected: Vec<_> = graph.iter().map(|(id, node)| (id, node.frames().len())).collect();
        assert_eq!(collected, vec![(ids[0], 0), (ids[1], 1)]);
    }
}
