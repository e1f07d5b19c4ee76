//! Epsilon closure over a [`TransitionGraph`].

use crate::automaton::graph::TransitionGraph;
use crate::automaton::state::{StateId, StateSet};

impl TransitionGraph {
    /// The smallest superset of `states` closed under epsilon transitions.
    ///
    /// Each state enters the worklist at most once, the moment it joins the closure, so epsilon
    /// cycles terminate and the cost is linear in states plus epsilon edges.
    pub fn epsilon_closure(&self, states: &StateSet) -> StateSet {
        let mut closure = StateSet::with_capacity(self.num_states());
        let mut stack: Vec<StateId> = Vec::new();

        for state in states.iter() {
            if closure.insert(state) {
                stack.push(state);
            }
        }

        while let Some(state) = stack.pop() {
            for dest in self.epsilon_targets(state).iter() {
                if closure.insert(dest) {
                    stack.push(dest);
                }
            }
        }

        closure
    }

    /// Epsilon closure of a single state.
    pub fn epsilon_closure_of(&self, state: StateId) -> StateSet {
        self.epsilon_closure(&StateSet::singleton(state, self.num_states()))
    }
}
