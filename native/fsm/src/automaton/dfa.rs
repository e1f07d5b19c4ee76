//! Deterministic Finite Automaton (DFA) walk.

use std::collections::HashMap;

use tracing::debug;

use crate::automaton::graph::TransitionGraph;
use crate::automaton::state::StateId;
use crate::automaton::symbol::{Alphabet, SymbolId, is_epsilon};
use crate::automaton::traits::{Recognizer, Simulate};
use crate::error::BuildError;

/// A Deterministic Finite Automaton.
///
/// Missing transitions are allowed and act as an implicit dead state.
#[derive(Debug, Clone)]
pub struct Dfa {
    graph: TransitionGraph,
    /// Transitions: (source, symbol) -> destination
    next: HashMap<(StateId, SymbolId), StateId>,
}

impl Dfa {
    pub fn graph(&self) -> &TransitionGraph {
        &self.graph
    }

    /// Get the transition from a state on a character.
    pub fn transition(&self, source: StateId, symbol: char) -> Option<StateId> {
        let symbol = self.graph.alphabet().id(symbol)?;
        self.next.get(&(source, symbol)).copied()
    }

    /// Whether every state has a transition on every symbol.
    pub fn is_total(&self) -> bool {
        self.next.len() == self.graph.num_states() * self.graph.alphabet().len()
    }
}

impl TryFrom<TransitionGraph> for Dfa {
    type Error = BuildError;

    /// Accepts the graph only if it has no epsilon edges and at most one destination per
    /// (state, symbol) pair.
    fn try_from(graph: TransitionGraph) -> Result<Self, Self::Error> {
        let state_name = |state: StateId| graph.state_name(state).unwrap_or_default().to_owned();

        let mut next = HashMap::new();
        for (source, symbol, destination) in graph.transitions() {
            if is_epsilon(symbol) {
                return Err(BuildError::EpsilonInDfa(state_name(source)));
            }
            if next.insert((source, symbol), destination).is_some() {
                return Err(BuildError::Nondeterministic {
                    state: state_name(source),
                    symbol: graph.alphabet().symbol(symbol).unwrap_or_default(),
                });
            }
        }

        Ok(Self { graph, next })
    }
}

impl Recognizer for Dfa {
    type Run<'a> = DfaRun<'a>;

    fn alphabet(&self) -> &Alphabet {
        self.graph.alphabet()
    }

    fn start(&self) -> DfaRun<'_> {
        DfaRun {
            dfa: self,
            current: Some(self.graph.start_state()),
        }
    }
}

/// One walk through a [`Dfa`]; `None` once a transition was missing.
#[derive(Debug, Clone)]
pub struct DfaRun<'a> {
    dfa: &'a Dfa,
    current: Option<StateId>,
}

impl DfaRun<'_> {
    pub fn current(&self) -> Option<StateId> {
        self.current
    }
}

impl Simulate for DfaRun<'_> {
    fn is_accepting(&self) -> bool {
        self.current
            .is_some_and(|state| self.dfa.graph.is_accepting(state))
    }

    fn feed(&mut self, input: char) -> bool {
        self.current = self
            .current
            .and_then(|state| self.dfa.transition(state, input));

        if self.current.is_none() {
            debug!(symbol = %input, "no transition, rejecting");
            return false;
        }
        true
    }
}
