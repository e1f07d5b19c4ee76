//! The transition graph shared by both automaton flavors.
//!
//! A graph is assembled once through [`GraphBuilder`] and never changes afterwards, so a single
//! graph can back any number of simultaneous simulations.

use std::collections::HashMap;
use std::fmt;

use indexmap::IndexSet;
use tracing::debug;

use crate::automaton::state::{StateId, StateSet};
use crate::automaton::symbol::{Alphabet, EPSILON, SymbolId};
use crate::error::{BuildError, StateRole};

/// States, alphabet, start and accepting states, and the transition relation.
#[derive(Debug, Clone)]
pub struct TransitionGraph {
    /// State names; a state's id is its index in this set.
    states: IndexSet<String>,
    alphabet: Alphabet,
    start_state: StateId,
    accepting: StateSet,
    /// Transitions: (source, symbol) -> set of destination states
    /// For epsilon transitions, symbol == EPSILON
    transitions: HashMap<(StateId, SymbolId), StateSet>,
    /// Handed out for pairs without an entry.
    no_targets: StateSet,
}

impl TransitionGraph {
    /// Start assembling a graph.
    pub fn builder() -> GraphBuilder {
        GraphBuilder::new()
    }

    /// Number of declared states.
    pub fn num_states(&self) -> usize {
        self.states.len()
    }

    /// The start state id.
    pub fn start_state(&self) -> StateId {
        self.start_state
    }

    /// The set of accepting states.
    pub fn accepting_states(&self) -> &StateSet {
        &self.accepting
    }

    /// Whether `state` is accepting.
    pub fn is_accepting(&self, state: StateId) -> bool {
        self.accepting.contains(state)
    }

    /// The declared input alphabet.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Id of the state called `name`.
    pub fn state_id(&self, name: &str) -> Option<StateId> {
        self.states.get_index_of(name).map(|idx| idx as StateId)
    }

    /// Name of the state `state`, if declared.
    pub fn state_name(&self, state: StateId) -> Option<&str> {
        self.states.get_index(state as usize).map(String::as_str)
    }

    /// Iterate over the state names in declaration order.
    pub fn state_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.states.iter().map(String::as_str)
    }

    /// Names of the given states, for diagnostics. Unknown ids are skipped.
    pub fn names_of(&self, states: &StateSet) -> Vec<&str> {
        states
            .iter()
            .filter_map(|state| self.state_name(state))
            .collect()
    }

    /// Destinations of `state` on `symbol` (which may be `EPSILON`).
    ///
    /// A missing transition and a state the graph never declared both yield the empty set.
    pub fn targets(&self, state: StateId, symbol: SymbolId) -> &StateSet {
        self.transitions
            .get(&(state, symbol))
            .unwrap_or(&self.no_targets)
    }

    /// Destinations of the epsilon transitions out of `state`.
    pub fn epsilon_targets(&self, state: StateId) -> &StateSet {
        self.targets(state, EPSILON)
    }

    /// Union of the direct `symbol` transitions out of every state in `states`, without
    /// following epsilon edges.
    pub fn image(&self, states: &StateSet, symbol: SymbolId) -> StateSet {
        let mut reached = StateSet::with_capacity(self.num_states());
        for state in states.iter() {
            reached.union_with(self.targets(state, symbol));
        }
        reached
    }

    /// Whether any state has an epsilon transition.
    pub fn has_epsilon_transitions(&self) -> bool {
        self.transitions.keys().any(|&(_, symbol)| symbol == EPSILON)
    }

    /// Get all transitions as an iterator.
    pub fn transitions(&self) -> impl Iterator<Item = (StateId, SymbolId, StateId)> + '_ {
        self.transitions
            .iter()
            .flat_map(|(&(src, sym), dests)| dests.iter().map(move |dst| (src, sym, dst)))
    }
}

/// One line each for states, symbols, start and accept states, then one `src -sym-> dsts`
/// row per non-empty transition in declaration order.
impl fmt::Display for TransitionGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbols: Vec<String> = self.alphabet.iter().map(String::from).collect();
        writeln!(f, "states: {}", self.state_names().collect::<Vec<_>>().join(", "))?;
        writeln!(f, "symbols: {}", symbols.join(", "))?;
        writeln!(f, "start: {}", self.state_name(self.start_state).unwrap_or_default())?;
        write!(f, "accept: {}", self.names_of(&self.accepting).join(", "))?;

        let labels = (0..self.alphabet.len() as SymbolId).chain([EPSILON]);
        for (src, name) in self.states.iter().enumerate() {
            for symbol in labels.clone() {
                let targets = self.targets(src as StateId, symbol);
                if targets.is_empty() {
                    continue;
                }
                let label = self.alphabet.symbol(symbol).unwrap_or('ε');
                write!(f, "\n{name} -{label}-> {}", self.names_of(targets).join(", "))?;
            }
        }
        Ok(())
    }
}

/// Collects names and edges, resolving them to ids when [`GraphBuilder::build`] is called.
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    states: Vec<String>,
    symbols: Vec<char>,
    start_state: Option<String>,
    accept_states: Vec<String>,
    /// `None` marks an epsilon edge.
    edges: Vec<(String, Option<char>, String)>,
}

impl GraphBuilder {
    /// An empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare states; declaration order fixes their ids.
    pub fn with_states<I, S>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.states.extend(states.into_iter().map(Into::into));
        self
    }

    /// Declare alphabet symbols.
    pub fn with_symbols<I: IntoIterator<Item = char>>(mut self, symbols: I) -> Self {
        self.symbols.extend(symbols);
        self
    }

    /// Set the start state.
    pub fn with_start_state(mut self, state: impl Into<String>) -> Self {
        self.start_state = Some(state.into());
        self
    }

    /// Declare accepting states.
    pub fn with_accept_states<I, S>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.accept_states.extend(states.into_iter().map(Into::into));
        self
    }

    /// Add a transition on `symbol`.
    pub fn with_transition(
        mut self,
        source: impl Into<String>,
        symbol: char,
        destination: impl Into<String>,
    ) -> Self {
        self.add_transition(source, Some(symbol), destination);
        self
    }

    /// Add an epsilon transition.
    pub fn with_epsilon_transition(
        mut self,
        source: impl Into<String>,
        destination: impl Into<String>,
    ) -> Self {
        self.add_transition(source, None, destination);
        self
    }

    /// Add a transition on `symbol`, or an epsilon transition when `symbol` is `None`.
    pub fn add_transition(
        &mut self,
        source: impl Into<String>,
        symbol: Option<char>,
        destination: impl Into<String>,
    ) {
        self.edges
            .push((source.into(), symbol, destination.into()));
    }

    /// Resolve every name and symbol and freeze the graph.
    pub fn build(self) -> Result<TransitionGraph, BuildError> {
        let mut states = IndexSet::with_capacity(self.states.len());
        for name in self.states {
            if states.contains(&name) {
                return Err(BuildError::DuplicateState(name));
            }
            states.insert(name);
        }
        let num_states = states.len();

        let mut alphabet = Alphabet::new();
        for symbol in self.symbols {
            if !alphabet.insert(symbol).1 {
                return Err(BuildError::DuplicateSymbol(symbol));
            }
        }

        let start = self.start_state.ok_or(BuildError::MissingStartState)?;
        let start_state = lookup(&states, &start, StateRole::Start)?;

        let mut accepting = StateSet::with_capacity(num_states);
        for name in &self.accept_states {
            accepting.insert(lookup(&states, name, StateRole::Accepting)?);
        }

        let mut transitions: HashMap<(StateId, SymbolId), StateSet> = HashMap::new();
        for (source, symbol, destination) in &self.edges {
            let src = lookup(&states, source, StateRole::Source)?;
            let dst = lookup(&states, destination, StateRole::Target)?;
            let sym = match *symbol {
                Some(c) => alphabet.id(c).ok_or(BuildError::UnknownSymbol(c))?,
                None => EPSILON,
            };
            transitions
                .entry((src, sym))
                .or_insert_with(|| StateSet::with_capacity(num_states))
                .insert(dst);
        }

        debug!(
            states = num_states,
            symbols = alphabet.len(),
            edges = self.edges.len(),
            "built transition graph"
        );

        Ok(TransitionGraph {
            states,
            alphabet,
            start_state,
            accepting,
            transitions,
            no_targets: StateSet::default(),
        })
    }
}

fn lookup(states: &IndexSet<String>, name: &str, role: StateRole) -> Result<StateId, BuildError> {
    states
        .get_index_of(name)
        .map(|idx| idx as StateId)
        .ok_or_else(|| BuildError::UnknownState {
            state: name.to_owned(),
            role,
        })
}
