//! The declarative JSON description of an automaton and its conversion into a runnable one.
//!
//! ```json
//! {
//!   "states": ["q0", "q1"],
//!   "symbols": ["a"],
//!   "start_state": "q0",
//!   "accept_states": ["q1"],
//!   "transitions": { "q0": { "a": ["q1"], "ε": ["q1"] } }
//! }
//! ```
//!
//! DFA descriptions map each symbol to a single state name instead of a list.

mod validation;

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::automaton::{Dfa, GraphBuilder, Nfa, TransitionGraph};
use crate::error::{BuildError, Error, LoadError, ValidationError};

/// Transition table key marking an epsilon transition. It can never be declared as a symbol.
pub const EPSILON_KEY: &str = "ε";

/// Epsilon key of older descriptions. Here it is an ordinary symbol.
const LEGACY_EPSILON_KEY: &str = "_";

/// Description of a nondeterministic automaton.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NfaDescription {
    pub states: Vec<String>,
    pub symbols: Vec<String>,
    pub start_state: String,
    pub accept_states: Vec<String>,
    /// state -> symbol (or [`EPSILON_KEY`]) -> next states
    #[serde(default)]
    pub transitions: IndexMap<String, IndexMap<String, Vec<String>>>,
}

/// Description of a deterministic automaton.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DfaDescription {
    pub states: Vec<String>,
    pub symbols: Vec<String>,
    pub start_state: String,
    pub accept_states: Vec<String>,
    /// state -> symbol -> next state
    #[serde(default)]
    pub transitions: IndexMap<String, IndexMap<String, String>>,
}

/// Loading and checking shared by both description flavors.
pub trait Description: DeserializeOwned {
    /// Checks the structural rules, reporting the first violation.
    fn validate(&self) -> Result<(), ValidationError>;

    fn from_json_str(json: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(json)?)
    }

    fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }
}

impl Description for NfaDescription {
    fn validate(&self) -> Result<(), ValidationError> {
        validation::validate_nfa(self)
    }
}

impl Description for DfaDescription {
    fn validate(&self) -> Result<(), ValidationError> {
        validation::validate_dfa(self)
    }
}

fn single_char(symbol: &str) -> Option<char> {
    let mut chars = symbol.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// Builder seeded with everything but the transitions.
fn skeleton(
    states: &[String],
    symbols: &[String],
    start_state: &str,
    accept_states: &[String],
) -> GraphBuilder {
    TransitionGraph::builder()
        .with_states(states.iter().cloned())
        .with_symbols(symbols.iter().filter_map(|s| single_char(s)))
        .with_start_state(start_state)
        .with_accept_states(accept_states.iter().cloned())
}

/// Resolves a transition table key; `None` is epsilon.
fn table_symbol(key: &str) -> Result<Option<char>, BuildError> {
    if key == EPSILON_KEY {
        return Ok(None);
    }
    // Multi-character keys cannot name any alphabet symbol; report the first character.
    single_char(key)
        .map(Some)
        .ok_or_else(|| BuildError::UnknownSymbol(key.chars().next().unwrap_or_default()))
}

impl NfaDescription {
    /// Declares `"_"` and never uses [`EPSILON_KEY`], so it may have been written with
    /// underscores meaning epsilon.
    fn underscore_without_epsilon(&self) -> bool {
        self.symbols.iter().any(|s| s == LEGACY_EPSILON_KEY)
            && !self
                .transitions
                .values()
                .any(|row| row.contains_key(EPSILON_KEY))
    }

    /// Assembles the transition graph without validating first.
    pub fn to_graph(&self) -> Result<TransitionGraph, BuildError> {
        if self.underscore_without_epsilon() {
            warn!(
                "{LEGACY_EPSILON_KEY:?} is an ordinary symbol; epsilon transitions use {EPSILON_KEY:?}"
            );
        }
        let mut builder = skeleton(
            &self.states,
            &self.symbols,
            &self.start_state,
            &self.accept_states,
        );
        for (state, row) in &self.transitions {
            for (symbol, targets) in row {
                let symbol = table_symbol(symbol)?;
                for target in targets {
                    builder.add_transition(state.as_str(), symbol, target.as_str());
                }
            }
        }
        builder.build()
    }
}

impl DfaDescription {
    /// Assembles the transition graph without validating first.
    pub fn to_graph(&self) -> Result<TransitionGraph, BuildError> {
        let mut builder = skeleton(
            &self.states,
            &self.symbols,
            &self.start_state,
            &self.accept_states,
        );
        for (state, row) in &self.transitions {
            for (symbol, target) in row {
                builder.add_transition(state.as_str(), table_symbol(symbol)?, target.as_str());
            }
        }
        builder.build()
    }
}

impl TryFrom<&NfaDescription> for Nfa {
    type Error = Error;

    fn try_from(description: &NfaDescription) -> Result<Self, Self::Error> {
        description.validate()?;
        Ok(Nfa::new(description.to_graph()?))
    }
}

impl TryFrom<&DfaDescription> for Dfa {
    type Error = Error;

    fn try_from(description: &DfaDescription) -> Result<Self, Self::Error> {
        description.validate()?;
        Ok(Dfa::try_from(description.to_graph()?)?)
    }
}

/// Reads, validates and builds an NFA from a JSON file.
pub fn load_nfa(path: impl AsRef<Path>) -> Result<Nfa, Error> {
    Nfa::try_from(&NfaDescription::from_path(path)?)
}

/// Reads, validates and builds a DFA from a JSON file.
pub fn load_dfa(path: impl AsRef<Path>) -> Result<Dfa, Error> {
    Dfa::try_from(&DfaDescription::from_path(path)?)
}
