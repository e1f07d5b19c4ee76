//! Error types shared by the description loader, the validator and the graph builder.

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Any failure on the way from a description file to a runnable automaton.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Build(#[from] BuildError),
}

/// Reading or parsing an automaton description failed.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed automaton description")]
    Json(#[from] serde_json::Error),
}

/// A description that parsed but breaks one of the structural rules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("set of states is empty")]
    EmptyStates,
    #[error("state {0:?} is declared more than once")]
    DuplicateState(String),
    #[error("start state {0:?} is not in the set of states")]
    UnknownStartState(String),
    #[error("set of input symbols is empty")]
    EmptyAlphabet,
    #[error("symbol {0:?} is not a single character")]
    SymbolNotCharacter(String),
    #[error("symbol {0:?} is declared more than once")]
    DuplicateSymbol(String),
    #[error("symbol {0:?} is reserved for epsilon transitions")]
    ReservedSymbol(String),
    #[error("set of accept states is empty")]
    EmptyAcceptStates,
    #[error("accept state {0:?} is not in the set of states")]
    UnknownAcceptState(String),
    #[error("state {0:?} in the transition table is not in the set of states")]
    UnknownSourceState(String),
    #[error("input {symbol:?} in the transition table for state {state:?} is not in the set of inputs")]
    UnknownSymbol { state: String, symbol: String },
    #[error("next state {target:?} for state {state:?} on {symbol:?} is not in the set of states")]
    UnknownTargetState {
        state: String,
        symbol: String,
        target: String,
    },
    #[error("state {state:?} has no transition for input {symbol:?}")]
    IncompleteTransitions { state: String, symbol: String },
}

/// Which part of an automaton referenced a state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateRole {
    Start,
    Accepting,
    Source,
    Target,
}

impl fmt::Display for StateRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StateRole::Start => "start state",
            StateRole::Accepting => "accepting state",
            StateRole::Source => "transition source",
            StateRole::Target => "transition target",
        })
    }
}

/// The transition graph could not be assembled from the pieces handed to the builder.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("no start state was given")]
    MissingStartState,
    #[error("state {0:?} is declared more than once")]
    DuplicateState(String),
    #[error("symbol {0:?} is declared more than once")]
    DuplicateSymbol(char),
    #[error("{role} {state:?} is not a declared state")]
    UnknownState { state: String, role: StateRole },
    #[error("symbol {0:?} is not in the alphabet")]
    UnknownSymbol(char),
    #[error("state {0:?} has an epsilon transition, which a deterministic automaton cannot have")]
    EpsilonInDfa(String),
    #[error("state {state:?} has more than one transition on {symbol:?}")]
    Nondeterministic { state: String, symbol: char },
}

/// An input character outside the declared alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid symbol {symbol:?} at position {position}")]
pub struct InvalidSymbol {
    pub symbol: char,
    /// Character (not byte) offset in the input.
    pub position: usize,
}
