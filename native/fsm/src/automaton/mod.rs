//! Finite automata and their acceptance check.
//!
//! This module provides:
//! - An immutable transition graph with set-valued transitions and epsilon edges
//! - Epsilon closure computation
//! - Subset simulation of epsilon-NFAs and a single-pointer DFA walk
//! - Alphabet screening of input words
//! - PyO3 bindings behind the `python` feature

mod closure;
mod dfa;
mod epsilon_nfa;
mod graph;
mod guard;
#[cfg(feature = "python")]
mod python_bindings;
mod state;
mod symbol;
mod traits;


pub use dfa::{Dfa, DfaRun};
pub use epsilon_nfa::{Nfa, NfaRun};
pub use graph::{GraphBuilder, TransitionGraph};
#[cfg(feature = "python")]
pub use python_bindings::automaton;
pub use state::{StateId, StateSet};
pub use symbol::{Alphabet, EPSILON, SymbolId, is_epsilon};
pub use traits::{Recognizer, Simulate};
