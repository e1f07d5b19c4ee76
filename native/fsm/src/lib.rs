//! Decide whether a word is accepted by a finite automaton.
//!
//! Automata are described declaratively (states, alphabet, start state, accepting states and a
//! transition table), validated, and frozen into an immutable [`TransitionGraph`]. Nondeterministic
//! automata, epsilon transitions included, are run by subset simulation: the set of states the
//! automaton could be in is carried from one character to the next, closed under epsilon
//! transitions after every step.
//!
//! ```
//! use fsm::{Nfa, Recognizer, TransitionGraph};
//!
//! let nfa: Nfa = TransitionGraph::builder()
//!     .with_states(["q0", "q1", "q2"])
//!     .with_symbols(['a'])
//!     .with_start_state("q0")
//!     .with_accept_states(["q2"])
//!     .with_epsilon_transition("q0", "q1")
//!     .with_transition("q1", 'a', "q2")
//!     .build()?
//!     .into();
//!
//! assert!(nfa.accepts("a"));
//! assert!(!nfa.accepts("aa"));
//! # Ok::<(), fsm::error::BuildError>(())
//! ```

pub mod automaton;
pub mod description;
pub mod error;

pub use automaton::{Dfa, Nfa, Recognizer, Simulate, TransitionGraph};
pub use description::{Description, DfaDescription, NfaDescription, load_dfa, load_nfa};
pub use error::{Error, Result};

#[cfg(feature = "python")]
use pyo3::prelude::*;

#[cfg(feature = "python")]
#[pymodule]
fn fsm(m: &Bound<'_, PyModule>) -> PyResult<()> {
    automaton::automaton(m)
}
