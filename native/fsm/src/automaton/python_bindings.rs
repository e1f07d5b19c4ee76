//! PyO3 bindings for the automaton module.
//!
//! Automata are built from the same JSON descriptions the command line tool reads.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::automaton::{Dfa, Nfa, Recognizer, TransitionGraph};
use crate::description::{Description, DfaDescription, NfaDescription};

fn value_error(err: impl std::fmt::Display) -> PyErr {
    PyValueError::new_err(err.to_string())
}

fn state_names(graph: &TransitionGraph) -> Vec<String> {
    graph.state_names().map(str::to_owned).collect()
}

fn symbols(graph: &TransitionGraph) -> Vec<String> {
    graph.alphabet().iter().map(String::from).collect()
}

fn start_state(graph: &TransitionGraph) -> String {
    graph
        .state_name(graph.start_state())
        .unwrap_or_default()
        .to_owned()
}

fn accept_states(graph: &TransitionGraph) -> Vec<String> {
    graph
        .names_of(graph.accepting_states())
        .into_iter()
        .map(str::to_owned)
        .collect()
}

/// An Epsilon Non-deterministic Finite Automaton.
#[pyclass(name = "NFA", module = "fsm", frozen)]
pub struct PyNfa {
    nfa: Nfa,
}

#[pymethods]
impl PyNfa {
    /// Build from a JSON description; raises ValueError if it is malformed.
    #[staticmethod]
    fn from_json(json: &str) -> PyResult<Self> {
        let description = NfaDescription::from_json_str(json).map_err(value_error)?;
        let nfa = Nfa::try_from(&description).map_err(value_error)?;
        Ok(Self { nfa })
    }

    fn accepts(&self, word: &str) -> bool {
        self.nfa.accepts(word)
    }

    fn is_valid_input(&self, word: &str) -> bool {
        self.nfa.is_valid_input(word)
    }

    #[getter]
    fn states(&self) -> Vec<String> {
        state_names(self.nfa.graph())
    }

    #[getter]
    fn symbols(&self) -> Vec<String> {
        symbols(self.nfa.graph())
    }

    #[getter]
    fn start_state(&self) -> String {
        start_state(self.nfa.graph())
    }

    #[getter]
    fn accept_states(&self) -> Vec<String> {
        accept_states(self.nfa.graph())
    }

    fn __repr__(&self) -> String {
        format!("NFA(states={})", self.nfa.graph().num_states())
    }
}

/// A Deterministic Finite Automaton.
#[pyclass(name = "DFA", module = "fsm", frozen)]
pub struct PyDfa {
    dfa: Dfa,
}

#[pymethods]
impl PyDfa {
    /// Build from a JSON description; raises ValueError if it is malformed.
    #[staticmethod]
    fn from_json(json: &str) -> PyResult<Self> {
        let description = DfaDescription::from_json_str(json).map_err(value_error)?;
        let dfa = Dfa::try_from(&description).map_err(value_error)?;
        Ok(Self { dfa })
    }

    fn accepts(&self, word: &str) -> bool {
        self.dfa.accepts(word)
    }

    fn is_valid_input(&self, word: &str) -> bool {
        self.dfa.is_valid_input(word)
    }

    /// Whether every state has a transition on every symbol.
    fn is_total(&self) -> bool {
        self.dfa.is_total()
    }

    #[getter]
    fn states(&self) -> Vec<String> {
        state_names(self.dfa.graph())
    }

    #[getter]
    fn symbols(&self) -> Vec<String> {
        symbols(self.dfa.graph())
    }

    #[getter]
    fn start_state(&self) -> String {
        start_state(self.dfa.graph())
    }

    #[getter]
    fn accept_states(&self) -> Vec<String> {
        accept_states(self.dfa.graph())
    }

    fn __repr__(&self) -> String {
        format!("DFA(states={})", self.dfa.graph().num_states())
    }
}

/// Register the automaton classes.
pub fn automaton(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyNfa>()?;
    m.add_class::<PyDfa>()?;
    Ok(())
}
