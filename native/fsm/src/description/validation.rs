//! Structural rules for automaton descriptions:
//!
//! 1. The set of states must not be empty.
//! 2. The start state must be in the set of states.
//! 3. The set of input symbols must not be empty, and each symbol is a single character.
//! 4. The set of accept states must not be empty and must be a subset of the set of states.
//! 5. Transitions go from declared states, on declared symbols, to declared states. An NFA may
//!    omit transitions and use epsilon; every row of a DFA table covers each symbol exactly once.

use std::collections::HashSet;

use tracing::warn;

use super::{DfaDescription, EPSILON_KEY, NfaDescription, single_char};
use crate::error::ValidationError;

pub(super) fn validate_nfa(nfa: &NfaDescription) -> Result<(), ValidationError> {
    check_nfa(nfa).inspect_err(|err| warn!(%err, "invalid nfa description"))
}

pub(super) fn validate_dfa(dfa: &DfaDescription) -> Result<(), ValidationError> {
    check_dfa(dfa).inspect_err(|err| warn!(%err, "invalid dfa description"))
}

fn check_nfa(nfa: &NfaDescription) -> Result<(), ValidationError> {
    let states = check_states(&nfa.states, &nfa.start_state)?;
    let symbols = check_symbols(&nfa.symbols)?;
    check_accept_states(&states, &nfa.accept_states)?;

    for (state, row) in &nfa.transitions {
        check_source(&states, state)?;
        for (symbol, targets) in row {
            if symbol != EPSILON_KEY {
                check_symbol(&symbols, state, symbol)?;
            }
            for target in targets {
                check_target(&states, state, symbol, target)?;
            }
        }
    }

    Ok(())
}

fn check_dfa(dfa: &DfaDescription) -> Result<(), ValidationError> {
    let states = check_states(&dfa.states, &dfa.start_state)?;
    let symbols = check_symbols(&dfa.symbols)?;
    check_accept_states(&states, &dfa.accept_states)?;

    for (state, row) in &dfa.transitions {
        check_source(&states, state)?;
        for (symbol, target) in row {
            check_symbol(&symbols, state, symbol)?;
            check_target(&states, state, symbol, target)?;
        }
        // JSON objects cannot repeat a key, so covering every symbol means exactly once.
        if let Some(missing) = dfa.symbols.iter().find(|s| !row.contains_key(s.as_str())) {
            return Err(ValidationError::IncompleteTransitions {
                state: state.clone(),
                symbol: missing.clone(),
            });
        }
    }

    Ok(())
}

fn check_states<'a>(
    states: &'a [String],
    start_state: &str,
) -> Result<HashSet<&'a str>, ValidationError> {
    if states.is_empty() {
        return Err(ValidationError::EmptyStates);
    }

    let mut declared = HashSet::with_capacity(states.len());
    for state in states {
        if !declared.insert(state.as_str()) {
            return Err(ValidationError::DuplicateState(state.clone()));
        }
    }

    if !declared.contains(start_state) {
        return Err(ValidationError::UnknownStartState(start_state.to_owned()));
    }

    Ok(declared)
}

fn check_symbols(symbols: &[String]) -> Result<HashSet<&str>, ValidationError> {
    if symbols.is_empty() {
        return Err(ValidationError::EmptyAlphabet);
    }

    let mut declared = HashSet::with_capacity(symbols.len());
    for symbol in symbols {
        if symbol == EPSILON_KEY {
            return Err(ValidationError::ReservedSymbol(symbol.clone()));
        }
        if single_char(symbol).is_none() {
            return Err(ValidationError::SymbolNotCharacter(symbol.clone()));
        }
        if !declared.insert(symbol.as_str()) {
            return Err(ValidationError::DuplicateSymbol(symbol.clone()));
        }
    }

    Ok(declared)
}

fn check_accept_states(
    states: &HashSet<&str>,
    accept_states: &[String],
) -> Result<(), ValidationError> {
    if accept_states.is_empty() {
        return Err(ValidationError::EmptyAcceptStates);
    }
    match accept_states.iter().find(|s| !states.contains(s.as_str())) {
        Some(unknown) => Err(ValidationError::UnknownAcceptState(unknown.clone())),
        None => Ok(()),
    }
}

fn check_source(states: &HashSet<&str>, state: &str) -> Result<(), ValidationError> {
    if states.contains(state) {
        Ok(())
    } else {
        Err(ValidationError::UnknownSourceState(state.to_owned()))
    }
}

fn check_symbol(symbols: &HashSet<&str>, state: &str, symbol: &str) -> Result<(), ValidationError> {
    if symbols.contains(symbol) {
        Ok(())
    } else {
        Err(ValidationError::UnknownSymbol {
            state: state.to_owned(),
            symbol: symbol.to_owned(),
        })
    }
}

fn check_target(
    states: &HashSet<&str>,
    state: &str,
    symbol: &str,
    target: &str,
) -> Result<(), ValidationError> {
    if states.contains(target) {
        Ok(())
    } else {
        Err(ValidationError::UnknownTargetState {
            state: state.to_owned(),
            symbol: symbol.to_owned(),
            target: target.to_owned(),
        })
    }
}
