//! Seams shared by the deterministic and nondeterministic automata.

use crate::automaton::symbol::Alphabet;
use crate::error::InvalidSymbol;

/// A single in-progress execution of an automaton over one input.
pub trait Simulate {
    /// Returns whether the input consumed so far is accepted.
    fn is_accepting(&self) -> bool;

    /// Feeds a single character and returns whether any live state remains.
    fn feed(&mut self, input: char) -> bool;

    /// Feeds an entire string and returns whether the automaton accepts it, stopping at the
    /// first character that leaves no live state.
    fn run(mut self, input: &str) -> bool
    where
        Self: Sized,
    {
        for symbol in input.chars() {
            if !self.feed(symbol) {
                return false;
            }
        }
        self.is_accepting()
    }
}

/// An automaton that decides whole words.
///
/// Implementors are immutable; every call to [`Recognizer::start`] hands out a fresh run that owns
/// all the mutable state of the simulation.
pub trait Recognizer {
    type Run<'a>: Simulate
    where
        Self: 'a;

    fn alphabet(&self) -> &Alphabet;

    /// Begin a new run positioned before the first input character.
    fn start(&self) -> Self::Run<'_>;

    /// Runs the automaton without checking the input against the alphabet first. Characters the
    /// automaton does not know simply have no transitions.
    fn simulate(&self, input: &str) -> bool {
        self.start().run(input)
    }

    fn check_input(&self, input: &str) -> Result<(), InvalidSymbol> {
        self.alphabet().check_input(input)
    }

    fn is_valid_input(&self, input: &str) -> bool {
        self.alphabet().is_valid_input(input)
    }

    /// Like [`Recognizer::accepts`], but hands back the offending symbol instead of logging it.
    fn try_accepts(&self, input: &str) -> Result<bool, InvalidSymbol> {
        self.check_input(input)?;
        Ok(self.simulate(input))
    }

    /// Returns whether the automaton accepts `input`. Input with a character outside the alphabet
    /// is rejected before simulation starts.
    fn accepts(&self, input: &str) -> bool {
        self.is_valid_input(input) && self.simulate(input)
    }
}
