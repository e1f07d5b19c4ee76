//! Input screening against the declared alphabet.

use tracing::warn;

use crate::automaton::symbol::Alphabet;
use crate::error::InvalidSymbol;

impl Alphabet {
    /// Finds the first character of `input` that is not in the alphabet.
    pub fn check_input(&self, input: &str) -> Result<(), InvalidSymbol> {
        match input
            .chars()
            .enumerate()
            .find(|&(_, symbol)| !self.contains(symbol))
        {
            Some((position, symbol)) => Err(InvalidSymbol { symbol, position }),
            None => Ok(()),
        }
    }

    /// Returns whether every character of `input` is in the alphabet, logging the first one
    /// that is not.
    pub fn is_valid_input(&self, input: &str) -> bool {
        match self.check_input(input) {
            Ok(()) => true,
            Err(InvalidSymbol { symbol, position }) => {
                warn!(%symbol, position, "invalid symbol in input string");
                false
            }
        }
    }
}
