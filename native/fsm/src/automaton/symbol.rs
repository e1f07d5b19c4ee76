//! Symbol types for automata transitions.

use indexmap::IndexSet;

/// A symbol identifier, the declaration index of the symbol's character.
/// The special value `EPSILON` represents an epsilon (empty) transition.
pub type SymbolId = u32;

/// Special symbol ID representing epsilon (empty) transitions.
///
/// Characters top out at `0x10FFFF`, so no interned symbol can ever be assigned this id.
pub const EPSILON: SymbolId = u32::MAX;

/// Check if a symbol is an epsilon transition.
#[inline]
pub fn is_epsilon(symbol: SymbolId) -> bool {
    symbol == EPSILON
}

/// The declared input alphabet, interning each character to a dense `SymbolId`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Alphabet {
    symbols: IndexSet<char>,
}

impl Alphabet {
    /// An empty alphabet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a symbol, returning its id and whether it was newly declared.
    pub fn insert(&mut self, symbol: char) -> (SymbolId, bool) {
        let (idx, inserted) = self.symbols.insert_full(symbol);
        (idx as SymbolId, inserted)
    }

    /// Id of `symbol`, if declared.
    pub fn id(&self, symbol: char) -> Option<SymbolId> {
        self.symbols.get_index_of(&symbol).map(|idx| idx as SymbolId)
    }

    /// The character behind an id. Epsilon has no character.
    pub fn symbol(&self, id: SymbolId) -> Option<char> {
        if is_epsilon(id) {
            return None;
        }
        self.symbols.get_index(id as usize).copied()
    }

    /// Whether `symbol` is declared.
    pub fn contains(&self, symbol: char) -> bool {
        self.symbols.contains(&symbol)
    }

    /// Number of declared symbols.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether no symbol is declared.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Iterate over the symbols in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.symbols.iter().copied()
    }
}

impl FromIterator<char> for Alphabet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self {
            symbols: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epsilon() {
        assert!(is_epsilon(EPSILON));
        assert!(!is_epsilon(0));
        assert!(!is_epsilon(100));
    }

    #[test]
    fn ids_follow_declaration_order() {
        let mut alphabet = Alphabet::new();
        assert_eq!(alphabet.insert('b'), (0, true));
        assert_eq!(alphabet.insert('a'), (1, true));
        assert_eq!(alphabet.insert('b'), (0, false));

        assert_eq!(alphabet.id('a'), Some(1));
        assert_eq!(alphabet.id('c'), None);
        assert_eq!(alphabet.symbol(0), Some('b'));
        assert_eq!(alphabet.iter().collect::<String>(), "ba");
    }

    #[test]
    fn epsilon_has_no_character() {
        let alphabet: Alphabet = "ab".chars().collect();
        assert_eq!(alphabet.symbol(EPSILON), None);
        assert_eq!(alphabet.symbol(2), None);
    }

    #[test]
    fn underscore_is_an_ordinary_symbol() {
        let alphabet: Alphabet = "_".chars().collect();
        assert!(alphabet.contains('_'));
        assert_eq!(alphabet.id('_'), Some(0));
    }
}
