//! State identifiers and the bit set the simulation tracks them in.

use fixedbitset::FixedBitSet;
use std::fmt;

/// A state identifier, the declaration index of the state's name.
pub type StateId = u32;

/// A set of states backed by a bit set sized to the automaton.
///
/// Lookups past the current capacity read as absent rather than panicking, so an id the
/// automaton never declared simply behaves like a state with no transitions.
#[derive(Clone, Default)]
pub struct StateSet {
    bits: FixedBitSet,
}

impl StateSet {
    /// Create an empty set able to hold `num_states` states without growing.
    pub fn with_capacity(num_states: usize) -> Self {
        Self {
            bits: FixedBitSet::with_capacity(num_states),
        }
    }

    /// Create a set holding only `state`.
    pub fn singleton(state: StateId, num_states: usize) -> Self {
        let mut set = Self::with_capacity(num_states);
        set.insert(state);
        set
    }

    /// Insert a state, returning `true` if it was not already present.
    pub fn insert(&mut self, state: StateId) -> bool {
        let idx = state as usize;
        if idx >= self.bits.len() {
            self.bits.grow(idx + 1);
        }
        !self.bits.put(idx)
    }

    /// Whether `state` is in the set; ids past the capacity are absent.
    pub fn contains(&self, state: StateId) -> bool {
        let idx = state as usize;
        idx < self.bits.len() && self.bits.contains(idx)
    }

    /// Whether the set holds no states.
    pub fn is_empty(&self) -> bool {
        self.bits.is_clear()
    }

    /// Number of states in the set.
    pub fn len(&self) -> usize {
        self.bits.count_ones(..)
    }

    /// Iterate over the states in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = StateId> + '_ {
        self.bits.ones().map(|i| i as StateId)
    }

    /// Add every state of `other`, growing if needed.
    pub fn union_with(&mut self, other: &StateSet) {
        if other.bits.len() > self.bits.len() {
            self.bits.grow(other.bits.len());
        }
        self.bits.union_with(&other.bits);
    }

    /// Whether the two sets share at least one state.
    pub fn intersects(&self, other: &StateSet) -> bool {
        !self.bits.is_disjoint(&other.bits)
    }

    /// Whether every state of `self` is also in `other`.
    pub fn is_subset(&self, other: &StateSet) -> bool {
        self.iter().all(|state| other.contains(state))
    }
}

/// Membership equality; the backing capacity does not matter.
impl PartialEq for StateSet {
    fn eq(&self, other: &Self) -> bool {
        self.is_subset(other) && other.is_subset(self)
    }
}

impl Eq for StateSet {}

impl fmt::Debug for StateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<StateId> for StateSet {
    fn from_iter<I: IntoIterator<Item = StateId>>(iter: I) -> Self {
        let mut set = Self::default();
        set.extend(iter);
        set
    }
}

impl Extend<StateId> for StateSet {
    fn extend<I: IntoIterator<Item = StateId>>(&mut self, iter: I) {
        for state in iter {
            self.insert(state);
        }
    }
}
