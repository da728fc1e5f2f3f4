//! State ids and state sets.

use fixedbitset::FixedBitSet;
use std::fmt;

/// A state identifier. Valid ids for an automaton with `n` states are `0..n`.
pub type StateId = u32;

/// A set of states backed by a fixed-size bit set.
///
/// Equality is membership equality: two sets holding the same states compare
/// equal even when their underlying capacities differ.
#[derive(Clone)]
pub struct StateSet {
    bits: FixedBitSet,
}

impl StateSet {
    /// Create an empty set sized for `capacity` states.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bits: FixedBitSet::with_capacity(capacity),
        }
    }

    /// Create a set containing only `state`.
    pub fn singleton(state: StateId, capacity: usize) -> Self {
        let mut set = Self::with_capacity(capacity);
        set.insert(state);
        set
    }

    /// Insert a state, growing the backing storage if needed.
    pub fn insert(&mut self, state: StateId) {
        let idx = state as usize;
        if idx >= self.bits.len() {
            self.bits.grow(idx + 1);
        }
        self.bits.insert(idx);
    }

    pub fn contains(&self, state: StateId) -> bool {
        let idx = state as usize;
        idx < self.bits.len() && self.bits.contains(idx)
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_clear()
    }

    /// Number of states in the set.
    pub fn len(&self) -> usize {
        self.bits.count_ones(..)
    }

    /// Iterate the states in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = StateId> + '_ {
        self.bits.ones().map(|i| i as StateId)
    }

    /// Add every state of `other` to this set.
    pub fn union_with(&mut self, other: &StateSet) {
        if other.bits.len() > self.bits.len() {
            self.bits.grow(other.bits.len());
        }
        self.bits.union_with(&other.bits);
    }

    /// Whether this set shares at least one state with `other`.
    pub fn intersects(&self, other: &StateSet) -> bool {
        self.bits.intersection(&other.bits).next().is_some()
    }

    /// Whether every state of this set is also in `other`.
    pub fn is_subset(&self, other: &StateSet) -> bool {
        self.iter().all(|state| other.contains(state))
    }
}

impl PartialEq for StateSet {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
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
        let mut set = Self::with_capacity(0);
        for state in iter {
            set.insert(state);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_contains() {
        let mut set = StateSet::with_capacity(8);
        assert!(set.is_empty());

        set.insert(2);
        set.insert(5);
        assert_eq!(set.len(), 2);
        assert!(set.contains(2));
        assert!(set.contains(5));
        assert!(!set.contains(3));
        assert!(!set.contains(100));
    }

    #[test]
    fn test_union_with() {
        let mut left: StateSet = [0, 3].into_iter().collect();
        let right: StateSet = [1, 3, 7].into_iter().collect();

        left.union_with(&right);
        assert_eq!(left, [0, 1, 3, 7].into_iter().collect::<StateSet>());
    }

    #[test]
    fn test_intersects() {
        let a: StateSet = [1, 2].into_iter().collect();
        let b: StateSet = [2, 4].into_iter().collect();
        let c: StateSet = [0, 3].into_iter().collect();

        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));
        assert!(!a.intersects(&StateSet::with_capacity(0)));
    }

    #[test]
    fn test_equality_ignores_capacity() {
        let small = StateSet::singleton(1, 2);
        let large = StateSet::singleton(1, 64);
        assert_eq!(small, large);
    }

    #[test]
    fn test_is_subset() {
        let inner: StateSet = [1, 4].into_iter().collect();
        let outer: StateSet = [0, 1, 4].into_iter().collect();
        assert!(inner.is_subset(&outer));
        assert!(!outer.is_subset(&inner));
        assert!(StateSet::with_capacity(4).is_subset(&inner));
    }
}
