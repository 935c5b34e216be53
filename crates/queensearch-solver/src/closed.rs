//! Closed set of already-processed states.

use std::collections::HashSet;

use queensearch_core::StateKey;

/// Deduplicates popped states by their structural key.
///
/// # Example
///
/// ```
/// use queensearch_core::State;
/// use queensearch_solver::closed::ClosedSet;
///
/// let mut closed = ClosedSet::new();
/// assert!(closed.insert(State::from_columns(&[0, 2]).key()));
/// assert!(!closed.insert(State::from_columns(&[0, 2]).key()));
/// assert_eq!(closed.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct ClosedSet {
    keys: HashSet<StateKey>,
}

impl ClosedSet {
    /// Creates an empty closed set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a key, returning true if it was not present yet.
    #[inline]
    pub fn insert(&mut self, key: StateKey) -> bool {
        self.keys.insert(key)
    }

    /// Returns true if the key has been inserted before.
    #[inline]
    pub fn contains(&self, key: &StateKey) -> bool {
        self.keys.contains(key)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns true if nothing has been closed.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
