//! Canonical closed-list keys.

use smallvec::SmallVec;

use super::{Placement, State};

/// Inline capacity of a key; boards up to this size never allocate.
const INLINE_PLACEMENTS: usize = 16;

/// Structural, order-preserving key of a [`State`].
///
/// Two keys are equal exactly when the placement sequences are equal
/// element by element. `[(0,1),(1,3)]` and `[(1,3),(0,1)]` are different
/// keys even though they hold the same queens.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StateKey(SmallVec<[Placement; INLINE_PLACEMENTS]>);

impl StateKey {
    /// Number of placements encoded in the key.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true for the key of the empty state.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The encoded placement sequence.
    pub fn as_slice(&self) -> &[Placement] {
        &self.0
    }
}

impl From<&State> for StateKey {
    fn from(state: &State) -> Self {
        StateKey(SmallVec::from_slice(state.placements()))
    }
}
