//! Pruning policy.
//!
//! Decides which generated children enter the frontier and whether a popped
//! state is expanded. Generation itself never filters; the engine asks the
//! policy about each child.

use queensearch_core::{PruningLevel, State};

/// Applies a [`PruningLevel`] at generation and expansion time.
///
/// `Minimal` checks only the column of the newest queen against earlier
/// queens; diagonals are not inspected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PruningPolicy {
    level: PruningLevel,
}

impl PruningPolicy {
    /// Creates a policy for the given level.
    pub fn new(level: PruningLevel) -> Self {
        Self { level }
    }

    /// Returns the pruning level.
    pub fn level(&self) -> PruningLevel {
        self.level
    }

    /// Generation-time check: returns true if `child` may be enqueued.
    pub fn admits_child(&self, child: &State) -> bool {
        match self.level {
            PruningLevel::None => true,
            PruningLevel::Minimal => !child.last_shares_column(),
            PruningLevel::Partial | PruningLevel::Full => !child.has_conflicts(),
        }
    }

    /// Expansion-time check: returns true if a popped non-terminal `state`
    /// may generate children.
    pub fn admits_expansion(&self, state: &State) -> bool {
        match self.level {
            PruningLevel::Full => !state.has_conflicts(),
            PruningLevel::None | PruningLevel::Minimal | PruningLevel::Partial => true,
        }
    }
}

impl From<PruningLevel> for PruningPolicy {
    fn from(level: PruningLevel) -> Self {
        Self::new(level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy(level: PruningLevel) -> PruningPolicy {
        PruningPolicy::new(level)
    }

    #[test]
    fn test_none_admits_everything() {
        let p = policy(PruningLevel::None);
        assert!(p.admits_child(&State::from_columns(&[0, 0])));
        assert!(p.admits_child(&State::from_columns(&[0, 1])));
        assert!(p.admits_expansion(&State::from_columns(&[0, 0])));
    }

    #[test]
    fn test_minimal_checks_columns_only() {
        let p = policy(PruningLevel::Minimal);
        assert!(!p.admits_child(&State::from_columns(&[2, 2])));
        // diagonal attack survives minimal pruning
        assert!(p.admits_child(&State::from_columns(&[0, 1])));
        assert!(p.admits_expansion(&State::from_columns(&[0, 1])));
    }

    #[test]
    fn test_minimal_only_looks_at_last_queen() {
        let p = policy(PruningLevel::Minimal);
        // earlier queens share a column, last one does not
        assert!(p.admits_child(&State::from_columns(&[0, 0, 2])));
    }

    #[test]
    fn test_partial_checks_all_conflicts_at_generation() {
        let p = policy(PruningLevel::Partial);
        assert!(!p.admits_child(&State::from_columns(&[0, 1])));
        assert!(!p.admits_child(&State::from_columns(&[0, 0])));
        assert!(p.admits_child(&State::from_columns(&[0, 2])));
        assert!(p.admits_expansion(&State::from_columns(&[0, 1])));
    }

    #[test]
    fn test_full_checks_at_expansion_too() {
        let p = policy(PruningLevel::Full);
        assert!(!p.admits_child(&State::from_columns(&[0, 1])));
        assert!(!p.admits_expansion(&State::from_columns(&[0, 1])));
        assert!(p.admits_expansion(&State::from_columns(&[0, 2])));
        assert!(p.admits_expansion(&State::empty()));
    }

    #[test]
    fn test_single_queen_children_always_admitted() {
        for level in [
            PruningLevel::None,
            PruningLevel::Minimal,
            PruningLevel::Partial,
            PruningLevel::Full,
        ] {
            let p = policy(level);
            for child in State::empty().children(5) {
                assert!(p.admits_child(&child), "{} rejected {}", level, child);
            }
        }
    }

    #[test]
    fn test_default_level_is_full() {
        assert_eq!(PruningPolicy::default().level(), PruningLevel::Full);
        assert_eq!(PruningPolicy::from(PruningLevel::Minimal).level(), PruningLevel::Minimal);
    }
}
