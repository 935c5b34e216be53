//! Immutable partial and complete placement sequences.

use std::fmt;

use super::{Placement, StateKey};

/// An ordered sequence of queen placements, at most N long.
///
/// States are values: a child is always a fresh copy of its parent with one
/// placement appended, never a view into the parent's storage.
///
/// # Examples
///
/// ```
/// use queensearch_core::State;
///
/// let state = State::from_columns(&[1, 3, 0, 2]);
/// assert!(state.is_terminal(4));
/// assert!(!state.has_conflicts());
///
/// let clash = State::from_columns(&[0, 0]);
/// assert!(clash.has_conflicts());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct State {
    placements: Vec<Placement>,
}

impl State {
    /// The empty initial state.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a state from an explicit placement sequence.
    pub fn from_placements(placements: Vec<Placement>) -> Self {
        Self { placements }
    }

    /// Creates a row-by-row state where row `i` holds a queen in `columns[i]`.
    pub fn from_columns(columns: &[usize]) -> Self {
        let placements = columns
            .iter()
            .enumerate()
            .map(|(row, &column)| Placement::new(row, column))
            .collect();
        Self { placements }
    }

    /// Number of placed queens.
    #[inline]
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    /// Returns true for the initial state.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Depth in the search tree; equal to the number of placed queens.
    #[inline]
    pub fn depth(&self) -> usize {
        self.placements.len()
    }

    /// The placement sequence in placement order.
    #[inline]
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// The most recently placed queen.
    #[inline]
    pub fn last(&self) -> Option<&Placement> {
        self.placements.last()
    }

    /// Column of each placement, in placement order.
    pub fn columns(&self) -> Vec<usize> {
        self.placements.iter().map(|p| p.column).collect()
    }

    /// Returns true once all `board_size` queens are placed.
    #[inline]
    pub fn is_terminal(&self, board_size: usize) -> bool {
        self.placements.len() == board_size
    }

    /// Returns true if any two placements attack each other.
    pub fn has_conflicts(&self) -> bool {
        self.placements
            .iter()
            .enumerate()
            .any(|(i, a)| self.placements[i + 1..].iter().any(|b| a.attacks(b)))
    }

    /// Number of attacking pairs.
    pub fn conflict_count(&self) -> usize {
        self.placements
            .iter()
            .enumerate()
            .map(|(i, a)| {
                self.placements[i + 1..]
                    .iter()
                    .filter(|b| a.attacks(b))
                    .count()
            })
            .sum()
    }

    /// Returns true if the last placement shares a column with an earlier one.
    ///
    /// Diagonals and rows are not inspected.
    pub fn last_shares_column(&self) -> bool {
        match self.placements.split_last() {
            Some((last, earlier)) => earlier.iter().any(|p| p.column == last.column),
            None => false,
        }
    }

    /// Returns true for a complete, conflict-free placement.
    pub fn is_solution(&self, board_size: usize) -> bool {
        self.is_terminal(board_size) && !self.has_conflicts()
    }

    /// Canonical key for closed-list membership.
    pub fn key(&self) -> StateKey {
        StateKey::from(self)
    }

    /// Returns a new state with `placement` appended.
    pub fn extended_with(&self, placement: Placement) -> State {
        let mut placements = Vec::with_capacity(self.placements.len() + 1);
        placements.extend_from_slice(&self.placements);
        placements.push(placement);
        State { placements }
    }

    /// Generates the children of this state on a `board_size` board.
    ///
    /// Each child places one more queen in row `len()`, one child per column
    /// in ascending column order. Terminal states have no children. No
    /// filtering happens here.
    pub fn children(&self, board_size: usize) -> impl Iterator<Item = State> + '_ {
        let row = self.placements.len();
        let columns = if row < board_size { 0..board_size } else { 0..0 };
        columns.map(move |column| self.extended_with(Placement::new(row, column)))
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, placement) in self.placements.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", placement)?;
        }
        f.write_str("]")
    }
}
