//! Heuristic scoring for best-first search.
//!
//! Both heuristics are pure functions of a partial state. Lower scores are
//! more promising; the best-first frontier always pops the minimum.
//!
//! - **H1** (`row_weight_score`): `(N - depth) * sum(weight(row))` over the
//!   placed queens, where for a 1-indexed row `r` the weight is `N - r + 1`
//!   in the top half (`r <= N / 2`) and `r` otherwise. This is a relative
//!   ordering measure, not an admissible cost estimate.
//! - **H2** (`conflict_score`): attacking pairs so far plus the number of
//!   rows still to fill.

use queensearch_core::{HeuristicKind, State};

/// A heuristic bound to a board size.
///
/// # Example
///
/// ```
/// use queensearch_core::{HeuristicKind, State};
/// use queensearch_solver::heuristic::Heuristic;
///
/// let h2 = Heuristic::new(HeuristicKind::H2, 4);
/// // one attacking pair, two rows left
/// assert_eq!(h2.score(&State::from_columns(&[0, 1])), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Heuristic {
    kind: HeuristicKind,
    board_size: usize,
}

impl Heuristic {
    /// Creates a heuristic of the given kind for an N×N board.
    pub fn new(kind: HeuristicKind, board_size: usize) -> Self {
        Self { kind, board_size }
    }

    /// Returns the heuristic kind.
    pub fn kind(&self) -> HeuristicKind {
        self.kind
    }

    /// Returns the board size the heuristic scores for.
    pub fn board_size(&self) -> usize {
        self.board_size
    }

    /// Scores a state; lower is more promising.
    #[inline]
    pub fn score(&self, state: &State) -> u64 {
        evaluate(self.kind, self.board_size, state)
    }
}

/// Scores `state` with the heuristic selected by `kind`.
pub fn evaluate(kind: HeuristicKind, board_size: usize, state: &State) -> u64 {
    match kind {
        HeuristicKind::H1 => row_weight_score(board_size, state),
        HeuristicKind::H2 => conflict_score(board_size, state),
    }
}

/// Weight of a 1-indexed row: edge rows weigh the most.
#[inline]
pub fn row_weight(board_size: usize, row: usize) -> u64 {
    if row <= board_size / 2 {
        (board_size - row + 1) as u64
    } else {
        row as u64
    }
}

/// H1: remaining rows times the summed row weights of placed queens.
pub fn row_weight_score(board_size: usize, state: &State) -> u64 {
    let remaining = board_size.saturating_sub(state.depth()) as u64;
    let weights: u64 = state
        .placements()
        .iter()
        .map(|p| row_weight(board_size, p.row + 1))
        .sum();
    remaining * weights
}

/// H2: attacking pairs plus remaining rows.
pub fn conflict_score(board_size: usize, state: &State) -> u64 {
    let remaining = board_size.saturating_sub(state.depth()) as u64;
    state.conflict_count() as u64 + remaining
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_weight_favors_edges() {
        // N = 8: rows 1..=4 weigh 8,7,6,5; rows 5..=8 weigh 5,6,7,8
        let weights: Vec<u64> = (1..=8).map(|r| row_weight(8, r)).collect();
        assert_eq!(weights, vec![8, 7, 6, 5, 5, 6, 7, 8]);
    }

    #[test]
    fn test_row_weight_odd_board() {
        // N / 2 == 2 for N = 5
        let weights: Vec<u64> = (1..=5).map(|r| row_weight(5, r)).collect();
        assert_eq!(weights, vec![5, 4, 3, 4, 5]);
    }

    #[test]
    fn test_h1_scores() {
        assert_eq!(row_weight_score(4, &State::empty()), 0);
        assert_eq!(row_weight_score(4, &State::from_columns(&[1])), 3 * 4);
        assert_eq!(row_weight_score(4, &State::from_columns(&[1, 3])), 2 * (4 + 3));
        assert_eq!(row_weight_score(4, &State::from_columns(&[1, 3, 0])), 4 + 3 + 3);
        assert_eq!(row_weight_score(4, &State::from_columns(&[1, 3, 0, 2])), 0);
    }

    #[test]
    fn test_h1_ignores_columns() {
        let a = State::from_columns(&[0, 0]);
        let b = State::from_columns(&[1, 3]);
        assert_eq!(row_weight_score(6, &a), row_weight_score(6, &b));
    }

    #[test]
    fn test_h2_scores() {
        assert_eq!(conflict_score(4, &State::empty()), 4);
        assert_eq!(conflict_score(4, &State::from_columns(&[1, 3])), 2);
        assert_eq!(conflict_score(4, &State::from_columns(&[0, 0])), 3);
        assert_eq!(conflict_score(4, &State::from_columns(&[0, 1, 2, 3])), 6);
        assert_eq!(conflict_score(4, &State::from_columns(&[1, 3, 0, 2])), 0);
    }

    #[test]
    fn test_evaluate_dispatches_on_kind() {
        let state = State::from_columns(&[2, 0]);
        assert_eq!(
            evaluate(HeuristicKind::H1, 5, &state),
            row_weight_score(5, &state)
        );
        assert_eq!(
            evaluate(HeuristicKind::H2, 5, &state),
            conflict_score(5, &state)
        );
    }

    #[test]
    fn test_heuristic_accessors() {
        let h = Heuristic::new(HeuristicKind::H1, 6);
        assert_eq!(h.kind(), HeuristicKind::H1);
        assert_eq!(h.board_size(), 6);
        assert_eq!(h.score(&State::from_columns(&[0])), 5 * 6);
    }
}
