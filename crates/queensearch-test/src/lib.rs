//! Shared test fixtures for queensearch crates.
//!
//! This crate provides data and pure helper functions for testing. It only
//! depends on `queensearch-core` so every other crate can use it as a
//! dev-dependency.
//!
//! - [`KNOWN_SOLUTION_COUNTS`] - canonical N-Queens solution counts
//! - [`state`] - row-by-row state from a column list
//! - [`assert_valid_solution`] - checks a reported solution
//! - [`all_strategies`], [`all_pruning_levels`] - parameter sweeps
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! queensearch-test = { workspace = true }
//! ```

use queensearch_core::{HeuristicKind, PruningLevel, SearchStrategy, State};

/// Number of distinct solutions for small boards, `(N, count)`.
pub const KNOWN_SOLUTION_COUNTS: &[(usize, usize)] = &[
    (1, 1),
    (2, 0),
    (3, 0),
    (4, 2),
    (5, 10),
    (6, 4),
    (7, 40),
    (8, 92),
];

/// Boards with no solution at all.
pub const UNSOLVABLE_SIZES: &[usize] = &[2, 3];

/// Both 4-queens solutions as column lists, in ascending lexicographic order.
pub const FOUR_QUEENS_SOLUTIONS: [[usize; 4]; 2] = [[1, 3, 0, 2], [2, 0, 3, 1]];

/// Returns the canonical solution count for `n`, if tabulated.
pub fn known_solution_count(n: usize) -> Option<usize> {
    KNOWN_SOLUTION_COUNTS
        .iter()
        .find(|(size, _)| *size == n)
        .map(|(_, count)| *count)
}

/// Builds a row-by-row state: row `i` holds a queen in `columns[i]`.
pub fn state(columns: &[usize]) -> State {
    State::from_columns(columns)
}

/// Panics unless `solution` is a complete, conflict-free placement built row
/// by row on an `n`×`n` board.
pub fn assert_valid_solution(solution: &State, n: usize) {
    assert_eq!(solution.len(), n, "solution {} has wrong length", solution);
    for (row, placement) in solution.placements().iter().enumerate() {
        assert_eq!(placement.row, row, "solution {} is not row-ordered", solution);
        assert!(placement.column < n, "solution {} leaves the board", solution);
    }
    assert_eq!(
        solution.conflict_count(),
        0,
        "solution {} has attacking queens",
        solution
    );
}

/// Every search strategy paired with a heuristic where one is needed.
pub fn all_strategies() -> Vec<(SearchStrategy, Option<HeuristicKind>)> {
    vec![
        (SearchStrategy::BreadthFirst, None),
        (SearchStrategy::DepthFirst, None),
        (SearchStrategy::BestFirst, Some(HeuristicKind::H1)),
        (SearchStrategy::BestFirst, Some(HeuristicKind::H2)),
    ]
}

/// Every pruning level, weakest first.
pub fn all_pruning_levels() -> [PruningLevel; 4] {
    [
        PruningLevel::None,
        PruningLevel::Minimal,
        PruningLevel::Partial,
        PruningLevel::Full,
    ]
}

/// Sorted column lists of the given states.
pub fn sorted_columns(states: &[State]) -> Vec<Vec<usize>> {
    let mut columns: Vec<Vec<usize>> = states.iter().map(State::columns).collect();
    columns.sort();
    columns
}
