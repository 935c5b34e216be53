//! Tests for the board model.

use super::*;

fn state(pairs: &[(usize, usize)]) -> State {
    State::from_placements(pairs.iter().map(|&p| Placement::from(p)).collect())
}

#[test]
fn test_attacks_same_row_and_column() {
    let a = Placement::new(0, 0);
    assert!(a.attacks(&Placement::new(0, 3)));
    assert!(a.attacks(&Placement::new(3, 0)));
}

#[test]
fn test_attacks_diagonals() {
    let a = Placement::new(1, 2);
    // rising: row + column == 3
    assert!(a.attacks(&Placement::new(3, 0)));
    // falling: row - column == -1
    assert!(a.attacks(&Placement::new(2, 3)));
    assert!(a.attacks(&Placement::new(0, 1)));
    assert!(!a.attacks(&Placement::new(3, 1)));
}

#[test]
fn test_falling_diagonal_is_signed() {
    // (0,2) has row-col = -2, (2,0) has row-col = 2: no attack on falling,
    // but they do share the rising diagonal.
    let a = Placement::new(0, 2);
    let b = Placement::new(2, 0);
    assert_ne!(a.falling_diagonal(), b.falling_diagonal());
    assert!(a.attacks(&b));

    let c = Placement::new(0, 3);
    let d = Placement::new(3, 1);
    assert!(!c.attacks(&d));
}

#[test]
fn test_conflict_free_four_queens_prefix() {
    let s = state(&[(0, 0), (1, 2), (2, 4), (3, 1)]);
    assert!(!s.has_conflicts());
    assert_eq!(s.conflict_count(), 0);
}

#[test]
fn test_shared_column_conflict() {
    let s = state(&[(0, 0), (1, 0)]);
    assert!(s.has_conflicts());
    assert_eq!(s.conflict_count(), 1);
    assert!(s.last_shares_column());
}

#[test]
fn test_conflict_check_is_order_independent() {
    let s = state(&[(3, 1), (0, 0), (2, 4), (1, 2)]);
    assert!(!s.has_conflicts());

    let t = state(&[(2, 2), (0, 0)]);
    assert!(t.has_conflicts());
}

#[test]
fn test_conflict_count_counts_pairs() {
    // Every queen on the main diagonal attacks every other queen.
    let s = State::from_columns(&[0, 1, 2, 3]);
    assert_eq!(s.conflict_count(), 6);
}

#[test]
fn test_last_shares_column_ignores_diagonals() {
    let s = State::from_columns(&[0, 1]);
    assert!(s.has_conflicts());
    assert!(!s.last_shares_column());
    assert!(!State::empty().last_shares_column());
}

#[test]
fn test_children_extend_next_row() {
    let parent = State::from_columns(&[1]);
    let children: Vec<State> = parent.children(4).collect();

    assert_eq!(children.len(), 4);
    for (column, child) in children.iter().enumerate() {
        assert_eq!(child.len(), 2);
        assert_eq!(child.placements()[0], Placement::new(0, 1));
        assert_eq!(child.last(), Some(&Placement::new(1, column)));
    }
    // parent untouched
    assert_eq!(parent.len(), 1);
}

#[test]
fn test_children_of_empty_state() {
    let children: Vec<State> = State::empty().children(3).collect();
    assert_eq!(
        children,
        vec![
            State::from_columns(&[0]),
            State::from_columns(&[1]),
            State::from_columns(&[2]),
        ]
    );
}

#[test]
fn test_terminal_state_has_no_children() {
    let s = State::from_columns(&[1, 3, 0, 2]);
    assert!(s.is_terminal(4));
    assert_eq!(s.children(4).count(), 0);
}

#[test]
fn test_is_solution() {
    assert!(State::from_columns(&[1, 3, 0, 2]).is_solution(4));
    assert!(!State::from_columns(&[1, 3, 0]).is_solution(4));
    assert!(!State::from_columns(&[0, 1, 2, 3]).is_solution(4));
    assert!(State::from_columns(&[0]).is_solution(1));
}

#[test]
fn test_key_is_order_preserving() {
    let a = state(&[(0, 1), (1, 3)]);
    let b = state(&[(1, 3), (0, 1)]);
    assert_ne!(a.key(), b.key());
    assert_eq!(a.key(), state(&[(0, 1), (1, 3)]).key());
    assert!(State::empty().key().is_empty());
    assert_eq!(a.key().as_slice(), a.placements());
}

#[test]
fn test_key_beyond_inline_capacity() {
    let columns: Vec<usize> = (0..20).collect();
    let s = State::from_columns(&columns);
    assert_eq!(s.key().len(), 20);
    assert_eq!(s.key(), State::from_columns(&columns).key());
}

#[test]
fn test_display() {
    assert_eq!(State::empty().to_string(), "[]");
    assert_eq!(State::from_columns(&[1, 3]).to_string(), "[(0,1),(1,3)]");
}
