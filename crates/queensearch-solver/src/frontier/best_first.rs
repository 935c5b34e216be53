//! Min-priority frontier ordered by heuristic score.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use queensearch_core::{HeuristicKind, State};

use super::Frontier;
use crate::heuristic::Heuristic;

/// A scored frontier entry.
///
/// Ordered so that `BinaryHeap`, a max-heap, yields the lowest score first
/// and, among equal scores, the entry inserted first.
#[derive(Debug)]
pub struct PriorityEntry {
    score: u64,
    sequence: u64,
    state: State,
}

impl PriorityEntry {
    /// Creates an entry.
    pub fn new(score: u64, sequence: u64, state: State) -> Self {
        Self {
            score,
            sequence,
            state,
        }
    }

    /// Heuristic score of the state.
    pub fn score(&self) -> u64 {
        self.score
    }

    /// Insertion sequence number.
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    /// The stored state.
    pub fn state(&self) -> &State {
        &self.state
    }

    /// Consumes the entry, returning its state.
    pub fn into_state(self) -> State {
        self.state
    }
}

impl PartialEq for PriorityEntry {
    fn eq(&self, other: &Self) -> bool {
        self.score == other.score && self.sequence == other.sequence
    }
}

impl Eq for PriorityEntry {}

impl Ord for PriorityEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Lower score = higher priority, then earlier insertion
        other
            .score
            .cmp(&self.score)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for PriorityEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Best-first frontier that scores states on push.
#[derive(Debug)]
pub struct BestFirstFrontier {
    heap: BinaryHeap<PriorityEntry>,
    heuristic: Heuristic,
    next_sequence: u64,
}

impl BestFirstFrontier {
    /// Creates an empty frontier scoring with `kind` on a `board_size` board.
    pub fn new(kind: HeuristicKind, board_size: usize) -> Self {
        Self::with_heuristic(Heuristic::new(kind, board_size))
    }

    /// Creates an empty frontier scoring with `heuristic`.
    pub fn with_heuristic(heuristic: Heuristic) -> Self {
        Self {
            heap: BinaryHeap::new(),
            heuristic,
            next_sequence: 0,
        }
    }

    /// Returns the heuristic used to score pushed states.
    pub fn heuristic(&self) -> Heuristic {
        self.heuristic
    }

    /// Score of the entry that the next `pop` returns.
    pub fn peek_score(&self) -> Option<u64> {
        self.heap.peek().map(PriorityEntry::score)
    }
}

impl Frontier for BestFirstFrontier {
    fn push(&mut self, state: State) {
        let score = self.heuristic.score(&state);
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.heap.push(PriorityEntry::new(score, sequence, state));
    }

    fn pop(&mut self) -> Option<State> {
        self.heap.pop().map(PriorityEntry::into_state)
    }

    #[inline]
    fn len(&self) -> usize {
        self.heap.len()
    }

    fn frontier_type_name(&self) -> &'static str {
        "BestFirst"
    }
}
