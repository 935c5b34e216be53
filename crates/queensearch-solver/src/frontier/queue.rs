//! FIFO and LIFO frontiers.

use std::collections::VecDeque;

use queensearch_core::State;

use super::Frontier;

/// Breadth-first frontier backed by a `VecDeque`.
#[derive(Debug, Default)]
pub struct FifoFrontier {
    queue: VecDeque<State>,
}

impl FifoFrontier {
    /// Creates an empty FIFO frontier.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for FifoFrontier {
    #[inline]
    fn push(&mut self, state: State) {
        self.queue.push_back(state);
    }

    #[inline]
    fn pop(&mut self) -> Option<State> {
        self.queue.pop_front()
    }

    #[inline]
    fn len(&self) -> usize {
        self.queue.len()
    }

    fn frontier_type_name(&self) -> &'static str {
        "Fifo"
    }
}

/// Depth-first frontier backed by a `Vec` used as a stack.
#[derive(Debug, Default)]
pub struct LifoFrontier {
    stack: Vec<State>,
}

impl LifoFrontier {
    /// Creates an empty LIFO frontier.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for LifoFrontier {
    #[inline]
    fn push(&mut self, state: State) {
        self.stack.push(state);
    }

    #[inline]
    fn pop(&mut self) -> Option<State> {
        self.stack.pop()
    }

    #[inline]
    fn len(&self) -> usize {
        self.stack.len()
    }

    fn frontier_type_name(&self) -> &'static str {
        "Lifo"
    }
}
