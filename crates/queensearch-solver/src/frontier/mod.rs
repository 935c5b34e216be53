//! Open-list implementations.
//!
//! A [`Frontier`] holds generated-but-unexpanded states. The engine is
//! generic over the frontier type and picks the concrete implementation once
//! per solve, so the search loop never branches on the strategy.
//!
//! # Strategies
//!
//! - [`FifoFrontier`]: breadth-first, first in first out
//! - [`LifoFrontier`]: depth-first, last in first out
//! - [`BestFirstFrontier`]: lowest heuristic score first, ties in insertion
//!   order

mod best_first;
mod queue;

use std::fmt::Debug;

use queensearch_core::State;

pub use best_first::{BestFirstFrontier, PriorityEntry};
pub use queue::{FifoFrontier, LifoFrontier};

/// Open list of states awaiting expansion.
///
/// The frontier owns its states until they are popped.
pub trait Frontier: Debug {
    /// Adds a state.
    fn push(&mut self, state: State);

    /// Removes the next state according to the frontier's ordering.
    fn pop(&mut self) -> Option<State>;

    /// Number of states currently held.
    fn len(&self) -> usize;

    /// Returns true if no states are held.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Short name used in log output.
    fn frontier_type_name(&self) -> &'static str;
}
