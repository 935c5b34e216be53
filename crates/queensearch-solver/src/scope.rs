//! Progress of a running search, as seen by termination conditions.

use std::time::{Duration, Instant};

/// Live view of one solve.
///
/// Created when the search loop starts. Termination conditions read it
/// between iterations.
#[derive(Debug, Clone)]
pub struct SearchScope {
    board_size: usize,
    start_time: Instant,
    step_count: u64,
    solution_count: usize,
}

impl SearchScope {
    /// Creates a scope and starts its clock.
    pub fn new(board_size: usize) -> Self {
        Self {
            board_size,
            start_time: Instant::now(),
            step_count: 0,
            solution_count: 0,
        }
    }

    /// Board size of the run.
    pub fn board_size(&self) -> usize {
        self.board_size
    }

    /// States popped from the frontier so far.
    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    /// Solutions recorded so far.
    pub fn solution_count(&self) -> usize {
        self.solution_count
    }

    /// Time since the loop started.
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Counts one pop.
    pub fn increment_step_count(&mut self) {
        self.step_count += 1;
    }

    /// Counts one recorded solution.
    pub fn increment_solution_count(&mut self) {
        self.solution_count += 1;
    }
}
