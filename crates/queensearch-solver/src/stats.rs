//! Search statistics.
//!
//! Plain accumulation of counters and discovered solutions for one solve.
//! A fresh [`SearchStatistics`] is created by every call to
//! [`SearchEngine::solve`](crate::SearchEngine::solve).

use std::fmt;
use std::time::Duration;

use queensearch_core::State;

/// How a search loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchOutcome {
    /// The frontier ran empty.
    #[default]
    Exhausted,

    /// A solution was recorded in first-solution mode.
    FoundFirst,

    /// A caller-supplied termination stopped the loop.
    Terminated,
}

impl fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchOutcome::Exhausted => write!(f, "Exhausted"),
            SearchOutcome::FoundFirst => write!(f, "FoundFirst"),
            SearchOutcome::Terminated => write!(f, "Terminated"),
        }
    }
}

/// Counters and solutions of one search run.
///
/// # Example
///
/// ```
/// use queensearch_core::State;
/// use queensearch_solver::stats::SearchStatistics;
///
/// let mut stats = SearchStatistics::default();
/// stats.record_enqueued();
/// stats.record_open_size(1);
/// stats.record_solution(State::from_columns(&[0]));
///
/// assert_eq!(stats.total_enqueued, 1);
/// assert_eq!(stats.max_open_count, 1);
/// assert_eq!(stats.solution_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStatistics {
    /// High-water mark of the frontier size.
    pub max_open_count: usize,
    /// Pushes onto the frontier, including the initial state.
    pub total_enqueued: u64,
    /// Distinct states popped and closed.
    pub closed_count: usize,
    /// Pops from the frontier, duplicates included.
    pub popped_count: u64,
    /// Time spent in the search loop.
    pub elapsed: Duration,
    /// Complete conflict-free states in discovery order.
    pub solutions: Vec<State>,
    /// How the loop ended.
    pub outcome: SearchOutcome,
}

impl SearchStatistics {
    /// Creates empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one push onto the frontier.
    #[inline]
    pub fn record_enqueued(&mut self) {
        self.total_enqueued += 1;
    }

    /// Records one pop from the frontier.
    #[inline]
    pub fn record_popped(&mut self) {
        self.popped_count += 1;
    }

    /// Raises the frontier high-water mark to `size` if larger.
    #[inline]
    pub fn record_open_size(&mut self, size: usize) {
        self.max_open_count = self.max_open_count.max(size);
    }

    /// Appends a solution.
    pub fn record_solution(&mut self, solution: State) {
        self.solutions.push(solution);
    }

    /// Records the closing counters of the run.
    pub fn finish(&mut self, closed_count: usize, elapsed: Duration, outcome: SearchOutcome) {
        self.closed_count = closed_count;
        self.elapsed = elapsed;
        self.outcome = outcome;
    }

    /// Number of solutions found.
    pub fn solution_count(&self) -> usize {
        self.solutions.len()
    }

    /// The first solution discovered, if any.
    pub fn first_solution(&self) -> Option<&State> {
        self.solutions.first()
    }

    /// Returns true if at least one solution was found.
    pub fn is_solved(&self) -> bool {
        !self.solutions.is_empty()
    }

    /// Returns the elapsed time in milliseconds.
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed.as_millis() as u64
    }

    /// Closed states per second of loop time.
    pub fn states_per_second(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.closed_count as f64 / secs
        } else {
            0.0
        }
    }
}
