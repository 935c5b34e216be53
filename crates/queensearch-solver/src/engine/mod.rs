//! The search engine.
//!
//! [`SearchEngine`] runs a generic open/closed-list loop over row-by-row
//! queen placements:
//!
//! 1. The frontier starts with the empty state (one enqueued, open size 1).
//! 2. While the frontier is non-empty, pop a state and raise the open-size
//!    high-water mark to the remaining frontier size.
//! 3. Skip states whose key is already closed; otherwise close it.
//! 4. A terminal state is recorded as a solution when conflict-free and is
//!    never expanded. In first-solution mode the loop stops right there.
//! 5. Under full pruning a conflicted state is not expanded.
//! 6. Every child admitted by the pruning policy is counted and pushed.
//!
//! The frontier type is chosen once per solve from the strategy and the loop
//! is monomorphized over it.
//!
//! Logging levels:
//! - **INFO**: solve start and end with configuration and final counters
//! - **DEBUG**: each recorded solution, early termination
//! - **TRACE**: each expansion

mod builder;

use queensearch_config::SearchConfig;
use queensearch_core::{
    HeuristicKind, PruningLevel, Result, SearchError, SearchStrategy, SolutionMode, State,
};
use tracing::{debug, info, trace};

use crate::closed::ClosedSet;
use crate::frontier::{BestFirstFrontier, FifoFrontier, Frontier, LifoFrontier};
use crate::pruning::PruningPolicy;
use crate::scope::SearchScope;
use crate::stats::{SearchOutcome, SearchStatistics};
use crate::termination::{
    NoTermination, OrTermination, StepCountTermination, Termination, TimeTermination,
};

pub use builder::SearchEngineBuilder;

/// Termination built from a [`SearchConfig`]: an optional step limit OR an
/// optional time limit.
pub type ConfiguredTermination =
    OrTermination<(Option<StepCountTermination>, Option<TimeTermination>)>;

/// Configured N-Queens state-space search.
///
/// Construct through [`SearchEngine::builder`] or
/// [`SearchEngine::from_config`]; both validate the configuration, so
/// `solve` only fails on an internal invariant violation.
///
/// # Example
///
/// ```
/// use queensearch_core::{PruningLevel, SearchStrategy, SolutionMode, State};
/// use queensearch_solver::SearchEngine;
///
/// let engine = SearchEngine::builder(4)
///     .strategy(SearchStrategy::BreadthFirst)
///     .pruning_level(PruningLevel::Full)
///     .solution_mode(SolutionMode::First)
///     .build()
///     .unwrap();
///
/// let stats = engine.solve().unwrap();
/// assert_eq!(stats.solutions, vec![State::from_columns(&[1, 3, 0, 2])]);
/// ```
#[derive(Debug, Clone)]
pub struct SearchEngine<T = NoTermination> {
    board_size: usize,
    strategy: SearchStrategy,
    pruning: PruningPolicy,
    solution_mode: SolutionMode,
    heuristic: Option<HeuristicKind>,
    termination: T,
}

impl SearchEngine<NoTermination> {
    /// Starts building an engine for an N×N board.
    pub fn builder(board_size: usize) -> SearchEngineBuilder<NoTermination> {
        SearchEngineBuilder::new(board_size)
    }
}

impl SearchEngine<ConfiguredTermination> {
    /// Builds an engine from a loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidConfiguration`] for a zero board size or
    /// a best-first strategy without a heuristic.
    pub fn from_config(config: &SearchConfig) -> Result<Self> {
        let termination = OrTermination::new((
            config.step_limit().map(StepCountTermination::new),
            config.time_limit().map(TimeTermination::new),
        ));

        let mut builder = SearchEngine::builder(config.board_size)
            .strategy(config.strategy)
            .pruning_level(config.pruning_level)
            .solution_mode(config.solution_mode)
            .termination(termination);
        if let Some(heuristic) = config.heuristic {
            builder = builder.heuristic(heuristic);
        }
        builder.build()
    }
}

impl<T: Termination> SearchEngine<T> {
    /// Returns the board size.
    pub fn board_size(&self) -> usize {
        self.board_size
    }

    /// Returns the search strategy.
    pub fn strategy(&self) -> SearchStrategy {
        self.strategy
    }

    /// Returns the pruning level.
    pub fn pruning_level(&self) -> PruningLevel {
        self.pruning.level()
    }

    /// Returns the solution mode.
    pub fn solution_mode(&self) -> SolutionMode {
        self.solution_mode
    }

    /// Returns the heuristic, if one was configured.
    pub fn heuristic(&self) -> Option<HeuristicKind> {
        self.heuristic
    }

    /// Returns the termination condition.
    pub fn termination(&self) -> &T {
        &self.termination
    }

    /// Runs the search to completion, first solution, or termination.
    ///
    /// Each call starts from scratch with a fresh frontier, closed set and
    /// statistics; calls on the same engine do not share state.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvariantViolation`] if the frontier or the
    /// generated states break the engine's bookkeeping. No partial
    /// statistics are returned in that case.
    pub fn solve(&self) -> Result<SearchStatistics> {
        match self.strategy {
            SearchStrategy::BreadthFirst => self.run(FifoFrontier::new()),
            SearchStrategy::DepthFirst => self.run(LifoFrontier::new()),
            SearchStrategy::BestFirst => {
                let kind = self.heuristic.ok_or_else(|| {
                    SearchError::invalid("best-first search requires a heuristic")
                })?;
                self.run(BestFirstFrontier::new(kind, self.board_size))
            }
        }
    }

    fn run<F: Frontier>(&self, mut frontier: F) -> Result<SearchStatistics> {
        let n = self.board_size;
        let mut stats = SearchStatistics::new();
        let mut closed = ClosedSet::new();

        info!(
            event = "solve_start",
            board_size = n as u64,
            strategy = %self.strategy,
            pruning = %self.pruning.level(),
            mode = %self.solution_mode,
            frontier = frontier.frontier_type_name(),
        );

        frontier.push(State::empty());
        stats.record_enqueued();
        stats.record_open_size(frontier.len());

        let mut scope = SearchScope::new(n);
        let outcome = loop {
            if frontier.is_empty() {
                break SearchOutcome::Exhausted;
            }
            if self.termination.is_terminated(&scope) {
                debug!(
                    event = "terminated",
                    steps = scope.step_count(),
                    open = frontier.len() as u64,
                );
                break SearchOutcome::Terminated;
            }

            let open_before = frontier.len();
            let state = frontier.pop().ok_or_else(|| {
                SearchError::invariant(format!(
                    "frontier reported {} open states but yielded none",
                    open_before
                ))
            })?;
            scope.increment_step_count();
            stats.record_popped();
            stats.record_open_size(frontier.len());

            if state.len() > n {
                return Err(SearchError::invariant(format!(
                    "popped state {} is longer than board size {}",
                    state, n
                )));
            }

            if !closed.insert(state.key()) {
                continue;
            }

            if state.is_terminal(n) {
                if !state.has_conflicts() {
                    debug!(
                        event = "solution",
                        index = stats.solution_count() as u64,
                        steps = scope.step_count(),
                        state = %state,
                    );
                    stats.record_solution(state);
                    scope.increment_solution_count();
                    if self.solution_mode == SolutionMode::First {
                        break SearchOutcome::FoundFirst;
                    }
                }
                continue;
            }

            if !self.pruning.admits_expansion(&state) {
                continue;
            }

            let mut pushed = 0u64;
            for child in state.children(n).filter(|c| self.pruning.admits_child(c)) {
                stats.record_enqueued();
                frontier.push(child);
                pushed += 1;
            }
            trace!(
                event = "expand",
                depth = state.depth() as u64,
                children = pushed,
                open = frontier.len() as u64,
            );
        };

        stats.finish(closed.len(), scope.elapsed(), outcome);

        info!(
            event = "solve_end",
            outcome = %outcome,
            solutions = stats.solution_count() as u64,
            max_open = stats.max_open_count as u64,
            enqueued = stats.total_enqueued,
            closed = stats.closed_count as u64,
            duration_ms = stats.elapsed_ms(),
            speed = stats.states_per_second() as u64,
        );

        Ok(stats)
    }
}
