//! Fluent construction of a [`SearchEngine`].

use queensearch_core::{
    HeuristicKind, PruningLevel, Result, SearchError, SearchStrategy, SolutionMode,
};

use super::SearchEngine;
use crate::pruning::PruningPolicy;
use crate::termination::{NoTermination, Termination};

/// Builder for [`SearchEngine`].
///
/// Defaults: breadth-first, full pruning, all solutions, no heuristic, no
/// termination.
#[derive(Debug, Clone)]
pub struct SearchEngineBuilder<T = NoTermination> {
    board_size: usize,
    strategy: SearchStrategy,
    pruning_level: PruningLevel,
    solution_mode: SolutionMode,
    heuristic: Option<HeuristicKind>,
    termination: T,
}

impl SearchEngineBuilder<NoTermination> {
    /// Creates a builder for an N×N board.
    pub fn new(board_size: usize) -> Self {
        Self {
            board_size,
            strategy: SearchStrategy::default(),
            pruning_level: PruningLevel::default(),
            solution_mode: SolutionMode::default(),
            heuristic: None,
            termination: NoTermination,
        }
    }
}

impl<T: Termination> SearchEngineBuilder<T> {
    /// Sets the frontier ordering.
    pub fn strategy(mut self, strategy: SearchStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the pruning level.
    pub fn pruning_level(mut self, pruning_level: PruningLevel) -> Self {
        self.pruning_level = pruning_level;
        self
    }

    /// Sets the solution mode.
    pub fn solution_mode(mut self, solution_mode: SolutionMode) -> Self {
        self.solution_mode = solution_mode;
        self
    }

    /// Sets the heuristic used by best-first search.
    pub fn heuristic(mut self, heuristic: HeuristicKind) -> Self {
        self.heuristic = Some(heuristic);
        self
    }

    /// Replaces the termination condition.
    pub fn termination<T2: Termination>(self, termination: T2) -> SearchEngineBuilder<T2> {
        SearchEngineBuilder {
            board_size: self.board_size,
            strategy: self.strategy,
            pruning_level: self.pruning_level,
            solution_mode: self.solution_mode,
            heuristic: self.heuristic,
            termination,
        }
    }

    /// Validates the configuration and builds the engine.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidConfiguration`] if the board size is
    /// zero or best-first search has no heuristic.
    pub fn build(self) -> Result<SearchEngine<T>> {
        if self.board_size == 0 {
            return Err(SearchError::invalid("board size must be positive"));
        }
        if self.strategy.requires_heuristic() && self.heuristic.is_none() {
            return Err(SearchError::invalid(format!(
                "strategy {} requires a heuristic",
                self.strategy
            )));
        }

        Ok(SearchEngine {
            board_size: self.board_size,
            strategy: self.strategy,
            pruning: PruningPolicy::new(self.pruning_level),
            solution_mode: self.solution_mode,
            heuristic: self.heuristic,
            termination: self.termination,
        })
    }
}
