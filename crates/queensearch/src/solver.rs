//! Search entry point that hides engine wiring.

use std::path::Path;

use queensearch_config::{ConfigError, SearchConfig};
use queensearch_core::SearchError;
use queensearch_solver::{SearchEngine, SearchStatistics};
use thiserror::Error;

/// Errors from [`solve`] and [`solve_file`].
#[derive(Debug, Error)]
pub enum SolveError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Search(#[from] SearchError),
}

/// Validates `config`, builds an engine from it and runs the search.
///
/// A step or time limit that stops the run early is not an error; check
/// [`SearchStatistics::outcome`].
///
/// # Errors
///
/// Returns [`SolveError::Config`] for an invalid configuration and
/// [`SolveError::Search`] if the engine fails.
pub fn solve(config: &SearchConfig) -> Result<SearchStatistics, SolveError> {
    #[cfg(feature = "console")]
    queensearch_console::init();

    config.validate()?;
    let engine = SearchEngine::from_config(config)?;
    Ok(engine.solve()?)
}

/// Loads a TOML or YAML configuration file and runs [`solve`] on it.
///
/// # Errors
///
/// Returns [`SolveError::Config`] if the file cannot be read or parsed.
pub fn solve_file(path: impl AsRef<Path>) -> Result<SearchStatistics, SolveError> {
    let config = SearchConfig::load(path)?;
    solve(&config)
}
