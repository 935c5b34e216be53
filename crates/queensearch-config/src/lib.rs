//! Configuration system for queensearch.
//!
//! Load search run configuration from TOML or YAML so board size, strategy,
//! pruning and budgets can change without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use queensearch_config::SearchConfig;
//! use queensearch_core::{PruningLevel, SearchStrategy};
//! use std::time::Duration;
//!
//! let config = SearchConfig::from_toml_str(r#"
//!     board_size = 8
//!     strategy = "depth_first"
//!     pruning_level = "partial"
//!     solution_mode = "first"
//!
//!     [termination]
//!     seconds_spent_limit = 5
//! "#).unwrap();
//!
//! assert_eq!(config.board_size, 8);
//! assert_eq!(config.strategy, SearchStrategy::DepthFirst);
//! assert_eq!(config.pruning_level, PruningLevel::Partial);
//! assert_eq!(config.time_limit(), Some(Duration::from_secs(5)));
//! ```
//!
//! Use builder methods in code:
//!
//! ```
//! use queensearch_config::SearchConfig;
//! use queensearch_core::{HeuristicKind, SearchStrategy};
//!
//! let config = SearchConfig::new(6)
//!     .with_strategy(SearchStrategy::BestFirst)
//!     .with_heuristic(HeuristicKind::H2);
//! assert!(config.validate().is_ok());
//! ```

use std::path::Path;
use std::time::Duration;

use queensearch_core::{HeuristicKind, PruningLevel, SearchStrategy, SolutionMode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Configuration for one search run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SearchConfig {
    /// Board size N. Must be positive.
    pub board_size: usize,

    /// Frontier ordering.
    #[serde(default)]
    pub strategy: SearchStrategy,

    /// When conflicting states are discarded.
    #[serde(default)]
    pub pruning_level: PruningLevel,

    /// Stop at the first solution or collect all of them.
    #[serde(default)]
    pub solution_mode: SolutionMode,

    /// Scoring function; only consulted by best-first.
    #[serde(default)]
    pub heuristic: Option<HeuristicKind>,

    /// Optional budget imposed on the search loop.
    #[serde(default)]
    pub termination: Option<TerminationConfig>,
}

impl SearchConfig {
    /// Creates a configuration for an `board_size` board with default
    /// parameters (breadth-first, full pruning, all solutions).
    pub fn new(board_size: usize) -> Self {
        Self {
            board_size,
            strategy: SearchStrategy::default(),
            pruning_level: PruningLevel::default(),
            solution_mode: SolutionMode::default(),
            heuristic: None,
            termination: None,
        }
    }

    /// Loads configuration from a file, YAML for `.yaml`/`.yml` and TOML
    /// otherwise.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or cannot be parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml" | "yml") => Self::from_yaml_file(path),
            _ => Self::from_toml_file(path),
        }
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the search strategy.
    pub fn with_strategy(mut self, strategy: SearchStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the pruning level.
    pub fn with_pruning_level(mut self, pruning_level: PruningLevel) -> Self {
        self.pruning_level = pruning_level;
        self
    }

    /// Sets the solution mode.
    pub fn with_solution_mode(mut self, solution_mode: SolutionMode) -> Self {
        self.solution_mode = solution_mode;
        self
    }

    /// Sets the heuristic.
    pub fn with_heuristic(mut self, heuristic: HeuristicKind) -> Self {
        self.heuristic = Some(heuristic);
        self
    }

    /// Limits the number of states popped from the frontier.
    pub fn with_step_limit(mut self, steps: u64) -> Self {
        self.termination = Some(TerminationConfig {
            step_count_limit: Some(steps),
            ..self.termination.unwrap_or_default()
        });
        self
    }

    /// Limits the wall-clock time spent in the search loop.
    ///
    /// The limit is stored in whole milliseconds, rounded up so that a
    /// non-zero sub-millisecond limit stays a limit.
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        let mut millis = limit.as_millis();
        if limit.subsec_nanos() % 1_000_000 != 0 {
            millis += 1;
        }
        self.termination = Some(TerminationConfig {
            millis_spent_limit: Some(u64::try_from(millis).unwrap_or(u64::MAX)),
            seconds_spent_limit: None,
            ..self.termination.unwrap_or_default()
        });
        self
    }

    /// Returns the termination time limit, if configured.
    pub fn time_limit(&self) -> Option<Duration> {
        self.termination.as_ref().and_then(|t| t.time_limit())
    }

    /// Returns the step limit, if configured.
    pub fn step_limit(&self) -> Option<u64> {
        self.termination.as_ref().and_then(|t| t.step_count_limit)
    }

    /// Checks that the configuration describes a searchable run.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for a zero board size, or for a
    /// best-first strategy without a heuristic.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size == 0 {
            return Err(ConfigError::Invalid(
                "board_size must be positive".to_string(),
            ));
        }
        if self.strategy.requires_heuristic() && self.heuristic.is_none() {
            return Err(ConfigError::Invalid(format!(
                "strategy {} requires a heuristic",
                self.strategy
            )));
        }
        Ok(())
    }
}

/// Termination configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct TerminationConfig {
    /// Maximum number of states popped from the frontier.
    pub step_count_limit: Option<u64>,

    /// Maximum milliseconds spent in the search loop.
    pub millis_spent_limit: Option<u64>,

    /// Maximum seconds spent in the search loop.
    pub seconds_spent_limit: Option<u64>,
}

impl TerminationConfig {
    /// Returns the time limit as a Duration, if any.
    ///
    /// Seconds and milliseconds add up when both are given, saturating at
    /// `Duration::MAX`. An explicit zero is a limit that stops immediately;
    /// only absent fields mean no limit.
    pub fn time_limit(&self) -> Option<Duration> {
        match (self.seconds_spent_limit, self.millis_spent_limit) {
            (None, None) => None,
            (secs, millis) => Some(
                Duration::from_secs(secs.unwrap_or(0))
                    .saturating_add(Duration::from_millis(millis.unwrap_or(0))),
            ),
        }
    }

    /// Returns true when no limit is configured.
    pub fn is_unbounded(&self) -> bool {
        self.step_count_limit.is_none() && self.time_limit().is_none()
    }
}

#[cfg(test)]
mod tests;
