//! Queensearch - N-Queens State-Space Search in Rust
//!
//! Load a configuration and call [`solve`].
//!
//! # Example
//!
//! ```rust
//! use queensearch::prelude::*;
//!
//! let config = SearchConfig::new(6)
//!     .with_strategy(SearchStrategy::DepthFirst)
//!     .with_pruning_level(PruningLevel::Full);
//!
//! let stats = queensearch::solve(&config).unwrap();
//! assert_eq!(stats.solution_count(), 4);
//! ```

// Board model and parameters
pub use queensearch_core::{
    HeuristicKind, Placement, PruningLevel, SearchError, SearchStrategy, SolutionMode, State,
    StateKey,
};

// Configuration
pub use queensearch_config::{ConfigError, SearchConfig, TerminationConfig};

// Engine
pub use queensearch_solver::{
    ConfiguredTermination, ExternalTermination, NoTermination, OrTermination, SearchEngine,
    SearchEngineBuilder, SearchOutcome, SearchStatistics, StepCountTermination, Termination,
    TimeTermination,
};

#[cfg(feature = "console")]
pub use queensearch_console as console;

mod solver;
pub use solver::{solve, solve_file, SolveError};

pub mod prelude {
    pub use super::{HeuristicKind, PruningLevel, SearchStrategy, SolutionMode, State};
    pub use super::{SearchConfig, SearchEngine, SearchOutcome, SearchStatistics};
    pub use super::{SearchError, SolveError};
}
