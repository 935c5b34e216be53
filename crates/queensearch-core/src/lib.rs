//! queensearch core - board model and run parameters
//!
//! This crate provides the fundamental abstractions shared by the search
//! engine and its collaborators:
//! - [`board`]: placements, immutable partial states, conflict testing and
//!   child generation
//! - [`params`]: the closed sets of strategies, pruning levels, solution
//!   modes and heuristics a run is parameterized by
//! - [`error`]: the error taxonomy for failed runs

pub mod board;
pub mod error;
pub mod params;

pub use board::{Placement, State, StateKey};
pub use error::{Result, SearchError};
pub use params::{HeuristicKind, PruningLevel, SearchStrategy, SolutionMode};
