//! Queensearch Solver Engine
//!
//! This crate provides the N-Queens state-space search including:
//! - SearchEngine and its builder
//! - Open lists for breadth-first, depth-first and best-first order
//! - Closed-set duplicate detection
//! - Heuristics (H1 row weights, H2 conflict pairs)
//! - Pruning policies
//! - Termination conditions
//! - Search statistics

pub mod closed;
pub mod engine;
pub mod frontier;
pub mod heuristic;
pub mod pruning;
pub mod scope;
pub mod stats;
pub mod termination;

pub use closed::ClosedSet;
pub use engine::{ConfiguredTermination, SearchEngine, SearchEngineBuilder};
pub use frontier::{BestFirstFrontier, FifoFrontier, Frontier, LifoFrontier, PriorityEntry};
pub use heuristic::Heuristic;
pub use pruning::PruningPolicy;
pub use scope::SearchScope;
pub use stats::{SearchOutcome, SearchStatistics};
pub use termination::{
    ExternalTermination, NoTermination, OrTermination, StepCountTermination, Termination,
    TimeTermination,
};
