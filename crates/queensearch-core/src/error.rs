//! Error types for queensearch

use thiserror::Error;

/// Main error type for search runs.
///
/// There is no recoverable category: a run either completes (possibly with
/// zero solutions) or fails with one of these variants before returning any
/// statistics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The run was configured with parameters that cannot be searched,
    /// such as a zero board size or best-first without a heuristic.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The engine reached a state that its own bookkeeping rules out.
    /// The run is aborted rather than reporting misleading statistics.
    #[error("Internal invariant violated: {0}")]
    InvariantViolation(String),
}

impl SearchError {
    /// Shorthand for [`SearchError::InvalidConfiguration`].
    pub fn invalid(message: impl Into<String>) -> Self {
        SearchError::InvalidConfiguration(message.into())
    }

    /// Shorthand for [`SearchError::InvariantViolation`].
    pub fn invariant(message: impl Into<String>) -> Self {
        SearchError::InvariantViolation(message.into())
    }
}

/// Result type alias for queensearch operations
pub type Result<T> = std::result::Result<T, SearchError>;
