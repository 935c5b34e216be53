//! Budget conditions: pops, wall-clock time, or a caller-owned stop flag.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use super::Termination;
use crate::scope::SearchScope;

/// Stops once `limit` states have been popped from the frontier.
///
/// Duplicate pops count: the budget bounds loop iterations, not closed
/// states.
///
/// ```
/// use queensearch_solver::termination::StepCountTermination;
///
/// let budget = StepCountTermination::new(10_000);
/// assert_eq!(budget.limit(), 10_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepCountTermination {
    limit: u64,
}

impl StepCountTermination {
    pub fn new(limit: u64) -> Self {
        Self { limit }
    }

    /// Maximum number of pops.
    pub fn limit(&self) -> u64 {
        self.limit
    }
}

impl Termination for StepCountTermination {
    fn is_terminated(&self, scope: &SearchScope) -> bool {
        scope.step_count() >= self.limit
    }
}

/// Stops once the search loop has run for `limit`.
///
/// The clock starts when the loop starts, after engine construction.
///
/// ```
/// use std::time::Duration;
/// use queensearch_solver::termination::TimeTermination;
///
/// assert_eq!(TimeTermination::seconds(2).limit(), Duration::from_millis(2000));
/// assert_eq!(TimeTermination::millis(250).limit(), Duration::from_millis(250));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeTermination {
    limit: Duration,
}

impl TimeTermination {
    pub fn new(limit: Duration) -> Self {
        Self { limit }
    }

    pub fn millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    pub fn seconds(secs: u64) -> Self {
        Self::new(Duration::from_secs(secs))
    }

    /// Maximum time in the loop.
    pub fn limit(&self) -> Duration {
        self.limit
    }
}

impl Termination for TimeTermination {
    fn is_terminated(&self, scope: &SearchScope) -> bool {
        scope.elapsed() >= self.limit
    }
}

/// Stops when another thread raises a shared flag.
///
/// The engine never writes the flag; resetting it between runs is up to
/// the owner.
///
/// ```
/// use std::sync::atomic::{AtomicBool, Ordering};
/// use queensearch_solver::termination::ExternalTermination;
///
/// let stop = AtomicBool::new(false);
/// let term = ExternalTermination::new(&stop);
/// assert!(!term.is_requested());
/// stop.store(true, Ordering::Release);
/// assert!(term.is_requested());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ExternalTermination<'a> {
    flag: &'a AtomicBool,
}

impl<'a> ExternalTermination<'a> {
    /// Watches `flag`.
    pub fn new(flag: &'a AtomicBool) -> Self {
        Self { flag }
    }

    /// Returns true once the owner has raised the flag.
    pub fn is_requested(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }
}

impl Termination for ExternalTermination<'_> {
    fn is_terminated(&self, _scope: &SearchScope) -> bool {
        self.is_requested()
    }
}
