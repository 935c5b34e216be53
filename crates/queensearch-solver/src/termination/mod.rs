//! Termination conditions for bounding a search.
//!
//! The engine runs to completion by default. A caller needing a bounded
//! search supplies a [`Termination`]; it is checked once per loop iteration,
//! before the next state is popped. A terminated run still returns its
//! statistics, marked [`SearchOutcome::Terminated`](crate::SearchOutcome).

mod budget;
mod composite;

use std::fmt::Debug;

use crate::scope::SearchScope;

pub use budget::{ExternalTermination, StepCountTermination, TimeTermination};
pub use composite::OrTermination;

/// Trait for determining when to stop searching.
pub trait Termination: Send + Debug {
    /// Returns true if searching should stop.
    fn is_terminated(&self, scope: &SearchScope) -> bool;
}

/// Never terminates; the default for an engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTermination;

impl Termination for NoTermination {
    #[inline]
    fn is_terminated(&self, _scope: &SearchScope) -> bool {
        false
    }
}

/// An absent condition never terminates.
impl<T: Termination> Termination for Option<T> {
    fn is_terminated(&self, scope: &SearchScope) -> bool {
        self.as_ref().is_some_and(|t| t.is_terminated(scope))
    }
}

impl<T: Termination + ?Sized> Termination for Box<T> {
    fn is_terminated(&self, scope: &SearchScope) -> bool {
        (**self).is_terminated(scope)
    }
}
