//! Any-of combination of termination conditions.

use super::Termination;
use crate::scope::SearchScope;

/// Stops as soon as any member of the tuple would stop.
///
/// Members are evaluated left to right and evaluation short-circuits.
/// Tuples of one to four members are supported; members may be `Option`s,
/// which is how [`SearchEngine::from_config`](crate::SearchEngine::from_config)
/// wires optional step and time limits.
///
/// ```
/// use queensearch_solver::termination::{OrTermination, StepCountTermination, TimeTermination};
///
/// // 30 seconds or 1000 pops, whichever comes first
/// let budget = OrTermination::new((
///     TimeTermination::seconds(30),
///     StepCountTermination::new(1000),
/// ));
/// ```
#[derive(Debug, Clone)]
pub struct OrTermination<T>(pub T);

impl<T> OrTermination<T> {
    pub fn new(members: T) -> Self {
        Self(members)
    }
}

macro_rules! impl_any_of {
    ($($idx:tt: $M:ident),+) => {
        impl<$($M: Termination),+> Termination for OrTermination<($($M,)+)> {
            fn is_terminated(&self, scope: &SearchScope) -> bool {
                $((self.0).$idx.is_terminated(scope))||+
            }
        }
    };
}

impl_any_of!(0: A);
impl_any_of!(0: A, 1: B);
impl_any_of!(0: A, 1: B, 2: C);
impl_any_of!(0: A, 1: B, 2: C, 3: D);
