//! Board model for row-by-row queen placement.
//!
//! A [`State`] is an immutable ordered sequence of [`Placement`]s. States are
//! built one row at a time starting from the empty state: the placement at
//! index `i` always sits in row `i`. Conflict testing does not rely on that
//! ordering and compares every pair.

mod key;
mod placement;
mod state;

pub use key::StateKey;
pub use placement::Placement;
pub use state::State;

#[cfg(test)]
mod tests;
