//! State identifiers for compact automata.

use std::fmt;

/// A dense automaton state identifier.
///
/// The automaton that created a `StateId` accepts it for as long as the id is below its
/// [`size`](crate::CompactNfa::size). Ids are handed out as `0, 1, 2, ...` by
/// [`add_state`](crate::CompactNfa::add_state) and are never reused until the automaton is
/// [cleared](crate::CompactNfa::clear).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StateId(usize);

impl StateId {
    /// Creates a new `StateId` from a raw index value.
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        StateId(index)
    }

    /// Returns the raw, 0-based index of this state.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StateId({})", self.0)
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

impl From<usize> for StateId {
    #[inline]
    fn from(index: usize) -> Self {
        StateId(index)
    }
}

impl From<StateId> for usize {
    #[inline]
    fn from(state: StateId) -> Self {
        state.0
    }
}
