//! Node identifiers for graphs traversed by the algorithms in this crate.
//!
//! Every graph exposes its nodes as dense indices in `[0, node_count)`. [`NodeId`] wraps that
//! index so it cannot be confused with state ids, symbol indices or discovery numbers while an
//! algorithm is juggling all of them at once.

use std::fmt;

use crate::automaton::StateId;

/// A strongly-typed identifier for a node of a traversable graph.
///
/// Node ids are dense: a graph with `n` nodes uses exactly the ids `0..n`, which lets per-node
/// data live in plain vectors (see [`NodeMap`](crate::graph::NodeMap)).
///
/// When an automaton is viewed as a graph the node id of a state is its state id, so the two
/// convert freely in both directions.
///
/// # Examples
///
/// ```rust
/// use compact_automata::graph::NodeId;
///
/// let node = NodeId::new(3);
/// assert_eq!(node.index(), 3);
/// assert_eq!(format!("{node}"), "n3");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Creates a new `NodeId` from a raw index value.
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        NodeId(index)
    }

    /// Returns the raw, 0-based index of this node.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

impl From<usize> for NodeId {
    #[inline]
    fn from(index: usize) -> Self {
        NodeId(index)
    }
}

impl From<NodeId> for usize {
    #[inline]
    fn from(node: NodeId) -> Self {
        node.0
    }
}

impl From<StateId> for NodeId {
    #[inline]
    fn from(state: StateId) -> Self {
        NodeId(state.index())
    }
}

impl From<NodeId> for StateId {
    #[inline]
    fn from(node: NodeId) -> Self {
        StateId::new(node.0)
    }
}
