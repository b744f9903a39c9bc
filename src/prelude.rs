//! # compact-automata Prelude
//!
//! The types and functions needed to build an automaton and run the graph algorithms on it.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all compact-automata operations
pub use crate::Error;

/// The result type used throughout compact-automata
pub use crate::Result;

// ================================================================================================
// Automaton Storage
// ================================================================================================

pub use crate::alphabet::Alphabet;
pub use crate::automaton::{
    CompactConfig, CompactNfa, StateId, SuccessorSet, TransitionEdge, TransitionGraph,
};

// ================================================================================================
// Graph Contract and Algorithms
// ================================================================================================

pub use crate::graph::{GraphBase, NodeId, NodeMap, OutgoingEdges, Successors};

pub use crate::graph::algorithms::{
    depth_first, find_sccs, postorder, preorder, reverse_postorder,
    strongly_connected_components, DfsVisitor, SccListener, TarjanSccVisitor, TraversalAction,
};
