//! Generic graph contract and the algorithms that run on it.
//!
//! Algorithms in this module never look at a concrete graph type. They are written against the
//! traits re-exported here and work on anything that can enumerate dense node ids and
//! the outgoing edges of a node. Automata become traversable through
//! [`CompactNfa::as_graph`](crate::CompactNfa::as_graph).
//!
//! # Key Components
//!
//! - [`NodeId`] - Strongly-typed node identifier
//! - [`NodeMap`] - Fresh dense node-keyed storage for one traversal
//! - [`GraphBase`], [`OutgoingEdges`], [`Successors`] - The graph contract
//! - [`algorithms`] - Depth-first engine, orderings and strongly connected components
//!
//! # Traits
//!
//! A graph implements [`GraphBase`] and [`OutgoingEdges`]; [`Successors`] follows for free.
//! Edges are values of an associated type so visitors can see labels such as the input symbol
//! of an automaton transition.
//!
//! # Thread Safety
//!
//! Traversals borrow the graph immutably for their whole duration. Nothing in this module
//! synchronizes; running several traversals over one graph from several threads is fine,
//! mutating the underlying automaton while a traversal holds the borrow is rejected by the
//! compiler.

mod map;
mod node;
pub(crate) mod traits;

pub mod algorithms;

pub use map::NodeMap;
pub use node::NodeId;
pub use traits::{GraphBase, OutgoingEdges, Successors};
