//! Trait definitions for graph abstractions.
//!
//! These traits are the contract a structure has to satisfy before the traversal engine and the
//! algorithms built on it can walk it. Automata satisfy them through
//! [`TransitionGraph`](crate::automaton::TransitionGraph); any other dense-indexed structure can
//! implement them directly.
//!
//! # Architecture
//!
//! - [`GraphBase`] - Node count, node enumeration and fresh per-traversal node storage
//! - [`OutgoingEdges`] - Edge enumeration and edge-target resolution
//! - [`Successors`] - Target-only view of [`OutgoingEdges`], provided for every implementor
//!
//! # Iterator-Based Traversal
//!
//! All adjacency queries return iterators rather than collections. The traversal engine keeps
//! one live edge iterator per frame of its explicit stack, so enumeration stays lazy even for
//! deep graphs.

use crate::graph::{NodeId, NodeMap};

/// Base trait providing node enumeration.
///
/// Implementors promise that node ids are dense: exactly `0..node_count()`.
pub trait GraphBase {
    /// Returns the number of nodes in the graph.
    fn node_count(&self) -> usize;

    /// Returns an iterator over all node identifiers, by ascending index.
    fn node_ids(&self) -> impl Iterator<Item = NodeId>;

    /// Creates a fresh, empty node-keyed store sized for this graph.
    ///
    /// The store is meant to live for exactly one traversal; algorithms create a new one per
    /// run rather than reusing bookkeeping from a previous one.
    fn node_map<D>(&self) -> NodeMap<D> {
        NodeMap::with_node_count(self.node_count())
    }
}

/// Trait for graphs whose edges are first-class values.
///
/// Visitors receive the edge value alongside its endpoints, so graphs with labelled edges (such
/// as automaton transitions carrying their input symbol) can expose that label to the
/// algorithm.
///
/// # Examples
///
/// ```rust
/// use compact_automata::graph::{GraphBase, NodeId, OutgoingEdges, Successors};
///
/// struct Ring(usize);
///
/// impl GraphBase for Ring {
///     fn node_count(&self) -> usize { self.0 }
///     fn node_ids(&self) -> impl Iterator<Item = NodeId> { (0..self.0).map(NodeId::new) }
/// }
///
/// impl OutgoingEdges for Ring {
///     type Edge = (usize, usize);
///
///     fn outgoing_edges(&self, node: NodeId) -> impl Iterator<Item = Self::Edge> {
///         std::iter::once((node.index(), (node.index() + 1) % self.0))
///     }
///
///     fn edge_target(&self, edge: Self::Edge) -> NodeId {
///         NodeId::new(edge.1)
///     }
/// }
///
/// let ring = Ring(3);
/// let next: Vec<NodeId> = ring.successors(NodeId::new(2)).collect();
/// assert_eq!(next, vec![NodeId::new(0)]);
/// ```
pub trait OutgoingEdges: GraphBase {
    /// The edge type handed to visitors.
    type Edge: Copy;

    /// Returns the outgoing edges of `node` in the graph's native order.
    ///
    /// # Panics
    ///
    /// May panic if `node` is not a valid node in the graph.
    fn outgoing_edges(&self, node: NodeId) -> impl Iterator<Item = Self::Edge>;

    /// Resolves the node an edge points to.
    fn edge_target(&self, edge: Self::Edge) -> NodeId;
}

/// Trait for graphs that support forward edge traversal.
///
/// Implemented for every [`OutgoingEdges`] graph; successors are the targets of the outgoing
/// edges, in edge order and with duplicates preserved.
pub trait Successors: GraphBase {
    /// Returns an iterator over the successor nodes of the given node.
    ///
    /// # Panics
    ///
    /// May panic if `node` is not a valid node in the graph.
    fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId>;
}

impl<G: OutgoingEdges> Successors for G {
    fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        self.outgoing_edges(node)
            .map(move |edge| self.edge_target(edge))
    }
}
