//! Dense node-keyed storage scoped to a single traversal.
//!
//! Graph algorithms attach bookkeeping to the nodes they reach: discovery numbers, visited
//! flags, partial results. Because node ids are dense, that bookkeeping lives in a vector
//! indexed by [`NodeId::index`] instead of a hash map, giving O(1) access without hashing.
//!
//! A [`NodeMap`] is created fresh for every traversal through
//! [`GraphBase::node_map`](crate::graph::GraphBase::node_map) and dropped with it. Nothing in it
//! survives into a later run on the same graph.

use crate::graph::NodeId;

/// A dense map from [`NodeId`] to per-node data.
///
/// Slots for every node of the graph are allocated up front; each slot is either vacant or holds
/// one value. Inserting for a node beyond the preallocated range grows the map, so it also works
/// for graphs that gain nodes between construction of the map and its use.
///
/// # Examples
///
/// ```rust
/// use compact_automata::graph::{NodeId, NodeMap};
///
/// let mut depth: NodeMap<u32> = NodeMap::with_node_count(4);
/// depth.insert(NodeId::new(2), 1);
///
/// assert_eq!(depth.get(NodeId::new(2)), Some(&1));
/// assert!(!depth.contains(NodeId::new(0)));
/// assert_eq!(depth.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct NodeMap<D> {
    slots: Vec<Option<D>>,
    occupied: usize,
}

impl<D> Default for NodeMap<D> {
    fn default() -> Self {
        Self::with_node_count(0)
    }
}

impl<D> NodeMap<D> {
    /// Creates an empty map with vacant slots for `node_count` nodes.
    #[must_use]
    pub fn with_node_count(node_count: usize) -> Self {
        let mut slots = Vec::with_capacity(node_count);
        slots.resize_with(node_count, || None);
        NodeMap { slots, occupied: 0 }
    }

    /// Returns the data stored for `node`, if any.
    #[must_use]
    #[inline]
    pub fn get(&self, node: NodeId) -> Option<&D> {
        self.slots.get(node.index()).and_then(Option::as_ref)
    }

    /// Returns mutable access to the data stored for `node`, if any.
    #[inline]
    pub fn get_mut(&mut self, node: NodeId) -> Option<&mut D> {
        self.slots.get_mut(node.index()).and_then(Option::as_mut)
    }

    /// Stores `data` for `node`, returning the previous value.
    pub fn insert(&mut self, node: NodeId, data: D) -> Option<D> {
        let index = node.index();
        if index >= self.slots.len() {
            self.slots.resize_with(index + 1, || None);
        }

        let previous = self.slots[index].replace(data);
        if previous.is_none() {
            self.occupied += 1;
        }
        previous
    }

    /// Removes and returns the data stored for `node`.
    pub fn remove(&mut self, node: NodeId) -> Option<D> {
        let removed = self.slots.get_mut(node.index()).and_then(Option::take);
        if removed.is_some() {
            self.occupied -= 1;
        }
        removed
    }

    /// Returns `true` if data is stored for `node`.
    #[must_use]
    #[inline]
    pub fn contains(&self, node: NodeId) -> bool {
        self.get(node).is_some()
    }

    /// Returns the number of nodes with stored data.
    #[must_use]
    pub fn len(&self) -> usize {
        self.occupied
    }

    /// Returns `true` if no node has stored data.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.occupied == 0
    }

    /// Iterates over occupied slots in ascending node order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &D)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|data| (NodeId::new(i), data)))
    }
}
