//! Graph view over a compact automaton.
//!
//! [`TransitionGraph`] borrows a [`CompactNfa`] and presents its states as nodes and its
//! transitions as labelled edges, so the algorithms in [`crate::graph::algorithms`] can run on
//! it directly.

use std::hash::Hash;

use crate::{
    automaton::{CompactNfa, StateId},
    graph::{GraphBase, NodeId, OutgoingEdges},
};

/// A single transition `source --symbol--> target`.
///
/// `symbol_index` addresses the automaton's alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TransitionEdge {
    /// State the transition leaves.
    pub source: StateId,
    /// Index of the input symbol.
    pub symbol_index: usize,
    /// State the transition enters.
    pub target: StateId,
}

/// Read-only graph view of a [`CompactNfa`].
///
/// Outgoing edges of a state are produced symbol by symbol in alphabet order and, within a
/// symbol, by ascending target id.
///
/// # Examples
///
/// ```rust
/// use compact_automata::{Alphabet, CompactNfa};
/// use compact_automata::graph::{GraphBase, NodeId, Successors};
///
/// let mut nfa: CompactNfa<char> = CompactNfa::new(Alphabet::from_symbols(['a', 'b']));
/// let q0 = nfa.add_state(None);
/// let q1 = nfa.add_state(None);
/// nfa.add_transition(q0, 1, q1)?;
/// nfa.add_transition(q0, 0, q0)?;
///
/// let graph = nfa.as_graph();
/// assert_eq!(graph.node_count(), 2);
/// let next: Vec<NodeId> = graph.successors(q0.into()).collect();
/// assert_eq!(next, vec![NodeId::from(q0), NodeId::from(q1)]);
/// # Ok::<(), compact_automata::Error>(())
/// ```
pub struct TransitionGraph<'a, I: Hash + Eq, SP> {
    automaton: &'a CompactNfa<I, SP>,
}

impl<'a, I: Hash + Eq, SP> TransitionGraph<'a, I, SP> {
    pub(crate) fn new(automaton: &'a CompactNfa<I, SP>) -> Self {
        TransitionGraph { automaton }
    }

    /// Returns the underlying automaton.
    #[must_use]
    pub fn automaton(&self) -> &'a CompactNfa<I, SP> {
        self.automaton
    }
}

impl<I: Hash + Eq, SP> Clone for TransitionGraph<'_, I, SP> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<I: Hash + Eq, SP> Copy for TransitionGraph<'_, I, SP> {}

impl<I: Hash + Eq, SP> GraphBase for TransitionGraph<'_, I, SP> {
    fn node_count(&self) -> usize {
        self.automaton.size()
    }

    fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.automaton.size()).map(NodeId::new)
    }
}

impl<I: Hash + Eq, SP> OutgoingEdges for TransitionGraph<'_, I, SP> {
    type Edge = TransitionEdge;

    fn outgoing_edges(&self, node: NodeId) -> impl Iterator<Item = TransitionEdge> {
        let automaton = self.automaton;
        let source = StateId::from(node);
        (0..automaton.alphabet_size()).flat_map(move |symbol_index| {
            automaton
                .slot_successors(source, symbol_index)
                .iter()
                .map(move |&target| TransitionEdge {
                    source,
                    symbol_index,
                    target,
                })
        })
    }

    fn edge_target(&self, edge: TransitionEdge) -> NodeId {
        edge.target.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{graph::Successors, Alphabet};

    #[test]
    fn test_edges_symbol_major_ascending_target() {
        let mut nfa: CompactNfa<char> = CompactNfa::new(Alphabet::from_symbols(['x', 'y']));
        let q: Vec<StateId> = (0..4).map(|_| nfa.add_state(None)).collect();
        nfa.add_transition(q[0], 1, q[1]).unwrap();
        nfa.add_transition(q[0], 0, q[3]).unwrap();
        nfa.add_transition(q[0], 0, q[2]).unwrap();
        nfa.add_transition(q[0], 1, q[0]).unwrap();

        let graph = nfa.as_graph();
        let edges: Vec<(usize, usize)> = graph
            .outgoing_edges(NodeId::new(0))
            .map(|e| (e.symbol_index, e.target.index()))
            .collect();
        assert_eq!(edges, vec![(0, 2), (0, 3), (1, 0), (1, 1)]);

        let targets: Vec<usize> = graph.successors(NodeId::new(0)).map(NodeId::index).collect();
        assert_eq!(targets, vec![2, 3, 0, 1]);
    }

    #[test]
    fn test_edge_carries_source() {
        let mut nfa: CompactNfa<char> = CompactNfa::new(Alphabet::from_symbols(['x']));
        let q0 = nfa.add_state(None);
        let q1 = nfa.add_state(None);
        nfa.add_transition(q1, 0, q0).unwrap();

        let graph = nfa.as_graph();
        let edge = graph.outgoing_edges(q1.into()).next().unwrap();
        assert_eq!(
            edge,
            TransitionEdge {
                source: q1,
                symbol_index: 0,
                target: q0
            }
        );
        assert_eq!(graph.edge_target(edge), NodeId::from(q0));
        assert_eq!(graph.outgoing_edges(q0.into()).count(), 0);
    }

    #[test]
    fn test_nodes_follow_size() {
        let mut nfa: CompactNfa<u8> = CompactNfa::new(Alphabet::from_symbols([0, 1]));
        assert_eq!(nfa.as_graph().node_count(), 0);
        for _ in 0..3 {
            nfa.add_state(None);
        }
        let graph = nfa.as_graph();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(
            graph.node_ids().collect::<Vec<_>>(),
            vec![NodeId::new(0), NodeId::new(1), NodeId::new(2)]
        );
    }
}
