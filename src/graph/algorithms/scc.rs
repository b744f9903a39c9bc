//! Strongly Connected Components (SCC) using Tarjan's algorithm.
//!
//! Tarjan's algorithm is expressed here as a [`DfsVisitor`] so it runs on the shared traversal
//! engine: [`TarjanSccVisitor`] holds the per-node records and the open components, while
//! [`depth_first`] owns the walk. Components are reported through an [`SccListener`] the moment
//! their root finishes, which happens in reverse topological order of the condensation.
//!
//! # Use Cases
//!
//! - **Automaton trimming**: states outside every SCC reachable from an initial state are dead
//! - **Cycle detection**: a transition system is acyclic iff every SCC is a singleton without a
//!   self-loop
//! - **Condensation**: collapsing SCCs yields the DAG most automata algorithms iterate over

use tracing::trace;

use crate::graph::{
    algorithms::traversal::{depth_first, DfsVisitor, TraversalAction},
    GraphBase, NodeId, NodeMap, OutgoingEdges,
};

/// Low-link value of a record whose component has already been emitted.
///
/// Edges into finished components must not lower any low-link, so records are overwritten with
/// this sentinel when their component is drained.
const NODE_FINISHED: usize = usize::MAX;

/// Receives strongly connected components as they are discovered.
///
/// Each component is reported exactly once, as a whole. Nodes inside a component appear in the
/// order their exploration finished, so the component's root always comes last.
///
/// Closures taking `&[NodeId]` and `Vec<Vec<NodeId>>` (which collects every component) implement
/// this trait.
pub trait SccListener {
    /// Called once per strongly connected component.
    fn found_scc(&mut self, nodes: &[NodeId]);
}

impl<F> SccListener for F
where
    F: FnMut(&[NodeId]),
{
    fn found_scc(&mut self, nodes: &[NodeId]) {
        self(nodes);
    }
}

impl SccListener for Vec<Vec<NodeId>> {
    fn found_scc(&mut self, nodes: &[NodeId]) {
        self.push(nodes.to_vec());
    }
}

/// Depth-first visitor realizing Tarjan's algorithm.
///
/// Node states move from unvisited (no discovery number), to on-stack, to finished (low-link
/// replaced by the finished sentinel). Every record is indexed by its discovery number, which is
/// also the data the traversal engine carries for the node.
///
/// A visitor is good for one sweep over one graph: its discovery counter and records are never
/// reset. Use [`find_sccs`] unless you need to pick the roots yourself.
///
/// # Examples
///
/// ```rust
/// use compact_automata::{Alphabet, CompactNfa};
/// use compact_automata::graph::{GraphBase, NodeId, algorithms::{depth_first, TarjanSccVisitor}};
///
/// let mut nfa: CompactNfa<u8> = CompactNfa::new(Alphabet::from_symbols([0]));
/// let q0 = nfa.add_initial_state(None);
/// let q1 = nfa.add_state(None);
/// let q2 = nfa.add_state(None);
/// nfa.add_transition(q0, 0, q1)?;
/// nfa.add_transition(q1, 0, q0)?;
///
/// let graph = nfa.as_graph();
/// let mut found = Vec::new();
/// let mut visitor = TarjanSccVisitor::new(&graph, |scc: &[NodeId]| found.push(scc.len()));
///
/// // Only sweep what the initial states reach.
/// let roots: Vec<NodeId> = nfa.initial_states().map(NodeId::from).collect();
/// depth_first(&graph, roots, &mut visitor);
///
/// assert!(!visitor.has_visited(q2.into()));
/// drop(visitor);
/// assert_eq!(found, vec![2]);
/// # Ok::<(), compact_automata::Error>(())
/// ```
pub struct TarjanSccVisitor<L> {
    /// Discovery number of every entered node
    numbers: NodeMap<usize>,
    /// Low-link per discovery number
    low_links: Vec<usize>,
    /// Node per discovery number
    nodes: Vec<NodeId>,
    /// Discovery numbers of nodes whose component is still open, in discovery order
    stack: Vec<usize>,
    /// The same open nodes, in the order they finished
    finished: Vec<usize>,
    /// Buffer handed to the listener
    component: Vec<NodeId>,
    listener: L,
}

impl<L: SccListener> TarjanSccVisitor<L> {
    /// Creates a visitor for `graph` that reports components to `listener`.
    pub fn new<G: GraphBase>(graph: &G, listener: L) -> Self {
        TarjanSccVisitor {
            numbers: graph.node_map(),
            low_links: Vec::with_capacity(graph.node_count()),
            nodes: Vec::with_capacity(graph.node_count()),
            stack: Vec::new(),
            finished: Vec::new(),
            component: Vec::new(),
            listener,
        }
    }

    /// Returns `true` if the node has been reached by any traversal driven by this visitor.
    #[must_use]
    pub fn has_visited(&self, node: NodeId) -> bool {
        self.numbers.contains(node)
    }

    /// Consumes the visitor and returns its listener.
    pub fn into_listener(self) -> L {
        self.listener
    }

    /// Assigns the next discovery number to `node`.
    fn create_record(&mut self, node: NodeId) -> usize {
        let number = self.low_links.len();
        self.low_links.push(number);
        self.nodes.push(node);
        number
    }

    fn lower(&mut self, number: usize, candidate: usize) {
        if candidate != NODE_FINISHED && candidate < self.low_links[number] {
            self.low_links[number] = candidate;
        }
    }
}

impl<G: OutgoingEdges, L: SccListener> DfsVisitor<G> for TarjanSccVisitor<L> {
    type Data = usize;

    fn process_initial(&mut self, node: NodeId) -> TraversalAction<usize> {
        if self.has_visited(node) {
            return TraversalAction::Ignore;
        }
        TraversalAction::Explore(self.create_record(node))
    }

    fn start_exploration(&mut self, node: NodeId, number: &mut usize) -> bool {
        self.numbers.insert(node, *number);
        self.stack.push(*number);
        true
    }

    fn process_edge(
        &mut self,
        _source: NodeId,
        source_number: &mut usize,
        _edge: G::Edge,
        target: NodeId,
    ) -> TraversalAction<usize> {
        let Some(&target_number) = self.numbers.get(target) else {
            return TraversalAction::Explore(self.create_record(target));
        };

        // Unfinished target closes a cycle through the current path.
        if self.low_links[target_number] != NODE_FINISHED {
            self.lower(*source_number, target_number);
        }
        TraversalAction::Ignore
    }

    fn backtrack_edge(
        &mut self,
        _source: NodeId,
        source_number: &mut usize,
        _edge: G::Edge,
        _target: NodeId,
        target_number: &usize,
    ) {
        let target_low = self.low_links[*target_number];
        self.lower(*source_number, target_low);
    }

    fn finish_exploration(&mut self, node: NodeId, number: &mut usize) {
        let number = *number;
        self.finished.push(number);
        if self.low_links[number] != number {
            return;
        }

        // Everything pushed since the root was discovered belongs to its component.
        let start = self.stack.partition_point(|&n| n < number);
        for member in self.stack.drain(start..) {
            self.low_links[member] = NODE_FINISHED;
        }

        // Open entries discovered before the root finished before the root was entered, so the
        // root's members form the tail of the finish order.
        let tail = self
            .finished
            .iter()
            .rposition(|&n| n < number)
            .map_or(0, |i| i + 1);
        self.component.clear();
        for member in self.finished.drain(tail..) {
            self.component.push(self.nodes[member]);
        }

        trace!(root = %node, size = self.component.len(), "found strongly connected component");
        self.listener.found_scc(&self.component);
    }
}

/// Reports every strongly connected component of `graph` to `listener`.
///
/// Every node is offered as a root in [`GraphBase::node_ids`] order; roots already reached by an
/// earlier traversal are skipped. Every node ends up in exactly one reported component. The listener is returned
/// once the sweep completes.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V)
pub fn find_sccs<G, L>(graph: &G, listener: L) -> L
where
    G: OutgoingEdges,
    L: SccListener,
{
    let mut visitor = TarjanSccVisitor::new(graph, listener);
    depth_first(graph, graph.node_ids(), &mut visitor);
    visitor.into_listener()
}

/// Computes the strongly connected components of a directed graph.
///
/// # Returns
///
/// A vector of SCCs, where each SCC is a vector of `NodeId`s. The SCCs are returned in
/// **reverse topological order** (i.e., if there's an edge from SCC A to SCC B, then A appears
/// after B in the result).
///
/// # Examples
///
/// ```rust
/// use compact_automata::{Alphabet, CompactNfa};
/// use compact_automata::graph::algorithms::strongly_connected_components;
///
/// // Simple cycle: q0 -> q1 -> q2 -> q0
/// let mut nfa: CompactNfa<char> = CompactNfa::new(Alphabet::from_symbols(['x']));
/// let states: Vec<_> = (0..3).map(|_| nfa.add_state(None)).collect();
/// for i in 0..3 {
///     nfa.add_transition(states[i], 0, states[(i + 1) % 3])?;
/// }
///
/// let sccs = strongly_connected_components(&nfa.as_graph());
/// assert_eq!(sccs.len(), 1);
/// assert_eq!(sccs[0].len(), 3);
/// # Ok::<(), compact_automata::Error>(())
/// ```
#[must_use]
pub fn strongly_connected_components<G>(graph: &G) -> Vec<Vec<NodeId>>
where
    G: OutgoingEdges,
{
    find_sccs(graph, Vec::new())
}
