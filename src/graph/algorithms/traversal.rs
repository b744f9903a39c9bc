//! Visitor-driven depth-first traversal.
//!
//! This module provides the traversal engine every depth-first algorithm in the crate is built
//! on. The engine owns the walk (the frame stack, edge enumeration and the order of callbacks)
//! and delegates every decision to a [`DfsVisitor`]: which roots to enter, which edges to
//! follow, and what to record on the way down and back up.
//!
//! # Algorithms
//!
//! - [`depth_first`] - The engine itself, for custom visitors
//! - [`preorder`] - Nodes in the order they are first reached
//! - [`postorder`] - Nodes in the order they are finished
//! - [`reverse_postorder`] - Reverse post-order (useful for forward data flow)
//!
//! # Hook Sequence
//!
//! For every root the engine calls [`DfsVisitor::process_initial`]. An explored node then goes
//! through [`start_exploration`](DfsVisitor::start_exploration), one
//! [`process_edge`](DfsVisitor::process_edge) per outgoing edge, a
//! [`backtrack_edge`](DfsVisitor::backtrack_edge) after each explored edge's subtree, and
//! finally [`finish_exploration`](DfsVisitor::finish_exploration). Calls are strictly nested:
//! a node's subtree is finished before the next edge of its parent is processed.
//!
//! # Stack Usage
//!
//! The walk keeps an explicit stack of `(node, edge iterator, data, incoming edge)` frames on
//! the heap. Graph depth therefore never turns into call-stack depth, and a path of a million
//! states traverses just like a path of three.

use crate::graph::{GraphBase, NodeId, NodeMap, OutgoingEdges};

/// Decision returned by a visitor for a root or an edge.
///
/// `Explore` carries the data the engine will hold for the node while it is on the stack and
/// hand back to every later callback concerning it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraversalAction<D> {
    /// Enter the node, attaching `D` to it.
    Explore(D),
    /// Do not enter the node through this root or edge.
    Ignore,
}

/// Callbacks invoked by [`depth_first`].
///
/// The engine does not track which nodes were visited; a visitor that must not enter a node
/// twice keeps its own record (usually a [`NodeMap`]) and answers [`TraversalAction::Ignore`]
/// from [`process_edge`](DfsVisitor::process_edge) for nodes it has already seen.
///
/// All hooks except `process_initial` and `process_edge` have empty default implementations.
pub trait DfsVisitor<G: OutgoingEdges> {
    /// Per-node data held by the engine while the node is on the stack.
    type Data;

    /// Called once per root passed to [`depth_first`].
    fn process_initial(&mut self, node: NodeId) -> TraversalAction<Self::Data>;

    /// Called when a node is entered. Returning `false` drops the node as if it were already
    /// finished: its edges are not enumerated and neither
    /// [`finish_exploration`](DfsVisitor::finish_exploration) nor a backtrack is reported for it.
    fn start_exploration(&mut self, _node: NodeId, _data: &mut Self::Data) -> bool {
        true
    }

    /// Called for every outgoing edge of an entered node, in the graph's native order.
    fn process_edge(
        &mut self,
        source: NodeId,
        source_data: &mut Self::Data,
        edge: G::Edge,
        target: NodeId,
    ) -> TraversalAction<Self::Data>;

    /// Called after the subtree reached through an explored edge has been finished.
    fn backtrack_edge(
        &mut self,
        _source: NodeId,
        _source_data: &mut Self::Data,
        _edge: G::Edge,
        _target: NodeId,
        _target_data: &Self::Data,
    ) {
    }

    /// Called exactly once per entered node, after all of its outgoing edges are handled.
    fn finish_exploration(&mut self, _node: NodeId, _data: &mut Self::Data) {}
}

struct Frame<D, E, I> {
    node: NodeId,
    data: D,
    /// `None` until the visitor agreed to explore the node.
    edges: Option<I>,
    /// Edge the node was reached through; `None` for roots.
    via: Option<E>,
}

/// Runs a depth-first traversal over `graph` from `roots`, driven by `visitor`.
///
/// Roots are processed in the given order. Each root's traversal completes before the next root
/// is offered to the visitor, so a visitor can use roots to sweep a whole graph.
///
/// The traversal terminates once every node the visitor chose to explore is finished. Panics
/// raised by the visitor propagate unchanged and abandon the traversal.
///
/// # Arguments
///
/// * `graph` - The graph to traverse
/// * `roots` - Nodes to start from, in order
/// * `visitor` - Algorithm-specific callbacks
///
/// # Complexity
///
/// - Time: O(V + E) engine overhead for the nodes and edges the visitor explores
/// - Space: O(depth) frames
///
/// # Examples
///
/// ```rust
/// use compact_automata::{Alphabet, CompactNfa};
/// use compact_automata::graph::{NodeId, algorithms::{depth_first, DfsVisitor, TraversalAction}};
/// use compact_automata::automaton::{TransitionEdge, TransitionGraph};
///
/// // Counts the edges the traversal follows.
/// struct TreeEdges(usize, Vec<bool>);
///
/// impl<'a> DfsVisitor<TransitionGraph<'a, char, ()>> for TreeEdges {
///     type Data = ();
///
///     fn process_initial(&mut self, node: NodeId) -> TraversalAction<()> {
///         self.1[node.index()] = true;
///         TraversalAction::Explore(())
///     }
///
///     fn process_edge(&mut self, _: NodeId, _: &mut (), _: TransitionEdge, target: NodeId)
///         -> TraversalAction<()>
///     {
///         if std::mem::replace(&mut self.1[target.index()], true) {
///             return TraversalAction::Ignore;
///         }
///         self.0 += 1;
///         TraversalAction::Explore(())
///     }
/// }
///
/// let mut nfa: CompactNfa<char> = CompactNfa::new(Alphabet::from_symbols(['a']));
/// let q0 = nfa.add_state(None);
/// let q1 = nfa.add_state(None);
/// nfa.add_transition(q0, 0, q1)?;
/// nfa.add_transition(q1, 0, q0)?;
///
/// let graph = nfa.as_graph();
/// let mut visitor = TreeEdges(0, vec![false; 2]);
/// depth_first(&graph, [NodeId::from(q0)], &mut visitor);
/// assert_eq!(visitor.0, 1);
/// # Ok::<(), compact_automata::Error>(())
/// ```
pub fn depth_first<G, V, R>(graph: &G, roots: R, visitor: &mut V)
where
    G: OutgoingEdges,
    V: DfsVisitor<G>,
    R: IntoIterator<Item = NodeId>,
{
    let mut stack = Vec::new();

    for root in roots {
        match visitor.process_initial(root) {
            TraversalAction::Explore(data) => stack.push(Frame {
                node: root,
                data,
                edges: None,
                via: None,
            }),
            TraversalAction::Ignore => continue,
        }

        while let Some(frame) = stack.last_mut() {
            if frame.edges.is_none() {
                if !visitor.start_exploration(frame.node, &mut frame.data) {
                    stack.pop();
                    continue;
                }
                frame.edges = Some(graph.outgoing_edges(frame.node));
            }

            let next_edge = frame.edges.as_mut().and_then(Iterator::next);
            if let Some(edge) = next_edge {
                let target = graph.edge_target(edge);
                if let TraversalAction::Explore(data) =
                    visitor.process_edge(frame.node, &mut frame.data, edge, target)
                {
                    stack.push(Frame {
                        node: target,
                        data,
                        edges: None,
                        via: Some(edge),
                    });
                }
                continue;
            }

            let Some(mut finished) = stack.pop() else {
                break;
            };
            visitor.finish_exploration(finished.node, &mut finished.data);
            if let (Some(edge), Some(parent)) = (finished.via, stack.last_mut()) {
                visitor.backtrack_edge(
                    parent.node,
                    &mut parent.data,
                    edge,
                    finished.node,
                    &finished.data,
                );
            }
        }
    }
}

/// Records pre- and post-order while entering every reachable node once.
struct VisitOrder {
    seen: NodeMap<()>,
    pre: Vec<NodeId>,
    post: Vec<NodeId>,
}

impl VisitOrder {
    fn new<G: GraphBase>(graph: &G) -> Self {
        VisitOrder {
            seen: graph.node_map(),
            pre: Vec::with_capacity(graph.node_count()),
            post: Vec::with_capacity(graph.node_count()),
        }
    }

    fn claim(&mut self, node: NodeId) -> TraversalAction<()> {
        if self.seen.insert(node, ()).is_some() {
            TraversalAction::Ignore
        } else {
            TraversalAction::Explore(())
        }
    }
}

impl<G: OutgoingEdges> DfsVisitor<G> for VisitOrder {
    type Data = ();

    fn process_initial(&mut self, node: NodeId) -> TraversalAction<()> {
        self.claim(node)
    }

    fn start_exploration(&mut self, node: NodeId, _data: &mut ()) -> bool {
        self.pre.push(node);
        true
    }

    fn process_edge(
        &mut self,
        _source: NodeId,
        _source_data: &mut (),
        _edge: G::Edge,
        target: NodeId,
    ) -> TraversalAction<()> {
        self.claim(target)
    }

    fn finish_exploration(&mut self, node: NodeId, _data: &mut ()) {
        self.post.push(node);
    }
}

fn visit_order<G: OutgoingEdges>(graph: &G, start: NodeId) -> VisitOrder {
    let mut order = VisitOrder::new(graph);
    if start.index() < graph.node_count() {
        depth_first(graph, [start], &mut order);
    }
    order
}

/// Returns the nodes reachable from `start` in depth-first pre-order.
///
/// Successors are entered in the graph's edge order. An invalid start node yields an empty
/// vector.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V)
#[must_use]
pub fn preorder<G: OutgoingEdges>(graph: &G, start: NodeId) -> Vec<NodeId> {
    visit_order(graph, start).pre
}

/// Returns the nodes reachable from `start` in depth-first post-order.
///
/// A node appears after every node first reached through its subtree. An invalid start node
/// yields an empty vector.
#[must_use]
pub fn postorder<G: OutgoingEdges>(graph: &G, start: NodeId) -> Vec<NodeId> {
    visit_order(graph, start).post
}

/// Returns the nodes reachable from `start` in reverse post-order.
///
/// For acyclic regions this is a topological order, which makes it the natural iteration order
/// for forward propagation over an automaton.
#[must_use]
pub fn reverse_postorder<G: OutgoingEdges>(graph: &G, start: NodeId) -> Vec<NodeId> {
    let mut result = postorder(graph, start);
    result.reverse();
    result
}
