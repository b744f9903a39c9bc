//! Traversal and strongly connected component integration tests.
//!
//! Automata are built through the storage API and analyzed through their graph view, so these
//! tests cover the whole path from `CompactNfa` to the listener.

use std::collections::BTreeSet;

use compact_automata::{
    automaton::{TransitionEdge, TransitionGraph},
    graph::{
        algorithms::{
            depth_first, find_sccs, postorder, preorder, reverse_postorder,
            strongly_connected_components, DfsVisitor, TarjanSccVisitor, TraversalAction,
        },
        NodeId, NodeMap, OutgoingEdges,
    },
    Alphabet, CompactNfa, Result, StateId,
};

/// Builds a one-symbol automaton with `n` states and the given transitions.
fn automaton(n: usize, edges: &[(usize, usize)]) -> Result<CompactNfa<char>> {
    let mut nfa = CompactNfa::new(Alphabet::from_symbols(['a']));
    for _ in 0..n {
        nfa.add_state(None);
    }
    for &(src, dst) in edges {
        nfa.add_transition(StateId::new(src), 0, StateId::new(dst))?;
    }
    Ok(nfa)
}

fn components(nfa: &CompactNfa<char>) -> Vec<BTreeSet<usize>> {
    strongly_connected_components(&nfa.as_graph())
        .iter()
        .map(|scc| scc.iter().map(|n| n.index()).collect())
        .collect()
}

fn set(nodes: &[usize]) -> BTreeSet<usize> {
    nodes.iter().copied().collect()
}

#[test]
fn test_cycle_with_tail() -> Result<()> {
    // A -> B -> C -> A, C -> D
    let nfa = automaton(4, &[(0, 1), (1, 2), (2, 0), (2, 3)])?;
    assert_eq!(components(&nfa), vec![set(&[3]), set(&[0, 1, 2])]);
    Ok(())
}

#[test]
fn test_single_state() -> Result<()> {
    assert_eq!(components(&automaton(1, &[])?), vec![set(&[0])]);
    assert_eq!(components(&automaton(1, &[(0, 0)])?), vec![set(&[0])]);
    Ok(())
}

#[test]
fn test_components_partition_states() -> Result<()> {
    let edges = [
        (0, 1),
        (1, 2),
        (2, 0),
        (2, 3),
        (3, 4),
        (4, 5),
        (5, 3),
        (6, 5),
        (6, 7),
        (7, 6),
        (8, 8),
    ];
    let nfa = automaton(10, &edges)?;
    let sccs = components(&nfa);

    let mut seen = BTreeSet::new();
    for scc in &sccs {
        for &node in scc {
            assert!(seen.insert(node), "state {node} reported twice");
        }
    }
    assert_eq!(seen, (0..10).collect());
    assert_eq!(sccs.len(), 5);
    assert!(sccs.contains(&set(&[3, 4, 5])));
    assert!(sccs.contains(&set(&[6, 7])));
    Ok(())
}

#[test]
fn test_nondeterministic_edges_share_component() -> Result<()> {
    let mut nfa: CompactNfa<char> = CompactNfa::new(Alphabet::from_symbols(['a', 'b']));
    let q0 = nfa.add_state(None);
    let q1 = nfa.add_state(None);
    let q2 = nfa.add_state(None);
    nfa.add_transition(q0, 0, q1)?;
    nfa.add_transition(q0, 0, q2)?;
    nfa.add_transition(q2, 1, q0)?;

    let sccs = strongly_connected_components(&nfa.as_graph());
    assert_eq!(sccs.len(), 2);
    assert_eq!(sccs[0], vec![NodeId::from(q1)]);
    let mut cycle = sccs[1].clone();
    cycle.sort();
    assert_eq!(cycle, vec![NodeId::from(q0), NodeId::from(q2)]);
    Ok(())
}

#[test]
fn test_sccs_reachable_from_initial_states() -> Result<()> {
    let mut nfa = automaton(5, &[(0, 1), (1, 0), (3, 4), (4, 3), (1, 2)])?;
    nfa.set_initial(StateId::new(0), true)?;

    let graph = nfa.as_graph();
    let mut reached = Vec::new();
    let mut visitor = TarjanSccVisitor::new(&graph, |scc: &[NodeId]| reached.push(scc.len()));
    let roots: Vec<NodeId> = nfa.initial_states().map(NodeId::from).collect();
    depth_first(&graph, roots, &mut visitor);

    for state in [3, 4] {
        assert!(!visitor.has_visited(NodeId::new(state)));
    }
    drop(visitor);
    assert_eq!(reached, vec![1, 2]);
    Ok(())
}

#[test]
fn test_listener_sees_components_in_completion_order() -> Result<()> {
    // Chain 0 -> 1 -> 2: the deepest component completes first.
    let nfa = automaton(3, &[(0, 1), (1, 2)])?;
    let mut order = Vec::new();
    find_sccs(&nfa.as_graph(), |scc: &[NodeId]| order.extend_from_slice(scc));
    assert_eq!(order, vec![NodeId::new(2), NodeId::new(1), NodeId::new(0)]);
    Ok(())
}

#[test]
fn test_members_follow_finish_order() -> Result<()> {
    let nfa = automaton(3, &[(0, 1), (1, 2), (2, 0)])?;
    let mut found = Vec::new();
    find_sccs(&nfa.as_graph(), |scc: &[NodeId]| found.push(scc.to_vec()));
    assert_eq!(
        found,
        vec![vec![NodeId::new(2), NodeId::new(1), NodeId::new(0)]]
    );
    Ok(())
}

#[test]
fn test_long_path_automaton() -> Result<()> {
    let n = 300_000;
    let edges: Vec<(usize, usize)> = (0..n - 1).map(|i| (i, i + 1)).collect();
    let nfa = automaton(n, &edges)?;

    assert_eq!(components(&nfa).len(), n);
    assert_eq!(preorder(&nfa.as_graph(), NodeId::new(0)).len(), n);
    Ok(())
}

#[test]
fn test_orders_over_automaton() -> Result<()> {
    //   0 -> 1 -> 3
    //   0 -> 2 -> 3
    let nfa = automaton(4, &[(0, 1), (0, 2), (1, 3), (2, 3)])?;
    let graph = nfa.as_graph();
    let ids = |v: Vec<NodeId>| v.into_iter().map(NodeId::index).collect::<Vec<_>>();

    assert_eq!(ids(preorder(&graph, NodeId::new(0))), vec![0, 1, 3, 2]);
    assert_eq!(ids(postorder(&graph, NodeId::new(0))), vec![3, 1, 2, 0]);
    assert_eq!(ids(reverse_postorder(&graph, NodeId::new(0))), vec![0, 2, 1, 3]);
    assert_eq!(ids(preorder(&graph, NodeId::new(3))), vec![3]);
    Ok(())
}

/// Records the symbol of every tree edge, building a spanning tree of the reachable states.
struct SymbolTree {
    seen: NodeMap<()>,
    tree: Vec<(usize, usize, usize)>,
    finished: Vec<usize>,
}

impl<'a> DfsVisitor<TransitionGraph<'a, char, ()>> for SymbolTree {
    type Data = usize;

    fn process_initial(&mut self, node: NodeId) -> TraversalAction<usize> {
        self.seen.insert(node, ());
        TraversalAction::Explore(0)
    }

    fn process_edge(
        &mut self,
        _source: NodeId,
        depth: &mut usize,
        edge: TransitionEdge,
        target: NodeId,
    ) -> TraversalAction<usize> {
        if self.seen.insert(target, ()).is_some() {
            return TraversalAction::Ignore;
        }
        self.tree
            .push((edge.source.index(), edge.symbol_index, edge.target.index()));
        TraversalAction::Explore(*depth + 1)
    }

    fn finish_exploration(&mut self, _node: NodeId, depth: &mut usize) {
        self.finished.push(*depth);
    }
}

#[test]
fn test_custom_visitor_sees_edge_labels() -> Result<()> {
    let mut nfa: CompactNfa<char> = CompactNfa::new(Alphabet::from_symbols(['a', 'b']));
    let q: Vec<StateId> = (0..4).map(|_| nfa.add_state(None)).collect();
    nfa.add_transition(q[0], 1, q[1])?;
    nfa.add_transition(q[0], 0, q[2])?;
    nfa.add_transition(q[2], 1, q[3])?;
    nfa.add_transition(q[3], 0, q[0])?;
    nfa.add_transition(q[1], 0, q[3])?;

    let graph = nfa.as_graph();
    assert_eq!(graph.outgoing_edges(q[0].into()).count(), 2);

    let mut visitor = SymbolTree {
        seen: NodeMap::with_node_count(4),
        tree: Vec::new(),
        finished: Vec::new(),
    };
    depth_first(&graph, [NodeId::from(q[0])], &mut visitor);

    // Symbol 'a' (index 0) is enumerated before 'b', so 0 -a-> 2 is the first tree edge.
    assert_eq!(visitor.tree, vec![(0, 0, 2), (2, 1, 3), (0, 1, 1)]);
    assert_eq!(visitor.finished, vec![2, 1, 1, 0]);
    Ok(())
}
