//! Graph algorithms built on the depth-first traversal engine.
//!
//! # Available Algorithms
//!
//! ## Traversal
//!
//! - [`depth_first`] - Visitor-driven depth-first traversal engine
//! - [`preorder`] - Depth-first pre-order
//! - [`postorder`] - Depth-first post-order
//! - [`reverse_postorder`] - Reverse postorder traversal (useful for data flow)
//!
//! ## Strongly Connected Components
//!
//! - [`find_sccs`] - Tarjan's algorithm, reporting to an [`SccListener`]
//! - [`strongly_connected_components`] - Tarjan's algorithm, collecting all components
//!
//! # Algorithm Selection
//!
//! | Algorithm | Time Complexity | Use Case |
//! |-----------|-----------------|----------|
//! | Pre/Post-order | O(V + E) | Reachability, propagation order |
//! | SCC | O(V + E) | Cycle structure, trimming |
//!
//! # Examples
//!
//! ```rust
//! use compact_automata::{Alphabet, CompactNfa};
//! use compact_automata::graph::{NodeId, algorithms};
//!
//! let mut nfa: CompactNfa<char> = CompactNfa::new(Alphabet::from_symbols(['a', 'b']));
//! let q0 = nfa.add_state(None);
//! let q1 = nfa.add_state(None);
//! let q2 = nfa.add_state(None);
//! nfa.add_transition(q0, 0, q1)?;
//! nfa.add_transition(q1, 1, q2)?;
//!
//! let graph = nfa.as_graph();
//! let order: Vec<NodeId> = algorithms::preorder(&graph, q0.into());
//! assert_eq!(order, vec![q0.into(), q1.into(), q2.into()]);
//! # Ok::<(), compact_automata::Error>(())
//! ```

mod scc;
mod traversal;

pub use scc::{find_sccs, strongly_connected_components, SccListener, TarjanSccVisitor};
pub use traversal::{
    depth_first, postorder, preorder, reverse_postorder, DfsVisitor, TraversalAction,
};
