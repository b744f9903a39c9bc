// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # compact-automata
//!
//! Dense, array-backed storage for nondeterministic finite automata, together with a
//! visitor-driven depth-first traversal engine and Tarjan's strongly connected components
//! algorithm built on top of it.
//!
//! ## Features
//!
//! - **Dense storage** - One flat, row-major transition table indexed by `(state, symbol)`
//! - **Growable in both directions** - States and alphabet symbols can be added at any time
//!   without invalidating ids or indices
//! - **Generic graph contract** - Algorithms run on anything implementing
//!   [`graph::GraphBase`] and [`graph::OutgoingEdges`]
//! - **Explicit-stack traversal** - Depth-first search never recurses, so path-shaped automata
//!   with millions of states are traversed safely
//! - **Strongly connected components** - Reported incrementally through a listener
//!
//! ## Quick Start
//!
//! ```rust
//! use compact_automata::prelude::*;
//!
//! let mut nfa: CompactNfa<char> = CompactNfa::new(Alphabet::from_symbols(['a', 'b']));
//! let q0 = nfa.add_initial_state(None);
//! let q1 = nfa.add_state(None);
//! let q2 = nfa.add_state(None);
//!
//! nfa.add_transition_for(q0, &'a', q1)?;
//! nfa.add_transition_for(q1, &'b', q0)?;
//! nfa.add_transition_for(q1, &'a', q2)?;
//!
//! let components = strongly_connected_components(&nfa.as_graph());
//! assert_eq!(components.len(), 2);
//! assert!(components.contains(&vec![NodeId::from(q2)]));
//! # Ok::<(), compact_automata::Error>(())
//! ```
//!
//! ## Modules
//!
//! - [`alphabet`] - Ordered, index-addressable input symbol sets
//! - [`automaton`] - [`CompactNfa`] storage and its graph view
//! - [`graph`] - Graph contract, traversal engine and algorithms
//! - [`prelude`] - Glob-importable selection of the common types
//!
//! ## Error Handling
//!
//! Fallible operations return [`Result`]. Storage operations check every argument before
//! writing, so an error never leaves an automaton half-modified. See [`Error`] for the
//! possible failures.
//!
//! ## Logging
//!
//! The crate emits [`tracing`](https://docs.rs/tracing) events: `debug` when the transition
//! table is relocated or cleared, `trace` for every strongly connected component found. No
//! subscriber is installed by the library.

#[macro_use]
pub(crate) mod error;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust
/// use compact_automata::prelude::*;
///
/// let mut nfa: CompactNfa<u8> = CompactNfa::new(Alphabet::from_symbols([0, 1]));
/// let q0 = nfa.add_state(None);
/// nfa.add_transition(q0, 1, q0)?;
/// assert_eq!(preorder(&nfa.as_graph(), q0.into()), vec![NodeId::from(q0)]);
/// # Ok::<(), compact_automata::Error>(())
/// ```
pub mod prelude;

/// Input alphabets
///
/// An [`Alphabet`] assigns every symbol a stable, dense index in insertion order. Automata
/// address their transition table by these indices.
pub mod alphabet;

/// Compact automaton storage
///
/// The [`CompactNfa`] stores transitions in one flat table that grows along the state axis
/// (amortized, by a configurable factor) and along the symbol axis (one column at a time).
///
/// # Key Types
///
/// - [`automaton::CompactNfa`] - The automaton itself
/// - [`automaton::CompactConfig`] - Initial capacity and resize factor
/// - [`automaton::StateId`] - Dense state identifiers
/// - [`automaton::TransitionGraph`] - Borrowing graph view for the algorithms
pub mod automaton;

/// Graph contract and algorithms
///
/// # Key Types
///
/// - [`graph::NodeId`], [`graph::NodeMap`] - Node identifiers and per-traversal storage
/// - [`graph::GraphBase`], [`graph::OutgoingEdges`] - What a graph has to provide
/// - [`graph::algorithms::depth_first`] - The explicit-stack traversal engine
/// - [`graph::algorithms::TarjanSccVisitor`] - Incremental strongly connected components
pub mod graph;

/// `compact-automata` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `compact-automata` Error type
///
/// # Examples
///
/// ```rust
/// use compact_automata::{Alphabet, CompactNfa, Error};
///
/// let mut nfa: CompactNfa<char> = CompactNfa::new(Alphabet::from_symbols(['a']));
/// let q0 = nfa.add_state(None);
///
/// match nfa.add_transition_for(q0, &'b', q0) {
///     Err(Error::UnknownSymbol) => {}
///     other => panic!("unexpected result: {other:?}"),
/// }
/// ```
pub use error::Error;

pub use alphabet::Alphabet;
pub use automaton::{CompactConfig, CompactNfa, StateId};
