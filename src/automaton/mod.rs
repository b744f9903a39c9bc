//! Automaton storage.
//!
//! - [`StateId`] - Dense state identifier
//! - [`CompactConfig`] - Initial capacity and growth factor of the transition table
//! - [`CompactNfa`] - Growable, dense-indexed nondeterministic automaton
//! - [`TransitionGraph`] / [`TransitionEdge`] - Graph view consumed by
//!   [`crate::graph::algorithms`]

mod compact;
mod config;
mod state;
mod view;

pub use compact::{CompactNfa, SuccessorSet};
pub use config::{CompactConfig, DEFAULT_INITIAL_CAPACITY, DEFAULT_RESIZE_FACTOR};
pub use state::StateId;
pub use view::{TransitionEdge, TransitionGraph};
