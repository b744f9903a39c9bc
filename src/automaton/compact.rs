//! Dense, growable storage for nondeterministic automata.
//!
//! [`CompactNfa`] keeps every transition in one flat, row-major vector of successor sets. The
//! slot for `(state, symbol)` lives at `state * alphabet_size + symbol`, so each state owns one
//! contiguous run of `alphabet_size` slots. The vector is sized for the *capacity* rather than
//! the number of live states, leaving room for new states without relocation:
//!
//! ```text
//!            symbol 0   symbol 1   symbol 2
//! state 0  [ {1}      | {}       | {0, 2}  ]   <- populated region
//! state 1  [ {}       | {1}      | {}      ]   <- (size × alphabet_size)
//! .......  [ {}       | {}       | {}      ]   <- reserved capacity
//! ```
//!
//! # Growth
//!
//! The table grows along two independent axes:
//!
//! - **States**: once the capacity is exhausted the vector is reallocated for
//!   `max(required, capacity × resize_factor)` states. Existing rows keep their offsets.
//! - **Symbols**: adding a symbol widens every row by one slot. Rows of live states are shifted
//!   to their new offsets in place, back to front; the new column starts out empty. The work is
//!   proportional to the number of live states, not to the capacity.
//!
//! Neither path changes a state id, a symbol index or the content of an existing slot.
//!
//! # Validation
//!
//! Every operation checks its state ids against `[0, size)` and its symbol indices against the
//! alphabet before writing anything. A call that returns an error leaves the automaton
//! untouched.

use std::{collections::BTreeSet, hash::Hash};

use tracing::debug;

use crate::{
    automaton::{CompactConfig, StateId, TransitionGraph},
    Alphabet, Error, Result,
};

/// Set of successor states stored in one transition slot.
///
/// Ordered, so enumeration of a slot (and therefore of an automaton's edges) is deterministic.
pub type SuccessorSet = BTreeSet<StateId>;

static EMPTY_SUCCESSORS: SuccessorSet = BTreeSet::new();

/// A mutable nondeterministic automaton over input symbols `I` with optional state properties
/// `SP`.
///
/// States are dense [`StateId`]s; symbols are addressed by their index in the automaton's
/// [`Alphabet`], with `*_for` variants accepting the symbol value instead. A transition slot
/// holds any number of successors, so the same type represents deterministic and
/// nondeterministic automata.
///
/// # Examples
///
/// ```rust
/// use compact_automata::{Alphabet, CompactNfa, StateId};
///
/// // Accepting flag as state property.
/// let mut nfa: CompactNfa<char, bool> = CompactNfa::new(Alphabet::from_symbols(['a', 'b']));
/// let q0 = nfa.add_initial_state(Some(false));
/// let q1 = nfa.add_state(Some(true));
///
/// nfa.add_transition_for(q0, &'a', q0)?;
/// nfa.add_transition_for(q0, &'a', q1)?;
/// nfa.add_transition(q1, 1, q1)?;
///
/// let after_a: Vec<StateId> = nfa.transitions_for(q0, &'a')?.iter().copied().collect();
/// assert_eq!(after_a, vec![q0, q1]);
///
/// // Growing the alphabet keeps every existing transition.
/// let c = nfa.add_alphabet_symbol('c');
/// assert_eq!(c, 2);
/// assert_eq!(nfa.successors(q1, 1)?.len(), 1);
/// assert!(nfa.successors(q1, c)?.is_empty());
/// # Ok::<(), compact_automata::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct CompactNfa<I: Hash + Eq, SP = ()> {
    alphabet: Alphabet<I>,
    config: CompactConfig,
    /// Row-major, `state_capacity * alphabet.len()` slots
    transitions: Vec<Option<SuccessorSet>>,
    /// One slot per state of capacity
    properties: Vec<Option<SP>>,
    initial: BTreeSet<StateId>,
    state_capacity: usize,
    num_states: usize,
}

impl<I: Hash + Eq, SP> CompactNfa<I, SP> {
    /// Creates an empty automaton over `alphabet` with the default [`CompactConfig`].
    #[must_use]
    pub fn new(alphabet: Alphabet<I>) -> Self {
        Self::build(alphabet, CompactConfig::default())
    }

    /// Creates an empty automaton over `alphabet` sized according to `config`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if `config` fails [`CompactConfig::validate`].
    pub fn with_config(alphabet: Alphabet<I>, config: CompactConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(alphabet, config))
    }

    fn build(alphabet: Alphabet<I>, config: CompactConfig) -> Self {
        let state_capacity = config.initial_capacity;
        let mut transitions = Vec::new();
        transitions.resize_with(state_capacity * alphabet.len(), || None);
        let mut properties = Vec::new();
        properties.resize_with(state_capacity, || None);

        CompactNfa {
            alphabet,
            config,
            transitions,
            properties,
            initial: BTreeSet::new(),
            state_capacity,
            num_states: 0,
        }
    }

    /// Returns the input alphabet.
    #[must_use]
    pub fn alphabet(&self) -> &Alphabet<I> {
        &self.alphabet
    }

    /// Returns the number of input symbols.
    #[must_use]
    #[inline]
    pub fn alphabet_size(&self) -> usize {
        self.alphabet.len()
    }

    /// Returns the sizing configuration.
    #[must_use]
    pub fn config(&self) -> &CompactConfig {
        &self.config
    }

    /// Returns the number of states.
    #[must_use]
    #[inline]
    pub fn size(&self) -> usize {
        self.num_states
    }

    /// Returns `true` if the automaton has no states.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.num_states == 0
    }

    /// Returns the number of states the transition table has room for.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.state_capacity
    }

    /// Iterates over all states in ascending id order.
    pub fn states(&self) -> impl Iterator<Item = StateId> {
        (0..self.num_states).map(StateId::new)
    }

    /// Returns a graph view with states as nodes and transitions as edges.
    #[must_use]
    pub fn as_graph(&self) -> TransitionGraph<'_, I, SP> {
        TransitionGraph::new(self)
    }

    #[inline]
    fn slot(&self, state: usize, symbol_index: usize) -> usize {
        state * self.alphabet.len() + symbol_index
    }

    fn check_state(&self, state: StateId) -> Result<usize> {
        if state.index() < self.num_states {
            Ok(state.index())
        } else {
            Err(Error::InvalidState {
                state: state.index(),
                size: self.num_states,
            })
        }
    }

    fn check_slot(&self, state: StateId, symbol_index: usize) -> Result<usize> {
        let state = self.check_state(state)?;
        if symbol_index >= self.alphabet.len() {
            return Err(Error::InvalidSymbolIndex {
                index: symbol_index,
                size: self.alphabet.len(),
            });
        }
        Ok(self.slot(state, symbol_index))
    }

    /// Returns the index of `symbol` in the alphabet.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownSymbol`] if the symbol is not part of the alphabet.
    pub fn symbol_index(&self, symbol: &I) -> Result<usize> {
        self.alphabet.symbol_index(symbol).ok_or(Error::UnknownSymbol)
    }

    /// Adds a state and returns its id.
    ///
    /// The id equals the previous [`size`](Self::size). Capacity grows as needed; growth is
    /// amortized O(1) per added state.
    pub fn add_state(&mut self, property: Option<SP>) -> StateId {
        let state = self.num_states;
        self.ensure_capacity(state + 1);
        self.num_states = state + 1;
        self.properties[state] = property;
        StateId::new(state)
    }

    /// Adds a state and marks it initial.
    pub fn add_initial_state(&mut self, property: Option<SP>) -> StateId {
        let state = self.add_state(property);
        self.initial.insert(state);
        state
    }

    /// Makes sure at least `capacity` states fit without relocating the transition table.
    ///
    /// Does nothing if the current capacity already suffices. Otherwise the capacity becomes
    /// `max(capacity, current × resize_factor)`.
    pub fn ensure_capacity(&mut self, capacity: usize) {
        if capacity <= self.state_capacity {
            return;
        }
        let new_capacity = self.config.grown_capacity(self.state_capacity, capacity);
        self.grow_states(new_capacity);
    }

    fn grow_states(&mut self, new_capacity: usize) {
        debug!(
            old_capacity = self.state_capacity,
            new_capacity,
            alphabet_size = self.alphabet.len(),
            "growing automaton state capacity"
        );

        self.transitions
            .resize_with(new_capacity * self.alphabet.len(), || None);
        self.grow_property_storage(new_capacity);
        self.state_capacity = new_capacity;
    }

    /// Extends per-state storage derived from the capacity.
    fn grow_property_storage(&mut self, new_capacity: usize) {
        self.properties.resize_with(new_capacity, || None);
    }

    /// Adds or removes `state` from the initial states.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidState`] if `state` is not a live state.
    pub fn set_initial(&mut self, state: StateId, initial: bool) -> Result<()> {
        self.check_state(state)?;
        if initial {
            self.initial.insert(state);
        } else {
            self.initial.remove(&state);
        }
        Ok(())
    }

    /// Returns `true` if `state` is an initial state.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidState`] if `state` is not a live state.
    pub fn is_initial(&self, state: StateId) -> Result<bool> {
        self.check_state(state)?;
        Ok(self.initial.contains(&state))
    }

    /// Iterates over the initial states in ascending id order.
    pub fn initial_states(&self) -> impl Iterator<Item = StateId> + '_ {
        self.initial.iter().copied()
    }

    /// Returns the property attached to `state`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidState`] if `state` is not a live state.
    pub fn state_property(&self, state: StateId) -> Result<Option<&SP>> {
        let state = self.check_state(state)?;
        Ok(self.properties[state].as_ref())
    }

    /// Replaces the property attached to `state`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidState`] if `state` is not a live state.
    pub fn set_state_property(&mut self, state: StateId, property: Option<SP>) -> Result<()> {
        let state = self.check_state(state)?;
        self.properties[state] = property;
        Ok(())
    }

    /// Returns the successors of `state` on the symbol with index `symbol_index`.
    ///
    /// A slot that never received a transition yields an empty set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidState`] or [`Error::InvalidSymbolIndex`] for out-of-range
    /// arguments.
    pub fn successors(&self, state: StateId, symbol_index: usize) -> Result<&SuccessorSet> {
        let slot = self.check_slot(state, symbol_index)?;
        Ok(self.transitions[slot].as_ref().unwrap_or(&EMPTY_SUCCESSORS))
    }

    /// Returns the successors of `state` on `symbol`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownSymbol`] if `symbol` is not in the alphabet, or
    /// [`Error::InvalidState`] for an out-of-range state.
    pub fn transitions_for(&self, state: StateId, symbol: &I) -> Result<&SuccessorSet> {
        self.successors(state, self.symbol_index(symbol)?)
    }

    /// Slot lookup for callers that already validated `state` and `symbol_index`.
    pub(crate) fn slot_successors(&self, state: StateId, symbol_index: usize) -> &SuccessorSet {
        self.transitions[self.slot(state.index(), symbol_index)]
            .as_ref()
            .unwrap_or(&EMPTY_SUCCESSORS)
    }

    /// Adds `target` to the successors of `state` on `symbol_index`. Adding an existing
    /// transition changes nothing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidState`] if `state` or `target` is not a live state, or
    /// [`Error::InvalidSymbolIndex`] for an out-of-range symbol index.
    pub fn add_transition(
        &mut self,
        state: StateId,
        symbol_index: usize,
        target: StateId,
    ) -> Result<()> {
        let slot = self.check_slot(state, symbol_index)?;
        self.check_state(target)?;
        self.transitions[slot]
            .get_or_insert_with(SuccessorSet::new)
            .insert(target);
        Ok(())
    }

    /// Symbol-valued form of [`add_transition`](Self::add_transition).
    ///
    /// # Errors
    ///
    /// As [`add_transition`](Self::add_transition), plus [`Error::UnknownSymbol`].
    pub fn add_transition_for(&mut self, state: StateId, symbol: &I, target: StateId) -> Result<()> {
        let symbol_index = self.symbol_index(symbol)?;
        self.add_transition(state, symbol_index, target)
    }

    /// Removes `target` from the successors of `state` on `symbol_index`, if present.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidState`] or [`Error::InvalidSymbolIndex`] for out-of-range
    /// arguments. A missing transition is not an error.
    pub fn remove_transition(
        &mut self,
        state: StateId,
        symbol_index: usize,
        target: StateId,
    ) -> Result<()> {
        let slot = self.check_slot(state, symbol_index)?;
        if let Some(successors) = self.transitions[slot].as_mut() {
            successors.remove(&target);
            if successors.is_empty() {
                self.transitions[slot] = None;
            }
        }
        Ok(())
    }

    /// Symbol-valued form of [`remove_transition`](Self::remove_transition).
    ///
    /// # Errors
    ///
    /// As [`remove_transition`](Self::remove_transition), plus [`Error::UnknownSymbol`].
    pub fn remove_transition_for(
        &mut self,
        state: StateId,
        symbol: &I,
        target: StateId,
    ) -> Result<()> {
        let symbol_index = self.symbol_index(symbol)?;
        self.remove_transition(state, symbol_index, target)
    }

    /// Removes every transition of `state` on `symbol_index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidState`] or [`Error::InvalidSymbolIndex`] for out-of-range
    /// arguments.
    pub fn remove_transitions_on(&mut self, state: StateId, symbol_index: usize) -> Result<()> {
        let slot = self.check_slot(state, symbol_index)?;
        self.transitions[slot] = None;
        Ok(())
    }

    /// Symbol-valued form of [`remove_transitions_on`](Self::remove_transitions_on).
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownSymbol`] if `symbol` is not in the alphabet, or
    /// [`Error::InvalidState`] for an out-of-range state.
    pub fn remove_transitions_on_for(&mut self, state: StateId, symbol: &I) -> Result<()> {
        let symbol_index = self.symbol_index(symbol)?;
        self.remove_transitions_on(state, symbol_index)
    }

    /// Removes every outgoing transition of `state`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidState`] if `state` is not a live state.
    pub fn remove_all_transitions(&mut self, state: StateId) -> Result<()> {
        let state = self.check_state(state)?;
        let base = self.slot(state, 0);
        let end = base + self.alphabet.len();
        for slot in &mut self.transitions[base..end] {
            *slot = None;
        }
        Ok(())
    }

    /// Replaces the successors of `state` on `symbol_index` with `successors`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidState`] if `state` or any successor is not a live state, or
    /// [`Error::InvalidSymbolIndex`] for an out-of-range symbol index. Nothing is written on
    /// error.
    pub fn set_transitions<T>(
        &mut self,
        state: StateId,
        symbol_index: usize,
        successors: T,
    ) -> Result<()>
    where
        T: IntoIterator<Item = StateId>,
    {
        let slot = self.check_slot(state, symbol_index)?;
        let successors: SuccessorSet = successors.into_iter().collect();
        for &target in &successors {
            self.check_state(target)?;
        }

        self.transitions[slot] = if successors.is_empty() {
            None
        } else {
            Some(successors)
        };
        Ok(())
    }

    /// Symbol-valued form of [`set_transitions`](Self::set_transitions).
    ///
    /// # Errors
    ///
    /// As [`set_transitions`](Self::set_transitions), plus [`Error::UnknownSymbol`].
    pub fn set_transitions_for<T>(&mut self, state: StateId, symbol: &I, successors: T) -> Result<()>
    where
        T: IntoIterator<Item = StateId>,
    {
        let symbol_index = self.symbol_index(symbol)?;
        self.set_transitions(state, symbol_index, successors)
    }

    /// Adds `symbol` to the alphabet and returns its index.
    ///
    /// A symbol already in the alphabet keeps its index and the table is left alone. Otherwise
    /// every row gains an empty slot for the new symbol.
    pub fn add_alphabet_symbol(&mut self, symbol: I) -> usize {
        if let Some(index) = self.alphabet.symbol_index(&symbol) {
            return index;
        }

        let old_size = self.alphabet.len();
        self.grow_alphabet(old_size);
        self.alphabet.append(symbol)
    }

    /// Re-lays the table out from stride `old_size` to stride `old_size + 1`.
    fn grow_alphabet(&mut self, old_size: usize) {
        let new_size = old_size + 1;
        debug!(
            old_size,
            new_size,
            states = self.num_states,
            "widening automaton transition rows"
        );

        self.transitions
            .resize_with(self.state_capacity * new_size, || None);

        // Back to front: every destination slot is at or after its source and has already been
        // vacated by the time it is written.
        for state in (0..self.num_states).rev() {
            for symbol in (0..old_size).rev() {
                let from = state * old_size + symbol;
                let to = state * new_size + symbol;
                if from != to {
                    self.transitions.swap(from, to);
                }
            }
        }
    }

    /// Removes all states, transitions, properties and initial flags.
    ///
    /// Capacity and alphabet are kept, so refilling the automaton does not reallocate.
    pub fn clear(&mut self) {
        debug!(states = self.num_states, "clearing automaton");

        let populated = self.num_states * self.alphabet.len();
        for slot in &mut self.transitions[..populated] {
            *slot = None;
        }
        for property in &mut self.properties[..self.num_states] {
            *property = None;
        }
        self.num_states = 0;
        self.initial.clear();
    }

    /// Returns the total number of `(state, symbol, successor)` transitions.
    #[must_use]
    pub fn transition_count(&self) -> usize {
        let populated = self.num_states * self.alphabet.len();
        self.transitions[..populated]
            .iter()
            .flatten()
            .map(SuccessorSet::len)
            .sum()
    }
}
