//! Sizing configuration for compact automata.
//!
//! The transition table of a [`CompactNfa`](crate::CompactNfa) is allocated for a number of
//! states (its capacity) ahead of time. [`CompactConfig`] controls how large that first
//! allocation is and by which factor the capacity grows once it is exhausted.
//!
//! # Example
//!
//! ```rust
//! use compact_automata::{Alphabet, CompactConfig, CompactNfa};
//!
//! let config = CompactConfig::new()
//!     .with_initial_capacity(1024)
//!     .with_resize_factor(2.0);
//!
//! let nfa: CompactNfa<char> = CompactNfa::with_config(Alphabet::from_symbols(['a']), config)?;
//! assert_eq!(nfa.capacity(), 1024);
//! # Ok::<(), compact_automata::Error>(())
//! ```

use crate::Result;

/// Initial state capacity used when none is configured.
pub const DEFAULT_INITIAL_CAPACITY: usize = 11;

/// Capacity growth factor used when none is configured.
pub const DEFAULT_RESIZE_FACTOR: f32 = 1.5;

/// Storage sizing for a compact automaton.
///
/// # Default Configuration
///
/// - Room for 11 states before the first relocation
/// - Capacity grows by a factor of 1.5, which keeps state addition amortized O(1)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CompactConfig {
    /// Number of states the transition table has room for at construction.
    pub initial_capacity: usize,

    /// Factor by which the state capacity grows when it is exhausted.
    ///
    /// A growth request is always satisfied; the factor only decides how much extra room is
    /// reserved on top of it. Must be finite and at least `1.0`.
    pub resize_factor: f32,
}

impl Default for CompactConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl CompactConfig {
    /// Creates the default configuration.
    #[must_use]
    pub const fn new() -> Self {
        CompactConfig {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            resize_factor: DEFAULT_RESIZE_FACTOR,
        }
    }

    /// Sets the initial state capacity.
    #[must_use]
    pub const fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    /// Sets the capacity growth factor.
    #[must_use]
    pub const fn with_resize_factor(mut self, resize_factor: f32) -> Self {
        self.resize_factor = resize_factor;
        self
    }

    /// Checks that this configuration can drive a working automaton.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`](crate::Error::InvalidConfig) if the resize factor is
    /// not finite or below `1.0`.
    pub fn validate(&self) -> Result<()> {
        if !self.resize_factor.is_finite() {
            return Err(config_error!(
                "resize factor must be finite, got {}",
                self.resize_factor
            ));
        }
        if self.resize_factor < 1.0 {
            return Err(config_error!(
                "resize factor must be at least 1.0, got {}",
                self.resize_factor
            ));
        }
        Ok(())
    }

    /// Returns the capacity to grow to when `required` states must fit into `current`.
    pub(crate) fn grown_capacity(&self, current: usize, required: usize) -> usize {
        // Truncation is intended; the max() below covers small capacities.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
        let scaled = (current as f64 * f64::from(self.resize_factor)) as usize;
        scaled.max(required)
    }
}
