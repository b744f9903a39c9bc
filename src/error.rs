use thiserror::Error;

macro_rules! config_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::InvalidConfig {
            message: $msg.to_string(),
            file: file!(),
            line: line!(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::InvalidConfig {
            message: format!($fmt, $($arg)*),
            file: file!(),
            line: line!(),
        }
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Every variant describes a programmer error: an argument that does not refer to anything the
/// automaton knows about, or a configuration that can never produce a working automaton. None of
/// them are transient, so retrying the same call will fail the same way.
///
/// All storage operations validate their arguments before touching internal arrays, so an `Err`
/// always leaves the automaton exactly as it was before the call.
///
/// # Error Categories
///
/// ## Argument Errors
/// - [`Error::InvalidState`] - State id outside `[0, size)`
/// - [`Error::InvalidSymbolIndex`] - Symbol index outside `[0, alphabet_size)`
/// - [`Error::UnknownSymbol`] - Symbol value not contained in the alphabet
///
/// ## Configuration Errors
/// - [`Error::InvalidConfig`] - Rejected [`CompactConfig`](crate::CompactConfig)
///
/// # Examples
///
/// ```rust
/// use compact_automata::{Alphabet, CompactNfa, Error};
///
/// let mut nfa: CompactNfa<char> = CompactNfa::new(Alphabet::from_symbols(['a', 'b']));
/// let q0 = nfa.add_state(None);
///
/// match nfa.add_transition(q0, 0, 7.into()) {
///     Err(Error::InvalidState { state, size }) => {
///         assert_eq!(state, 7);
///         assert_eq!(size, 1);
///     }
///     other => panic!("unexpected result: {other:?}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A state id does not refer to a live state.
    ///
    /// State ids are dense and valid in `[0, size)`. Ids beyond the current state count are
    /// rejected even when they fall within the allocated capacity.
    #[error("State {state} is out of range for an automaton with {size} states")]
    InvalidState {
        /// The offending state id
        state: usize,
        /// The number of live states at the time of the call
        size: usize,
    },

    /// A symbol index is outside the alphabet.
    #[error("Symbol index {index} is out of range for an alphabet of size {size}")]
    InvalidSymbolIndex {
        /// The offending symbol index
        index: usize,
        /// The alphabet size at the time of the call
        size: usize,
    },

    /// A symbol value is not part of the automaton's alphabet.
    ///
    /// Use [`CompactNfa::add_alphabet_symbol`](crate::CompactNfa::add_alphabet_symbol) to grow
    /// the alphabet first.
    #[error("Symbol is not part of the input alphabet")]
    UnknownSymbol,

    /// The automaton configuration was rejected.
    ///
    /// # Fields
    ///
    /// * `message` - What was wrong with the configuration
    /// * `file` - Source file where the error was detected
    /// * `line` - Source line where the error was detected
    #[error("Invalid configuration - {file}:{line}: {message}")]
    InvalidConfig {
        /// The message to be printed for the InvalidConfig error
        message: String,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_macro_plain() {
        let err = config_error!("bad factor");
        match err {
            Error::InvalidConfig { message, file, .. } => {
                assert_eq!(message, "bad factor");
                assert!(file.ends_with("error.rs"));
            }
            other => panic!("unexpected variant {other:?}"),
        }
    }

    #[test]
    fn test_config_error_macro_format() {
        let err = config_error!("factor {} below {}", 0.5, 1.0);
        assert!(matches!(
            err,
            Error::InvalidConfig { ref message, .. } if message == "factor 0.5 below 1"
        ));
    }

    #[test]
    fn test_display_invalid_state() {
        let err = Error::InvalidState { state: 4, size: 2 };
        assert_eq!(
            err.to_string(),
            "State 4 is out of range for an automaton with 2 states"
        );
    }
}
