//! Append-only input alphabets with dense symbol indices.
//!
//! Automata address transitions by symbol *index*, never by symbol value, so the mapping between
//! the two has to be stable for as long as any transition table refers to it. [`Alphabet`]
//! guarantees that: symbols can only be appended, and an index, once handed out, always maps to
//! the same symbol.
//!
//! Lookups in both directions are O(1): index to symbol is a vector access, symbol to index a
//! hash lookup.

use std::hash::Hash;

use indexmap::IndexSet;

/// An ordered, append-only set of input symbols.
///
/// The index of a symbol is its insertion position. Appending a symbol that is already present
/// changes nothing and reports the existing index.
///
/// # Examples
///
/// ```rust
/// use compact_automata::Alphabet;
///
/// let mut sigma = Alphabet::from_symbols(["a", "b"]);
/// assert_eq!(sigma.symbol_index(&"b"), Some(1));
///
/// assert_eq!(sigma.append("c"), 2);
/// assert_eq!(sigma.append("a"), 0);
/// assert_eq!(sigma.len(), 3);
/// assert_eq!(sigma.symbol(2), Some(&"c"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet<I: Hash + Eq> {
    symbols: IndexSet<I>,
}

impl<I: Hash + Eq> Default for Alphabet<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Hash + Eq> Alphabet<I> {
    /// Creates an empty alphabet.
    #[must_use]
    pub fn new() -> Self {
        Alphabet {
            symbols: IndexSet::new(),
        }
    }

    /// Creates an alphabet from symbols in order; repeated symbols keep their first index.
    pub fn from_symbols<T: IntoIterator<Item = I>>(symbols: T) -> Self {
        symbols.into_iter().collect()
    }

    /// Appends `symbol` unless already present, returning its index either way.
    pub fn append(&mut self, symbol: I) -> usize {
        self.symbols.insert_full(symbol).0
    }

    /// Returns the index of `symbol`, if it belongs to the alphabet.
    #[must_use]
    #[inline]
    pub fn symbol_index(&self, symbol: &I) -> Option<usize> {
        self.symbols.get_index_of(symbol)
    }

    /// Returns the symbol at `index`.
    #[must_use]
    #[inline]
    pub fn symbol(&self, index: usize) -> Option<&I> {
        self.symbols.get_index(index)
    }

    /// Returns `true` if `symbol` belongs to the alphabet.
    #[must_use]
    pub fn contains(&self, symbol: &I) -> bool {
        self.symbols.contains(symbol)
    }

    /// Returns the number of symbols.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns `true` if the alphabet has no symbols.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Iterates over the symbols in index order.
    pub fn iter(&self) -> impl Iterator<Item = &I> + '_ {
        self.symbols.iter()
    }
}

impl<I: Hash + Eq> FromIterator<I> for Alphabet<I> {
    fn from_iter<T: IntoIterator<Item = I>>(iter: T) -> Self {
        Alphabet {
            symbols: iter.into_iter().collect(),
        }
    }
}

impl<'a, I: Hash + Eq> IntoIterator for &'a Alphabet<I> {
    type Item = &'a I;
    type IntoIter = indexmap::set::Iter<'a, I>;

    fn into_iter(self) -> Self::IntoIter {
        self.symbols.iter()
    }
}
