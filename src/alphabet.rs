use std::collections::HashSet;
use std::fmt;

use crate::error::{Error, Result};

/// An ordered, fixed sequence of distinct symbols to draw characters from.
///
/// The default is the 52 Latin letters, uppercase before lowercase. Custom
/// alphabets must be non-empty and free of duplicates so that a uniform draw
/// over indices stays a uniform draw over symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    /// The 52-letter default: `A`-`Z` followed by `a`-`z`.
    #[must_use]
    pub fn latin() -> Self {
        Self {
            symbols: ('A'..='Z').chain('a'..='z').collect(),
        }
    }

    /// Builds a custom alphabet, preserving symbol order.
    pub fn new(symbols: &str) -> Result<Self> {
        let symbols: Vec<char> = symbols.chars().collect();

        if symbols.is_empty() {
            return Err(Error::EmptyAlphabet);
        }

        let mut seen = HashSet::new();
        for &symbol in &symbols {
            if !seen.insert(symbol) {
                return Err(Error::DuplicateSymbol(symbol));
            }
        }

        Ok(Self { symbols })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The symbol at `index`. Panics if `index >= self.len()`.
    #[must_use]
    pub fn symbol(&self, index: usize) -> char {
        self.symbols[index]
    }

    #[must_use]
    pub fn contains(&self, symbol: char) -> bool {
        self.symbols.contains(&symbol)
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::latin()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.symbols {
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latin_alphabet_has_52_letters() {
        let alphabet = Alphabet::latin();
        assert_eq!(alphabet.len(), 52);
        assert_eq!(alphabet.symbol(0), 'A');
        assert_eq!(alphabet.symbol(25), 'Z');
        assert_eq!(alphabet.symbol(26), 'a');
        assert_eq!(alphabet.symbol(51), 'z');
    }

    #[test]
    fn test_custom_alphabet_preserves_order() {
        let alphabet = Alphabet::new("xyz").expect("valid alphabet");
        assert_eq!(alphabet.to_string(), "xyz");
        assert!(alphabet.contains('y'));
        assert!(!alphabet.contains('a'));
    }

    #[test]
    fn test_empty_alphabet_is_rejected() {
        assert!(matches!(Alphabet::new(""), Err(Error::EmptyAlphabet)));
    }

    #[test]
    fn test_duplicate_symbol_is_rejected() {
        assert!(matches!(
            Alphabet::new("abca"),
            Err(Error::DuplicateSymbol('a'))
        ));
    }
}
