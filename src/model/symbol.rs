//! A character together with its encoding.

use std::fmt;

/// An assigned `(character, encoding)` pair, as read from a definitions file
/// or collected from a [SymbolTree](crate::model::SymbolTree).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol {
    character: char,
    encoding: String,
}

impl Symbol {
    /// Creates a new symbol. The encoding is not validated here, that
    /// happens on [insert](crate::model::SymbolTree::insert).
    pub fn new<S: Into<String>>(character: char, encoding: S) -> Self {
        Symbol {
            character,
            encoding: encoding.into(),
        }
    }

    /// Returns the character.
    pub fn character(&self) -> char {
        self.character
    }

    /// Returns the encoding.
    pub fn encoding(&self) -> &str {
        &self.encoding
    }

    /// Splits into character and encoding.
    pub fn into_parts(self) -> (char, String) {
        (self.character, self.encoding)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} -> {}", self.character, self.encoding)
    }
}

impl From<(char, &str)> for Symbol {
    fn from((character, encoding): (char, &str)) -> Self {
        Symbol::new(character, encoding)
    }
}
