//! Step tokens and encoding validation.
//!
//! An encoding is a non-empty sequence of [Step]s written as `L` and `R`,
//! describing the descent from the root of a
//! [SymbolTree](crate::model::SymbolTree) to a node.

use std::error::Error;
use std::fmt;

/// Token for a descent to the left child.
pub const LEFT_TOKEN: u8 = b'L';
/// Token for a descent to the right child.
pub const RIGHT_TOKEN: u8 = b'R';

// =#========================================================================#=
// STEP
// =#========================================================================#=
/// A single descent step in a [SymbolTree](crate::model::SymbolTree).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    /// Descend to the left child (`L`)
    Left,
    /// Descend to the right child (`R`)
    Right,
}

impl Step {
    /// Converts a token byte into a [Step], or `None` if it is neither `L` nor `R`.
    #[inline]
    pub fn from_byte(token: u8) -> Option<Step> {
        match token {
            LEFT_TOKEN => Some(Step::Left),
            RIGHT_TOKEN => Some(Step::Right),
            _ => None,
        }
    }

    /// Returns the token byte of this step.
    #[inline]
    pub fn as_byte(self) -> u8 {
        match self {
            Step::Left => LEFT_TOKEN,
            Step::Right => RIGHT_TOKEN,
        }
    }

    /// Returns the token character of this step.
    pub fn as_char(self) -> char {
        self.as_byte() as char
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Iterates the steps of `path`, yielding `None` for every token that is not `L` or `R`.
pub fn steps(path: &str) -> impl Iterator<Item = Option<Step>> + '_ {
    path.bytes().map(Step::from_byte)
}

/// Checks that `encoding` is non-empty and consists of `L`/`R` tokens only.
///
/// # Errors
/// * [EncodingErrorType::Empty] - for the empty string
/// * [EncodingErrorType::InvalidToken] - for the first token outside `L`/`R`,
///   together with its (char) position
///
/// # Examples
/// ```
/// use braille_tree::model::step::{validate_encoding, EncodingErrorType};
///
/// assert!(validate_encoding("LRRLRL").is_ok());
/// assert_eq!(validate_encoding("").unwrap_err().kind(), &EncodingErrorType::Empty);
/// assert_eq!(validate_encoding("LRX").unwrap_err().position(), 2);
/// ```
pub fn validate_encoding(encoding: &str) -> Result<(), EncodingError> {
    if encoding.is_empty() {
        return Err(EncodingError::new(EncodingErrorType::Empty, encoding, 0));
    }

    match encoding
        .chars()
        .enumerate()
        .find(|&(_, c)| !c.is_ascii() || Step::from_byte(c as u8).is_none())
    {
        Some((position, token)) => Err(EncodingError::new(
            EncodingErrorType::InvalidToken(token),
            encoding,
            position,
        )),
        None => Ok(()),
    }
}

// =#========================================================================#=
// ENCODING ERROR
// =#========================================================================#=
/// Ways in which an encoding can be malformed.
#[derive(PartialEq, Debug, Clone)]
pub enum EncodingErrorType {
    /// Encoding has no tokens at all
    Empty,
    /// Encoding contains a token other than `L` or `R`
    InvalidToken(char),
}

/// Malformed encoding handed to [SymbolTree::insert](crate::model::SymbolTree::insert).
#[derive(Debug, Clone, PartialEq)]
pub struct EncodingError {
    kind: EncodingErrorType,
    encoding: String,
    position: usize,
}

impl EncodingError {
    fn new(kind: EncodingErrorType, encoding: &str, position: usize) -> Self {
        Self {
            kind,
            encoding: encoding.to_string(),
            position,
        }
    }

    /// Get the error kind
    pub fn kind(&self) -> &EncodingErrorType {
        &self.kind
    }

    /// Get the rejected encoding
    pub fn encoding(&self) -> &str {
        &self.encoding
    }

    /// Get the (char) position of the offending token
    pub fn position(&self) -> usize {
        self.position
    }
}

impl fmt::Display for EncodingError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.kind {
            EncodingErrorType::Empty => write!(f, "Invalid encoding - empty"),
            EncodingErrorType::InvalidToken(token) => write!(
                f,
                "Invalid encoding \"{}\" - unexpected token '{}' at position {} (expected 'L' or 'R')",
                self.encoding, token, self.position
            ),
        }
    }
}

impl Error for EncodingError {}
