//! Low-level byte-by-byte parser for line-based text.
//!
//! This module provides [ByteParser] for parsing the definitions file and
//! translation inputs, with support for peeking, consuming, whitespace
//! skipping, UTF-8 character decoding and error context.

use crate::parser::byte_source::ByteSource;
use crate::parser::in_memory_byte_source::InMemoryByteSource;
use crate::parser::parsing_error::ParsingError;
use std::path::Path;

/// Bytes terminating a whitespace-delimited token.
pub const WHITESPACE: &[u8] = b" \t\r\n";

// =#========================================================================#=
// BYTE PARSER
// =#========================================================================#=
/// A byte-by-byte parser with support for peeking, consuming, and token reading.
///
/// # Example
/// ```
/// use braille_tree::parser::byte_parser::{ByteParser, WHITESPACE};
///
/// let mut parser = ByteParser::for_str("  42\nA LLLLLR\n");
/// parser.skip_whitespace();
/// assert_eq!(parser.parse_unsigned().unwrap(), 42);
/// parser.skip_whitespace();
/// assert_eq!(parser.next_char().unwrap(), Some('A'));
/// parser.skip_horizontal_whitespace();
/// assert_eq!(parser.parse_token(WHITESPACE).unwrap(), "LLLLLR");
/// ```
pub struct ByteParser<S: ByteSource> {
    source: S,
}

impl ByteParser<InMemoryByteSource> {
    /// Creates a new `ByteParser` from a string slice by copying it.
    pub fn for_str(input: &str) -> Self {
        Self::new(InMemoryByteSource::from_vec(input.as_bytes().to_vec()))
    }

    /// Creates a new `ByteParser` over the contents of a file.
    ///
    /// # Errors
    /// Returns an I/O error if the file cannot be read.
    pub fn from_file<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        Ok(Self::new(InMemoryByteSource::from_file(path)?))
    }
}

impl<S: ByteSource> ByteParser<S> {
    /// Creates a new `ByteParser` from a byte source.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Peeks at the current byte without consuming it.
    #[inline(always)]
    pub fn peek(&self) -> Option<u8> {
        self.source.peek()
    }

    /// Gets the current byte and advances the position (consumes it).
    #[inline(always)]
    pub fn next_byte(&mut self) -> Option<u8> {
        self.source.next_byte()
    }

    /// Skips (consumes) all consecutive whitespace characters,
    /// including line breaks.
    pub fn skip_whitespace(&mut self) {
        while let Some(b) = self.peek() {
            if WHITESPACE.contains(&b) {
                self.next_byte();
            } else {
                break;
            }
        }
    }

    /// Skips (consumes) spaces and tabs, stopping at line breaks.
    pub fn skip_horizontal_whitespace(&mut self) {
        while let Some(b' ' | b'\t') = self.peek() {
            self.next_byte();
        }
    }

    /// Consumes bytes up to and including the target byte.
    ///
    /// # Returns
    /// `true` if the target was found, `false` if EOF was reached first
    pub fn consume_until(&mut self, target: u8) -> bool {
        while let Some(b) = self.next_byte() {
            if b == target {
                return true;
            }
        }
        false // reached EOF without finding target
    }

    /// Consumes the remainder of the current line, including the line break.
    pub fn skip_line(&mut self) {
        self.consume_until(b'\n');
    }

    /// Decodes and consumes the next UTF-8 encoded character.
    ///
    /// # Returns
    /// * `Ok(Some(char))` - The next character
    /// * `Ok(None)` - If at end of data (EOF)
    ///
    /// # Errors
    /// Returns an error if the bytes at the current position are not valid UTF-8.
    pub fn next_char(&mut self) -> Result<Option<char>, ParsingError> {
        let Some(first) = self.peek() else {
            return Ok(None);
        };

        let width = match first {
            0x00..=0x7F => 1,
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => return Err(ParsingError::invalid_utf8(self)),
        };

        let decoded = std::str::from_utf8(self.source.peek_slice(width))
            .ok()
            .and_then(|s| s.chars().next());

        match decoded {
            Some(c) => {
                for _ in 0..width {
                    self.next_byte();
                }
                Ok(Some(c))
            }
            None => Err(ParsingError::invalid_utf8(self)),
        }
    }

    /// Parses a decimal unsigned integer at the current position.
    ///
    /// # Errors
    /// Returns an error if no digit is found or the number overflows.
    pub fn parse_unsigned(&mut self) -> Result<usize, ParsingError> {
        let mut digits = String::new();
        while let Some(b) = self.peek() {
            if !b.is_ascii_digit() {
                break;
            }
            digits.push(b as char);
            self.next_byte();
        }

        if digits.is_empty() {
            return Err(ParsingError::invalid_count(
                self,
                "expected number of definitions".to_string(),
            ));
        }

        digits
            .parse()
            .map_err(|_| ParsingError::invalid_count(self, format!("{digits} is too large")))
    }

    /// Parses a token until any of the given delimiters (or EOF) is encountered.
    ///
    /// # Errors
    /// Returns an error if the token is not valid UTF-8.
    pub fn parse_token(&mut self, delimiters: &[u8]) -> Result<String, ParsingError> {
        let mut token = Vec::new();
        while let Some(b) = self.peek() {
            if delimiters.contains(&b) {
                break;
            }
            token.push(b);
            self.next_byte();
        }

        String::from_utf8(token).map_err(|_| ParsingError::invalid_utf8(self))
    }

    /// Returns whether the end of data (EOF) has been reached.
    pub fn is_eof(&self) -> bool {
        self.source.is_eof()
    }

    /// Returns the current parser position (byte offset) in the input.
    pub fn position(&self) -> usize {
        self.source.position()
    }

    /// Returns a string from up to `k` bytes from the current position for error context.
    ///
    /// Invalid UTF-8 sequences are replaced with the Unicode replacement character.
    pub fn get_context_as_string(&self, k: usize) -> String {
        String::from_utf8_lossy(&self.source.get_context(k)).into_owned()
    }
}
