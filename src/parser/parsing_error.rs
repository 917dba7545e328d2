//! Error types for the definitions and translation input parsers.
//!
//! This module provides [ParsingError] and [ParsingErrorType] for representing
//! and reporting errors that occur while reading definitions files.

use crate::model::step::EncodingError;
use crate::parser::byte_parser::ByteParser;
use crate::parser::byte_source::ByteSource;
use std::error::Error;
use std::fmt;

/// Default length of context provided by error from parser
const DEFAULT_CONTEXT_LENGTH: usize = 50;

// =#========================================================================#=
// PARSING ERROR TYPE
// =#========================================================================#=
/// Error types that can occur while parsing definitions.
#[derive(PartialEq, Debug, Clone)]
pub enum ParsingErrorType {
    IoError(String),
    UnexpectedEOF,
    InvalidCount(String),
    InvalidDefinition(String),
    InvalidUtf8,
    InvalidEncoding(EncodingError),
}

// =#========================================================================#=
// PARSING ERROR
// =#========================================================================#=
/// Parsing error with contextual information (position and surrounding bytes).
#[derive(Debug)]
pub struct ParsingError {
    kind: ParsingErrorType,
    position: usize,
    context: String,
}

impl ParsingError {
    /// Create a ParsingError from an error type and parser state
    pub fn from_parser<S: ByteSource>(kind: ParsingErrorType, parser: &ByteParser<S>) -> Self {
        Self {
            kind,
            position: parser.position(),
            context: parser.get_context_as_string(DEFAULT_CONTEXT_LENGTH),
        }
    }

    /// Convenience constructor for UnexpectedEOF
    pub fn unexpected_eof<S: ByteSource>(parser: &ByteParser<S>) -> Self {
        Self::from_parser(ParsingErrorType::UnexpectedEOF, parser)
    }

    /// Convenience constructor for InvalidCount
    pub fn invalid_count<S: ByteSource>(parser: &ByteParser<S>, msg: String) -> Self {
        Self::from_parser(ParsingErrorType::InvalidCount(msg), parser)
    }

    /// Convenience constructor for InvalidDefinition
    pub fn invalid_definition<S: ByteSource>(parser: &ByteParser<S>, msg: String) -> Self {
        Self::from_parser(ParsingErrorType::InvalidDefinition(msg), parser)
    }

    /// Convenience constructor for InvalidUtf8
    pub fn invalid_utf8<S: ByteSource>(parser: &ByteParser<S>) -> Self {
        Self::from_parser(ParsingErrorType::InvalidUtf8, parser)
    }

    /// Convenience constructor for InvalidEncoding
    pub fn invalid_encoding<S: ByteSource>(parser: &ByteParser<S>, err: EncodingError) -> Self {
        Self::from_parser(ParsingErrorType::InvalidEncoding(err), parser)
    }

    /// Create a ParsingError without parser context
    pub fn without_context(kind: ParsingErrorType) -> Self {
        Self { kind, position: 0, context: String::new() }
    }

    /// Get the error kind
    pub fn kind(&self) -> &ParsingErrorType {
        &self.kind
    }

    /// Get the position where the error occurred
    pub fn position(&self) -> usize {
        self.position
    }
}

impl fmt::Display for ParsingError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // Main error message
        match &self.kind {
            ParsingErrorType::IoError(msg) => write!(f, "IO error - {msg}")?,
            ParsingErrorType::UnexpectedEOF => write!(f, "Unexpected end of file")?,
            ParsingErrorType::InvalidCount(msg) => write!(f, "Invalid definitions count - {msg}")?,
            ParsingErrorType::InvalidDefinition(msg) => write!(f, "Invalid definition - {msg}")?,
            ParsingErrorType::InvalidUtf8 => write!(f, "Invalid UTF-8")?,
            ParsingErrorType::InvalidEncoding(err) => write!(f, "{err}")?,
        }

        // Additional position information
        write!(f, " at position {}", self.position)?;

        // Additional context if available
        if !self.context.is_empty() {
            write!(f, "\n  Context (next {} bytes): {}", self.context.len(), self.context)?;
        }

        Ok(())
    }
}

impl Error for ParsingError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.kind {
            ParsingErrorType::InvalidEncoding(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ParsingError {
    fn from(err: std::io::Error) -> Self {
        // No position or parsing context for IO errors
        ParsingError::without_context(ParsingErrorType::IoError(err.to_string()))
    }
}

impl From<EncodingError> for ParsingError {
    fn from(err: EncodingError) -> Self {
        ParsingError::without_context(ParsingErrorType::InvalidEncoding(err))
    }
}
