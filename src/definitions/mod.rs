//! Definitions file parser and writer for the symbol tree.
//!
//! This module provides [DefinitionsParser] to read definitions files into a
//! [SymbolTree], and [to_definitions]/[write_definitions_file] to write a tree
//! back out.
//!
//! # Quick API
//! For simple use cases:
//! * [`parse_file`] - parses a definitions file into a [SymbolTree]
//! * [`parse_str`] - parses definitions from a string into a [SymbolTree]
//!
//! # Full API
//! For more control, use a [DefinitionsParser] and provide data via a
//! [ByteParser]:
//! * [`DefinitionsParser::parse_header`] + [`DefinitionsParser::next_symbol`] -
//!   read one definition at a time
//! * [`DefinitionsParser::parse_all`] - read all definitions as [Symbol](crate::model::Symbol)s
//! * [`DefinitionsParser::into_iter`] - obtain an iterator over definitions
//!
//! # Format
//! ```text
//! 3
//! a LRLLLL
//! b LRLRLL
//! c LLLRLL
//! ```
//! * First line: number `N` of definitions
//! * `N` lines: the character (first character of the line, may be a space),
//!   whitespace, then the encoding made of `L` and `R`
//! * Anything after the encoding on a line, and anything after the `N`-th
//!   definition, is ignored

pub mod parser;
pub mod writer;

pub use parser::{DefinitionsIterator, DefinitionsParser};
pub use writer::{to_definitions, write_definitions_file};

use crate::model::SymbolTree;
use crate::parser::ByteParser;
use crate::parser::ParsingError;
use std::path::Path;

// ============================================================================
// QUICK PARSING API (pub)
// ============================================================================
/// Parses a definitions file and builds the [SymbolTree].
///
/// # Arguments
/// * `path` - Path to the file (accepting `&str`, `String`, `Path`, or `PathBuf`)
///
/// # Returns
/// * [SymbolTree] - Tree with all definitions inserted in file order
/// * [ParsingError] - If file reading fails or the file is malformed
///
/// # Example
/// ```no_run
/// use braille_tree::definitions::parse_file;
///
/// let tree = parse_file("braille.txt")?;
/// println!("Loaded {} symbols", tree.len());
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<SymbolTree, ParsingError> {
    let mut byte_parser = ByteParser::from_file(path)?;
    DefinitionsParser::new().build_tree(&mut byte_parser)
}

/// Parses definitions from a string and builds the [SymbolTree].
///
/// # Example
/// ```
/// use braille_tree::definitions::parse_str;
///
/// let tree = parse_str("2\nA LLLLLL\nB LLLLLR\n")?;
/// assert_eq!(tree.find_encoding('B').as_deref(), Some("LLLLLR"));
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn parse_str<S: AsRef<str>>(definitions: S) -> Result<SymbolTree, ParsingError> {
    let mut byte_parser = ByteParser::for_str(definitions.as_ref());
    DefinitionsParser::new().build_tree(&mut byte_parser)
}
