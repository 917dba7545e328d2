//! Reading translation inputs.
//!
//! A translation input holds the token string to decode as its first
//! whitespace-delimited token; anything after it is ignored.

use crate::parser::byte_parser::{ByteParser, WHITESPACE};
use crate::parser::byte_source::ByteSource;
use crate::parser::ParsingError;
use std::path::Path;

/// Reads the token string from a translation input file.
///
/// Returns an empty string for a file with only whitespace.
///
/// # Errors
/// Returns an error if the file cannot be read or is not valid UTF-8.
pub fn read_tokens_file<P: AsRef<Path>>(path: P) -> Result<String, ParsingError> {
    let mut byte_parser = ByteParser::from_file(path)?;
    read_tokens(&mut byte_parser)
}

/// Reads the token string from a translation input given as string.
///
/// # Example
/// ```
/// use braille_tree::codec::read_tokens_str;
///
/// assert_eq!(read_tokens_str("\n  LRLLLLLRRLLL \nignored")?, "LRLLLLLRRLLL");
/// # Ok::<(), braille_tree::parser::ParsingError>(())
/// ```
pub fn read_tokens_str(input: &str) -> Result<String, ParsingError> {
    let mut byte_parser = ByteParser::for_str(input);
    read_tokens(&mut byte_parser)
}

fn read_tokens<S: ByteSource>(parser: &mut ByteParser<S>) -> Result<String, ParsingError> {
    parser.skip_whitespace();
    parser.parse_token(WHITESPACE)
}
