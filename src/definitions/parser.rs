//! Parser for definitions files.
//!
//! This module provides [DefinitionsParser], which reads the count header and
//! the `<character> <encoding>` lines of a definitions file, and
//! [DefinitionsIterator] to walk the definitions lazily.

use crate::model::step::validate_encoding;
use crate::model::{Symbol, SymbolTree};
use crate::parser::byte_parser::{ByteParser, WHITESPACE};
use crate::parser::byte_source::ByteSource;
use crate::parser::ParsingError;
use tracing::{debug, trace};

// =#========================================================================#=
// DEFINITIONS PARSER
// =#========================================================================#=
/// Parser for definitions files.
///
/// The parser keeps track of how many definitions the header announced and
/// how many have been read so far; the bytes themselves are provided by a
/// [ByteParser] passed into each call.
///
/// # Example
/// ```
/// use braille_tree::definitions::DefinitionsParser;
/// use braille_tree::parser::ByteParser;
///
/// let mut byte_parser = ByteParser::for_str("2\na LRLLLL\nb LRRLLL\n");
/// let tree = DefinitionsParser::new().build_tree(&mut byte_parser)?;
/// assert_eq!(tree.len(), 2);
/// # Ok::<(), braille_tree::parser::ParsingError>(())
/// ```
#[derive(Debug, Default)]
pub struct DefinitionsParser {
    /// Number of definitions announced by the header, once read
    num_definitions: Option<usize>,
    /// Number of definitions read so far
    num_read: usize,
}

impl DefinitionsParser {
    /// Creates a new parser that has not read a header yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of definitions announced by the header, if read.
    pub fn num_definitions(&self) -> Option<usize> {
        self.num_definitions
    }

    /// Returns the number of definitions still to be read.
    pub fn num_remaining(&self) -> usize {
        self.num_definitions.unwrap_or(0).saturating_sub(self.num_read)
    }

    /// Parses the count header, i.e. the first line of the file.
    ///
    /// Surrounding whitespace and blank lines before the count are skipped.
    /// Anything else on the count line is ignored.
    ///
    /// # Errors
    /// Returns an error if the file is empty or the count is not a number.
    pub fn parse_header<S: ByteSource>(
        &mut self,
        parser: &mut ByteParser<S>,
    ) -> Result<usize, ParsingError> {
        parser.skip_whitespace();
        if parser.is_eof() {
            return Err(ParsingError::unexpected_eof(parser));
        }

        let count = parser.parse_unsigned()?;
        parser.skip_line();

        debug!(count, "Definitions header read");
        self.num_definitions = Some(count);
        self.num_read = 0;
        Ok(count)
    }

    /// Parses a single definition line: a character, whitespace, and its encoding.
    ///
    /// The character is the first character on the line, so a space can be
    /// defined as well (`"  LLLLLL"`). The rest of the line after the encoding
    /// is ignored.
    ///
    /// # Errors
    /// * Unexpected EOF if there is no line left
    /// * Invalid definition if the character or the encoding is missing
    /// * Invalid encoding if the encoding has tokens other than `L`/`R`
    pub fn next_symbol<S: ByteSource>(
        &mut self,
        parser: &mut ByteParser<S>,
    ) -> Result<Symbol, ParsingError> {
        let character = match parser.next_char()? {
            None => return Err(ParsingError::unexpected_eof(parser)),
            Some('\n' | '\r') => {
                return Err(ParsingError::invalid_definition(
                    parser,
                    "blank line instead of definition".to_string(),
                ));
            }
            Some(c) => c,
        };

        parser.skip_horizontal_whitespace();
        let encoding = parser.parse_token(WHITESPACE)?;
        if encoding.is_empty() {
            return Err(ParsingError::invalid_definition(
                parser,
                format!("missing encoding for '{character}'"),
            ));
        }
        if let Err(err) = validate_encoding(&encoding) {
            return Err(ParsingError::invalid_encoding(parser, err));
        }
        parser.skip_line();

        trace!(%character, %encoding, "Definition read");
        self.num_read += 1;
        Ok(Symbol::new(character, encoding))
    }

    /// Parses the header and then all announced definitions.
    ///
    /// Content after the last announced definition is ignored. The header
    /// count is not trusted for preallocation.
    pub fn parse_all<S: ByteSource>(
        &mut self,
        parser: &mut ByteParser<S>,
    ) -> Result<Vec<Symbol>, ParsingError> {
        let count = self.parse_header(parser)?;
        let mut symbols = Vec::new();
        for _ in 0..count {
            symbols.push(self.next_symbol(parser)?);
        }
        Ok(symbols)
    }

    /// Parses the header and inserts every definition, in file order,
    /// into a new [SymbolTree].
    ///
    /// Later definitions overwrite earlier ones with the same encoding.
    pub fn build_tree<S: ByteSource>(
        &mut self,
        parser: &mut ByteParser<S>,
    ) -> Result<SymbolTree, ParsingError> {
        let count = self.parse_header(parser)?;
        let mut tree = SymbolTree::new();
        for _ in 0..count {
            let symbol = self.next_symbol(parser)?;
            tree.insert(symbol.character(), symbol.encoding())?;
        }

        debug!(num_symbols = tree.len(), num_nodes = tree.num_nodes(), "Symbol tree built");
        Ok(tree)
    }

    /// Reads the header and returns an iterator over the announced definitions.
    ///
    /// # Errors
    /// Returns an error if the header cannot be parsed.
    pub fn into_iter<S: ByteSource>(
        mut self,
        mut parser: ByteParser<S>,
    ) -> Result<DefinitionsIterator<S>, ParsingError> {
        self.parse_header(&mut parser)?;
        Ok(DefinitionsIterator {
            definitions_parser: self,
            byte_parser: parser,
        })
    }
}

// =#========================================================================#=
// DEFINITIONS ITERATOR
// =#========================================================================#=
/// Iterator over the definitions of a file, parsing one line per call.
///
/// Stops after the announced number of definitions or after the first error.
pub struct DefinitionsIterator<S: ByteSource> {
    definitions_parser: DefinitionsParser,
    byte_parser: ByteParser<S>,
}

impl<S: ByteSource> Iterator for DefinitionsIterator<S> {
    type Item = Result<Symbol, ParsingError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.definitions_parser.num_remaining() == 0 {
            return None;
        }

        let result = self.definitions_parser.next_symbol(&mut self.byte_parser);
        if result.is_err() {
            // Do not keep reading from a broken position
            self.definitions_parser.num_definitions = Some(self.definitions_parser.num_read);
        }
        Some(result)
    }
}
