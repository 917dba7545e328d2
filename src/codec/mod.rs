//! Bulk translation between token strings and text.
//!
//! [Codec] splits a flat `L`/`R` token string into fixed-width cells and
//! resolves each cell in a [SymbolTree] ([decode](Codec::decode)), or
//! concatenates the encodings of the characters of a text
//! ([encode](Codec::encode)).
//!
//! The cell width defaults to [DEFAULT_CELL_WIDTH] (six dots of a Braille
//! cell) and can be configured with [CodecBuilder].

pub mod input;

pub use input::{read_tokens_file, read_tokens_str};

use crate::model::SymbolTree;
use std::error::Error;
use std::fmt;

/// Number of tokens per Braille cell.
pub const DEFAULT_CELL_WIDTH: usize = 6;

// =#========================================================================#=
// CODEC
// =#========================================================================#=
/// Translates between flat token strings and text using a [SymbolTree].
///
/// # Example
/// ```
/// use braille_tree::codec::Codec;
/// use braille_tree::definitions::parse_str;
///
/// let tree = parse_str("2\nh LRRLLL\ni RLLLLL\n")?;
/// let codec = Codec::new();
///
/// assert_eq!(codec.decode(&tree, "LRRLLLRLLLLL"), "hi");
/// assert_eq!(codec.encode(&tree, "hi"), "LRRLLLRLLLLL");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Codec {
    cell_width: usize,
}

impl Default for Codec {
    fn default() -> Self {
        Codec {
            cell_width: DEFAULT_CELL_WIDTH,
        }
    }
}

impl Codec {
    /// Creates a codec with [DEFAULT_CELL_WIDTH].
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a builder to configure a codec.
    pub fn builder() -> CodecBuilder {
        CodecBuilder::new()
    }

    /// Returns the number of tokens per cell.
    pub fn cell_width(&self) -> usize {
        self.cell_width
    }

    /// Translates a flat token string into text.
    ///
    /// The tokens are split into consecutive cells of [cell_width](Self::cell_width)
    /// tokens; a trailing incomplete cell is dropped. Each cell is looked up in
    /// `tree`, and contributes its character if it leads to an assigned node.
    /// Cells leading nowhere, or to a node without a character, contribute
    /// nothing.
    pub fn decode(&self, tree: &SymbolTree, tokens: &str) -> String {
        tokens
            .as_bytes()
            .chunks_exact(self.cell_width)
            .filter_map(|cell| std::str::from_utf8(cell).ok())
            .filter_map(|cell| tree.lookup(cell))
            .filter_map(|node| node.character())
            .collect()
    }

    /// Translates text into a flat token string by concatenating the encoding
    /// of each character. Characters without an encoding contribute nothing.
    pub fn encode(&self, tree: &SymbolTree, text: &str) -> String {
        let mut tokens = String::with_capacity(text.len() * self.cell_width);
        for character in text.chars() {
            if let Some(encoding) = tree.find_encoding(character) {
                tokens.push_str(&encoding);
            }
        }
        tokens
    }
}

// =#========================================================================#=
// CODEC BUILDER
// =#========================================================================#=
/// Builder for configuring a [Codec].
///
/// # Example
/// ```
/// use braille_tree::codec::Codec;
///
/// let codec = Codec::builder().with_cell_width(3).build()?;
/// assert_eq!(codec.cell_width(), 3);
///
/// assert!(Codec::builder().with_cell_width(0).build().is_err());
/// # Ok::<(), braille_tree::codec::CodecError>(())
/// ```
#[derive(Debug, Clone)]
pub struct CodecBuilder {
    cell_width: usize,
}

impl Default for CodecBuilder {
    fn default() -> Self {
        CodecBuilder {
            cell_width: DEFAULT_CELL_WIDTH,
        }
    }
}

impl CodecBuilder {
    /// Creates a builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the number of tokens per cell.
    pub fn with_cell_width(mut self, cell_width: usize) -> Self {
        self.cell_width = cell_width;
        self
    }

    /// Builds the configured [Codec].
    ///
    /// # Errors
    /// Returns [CodecError::ZeroCellWidth] if the cell width is 0.
    pub fn build(self) -> Result<Codec, CodecError> {
        if self.cell_width == 0 {
            return Err(CodecError::ZeroCellWidth);
        }
        Ok(Codec {
            cell_width: self.cell_width,
        })
    }
}

// =#========================================================================#=
// CODEC ERROR
// =#========================================================================#=
/// Invalid [Codec] configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum CodecError {
    /// Cells must have at least one token
    ZeroCellWidth,
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CodecError::ZeroCellWidth => write!(f, "Cell width must be at least 1"),
        }
    }
}

impl Error for CodecError {}
