//! Braille-tree is a library to translate between Braille encodings and
//! characters using a binary symbol tree.
//!
//! An encoding is a sequence of `L` and `R` tokens. Read as directions from
//! the root of a binary tree, it leads to the node holding the character it
//! encodes. Core functionality provided:
//! - Symbol tree: [SymbolTree] with insertion by encoding, path lookup,
//!   character search, prefix enumeration and deletion with pruning of
//!   intermediate nodes that no longer lead anywhere.
//!   See [crate::model] for details.
//! - Codec: [Codec] decodes flat token strings cell by cell (six tokens per
//!   Braille cell by default) and encodes text back into tokens.
//! - Definitions: read the symbol table from a definitions file
//!   (count line, then `<character> <encoding>` lines) and write it back.
//!   See [crate::definitions].
//! - Pretty printing: indented rendering of a tree for inspection.
//!   See [crate::pretty].
//!
//! # Usage patterns
//! ## Quick API
//! ```no_run
//! use braille_tree::{load_definitions_file, translate_braille_file};
//!
//! let tree = load_definitions_file("braille.txt")?;
//! let text = translate_braille_file(&tree, "message.txt")?;
//! println!("{text}");
//! # Ok::<(), braille_tree::parser::ParsingError>(())
//! ```
//!
//! ## Working with the tree
//! ```
//! use braille_tree::{Codec, load_definitions_str};
//!
//! let mut tree = load_definitions_str("3\na LRLLLL\nb LRLRLL\nc LLLRLL\n")?;
//! assert_eq!(tree.find_encoding('b').as_deref(), Some("LRLRLL"));
//! assert_eq!(tree.collect_by_prefix("LR").map(|symbols| symbols.len()), Some(2));
//!
//! let codec = Codec::new();
//! assert_eq!(codec.decode(&tree, "LRLLLLLLLRLL"), "ac");
//!
//! tree.delete('a');
//! assert_eq!(codec.decode(&tree, "LRLLLLLLLRLL"), "c");
//! # Ok::<(), braille_tree::parser::ParsingError>(())
//! ```

pub mod codec;
pub mod definitions;
pub mod model;
pub mod parser;
pub mod pretty;

pub use crate::codec::Codec;
pub use crate::model::{Symbol, SymbolTree};

use crate::parser::parsing_error::ParsingError;
use std::path::Path;

// ============================================================================
// Quick Definitions API
// ============================================================================
/// Parses a definitions file using default settings, returning the [SymbolTree].
///
/// See [`definitions::parse_file`] for full documentation.
pub fn load_definitions_file<P: AsRef<Path>>(path: P) -> Result<SymbolTree, ParsingError> {
    definitions::parse_file(path)
}

/// Parses definitions from a string, returning the [SymbolTree].
///
/// See [`definitions::parse_str`] for full documentation.
pub fn load_definitions_str<S: AsRef<str>>(definitions: S) -> Result<SymbolTree, ParsingError> {
    definitions::parse_str(definitions)
}

// ============================================================================
// Quick Translation API
// ============================================================================
/// Reads the token string from a translation input file and decodes it with
/// a default [Codec].
///
/// See [`codec::read_tokens_file`] and [`Codec::decode`].
pub fn translate_braille_file<P: AsRef<Path>>(
    tree: &SymbolTree,
    path: P,
) -> Result<String, ParsingError> {
    let tokens = codec::read_tokens_file(path)?;
    Ok(Codec::new().decode(tree, &tokens))
}
