//! Data model for the Braille symbol tree.
//!
//! # Tree representation
//! The symbol table is a [SymbolTree], which uses the arena pattern to store
//! [Node]s referenced by [NodeIndex]. The path from the root to a node,
//! written as a sequence of [Step]s (`L` for left, `R` for right), is the
//! encoding of the character stored in that node.
//!
//! | Type | Role |
//! |------|------|
//! | [SymbolTree] | Owns all nodes, insert/lookup/search/prefix/delete |
//! | [Node] | Path, optional character, left and right child |
//! | [Symbol] | Owned `(character, encoding)` pair |
//! | [Step] | Single `L`/`R` token |
//!
//! # Encodings
//! Encodings handed to [SymbolTree::insert] are validated: they must be
//! non-empty and consist of `L`/`R` only, otherwise an [EncodingError] is
//! returned. Lookups with malformed paths simply find nothing.

pub mod node;
pub mod step;
pub mod symbol;
pub mod symbol_tree;

pub use node::Node;
pub use step::{EncodingError, EncodingErrorType, Step};
pub use symbol::Symbol;
pub use symbol_tree::{NodeIndex, SymbolTree};
