//! Basic low-level byte parser functionality.
//!
//! Shared by the [definitions](crate::definitions) loader and the
//! [translation input](crate::codec::input) reader.

pub mod byte_parser;
pub mod byte_source;
pub(crate) mod in_memory_byte_source;
pub mod parsing_error;

pub use byte_parser::ByteParser;
pub use parsing_error::{ParsingError, ParsingErrorType};
