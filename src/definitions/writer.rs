//! Definitions file writing.

use crate::model::SymbolTree;
use std::fs::File;
use std::io::{self, BufWriter, Write};

/// Returns the definitions file representation of `tree`:
/// the number of symbols on the first line, followed by one
/// `<character> <encoding>` line per symbol in pre-order.
///
/// Parsing the result yields a tree with the same symbols.
///
/// # Example
/// ```
/// use braille_tree::definitions::to_definitions;
/// use braille_tree::model::SymbolTree;
///
/// let mut tree = SymbolTree::new();
/// tree.insert('b', "LRRLLL")?;
/// tree.insert('a', "LRLLLL")?;
/// assert_eq!(to_definitions(&tree), "2\na LRLLLL\nb LRRLLL\n");
/// # Ok::<(), braille_tree::model::EncodingError>(())
/// ```
pub fn to_definitions(tree: &SymbolTree) -> String {
    let symbols = tree.symbols();
    let mut definitions = String::with_capacity(8 + symbols.len() * 10);

    definitions.push_str(&symbols.len().to_string());
    definitions.push('\n');
    for symbol in &symbols {
        definitions.push(symbol.character());
        definitions.push(' ');
        definitions.push_str(symbol.encoding());
        definitions.push('\n');
    }

    definitions
}

/// Writes the definitions of `tree` to a file.
///
/// See [to_definitions] for the format.
///
/// # Errors
/// Returns an I/O error if writing fails.
pub fn write_definitions_file(file: File, tree: &SymbolTree) -> io::Result<()> {
    let mut writer = BufWriter::new(file);
    writer.write_all(to_definitions(tree).as_bytes())?;
    writer.flush()
}
