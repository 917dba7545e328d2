//! Human-readable rendering of a [SymbolTree].
//!
//! The tree is drawn sideways: the root on the first line, then for every
//! node its right subtree above its left subtree, each level indented further.
//! A node shows `character -> encoding` if it carries a character, and its
//! path otherwise (`""` for the root). Missing children of a node with at
//! least one child show as `null`. The root line carries no trailing space
//! after `""`; the output is meant for inspection, not for parsing back.
//!
//! ```text
//! +--- ""
//!      |+R- R
//!      --L- L
//!           |+R- null
//!           --L- LL
//!                |+R- B -> LLR
//!                --L- A -> LLL
//! ```

use crate::model::{NodeIndex, SymbolTree};
use std::io::{self, Write};

const ROOT_CONNECTOR: &str = "+--- ";
const RIGHT_CONNECTOR: &str = "|+R- ";
const LEFT_CONNECTOR: &str = "--L- ";
const RIGHT_INDENT: &str = "|    ";
const LEFT_INDENT: &str = "     ";

#[derive(Debug, Clone, Copy, PartialEq)]
enum Position {
    Root,
    Left,
    Right,
}

/// Renders `tree` as an indented multi-line string, one node per line.
///
/// # Example
/// ```
/// use braille_tree::model::SymbolTree;
/// use braille_tree::pretty::render;
///
/// assert_eq!(render(&SymbolTree::new()), "+--- null\n");
///
/// let mut tree = SymbolTree::new();
/// tree.insert('x', "R")?;
/// assert_eq!(render(&tree), "+--- \"\"\n     |+R- x -> R\n     --L- L\n");
/// # Ok::<(), braille_tree::model::EncodingError>(())
/// ```
pub fn render(tree: &SymbolTree) -> String {
    // Recursive helper, right subtree before left subtree
    fn render_node(
        tree: &SymbolTree,
        index: Option<NodeIndex>,
        indent: &str,
        position: Position,
        out: &mut String,
    ) {
        out.push_str(indent);
        out.push_str(match position {
            Position::Root => ROOT_CONNECTOR,
            Position::Right => RIGHT_CONNECTOR,
            Position::Left => LEFT_CONNECTOR,
        });

        let Some(index) = index else {
            out.push_str("null\n");
            return;
        };

        let node = &tree[index];
        match node.character() {
            Some(character) => {
                out.push(character);
                out.push_str(" -> ");
                out.push_str(node.path());
            }
            None if node.path().is_empty() => out.push_str("\"\""),
            None => out.push_str(node.path()),
        }
        out.push('\n');

        if node.is_childless() {
            return;
        }

        let mut child_indent = String::with_capacity(indent.len() + RIGHT_INDENT.len());
        child_indent.push_str(indent);
        child_indent.push_str(if position == Position::Right {
            RIGHT_INDENT
        } else {
            LEFT_INDENT
        });

        render_node(tree, node.right(), &child_indent, Position::Right, out);
        render_node(tree, node.left(), &child_indent, Position::Left, out);
    }

    let mut out = String::new();
    render_node(tree, tree.root_index(), "", Position::Root, &mut out);
    out
}

/// Writes the rendering of `tree` (see [render]) to `writer`.
///
/// # Errors
/// Returns an I/O error if writing fails.
pub fn write_tree<W: Write>(mut writer: W, tree: &SymbolTree) -> io::Result<()> {
    writer.write_all(render(tree).as_bytes())?;
    writer.flush()
}
