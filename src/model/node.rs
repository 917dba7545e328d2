//! Node module for the symbol tree representation.

use crate::model::step::Step;
use crate::model::symbol_tree::NodeIndex;

// =#========================================================================#=
// NODE
// =#========================================================================#=
/// Represents a node in a [SymbolTree](crate::model::SymbolTree).
///
/// A node is either:
/// - **Root**: empty path, no parent, never carries a character
/// - **Scaffold**: intermediate node on the way to assigned encodings,
///   no character
/// - **Symbol**: carries the character assigned to its path; may still
///   have children if longer encodings run through it
///
/// # Invariants
/// - `index` is index in arena
/// - `path` of a non-root node equals the parent's path plus one trailing `L`/`R`
/// - `parent` is `None` only for the root
#[derive(PartialEq, Debug, Clone)]
pub struct Node {
    /// Index of this node in the tree arena
    index: NodeIndex,
    /// Index of the parent node, `None` for the root
    parent: Option<NodeIndex>,
    /// Encoding path from the root to this node
    path: String,
    /// Character assigned to this path, if any
    character: Option<char>,
    /// Left child (`L`)
    left: Option<NodeIndex>,
    /// Right child (`R`)
    right: Option<NodeIndex>,
}

impl Node {
    /// Creates a new root node with an empty path.
    pub(crate) fn new_root(index: NodeIndex) -> Self {
        Node {
            index,
            parent: None,
            path: String::new(),
            character: None,
            left: None,
            right: None,
        }
    }

    /// Creates a new node below `parent`.
    ///
    /// # Arguments
    /// * `index` - The unique index of this node in the tree (arena)
    /// * `parent` - Index of the parent node
    /// * `path` - Full encoding path of this node
    /// * `character` - Character assigned to `path`, `None` for scaffolding
    pub(crate) fn new_child(
        index: NodeIndex,
        parent: NodeIndex,
        path: String,
        character: Option<char>,
    ) -> Self {
        Node {
            index,
            parent: Some(parent),
            path,
            character,
            left: None,
            right: None,
        }
    }

    /// Returns the index of this node.
    pub fn index(&self) -> NodeIndex {
        self.index
    }

    /// Returns the index of the parent, or `None` for the root.
    pub fn parent(&self) -> Option<NodeIndex> {
        self.parent
    }

    /// Returns the encoding path of this node (empty for the root).
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the assigned character, if any.
    pub fn character(&self) -> Option<char> {
        self.character
    }

    /// Returns `true` if a character is assigned to this node.
    pub fn has_character(&self) -> bool {
        self.character.is_some()
    }

    /// Returns `true` if this node is the root.
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Returns the index of the left child, if present.
    pub fn left(&self) -> Option<NodeIndex> {
        self.left
    }

    /// Returns the index of the right child, if present.
    pub fn right(&self) -> Option<NodeIndex> {
        self.right
    }

    /// Returns the child reached by `step`, if present.
    #[inline]
    pub fn child(&self, step: Step) -> Option<NodeIndex> {
        match step {
            Step::Left => self.left,
            Step::Right => self.right,
        }
    }

    /// Returns `true` if both child slots are empty.
    pub fn is_childless(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Returns the step leading from the parent to this node, `None` for the root.
    pub fn last_step(&self) -> Option<Step> {
        self.path.bytes().last().and_then(Step::from_byte)
    }

    pub(crate) fn set_child(&mut self, step: Step, child: Option<NodeIndex>) {
        match step {
            Step::Left => self.left = child,
            Step::Right => self.right = child,
        }
    }

    pub(crate) fn take_character(&mut self) -> Option<char> {
        self.character.take()
    }
}
