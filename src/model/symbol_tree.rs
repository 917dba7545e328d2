//! Provides the binary symbol tree mapping encodings to characters.
//!
//! * [SymbolTree] - arena-backed binary tree, where the `L`/`R` path to a
//!   node is the encoding of the character stored there
//! * [NodeIndex] - type used to index nodes in the tree

use crate::model::node::Node;
use crate::model::step::{EncodingError, Step, steps, validate_encoding};
use crate::model::symbol::Symbol;
use std::ops::Index;

/// Index of a node in a tree (arena).
pub type NodeIndex = usize;

// =$========================================================================$=
// SYMBOL TREE
// =$========================================================================$=
/// A binary tree of [Node]s in which the path from the root to a node,
/// written as `L`/`R` steps, is the encoding of the character stored there.
///
/// Nodes are stored in an arena and referenced by [NodeIndex]. Slots freed by
/// deletion or by overwriting a subtree are recycled on later insertions.
///
/// # Structure
/// - The tree starts empty. The first insertion creates the root together
///   with characterless children for `L` and `R`.
/// - Intermediate nodes are created lazily by [insert](Self::insert) and
///   carry no character.
/// - Inserting at an occupied path replaces the node there, discarding its
///   former subtree (last insertion wins).
/// - [delete](Self::delete) prunes intermediate nodes that end up without
///   children and without a character. The root is never pruned.
///
/// # Example
/// ```
/// use braille_tree::model::SymbolTree;
///
/// let mut tree = SymbolTree::new();
/// tree.insert('A', "LLL")?;
/// tree.insert('B', "LLR")?;
///
/// assert_eq!(tree.lookup("LLR").and_then(|node| node.character()), Some('B'));
/// assert_eq!(tree.find_encoding('A').as_deref(), Some("LLL"));
///
/// tree.delete('A');
/// assert!(tree.lookup("LLL").is_none());
/// # Ok::<(), braille_tree::model::EncodingError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct SymbolTree {
    /// Node slots of this tree (arena pattern), `None` marks a free slot
    nodes: Vec<Option<Node>>,

    /// Free slots available for reuse
    free: Vec<NodeIndex>,

    /// Index of the root, `None` while the tree is empty
    root: Option<NodeIndex>,
}

// ============================================================================
// New, Getters / Accessors, etc. (pub)
// ============================================================================
impl SymbolTree {
    /// Creates a new, empty tree without a root.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a tree by inserting the given symbols in order.
    ///
    /// # Errors
    /// Returns the [EncodingError] of the first symbol with a malformed encoding.
    pub fn from_symbols<I>(symbols: I) -> Result<Self, EncodingError>
    where
        I: IntoIterator<Item = Symbol>,
    {
        let mut tree = SymbolTree::new();
        for symbol in symbols {
            tree.insert(symbol.character(), symbol.encoding())?;
        }
        Ok(tree)
    }

    /// Returns a reference to the root, or `None` if nothing was inserted yet.
    pub fn root(&self) -> Option<&Node> {
        self.root.map(|index| &self[index])
    }

    /// Returns the index of the root, or `None` if nothing was inserted yet.
    pub fn root_index(&self) -> Option<NodeIndex> {
        self.root
    }

    /// Returns the node at the given index, or `None` if the slot is unused.
    pub fn node(&self, index: NodeIndex) -> Option<&Node> {
        self.nodes.get(index).and_then(Option::as_ref)
    }

    /// Returns the number of assigned characters.
    pub fn len(&self) -> usize {
        self.live_nodes().filter(|node| node.has_character()).count()
    }

    /// Returns `true` if no character is assigned.
    pub fn is_empty(&self) -> bool {
        !self.live_nodes().any(|node| node.has_character())
    }

    /// Returns the number of nodes (root, intermediate and assigned) in the tree.
    pub fn num_nodes(&self) -> usize {
        self.nodes.len() - self.free.len()
    }

    /// Returns the length of the longest path in the tree (0 for an empty tree
    /// or a bare root).
    pub fn depth(&self) -> usize {
        self.live_nodes().map(|node| node.path().len()).max().unwrap_or(0)
    }

    /// Returns `true` if `character` is assigned somewhere in the tree.
    pub fn contains(&self, character: char) -> bool {
        self.find_index(character).is_some()
    }

    /// Returns all assigned symbols in pre-order.
    pub fn symbols(&self) -> Vec<Symbol> {
        self.collect_by_prefix("").unwrap_or_default()
    }

    /// Removes all nodes, including the root.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free.clear();
        self.root = None;
    }

    fn live_nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().flatten()
    }
}

// ============================================================================
// Insertion
// ============================================================================
impl SymbolTree {
    /// Assigns `character` to `encoding`.
    ///
    /// Creates the root (with empty `L` and `R` children) if the tree is
    /// empty, and any missing intermediate node along the way. The node at
    /// the full encoding is always replaced: a character previously assigned
    /// there, as well as everything below it, is discarded.
    ///
    /// # Arguments
    /// * `character` - Character to assign
    /// * `encoding` - Non-empty sequence of `L`/`R` tokens
    ///
    /// # Errors
    /// Returns an [EncodingError] if `encoding` is empty or contains other
    /// tokens; the tree is left untouched in that case.
    pub fn insert(&mut self, character: char, encoding: &str) -> Result<(), EncodingError> {
        validate_encoding(encoding)?;
        let path: Vec<Step> = steps(encoding).flatten().collect();
        let Some((&last, init)) = path.split_last() else {
            return Ok(());
        };

        let mut current = self.ensure_root();
        for (depth, &step) in init.iter().enumerate() {
            current = match self[current].child(step) {
                Some(child) => child,
                None => self.attach(current, step, encoding[..=depth].to_string(), None),
            };
        }

        if let Some(replaced) = self[current].child(last) {
            self.release_subtree(replaced);
        }
        self.attach(current, last, encoding.to_string(), Some(character));

        Ok(())
    }

    /// Returns the root, creating it with its two scaffold children if absent.
    fn ensure_root(&mut self) -> NodeIndex {
        if let Some(root) = self.root {
            return root;
        }

        let root = self.allocate(Node::new_root);
        self.root = Some(root);
        self.attach(root, Step::Left, Step::Left.to_string(), None);
        self.attach(root, Step::Right, Step::Right.to_string(), None);
        root
    }

    /// Creates a new node and places it in the `step` slot of `parent`.
    fn attach(
        &mut self,
        parent: NodeIndex,
        step: Step,
        path: String,
        character: Option<char>,
    ) -> NodeIndex {
        let child = self.allocate(|index| Node::new_child(index, parent, path, character));
        self.node_mut(parent).set_child(step, Some(child));
        child
    }

    fn allocate<F: FnOnce(NodeIndex) -> Node>(&mut self, create: F) -> NodeIndex {
        match self.free.pop() {
            Some(index) => {
                self.nodes[index] = Some(create(index));
                index
            }
            None => {
                let index = self.nodes.len();
                self.nodes.push(Some(create(index)));
                index
            }
        }
    }

    fn node_mut(&mut self, index: NodeIndex) -> &mut Node {
        match self.nodes.get_mut(index).and_then(Option::as_mut) {
            Some(node) => node,
            None => panic!("No node at index {index}"),
        }
    }
}

// ============================================================================
// Lookup & traversal
// ============================================================================
impl SymbolTree {
    /// Follows `encoding` from the root and returns the node it leads to.
    ///
    /// The node may be an intermediate node without a character if
    /// `encoding` is a proper prefix of assigned encodings. The empty
    /// encoding leads to the root.
    ///
    /// # Returns
    /// `None` if the tree is empty, a required child is missing, or
    /// `encoding` contains a token other than `L`/`R`.
    pub fn lookup(&self, encoding: &str) -> Option<&Node> {
        self.lookup_index(encoding).map(|index| &self[index])
    }

    /// Like [lookup](Self::lookup), returning the index of the node.
    pub fn lookup_index(&self, encoding: &str) -> Option<NodeIndex> {
        let mut current = self.root?;
        for step in steps(encoding) {
            current = self[current].child(step?)?;
        }
        Some(current)
    }

    /// Returns the encoding of `character`, or `None` if it is not assigned.
    ///
    /// Searches depth-first, the left subtree completely before the right one,
    /// so if a character were assigned twice, the leftmost encoding wins.
    pub fn find_encoding(&self, character: char) -> Option<String> {
        self.find_index(character)
            .map(|index| self[index].path().to_string())
    }

    fn find_index(&self, character: char) -> Option<NodeIndex> {
        // Recursive helper, left before right
        fn search(tree: &SymbolTree, index: NodeIndex, character: char) -> Option<NodeIndex> {
            let node = &tree[index];
            if node.character() == Some(character) {
                return Some(index);
            }

            node.left()
                .and_then(|left| search(tree, left, character))
                .or_else(|| node.right().and_then(|right| search(tree, right, character)))
        }

        search(self, self.root?, character)
    }

    /// Returns all symbols whose encoding starts with `prefix`, in pre-order
    /// (node, then left subtree, then right subtree).
    ///
    /// # Returns
    /// * `None` - if `prefix` does not lead to a node
    /// * `Some(vec![])` - if it does, but no character is assigned at or below it
    ///
    /// # Example
    /// ```
    /// use braille_tree::model::{Symbol, SymbolTree};
    ///
    /// let mut tree = SymbolTree::new();
    /// tree.insert('a', "LRLLLL")?;
    /// tree.insert('b', "LRRLLL")?;
    /// tree.insert('c', "LLLLLL")?;
    ///
    /// let symbols = tree.collect_by_prefix("LR").unwrap();
    /// assert_eq!(symbols, vec![Symbol::new('a', "LRLLLL"), Symbol::new('b', "LRRLLL")]);
    /// assert_eq!(tree.collect_by_prefix("R"), Some(vec![]));
    /// assert_eq!(tree.collect_by_prefix("RR"), None);
    /// # Ok::<(), braille_tree::model::EncodingError>(())
    /// ```
    pub fn collect_by_prefix(&self, prefix: &str) -> Option<Vec<Symbol>> {
        // Recursive pre-order helper
        fn collect(tree: &SymbolTree, index: NodeIndex, symbols: &mut Vec<Symbol>) {
            let node = &tree[index];
            if let Some(character) = node.character() {
                symbols.push(Symbol::new(character, node.path()));
            }
            if let Some(left) = node.left() {
                collect(tree, left, symbols);
            }
            if let Some(right) = node.right() {
                collect(tree, right, symbols);
            }
        }

        let start = self.lookup_index(prefix)?;
        let mut symbols = Vec::new();
        collect(self, start, &mut symbols);
        Some(symbols)
    }
}

// ============================================================================
// Deletion
// ============================================================================
impl SymbolTree {
    /// Removes `character` from the tree and prunes the intermediate nodes
    /// that no longer lead anywhere.
    ///
    /// If the node of `character` still has children (its encoding is a prefix
    /// of other assigned encodings), it stays in place without a character.
    /// Otherwise it is detached, and each ancestor that is now childless and
    /// has no character of its own is detached as well, up to but excluding
    /// the root.
    ///
    /// # Returns
    /// The encoding `character` was assigned to, or `None` if it was not
    /// present (the tree is left unchanged).
    pub fn delete(&mut self, character: char) -> Option<String> {
        let target = self.find_index(character)?;
        let encoding = self[target].path().to_string();
        self.node_mut(target).take_character();

        let mut current = target;
        loop {
            let node = &self[current];
            let Some(parent) = node.parent() else {
                break;
            };
            if !node.is_childless() || node.has_character() {
                break;
            }
            let Some(step) = node.last_step() else {
                break;
            };

            self.node_mut(parent).set_child(step, None);
            self.release_subtree(current);
            current = parent;
        }

        Some(encoding)
    }

    /// Frees the slots of `index` and all its descendants.
    fn release_subtree(&mut self, index: NodeIndex) {
        let mut stack = vec![index];
        while let Some(current) = stack.pop() {
            if let Some(node) = self.nodes[current].take() {
                stack.extend(node.left());
                stack.extend(node.right());
                self.free.push(current);
            }
        }
    }
}

// ============================================================================
// Index
// ============================================================================
impl Index<NodeIndex> for SymbolTree {
    type Output = Node;

    fn index(&self, index: NodeIndex) -> &Self::Output {
        match self.nodes.get(index).and_then(Option::as_ref) {
            Some(node) => node,
            None => panic!("No node at index {index}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slots_are_recycled() {
        let mut tree = SymbolTree::new();
        tree.insert('x', "RRRR").unwrap();
        let before = tree.nodes.len();

        tree.delete('x');
        assert!(!tree.free.is_empty());

        tree.insert('y', "RRRL").unwrap();
        assert_eq!(tree.nodes.len(), before);
        assert_eq!(tree.num_nodes(), 6);
    }

    #[test]
    fn test_overwrite_releases_old_subtree() {
        let mut tree = SymbolTree::new();
        tree.insert('a', "LLLL").unwrap();
        tree.insert('b', "LL").unwrap();

        // root, L, R, LL(b)
        assert_eq!(tree.num_nodes(), 4);
        assert_eq!(tree.free.len(), 2);
        assert!(!tree.contains('a'));
    }
}
