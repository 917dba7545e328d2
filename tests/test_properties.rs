use braille_tree::codec::Codec;
use braille_tree::model::{NodeIndex, Symbol, SymbolTree};
use proptest::prelude::*;
use std::collections::BTreeSet;

/// Distinct six-token encodings, each paired with a distinct character.
fn symbols_strategy() -> impl Strategy<Value = Vec<Symbol>> {
    prop::collection::btree_set("[LR]{6}", 1..40).prop_map(|encodings| {
        encodings
            .into_iter()
            .enumerate()
            .map(|(i, encoding)| {
                let character = char::from_u32(0x2800 + i as u32).unwrap_or('?');
                Symbol::new(character, encoding)
            })
            .collect()
    })
}

fn build(symbols: &[Symbol]) -> SymbolTree {
    SymbolTree::from_symbols(symbols.iter().cloned()).unwrap()
}

/// Checks parent/path links and that every dead end carries a character,
/// except for the untouched scaffold children of the root.
fn validate_tree(tree: &SymbolTree) {
    let Some(root) = tree.root_index() else {
        return;
    };

    let mut stack: Vec<NodeIndex> = vec![root];
    let mut visited = 0usize;
    while let Some(index) = stack.pop() {
        visited += 1;
        let node = &tree[index];

        for (child, token) in [(node.left(), 'L'), (node.right(), 'R')] {
            if let Some(child) = child {
                let child_node = &tree[child];
                assert_eq!(child_node.parent(), Some(index));
                assert_eq!(child_node.path(), format!("{}{}", node.path(), token));
                stack.push(child);
            }
        }

        if !node.is_root() && node.is_childless() && !node.has_character() {
            assert_eq!(node.path().len(), 1, "dead end at {}", node.path());
        }
    }
    assert_eq!(visited, tree.num_nodes());
}

proptest! {
    #[test]
    fn prop_lookup_and_find_round_trip(symbols in symbols_strategy()) {
        let tree = build(&symbols);
        validate_tree(&tree);
        prop_assert_eq!(tree.len(), symbols.len());

        for symbol in &symbols {
            let node = tree.lookup(symbol.encoding()).unwrap();
            prop_assert_eq!(node.character(), Some(symbol.character()));
            let found = tree.find_encoding(symbol.character());
            prop_assert_eq!(found.as_deref(), Some(symbol.encoding()));
        }
    }

    #[test]
    fn prop_prefix_completeness(symbols in symbols_strategy(), prefix in "[LR]{0,6}") {
        let tree = build(&symbols);
        let expected: BTreeSet<Symbol> = symbols
            .iter()
            .filter(|symbol| symbol.encoding().starts_with(&prefix))
            .cloned()
            .collect();

        match tree.collect_by_prefix(&prefix) {
            Some(collected) => {
                for symbol in &collected {
                    prop_assert!(symbol.encoding().starts_with(&prefix));
                }
                let collected_set: BTreeSet<Symbol> = collected.iter().cloned().collect();
                prop_assert_eq!(collected_set.len(), collected.len());
                prop_assert_eq!(collected_set, expected);
                prop_assert_eq!(Some(collected), tree.collect_by_prefix(&prefix));
            }
            None => prop_assert!(expected.is_empty()),
        }
    }

    #[test]
    fn prop_delete_then_lookup(
        symbols in symbols_strategy(),
        mask in prop::collection::vec(any::<bool>(), 40),
    ) {
        let mut tree = build(&symbols);
        let (deleted, kept): (Vec<_>, Vec<_>) = symbols
            .iter()
            .cloned()
            .enumerate()
            .partition(|(i, _)| mask[*i]);

        for (_, symbol) in &deleted {
            let removed = tree.delete(symbol.character());
            prop_assert_eq!(removed.as_deref(), Some(symbol.encoding()));
        }
        validate_tree(&tree);

        for (_, symbol) in &deleted {
            prop_assert!(tree.find_encoding(symbol.character()).is_none());
            prop_assert!(tree.lookup(symbol.encoding()).is_none());
        }

        let kept: Vec<Symbol> = kept.into_iter().map(|(_, symbol)| symbol).collect();
        for symbol in &kept {
            let found = tree.find_encoding(symbol.character());
            prop_assert_eq!(found.as_deref(), Some(symbol.encoding()));
        }
        prop_assert_eq!(tree.symbols(), build(&kept).symbols());
    }

    #[test]
    fn prop_decode_inverts_encode(symbols in symbols_strategy(), picks in prop::collection::vec(any::<prop::sample::Index>(), 0..30)) {
        let tree = build(&symbols);
        let text: String = picks.iter().map(|pick| pick.get(&symbols).character()).collect();

        let codec = Codec::new();
        let tokens = codec.encode(&tree, &text);
        prop_assert_eq!(tokens.len(), text.chars().count() * 6);
        prop_assert_eq!(codec.decode(&tree, &tokens), text);
    }
}
