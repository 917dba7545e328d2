use braille_tree::codec::{Codec, CodecError, DEFAULT_CELL_WIDTH, read_tokens_str};
use braille_tree::model::SymbolTree;

fn toy_tree() -> SymbolTree {
    let mut tree = SymbolTree::new();
    tree.insert('A', "LLL").unwrap();
    tree.insert('B', "LLR").unwrap();
    tree
}

fn toy_codec() -> Codec {
    Codec::builder().with_cell_width(3).build().unwrap()
}

// --- DECODE ---
#[test]
fn test_decode_toy_cells() {
    assert_eq!(toy_codec().decode(&toy_tree(), "LLLLLR"), "AB");
}

#[test]
fn test_decode_drops_trailing_partial_cell() {
    assert_eq!(toy_codec().decode(&toy_tree(), "LLRLLLLL"), "BA");
    assert_eq!(toy_codec().decode(&toy_tree(), "LL"), "");
}

#[test]
fn test_decode_skips_unresolved_cells() {
    // "RLL": R exists, RL does not
    assert_eq!(toy_codec().decode(&toy_tree(), "LLRRLL"), "B");
    // Foreign token
    assert_eq!(toy_codec().decode(&toy_tree(), "LXLLLL"), "A");
}

#[test]
fn test_decode_skips_nodes_without_character() {
    let codec = Codec::builder().with_cell_width(2).build().unwrap();
    assert_eq!(codec.decode(&toy_tree(), "LLLL"), "");
}

#[test]
fn test_decode_empty_input_and_tree() {
    assert_eq!(Codec::new().decode(&toy_tree(), ""), "");
    assert_eq!(Codec::new().decode(&SymbolTree::new(), "LLLLLL"), "");
}

#[test]
fn test_decode_after_delete() {
    let mut tree = toy_tree();
    tree.delete('A');
    assert_eq!(toy_codec().decode(&tree, "LLLLLR"), "B");
}

// --- ENCODE ---
#[test]
fn test_encode() {
    assert_eq!(toy_codec().encode(&toy_tree(), "AB"), "LLLLLR");
    assert_eq!(toy_codec().encode(&toy_tree(), "BBA"), "LLRLLRLLL");
}

#[test]
fn test_encode_skips_unknown_characters() {
    assert_eq!(toy_codec().encode(&toy_tree(), "A?B"), "LLLLLR");
    assert_eq!(toy_codec().encode(&toy_tree(), ""), "");
}

#[test]
fn test_encode_then_decode() {
    let tree = toy_tree();
    let codec = toy_codec();
    let tokens = codec.encode(&tree, "ABBA");
    assert_eq!(codec.decode(&tree, &tokens), "ABBA");
}

// --- CONFIGURATION ---
#[test]
fn test_default_cell_width() {
    assert_eq!(Codec::new().cell_width(), DEFAULT_CELL_WIDTH);
    assert_eq!(Codec::builder().build().unwrap(), Codec::default());
}

#[test]
fn test_zero_cell_width_rejected() {
    let err = Codec::builder().with_cell_width(0).build().unwrap_err();
    assert_eq!(err, CodecError::ZeroCellWidth);
    assert_eq!(err.to_string(), "Cell width must be at least 1");
}

// --- TRANSLATION INPUT ---
#[test]
fn test_read_tokens_takes_first_token() {
    assert_eq!(read_tokens_str("LLLLLR\n").unwrap(), "LLLLLR");
    assert_eq!(read_tokens_str("  \r\n\tLLL RRR").unwrap(), "LLL");
    assert_eq!(read_tokens_str("").unwrap(), "");
    assert_eq!(read_tokens_str(" \n ").unwrap(), "");
}
