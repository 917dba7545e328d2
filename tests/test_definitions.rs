use braille_tree::definitions::{
    DefinitionsParser, parse_file, parse_str, to_definitions, write_definitions_file,
};
use braille_tree::model::{EncodingErrorType, Symbol};
use braille_tree::parser::{ByteParser, ParsingErrorType};
use braille_tree::{load_definitions_file, translate_braille_file};
use std::error::Error;
use std::fs::File;
use std::path::Path;

// --- TESTS DEFINITIONS FILES ---
#[test]
fn test_parse_braille_alphabet() {
    let path = Path::new("tests").join("fixtures").join("braille.txt");
    let tree = parse_file(path).unwrap();

    assert_eq!(tree.len(), 27);
    assert_eq!(tree.depth(), 6);
    assert_eq!(tree.find_encoding('a').as_deref(), Some("RLLLLL"));
    assert_eq!(tree.find_encoding('w').as_deref(), Some("LRLRRR"));
    assert_eq!(tree.find_encoding(' ').as_deref(), Some("LLLLLL"));
    assert_eq!(tree.lookup("RRLLRL").unwrap().character(), Some('h'));
}

#[test]
fn test_translate_message_file() {
    let fixtures = Path::new("tests").join("fixtures");
    let tree = load_definitions_file(fixtures.join("braille.txt")).unwrap();
    let text = translate_braille_file(&tree, fixtures.join("message.txt")).unwrap();
    assert_eq!(text, "hello world");
}

#[test]
fn test_truncated_file() {
    let path = Path::new("tests").join("fixtures").join("truncated.txt");
    let err = parse_file(path).unwrap_err();
    assert_eq!(err.kind(), &ParsingErrorType::UnexpectedEOF);
}

#[test]
fn test_bad_encoding_file() {
    let path = Path::new("tests").join("fixtures").join("bad_encoding.txt");
    let err = parse_file(path).unwrap_err();
    match err.kind() {
        ParsingErrorType::InvalidEncoding(inner) => {
            assert_eq!(inner.kind(), &EncodingErrorType::InvalidToken('X'));
            assert_eq!(inner.encoding(), "LLRXLL");
        }
        other => panic!("unexpected error kind {other:?}"),
    }
    assert!(err.source().is_some());
}

#[test]
fn test_missing_file() {
    let err = parse_file("tests/fixtures/does_not_exist.txt").unwrap_err();
    assert!(matches!(err.kind(), ParsingErrorType::IoError(_)));
}

// --- TESTS DEFINITIONS STRINGS ---
#[test]
fn test_parse_crlf_lines() {
    let tree = parse_str("2\r\nA LLLLLL\r\nB LLLLLR\r\n").unwrap();
    assert_eq!(tree.find_encoding('B').as_deref(), Some("LLLLLR"));
    assert_eq!(tree.len(), 2);
}

#[test]
fn test_parse_space_and_unicode_characters() {
    let tree = parse_str("2\n  LLLLLL\n⠁ RLLLLL\n").unwrap();
    assert_eq!(tree.find_encoding(' ').as_deref(), Some("LLLLLL"));
    assert_eq!(tree.find_encoding('⠁').as_deref(), Some("RLLLLL"));
}

#[test]
fn test_parse_ignores_trailing_content() {
    let tree = parse_str("2 definitions\nA LLLLLL first\nB\tLLLLLR\nC RRRRRR\n").unwrap();
    assert_eq!(tree.len(), 2);
    assert!(!tree.contains('C'));
}

#[test]
fn test_later_definition_wins() {
    let tree = parse_str("2\nA LLLLLL\nB LLLLLL\n").unwrap();
    assert_eq!(tree.lookup("LLLLLL").unwrap().character(), Some('B'));
    assert_eq!(tree.len(), 1);
}

#[test]
fn test_zero_definitions() {
    let tree = parse_str("0\n").unwrap();
    assert!(tree.root().is_none());
}

#[test]
fn test_empty_input() {
    let err = parse_str("").unwrap_err();
    assert_eq!(err.kind(), &ParsingErrorType::UnexpectedEOF);
}

#[test]
fn test_invalid_count() {
    let err = parse_str("x\nA LLLLLL\n").unwrap_err();
    assert!(matches!(err.kind(), ParsingErrorType::InvalidCount(_)));
    assert_eq!(err.position(), 0);
}

#[test]
fn test_missing_encoding() {
    let err = parse_str("1\nA\n").unwrap_err();
    assert!(matches!(err.kind(), ParsingErrorType::InvalidDefinition(_)));
}

#[test]
fn test_blank_line_instead_of_definition() {
    let err = parse_str("2\nA LLLLLL\n\nB LLLLLR\n").unwrap_err();
    assert!(matches!(err.kind(), ParsingErrorType::InvalidDefinition(_)));
}

#[test]
fn test_invalid_encoding_position() {
    let err = parse_str("1\nA LLXLLL\n").unwrap_err();
    assert_eq!(err.position(), 10);
    assert!(err.to_string().contains("unexpected token 'X' at position 2"));
}

// --- TESTS DEFINITIONS PARSER ---
#[test]
fn test_parse_single_definitions() {
    let mut byte_parser = ByteParser::for_str("2\na LRLLLL\nb LRRLLL\n");
    let mut parser = DefinitionsParser::new();

    assert_eq!(parser.parse_header(&mut byte_parser).unwrap(), 2);
    assert_eq!(parser.num_definitions(), Some(2));
    assert_eq!(parser.num_remaining(), 2);

    assert_eq!(parser.next_symbol(&mut byte_parser).unwrap(), Symbol::new('a', "LRLLLL"));
    assert_eq!(parser.num_remaining(), 1);
    assert_eq!(parser.next_symbol(&mut byte_parser).unwrap(), Symbol::new('b', "LRRLLL"));
    assert_eq!(parser.num_remaining(), 0);
}

#[test]
fn test_parse_all_keeps_file_order() {
    let mut byte_parser = ByteParser::for_str("3\nc LLLRLL\na LRLLLL\nb LRRLLL\n");
    let symbols = DefinitionsParser::new().parse_all(&mut byte_parser).unwrap();
    let characters: Vec<char> = symbols.iter().map(Symbol::character).collect();
    assert_eq!(characters, vec!['c', 'a', 'b']);
}

#[test]
fn test_parse_all_huge_count() {
    let mut byte_parser = ByteParser::for_str("99999999999999999\na LLLLLL\n");
    let err = DefinitionsParser::new().parse_all(&mut byte_parser).unwrap_err();
    assert_eq!(err.kind(), &ParsingErrorType::UnexpectedEOF);
}

#[test]
fn test_build_tree_huge_count() {
    let err = parse_str("99999999999999999\na LLLLLL\n").unwrap_err();
    assert_eq!(err.kind(), &ParsingErrorType::UnexpectedEOF);
}

#[test]
fn test_iterator() {
    let byte_parser = ByteParser::for_str("2\na LRLLLL\nb LRRLLL\nc LLLLLL\n");
    let symbols: Vec<Symbol> = DefinitionsParser::new()
        .into_iter(byte_parser)
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(symbols, vec![Symbol::new('a', "LRLLLL"), Symbol::new('b', "LRRLLL")]);
}

#[test]
fn test_iterator_stops_after_error() {
    let byte_parser = ByteParser::for_str("3\na LRLLLL\nb\nc LLLLLL\n");
    let mut iter = DefinitionsParser::new().into_iter(byte_parser).unwrap();
    assert!(iter.next().unwrap().is_ok());
    assert!(iter.next().unwrap().is_err());
    assert!(iter.next().is_none());
}

// --- TESTS DEFINITIONS WRITER ---
#[test]
fn test_to_definitions_round_trip() {
    let path = Path::new("tests").join("fixtures").join("braille.txt");
    let tree = parse_file(path).unwrap();

    let written = to_definitions(&tree);
    assert!(written.starts_with("27\n"));

    let reparsed = parse_str(&written).unwrap();
    assert_eq!(reparsed.symbols(), tree.symbols());
}

#[test]
fn test_write_definitions_file() {
    let tree = parse_str("2\nA LLLLLL\nB LLLLLR\n").unwrap();
    let path = std::env::temp_dir().join(format!("braille_tree_{}.txt", std::process::id()));

    write_definitions_file(File::create(&path).unwrap(), &tree).unwrap();
    let reparsed = parse_file(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(reparsed.symbols(), tree.symbols());
}
