//! Unit tests for the lexer module.
//!
//! Covers:
//! - Numbers and operator symbols
//! - Kind classification
//! - 1-based positions
//! - Skipping of whitespace and unsupported characters

use super::{lexer::tokenize, tokens::TokenKind};
use crate::Position;

#[test]
fn test_tokenize_numbers() {
    let tokens = tokenize("42 7 0 1000");

    assert_eq!(tokens.len(), 4);
    for token in &tokens {
        assert_eq!(token.kind, TokenKind::Number);
    }
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[3].value, "1000");
}

#[test]
fn test_tokenize_operators() {
    let tokens = tokenize("+-*/()");
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();

    assert_eq!(
        kinds,
        vec![
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Times,
            TokenKind::Divide,
            TokenKind::LParen,
            TokenKind::RParen,
        ]
    );
}

#[test]
fn test_tokenize_positions_are_one_based() {
    let tokens = tokenize("12 + 3");

    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0].position, Position(1));
    assert_eq!(tokens[1].position, Position(4));
    assert_eq!(tokens[2].position, Position(6));
}

#[test]
fn test_tokenize_adjacent_tokens() {
    let tokens = tokenize("(2+3)*4");
    let values: Vec<&str> = tokens.iter().map(|t| t.value.as_str()).collect();

    assert_eq!(values, vec!["(", "2", "+", "3", ")", "*", "4"]);
    assert_eq!(tokens[6].position, Position(7));
}

#[test]
fn test_tokenize_skips_unknown_characters() {
    let tokens = tokenize("1 x 2.5 % y");
    let values: Vec<&str> = tokens.iter().map(|t| t.value.as_str()).collect();

    assert_eq!(values, vec!["1", "2", "5"]);
    assert_eq!(tokens[1].position, Position(5));
    assert_eq!(tokens[2].position, Position(7));
}

#[test]
fn test_tokenize_multibyte_skipped_characters() {
    let tokens = tokenize("é1×2");

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].position, Position(2));
    assert_eq!(tokens[1].position, Position(4));
}

#[test]
fn test_tokenize_skips_non_ascii_digits() {
    let tokens = tokenize("1\u{0663}+2");
    let values: Vec<&str> = tokens.iter().map(|t| t.value.as_str()).collect();
    let positions: Vec<Position> = tokens.iter().map(|t| t.position).collect();

    assert_eq!(values, vec!["1", "+", "2"]);
    assert_eq!(positions, vec![Position(1), Position(3), Position(4)]);
    assert!(tokens.iter().all(|t| t.kind != TokenKind::Unknown));

    // fullwidth digits are skipped entirely
    assert!(tokenize("\u{FF11}\u{FF12}").is_empty());
}

#[test]
fn test_tokenize_empty_input() {
    assert!(tokenize("").is_empty());
    assert!(tokenize("   \t\n").is_empty());
    assert!(tokenize("abc").is_empty());
}

#[test]
fn test_positions_strictly_increase() {
    let tokens = tokenize(" 10 *( 2-  33 ) / 4 ");

    for pair in tokens.windows(2) {
        assert!(pair[0].position < pair[1].position);
    }
}

#[test]
fn test_classify() {
    assert_eq!(TokenKind::classify("007"), TokenKind::Number);
    assert_eq!(TokenKind::classify("+"), TokenKind::Plus);
    assert_eq!(TokenKind::classify(")"), TokenKind::RParen);
    assert_eq!(TokenKind::classify("%"), TokenKind::Unknown);
    assert_eq!(TokenKind::classify(""), TokenKind::Unknown);
}

#[test]
fn test_token_kind_display() {
    assert_eq!(TokenKind::Number.to_string(), "NUMBER");
    assert_eq!(TokenKind::LParen.to_string(), "LPAREN");
    assert_eq!(TokenKind::Divide.to_string(), "DIVIDE");
    assert_eq!(TokenKind::Unknown.to_string(), "UNKNOWN");
}
