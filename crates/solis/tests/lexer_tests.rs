//! Lexer-level tests: number/string/identifier recognition, comment
//! skipping, and the lexer's never-fail contract (errors become tokens).

use pretty_assertions::assert_eq;
use solis::{Lexer, Literal, TokenKind};

fn kinds(source: &str) -> Vec<TokenKind> {
    Lexer::new(source).tokenize().into_iter().map(|t| t.kind).collect()
}

#[test]
fn recognizes_int_float_and_big_literals() {
    let ks = kinds("1 2.5 3n");
    assert_eq!(
        ks,
        vec![
            TokenKind::Literal(Literal::Int(1)),
            TokenKind::Literal(Literal::Float(2.5)),
            TokenKind::Literal(Literal::Big(solis::BigInt::from_i64(3))),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn recognizes_scientific_notation() {
    let ks = kinds("1.5e-3");
    assert_eq!(ks, vec![TokenKind::Literal(Literal::Float(1.5e-3)), TokenKind::Eof]);
}

#[test]
fn distinguishes_identifiers_and_constructors() {
    let ks = kinds("foo Bar");
    assert_eq!(ks, vec![TokenKind::Identifier("foo".to_owned()), TokenKind::Constructor("Bar".to_owned()), TokenKind::Eof]);
}

#[test]
fn skips_line_and_block_comments() {
    let ks = kinds("1 // a comment\n2 -- another\n/* block */ 3");
    assert_eq!(
        ks,
        vec![
            TokenKind::Literal(Literal::Int(1)),
            TokenKind::Literal(Literal::Int(2)),
            TokenKind::Literal(Literal::Int(3)),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn unterminated_string_becomes_an_error_token_not_a_panic() {
    let tokens = Lexer::new("\"unterminated").tokenize();
    assert!(tokens.iter().any(|t| matches!(t.kind, TokenKind::Error(_))));
}

#[test]
fn positions_are_monotone() {
    let tokens = Lexer::new("let x = 1\nlet y = 2").tokenize();
    for pair in tokens.windows(2) {
        assert!(pair[0].position <= pair[1].position);
    }
}
