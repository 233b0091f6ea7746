use pretty_assertions::assert_eq;

use super::printer::{render, render_token};
use crate::{
    lexer::{
        lexer::tokenize,
        tokens::{Literal, TokenKind},
    },
    MK_TOKEN,
};

#[test]
fn test_render_token_without_payload() {
    assert_eq!(render_token(&MK_TOKEN!(TokenKind::Semicolon, 4)), "4 SEMICOLON");
    assert_eq!(render_token(&MK_TOKEN!(TokenKind::End, 9)), "9 END");
}

#[test]
fn test_render_token_with_payload() {
    assert_eq!(
        render_token(&MK_TOKEN!(TokenKind::Identifier, 1, Literal::Text("count".to_string()))),
        "1 ID : count"
    );
    assert_eq!(render_token(&MK_TOKEN!(TokenKind::Int, 2, Literal::Int(-7))), "2 INT : -7");
    assert_eq!(render_token(&MK_TOKEN!(TokenKind::Double, 3, Literal::Double(5.0))), "3 DOUBLE : 5.0");
    assert_eq!(render_token(&MK_TOKEN!(TokenKind::Double, 3, Literal::Double(0.25))), "3 DOUBLE : 0.25");
    assert_eq!(render_token(&MK_TOKEN!(TokenKind::Char, 4, Literal::Char('z'))), "4 CHAR : z");
    assert_eq!(
        render_token(&MK_TOKEN!(TokenKind::String, 5, Literal::Text("hi there".to_string()))),
        "5 STRING : hi there"
    );
}

#[test]
fn test_render_program() {
    let tokens = tokenize("int x = 5;\nx = x + 'c';").unwrap();

    assert_eq!(
        render(&tokens),
        "1 TYPE_INT\n\
         1 ID : x\n\
         1 ASSIGN\n\
         1 INT : 5\n\
         1 SEMICOLON\n\
         2 ID : x\n\
         2 ASSIGN\n\
         2 ID : x\n\
         2 ADD\n\
         2 CHAR : c\n\
         2 SEMICOLON\n\
         2 END\n"
    );
}

#[test]
fn test_render_empty_sequence() {
    assert_eq!(render(&[]), "");
}
