//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{ErrorTip, LexError, LexErrorKind};

#[test]
fn test_error_creation() {
    let error = LexError::new(LexErrorKind::InvalidCharacter { character: '@' }, 10);

    assert_eq!(error.get_error_name(), "InvalidCharacter");
    assert_eq!(error.line(), 10);
    assert_eq!(error.kind(), &LexErrorKind::InvalidCharacter { character: '@' });
}

#[test]
fn test_error_message() {
    let error = LexError::new(LexErrorKind::InvalidCharacter { character: '@' }, 3);

    assert_eq!(error.message(), "invalid character '@'");
    assert_eq!(error.to_string(), "line 3: invalid character '@'");
}

#[test]
fn test_incomplete_operator_error() {
    let error = LexError::new(
        LexErrorKind::IncompleteOperator {
            expected: "&&".to_string(),
            found: '&',
        },
        1,
    );

    assert_eq!(error.get_error_name(), "IncompleteOperator");
    assert_eq!(error.message(), "expected \"&&\", but found '&'");
}

#[test]
fn test_unterminated_literal_errors() {
    let error = LexError::new(LexErrorKind::UnterminatedChar, 2);
    assert_eq!(error.get_error_name(), "UnterminatedChar");
    assert_eq!(error.message(), "unterminated character literal");

    let error = LexError::new(LexErrorKind::UnterminatedString, 2);
    assert_eq!(error.get_error_name(), "UnterminatedString");
    assert_eq!(error.message(), "unterminated string literal");
}

#[test]
fn test_malformed_literal_errors() {
    let error = LexError::new(LexErrorKind::MalformedNumber { literal: "1.2.3".to_string() }, 1);
    assert_eq!(error.get_error_name(), "MalformedNumber");
    assert_eq!(error.message(), "malformed numeric literal \"1.2.3\"");

    let error = LexError::new(LexErrorKind::MalformedChar { literal: "ab".to_string() }, 1);
    assert_eq!(error.get_error_name(), "MalformedChar");

    let error = LexError::new(LexErrorKind::EmptyCharLiteral, 1);
    assert_eq!(error.get_error_name(), "EmptyCharLiteral");
}

#[test]
fn test_internal_error() {
    let error = LexError::new(
        LexErrorKind::InternalError {
            message: "zero-length lexeme at byte 4".to_string(),
        },
        1,
    );

    assert_eq!(error.get_error_name(), "InternalError");
    assert_eq!(error.message(), "internal scanner error: zero-length lexeme at byte 4");
}

#[test]
fn test_error_tip_none() {
    let error = LexError::new(LexErrorKind::InvalidCharacter { character: '#' }, 1);

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = LexError::new(
        LexErrorKind::IncompleteOperator {
            expected: "||".to_string(),
            found: '|',
        },
        1,
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("`||`")),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_error_is_std_error() {
    fn assert_error<E: std::error::Error>(_: &E) {}

    let error = LexError::new(LexErrorKind::UnterminatedString, 1);
    assert_error(&error);
}
