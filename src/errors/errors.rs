use std::fmt::Display;

use thiserror::Error;

/// A fatal scan error: what went wrong and the line it was found on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line}: {internal_error}")]
pub struct LexError {
    internal_error: LexErrorKind,
    line: u32,
}

impl LexError {
    pub fn new(error_kind: LexErrorKind, line: u32) -> Self {
        LexError {
            internal_error: error_kind,
            line,
        }
    }

    pub fn kind(&self) -> &LexErrorKind {
        &self.internal_error
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn message(&self) -> String {
        self.internal_error.to_string()
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            LexErrorKind::InvalidCharacter { .. } => "InvalidCharacter",
            LexErrorKind::IncompleteOperator { .. } => "IncompleteOperator",
            LexErrorKind::UnterminatedChar => "UnterminatedChar",
            LexErrorKind::UnterminatedString => "UnterminatedString",
            LexErrorKind::EmptyCharLiteral => "EmptyCharLiteral",
            LexErrorKind::MalformedChar { .. } => "MalformedChar",
            LexErrorKind::MalformedNumber { .. } => "MalformedNumber",
            LexErrorKind::InternalError { .. } => "InternalError",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            LexErrorKind::InvalidCharacter { .. } => ErrorTip::None,
            LexErrorKind::IncompleteOperator { expected, .. } => ErrorTip::Suggestion(format!(
                "There are no bitwise operators, did you mean `{}`?",
                expected
            )),
            LexErrorKind::UnterminatedChar => {
                ErrorTip::Suggestion(String::from("Close the character literal with `'`"))
            }
            LexErrorKind::UnterminatedString => {
                ErrorTip::Suggestion(String::from("Close the string literal with `\"`"))
            }
            LexErrorKind::EmptyCharLiteral => ErrorTip::Suggestion(String::from(
                "A character literal must contain exactly one character",
            )),
            LexErrorKind::MalformedChar { literal } => ErrorTip::Suggestion(format!(
                "`'{}'` holds more than one character, use a string literal instead",
                literal
            )),
            LexErrorKind::MalformedNumber { literal } => ErrorTip::Suggestion(format!(
                "`{}` is not a valid number, expected digits with an optional fraction and exponent",
                literal
            )),
            LexErrorKind::InternalError { .. } => ErrorTip::Suggestion(String::from(
                "This is a bug in the scanner, please report it",
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexErrorKind {
    #[error("invalid character {character:?}")]
    InvalidCharacter { character: char },
    #[error("expected {expected:?}, but found {found:?}")]
    IncompleteOperator { expected: String, found: char },
    #[error("unterminated character literal")]
    UnterminatedChar,
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("empty character literal")]
    EmptyCharLiteral,
    #[error("character literal {literal:?} has more than one character")]
    MalformedChar { literal: String },
    #[error("malformed numeric literal {literal:?}")]
    MalformedNumber { literal: String },
    #[error("internal scanner error: {message}")]
    InternalError { message: String },
}
