//! Utility macros for the scanner.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//!
//! This macro reduces boilerplate in the lexer implementation.

/// Creates a Token instance.
///
/// The two-argument form builds a token without a payload.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$line` - The 1-based source line of the token's first character
/// * `$value` - The token's literal payload
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Int, 3, Literal::Int(42));
/// let end = MK_TOKEN!(TokenKind::End, 3);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $line:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            line: $line,
            value: $crate::lexer::tokens::Literal::None,
        }
    };
    ($kind:expr, $line:expr, $value:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            line: $line,
            value: $value,
        }
    };
}
