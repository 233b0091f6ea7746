#![allow(clippy::module_inception)]

use std::sync::Once;

use crate::errors::errors::{ErrorTip, LexError};

pub mod errors;
pub mod lexer;
pub mod macros;
pub mod printer;

extern crate regex;

static TRACING_INIT: Once = Once::new();

/// Installs the log subscriber. Enable with `RUST_LOG=atomc=debug` or
/// `RUST_LOG=atomc=trace`; without `RUST_LOG` nothing is installed.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}

/// Text of the 1-based `line` in `source`, without its terminator. Lines
/// are split on `\n`, `\r\n` and bare `\r`, the same way the scanner
/// counts them.
pub fn get_line(source: &str, line: u32) -> Option<String> {
    let bytes = source.as_bytes();
    let mut current = 1;
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\r' | b'\n' => {
                if current == line {
                    return Some(String::from(&source[start..i]));
                }

                let width = if bytes[i] == b'\r' && bytes.get(i + 1) == Some(&b'\n') {
                    2
                } else {
                    1
                };
                i += width;
                start = i;
                current += 1;
            }
            _ => i += 1,
        }
    }

    if current == line {
        Some(String::from(&source[start..]))
    } else {
        None
    }
}

pub fn format_error(error: &LexError, source: &str, file: &str) -> String {
    /*
        Error: InvalidCharacter: invalid character '@'
        -> test.c
           |
         3 | int x = @;
           | ^^^^^^^^^
    */

    let line_string = error.line().to_string();
    let padding = line_string.len() + 2;
    let mut result = String::new();

    if let ErrorTip::None = error.get_tip() {
        result.push_str(&format!("Error: {}: {}\n", error.get_error_name(), error.message()));
    } else {
        result.push_str(&format!(
            "Error: {}: {} ({})\n",
            error.get_error_name(),
            error.message(),
            error.get_tip()
        ));
    }
    result.push_str(&format!("-> {}\n", file));

    if let Some(line_text) = get_line(source, error.line()) {
        let line_text_removed = remove_starting_whitespace(&line_text).trim_end();

        result.push_str(&format!("{:>padding$}\n", "|"));
        result.push_str(&format!("{} | {}\n", line_string, line_text_removed));
        result.push_str(&format!(
            "{:>padding$} {}\n",
            "|",
            "^".repeat(line_text_removed.chars().count().max(1))
        ));
    }

    result
}

pub fn display_error(error: &LexError, source: &str, file: &str) {
    eprint!("{}", format_error(error, source, file));
}

fn remove_starting_whitespace(string: &str) -> &str {
    string.trim_start_matches([' ', '\t'])
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{
        errors::errors::{LexError, LexErrorKind},
        format_error, get_line,
    };

    #[test]
    fn test_get_line() {
        let source = "int a;\r\n\r\nint b = @;\rchar c;\n";

        assert_eq!(get_line(source, 1), Some("int a;".to_string()));
        assert_eq!(get_line(source, 2), Some("".to_string()));
        assert_eq!(get_line(source, 3), Some("int b = @;".to_string()));
        assert_eq!(get_line(source, 4), Some("char c;".to_string()));
        assert_eq!(get_line(source, 5), Some("".to_string()));
        assert_eq!(get_line(source, 6), None);
    }

    #[test]
    fn test_format_error() {
        let source = "int a;\n    a = b @ c;\n";
        let error = LexError::new(LexErrorKind::InvalidCharacter { character: '@' }, 2);

        let formatted = format_error(&error, source, "test.c");

        assert_eq!(
            formatted,
            "Error: InvalidCharacter: invalid character '@'\n\
             -> test.c\n  \
             |\n\
             2 | a = b @ c;\n  \
             | ^^^^^^^^^^\n"
        );
    }

    #[test]
    fn test_format_error_with_tip() {
        let error = LexError::new(LexErrorKind::UnterminatedString, 1);
        let formatted = format_error(&error, "\"abc", "test.c");

        assert!(formatted.starts_with(
            "Error: UnterminatedString: unterminated string literal (Close the string literal with `\"`)\n"
        ));
        assert!(formatted.contains("1 | \"abc\n"));
    }
}
