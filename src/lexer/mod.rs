//! Lexical analysis for atomC.
//!
//! This module contains the scanner that converts a source buffer into an
//! ordered sequence of tokens for the parser. It handles:
//!
//! - Keywords, identifiers and punctuation
//! - Integer, double, character and string literals
//! - Line comments and the three line terminator conventions
//! - Line tracking for every token and error

pub mod lexer;
pub mod options;
pub mod tokens;
