//! Error types for the scanner.
//!
//! Scanning is fail-fast: the first malformed construct ends the scan with
//! a single `LexError` that carries the error kind and the line it was
//! found on. This module also provides:
//!
//! - Stable error names for reporting
//! - Helpful suggestions attached to each error kind

pub mod errors;

#[cfg(test)]
mod tests;
