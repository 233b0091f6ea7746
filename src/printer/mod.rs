//! Human-readable token dump, one line per token.

pub mod printer;

#[cfg(test)]
mod tests;
