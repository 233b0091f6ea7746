use std::io::{self, Write};

use crate::lexer::tokens::Token;

/// `<line> <KIND>`, or `<line> <KIND> : <value>` for tokens with a payload.
pub fn render_token(token: &Token) -> String {
    token.to_string()
}

pub fn render(tokens: &[Token]) -> String {
    let mut result = String::new();

    for token in tokens {
        result.push_str(&render_token(token));
        result.push('\n');
    }

    result
}

pub fn show_tokens(tokens: &[Token]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    handle.write_all(render(tokens).as_bytes())?;
    handle.flush()
}
