use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, trace};

use crate::{
    errors::errors::{LexError, LexErrorKind},
    MK_TOKEN,
};

use super::{
    options::ScanOptions,
    tokens::{Literal, Token, TokenKind, RESERVED_LOOKUP},
};

lazy_static! {
    static ref NUMBER_SHAPE: Regex = Regex::new("^[0-9]+(\\.[0-9]+)?([eE][+-]?[0-9]+)?$").unwrap();
    static ref DOUBLE_PREFIX: Regex = Regex::new("^[0-9]+(\\.[0-9]*)?([eE][+-]?[0-9]+)?").unwrap();
}

/// Scanner states. `Start` dispatches on the current byte; every other
/// state consumes one lexeme (or one whitespace unit) and returns to
/// `Start`, except `End`, which is reached only at the end of the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Start,
    Whitespace,
    Comment,
    Identifier,
    Number,
    CharLiteral,
    StringLiteral,
    Operator,
    End,
}

struct Lexer<'src> {
    source: &'src [u8],
    pos: usize,
    line: u32,
    tokens: Vec<Token>,
    options: ScanOptions,
}

impl<'src> Lexer<'src> {
    fn new(source: &'src [u8], options: ScanOptions) -> Lexer<'src> {
        Lexer {
            source,
            pos: 0,
            line: 1,
            tokens: vec![],
            options,
        }
    }

    fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    fn push(&mut self, token: Token) {
        trace!(%token, "token");
        self.tokens.push(token);
    }

    /// The current byte, `None` at end of input.
    fn at(&self) -> Option<u8> {
        self.peek(0)
    }

    fn peek(&self, offset: usize) -> Option<u8> {
        self.source.get(self.pos + offset).copied()
    }

    fn error(&self, kind: LexErrorKind) -> LexError {
        LexError::new(kind, self.line)
    }

    /// Consumes one line terminator (`\n`, `\r\n` or a bare `\r`) if the
    /// cursor is on one.
    fn consume_newline(&mut self) -> bool {
        match self.at() {
            Some(b'\r') => {
                let width = if self.peek(1) == Some(b'\n') { 2 } else { 1 };
                self.advance_n(width);
                self.line += 1;
                true
            }
            Some(b'\n') => {
                self.advance_n(1);
                self.line += 1;
                true
            }
            _ => false,
        }
    }

    fn extract(&self, start: usize) -> Result<&'src str, LexError> {
        if self.pos <= start {
            return Err(self.error(LexErrorKind::InternalError {
                message: format!("zero-length lexeme at byte {}", start),
            }));
        }

        let source: &'src [u8] = self.source;
        std::str::from_utf8(&source[start..self.pos]).map_err(|_| {
            self.error(LexErrorKind::InternalError {
                message: format!("non-ASCII lexeme at byte {}", start),
            })
        })
    }

    fn run(mut self) -> Result<Vec<Token>, LexError> {
        let mut state = State::Start;

        loop {
            state = match state {
                State::Start => self.dispatch(),
                State::Whitespace => self.skip_whitespace(),
                State::Comment => self.skip_comment(),
                State::Identifier => self.scan_identifier()?,
                State::Number => self.scan_number()?,
                State::CharLiteral => self.scan_char()?,
                State::StringLiteral => self.scan_string()?,
                State::Operator => self.scan_operator()?,
                State::End => {
                    let line = self.line;
                    self.push(MK_TOKEN!(TokenKind::End, line));
                    return Ok(self.tokens);
                }
            };
        }
    }

    fn dispatch(&self) -> State {
        match self.at() {
            None => State::End,
            Some(b' ' | b'\t' | b'\r' | b'\n') => State::Whitespace,
            Some(b'/') if self.peek(1) == Some(b'/') => State::Comment,
            Some(c) if c.is_ascii_alphabetic() || c == b'_' => State::Identifier,
            Some(c) if c.is_ascii_digit() => State::Number,
            Some(b'\'') => State::CharLiteral,
            Some(b'"') => State::StringLiteral,
            Some(_) => State::Operator,
        }
    }

    fn skip_whitespace(&mut self) -> State {
        if !self.consume_newline() {
            self.advance_n(1);
        }

        State::Start
    }

    // The terminating newline is left for the whitespace state.
    fn skip_comment(&mut self) -> State {
        self.advance_n(2);

        while let Some(c) = self.at() {
            if c == b'\n' || c == b'\r' {
                break;
            }
            self.advance_n(1);
        }

        State::Start
    }

    fn scan_identifier(&mut self) -> Result<State, LexError> {
        let start = self.pos;
        self.advance_n(1);

        while let Some(c) = self.at() {
            if !(c.is_ascii_alphanumeric() || c == b'_') {
                break;
            }
            self.advance_n(1);
        }

        let text = self.extract(start)?;
        let line = self.line;

        if let Some(kind) = RESERVED_LOOKUP.get(text) {
            self.push(MK_TOKEN!(*kind, line));
        } else {
            self.push(MK_TOKEN!(
                TokenKind::Identifier,
                line,
                Literal::Text(String::from(text))
            ));
        }

        Ok(State::Start)
    }

    fn scan_number(&mut self) -> Result<State, LexError> {
        let start = self.pos;
        let strict = self.options.is_strict();

        while let Some(c) = self.at() {
            let in_run = match c {
                b'0'..=b'9' | b'.' | b'e' | b'E' => true,
                b'+' | b'-' if strict => {
                    matches!(self.source.get(self.pos.wrapping_sub(1)).copied(), Some(b'e' | b'E'))
                }
                b'+' | b'-' => true,
                _ => false,
            };
            if !in_run {
                break;
            }
            self.advance_n(1);
        }

        let text = self.extract(start)?;
        let line = self.line;
        let is_double = text.contains(['.', 'e', 'E']);

        if strict && !NUMBER_SHAPE.is_match(text) {
            return Err(self.error(LexErrorKind::MalformedNumber {
                literal: String::from(text),
            }));
        }

        if is_double {
            let value = if strict {
                text.parse::<f64>().map_err(|_| {
                    self.error(LexErrorKind::InternalError {
                        message: format!("validated literal {:?} failed to parse", text),
                    })
                })?
            } else {
                leading_double(text)
            };
            self.push(MK_TOKEN!(TokenKind::Double, line, Literal::Double(value)));
        } else {
            self.push(MK_TOKEN!(TokenKind::Int, line, Literal::Int(leading_int(text))));
        }

        Ok(State::Start)
    }

    fn scan_char(&mut self) -> Result<State, LexError> {
        let line = self.line;
        self.advance_n(1);
        let start = self.pos;

        loop {
            match self.at() {
                None => return Err(LexError::new(LexErrorKind::UnterminatedChar, line)),
                Some(b'\'') => break,
                Some(_) => {
                    if !self.consume_newline() {
                        self.advance_n(1);
                    }
                }
            }
        }

        let content = String::from_utf8_lossy(&self.source[start..self.pos]).into_owned();
        self.advance_n(1);

        let mut chars = content.chars();
        let first = match chars.next() {
            Some(c) => c,
            None => return Err(LexError::new(LexErrorKind::EmptyCharLiteral, line)),
        };

        if self.options.is_strict() && chars.next().is_some() {
            return Err(LexError::new(LexErrorKind::MalformedChar { literal: content }, line));
        }

        self.push(MK_TOKEN!(TokenKind::Char, line, Literal::Char(first)));
        Ok(State::Start)
    }

    // Content is kept verbatim; a backslash only stops the next byte from
    // closing the literal.
    fn scan_string(&mut self) -> Result<State, LexError> {
        let line = self.line;
        self.advance_n(1);
        let start = self.pos;

        loop {
            match self.at() {
                None => return Err(LexError::new(LexErrorKind::UnterminatedString, line)),
                Some(b'"') => break,
                Some(b'\\') => {
                    self.advance_n(1);
                    if matches!(self.at(), Some(c) if c != b'\r' && c != b'\n') {
                        self.advance_n(1);
                    }
                }
                Some(_) => {
                    if !self.consume_newline() {
                        self.advance_n(1);
                    }
                }
            }
        }

        let content = String::from_utf8_lossy(&self.source[start..self.pos]).into_owned();
        self.advance_n(1);

        self.push(MK_TOKEN!(TokenKind::String, line, Literal::Text(content)));
        Ok(State::Start)
    }

    fn scan_operator(&mut self) -> Result<State, LexError> {
        let line = self.line;
        let (kind, width) = match self.at() {
            Some(b',') => (TokenKind::Comma, 1),
            Some(b';') => (TokenKind::Semicolon, 1),
            Some(b'(') => (TokenKind::OpenParen, 1),
            Some(b')') => (TokenKind::CloseParen, 1),
            Some(b'[') => (TokenKind::OpenBracket, 1),
            Some(b']') => (TokenKind::CloseBracket, 1),
            Some(b'{') => (TokenKind::OpenCurly, 1),
            Some(b'}') => (TokenKind::CloseCurly, 1),
            Some(b'+') => (TokenKind::Add, 1),
            Some(b'-') => (TokenKind::Sub, 1),
            Some(b'*') => (TokenKind::Mul, 1),
            Some(b'/') => (TokenKind::Div, 1),
            Some(b'.') => (TokenKind::Dot, 1),
            Some(b'=') => self.with_equals(TokenKind::Equal, TokenKind::Assign),
            Some(b'!') => self.with_equals(TokenKind::NotEquals, TokenKind::Not),
            Some(b'<') => self.with_equals(TokenKind::LessEquals, TokenKind::Less),
            Some(b'>') => self.with_equals(TokenKind::GreaterEquals, TokenKind::Greater),
            Some(b'&') => self.doubled(b'&', TokenKind::And)?,
            Some(b'|') => self.doubled(b'|', TokenKind::Or)?,
            _ => {
                return Err(self.error(LexErrorKind::InvalidCharacter {
                    character: self.current_char(),
                }))
            }
        };

        self.push(MK_TOKEN!(kind, line));
        self.advance_n(width);
        Ok(State::Start)
    }

    fn with_equals(&self, paired: TokenKind, single: TokenKind) -> (TokenKind, usize) {
        if self.peek(1) == Some(b'=') {
            (paired, 2)
        } else {
            (single, 1)
        }
    }

    fn doubled(&self, byte: u8, kind: TokenKind) -> Result<(TokenKind, usize), LexError> {
        if self.peek(1) == Some(byte) {
            Ok((kind, 2))
        } else {
            let single = char::from(byte);
            Err(self.error(LexErrorKind::IncompleteOperator {
                expected: format!("{}{}", single, single),
                found: single,
            }))
        }
    }

    fn current_char(&self) -> char {
        let end = (self.pos + 4).min(self.source.len());
        String::from_utf8_lossy(&self.source[self.pos..end])
            .chars()
            .next()
            .unwrap_or(char::REPLACEMENT_CHARACTER)
    }
}

/// Decimal value of the leading digits, wrapping on overflow.
fn leading_int(text: &str) -> i64 {
    text.bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, digit| {
            acc.wrapping_mul(10).wrapping_add(i64::from(digit - b'0'))
        })
}

/// Value of the longest prefix that parses as a float.
fn leading_double(text: &str) -> f64 {
    DOUBLE_PREFIX
        .find(text)
        .and_then(|prefix| prefix.as_str().parse::<f64>().ok())
        .unwrap_or(0.0)
}

/// Scans `source` into tokens using the default (strict) literal policy.
pub fn scan(source: &[u8]) -> Result<Vec<Token>, LexError> {
    scan_with_options(source, ScanOptions::default())
}

/// Scans `source` into tokens. The sequence always ends with exactly one
/// `End` token; on error no tokens are returned.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn scan_with_options(source: &[u8], options: ScanOptions) -> Result<Vec<Token>, LexError> {
    let result = Lexer::new(source, options).run();

    match &result {
        Ok(tokens) => debug!(count = tokens.len(), "scan complete"),
        Err(error) => debug!(%error, "scan failed"),
    }

    result
}

pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    scan(source.as_bytes())
}
