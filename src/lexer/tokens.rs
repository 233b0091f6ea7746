use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("char", TokenKind::TypeChar);
        map.insert("int", TokenKind::TypeInt);
        map.insert("double", TokenKind::TypeDouble);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("return", TokenKind::Return);
        map.insert("struct", TokenKind::Struct);
        map.insert("void", TokenKind::Void);
        map.insert("while", TokenKind::While);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Identifier,

    // Reserved
    TypeChar,
    TypeInt,
    TypeDouble,
    If,
    Else,
    Return,
    Struct,
    Void,
    While,

    Comma,
    Semicolon,
    OpenParen,
    CloseParen,
    OpenBracket,
    CloseBracket,
    OpenCurly,
    CloseCurly,
    End,

    Assign,    // =
    Equal,     // ==
    Add,
    Sub,
    Mul,
    Div,
    Dot,
    And,       // &&
    Or,        // ||
    Not,       // !
    NotEquals, // !=
    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    Int,
    Double,
    String,
    Char,
}

impl TokenKind {
    pub const ALL: [TokenKind; 38] = [
        TokenKind::Identifier,
        TokenKind::TypeChar,
        TokenKind::TypeInt,
        TokenKind::TypeDouble,
        TokenKind::If,
        TokenKind::Else,
        TokenKind::Return,
        TokenKind::Struct,
        TokenKind::Void,
        TokenKind::While,
        TokenKind::Comma,
        TokenKind::Semicolon,
        TokenKind::OpenParen,
        TokenKind::CloseParen,
        TokenKind::OpenBracket,
        TokenKind::CloseBracket,
        TokenKind::OpenCurly,
        TokenKind::CloseCurly,
        TokenKind::End,
        TokenKind::Assign,
        TokenKind::Equal,
        TokenKind::Add,
        TokenKind::Sub,
        TokenKind::Mul,
        TokenKind::Div,
        TokenKind::Dot,
        TokenKind::And,
        TokenKind::Or,
        TokenKind::Not,
        TokenKind::NotEquals,
        TokenKind::Less,
        TokenKind::LessEquals,
        TokenKind::Greater,
        TokenKind::GreaterEquals,
        TokenKind::Int,
        TokenKind::Double,
        TokenKind::String,
        TokenKind::Char,
    ];

    /// Stable name used by the token dump and in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Identifier => "ID",
            TokenKind::TypeChar => "TYPE_CHAR",
            TokenKind::TypeInt => "TYPE_INT",
            TokenKind::TypeDouble => "TYPE_DOUBLE",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::Return => "RETURN",
            TokenKind::Struct => "STRUCT",
            TokenKind::Void => "VOID",
            TokenKind::While => "WHILE",
            TokenKind::Comma => "COMMA",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::OpenParen => "LPAR",
            TokenKind::CloseParen => "RPAR",
            TokenKind::OpenBracket => "LBRACKET",
            TokenKind::CloseBracket => "RBRACKET",
            TokenKind::OpenCurly => "LACC",
            TokenKind::CloseCurly => "RACC",
            TokenKind::End => "END",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Equal => "EQUAL",
            TokenKind::Add => "ADD",
            TokenKind::Sub => "SUB",
            TokenKind::Mul => "MUL",
            TokenKind::Div => "DIV",
            TokenKind::Dot => "DOT",
            TokenKind::And => "AND",
            TokenKind::Or => "OR",
            TokenKind::Not => "NOT",
            TokenKind::NotEquals => "NOTEQ",
            TokenKind::Less => "LESS",
            TokenKind::LessEquals => "LESSEQ",
            TokenKind::Greater => "GREATER",
            TokenKind::GreaterEquals => "GREATEREQ",
            TokenKind::Int => "INT",
            TokenKind::Double => "DOUBLE",
            TokenKind::String => "STRING",
            TokenKind::Char => "CHAR",
        }
    }

    /// The reserved spelling for keyword kinds, `None` for everything else.
    pub fn keyword_spelling(&self) -> Option<&'static str> {
        match self {
            TokenKind::TypeChar => Some("char"),
            TokenKind::TypeInt => Some("int"),
            TokenKind::TypeDouble => Some("double"),
            TokenKind::If => Some("if"),
            TokenKind::Else => Some("else"),
            TokenKind::Return => Some("return"),
            TokenKind::Struct => Some("struct"),
            TokenKind::Void => Some("void"),
            TokenKind::While => Some("while"),
            _ => None,
        }
    }

    pub fn is_keyword(&self) -> bool {
        self.keyword_spelling().is_some()
    }

    /// Identifier, string, and the numeric and character literals carry a payload.
    pub fn carries_value(&self) -> bool {
        matches!(
            self,
            TokenKind::Identifier
                | TokenKind::String
                | TokenKind::Int
                | TokenKind::Double
                | TokenKind::Char
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Literal payload carried by a token.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    None,
    Text(String),
    Int(i64),
    Double(f64),
    Char(char),
}

impl Literal {
    /// Whether this payload is the one `kind` carries.
    pub fn fits(&self, kind: TokenKind) -> bool {
        matches!(
            (kind, self),
            (TokenKind::Identifier, Literal::Text(_))
                | (TokenKind::String, Literal::Text(_))
                | (TokenKind::Int, Literal::Int(_))
                | (TokenKind::Double, Literal::Double(_))
                | (TokenKind::Char, Literal::Char(_))
        ) || (*self == Literal::None && !kind.carries_value())
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Literal::None => Ok(()),
            Literal::Text(text) => write!(f, "{}", text),
            Literal::Int(value) => write!(f, "{}", value),
            Literal::Double(value) => write!(f, "{:?}", value),
            Literal::Char(value) => write!(f, "{}", value),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub line: u32,
    pub value: Literal,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.kind.carries_value() {
            write!(f, "{} {} : {}", self.line, self.kind, self.value)
        } else {
            write!(f, "{} {}", self.line, self.kind)
        }
    }
}

impl Token {
    pub fn text(&self) -> Option<&str> {
        match &self.value {
            Literal::Text(text) => Some(text.as_str()),
            _ => None,
        }
    }
}
