//! Token model: a classified, irreducible lexical unit.

use std::fmt;

/// What a token is.
///
/// Closed set. The wire names returned by [`name()`](TokenKind::name) are
/// stable for interop with the parser and external tooling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Words
    Identifier,
    Collection,
    Keyword,
    Type,
    Boolean,
    // Literals
    Float,
    Integer,
    String,
    // Operators
    Assign,
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Equal,
    NotEqual,
    Less,
    Greater,
    LessEqual,
    GreaterEqual,
    And,
    Or,
    // Delimiters
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Dot,
    Semicolon,
    Comma,
    // Control
    EndOfInput,
}

impl TokenKind {
    /// Stable interop name of this kind.
    pub fn name(self) -> &'static str {
        match self {
            Self::Identifier => "IDENTIFIER",
            Self::Collection => "COLLECTION",
            Self::Keyword => "KEYWORD",
            Self::Type => "TYPE",
            Self::Boolean => "BOOLEAN",
            Self::Float => "FLOAT",
            Self::Integer => "INTEGER",
            Self::String => "STRING",
            Self::Assign => "ASSIGN",
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Star => "STAR",
            Self::Slash => "SLASH",
            Self::Percent => "PERCENT",
            Self::Equal => "EQUAL",
            Self::NotEqual => "NOT_EQUAL",
            Self::Less => "LESS",
            Self::Greater => "GREATER",
            Self::LessEqual => "LESS_EQUAL",
            Self::GreaterEqual => "GREATER_EQUAL",
            Self::And => "AND",
            Self::Or => "OR",
            Self::LParen => "LPAREN",
            Self::RParen => "RPAREN",
            Self::LBrace => "LBRACE",
            Self::RBrace => "RBRACE",
            Self::LBracket => "LBRACKET",
            Self::RBracket => "RBRACKET",
            Self::Dot => "DOT",
            Self::Semicolon => "SEMICOLON",
            Self::Comma => "COMMA",
            Self::EndOfInput => "END_OF_INPUT",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified lexical unit: kind plus the exact (or normalized) lexeme.
///
/// Tokens have no identity beyond `kind` + `text`; equality is structural.
/// Ownership passes to the caller on production.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    /// Create a token from a kind and its lexeme.
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// The token every call returns once the source is exhausted.
    pub fn end_of_input() -> Self {
        Self::new(TokenKind::EndOfInput, "")
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.kind, self.text)
    }
}
