use lazy_static::lazy_static;
use serde::Serialize;
use std::{collections::HashMap, fmt::Display};

use crate::Position;

lazy_static! {
    pub static ref SYMBOL_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("+", TokenKind::Plus);
        map.insert("-", TokenKind::Minus);
        map.insert("*", TokenKind::Times);
        map.insert("/", TokenKind::Divide);
        map.insert("(", TokenKind::LParen);
        map.insert(")", TokenKind::RParen);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    Number,

    Plus,
    Minus,
    Times,
    Divide,

    #[serde(rename = "LPAREN")]
    LParen,
    #[serde(rename = "RPAREN")]
    RParen,

    // Not produced by the current token pattern
    Unknown,
}

impl TokenKind {
    /// Classifies a matched piece of source text.
    pub fn classify(value: &str) -> TokenKind {
        if !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()) {
            return TokenKind::Number;
        }

        SYMBOL_LOOKUP.get(value).copied().unwrap_or(TokenKind::Unknown)
    }

    /// The literal symbol for fixed-text kinds.
    pub fn symbol(&self) -> Option<&'static str> {
        match self {
            TokenKind::Plus => Some("+"),
            TokenKind::Minus => Some("-"),
            TokenKind::Times => Some("*"),
            TokenKind::Divide => Some("/"),
            TokenKind::LParen => Some("("),
            TokenKind::RParen => Some(")"),
            TokenKind::Number | TokenKind::Unknown => None,
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TokenKind::Number => "NUMBER",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Times => "TIMES",
            TokenKind::Divide => "DIVIDE",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::Unknown => "UNKNOWN",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub value: String,
    #[serde(rename = "type")]
    pub kind: TokenKind,
    pub position: Position,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}) at {}", self.kind, self.value, self.position)
    }
}
