use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("let", TokenKind::Let);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("while", TokenKind::While);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Number,
    Identifier,

    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,
    Semicolon,

    Assignment, // =
    Equals,     // ==
    Less,
    Greater,

    Plus,
    Dash,
    Slash,
    Star,

    // Reserved
    Let,
    If,
    Else,
    While,
}

/// The coarse classification every token falls into.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenCategory {
    Keyword,
    Identifier,
    Number,
    Operator,
    Punctuation,
    EndOfInput,
}

impl TokenKind {
    pub fn category(&self) -> TokenCategory {
        match self {
            TokenKind::EOF => TokenCategory::EndOfInput,
            TokenKind::Number => TokenCategory::Number,
            TokenKind::Identifier => TokenCategory::Identifier,
            TokenKind::OpenCurly
            | TokenKind::CloseCurly
            | TokenKind::OpenParen
            | TokenKind::CloseParen
            | TokenKind::Semicolon => TokenCategory::Punctuation,
            TokenKind::Assignment
            | TokenKind::Equals
            | TokenKind::Less
            | TokenKind::Greater
            | TokenKind::Plus
            | TokenKind::Dash
            | TokenKind::Slash
            | TokenKind::Star => TokenCategory::Operator,
            TokenKind::Let | TokenKind::If | TokenKind::Else | TokenKind::While => {
                TokenCategory::Keyword
            }
        }
    }

    /// Source text of kinds that always have the same lexeme.
    pub fn fixed_lexeme(&self) -> Option<&'static str> {
        match self {
            TokenKind::OpenCurly => Some("{"),
            TokenKind::CloseCurly => Some("}"),
            TokenKind::OpenParen => Some("("),
            TokenKind::CloseParen => Some(")"),
            TokenKind::Semicolon => Some(";"),
            TokenKind::Assignment => Some("="),
            TokenKind::Equals => Some("=="),
            TokenKind::Less => Some("<"),
            TokenKind::Greater => Some(">"),
            TokenKind::Plus => Some("+"),
            TokenKind::Dash => Some("-"),
            TokenKind::Slash => Some("/"),
            TokenKind::Star => Some("*"),
            TokenKind::Let => Some("let"),
            TokenKind::If => Some("if"),
            TokenKind::Else => Some("else"),
            TokenKind::While => Some("while"),
            TokenKind::EOF | TokenKind::Number | TokenKind::Identifier => None,
        }
    }

    /// How a parser diagnostic names this kind when it was expected.
    pub fn describe(&self) -> String {
        match self.fixed_lexeme() {
            Some(lexeme) => format!("`{}`", lexeme),
            None => self.category().to_string(),
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Display for TokenCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TokenCategory::Keyword => "keyword",
            TokenCategory::Identifier => "identifier",
            TokenCategory::Number => "number",
            TokenCategory::Operator => "operator",
            TokenCategory::Punctuation => "punctuation",
            TokenCategory::EndOfInput => "end of input",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    /// Decoded value, only set on `Number` tokens
    pub literal: Option<i64>,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::EOF => write!(f, "{}", self.category()),
            _ => write!(f, "{} {:?}", self.category(), self.value),
        }
    }
}

impl Token {
    pub fn category(&self) -> TokenCategory {
        self.kind.category()
    }

    /// One listing line: position, category, lexeme and literal if any.
    pub fn debug(&self) -> String {
        let mut line = format!("{:<7} {}", self.span.start.to_string(), self);
        if let Some(literal) = self.literal {
            line.push_str(&format!(" literal={}", literal));
        }
        line
    }
}
