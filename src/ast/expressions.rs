use std::fmt::Display;

use crate::{lexer::tokens::TokenKind, Span};

use super::ast::Expr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Less,
    Greater,
    Equals,
}

impl BinaryOperator {
    pub fn from_token_kind(kind: TokenKind) -> Option<BinaryOperator> {
        match kind {
            TokenKind::Plus => Some(BinaryOperator::Add),
            TokenKind::Dash => Some(BinaryOperator::Subtract),
            TokenKind::Star => Some(BinaryOperator::Multiply),
            TokenKind::Slash => Some(BinaryOperator::Divide),
            TokenKind::Less => Some(BinaryOperator::Less),
            TokenKind::Greater => Some(BinaryOperator::Greater),
            TokenKind::Equals => Some(BinaryOperator::Equals),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
            BinaryOperator::Less => "<",
            BinaryOperator::Greater => ">",
            BinaryOperator::Equals => "==",
        }
    }
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

// LITERALS

/// Number Expression
/// Represents an integer literal in the AST.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberExpr {
    pub value: i64,
    pub span: Span,
}

/// Identifier Expression
/// Represents a variable reference in the AST.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierExpr {
    pub name: String,
    pub span: Span,
}

// COMPLEX

/// Binary Expression
/// Represents `left <operator> right`; the span runs from `left` to `right`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryExpr {
    pub operator: BinaryOperator,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
    pub span: Span,
}
