use std::mem;

use crate::{Position, Span};

use super::{
    expressions::{BinaryExpr, IdentifierExpr, NumberExpr},
    statements::{ExpressionStmt, IfStmt, LetStmt, WhileStmt},
};

/// Statement Types
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum StmtType {
    ExpressionStmt,
    LetStmt,
    IfStmt,
    WhileStmt,
}

/// A statement node. The set of statements is closed, so each kind is a variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    Let(LetStmt),
    If(IfStmt),
    While(WhileStmt),
    Expression(ExpressionStmt),
}

impl Stmt {
    pub fn get_stmt_type(&self) -> StmtType {
        match self {
            Stmt::Let(_) => StmtType::LetStmt,
            Stmt::If(_) => StmtType::IfStmt,
            Stmt::While(_) => StmtType::WhileStmt,
            Stmt::Expression(_) => StmtType::ExpressionStmt,
        }
    }

    pub fn get_span(&self) -> &Span {
        match self {
            Stmt::Let(stmt) => &stmt.span,
            Stmt::If(stmt) => &stmt.span,
            Stmt::While(stmt) => &stmt.span,
            Stmt::Expression(stmt) => &stmt.span,
        }
    }
}

/// Expression Types
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum ExprType {
    Number,
    Identifier,
    Binary,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Binary(BinaryExpr),
    Identifier(IdentifierExpr),
    Number(NumberExpr),
}

impl Expr {
    pub fn get_expr_type(&self) -> ExprType {
        match self {
            Expr::Binary(_) => ExprType::Binary,
            Expr::Identifier(_) => ExprType::Identifier,
            Expr::Number(_) => ExprType::Number,
        }
    }

    pub fn get_span(&self) -> &Span {
        match self {
            Expr::Binary(expr) => &expr.span,
            Expr::Identifier(expr) => &expr.span,
            Expr::Number(expr) => &expr.span,
        }
    }

    pub fn get_span_mut(&mut self) -> &mut Span {
        match self {
            Expr::Binary(expr) => &mut expr.span,
            Expr::Identifier(expr) => &mut expr.span,
            Expr::Number(expr) => &mut expr.span,
        }
    }

    /// Leaf left behind in a box whose contents were moved out.
    fn placeholder() -> Expr {
        Expr::Number(NumberExpr {
            value: 0,
            span: Span::new(Position::start(), Position::start()),
        })
    }
}

// Long operator chains nest deeper than the stack allows for recursive drops.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        if let Expr::Binary(expr) = self {
            pending.push(mem::replace(expr.left.as_mut(), Expr::placeholder()));
            pending.push(mem::replace(expr.right.as_mut(), Expr::placeholder()));
        }

        while let Some(mut next) = pending.pop() {
            if let Expr::Binary(expr) = &mut next {
                pending.push(mem::replace(expr.left.as_mut(), Expr::placeholder()));
                pending.push(mem::replace(expr.right.as_mut(), Expr::placeholder()));
            }
        }
    }
}

/// Root of the tree: the top-level statements of one source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    pub body: Vec<Stmt>,
    pub span: Span,
}

impl Program {
    pub fn iter(&self) -> std::slice::Iter<'_, Stmt> {
        self.body.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}
