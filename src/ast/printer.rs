//! S-expression rendering of the syntax tree.
//!
//! `Display` on [`Program`], [`Stmt`] and [`Expr`] gives the compact one-line
//! form, e.g. `(program (let x (+ 1 (* 2 3))))`. [`pretty`] gives the same
//! tree with one statement per line, indented two spaces per nesting level.
//! Expressions are always printed on a single line.

use std::fmt::{Display, Formatter, Result};

use super::{
    ast::{Expr, Program, Stmt},
    statements::BlockStmt,
};

const INDENT: &str = "  ";

/// Pending output while rendering an expression without recursion.
enum Piece<'a> {
    Node(&'a Expr),
    Text(&'static str),
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let mut pending = vec![Piece::Node(self)];

        while let Some(piece) = pending.pop() {
            match piece {
                Piece::Text(text) => f.write_str(text)?,
                Piece::Node(Expr::Binary(expr)) => {
                    write!(f, "({} ", expr.operator)?;
                    pending.push(Piece::Text(")"));
                    pending.push(Piece::Node(&expr.right));
                    pending.push(Piece::Text(" "));
                    pending.push(Piece::Node(&expr.left));
                }
                Piece::Node(Expr::Identifier(expr)) => f.write_str(&expr.name)?,
                Piece::Node(Expr::Number(expr)) => write!(f, "{}", expr.value)?,
            }
        }

        Ok(())
    }
}

impl Display for BlockStmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "(block")?;
        for stmt in self.iter() {
            write!(f, " {}", stmt)?;
        }
        write!(f, ")")
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Stmt::Let(stmt) => write!(f, "(let {} {})", stmt.identifier, stmt.value),
            Stmt::Expression(stmt) => write!(f, "(expr {})", stmt.expression),
            Stmt::While(stmt) => write!(f, "(while {} {})", stmt.condition, stmt.body),
            Stmt::If(stmt) => {
                write!(f, "(if {} {}", stmt.condition, stmt.then_body)?;
                if let Some(else_body) = &stmt.else_body {
                    write!(f, " {}", else_body)?;
                }
                write!(f, ")")
            }
        }
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "(program")?;
        for stmt in self.iter() {
            write!(f, " {}", stmt)?;
        }
        write!(f, ")")
    }
}

/// Renders `program` as an indented S-expression.
pub fn pretty(program: &Program) -> String {
    let mut out = String::from("(program");
    for stmt in program.iter() {
        newline(&mut out, 1);
        pretty_stmt(&mut out, stmt, 1);
    }
    out.push(')');
    out
}

fn newline(out: &mut String, depth: usize) {
    out.push('\n');
    out.push_str(&INDENT.repeat(depth));
}

fn pretty_stmt(out: &mut String, stmt: &Stmt, depth: usize) {
    match stmt {
        Stmt::Let(_) | Stmt::Expression(_) => out.push_str(&stmt.to_string()),
        Stmt::If(stmt) => {
            out.push_str(&format!("(if {}", stmt.condition));
            newline(out, depth + 1);
            pretty_block(out, &stmt.then_body, depth + 1);
            if let Some(else_body) = &stmt.else_body {
                newline(out, depth + 1);
                pretty_block(out, else_body, depth + 1);
            }
            out.push(')');
        }
        Stmt::While(stmt) => {
            out.push_str(&format!("(while {}", stmt.condition));
            newline(out, depth + 1);
            pretty_block(out, &stmt.body, depth + 1);
            out.push(')');
        }
    }
}

fn pretty_block(out: &mut String, block: &BlockStmt, depth: usize) {
    out.push_str("(block");
    for stmt in block.iter() {
        newline(out, depth + 1);
        pretty_stmt(out, stmt, depth + 1);
    }
    out.push(')');
}
