//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into a [`Program`](crate::ast::ast::Program). Expressions are parsed Pratt
//! style with binding powers for precedence. It handles:
//!
//! - Statement parsing (`let`, `if`/`else`, `while`, expression statements)
//! - Expression parsing (binary operators, identifiers, integer literals, grouping)
//! - Fail-fast error reporting with the expected and found token
//!
//! The parser uses NUD (null denotation) and LED (left denotation) functions
//! for expression parsing with binding power for precedence handling.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
