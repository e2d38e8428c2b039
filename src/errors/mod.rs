//! Error types and error handling for the compiler.
//!
//! This module defines the error types shared by the lexer and the parser:
//!
//! - Error structures with source position information
//! - Lexical and syntax error variants
//! - Helpful error messages and suggestions

pub mod errors;

#[cfg(test)]
mod tests;
