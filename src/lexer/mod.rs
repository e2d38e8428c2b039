//! Lexical analysis module for the compiler.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for parsing. It handles:
//!
//! - Tokenization of source code using an ordered table of regex patterns
//! - Recognition of keywords, identifiers, integer literals, operators and punctuation
//! - Line/column tracking for error reporting
//! - Whitespace skipping

pub mod lexer;
pub mod tokens;
