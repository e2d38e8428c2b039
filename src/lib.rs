#![allow(clippy::module_inception)]

use std::fmt::Display;

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorTip},
    lexer::lexer::tokenize,
    parser::parser::parse,
};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// A 1-based line/column location in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }

    pub fn start() -> Self {
        Position { line: 1, column: 1 }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn new(start: Position, end: Position) -> Self {
        Span { start, end }
    }

    /// Span covering both `self` and `other`, assuming `self` comes first.
    pub fn to(&self, other: &Span) -> Span {
        Span {
            start: self.start,
            end: other.end,
        }
    }
}

/// Tokenizes and parses `source` in one go.
pub fn parse_source(source: &str) -> Result<Program, Error> {
    let tokens = tokenize(source)?;
    parse(tokens)
}

/// Returns the text of the given 1-based line, without its line terminator.
pub fn get_line_at_position(source: &str, position: &Position) -> Option<String> {
    source
        .split('\n')
        .nth(position.line.saturating_sub(1) as usize)
        .map(|line| line.trim_end_matches('\r').to_string())
}

/// Renders an error as a caret diagnostic pointing into `source`.
pub fn render_error(error: &Error, source: &str, file: &str) -> String {
    /*
        Error: message
        -> input.mc:20:9
           |
        20 | let a = #;
           | --------^
    */

    let position = error.get_position();
    let line_text = get_line_at_position(source, position).unwrap_or_default();

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    let mut out = String::new();
    match error.get_tip() {
        ErrorTip::None => out.push_str(&format!("Error: {}\n", error.get_error_name())),
        tip => out.push_str(&format!("Error: {} ({})\n", error.get_error_name(), tip)),
    }
    out.push_str(&format!("-> {}:{}\n", file, position));
    out.push_str(&format!("{:>padding$}\n", "|"));

    let removed_whitespace = leading_whitespace(&line_text);
    let trimmed: String = line_text.chars().skip(removed_whitespace).collect();
    out.push_str(&format!("{} | {}\n", line_string, trimmed.trim_end()));

    let arrows = (position.column as usize)
        .saturating_sub(removed_whitespace)
        .max(1);

    out.push_str(&format!("{:>padding$} {:->arrows$}", "|", "^"));
    out
}

fn leading_whitespace(string: &str) -> usize {
    string.chars().take_while(|c| *c == ' ' || *c == '\t').count()
}
