//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorPhase, ErrorTip};
use crate::lexer::tokens::{Token, TokenKind};
use crate::{Position, Span};

fn semicolon_at(line: u32, column: u32) -> Token {
    Token {
        kind: TokenKind::Semicolon,
        value: ";".to_string(),
        literal: None,
        span: Span::new(Position::new(line, column), Position::new(line, column + 1)),
    }
}

#[test]
fn test_error_creation() {
    let error = Error::new(ErrorImpl::UnrecognisedToken { character: '@' }, Position::new(1, 10));

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_phase(), ErrorPhase::Lexical);
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: "expression".to_string(),
            found: semicolon_at(3, 7),
        },
        Position::new(3, 7),
    );

    assert_eq!(error.get_position(), &Position::new(3, 7));
    assert_eq!(error.get_phase(), ErrorPhase::Syntax);
}

#[test]
fn test_malformed_number_error() {
    let error = Error::new(
        ErrorImpl::MalformedNumber { token: "1".to_string(), character: 'a' },
        Position::new(1, 2),
    );

    assert_eq!(error.get_error_name(), "MalformedNumber");
    assert_eq!(error.get_phase(), ErrorPhase::Lexical);
}

#[test]
fn test_number_parse_error() {
    let error = Error::new(
        ErrorImpl::NumberParseError { token: "99999999999999999999".to_string() },
        Position::new(1, 1),
    );

    assert_eq!(error.get_error_name(), "NumberParseError");
    assert!(matches!(error.get_tip(), ErrorTip::Suggestion(_)));
}

#[test]
fn test_nesting_too_deep_error() {
    let error = Error::new(ErrorImpl::NestingTooDeep { limit: 128 }, Position::new(1, 129));

    assert_eq!(error.get_error_name(), "NestingTooDeep");
    assert_eq!(error.get_phase(), ErrorPhase::Syntax);
    assert_eq!(error.to_string(), "nesting too deep: more than 128 levels at 1:129");
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(ErrorImpl::UnrecognisedToken { character: '@' }, Position::new(1, 1));

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: "expression".to_string(),
            found: semicolon_at(1, 9),
        },
        Position::new(1, 9),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert_eq!(tip, "expected expression, found punctuation \";\""),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_error_display() {
    let error = Error::new(ErrorImpl::UnrecognisedToken { character: '#' }, Position::new(2, 4));
    assert_eq!(error.to_string(), "unrecognised character '#' at 2:4");

    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: "`)`".to_string(),
            found: semicolon_at(1, 5),
        },
        Position::new(1, 5),
    );
    assert_eq!(error.to_string(), "expected `)`, found punctuation \";\" at 1:5");
}

#[test]
fn test_error_is_std_error() {
    fn takes_error(_: &dyn std::error::Error) {}

    let error = Error::new(ErrorImpl::UnrecognisedToken { character: '$' }, Position::new(1, 1));
    takes_error(&error);
}
