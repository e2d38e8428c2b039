//! Integration tests for the lexing and parsing pipeline.
//!
//! These tests drive the public API the way a front end does: source text
//! goes through `tokenize` and `parse`, and the result is rendered.

use mini_compiler::{
    ast::{ast::Stmt, printer::pretty},
    errors::errors::{ErrorImpl, ErrorPhase},
    lexer::{
        lexer::tokenize,
        tokens::{TokenCategory, TokenKind},
    },
    parse_source,
    parser::parser::parse,
    render_error, Position,
};

#[test]
fn test_let_statement_tokens() {
    let tokens = tokenize("let x = 5;").unwrap();
    let categories: Vec<TokenCategory> = tokens.iter().map(|t| t.category()).collect();

    assert_eq!(
        categories,
        vec![
            TokenCategory::Keyword,
            TokenCategory::Identifier,
            TokenCategory::Operator,
            TokenCategory::Number,
            TokenCategory::Punctuation,
            TokenCategory::EndOfInput,
        ]
    );
    assert_eq!(tokens[3].literal, Some(5));
}

#[test]
fn test_digit_run_followed_by_letter_fails() {
    let error = tokenize("1a").unwrap_err();

    assert_eq!(error.get_phase(), ErrorPhase::Lexical);
    assert_eq!(error.get_position(), &Position::new(1, 2));
}

#[test]
fn test_precedence_program() {
    let program = parse(tokenize("let x = 1 + 2 * 3;").unwrap()).unwrap();
    assert_eq!(program.to_string(), "(program (let x (+ 1 (* 2 3))))");
}

#[test]
fn test_if_else_program() {
    let program = parse(tokenize("if (x) { let y = 1; } else { let y = 2; }").unwrap()).unwrap();

    match &program.body[0] {
        Stmt::If(stmt) => {
            assert_eq!(stmt.then_body.len(), 1);
            assert_eq!(stmt.else_body.as_ref().map(|b| b.len()), Some(1));
        }
        other => panic!("expected if statement, got {:?}", other),
    }
}

#[test]
fn test_missing_initializer_fails() {
    let error = parse(tokenize("let x = ;").unwrap()).unwrap_err();

    assert_eq!(error.get_phase(), ErrorPhase::Syntax);
    match error.get_internal_error() {
        ErrorImpl::UnexpectedToken { expected, found } => {
            assert_eq!(expected, "expression");
            assert_eq!(found.category(), TokenCategory::Punctuation);
            assert_eq!(found.value, ";");
        }
        other => panic!("expected UnexpectedToken, got {:?}", other),
    }
}

#[test]
fn test_empty_source() {
    let tokens = tokenize("").unwrap();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EOF);

    let program = parse(tokens).unwrap();
    assert!(program.body.is_empty());
}

#[test]
fn test_larger_program() {
    let source = "
        let total = 0;
        let i = 10;
        while (i > 0) {
            let total = total + i * 2;
            let i = i - 1;
        }
        if (total == 110) {
            total;
        } else {
            0;
        }
    ";

    let program = parse_source(source).unwrap();
    assert_eq!(program.body.len(), 4);
    assert_eq!(program.body[2].get_span().start, Position::new(4, 9));

    let expected = "\
(program
  (let total 0)
  (let i 10)
  (while (> i 0)
    (block
      (let total (+ total (* i 2)))
      (let i (- i 1))))
  (if (== total 110)
    (block
      (expr total))
    (block
      (expr 0))))";
    assert_eq!(pretty(&program), expected);
}

#[test]
fn test_rendered_lex_error() {
    let source = "let x = 1;\nlet y = x $ 2;";
    let error = parse_source(source).unwrap_err();
    let rendered = render_error(&error, source, "demo.mc");

    assert_eq!(
        rendered,
        "Error: UnrecognisedToken\n-> demo.mc:2:11\n  |\n2 | let y = x $ 2;\n  | ----------^"
    );
}

#[test]
fn test_rendered_parse_error() {
    let source = "while (x) {\n  x;\n";
    let error = parse_source(source).unwrap_err();
    let rendered = render_error(&error, source, "demo.mc");

    assert!(rendered.starts_with("Error: UnexpectedToken (expected `}`, found end of input)\n"));
    assert!(rendered.contains("-> demo.mc:3:1\n"));
}

#[test]
fn test_relexed_lexemes_parse_identically() {
    let source = "let a=(1+2)*b;while(a<10){a;}";
    let tokens = tokenize(source).unwrap();
    let joined = tokens
        .iter()
        .map(|t| t.value.as_str())
        .filter(|v| !v.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    assert_eq!(parse_source(source).unwrap().to_string(), parse_source(&joined).unwrap().to_string());
}
