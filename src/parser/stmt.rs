use crate::{
    ast::{
        ast::{Expr, Stmt},
        statements::{BlockStmt, ExpressionStmt, IfStmt, LetStmt, WhileStmt},
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::parser::Parser;

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    if let Some(handler) = parser.get_stmt_lookup().get(&parser.current_token_kind()).copied() {
        return handler(parser);
    }

    let expression = parse_expr(parser, BindingPower::Default)?;
    let end = parser.expect(TokenKind::Semicolon)?.span;

    Ok(Stmt::Expression(ExpressionStmt {
        span: expression.get_span().to(&end),
        expression,
    }))
}

pub fn parse_let_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span;

    let error = parser.unexpected("identifier after `let`");
    let identifier = parser.expect_error(TokenKind::Identifier, Some(error))?.value;

    parser.expect(TokenKind::Assignment)?;
    let value = parse_expr(parser, BindingPower::Default)?;
    let end = parser.expect(TokenKind::Semicolon)?.span;

    Ok(Stmt::Let(LetStmt {
        identifier,
        value,
        span: start.to(&end),
    }))
}

/// Parses `( expr )`, the condition of `if` and `while`.
fn parse_condition(parser: &mut Parser) -> Result<Expr, Error> {
    parser.expect(TokenKind::OpenParen)?;
    let condition = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(condition)
}

pub fn parse_if_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span;

    let condition = parse_condition(parser)?;
    let then_body = parse_block(parser)?;

    let else_body = if parser.current_token_kind() == TokenKind::Else {
        parser.advance();
        Some(parse_block(parser)?)
    } else {
        None
    };

    let end = else_body.as_ref().unwrap_or(&then_body).span;

    Ok(Stmt::If(IfStmt {
        condition,
        then_body,
        else_body,
        span: start.to(&end),
    }))
}

pub fn parse_while_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span;

    let condition = parse_condition(parser)?;
    let body = parse_block(parser)?;

    Ok(Stmt::While(WhileStmt {
        span: start.to(&body.span),
        condition,
        body,
    }))
}

pub fn parse_block(parser: &mut Parser) -> Result<BlockStmt, Error> {
    parser.enter_nested()?;
    let block = parse_block_body(parser);
    parser.exit_nested();
    block
}

fn parse_block_body(parser: &mut Parser) -> Result<BlockStmt, Error> {
    let start = parser.expect(TokenKind::OpenCurly)?.span;

    let mut body = Vec::new();
    loop {
        match parser.current_token_kind() {
            TokenKind::CloseCurly => break,
            TokenKind::EOF => return Err(parser.unexpected(TokenKind::CloseCurly.describe())),
            _ => body.push(parse_stmt(parser)?),
        }
    }

    let end = parser.expect(TokenKind::CloseCurly)?.span;

    Ok(BlockStmt {
        body,
        span: start.to(&end),
    })
}
