use crate::{
    ast::{
        ast::Expr,
        expressions::{BinaryExpr, BinaryOperator, IdentifierExpr, NumberExpr},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{lookups::BindingPower, parser::Parser};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    parser.enter_nested()?;
    let expr = parse_expr_with_bp(parser, bp);
    parser.exit_nested();
    expr
}

fn parse_expr_with_bp(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    // First parse NUD
    let nud = match parser.get_nud_lookup().get(&parser.current_token_kind()) {
        Some(nud) => *nud,
        None => return Err(parser.unexpected("expression")),
    };

    let mut left = nud(parser)?;

    // Keep folding into lhs while the next operator binds tighter than `bp`.
    // Equal binding power stops the loop, which makes operators left-associative.
    while let Some(next_bp) = parser.get_bp_lookup().get(&parser.current_token_kind()).copied() {
        if next_bp <= bp {
            break;
        }

        let led = match parser.get_led_lookup().get(&parser.current_token_kind()) {
            Some(led) => *led,
            None => break,
        };

        left = led(parser, left, next_bp)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    match parser.current_token_kind() {
        TokenKind::Number => {
            let token = parser.current_token();
            let value = match token.literal {
                Some(value) => value,
                None => token.value.parse().map_err(|_| {
                    Error::new(
                        ErrorImpl::NumberParseError { token: token.value.clone() },
                        token.span.start,
                    )
                })?,
            };

            Ok(Expr::Number(NumberExpr { value, span: parser.advance().span }))
        }
        TokenKind::Identifier => {
            let token = parser.advance();
            Ok(Expr::Identifier(IdentifierExpr { name: token.value.clone(), span: token.span }))
        }
        _ => Err(parser.unexpected("expression")),
    }
}

pub fn parse_binary_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let operator = match BinaryOperator::from_token_kind(parser.current_token_kind()) {
        Some(operator) => operator,
        None => return Err(parser.unexpected("binary operator")),
    };
    parser.advance();

    let right = parse_expr(parser, bp)?;

    Ok(Expr::Binary(BinaryExpr {
        span: left.get_span().to(right.get_span()),
        operator,
        left: Box::new(left),
        right: Box::new(right),
    }))
}

/// `( expr )` yields the inner expression, its span widened to cover the parentheses.
pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let start = parser.expect(TokenKind::OpenParen)?.span;
    let mut expr = parse_expr(parser, BindingPower::Default)?;
    let end = parser.expect(TokenKind::CloseParen)?.span;

    *expr.get_span_mut() = start.to(&end);
    Ok(expr)
}
