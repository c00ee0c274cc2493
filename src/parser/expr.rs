use crate::{
    ast::expressions::{BinaryExpr, Expr, IdentifierExpr, IndexExpr, NumberExpr},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    Span,
};

use super::{lookups::BindingPower, parser::Parser};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let nud_handler = match parser.get_nud_lookup().get(&token_kind) {
        Some(handler) => *handler,
        None => {
            return Err(Error::new(
                ErrorImpl::ExpectedExpression {
                    found: parser.current_token().value.clone(),
                },
                parser.get_position(),
            ))
        }
    };

    let mut left = nud_handler(parser)?;

    // While LED and current BP is less than BP of current token, continue parsing lhs
    while *parser
        .get_bp_lookup()
        .get(&parser.current_token_kind())
        .unwrap_or(&BindingPower::Default)
        > bp
    {
        let token_kind = parser.current_token_kind();
        let led_handler = match parser.get_led_lookup().get(&token_kind) {
            Some(handler) => *handler,
            None => {
                return Err(Error::new(
                    ErrorImpl::UnexpectedToken {
                        token: parser.current_token().value.clone(),
                    },
                    parser.get_position(),
                ))
            }
        };

        let operator_bp = *parser.get_bp_lookup().get(&token_kind).unwrap();
        left = led_handler(parser, left, operator_bp)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    match parser.current_token_kind() {
        TokenKind::Number => {
            // The lexer keeps the literal text verbatim; numeric parsing
            // happens here
            let result = parser.current_token().value.parse::<f64>();

            match result {
                Ok(value) => {
                    let token = parser.advance();
                    Ok(Expr::Number(NumberExpr {
                        value,
                        span: token.span.clone(),
                    }))
                }
                Err(_) => Err(Error::new(
                    ErrorImpl::NumberParseError {
                        token: parser.current_token().value.clone(),
                    },
                    parser.get_position(),
                )),
            }
        }
        TokenKind::Identifier => {
            let token = parser.advance().clone();
            Ok(Expr::Identifier(IdentifierExpr {
                name: token.value,
                span: token.span,
            }))
        }
        _ => Err(Error::new(
            ErrorImpl::ExpectedExpression {
                found: parser.current_token().value.clone(),
            },
            parser.get_position(),
        )),
    }
}

pub fn parse_binary_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let operator_token = parser.advance().clone();

    // Recursing with the operator's own binding power keeps same-strength
    // operators left-associative
    let right = parse_expr(parser, bp)?;

    Ok(Expr::Binary(BinaryExpr {
        span: Span {
            start: left.get_span().start.clone(),
            end: right.get_span().end.clone(),
        },
        left: Box::new(left),
        operator: operator_token,
        right: Box::new(right),
    }))
}

pub fn parse_index_expr(parser: &mut Parser, left: Expr, _bp: BindingPower) -> Result<Expr, Error> {
    parser.advance();

    let index = parse_expr(parser, BindingPower::Default)?;
    let end_token = parser.expect(TokenKind::CloseBracket)?;

    Ok(Expr::Index(IndexExpr {
        span: Span {
            start: left.get_span().start.clone(),
            end: end_token.span.end,
        },
        collection: Box::new(left),
        index: Box::new(index),
    }))
}
