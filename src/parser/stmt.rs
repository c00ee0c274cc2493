use crate::{
    ast::statements::{ArrayStmt, ForStmt, IfStmt, PrintStmt, Stmt, VarStmt},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
    Span,
};

use super::parser::Parser;

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    if let Some(handler) = parser.get_stmt_lookup().get(&parser.current_token_kind()).copied() {
        return handler(parser);
    }

    // Every non-statement leading token costs a diagnostic; nothing is
    // skipped silently. The token is consumed so recovery makes progress.
    let token = parser.advance().clone();
    match token.kind {
        TokenKind::While | TokenKind::In => Err(Error::new(
            ErrorImpl::ReservedKeyword { keyword: token.value },
            token.span.start,
        )),
        TokenKind::Illegal => Err(Error::new(
            ErrorImpl::UnrecognisedToken { token: token.value },
            token.span.start,
        )),
        _ => Err(Error::new(
            ErrorImpl::ExpectedStatement { found: token.value },
            token.span.start,
        )),
    }
}

/// Statements may optionally be terminated by a semicolon.
fn eat_terminator(parser: &mut Parser) {
    if parser.current_token_kind() == TokenKind::Semicolon {
        parser.advance();
    }
}

pub fn parse_var_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start_token = parser.advance().clone();

    let name = parser.expect(TokenKind::Identifier)?.value;
    parser.expect(TokenKind::Assignment)?;
    let value = parse_expr(parser, BindingPower::Default)?;

    let span = Span {
        start: start_token.span.start,
        end: value.get_span().end.clone(),
    };
    eat_terminator(parser);

    Ok(Stmt::Var(VarStmt { name, value, span }))
}

pub fn parse_array_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start_token = parser.advance().clone();

    let name = parser.expect(TokenKind::Identifier)?.value;
    parser.expect(TokenKind::Assignment)?;
    parser.expect(TokenKind::OpenBracket)?;

    let mut values = vec![];

    if parser.current_token_kind() != TokenKind::CloseBracket {
        loop {
            if matches!(
                parser.current_token_kind(),
                TokenKind::Comma | TokenKind::CloseBracket
            ) {
                // Omitted element, kept as a null placeholder
                values.push(None);
            } else {
                values.push(Some(parse_expr(parser, BindingPower::Default)?));
            }

            if parser.current_token_kind() == TokenKind::Comma {
                parser.advance();
                if parser.current_token_kind() == TokenKind::CloseBracket {
                    break; // trailing comma
                }
            } else {
                break;
            }
        }
    }

    let end_token = parser.expect(TokenKind::CloseBracket)?;

    let span = Span {
        start: start_token.span.start,
        end: end_token.span.end,
    };
    eat_terminator(parser);

    Ok(Stmt::Array(ArrayStmt { name, values, span }))
}

pub fn parse_if_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start_token = parser.advance().clone();

    // No parentheses required around the condition
    let condition = parse_expr(parser, BindingPower::Default)?;

    parser.expect(TokenKind::OpenCurly)?;
    let consequence = parse_block(parser);
    let mut end_token = parser.expect(TokenKind::CloseCurly)?;

    let mut alternative = vec![];
    if parser.current_token_kind() == TokenKind::Else {
        parser.advance();
        parser.expect(TokenKind::OpenCurly)?;
        alternative = parse_block(parser);
        end_token = parser.expect(TokenKind::CloseCurly)?;
    }

    Ok(Stmt::If(IfStmt {
        condition,
        consequence,
        alternative,
        span: Span {
            start: start_token.span.start,
            end: end_token.span.end,
        },
    }))
}

pub fn parse_for_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start_token = parser.advance().clone();

    parser.expect(TokenKind::OpenParen)?;

    // Each of init/condition/post may be omitted, signaled by an
    // immediate `;` (or `)` for the post slot)
    let init = if parser.current_token_kind() != TokenKind::Semicolon {
        Some(parse_assignment(parser)?)
    } else {
        None
    };
    parser.expect(TokenKind::Semicolon)?;

    let condition = if parser.current_token_kind() != TokenKind::Semicolon {
        Some(parse_expr(parser, BindingPower::Default)?)
    } else {
        None
    };
    parser.expect(TokenKind::Semicolon)?;

    let post = if parser.current_token_kind() != TokenKind::CloseParen {
        Some(parse_assignment(parser)?)
    } else {
        None
    };
    parser.expect(TokenKind::CloseParen)?;

    parser.expect(TokenKind::OpenCurly)?;
    let body = parse_block(parser);
    let end_token = parser.expect(TokenKind::CloseCurly)?;

    Ok(Stmt::For(ForStmt {
        init,
        condition,
        post,
        body,
        span: Span {
            start: start_token.span.start,
            end: end_token.span.end,
        },
    }))
}

/// Bare `identifier = expression`, only legal in a for loop's init and
/// post slots.
fn parse_assignment(parser: &mut Parser) -> Result<VarStmt, Error> {
    let name_token = parser.expect(TokenKind::Identifier)?;
    parser.expect(TokenKind::Assignment)?;
    let value = parse_expr(parser, BindingPower::Default)?;

    let span = Span {
        start: name_token.span.start,
        end: value.get_span().end.clone(),
    };

    Ok(VarStmt {
        name: name_token.value,
        value,
        span,
    })
}

pub fn parse_print_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start_token = parser.advance().clone();

    parser.expect(TokenKind::OpenParen)?;
    let value = parse_expr(parser, BindingPower::Default)?;
    let end_token = parser.expect(TokenKind::CloseParen)?;

    let span = Span {
        start: start_token.span.start,
        end: end_token.span.end,
    };
    eat_terminator(parser);

    Ok(Stmt::Print(PrintStmt { value, span }))
}

/// Parses statements until `}` or EOF. Bad statements inside a block are
/// reported and skipped the same way top-level ones are; the closing `}`
/// is left for the caller to consume.
pub fn parse_block(parser: &mut Parser) -> Vec<Stmt> {
    let mut statements = vec![];

    while parser.current_token_kind() != TokenKind::CloseCurly
        && parser.current_token_kind() != TokenKind::EOF
    {
        match parse_stmt(parser) {
            Ok(stmt) => statements.push(stmt),
            Err(error) => {
                parser.report(error);
                parser.synchronize();
            }
        }
    }

    statements
}
