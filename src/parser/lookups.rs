use std::collections::HashMap;

use crate::{
    ast::{expressions::Expr, statements::Stmt},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{expr::*, parser::Parser, stmt::*};

/// Binding strengths, weakest to strongest: comparisons bind loosest,
/// then additive, then multiplicative; index access binds tighter than
/// any arithmetic operator.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    Relational,
    Additive,
    Multiplicative,
    Index,
    Primary,
}

pub type StmtHandler = fn(&mut Parser) -> Result<Stmt, Error>;
pub type NUDHandler = fn(&mut Parser) -> Result<Expr, Error>;
pub type LEDHandler = fn(&mut Parser, Expr, BindingPower) -> Result<Expr, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Relational
    parser.led(TokenKind::Less, BindingPower::Relational, parse_binary_expr);
    parser.led(TokenKind::LessEquals, BindingPower::Relational, parse_binary_expr);
    parser.led(TokenKind::Greater, BindingPower::Relational, parse_binary_expr);
    parser.led(TokenKind::GreaterEquals, BindingPower::Relational, parse_binary_expr);
    parser.led(TokenKind::Equals, BindingPower::Relational, parse_binary_expr);
    parser.led(TokenKind::NotEquals, BindingPower::Relational, parse_binary_expr);

    // Additive and multiplicative
    parser.led(TokenKind::Plus, BindingPower::Additive, parse_binary_expr);
    parser.led(TokenKind::Dash, BindingPower::Additive, parse_binary_expr);
    parser.led(TokenKind::Star, BindingPower::Multiplicative, parse_binary_expr);
    parser.led(TokenKind::Slash, BindingPower::Multiplicative, parse_binary_expr);

    // Index access is a postfix operator on any expression
    parser.led(TokenKind::OpenBracket, BindingPower::Index, parse_index_expr);

    // Literals and symbols
    parser.nud(TokenKind::Number, parse_primary_expr);
    parser.nud(TokenKind::Identifier, parse_primary_expr);

    // Statements
    parser.stmt(TokenKind::Var, parse_var_stmt);
    parser.stmt(TokenKind::Array, parse_array_stmt);
    parser.stmt(TokenKind::If, parse_if_stmt);
    parser.stmt(TokenKind::For, parse_for_stmt);
    parser.stmt(TokenKind::Print, parse_print_stmt);
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
pub type LEDLookup = HashMap<TokenKind, LEDHandler>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;
