use crate::{lexer::tokens::Token, Span};

#[derive(Debug, Clone)]
pub enum Expr {
    Identifier(IdentifierExpr),
    Number(NumberExpr),
    Binary(BinaryExpr),
    Index(IndexExpr),
}

impl Expr {
    pub fn get_span(&self) -> &Span {
        match self {
            Expr::Identifier(expr) => &expr.span,
            Expr::Number(expr) => &expr.span,
            Expr::Binary(expr) => &expr.span,
            Expr::Index(expr) => &expr.span,
        }
    }
}

#[derive(Debug, Clone)]
pub struct IdentifierExpr {
    pub name: String,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct NumberExpr {
    pub value: f64,
    pub span: Span,
}

/// Infix operation; the operator token is kept whole so the generator can
/// reuse its source text.
#[derive(Debug, Clone)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub operator: Token,
    pub right: Box<Expr>,
    pub span: Span,
}

/// `collection[index]`
#[derive(Debug, Clone)]
pub struct IndexExpr {
    pub collection: Box<Expr>,
    pub index: Box<Expr>,
    pub span: Span,
}
