use crate::Span;

use super::expressions::Expr;

/// Root node of the AST. Statement order is execution order.
#[derive(Debug, Clone, Default)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

#[derive(Debug, Clone)]
pub enum Stmt {
    Var(VarStmt),
    Array(ArrayStmt),
    If(IfStmt),
    For(ForStmt),
    Print(PrintStmt),
}

impl Stmt {
    pub fn get_span(&self) -> &Span {
        match self {
            Stmt::Var(stmt) => &stmt.span,
            Stmt::Array(stmt) => &stmt.span,
            Stmt::If(stmt) => &stmt.span,
            Stmt::For(stmt) => &stmt.span,
            Stmt::Print(stmt) => &stmt.span,
        }
    }
}

/// `lazy x = <expr>` - also reused for the bare `x = <expr>` assignments
/// in a for loop's init and post slots.
#[derive(Debug, Clone)]
pub struct VarStmt {
    pub name: String,
    pub value: Expr,
    pub span: Span,
}

/// `lazyArray xs = [ ... ]`. Elements are optional: an omitted slot
/// (`[1, , 2]`) is kept as `None` and rendered as a null placeholder.
#[derive(Debug, Clone)]
pub struct ArrayStmt {
    pub name: String,
    pub values: Vec<Option<Expr>>,
    pub span: Span,
}

/// `if <cond> { ... } el { ... }` - the alternative is empty when no `el`
/// branch is present.
#[derive(Debug, Clone)]
pub struct IfStmt {
    pub condition: Expr,
    pub consequence: Vec<Stmt>,
    pub alternative: Vec<Stmt>,
    pub span: Span,
}

/// C-style three-part loop; any of init/condition/post may be omitted.
#[derive(Debug, Clone)]
pub struct ForStmt {
    pub init: Option<VarStmt>,
    pub condition: Option<Expr>,
    pub post: Option<VarStmt>,
    pub body: Vec<Stmt>,
    pub span: Span,
}

/// `lazyPrint(<expr>)`
#[derive(Debug, Clone)]
pub struct PrintStmt {
    pub value: Expr,
    pub span: Span,
}
