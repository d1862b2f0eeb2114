//! Statement AST nodes.

use crate::ast::expr::Expr;
use crate::span::Span;

/// A complete program: an ordered sequence of statements.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

impl Program {
    pub fn new(statements: Vec<Stmt>) -> Self {
        Self { statements }
    }
}

/// A statement in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

impl Stmt {
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// Statement variants.
#[derive(Debug, Clone, PartialEq)]
pub enum StmtKind {
    /// Function call statement: name(arg?);
    Call(FunctionCall),
}

/// A function call: a name plus an optional single argument.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCall {
    /// Canonical function name. The `print` keyword parses to the
    /// registered builtin name; identifier calls keep their written name.
    pub name: String,
    pub argument: Option<Expr>,
    pub span: Span,
}
