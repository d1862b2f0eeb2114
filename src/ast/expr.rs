//! Expression AST nodes.

use crate::span::Span;

/// An expression in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Whether this expression is an Int or String literal, the only
    /// argument forms the print builtin accepts.
    pub fn is_literal(&self) -> bool {
        matches!(
            self.kind,
            ExprKind::IntLiteral(_) | ExprKind::StringLiteral(_)
        )
    }
}

/// All expression variants.
#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    /// Integer literal: 42
    IntLiteral(i64),
    /// String literal: "hello" (unquoted, escapes processed)
    StringLiteral(String),
    /// Variable reference: foo. Parseable, but no construct binds one, so
    /// the analyzer rejects it as a call argument.
    Variable(String),
}
