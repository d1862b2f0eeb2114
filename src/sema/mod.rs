//! Semantic analysis: validates builtin-function usage before code generation.
//!
//! The analyzer only collects diagnostics; it never rejects a program on
//! its own. The driver decides whether error-severity diagnostics block
//! compilation (see [`crate::SemanticsPolicy`]).

use crate::ast::{Expr, FunctionCall, Program, Stmt, StmtKind};
use crate::builtins;
use crate::span::Span;

/// Diagnostic severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// What a diagnostic is about.
#[derive(Debug, Clone, PartialEq)]
pub enum DiagnosticKind {
    /// Call to a name without the builtin prefix.
    UnknownFunction(String),
    /// Call to a builtin-prefixed name that is not registered.
    UnknownBuiltin(String),
    /// Print argument that is not an Int or String literal.
    InvalidArgumentType(String),
    /// print() without arguments prints an empty line.
    EmptyPrintCall,
}

impl DiagnosticKind {
    pub fn severity(&self) -> Severity {
        match self {
            DiagnosticKind::UnknownFunction(_)
            | DiagnosticKind::UnknownBuiltin(_)
            | DiagnosticKind::InvalidArgumentType(_) => Severity::Error,
            DiagnosticKind::EmptyPrintCall => Severity::Warning,
        }
    }
}

/// A single semantic diagnostic, tied to the source span it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub span: Span,
}

impl Diagnostic {
    pub fn severity(&self) -> Severity {
        self.kind.severity()
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            DiagnosticKind::UnknownFunction(name) => {
                write!(f, "Unknown function '{}' at {}", name, self.span)
            }
            DiagnosticKind::UnknownBuiltin(name) => {
                write!(f, "Unknown builtin function '{}' at {}", name, self.span)
            }
            DiagnosticKind::InvalidArgumentType(name) => write!(
                f,
                "Function '{}' expected an Int or String literal at {}",
                name, self.span
            ),
            DiagnosticKind::EmptyPrintCall => write!(
                f,
                "print() without arguments will print an empty line at {}",
                self.span
            ),
        }
    }
}

/// The semantic analyzer: walks the program and collects diagnostics in
/// depth-first source order.
pub struct Analyzer {
    diagnostics: Vec<Diagnostic>,
}

impl Analyzer {
    pub fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
        }
    }

    pub fn analyze(mut self, program: &Program) -> Vec<Diagnostic> {
        for stmt in &program.statements {
            self.check_stmt(stmt);
        }
        self.diagnostics
    }

    fn check_stmt(&mut self, stmt: &Stmt) {
        match &stmt.kind {
            StmtKind::Call(call) => self.check_call(call),
        }
    }

    fn check_call(&mut self, call: &FunctionCall) {
        if !builtins::has_builtin_prefix(&call.name) {
            self.report(DiagnosticKind::UnknownFunction(call.name.clone()), call.span);
            return;
        }

        if !builtins::is_builtin(&call.name) {
            self.report(DiagnosticKind::UnknownBuiltin(call.name.clone()), call.span);
            return;
        }

        // Currently the only registered builtin is print.
        match &call.argument {
            Some(arg) => self.check_print_argument(&call.name, arg),
            None => self.report(DiagnosticKind::EmptyPrintCall, call.span),
        }
    }

    fn check_print_argument(&mut self, name: &str, arg: &Expr) {
        if !arg.is_literal() {
            self.report(DiagnosticKind::InvalidArgumentType(name.to_string()), arg.span);
        }
    }

    fn report(&mut self, kind: DiagnosticKind, span: Span) {
        self.diagnostics.push(Diagnostic { kind, span });
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}
