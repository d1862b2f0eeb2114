//! Error types for all pipeline phases.

use crate::span::Span;
use crate::vm::ConstKind;
use thiserror::Error;

/// Lexer errors.
#[derive(Debug, Error)]
pub enum LexerError {
    #[error("Unexpected character '{0}' at {1}")]
    UnexpectedChar(char, Span),

    #[error("Unterminated string at {0}")]
    UnterminatedString(Span),

    #[error("Invalid escape sequence '\\{0}' at {1}")]
    InvalidEscape(char, Span),

    #[error("Invalid number '{0}' at {1}")]
    InvalidNumber(String, Span),
}

impl LexerError {
    pub fn unexpected_char(c: char, span: Span) -> Self {
        Self::UnexpectedChar(c, span)
    }

    pub fn unterminated_string(span: Span) -> Self {
        Self::UnterminatedString(span)
    }

    pub fn invalid_escape(c: char, span: Span) -> Self {
        Self::InvalidEscape(c, span)
    }

    pub fn invalid_number(s: impl Into<String>, span: Span) -> Self {
        Self::InvalidNumber(s.into(), span)
    }

    pub fn span(&self) -> Span {
        match self {
            Self::UnexpectedChar(_, span) => *span,
            Self::UnterminatedString(span) => *span,
            Self::InvalidEscape(_, span) => *span,
            Self::InvalidNumber(_, span) => *span,
        }
    }
}

/// Parser errors.
#[derive(Debug, Error)]
pub enum ParserError {
    #[error("Unexpected token '{found}', expected {expected} at {span}")]
    UnexpectedToken {
        expected: String,
        found: String,
        span: Span,
    },

    #[error("Unexpected end of input at {0}")]
    UnexpectedEof(Span),
}

impl ParserError {
    pub fn unexpected_token(
        expected: impl Into<String>,
        found: impl Into<String>,
        span: Span,
    ) -> Self {
        Self::UnexpectedToken {
            expected: expected.into(),
            found: found.into(),
            span,
        }
    }

    pub fn unexpected_eof(span: Span) -> Self {
        Self::UnexpectedEof(span)
    }

    pub fn span(&self) -> Span {
        match self {
            Self::UnexpectedToken { span, .. } => *span,
            Self::UnexpectedEof(span) => *span,
        }
    }
}

/// Semantic rejection under [`crate::SemanticsPolicy::Strict`].
///
/// Under the default advisory policy semantic diagnostics are printed and
/// never become errors; this type only exists for the strict policy.
#[derive(Debug, Error)]
pub enum SemanticError {
    #[error("{errors} semantic error(s) reported, aborting before code generation")]
    Rejected { errors: usize },
}

impl SemanticError {
    pub fn rejected(errors: usize) -> Self {
        Self::Rejected { errors }
    }
}

/// Runtime faults. Each aborts the current `execute` call immediately.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RuntimeError {
    /// An instruction referenced a pool slot that does not exist or whose
    /// type does not match. Correct code generation never produces this.
    #[error("Invalid constant reference: no {kind} constant at index {index}")]
    InvalidConstantRef { index: usize, kind: ConstKind },

    /// A native call needed an operand but the stack was empty.
    #[error("Stack underflow during native call '{target}'")]
    StackUnderflow { target: String },
}

impl RuntimeError {
    pub fn invalid_constant_ref(index: usize, kind: ConstKind) -> Self {
        Self::InvalidConstantRef { index, kind }
    }

    pub fn stack_underflow(target: impl Into<String>) -> Self {
        Self::StackUnderflow {
            target: target.into(),
        }
    }
}

/// A unified error type for all phases.
#[derive(Debug, Error)]
pub enum RillError {
    #[error("Lexer error: {0}")]
    Lexer(#[from] LexerError),

    #[error("Parser error: {0}")]
    Parser(#[from] ParserError),

    #[error("Semantic error: {0}")]
    Semantic(#[from] SemanticError),

    #[error("Runtime error: {0}")]
    Runtime(#[from] RuntimeError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
