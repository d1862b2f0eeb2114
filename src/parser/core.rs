//! Core parser struct and helper methods.

use crate::ast::*;
use crate::builtins;
use crate::error::ParserError;
use crate::lexer::{Token, TokenKind};
use crate::span::Span;

pub type ParseResult<T> = Result<T, ParserError>;

/// The parser for Rill.
///
/// Grammar:
/// ```text
/// program   := statement* EOF
/// statement := call ";"
/// call      := ( "print" | IDENTIFIER ) "(" expr? ")"
/// expr      := INT | STRING | IDENTIFIER
/// ```
pub struct Parser {
    tokens: Vec<Token>,
    current: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, current: 0 }
    }

    /// Parse a complete program.
    pub fn parse(&mut self) -> ParseResult<Program> {
        let mut statements = Vec::new();

        while !self.is_at_end() {
            statements.push(self.statement()?);
        }

        Ok(Program::new(statements))
    }

    /// statement := call ";"
    fn statement(&mut self) -> ParseResult<Stmt> {
        let call = self.function_call()?;
        let end = self.expect(&TokenKind::Semicolon)?;
        let span = call.span.merge(&end.span);
        Ok(Stmt::new(StmtKind::Call(call), span))
    }

    /// call := ( "print" | IDENTIFIER ) "(" expr? ")"
    ///
    /// The `print` keyword canonicalizes to the registered builtin name;
    /// identifier calls keep their written name.
    fn function_call(&mut self) -> ParseResult<FunctionCall> {
        let name_span = self.current_span();
        let name = match &self.peek().kind {
            TokenKind::Print => {
                self.advance();
                builtins::PRINT.to_string()
            }
            TokenKind::Identifier(name) => {
                let name = name.clone();
                self.advance();
                name
            }
            TokenKind::Eof => return Err(ParserError::unexpected_eof(name_span)),
            other => {
                return Err(ParserError::unexpected_token(
                    "function name",
                    format!("{}", other),
                    name_span,
                ));
            }
        };

        self.expect(&TokenKind::LeftParen)?;
        let argument = if self.check(&TokenKind::RightParen) {
            None
        } else {
            Some(self.expression()?)
        };
        let close = self.expect(&TokenKind::RightParen)?;

        Ok(FunctionCall {
            name,
            argument,
            span: name_span.merge(&close.span),
        })
    }

    /// expr := INT | STRING | IDENTIFIER
    fn expression(&mut self) -> ParseResult<Expr> {
        let span = self.current_span();
        match &self.peek().kind {
            TokenKind::IntLiteral(n) => {
                let n = *n;
                self.advance();
                Ok(Expr::new(ExprKind::IntLiteral(n), span))
            }
            TokenKind::StringLiteral(s) => {
                let s = s.clone();
                self.advance();
                Ok(Expr::new(ExprKind::StringLiteral(s), span))
            }
            TokenKind::Identifier(name) => {
                let name = name.clone();
                self.advance();
                Ok(Expr::new(ExprKind::Variable(name), span))
            }
            TokenKind::Eof => Err(ParserError::unexpected_eof(span)),
            other => Err(ParserError::unexpected_token(
                "expression",
                format!("{}", other),
                span,
            )),
        }
    }

    // ===== Token manipulation =====

    fn advance(&mut self) -> Token {
        if !self.is_at_end() {
            self.current += 1;
        }
        self.tokens[self.current - 1].clone()
    }

    fn peek(&self) -> &Token {
        &self.tokens[self.current]
    }

    fn is_at_end(&self) -> bool {
        self.peek().kind == TokenKind::Eof
    }

    fn check(&self, kind: &TokenKind) -> bool {
        if self.is_at_end() {
            false
        } else {
            std::mem::discriminant(&self.peek().kind) == std::mem::discriminant(kind)
        }
    }

    fn expect(&mut self, kind: &TokenKind) -> ParseResult<Token> {
        if self.check(kind) {
            Ok(self.advance())
        } else if self.is_at_end() {
            Err(ParserError::unexpected_eof(self.current_span()))
        } else {
            Err(ParserError::unexpected_token(
                format!("'{}'", kind),
                format!("{}", self.peek().kind),
                self.current_span(),
            ))
        }
    }

    fn current_span(&self) -> Span {
        self.peek().span
    }
}
