//! Parser tests.

use pretty_assertions::assert_eq;

use crate::ast::*;
use crate::builtins;
use crate::error::ParserError;
use crate::lexer::Scanner;
use crate::parser::Parser;

fn parse(source: &str) -> Program {
    let tokens = Scanner::new(source).scan_tokens().unwrap();
    Parser::new(tokens).parse().unwrap()
}

fn parse_err(source: &str) -> ParserError {
    let tokens = Scanner::new(source).scan_tokens().unwrap();
    Parser::new(tokens).parse().unwrap_err()
}

fn single_call(source: &str) -> FunctionCall {
    let program = parse(source);
    assert_eq!(program.statements.len(), 1);
    match program.statements.into_iter().next().unwrap().kind {
        StmtKind::Call(call) => call,
    }
}

#[test]
fn test_empty_program() {
    let program = parse("");
    assert!(program.statements.is_empty());
}

#[test]
fn test_print_string() {
    let call = single_call("print(\"Hello\");");
    assert_eq!(call.name, builtins::PRINT);
    match call.argument.unwrap().kind {
        ExprKind::StringLiteral(s) => assert_eq!(s, "Hello"),
        other => panic!("Expected string literal, got {:?}", other),
    }
}

#[test]
fn test_print_int() {
    let call = single_call("print(42);");
    assert_eq!(call.name, builtins::PRINT);
    assert_eq!(
        call.argument.unwrap().kind,
        ExprKind::IntLiteral(42)
    );
}

#[test]
fn test_print_no_argument() {
    let call = single_call("print();");
    assert_eq!(call.name, builtins::PRINT);
    assert!(call.argument.is_none());
}

#[test]
fn test_print_keyword_canonicalizes() {
    // The keyword lowers to the canonical builtin name, so the analyzer
    // and codegen only ever see registry names.
    let call = single_call("print(1);");
    assert!(builtins::is_builtin(&call.name));
}

#[test]
fn test_identifier_call_keeps_name() {
    let call = single_call("foo();");
    assert_eq!(call.name, "foo");
    assert!(call.argument.is_none());
}

#[test]
fn test_builtin_spelled_out() {
    let call = single_call("__builtin_print(\"hi\");");
    assert_eq!(call.name, builtins::PRINT);
}

#[test]
fn test_variable_argument() {
    let call = single_call("print(x);");
    assert_eq!(
        call.argument.unwrap().kind,
        ExprKind::Variable("x".to_string())
    );
}

#[test]
fn test_multiple_statements_in_order() {
    let program = parse("print(1); print(2); foo();");
    let names: Vec<_> = program
        .statements
        .iter()
        .map(|s| match &s.kind {
            StmtKind::Call(c) => c.name.as_str(),
        })
        .collect();
    assert_eq!(names, vec![builtins::PRINT, builtins::PRINT, "foo"]);
}

#[test]
fn test_missing_semicolon() {
    let err = parse_err("print(1)");
    assert!(matches!(err, ParserError::UnexpectedEof(_)));
}

#[test]
fn test_missing_close_paren() {
    let err = parse_err("print(1;");
    assert!(matches!(err, ParserError::UnexpectedToken { .. }));
}

#[test]
fn test_bare_expression_rejected() {
    let err = parse_err("42;");
    assert!(matches!(err, ParserError::UnexpectedToken { .. }));
}

#[test]
fn test_statement_span_covers_semicolon() {
    let program = parse("print(7);");
    let span = program.statements[0].span;
    assert_eq!(span.start, 0);
    assert_eq!(span.end, "print(7);".len());
}
