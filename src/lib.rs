//! Rill: a minimal language compiled to typed bytecode and executed on a
//! stack-based virtual machine.
//!
//! The pipeline is lex → parse → semantic analysis → codegen → execute.
//! Syntax errors abort; semantic diagnostics are advisory by default and
//! only block under [`SemanticsPolicy::Strict`].

pub mod ast;
pub mod builtins;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod sema;
pub mod span;
pub mod vm;

use colored::Colorize;

use error::{RillError, SemanticError};
use sema::{Analyzer, Diagnostic, Severity};
use vm::{disassemble, CodeGen, CompiledProgram, Vm};

/// Whether error-severity semantic diagnostics block compilation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SemanticsPolicy {
    /// Print diagnostics and keep going (the default): even an invalid call
    /// compiles and runs as far as it can.
    #[default]
    Advisory,
    /// Abort before code generation if any error-severity diagnostic was
    /// reported. Warnings never block.
    Strict,
}

/// Options for running a Rill program.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    pub semantics: SemanticsPolicy,
    /// Print the compiled bytecode before executing.
    pub disassemble: bool,
}

/// Run a Rill program with default options.
pub fn run(source: &str) -> Result<(), RillError> {
    run_with_options(source, &RunOptions::default())
}

/// Run a Rill program under the strict semantics policy.
pub fn run_strict(source: &str) -> Result<(), RillError> {
    run_with_options(
        source,
        &RunOptions {
            semantics: SemanticsPolicy::Strict,
            ..Default::default()
        },
    )
}

/// Run a Rill program with full control over options.
pub fn run_with_options(source: &str, options: &RunOptions) -> Result<(), RillError> {
    // Lexing and parsing: errors abort the pipeline.
    let tokens = lexer::Scanner::new(source).scan_tokens()?;
    let program = parser::Parser::new(tokens).parse()?;

    // Semantic analysis: collected and reported, advisory by default.
    let diagnostics = Analyzer::new().analyze(&program);
    report_diagnostics(&diagnostics);

    if options.semantics == SemanticsPolicy::Strict {
        let errors = diagnostics
            .iter()
            .filter(|d| d.severity() == Severity::Error)
            .count();
        if errors > 0 {
            return Err(SemanticError::rejected(errors).into());
        }
    }

    // Codegen and execution.
    let compiled = CodeGen::compile(&program);

    if options.disassemble {
        println!("{}", disassemble(&compiled));
        println!("---");
    }

    let mut vm = Vm::new();
    vm.execute(&compiled)?;

    Ok(())
}

/// Analyze a Rill program without running it, returning its diagnostics.
pub fn analyze(source: &str) -> Result<Vec<Diagnostic>, RillError> {
    let tokens = lexer::Scanner::new(source).scan_tokens()?;
    let program = parser::Parser::new(tokens).parse()?;
    Ok(Analyzer::new().analyze(&program))
}

/// Compile a Rill program to bytecode without running it.
pub fn compile(source: &str) -> Result<CompiledProgram, RillError> {
    let tokens = lexer::Scanner::new(source).scan_tokens()?;
    let program = parser::Parser::new(tokens).parse()?;
    Ok(CodeGen::compile(&program))
}

fn report_diagnostics(diagnostics: &[Diagnostic]) {
    for diagnostic in diagnostics {
        let tag = match diagnostic.severity() {
            Severity::Warning => "warning".yellow().bold(),
            Severity::Error => "error".red().bold(),
        };
        eprintln!("{}: {}", tag, diagnostic);
    }
}
