//! AST-to-bytecode code generation.
//!
//! Single pass: walks the AST once, emitting instructions and interning
//! literals into the constant pool as it goes. Output is a pure function of
//! the input tree: identical trees yield identical code and pool contents.

use crate::ast::{Expr, ExprKind, FunctionCall, Program, Stmt, StmtKind};
use crate::builtins;

use super::opcode::{Op, NATIVE_STDOUT};
use super::pool::{ConstKind, ConstantPool};

/// A compiled program: the instruction sequence plus the constant pool its
/// `LoadConst` instructions reference. Produced together, executed together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledProgram {
    pub code: Vec<Op>,
    pub pool: ConstantPool,
}

/// The code generator.
///
/// Assumes the tree has already been through semantic analysis: constructs
/// flagged by the analyzer lower to nothing here. Generation itself cannot
/// fail.
pub struct CodeGen {
    code: Vec<Op>,
    pool: ConstantPool,
}

impl CodeGen {
    fn new() -> Self {
        Self {
            code: Vec::new(),
            pool: ConstantPool::new(),
        }
    }

    /// Compile a full program. The sequence always ends with exactly one
    /// trailing `Halt`, appended after all statements.
    pub fn compile(program: &Program) -> CompiledProgram {
        let mut gen = CodeGen::new();
        for stmt in &program.statements {
            gen.gen_stmt(stmt);
        }
        gen.emit(Op::Halt);

        CompiledProgram {
            code: gen.code,
            pool: gen.pool,
        }
    }

    fn gen_stmt(&mut self, stmt: &Stmt) {
        match &stmt.kind {
            StmtKind::Call(call) => self.gen_call(call),
        }
    }

    fn gen_call(&mut self, call: &FunctionCall) {
        if call.name != builtins::PRINT {
            // Unknown or unregistered name: the analyzer already reported
            // it, so this call contributes no instructions.
            return;
        }

        match &call.argument {
            Some(arg) => self.gen_expr(arg),
            None => {
                // print() prints an empty line.
                let index = self.pool.add_string("");
                self.emit(Op::LoadConst {
                    kind: ConstKind::Str,
                    index,
                });
            }
        }
        self.emit(Op::NativeCall(NATIVE_STDOUT.to_string()));
    }

    fn gen_expr(&mut self, expr: &Expr) {
        match &expr.kind {
            ExprKind::IntLiteral(n) => {
                let index = self.pool.add_int(*n);
                self.emit(Op::LoadConst {
                    kind: ConstKind::Int,
                    index,
                });
            }
            ExprKind::StringLiteral(s) => {
                let index = self.pool.add_string(s.clone());
                self.emit(Op::LoadConst {
                    kind: ConstKind::Str,
                    index,
                });
            }
            // Not a literal: no load is emitted. The analyzer has flagged
            // this; at runtime the following native call underflows.
            ExprKind::Variable(_) => {}
        }
    }

    fn emit(&mut self, op: Op) {
        self.code.push(op);
    }
}
