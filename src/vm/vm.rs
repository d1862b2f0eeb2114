//! The bytecode virtual machine: stack-based execution engine.

use crate::error::RuntimeError;

use super::codegen::CompiledProgram;
use super::opcode::{Op, NATIVE_STDOUT};
use super::value::Value;

/// The Rill VM.
///
/// Execution is strictly sequential: the instruction pointer only ever
/// advances by one, and `Halt` ends the run immediately. `Ok(())` from
/// [`Vm::execute`] is the halted state; `Err` is a fault, which aborts
/// without performing the faulting instruction's effect.
pub struct Vm {
    /// Operand stack. Emptied at the start of each execute call; not
    /// observable after it returns.
    stack: Vec<Value>,
    /// Everything written to stdout, one entry per native call (for
    /// testing/capture).
    pub output: Vec<String>,
}

impl Vm {
    pub fn new() -> Self {
        Self {
            stack: Vec::with_capacity(16),
            output: Vec::new(),
        }
    }

    /// Execute a compiled program. The program is read-only; each call runs
    /// against a fresh operand stack.
    pub fn execute(&mut self, program: &CompiledProgram) -> Result<(), RuntimeError> {
        self.stack.clear();

        for op in &program.code {
            match op {
                Op::LoadConst { kind, index } => {
                    let value = program.pool.get_constant(*index, *kind)?;
                    self.push(value);
                }
                Op::NativeCall(target) => self.native_call(target)?,
                Op::Halt => return Ok(()),
            }
        }

        // Running off the end of the sequence halts as well.
        Ok(())
    }

    /// Dispatch a native call. Only `stdout` is recognized; other targets
    /// are reserved for future handlers and currently do nothing.
    fn native_call(&mut self, target: &str) -> Result<(), RuntimeError> {
        match target {
            NATIVE_STDOUT => {
                let value = self
                    .stack
                    .pop()
                    .ok_or_else(|| RuntimeError::stack_underflow(target))?;
                let text = value.to_string();
                println!("{}", text);
                self.output.push(text);
                Ok(())
            }
            _ => Ok(()),
        }
    }

    fn push(&mut self, value: Value) {
        self.stack.push(value);
    }
}

impl Default for Vm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Scanner;
    use crate::parser::Parser;
    use crate::vm::codegen::CodeGen;
    use crate::vm::pool::{ConstKind, ConstantPool};

    fn run(source: &str) -> Vec<String> {
        let tokens = Scanner::new(source).scan_tokens().unwrap();
        let program = Parser::new(tokens).parse().unwrap();
        let compiled = CodeGen::compile(&program);
        let mut vm = Vm::new();
        vm.execute(&compiled).unwrap();
        vm.output
    }

    #[test]
    fn test_print_string() {
        assert_eq!(run("print(\"Hello\");"), vec!["Hello"]);
    }

    #[test]
    fn test_print_int() {
        assert_eq!(run("print(42);"), vec!["42"]);
    }

    #[test]
    fn test_empty_print_writes_empty_line() {
        assert_eq!(run("print();"), vec![""]);
    }

    #[test]
    fn test_statements_execute_in_order() {
        assert_eq!(
            run("print(1); print(\"two\"); print(3);"),
            vec!["1", "two", "3"]
        );
    }

    #[test]
    fn test_unknown_call_produces_no_output() {
        assert_eq!(run("foo();"), Vec::<String>::new());
    }

    #[test]
    fn test_empty_program() {
        assert_eq!(run(""), Vec::<String>::new());
    }

    #[test]
    fn test_stack_underflow() {
        // Built directly, bypassing codegen: a stdout call with nothing on
        // the stack.
        let compiled = CompiledProgram {
            code: vec![Op::NativeCall("stdout".to_string()), Op::Halt],
            pool: ConstantPool::new(),
        };
        let mut vm = Vm::new();
        let err = vm.execute(&compiled).unwrap_err();
        assert_eq!(
            err,
            RuntimeError::StackUnderflow {
                target: "stdout".to_string()
            }
        );
        // The native effect did not occur.
        assert!(vm.output.is_empty());
    }

    #[test]
    fn test_invalid_constant_ref_faults() {
        let compiled = CompiledProgram {
            code: vec![
                Op::LoadConst {
                    kind: ConstKind::Int,
                    index: 7,
                },
                Op::Halt,
            ],
            pool: ConstantPool::new(),
        };
        let err = Vm::new().execute(&compiled).unwrap_err();
        assert_eq!(
            err,
            RuntimeError::InvalidConstantRef {
                index: 7,
                kind: ConstKind::Int
            }
        );
    }

    #[test]
    fn test_halt_suppresses_later_instructions() {
        let mut pool = ConstantPool::new();
        let idx = pool.add_string("after halt");
        let compiled = CompiledProgram {
            code: vec![
                Op::Halt,
                Op::LoadConst {
                    kind: ConstKind::Str,
                    index: idx,
                },
                Op::NativeCall("stdout".to_string()),
            ],
            pool,
        };
        let mut vm = Vm::new();
        vm.execute(&compiled).unwrap();
        assert!(vm.output.is_empty());
    }

    #[test]
    fn test_prior_effects_survive_a_fault() {
        let mut pool = ConstantPool::new();
        let idx = pool.add_string("first");
        let compiled = CompiledProgram {
            code: vec![
                Op::LoadConst {
                    kind: ConstKind::Str,
                    index: idx,
                },
                Op::NativeCall("stdout".to_string()),
                Op::NativeCall("stdout".to_string()),
            ],
            pool,
        };
        let mut vm = Vm::new();
        let err = vm.execute(&compiled).unwrap_err();
        assert!(matches!(err, RuntimeError::StackUnderflow { .. }));
        assert_eq!(vm.output, vec!["first"]);
    }

    #[test]
    fn test_unrecognized_native_target_is_noop() {
        let compiled = CompiledProgram {
            code: vec![Op::NativeCall("stderr".to_string()), Op::Halt],
            pool: ConstantPool::new(),
        };
        let mut vm = Vm::new();
        vm.execute(&compiled).unwrap();
        assert!(vm.output.is_empty());
    }

    #[test]
    fn test_natural_end_without_halt() {
        // A hand-built sequence with no trailing Halt still halts cleanly.
        let mut pool = ConstantPool::new();
        let idx = pool.add_int(9);
        let compiled = CompiledProgram {
            code: vec![
                Op::LoadConst {
                    kind: ConstKind::Int,
                    index: idx,
                },
                Op::NativeCall("stdout".to_string()),
            ],
            pool,
        };
        let mut vm = Vm::new();
        vm.execute(&compiled).unwrap();
        assert_eq!(vm.output, vec!["9"]);
    }

    #[test]
    fn test_dead_load_underflows_at_runtime() {
        // print(x) compiles to a bare native call; executing it faults.
        let tokens = Scanner::new("print(x);").scan_tokens().unwrap();
        let program = Parser::new(tokens).parse().unwrap();
        let compiled = CodeGen::compile(&program);
        let err = Vm::new().execute(&compiled).unwrap_err();
        assert!(matches!(err, RuntimeError::StackUnderflow { .. }));
    }

    #[test]
    fn test_stack_is_fresh_per_execution() {
        // A leftover operand from one run must not leak into the next.
        let mut pool = ConstantPool::new();
        let idx = pool.add_int(1);
        let leaky = CompiledProgram {
            code: vec![
                Op::LoadConst {
                    kind: ConstKind::Int,
                    index: idx,
                },
                Op::Halt,
            ],
            pool,
        };
        let underflowing = CompiledProgram {
            code: vec![Op::NativeCall("stdout".to_string()), Op::Halt],
            pool: ConstantPool::new(),
        };
        let mut vm = Vm::new();
        vm.execute(&leaky).unwrap();
        let err = vm.execute(&underflowing).unwrap_err();
        assert!(matches!(err, RuntimeError::StackUnderflow { .. }));
    }
}
