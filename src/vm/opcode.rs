//! Bytecode instructions for the Rill VM.

use super::pool::ConstKind;

/// Name of the standard-output native handler.
pub const NATIVE_STDOUT: &str = "stdout";

/// A single bytecode instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    /// Push the constant at `index` in the table selected by `kind`.
    LoadConst { kind: ConstKind, index: usize },
    /// Invoke a named native handler against the current stack. Targets
    /// other than `stdout` are reserved and currently ignored.
    NativeCall(String),
    /// Terminate execution immediately.
    Halt,
}
