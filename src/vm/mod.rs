//! Bytecode core for Rill: compiles the AST to instructions and executes
//! them on a stack-based VM.

pub mod codegen;
pub mod disassembler;
pub mod opcode;
pub mod pool;
pub mod value;
#[allow(clippy::module_inception)]
pub mod vm;

pub use codegen::{CodeGen, CompiledProgram};
pub use disassembler::disassemble;
pub use opcode::{Op, NATIVE_STDOUT};
pub use pool::{ConstKind, ConstantPool};
pub use value::Value;
pub use vm::Vm;
