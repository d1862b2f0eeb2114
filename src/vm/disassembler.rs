//! Bytecode disassembler for debug output.

use super::codegen::CompiledProgram;
use super::opcode::Op;
use super::pool::ConstKind;

/// Disassemble a compiled program to a human-readable string.
pub fn disassemble(program: &CompiledProgram) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "== <program> ({} ints, {} strings) ==\n",
        program.pool.int_count(),
        program.pool.string_count()
    ));
    for (offset, op) in program.code.iter().enumerate() {
        out.push_str(&format!("{:04} ", offset));
        disassemble_op(op, program, &mut out);
        out.push('\n');
    }
    out
}

fn disassemble_op(op: &Op, program: &CompiledProgram, out: &mut String) {
    match op {
        Op::LoadConst { kind, index } => {
            let operand = match program.pool.get_constant(*index, *kind) {
                Ok(value) => match kind {
                    ConstKind::Str => format!("\"{}\"", value),
                    ConstKind::Int => format!("{}", value),
                },
                Err(_) => "???".to_string(),
            };
            out.push_str(&format!(
                "LOAD_CONST   {:<3} {:>4} ({})",
                kind.to_string(),
                index,
                operand
            ));
        }
        Op::NativeCall(target) => {
            out.push_str(&format!("NATIVE_CALL  {}", target));
        }
        Op::Halt => out.push_str("HALT"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vm::pool::ConstantPool;

    #[test]
    fn test_disassemble_all_shapes() {
        let mut pool = ConstantPool::new();
        let s = pool.add_string("hi");
        let n = pool.add_int(7);
        let program = CompiledProgram {
            code: vec![
                Op::LoadConst {
                    kind: ConstKind::Str,
                    index: s,
                },
                Op::LoadConst {
                    kind: ConstKind::Int,
                    index: n,
                },
                Op::NativeCall("stdout".to_string()),
                Op::Halt,
            ],
            pool,
        };

        let text = disassemble(&program);
        assert!(text.contains("0000 LOAD_CONST"));
        assert!(text.contains("(\"hi\")"));
        assert!(text.contains("(7)"));
        assert!(text.contains("NATIVE_CALL  stdout"));
        assert!(text.contains("HALT"));
    }

    #[test]
    fn test_dangling_reference_renders_placeholder() {
        let program = CompiledProgram {
            code: vec![Op::LoadConst {
                kind: ConstKind::Int,
                index: 3,
            }],
            pool: ConstantPool::new(),
        };
        assert!(disassemble(&program).contains("???"));
    }
}
