//! The constant pool: append-only typed storage for literal values.

use std::fmt;

use crate::error::RuntimeError;

use super::value::Value;

/// Which constant table an index refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstKind {
    Int,
    Str,
}

impl fmt::Display for ConstKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstKind::Int => write!(f, "Int"),
            ConstKind::Str => write!(f, "Str"),
        }
    }
}

/// Typed constant storage addressed by (kind, index).
///
/// The two tables are independent append-only sequences: an index returned
/// by `add_int`/`add_string` stays valid for the pool's lifetime, and
/// entries are never updated, compacted, or reordered. Indices are baked
/// into instructions at compile time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstantPool {
    ints: Vec<i64>,
    strings: Vec<String>,
}

impl ConstantPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an integer constant and return its index in the Int table.
    pub fn add_int(&mut self, value: i64) -> usize {
        self.ints.push(value);
        self.ints.len() - 1
    }

    /// Append a string constant and return its index in the Str table.
    pub fn add_string(&mut self, value: impl Into<String>) -> usize {
        self.strings.push(value.into());
        self.strings.len() - 1
    }

    /// Resolve a (index, kind) reference to the stored value.
    ///
    /// Fails with `InvalidConstantRef` when the index is out of bounds for
    /// the requested table. Code generation only emits indices it obtained
    /// from `add_int`/`add_string`, so this fault signals a broken compile
    /// contract, not a user error.
    pub fn get_constant(&self, index: usize, kind: ConstKind) -> Result<Value, RuntimeError> {
        match kind {
            ConstKind::Int => self.ints.get(index).map(|n| Value::Int(*n)),
            ConstKind::Str => self.strings.get(index).map(|s| Value::Str(s.clone())),
        }
        .ok_or(RuntimeError::invalid_constant_ref(index, kind))
    }

    pub fn int_count(&self) -> usize {
        self.ints.len()
    }

    pub fn string_count(&self) -> usize {
        self.strings.len()
    }
}
