//! Abstract Syntax Tree for Rill.

pub mod expr;
pub mod stmt;

pub use expr::{Expr, ExprKind};
pub use stmt::{FunctionCall, Program, Stmt, StmtKind};
