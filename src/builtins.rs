//! Registry of native builtin functions.
//!
//! Builtins are resolved at compile time by canonical name. Every canonical
//! name carries the reserved prefix; the analyzer distinguishes "not a
//! builtin at all" from "builtin-prefixed but unregistered" with the two
//! checks below.

use std::collections::HashSet;

use lazy_static::lazy_static;

/// The reserved prefix all builtin function names carry.
pub const BUILTIN_PREFIX: &str = "__builtin_";

/// Canonical name of the print builtin (surface keyword: `print`).
pub const PRINT: &str = "__builtin_print";

lazy_static! {
    static ref BUILTINS: HashSet<&'static str> = {
        let mut set = HashSet::new();
        set.insert(PRINT);
        set
    };
}

/// Whether `name` is a registered builtin function.
pub fn is_builtin(name: &str) -> bool {
    has_builtin_prefix(name) && BUILTINS.contains(name)
}

/// Whether `name` carries the builtin prefix (registered or not).
pub fn has_builtin_prefix(name: &str) -> bool {
    name.starts_with(BUILTIN_PREFIX)
}

/// All registered builtin names, for diagnostics and tooling.
pub fn all_builtins() -> Vec<&'static str> {
    let mut names: Vec<_> = BUILTINS.iter().copied().collect();
    names.sort_unstable();
    names
}
