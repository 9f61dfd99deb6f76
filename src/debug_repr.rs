//! Human-readable renderings of types and symbols.
//!
//! Structural panics and some warnings attach these strings so a host log
//! names the flags involved instead of printing raw bitfields. The flag
//! modules carry their own bit-to-name listings; this module joins the
//! names of the set bits and adds the symbol name from the arena.

use crate::checker::Checker;
use crate::symbols::{SymbolId, symbol_flags};
use crate::types::{TypeId, object_flags, type_flags};

fn flag_names(flags: u32, table: &[(u32, &str)]) -> String {
    let names: Vec<&str> = table
        .iter()
        .filter(|(bit, _)| flags & bit != 0)
        .map(|&(_, name)| name)
        .collect();
    names.join("|")
}

/// Render a type for logs: flags, object flags, and the symbol name when
/// present, e.g. `type 0x80004 (Object: Reference) Array`.
pub fn type_to_debug_string(checker: &Checker, ty: TypeId) -> String {
    let t = checker.ty(ty);
    let mut out = format!(
        "type {:#x} ({})",
        t.flags,
        flag_names(t.flags, type_flags::NAMES)
    );
    if t.object_flags != object_flags::NONE {
        let obj = flag_names(t.object_flags, object_flags::NAMES);
        out.truncate(out.len() - 1);
        out.push_str(&format!(": {obj})"));
    }
    if !t.symbol.is_none() {
        out.push(' ');
        out.push_str(&checker.symbol(t.symbol).escaped_name);
    }
    out
}

/// Render a symbol for logs: flags and name, e.g.
/// `symbol 0x20 (Class) Widget`.
pub fn symbol_to_debug_string(checker: &Checker, symbol: SymbolId) -> String {
    let s = checker.symbol(symbol);
    format!(
        "symbol {:#x} ({}) {}",
        s.flags,
        flag_names(s.flags, symbol_flags::NAMES),
        s.escaped_name
    )
}
