//! Alias scope: the textual names imported symbols go by.
//!
//! One scope is shared across all translator instances of a source file.
//! Imports and forward-declares register the local identifier a symbol is
//! bound to; [`blacklist_type_parameters`] registers the `?` sentinel for
//! generic type parameters the emitted dialect cannot express on function
//! types. Entries are full dotted paths and are used verbatim: an alias hit
//! overrides qualified lookup and mangling entirely.

use crate::checker::Checker;
use crate::symbols::{DeclId, DeclKind, SymbolId};
use rustc_hash::FxHashMap;

/// Alias value meaning "emit the unknown sentinel instead of a name".
pub const BLACKLISTED: &str = "?";

/// Mutable symbol-to-alias mapping with last-writer-wins semantics.
#[derive(Clone, Debug, Default)]
pub struct AliasScope {
    entries: FxHashMap<SymbolId, String>,
}

impl AliasScope {
    pub fn new() -> Self {
        AliasScope {
            entries: FxHashMap::default(),
        }
    }

    pub fn set(&mut self, symbol: SymbolId, alias: impl Into<String>) {
        self.entries.insert(symbol, alias.into());
    }

    pub fn get(&self, symbol: SymbolId) -> Option<&str> {
        self.entries.get(&symbol).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Blacklist the symbols of the given generic type-parameter declarations.
///
/// The emitted dialect has no generic function types, so every use of such a
/// parameter must render as `?`. Entries persist for the rest of the file's
/// emission; each parameter binding has a distinct symbol, so entries never
/// collide across declarations. Idempotent.
pub fn blacklist_type_parameters(scope: &mut AliasScope, checker: &Checker, decls: &[DeclId]) {
    for &decl_id in decls {
        let decl = checker.decl(decl_id);
        if decl.kind != DeclKind::TypeParameter {
            continue;
        }
        if !decl.symbol.is_none() {
            scope.set(decl.symbol, BLACKLISTED);
        }
    }
}
