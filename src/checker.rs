//! Checker arena and the upstream query surface.
//!
//! The translator consumes resolved semantic objects produced by an upstream
//! analyzer. This module holds them: one arena for source files,
//! declarations, symbols, types, and signatures, plus the query methods the
//! translation algorithm calls (entity names, literal base types, signatures,
//! index types, symbol types at a location) and the AST-shape walks used to
//! classify declarations (top-level, ambient, namespaced).
//!
//! Hosts populate the arena with `add_*` / `*_mut` and hand the translator a
//! shared reference; ids are stable for the lifetime of the arena.

use crate::diagnostics::Span;
use crate::symbols::{
    DeclId, DeclKind, DeclName, Declaration, FileId, SourceFile, Symbol, SymbolId, symbol_flags,
};
use crate::types::{IndexKind, Signature, SignatureId, SignatureKind, Type, TypeId};
use rustc_hash::FxHashMap;
use serde::Serialize;

// =============================================================================
// Reference Sites
// =============================================================================

/// An AST location: the reference site a translator instance is created for.
///
/// The site supplies scope context for name resolution and the position
/// recorded on diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SourceRef {
    pub file: FileId,
    pub span: Span,
}

impl SourceRef {
    pub fn new(file: FileId, span: Span) -> Self {
        SourceRef { file, span }
    }
}

/// One segment of a resolved entity name, left-to-right.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EntitySegment {
    pub text: String,
    pub symbol: SymbolId,
}

// =============================================================================
// Checker
// =============================================================================

/// Arena and query surface over the upstream analyzer's output.
#[derive(Debug, Default, Serialize)]
pub struct Checker {
    files: Vec<SourceFile>,
    decls: Vec<Declaration>,
    symbols: Vec<Symbol>,
    types: Vec<Type>,
    signatures: Vec<Signature>,
    symbol_types: FxHashMap<SymbolId, TypeId>,
}

impl Checker {
    pub fn new() -> Self {
        Checker::default()
    }

    // =========================================================================
    // Arena Population
    // =========================================================================

    pub fn add_file(&mut self, file: SourceFile) -> FileId {
        let id = FileId(self.files.len() as u32);
        self.files.push(file);
        id
    }

    pub fn add_decl(&mut self, decl: Declaration) -> DeclId {
        let id = DeclId(self.decls.len() as u32);
        self.decls.push(decl);
        id
    }

    pub fn add_symbol(&mut self, flags: u32, name: impl Into<String>) -> SymbolId {
        let id = SymbolId(self.symbols.len() as u32);
        self.symbols.push(Symbol::new(id, flags, name));
        id
    }

    pub fn add_type(&mut self, ty: Type) -> TypeId {
        let id = TypeId(self.types.len() as u32);
        self.types.push(ty);
        id
    }

    pub fn add_signature(&mut self, signature: Signature) -> SignatureId {
        let id = SignatureId(self.signatures.len() as u32);
        self.signatures.push(signature);
        id
    }

    /// Record the type a symbol resolves to at any reference location.
    pub fn set_type_of_symbol(&mut self, symbol: SymbolId, ty: TypeId) {
        self.symbol_types.insert(symbol, ty);
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn file(&self, id: FileId) -> &SourceFile {
        &self.files[id.0 as usize]
    }

    pub fn file_mut(&mut self, id: FileId) -> &mut SourceFile {
        &mut self.files[id.0 as usize]
    }

    pub fn decl(&self, id: DeclId) -> &Declaration {
        &self.decls[id.0 as usize]
    }

    pub fn decl_mut(&mut self, id: DeclId) -> &mut Declaration {
        &mut self.decls[id.0 as usize]
    }

    pub fn symbol(&self, id: SymbolId) -> &Symbol {
        &self.symbols[id.0 as usize]
    }

    pub fn symbol_mut(&mut self, id: SymbolId) -> &mut Symbol {
        &mut self.symbols[id.0 as usize]
    }

    pub fn ty(&self, id: TypeId) -> &Type {
        &self.types[id.0 as usize]
    }

    pub fn ty_mut(&mut self, id: TypeId) -> &mut Type {
        &mut self.types[id.0 as usize]
    }

    pub fn signature(&self, id: SignatureId) -> &Signature {
        &self.signatures[id.0 as usize]
    }

    // =========================================================================
    // Query Surface
    // =========================================================================

    /// Dereference an import alias to its target symbol, or return the
    /// symbol unchanged when it aliases nothing.
    pub fn aliased_symbol(&self, symbol: SymbolId) -> SymbolId {
        let aliased = self.symbol(symbol).aliased;
        if aliased.is_none() {
            symbol
        } else {
            aliased
        }
    }

    /// Resolve the fully-qualified entity name of a symbol, left-to-right.
    ///
    /// Qualification walks the parent chain through container-like symbols
    /// (classes, interfaces, enums, modules); a function enclosing a type
    /// parameter contributes no segment. Returns `None` for symbols that
    /// cannot be named.
    pub fn entity_name_of_symbol(&self, symbol: SymbolId) -> Option<Vec<EntitySegment>> {
        let sym = self.symbol(symbol);
        if sym.is_anonymous() {
            return None;
        }
        let mut segments = vec![EntitySegment {
            text: sym.escaped_name.clone(),
            symbol,
        }];
        let mut parent = sym.parent;
        while !parent.is_none() {
            let p = self.symbol(parent);
            if p.is_anonymous() || !p.has_any_flags(symbol_flags::QUALIFYING_CONTAINER) {
                break;
            }
            // Ambient external modules have string-literal names; entity
            // names contain identifiers only, so qualification stops there.
            if p.declarations
                .iter()
                .any(|&d| self.decl(d).is_ambient_external_module())
            {
                break;
            }
            segments.push(EntitySegment {
                text: p.escaped_name.clone(),
                symbol: parent,
            });
            parent = p.parent;
        }
        segments.reverse();
        Some(segments)
    }

    /// The base type of a literal type; the type itself when it is its own
    /// base (single-member enums).
    pub fn base_type_of_literal(&self, ty: TypeId) -> TypeId {
        let base = self.ty(ty).base_type;
        if base.is_none() {
            ty
        } else {
            base
        }
    }

    pub fn signatures_of_type(&self, ty: TypeId, kind: SignatureKind) -> &[SignatureId] {
        let ty = self.ty(ty);
        match kind {
            SignatureKind::Call => &ty.call_signatures,
            SignatureKind::Construct => &ty.construct_signatures,
        }
    }

    pub fn return_type_of_signature(&self, signature: SignatureId) -> TypeId {
        self.signature(signature).return_type
    }

    pub fn index_type_of_type(&self, ty: TypeId, kind: IndexKind) -> Option<TypeId> {
        let ty = self.ty(ty);
        let index = match kind {
            IndexKind::String => ty.string_index_type,
            IndexKind::Number => ty.number_index_type,
        };
        if index.is_none() {
            None
        } else {
            Some(index)
        }
    }

    /// The type a symbol has when referenced at a location. The location is
    /// part of the upstream contract; this surface resolves symbols the same
    /// way at every site.
    pub fn type_of_symbol_at_location(
        &self,
        symbol: SymbolId,
        _location: SourceRef,
    ) -> Option<TypeId> {
        self.symbol_types.get(&symbol).copied()
    }

    // =========================================================================
    // Declaration Classification
    // =========================================================================

    /// True when the declaration sits directly in its source file.
    pub fn is_top_level(&self, decl: DeclId) -> bool {
        self.decl(decl).parent.is_none()
    }

    /// True when the declaration or any ancestor carries the `declare`
    /// modifier, or the declaration lives in a declaration file.
    pub fn is_ambient_decl(&self, decl: DeclId) -> bool {
        if self.file(self.decl(decl).file).is_declaration_file {
            return true;
        }
        self.has_ambient_modifier_in_chain(decl)
    }

    /// True when the declaration or any ancestor carries the `declare`
    /// modifier.
    pub fn has_ambient_modifier_in_chain(&self, decl: DeclId) -> bool {
        let mut current = decl;
        while !current.is_none() {
            let d = self.decl(current);
            if d.has_modifier(crate::symbols::modifier_flags::AMBIENT) {
                return true;
            }
            current = d.parent;
        }
        false
    }

    /// The nearest strict ancestor that is a module declaration, if any.
    pub fn module_declaration_ancestor(&self, decl: DeclId) -> Option<DeclId> {
        let mut current = self.decl(decl).parent;
        while !current.is_none() {
            let d = self.decl(current);
            if d.kind == DeclKind::ModuleDeclaration {
                return Some(current);
            }
            current = d.parent;
        }
        None
    }

    /// The enclosing `declare module "m"` declaration, including the
    /// declaration itself. Used to derive the mangling file name.
    pub fn ambient_module_of(&self, decl: DeclId) -> Option<DeclId> {
        let mut current = decl;
        while !current.is_none() {
            let d = self.decl(current);
            if d.is_ambient_external_module() {
                return Some(current);
            }
            current = d.parent;
        }
        None
    }

    /// The string-literal name of an ambient external module declaration.
    pub fn ambient_module_name(&self, decl: DeclId) -> Option<&str> {
        let d = self.decl(decl);
        match &d.name {
            DeclName::StringLiteral(name) if d.kind == DeclKind::ModuleDeclaration => {
                Some(name.as_str())
            }
            _ => None,
        }
    }

    /// Normalized path of the file a declaration resides in.
    pub fn decl_path(&self, decl: DeclId) -> String {
        crate::host::normalize_path(&self.file(self.decl(decl).file).file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbols::modifier_flags;

    fn arena_with_file(file: SourceFile) -> (Checker, FileId) {
        let mut checker = Checker::new();
        let file = checker.add_file(file);
        (checker, file)
    }

    #[test]
    fn test_entity_name_walks_containers() {
        let (mut checker, _) = arena_with_file(SourceFile::new("a.ts"));
        let ns = checker.add_symbol(symbol_flags::NAMESPACE_MODULE, "ns");
        let class = checker.add_symbol(symbol_flags::CLASS, "Widget");
        checker.symbol_mut(class).parent = ns;

        let name = checker.entity_name_of_symbol(class).unwrap();
        let texts: Vec<&str> = name.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, ["ns", "Widget"]);
    }

    #[test]
    fn test_entity_name_skips_function_parents() {
        let (mut checker, _) = arena_with_file(SourceFile::new("a.ts"));
        let func = checker.add_symbol(symbol_flags::FUNCTION, "f");
        let param = checker.add_symbol(symbol_flags::TYPE_PARAMETER, "T");
        checker.symbol_mut(param).parent = func;

        let name = checker.entity_name_of_symbol(param).unwrap();
        assert_eq!(name.len(), 1);
        assert_eq!(name[0].text, "T");
    }

    #[test]
    fn test_entity_name_of_anonymous() {
        let (mut checker, _) = arena_with_file(SourceFile::new("a.ts"));
        let anon = checker.add_symbol(symbol_flags::TYPE_LITERAL, "__type");
        assert!(checker.entity_name_of_symbol(anon).is_none());
    }

    #[test]
    fn test_ambient_modifier_chain() {
        let (mut checker, file) = arena_with_file(SourceFile::new("a.ts"));
        let mut outer = Declaration::new(DeclKind::ModuleDeclaration, file);
        outer.modifiers = modifier_flags::AMBIENT;
        let outer = checker.add_decl(outer);

        let mut inner = Declaration::new(DeclKind::Class, file);
        inner.parent = outer;
        let inner = checker.add_decl(inner);

        assert!(checker.is_ambient_decl(inner));
        assert!(checker.module_declaration_ancestor(inner).is_some());
        assert!(checker.module_declaration_ancestor(outer).is_none());
    }

    #[test]
    fn test_ambient_module_lookup() {
        let (mut checker, file) = arena_with_file(SourceFile::new("a.d.ts"));
        let mut module = Declaration::new(DeclKind::ModuleDeclaration, file);
        module.name = DeclName::StringLiteral("dep".to_string());
        let module = checker.add_decl(module);

        let mut member = Declaration::new(DeclKind::Interface, file);
        member.parent = module;
        let member = checker.add_decl(member);

        assert_eq!(checker.ambient_module_of(member), Some(module));
        assert_eq!(checker.ambient_module_name(module), Some("dep"));
    }

    #[test]
    fn test_aliased_symbol_dereference() {
        let (mut checker, _) = arena_with_file(SourceFile::new("a.ts"));
        let target = checker.add_symbol(symbol_flags::INTERFACE, "Foo");
        let alias = checker.add_symbol(symbol_flags::ALIAS, "Foo");
        checker.symbol_mut(alias).aliased = target;

        assert_eq!(checker.aliased_symbol(alias), target);
        assert_eq!(checker.aliased_symbol(target), target);
    }
}
