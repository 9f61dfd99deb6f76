//! Shared builders for translator tests.
//!
//! Tests describe programs as the upstream analyzer would have resolved
//! them: symbols with declarations in files, types pointing at symbols. The
//! fixture owns a checker arena plus a current file and reference site, and
//! offers builders for the shapes the suite uses repeatedly. Anything more
//! exotic is assembled in the test through `ty_mut` / `decl_mut`.

use crate::checker::{Checker, SourceRef};
use crate::diagnostics::Span;
use crate::symbols::{
    DeclId, DeclKind, DeclName, Declaration, FileId, ParameterDecl, SourceFile, SymbolId,
    symbol_flags,
};
use crate::types::{Signature, SignatureId, Type, TypeId, object_flags, type_flags};

/// One parameter of a signature under construction.
pub struct ParamSpec {
    pub name: &'static str,
    pub ty: TypeId,
    pub optional: bool,
    pub rest: bool,
}

impl ParamSpec {
    pub fn new(name: &'static str, ty: TypeId) -> Self {
        ParamSpec {
            name,
            ty,
            optional: false,
            rest: false,
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn rest(mut self) -> Self {
        self.rest = true;
        self
    }
}

pub struct Fixture {
    pub checker: Checker,
    /// The file the reference site lives in.
    pub file: FileId,
    pub node: SourceRef,
}

impl Fixture {
    pub fn new() -> Self {
        let mut checker = Checker::new();
        let file = checker.add_file(SourceFile::new("a.ts"));
        Fixture {
            checker,
            file,
            node: SourceRef::new(file, Span::new(0, 0)),
        }
    }

    pub fn add_file(&mut self, name: &str, is_declaration_file: bool, external: bool) -> FileId {
        let mut file = SourceFile::new(name);
        file.is_declaration_file = is_declaration_file;
        file.external_module = external;
        self.checker.add_file(file)
    }

    pub fn primitive(&mut self, flags: u32) -> TypeId {
        self.checker.add_type(Type::new(flags))
    }

    /// A named type (class, interface, enum) declared at top level of `file`
    /// with the given modifiers.
    pub fn named_type(
        &mut self,
        decl_kind: DeclKind,
        sym_flags: u32,
        obj_flags: u32,
        name: &str,
        file: FileId,
        modifiers: u32,
    ) -> (SymbolId, TypeId) {
        let sym = self.checker.add_symbol(sym_flags, name);
        let mut decl = Declaration::new(decl_kind, file);
        decl.name = DeclName::Identifier(name.to_string());
        decl.symbol = sym;
        decl.modifiers = modifiers;
        let decl = self.checker.add_decl(decl);
        self.checker.symbol_mut(sym).declarations.push(decl);

        let mut ty = Type::object(obj_flags);
        ty.symbol = sym;
        (sym, self.checker.add_type(ty))
    }

    pub fn interface(&mut self, name: &str, file: FileId) -> (SymbolId, TypeId) {
        self.named_type(
            DeclKind::Interface,
            symbol_flags::INTERFACE,
            object_flags::INTERFACE,
            name,
            file,
            0,
        )
    }

    pub fn class(&mut self, name: &str, file: FileId) -> (SymbolId, TypeId) {
        self.named_type(
            DeclKind::Class,
            symbol_flags::CLASS,
            object_flags::CLASS,
            name,
            file,
            0,
        )
    }

    pub fn reference(&mut self, target: TypeId, args: Vec<TypeId>) -> TypeId {
        let mut ty = Type::object(object_flags::REFERENCE);
        ty.target = target;
        ty.type_arguments = args;
        self.checker.add_type(ty)
    }

    pub fn anonymous(&mut self) -> TypeId {
        self.checker.add_type(Type::object(object_flags::ANONYMOUS))
    }

    /// A property member for an anonymous type's member table.
    pub fn member(&mut self, name: &str, ty: TypeId) -> (String, SymbolId) {
        let sym = self.checker.add_symbol(symbol_flags::PROPERTY, name);
        self.checker.set_type_of_symbol(sym, ty);
        (name.to_string(), sym)
    }

    /// A signature with a fresh declaration of `decl_kind`. Parameters named
    /// `this` contribute a parameter declaration but no parameter symbol.
    pub fn signature(
        &mut self,
        decl_kind: DeclKind,
        params: Vec<ParamSpec>,
        return_type: TypeId,
    ) -> SignatureId {
        let mut decl = Declaration::new(decl_kind, self.file);
        let mut param_syms = Vec::new();
        for spec in &params {
            let mut param = ParameterDecl::new(spec.name, spec.ty);
            param.optional = spec.optional;
            param.rest = spec.rest;
            decl.parameters.push(param);
            if spec.name != "this" {
                let sym = self
                    .checker
                    .add_symbol(symbol_flags::FUNCTION_SCOPED_VARIABLE, spec.name);
                self.checker.set_type_of_symbol(sym, spec.ty);
                param_syms.push(sym);
            }
        }
        let decl = self.checker.add_decl(decl);
        let mut sig = Signature::new(decl, return_type);
        sig.parameters = param_syms;
        self.checker.add_signature(sig)
    }

    /// A generic type parameter: its symbol, declaration, and type.
    pub fn type_parameter(&mut self, name: &str) -> (SymbolId, DeclId, TypeId) {
        let sym = self.checker.add_symbol(symbol_flags::TYPE_PARAMETER, name);
        let mut decl = Declaration::new(DeclKind::TypeParameter, self.file);
        decl.name = DeclName::Identifier(name.to_string());
        decl.symbol = sym;
        let decl = self.checker.add_decl(decl);
        self.checker.symbol_mut(sym).declarations.push(decl);

        let mut ty = Type::new(type_flags::TYPE_PARAMETER);
        ty.symbol = sym;
        (sym, decl, self.checker.add_type(ty))
    }
}
