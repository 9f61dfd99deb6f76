//! Translation from resolved types to Closure type expressions.
//!
//! A [`TypeTranslator`] is created per reference site, translates one type
//! (recursively), and is discarded. It owns the recursion guard and the
//! externs-mode switch; the alias scope and the diagnostic bag are shared
//! with the rest of the file's emission and outlive the instance.
//!
//! The two type systems are close but not isomorphic. Literal types widen to
//! their base primitive, tuples become `!Array<?>`, enum literals widen to
//! the enum, and the constructs the emitted dialect cannot express at all
//! (conditional, substitution, intersection, index, mapped types) degrade to
//! the `?` sentinel with a warning. The output is always a syntactically
//! valid type expression; the only panics are contract violations of the
//! input (a reference whose target is itself, kind bits outside the
//! documented set).

use crate::alias_scope::{AliasScope, BLACKLISTED, blacklist_type_parameters};
use crate::checker::{Checker, SourceRef};
use crate::debug_repr::{symbol_to_debug_string, type_to_debug_string};
use crate::diagnostics::DiagnosticBag;
use crate::host::{AnnotatorHost, normalize_path};
use crate::symbols::{DeclKind, ParameterDecl, SymbolId, modifier_flags, symbol_flags};
use crate::types::{IndexKind, SignatureId, SignatureKind, TypeId, object_flags, type_flags};
use rustc_hash::FxHashSet;
use tracing::trace;

/// The unknown/any sentinel of the emitted dialect.
pub const UNKNOWN_SENTINEL: &str = "?";

/// One collaborator surfaces certain globals under this namespace; emitted
/// names drop it.
const CLUTZ_NAMESPACE_PREFIX: &str = "ಠ_ಠ.clutz.";

/// Internal member name marking a callable type.
const CALL_MEMBER: &str = "__call";
/// Internal member name marking an indexable type.
const INDEX_MEMBER: &str = "__index";

/// Kind bits the primary dispatch understands. Anything outside violates the
/// input contract.
const DISPATCH_MASK: u32 = type_flags::ANY
    | type_flags::UNKNOWN
    | type_flags::STRING
    | type_flags::NUMBER
    | type_flags::BOOLEAN
    | type_flags::ENUM
    | type_flags::BIGINT
    | type_flags::STRING_LITERAL
    | type_flags::NUMBER_LITERAL
    | type_flags::BOOLEAN_LITERAL
    | type_flags::ENUM_LITERAL
    | type_flags::BIGINT_LITERAL
    | type_flags::ES_SYMBOL
    | type_flags::UNIQUE_ES_SYMBOL
    | type_flags::VOID
    | type_flags::UNDEFINED
    | type_flags::NULL
    | type_flags::NEVER
    | type_flags::TYPE_PARAMETER
    | type_flags::OBJECT
    | type_flags::UNION
    | type_flags::INTERSECTION
    | type_flags::INDEX
    | type_flags::INDEXED_ACCESS
    | type_flags::CONDITIONAL
    | type_flags::SUBSTITUTION
    | type_flags::NON_PRIMITIVE;

/// Valid non-quoted Closure property name: `[A-Za-z_][A-Za-z0-9_]*`.
pub fn is_valid_closure_property_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

// =============================================================================
// Options
// =============================================================================

/// Per-instance translation options.
#[derive(Clone, Debug, Default)]
pub struct TranslatorOptions {
    /// Emit for the global externs file. References to non-ambient types
    /// from external modules are replaced with the unknown sentinel, and
    /// forward-declare callbacks are skipped.
    pub externs_mode: bool,
    /// Files whose symbols always translate to the unknown sentinel.
    /// Normalized to OS-neutral form at construction.
    pub path_blacklist: Vec<String>,
}

// =============================================================================
// TypeTranslator
// =============================================================================

/// Callback that may inject a forward-declare import for a symbol and
/// register its alias before the symbol is named.
pub type EnsureDeclared<'a> = Box<dyn FnMut(SymbolId, &mut AliasScope) + 'a>;

/// Recursive translator over the checker's type objects.
///
/// Instances are one-shot: the recursion guard accumulates the anonymous
/// types seen and is never cleared, so reuse across reference sites would
/// spuriously emit `?`. Construct a fresh instance per site.
pub struct TypeTranslator<'a> {
    host: &'a dyn AnnotatorHost,
    checker: &'a Checker,
    /// The reference site this instance emits for.
    node: SourceRef,
    alias_scope: &'a mut AliasScope,
    diagnostics: &'a mut DiagnosticBag,
    externs_mode: bool,
    path_blacklist: FxHashSet<String>,
    seen_anonymous_types: FxHashSet<TypeId>,
    ensure_declared: Option<EnsureDeclared<'a>>,
}

impl<'a> TypeTranslator<'a> {
    pub fn new(
        host: &'a dyn AnnotatorHost,
        checker: &'a Checker,
        node: SourceRef,
        alias_scope: &'a mut AliasScope,
        diagnostics: &'a mut DiagnosticBag,
    ) -> Self {
        TypeTranslator {
            host,
            checker,
            node,
            alias_scope,
            diagnostics,
            externs_mode: false,
            path_blacklist: FxHashSet::default(),
            seen_anonymous_types: FxHashSet::default(),
            ensure_declared: None,
        }
    }

    pub fn with_options(mut self, options: TranslatorOptions) -> Self {
        self.externs_mode = options.externs_mode;
        self.path_blacklist = options
            .path_blacklist
            .iter()
            .map(|p| normalize_path(p))
            .collect();
        self
    }

    pub fn with_ensure_declared(
        mut self,
        ensure_declared: impl FnMut(SymbolId, &mut AliasScope) + 'a,
    ) -> Self {
        self.ensure_declared = Some(Box::new(ensure_declared));
        self
    }

    // =========================================================================
    // Entry Point
    // =========================================================================

    /// Translate a type to a Closure type expression.
    ///
    /// Always returns a syntactically valid expression. Panics only when the
    /// input violates its contract: a reference type targeting itself, or
    /// kind bits outside the documented set.
    pub fn translate(&mut self, ty: TypeId) -> String {
        let t = self.checker.ty(ty);
        trace!(type_id = ty.0, flags = t.flags, "translating type");

        if t.flags == type_flags::NON_PRIMITIVE {
            return "!Object".to_string();
        }
        if self.seen_anonymous_types.contains(&ty) {
            return UNKNOWN_SENTINEL.to_string();
        }
        if !t.symbol.is_none() && self.is_blacklisted(t.symbol) {
            return UNKNOWN_SENTINEL.to_string();
        }

        let mut is_ambient = false;
        let mut is_in_namespace = false;
        let mut is_module = false;
        if !t.symbol.is_none() {
            for &decl in &self.checker.symbol(t.symbol).declarations {
                if self.checker.is_ambient_decl(decl) {
                    is_ambient = true;
                }
                if self.checker.module_declaration_ancestor(decl).is_some() {
                    is_in_namespace = true;
                }
                if self.checker.file(self.checker.decl(decl).file).external_module {
                    is_module = true;
                }
            }
        }
        if is_in_namespace && !is_ambient {
            return UNKNOWN_SENTINEL.to_string();
        }
        if self.externs_mode && is_module && !is_ambient {
            return UNKNOWN_SENTINEL.to_string();
        }

        match t.flags & DISPATCH_MASK {
            type_flags::ANY => UNKNOWN_SENTINEL.to_string(),
            type_flags::UNKNOWN => "*".to_string(),
            type_flags::STRING | type_flags::STRING_LITERAL => "string".to_string(),
            type_flags::NUMBER | type_flags::NUMBER_LITERAL => "number".to_string(),
            type_flags::BOOLEAN | type_flags::BOOLEAN_LITERAL => "boolean".to_string(),
            type_flags::ES_SYMBOL | type_flags::UNIQUE_ES_SYMBOL => "symbol".to_string(),
            type_flags::VOID => "void".to_string(),
            type_flags::UNDEFINED => "undefined".to_string(),
            type_flags::BIGINT | type_flags::BIGINT_LITERAL => "bigintPlaceholder".to_string(),
            type_flags::NULL => "null".to_string(),
            type_flags::NEVER => {
                self.warn("should not emit a 'never' type");
                UNKNOWN_SENTINEL.to_string()
            }
            type_flags::ENUM => {
                if t.symbol.is_none() {
                    return UNKNOWN_SENTINEL.to_string();
                }
                self.symbol_to_string(t.symbol)
                    .unwrap_or_else(|| UNKNOWN_SENTINEL.to_string())
            }
            type_flags::TYPE_PARAMETER => {
                if t.symbol.is_none() {
                    self.warn("type parameter without symbol");
                    return UNKNOWN_SENTINEL.to_string();
                }
                let name = match self.symbol_to_string(t.symbol) {
                    Some(name) => name,
                    None => return UNKNOWN_SENTINEL.to_string(),
                };
                // A bound reference to a class or interface gets the non-null
                // modifier; a plain type parameter is emitted bare.
                if self
                    .checker
                    .symbol(t.symbol)
                    .has_any_flags(symbol_flags::TYPE_PARAMETER)
                {
                    name
                } else {
                    nonnull(&name)
                }
            }
            type_flags::OBJECT => self.translate_object(ty),
            type_flags::UNION => self.translate_union(ty),
            type_flags::CONDITIONAL | type_flags::SUBSTITUTION => {
                self.warn("emitted ? for a conditional/substitution type");
                UNKNOWN_SENTINEL.to_string()
            }
            type_flags::INTERSECTION | type_flags::INDEX | type_flags::INDEXED_ACCESS => {
                self.warn(format!(
                    "unhandled type: {}",
                    type_to_debug_string(self.checker, ty)
                ));
                UNKNOWN_SENTINEL.to_string()
            }
            _ => {
                // Multi-bit kinds: unions of literals and enum literals carry
                // extra flags alongside the one that drives emission.
                if t.has_flags(type_flags::UNION) {
                    self.translate_union(ty)
                } else if t.has_flags(type_flags::ENUM_LITERAL) {
                    self.translate_enum_literal(ty)
                } else {
                    panic!(
                        "unhandled type: {}",
                        type_to_debug_string(self.checker, ty)
                    );
                }
            }
        }
    }

    // =========================================================================
    // Object Kinds
    // =========================================================================

    fn translate_object(&mut self, ty: TypeId) -> String {
        let t = self.checker.ty(ty);
        if t.has_object_flags(object_flags::CLASS) {
            if t.symbol.is_none() {
                self.warn("class type without symbol");
                return UNKNOWN_SENTINEL.to_string();
            }
            match self.symbol_to_string(t.symbol) {
                Some(name) => nonnull(&name),
                None => UNKNOWN_SENTINEL.to_string(),
            }
        } else if t.has_object_flags(object_flags::INTERFACE) {
            if t.symbol.is_none() {
                self.warn("interface type without symbol");
                return UNKNOWN_SENTINEL.to_string();
            }
            let sym = self.checker.symbol(t.symbol);
            // A user-defined name that is both a type and a value cannot be
            // referenced unambiguously in the emitted dialect.
            if sym.has_any_flags(symbol_flags::VALUE) && !self.is_closure_provided_type(t.symbol) {
                self.warn(format!(
                    "type/symbol conflict for {}, using ? for now",
                    sym.escaped_name
                ));
                return UNKNOWN_SENTINEL.to_string();
            }
            match self.symbol_to_string(t.symbol) {
                Some(name) => nonnull(&name),
                None => UNKNOWN_SENTINEL.to_string(),
            }
        } else if t.has_object_flags(object_flags::REFERENCE) {
            self.translate_type_reference(ty)
        } else if t.has_object_flags(object_flags::ANONYMOUS) {
            self.translate_anonymous_type(ty)
        } else {
            self.warn(format!(
                "unhandled object type: {}",
                type_to_debug_string(self.checker, ty)
            ));
            UNKNOWN_SENTINEL.to_string()
        }
    }

    fn translate_type_reference(&mut self, ty: TypeId) -> String {
        let t = self.checker.ty(ty);
        let target = t.target;
        if target.is_none() {
            panic!(
                "reference without target: {}",
                type_to_debug_string(self.checker, ty)
            );
        }
        // The emitted dialect has no tuples.
        if self.checker.ty(target).has_object_flags(object_flags::TUPLE) {
            return "!Array<?>".to_string();
        }
        if target == ty {
            panic!(
                "reference loop in {}",
                type_to_debug_string(self.checker, ty)
            );
        }
        let base = self.translate(target);
        // An unknown sentinel is never parameterized.
        if base == UNKNOWN_SENTINEL {
            return UNKNOWN_SENTINEL.to_string();
        }
        if t.type_arguments.is_empty() {
            return base;
        }
        let args: Vec<String> = t
            .type_arguments
            .iter()
            .map(|&arg| self.translate(arg))
            .collect();
        format!("{}<{}>", base, args.join(", "))
    }

    // =========================================================================
    // Unions and Enum Literals
    // =========================================================================

    fn translate_union(&mut self, ty: TypeId) -> String {
        let members = &self.checker.ty(ty).types;
        // Literal-bearing unions collapse after translation, so deduplicate
        // the rendered members preserving first occurrence.
        let mut parts: Vec<String> = Vec::with_capacity(members.len());
        for &member in members {
            let text = self.translate(member);
            if !parts.contains(&text) {
                parts.push(text);
            }
        }
        match parts.len() {
            0 => UNKNOWN_SENTINEL.to_string(),
            1 => parts.remove(0),
            _ => format!("({})", parts.join("|")),
        }
    }

    fn translate_enum_literal(&mut self, ty: TypeId) -> String {
        // Closure enums are non-nullable by default; the explicit modifier is
        // emitted anyway for readability and linter conformance.
        let base = self.checker.base_type_of_literal(ty);
        let mut symbol = self.checker.ty(base).symbol;
        if symbol.is_none() {
            return UNKNOWN_SENTINEL.to_string();
        }
        if base == ty {
            // Single-member enums are their own base type; name the enum via
            // the member's parent.
            let parent = self.checker.symbol(symbol).parent;
            if parent.is_none() {
                return UNKNOWN_SENTINEL.to_string();
            }
            symbol = parent;
        }
        match self.symbol_to_string(symbol) {
            Some(name) => nonnull(&name),
            None => UNKNOWN_SENTINEL.to_string(),
        }
    }

    // =========================================================================
    // Anonymous Object Types
    // =========================================================================

    fn translate_anonymous_type(&mut self, ty: TypeId) -> String {
        self.seen_anonymous_types.insert(ty);
        let t = self.checker.ty(ty);

        let ctors = self.checker.signatures_of_type(ty, SignatureKind::Construct);
        if let Some(&ctor) = ctors.first() {
            return self.translate_construct_signature(ctor);
        }

        let mut callable = false;
        let mut indexable = false;
        let mut fields: Vec<String> = Vec::new();
        for (name, member) in &t.members {
            if name == CALL_MEMBER {
                callable = true;
            } else if name == INDEX_MEMBER {
                indexable = true;
            } else if !is_valid_closure_property_name(name) {
                self.warn(format!("omitting inexpressible property name: {name}"));
            } else {
                let text = match self.checker.type_of_symbol_at_location(*member, self.node) {
                    Some(member_ty) => self.translate(member_ty),
                    None => {
                        self.warn(format!(
                            "missing type for {}",
                            symbol_to_debug_string(self.checker, *member)
                        ));
                        UNKNOWN_SENTINEL.to_string()
                    }
                };
                fields.push(format!("{name}: {text}"));
            }
        }

        if fields.is_empty() {
            if callable && !indexable {
                let calls = self.checker.signatures_of_type(ty, SignatureKind::Call);
                if calls.len() == 1 {
                    return self.signature_to_string(calls[0]);
                }
                self.warn("unhandled anonymous type with multiple call signatures");
                return UNKNOWN_SENTINEL.to_string();
            }
            if indexable && !callable {
                return self.translate_index_signature(ty);
            }
            if !callable && !indexable {
                // `{}` means "any value but null or undefined"; `*` is the
                // closest the emitted dialect has.
                return "*".to_string();
            }
        } else if !callable && !indexable {
            return format!("{{{}}}", fields.join(", "));
        }

        self.warn(format!(
            "unhandled anonymous type: {}",
            type_to_debug_string(self.checker, ty)
        ));
        UNKNOWN_SENTINEL.to_string()
    }

    fn translate_construct_signature(&mut self, ctor: SignatureId) -> String {
        let sig = self.checker.signature(ctor);
        let decl_id = sig.declaration;
        if decl_id.is_none() || self.checker.decl(decl_id).kind == DeclKind::JsDocSignature {
            self.warn("constructor signature without declaration");
            return UNKNOWN_SENTINEL.to_string();
        }
        let decl = self.checker.decl(decl_id);
        blacklist_type_parameters(self.alias_scope, self.checker, &decl.type_parameters);
        let params = self.convert_params(&sig.parameters, &decl.parameters);
        let constructed = self.translate(sig.return_type);
        let params_str = if params.is_empty() {
            String::new()
        } else {
            format!(", {}", params.join(", "))
        };
        format!("function(new: ({constructed}){params_str}): ?")
    }

    fn translate_index_signature(&mut self, ty: TypeId) -> String {
        let (key, value) = match self.checker.index_type_of_type(ty, IndexKind::String) {
            Some(value) => ("string", value),
            None => match self.checker.index_type_of_type(ty, IndexKind::Number) {
                Some(value) => ("number", value),
                None => {
                    self.warn("unknown index signature key type");
                    return "!Object<?,?>".to_string();
                }
            },
        };
        let value = self.translate(value);
        format!("!Object<{key},{value}>")
    }

    // =========================================================================
    // Signatures and Parameters
    // =========================================================================

    /// Render a call signature as `function(...): R`.
    ///
    /// Blacklisting the signature's generic type parameters mutates the
    /// shared alias scope and persists for the rest of the file's emission.
    pub fn signature_to_string(&mut self, signature: SignatureId) -> String {
        let sig = self.checker.signature(signature);
        let decl_id = sig.declaration;
        if decl_id.is_none() || self.checker.decl(decl_id).kind == DeclKind::JsDocSignature {
            self.warn("signature without declaration");
            return "Function".to_string();
        }
        let decl = self.checker.decl(decl_id);
        blacklist_type_parameters(self.alias_scope, self.checker, &decl.type_parameters);

        let mut out = String::from("function(");
        let mut param_decls: &[ParameterDecl] = &decl.parameters;
        if let Some(first) = param_decls.first() {
            if first.name == "this" {
                if !first.type_annotation.is_none() {
                    let this_type = self.translate(first.type_annotation);
                    out.push_str("this: (");
                    out.push_str(&this_type);
                    out.push(')');
                    if param_decls.len() > 1 {
                        out.push_str(", ");
                    }
                } else {
                    self.warn("this parameter without type annotation");
                }
                param_decls = &param_decls[1..];
            }
        }
        let params = self.convert_params(&sig.parameters, param_decls);
        out.push_str(&params.join(", "));
        out.push_str("): ");
        out.push_str(&self.translate(self.checker.return_type_of_signature(signature)));
        out
    }

    /// Convert parameters in index order: `...` for rest, trailing `=` for
    /// optional. Rest parameters unwrap their array element type; a rest
    /// array that resolved to no element is dropped from the list.
    fn convert_params(&mut self, params: &[SymbolId], param_decls: &[ParameterDecl]) -> Vec<String> {
        let mut out = Vec::with_capacity(params.len());
        for (index, &param) in params.iter().enumerate() {
            let (optional, rest) = match param_decls.get(index) {
                Some(decl) => (decl.optional, decl.rest),
                None => (false, false),
            };
            let mut param_type = match self.checker.type_of_symbol_at_location(param, self.node) {
                Some(ty) => ty,
                None => {
                    self.warn(format!("missing type for parameter {index}"));
                    out.push(UNKNOWN_SENTINEL.to_string());
                    continue;
                }
            };
            if rest {
                match self.rest_element_type(param_type) {
                    RestElement::Element(element) => param_type = element,
                    RestElement::Empty => continue,
                    RestElement::NotAnArray => {
                        self.warn("unsupported rest parameter type");
                        out.push("!Array<?>".to_string());
                        continue;
                    }
                }
            }
            let mut text = self.translate(param_type);
            if rest {
                text.insert_str(0, "...");
            }
            if optional {
                text.push('=');
            }
            out.push(text);
        }
        out
    }

    fn rest_element_type(&self, ty: TypeId) -> RestElement {
        let t = self.checker.ty(ty);
        if !t.has_flags(type_flags::OBJECT) || !t.has_object_flags(object_flags::REFERENCE) {
            return RestElement::NotAnArray;
        }
        match t.type_arguments.first() {
            Some(&element) => RestElement::Element(element),
            None => RestElement::Empty,
        }
    }

    // =========================================================================
    // Symbol Naming
    // =========================================================================

    /// Produce the dotted name for a symbol relative to the reference site,
    /// or `None` when the symbol cannot be named.
    pub fn symbol_to_string(&mut self, symbol: SymbolId) -> Option<String> {
        // Give the host a chance to forward-declare the symbol and register
        // an alias before it is named. Type parameters are lexically scoped
        // and never imported.
        if !self.externs_mode
            && !self
                .checker
                .symbol(symbol)
                .has_any_flags(symbol_flags::TYPE_PARAMETER)
        {
            if let Some(ensure_declared) = self.ensure_declared.as_mut() {
                ensure_declared(symbol, self.alias_scope);
            }
        }

        let segments = self.checker.entity_name_of_symbol(symbol)?;
        let mut out = String::new();
        for (index, segment) in segments.iter().enumerate() {
            let seg_symbol = self.checker.aliased_symbol(segment.symbol);
            if let Some(alias) = self.alias_scope.get(seg_symbol) {
                trace!(symbol = seg_symbol.0, alias, "alias hit");
                out = alias.to_string();
                break;
            }
            if index > 0 {
                out.push('.');
            } else {
                let prefix = self.mangled_name_prefix(seg_symbol);
                out.push_str(&prefix);
            }
            out.push_str(&segment.text);
        }
        Some(strip_clutz_namespace(out))
    }

    /// Mangled-prefix selection: empty, or `<mangled file name>.` for
    /// symbols that live behind a module boundary and are addressable
    /// globally from this site.
    fn mangled_name_prefix(&self, symbol: SymbolId) -> String {
        let decls = &self.checker.symbol(symbol).declarations;
        if decls.is_empty() {
            return String::new();
        }
        let top_level_in_module = decls.iter().any(|&d| {
            self.checker.is_top_level(d)
                && self.checker.file(self.checker.decl(d).file).external_module
        });
        let ambient_module = decls
            .iter()
            .find_map(|&d| self.checker.ambient_module_of(d));
        if !top_level_in_module && ambient_module.is_none() {
            return String::new();
        }
        if !self.externs_mode {
            // Unless every declaration is an ambient export of the current
            // file, the site refers to the symbol through an import alias.
            let all_local_ambient_exports = decls.iter().all(|&d| {
                let decl = self.checker.decl(d);
                decl.file == self.node.file
                    && self.checker.is_ambient_decl(d)
                    && decl.has_modifier(modifier_flags::EXPORT)
            });
            if !all_local_ambient_exports {
                return String::new();
            }
        }
        let file_name = match ambient_module {
            Some(module) => self
                .checker
                .ambient_module_name(module)
                .unwrap_or_default()
                .to_string(),
            None => self
                .checker
                .file(self.checker.decl(decls[0]).file)
                .file_name
                .clone(),
        };
        format!("{}.", self.host.path_to_module_name("", &file_name))
    }

    // =========================================================================
    // Predicates
    // =========================================================================

    /// A symbol is blacklisted iff every declaration's normalized source
    /// path is in the path blacklist. Blacklisted symbols translate to `?`
    /// silently.
    pub fn is_blacklisted(&self, symbol: SymbolId) -> bool {
        if self.path_blacklist.is_empty() {
            return false;
        }
        let decls = &self.checker.symbol(symbol).declarations;
        if decls.is_empty() {
            return false;
        }
        decls
            .iter()
            .all(|&d| self.path_blacklist.contains(&self.checker.decl_path(d)))
    }

    /// True when every declaration lives in a default-library declaration
    /// file; such names are provided by the emitted dialect itself.
    fn is_closure_provided_type(&self, symbol: SymbolId) -> bool {
        self.checker
            .symbol(symbol)
            .declarations
            .iter()
            .all(|&d| self.checker.file(self.checker.decl(d).file).is_default_lib())
    }

    fn warn(&mut self, message: impl Into<String>) {
        let file_name = &self.checker.file(self.node.file).file_name;
        if self.host.should_ignore_warnings_for(file_name) {
            return;
        }
        self.diagnostics
            .warning(file_name.clone(), self.node.span, message);
    }
}

enum RestElement {
    Element(TypeId),
    Empty,
    NotAnArray,
}

/// Apply the non-null modifier unless the name is the blacklist sentinel;
/// `!?` is not a valid expression.
fn nonnull(name: &str) -> String {
    if name == BLACKLISTED {
        name.to_string()
    } else {
        format!("!{name}")
    }
}

fn strip_clutz_namespace(name: String) -> String {
    match name.strip_prefix(CLUTZ_NAMESPACE_PREFIX) {
        Some(rest) => rest.to_string(),
        None => name,
    }
}

#[cfg(test)]
#[path = "tests/translator_tests.rs"]
mod tests;
