//! Translate TypeScript semantic types into Closure Compiler type
//! annotations.
//!
//! This crate is the core of a transpilation pipeline that annotates a
//! TypeScript program for an optimizing minifier. The surrounding pipeline
//! parses sources, runs type inference, emits transformed code, and writes
//! the externs file; this crate owns the hard middle step: given a resolved
//! type object, produce the textual Closure type expression that references
//! the right declarations from the emission site.
//!
//! # Architecture
//!
//! ```text
//! host pipeline
//!   ├── populates   checker::Checker      (types, symbols, declarations)
//!   ├── maintains   alias_scope::AliasScope  (one per source file)
//!   └── drives      translator::TypeTranslator (one per reference site)
//!                      ├── names symbols via the checker's entity names,
//!                      │   the alias scope, and host-mangled prefixes
//!                      └── records warnings in diagnostics::DiagnosticBag
//! ```
//!
//! # Example
//!
//! ```
//! use closurize::{AliasScope, Checker, DefaultAnnotatorHost, DiagnosticBag,
//!                 SourceRef, Span, TypeTranslator};
//! use closurize::symbols::SourceFile;
//! use closurize::types::{type_flags, Type};
//!
//! let mut checker = Checker::new();
//! let file = checker.add_file(SourceFile::new("demo.ts"));
//! let string = checker.add_type(Type::new(type_flags::STRING));
//! let number = checker.add_type(Type::new(type_flags::NUMBER));
//! let union = checker.add_type(Type::union(vec![string, number]));
//!
//! let host = DefaultAnnotatorHost;
//! let mut scope = AliasScope::new();
//! let mut diagnostics = DiagnosticBag::new();
//! let node = SourceRef::new(file, Span::new(0, 0));
//! let mut translator = TypeTranslator::new(&host, &checker, node, &mut scope, &mut diagnostics);
//! assert_eq!(translator.translate(union), "(string|number)");
//! ```

pub mod alias_scope;
pub mod checker;
pub mod debug_repr;
pub mod diagnostics;
pub mod host;
pub mod symbols;
pub mod translator;
pub mod types;

#[cfg(test)]
mod test_fixtures;

pub use alias_scope::{AliasScope, BLACKLISTED, blacklist_type_parameters};
pub use checker::{Checker, EntitySegment, SourceRef};
pub use debug_repr::{symbol_to_debug_string, type_to_debug_string};
pub use diagnostics::{Diagnostic, DiagnosticBag, DiagnosticSeverity, Span};
pub use host::{AnnotatorHost, DefaultAnnotatorHost, module_name_as_identifier, normalize_path};
pub use translator::{
    TranslatorOptions, TypeTranslator, UNKNOWN_SENTINEL, is_valid_closure_property_name,
};
