//! Type representation consumed by the translator.
//!
//! Types are lightweight `TypeId` handles into the [`Checker`](crate::checker::Checker)
//! arena. A `Type` is a flat record: a kind-flag bitfield, an object-flag
//! bitfield for object kinds, and the handful of edges (symbol, reference
//! target, union members, anonymous members, signatures, index types) the
//! translation consumes. Id equality is type identity; the recursion guard
//! relies on it.

use crate::symbols::{DeclId, SymbolId};
use serde::Serialize;

// =============================================================================
// Type Flags
// =============================================================================

/// Kind flags describing a type.
/// Matches TypeScript's TypeFlags for the bits the translator reads.
pub mod type_flags {
    pub const ANY: u32 = 1 << 0;
    pub const UNKNOWN: u32 = 1 << 1;
    pub const STRING: u32 = 1 << 2;
    pub const NUMBER: u32 = 1 << 3;
    pub const BOOLEAN: u32 = 1 << 4;
    pub const ENUM: u32 = 1 << 5;
    pub const BIGINT: u32 = 1 << 6;
    pub const STRING_LITERAL: u32 = 1 << 7;
    pub const NUMBER_LITERAL: u32 = 1 << 8;
    pub const BOOLEAN_LITERAL: u32 = 1 << 9;
    pub const ENUM_LITERAL: u32 = 1 << 10;
    pub const BIGINT_LITERAL: u32 = 1 << 11;
    pub const ES_SYMBOL: u32 = 1 << 12;
    pub const UNIQUE_ES_SYMBOL: u32 = 1 << 13;
    pub const VOID: u32 = 1 << 14;
    pub const UNDEFINED: u32 = 1 << 15;
    pub const NULL: u32 = 1 << 16;
    pub const NEVER: u32 = 1 << 17;
    pub const TYPE_PARAMETER: u32 = 1 << 18;
    pub const OBJECT: u32 = 1 << 19;
    pub const UNION: u32 = 1 << 20;
    pub const INTERSECTION: u32 = 1 << 21;
    pub const INDEX: u32 = 1 << 22;
    pub const INDEXED_ACCESS: u32 = 1 << 23;
    pub const CONDITIONAL: u32 = 1 << 24;
    pub const SUBSTITUTION: u32 = 1 << 25;
    pub const NON_PRIMITIVE: u32 = 1 << 26;

    /// Single-bit kinds and their names, for debug renderings.
    pub const NAMES: &[(u32, &str)] = &[
        (ANY, "Any"),
        (UNKNOWN, "Unknown"),
        (STRING, "String"),
        (NUMBER, "Number"),
        (BOOLEAN, "Boolean"),
        (ENUM, "Enum"),
        (BIGINT, "BigInt"),
        (STRING_LITERAL, "StringLiteral"),
        (NUMBER_LITERAL, "NumberLiteral"),
        (BOOLEAN_LITERAL, "BooleanLiteral"),
        (ENUM_LITERAL, "EnumLiteral"),
        (BIGINT_LITERAL, "BigIntLiteral"),
        (ES_SYMBOL, "ESSymbol"),
        (UNIQUE_ES_SYMBOL, "UniqueESSymbol"),
        (VOID, "Void"),
        (UNDEFINED, "Undefined"),
        (NULL, "Null"),
        (NEVER, "Never"),
        (TYPE_PARAMETER, "TypeParameter"),
        (OBJECT, "Object"),
        (UNION, "Union"),
        (INTERSECTION, "Intersection"),
        (INDEX, "Index"),
        (INDEXED_ACCESS, "IndexedAccess"),
        (CONDITIONAL, "Conditional"),
        (SUBSTITUTION, "Substitution"),
        (NON_PRIMITIVE, "NonPrimitive"),
    ];
}

/// Object flags refining [`type_flags::OBJECT`] types.
/// Matches TypeScript's ObjectFlags for the bits the translator reads.
pub mod object_flags {
    pub const NONE: u32 = 0;
    pub const CLASS: u32 = 1 << 0;
    pub const INTERFACE: u32 = 1 << 1;
    pub const REFERENCE: u32 = 1 << 2;
    pub const TUPLE: u32 = 1 << 3;
    pub const ANONYMOUS: u32 = 1 << 4;
    pub const MAPPED: u32 = 1 << 5;
    pub const INSTANTIATED: u32 = 1 << 6;
    pub const OBJECT_LITERAL: u32 = 1 << 7;

    /// Single-bit kinds and their names, for debug renderings.
    pub const NAMES: &[(u32, &str)] = &[
        (CLASS, "Class"),
        (INTERFACE, "Interface"),
        (REFERENCE, "Reference"),
        (TUPLE, "Tuple"),
        (ANONYMOUS, "Anonymous"),
        (MAPPED, "Mapped"),
        (INSTANTIATED, "Instantiated"),
        (OBJECT_LITERAL, "ObjectLiteral"),
    ];
}

// =============================================================================
// Type
// =============================================================================

/// A lightweight handle to a type in the checker arena.
/// Equality check is O(1) and defines type identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Default)]
pub struct TypeId(pub u32);

impl TypeId {
    pub const NONE: TypeId = TypeId(u32::MAX);

    pub fn is_none(&self) -> bool {
        self.0 == u32::MAX
    }
}

/// The resolved shape of a type.
///
/// Only the edges relevant to a given kind are populated; the rest stay at
/// their defaults. A reference type carries `target` and `type_arguments`, a
/// union carries `types`, an anonymous object carries `members`, signatures,
/// and index types.
#[derive(Clone, Debug, Serialize)]
pub struct Type {
    /// Kind-flag bitfield (see [`type_flags`]).
    pub flags: u32,
    /// Object-flag bitfield, meaningful when [`type_flags::OBJECT`] is set.
    pub object_flags: u32,
    /// Associated symbol, `SymbolId::NONE` when the type has none.
    pub symbol: SymbolId,
    /// Target type for reference kinds.
    pub target: TypeId,
    /// Ordered type arguments for reference kinds.
    pub type_arguments: Vec<TypeId>,
    /// Ordered member types for union kinds.
    pub types: Vec<TypeId>,
    /// Ordered member table for anonymous object kinds: name to symbol.
    pub members: Vec<(String, SymbolId)>,
    /// Call signatures.
    pub call_signatures: Vec<SignatureId>,
    /// Construct signatures.
    pub construct_signatures: Vec<SignatureId>,
    /// Value type of the string index signature, `TypeId::NONE` when absent.
    pub string_index_type: TypeId,
    /// Value type of the number index signature, `TypeId::NONE` when absent.
    pub number_index_type: TypeId,
    /// Base type for literal kinds, `TypeId::NONE` when the literal is its
    /// own base.
    pub base_type: TypeId,
}

impl Type {
    pub fn new(flags: u32) -> Self {
        Type {
            flags,
            object_flags: object_flags::NONE,
            symbol: SymbolId::NONE,
            target: TypeId::NONE,
            type_arguments: Vec::new(),
            types: Vec::new(),
            members: Vec::new(),
            call_signatures: Vec::new(),
            construct_signatures: Vec::new(),
            string_index_type: TypeId::NONE,
            number_index_type: TypeId::NONE,
            base_type: TypeId::NONE,
        }
    }

    /// Create an object type with the given object flags.
    pub fn object(object_flags: u32) -> Self {
        let mut ty = Type::new(type_flags::OBJECT);
        ty.object_flags = object_flags;
        ty
    }

    /// Create a union of the given member types.
    pub fn union(members: Vec<TypeId>) -> Self {
        let mut ty = Type::new(type_flags::UNION);
        ty.types = members;
        ty
    }

    pub fn has_flags(&self, flags: u32) -> bool {
        (self.flags & flags) != 0
    }

    pub fn has_object_flags(&self, flags: u32) -> bool {
        (self.object_flags & flags) != 0
    }
}

// =============================================================================
// Signatures
// =============================================================================

/// Unique identifier for a signature.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct SignatureId(pub u32);

impl SignatureId {
    pub const NONE: SignatureId = SignatureId(u32::MAX);

    pub fn is_none(&self) -> bool {
        self.0 == u32::MAX
    }
}

/// Distinguishes call from construct signatures in queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum SignatureKind {
    Call,
    Construct,
}

/// Which index signature to query on an object type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum IndexKind {
    String,
    Number,
}

/// A call or construct signature.
///
/// Parameter symbols pair positionally with the parameter declarations on
/// `declaration`; generic type parameters also live on the declaration.
#[derive(Clone, Debug, Serialize)]
pub struct Signature {
    /// The declaring AST node, `DeclId::NONE` when the signature is
    /// synthesized without syntax.
    pub declaration: DeclId,
    /// Parameter symbols in index order.
    pub parameters: Vec<SymbolId>,
    pub return_type: TypeId,
}

impl Signature {
    pub fn new(declaration: DeclId, return_type: TypeId) -> Self {
        Signature {
            declaration,
            parameters: Vec::new(),
            return_type,
        }
    }
}
