// crates/procdoc-schema/src/classify.rs
// ============================================================================
// Module: Schema Capability Classifier
// Description: Kind predicates, capability tests, and the generic unwrap loop.
// Purpose: Funnel all shape-dependent reasoning through one classification surface.
// Dependencies: none beyond the node model
// ============================================================================

//! ## Overview
//! Validator trees are built by user composition, so consumers must reason
//! about the *effective* shape of a node rather than its outermost layer.
//! This module provides the classification surface: structural kind tags,
//! string-like and coercible capability tests, single-layer optional
//! handling, and a generic unwrap loop over the closed set of pass-through
//! wrapper kinds (`Default`, `Effect`, `Nullable`).
//!
//! Coercion — constructing a number, boolean, big integer, or date by parsing
//! its string representation — is a capability of the validator build, not of
//! an individual node. It is resolved once via [`CoercionCaps::detect`] and
//! injected into consumers.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::node::ObjectShape;
use crate::node::SchemaNode;

// ============================================================================
// SECTION: Structural Kinds
// ============================================================================

/// Structural kind tag for a validator node's outermost layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaKind {
    /// Native string node.
    String,
    /// Number node.
    Number,
    /// Boolean node.
    Boolean,
    /// Big-integer node.
    BigInt,
    /// Date node.
    Date,
    /// Literal value node.
    Literal,
    /// String enumeration node.
    Enumeration,
    /// Object-shape node.
    Object,
    /// Array node.
    Array,
    /// Unconstrained node.
    Any,
    /// Presence wrapper.
    Optional,
    /// Nullable pass-through wrapper.
    Nullable,
    /// Default-value pass-through wrapper.
    Default,
    /// Transform/refinement pass-through wrapper.
    Effect,
    /// Accepts only absence of a value.
    Void,
    /// Accepts only an explicit absence marker.
    Undefined,
    /// Accepts no value.
    Never,
}

// ============================================================================
// SECTION: Coercion Capability
// ============================================================================

/// Build-level coercion capability, resolved once and injected read-only.
///
/// # Invariants
/// - Never mutated after construction; derivers copy it by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoercionCaps {
    /// True when non-string primitives can be constructed by parsing strings.
    pub string_coercion: bool,
}

impl CoercionCaps {
    /// Resolves the capability from the active build's feature set.
    #[must_use]
    pub const fn detect() -> Self {
        Self {
            string_coercion: cfg!(feature = "coerce"),
        }
    }

    /// Capability set with string coercion available.
    #[must_use]
    pub const fn enabled() -> Self {
        Self {
            string_coercion: true,
        }
    }

    /// Capability set without string coercion.
    #[must_use]
    pub const fn disabled() -> Self {
        Self {
            string_coercion: false,
        }
    }
}

impl Default for CoercionCaps {
    fn default() -> Self {
        Self::detect()
    }
}

// ============================================================================
// SECTION: Classifier Operations
// ============================================================================

impl SchemaNode {
    /// Returns the structural kind of this node's outermost layer.
    #[must_use]
    pub const fn kind(&self) -> SchemaKind {
        match self {
            Self::String => SchemaKind::String,
            Self::Number => SchemaKind::Number,
            Self::Boolean => SchemaKind::Boolean,
            Self::BigInt => SchemaKind::BigInt,
            Self::Date => SchemaKind::Date,
            Self::Literal(_) => SchemaKind::Literal,
            Self::Enumeration(_) => SchemaKind::Enumeration,
            Self::Object(_) => SchemaKind::Object,
            Self::Array(_) => SchemaKind::Array,
            Self::Any => SchemaKind::Any,
            Self::Optional(_) => SchemaKind::Optional,
            Self::Nullable(_) => SchemaKind::Nullable,
            Self::Default { .. } => SchemaKind::Default,
            Self::Effect(_) => SchemaKind::Effect,
            Self::Void => SchemaKind::Void,
            Self::Undefined => SchemaKind::Undefined,
            Self::Never => SchemaKind::Never,
        }
    }

    /// True for nodes that natively parse from a string.
    ///
    /// String enumerations and string literals qualify; literals of other
    /// JSON types do not.
    #[must_use]
    pub fn is_string_like(&self) -> bool {
        match self {
            Self::String | Self::Enumeration(_) => true,
            Self::Literal(value) => value.is_string(),
            _ => false,
        }
    }

    /// True for nodes whose native type can be constructed by parsing a
    /// string, given the injected build capability.
    #[must_use]
    pub const fn is_coercible(&self, caps: CoercionCaps) -> bool {
        caps.string_coercion
            && matches!(self, Self::Number | Self::Boolean | Self::BigInt | Self::Date)
    }

    /// True when the outermost layer is the presence (`Optional`) wrapper.
    #[must_use]
    pub const fn is_optional(&self) -> bool {
        matches!(self, Self::Optional(_))
    }

    /// Strips a single `Optional` layer, if present.
    #[must_use]
    pub fn unwrap_optional(&self) -> &Self {
        match self {
            Self::Optional(inner) => inner,
            other => other,
        }
    }

    /// True when the node, fully unwrapped, is an object-shape node.
    #[must_use]
    pub fn is_object_like(&self) -> bool {
        matches!(self.unwrap(true), Self::Object(_))
    }

    /// Returns the object shape of the fully unwrapped node, if any.
    #[must_use]
    pub fn as_object_shape(&self) -> Option<&ObjectShape> {
        match self.unwrap(true) {
            Self::Object(shape) => Some(shape),
            _ => None,
        }
    }

    /// True when the node, fully unwrapped, accepts only absence of a value.
    #[must_use]
    pub fn is_void_like(&self) -> bool {
        matches!(self.unwrap(true), Self::Void)
    }

    /// True when the node, fully unwrapped, accepts no value.
    #[must_use]
    pub fn is_never_like(&self) -> bool {
        matches!(self.unwrap(true), Self::Never)
    }

    /// True when the node, fully unwrapped, accepts only the explicit
    /// absence marker.
    #[must_use]
    pub fn is_undefined_like(&self) -> bool {
        matches!(self.unwrap(true), Self::Undefined)
    }

    /// Repeatedly strips pass-through wrapper layers until a structurally
    /// meaningful node remains.
    ///
    /// The pass-through set is closed: `Default`, `Effect`, and `Nullable`.
    /// When `through_optional` is true the presence wrapper is stripped as
    /// well. Wrappers may be stacked in any order; the loop terminates at the
    /// first non-wrapper kind.
    #[must_use]
    pub fn unwrap(&self, through_optional: bool) -> &Self {
        let mut node = self;
        loop {
            node = match node {
                Self::Nullable(inner)
                | Self::Effect(inner)
                | Self::Default {
                    inner, ..
                } => inner,
                Self::Optional(inner) if through_optional => inner,
                other => return other,
            };
        }
    }
}
