// crates/procdoc-schema/src/descriptor.rs
// ============================================================================
// Module: Procedure Type Descriptors
// Description: Descriptor slot attached to remote-procedure definitions.
// Purpose: Distinguish recognized validator trees from opaque custom parsers.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! A remote-procedure definition carries type descriptors for its input and
//! output. Procedures are free to attach parsers the derivation engine does
//! not understand; those arrive as [`TypeDescriptor::Opaque`] and are rejected
//! at the derivation boundary rather than silently documented.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

use crate::node::SchemaNode;

// ============================================================================
// SECTION: Descriptor Types
// ============================================================================

/// Type descriptor attached to a procedure's input or output slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TypeDescriptor {
    /// A recognized validator-node tree.
    Validator(SchemaNode),
    /// A custom parser description the derivation engine cannot inspect.
    Opaque(Value),
}

impl TypeDescriptor {
    /// Returns the validator tree when this descriptor is a recognized node.
    #[must_use]
    pub const fn as_validator(&self) -> Option<&SchemaNode> {
        match self {
            Self::Validator(node) => Some(node),
            Self::Opaque(_) => None,
        }
    }

    /// True when this descriptor is a recognized validator-node tree.
    #[must_use]
    pub const fn is_validator(&self) -> bool {
        matches!(self, Self::Validator(_))
    }
}

impl From<SchemaNode> for TypeDescriptor {
    fn from(node: SchemaNode) -> Self {
        Self::Validator(node)
    }
}
