// crates/procdoc-schema/src/node.rs
// ============================================================================
// Module: Validator Node Tree
// Description: Composable validator-node descriptions of accepted value shapes.
// Purpose: Provide the typed schema tree attached to remote-procedure definitions.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! This module defines [`SchemaNode`], the recursively-composable description
//! of an accepted value shape, together with the ordered object-field model.
//! Nodes are built by user composition: a base kind wrapped in any number of
//! optional, nullable, default, or effect layers, in any order. The set of
//! node kinds is closed; shape-dependent consumers classify nodes through the
//! predicates in [`crate::classify`] rather than matching variants directly.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

// ============================================================================
// SECTION: Node Types
// ============================================================================

/// A composable description of an accepted value shape.
///
/// # Invariants
/// - The kind set is closed: consumers may rely on exhaustive matching.
/// - Wrapper variants (`Optional`, `Nullable`, `Default`, `Effect`) always
///   hold exactly one inner node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SchemaNode {
    /// Accepts strings natively.
    String,
    /// Accepts numbers (integer or floating point).
    Number,
    /// Accepts booleans.
    Boolean,
    /// Accepts big integers outside the double-precision safe range.
    BigInt,
    /// Accepts timestamps.
    Date,
    /// Accepts exactly one literal JSON value.
    Literal(Value),
    /// Accepts one of a fixed set of string values.
    Enumeration(Vec<String>),
    /// Accepts an object with the given ordered field shape.
    Object(ObjectShape),
    /// Accepts an array of values matching the inner node.
    Array(Box<SchemaNode>),
    /// Accepts any value without constraint.
    Any,
    /// Presence wrapper: the inner value may be absent entirely.
    Optional(Box<SchemaNode>),
    /// Pass-through wrapper: the inner value may also be null.
    Nullable(Box<SchemaNode>),
    /// Pass-through wrapper: an absent value is replaced by `value`.
    Default {
        /// Wrapped node describing the present value.
        inner: Box<SchemaNode>,
        /// Replacement applied when the value is absent.
        value: Value,
    },
    /// Pass-through wrapper: a transform or refinement over the inner node.
    /// Effects never change whether a value is present.
    Effect(Box<SchemaNode>),
    /// Accepts only the absence of a value.
    Void,
    /// Accepts only an explicit absence marker.
    Undefined,
    /// Accepts no value at all.
    Never,
}

impl SchemaNode {
    /// Wraps this node in a presence (`Optional`) layer.
    #[must_use]
    pub fn optional(self) -> Self {
        Self::Optional(Box::new(self))
    }

    /// Wraps this node in a `Nullable` pass-through layer.
    #[must_use]
    pub fn nullable(self) -> Self {
        Self::Nullable(Box::new(self))
    }

    /// Wraps this node in a `Default` pass-through layer.
    #[must_use]
    pub fn with_default(self, value: Value) -> Self {
        Self::Default {
            inner: Box::new(self),
            value,
        }
    }

    /// Wraps this node in an `Effect` pass-through layer.
    #[must_use]
    pub fn effect(self) -> Self {
        Self::Effect(Box::new(self))
    }

    /// Builds an object node from ordered `(name, node)` field pairs.
    #[must_use]
    pub fn object<I, N>(fields: I) -> Self
    where
        I: IntoIterator<Item = (N, Self)>,
        N: Into<String>,
    {
        Self::Object(ObjectShape::new(fields))
    }

    /// Builds an array node over the given element node.
    #[must_use]
    pub fn array(element: Self) -> Self {
        Self::Array(Box::new(element))
    }
}

// ============================================================================
// SECTION: Object Shape
// ============================================================================

/// Ordered mapping of field name to validator node.
///
/// # Invariants
/// - Field order matches declaration order and is preserved by every
///   shape-to-shape operation.
/// - Field names are unique; lookups return the first declared match.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectShape {
    /// Declared fields in declaration order.
    fields: Vec<ObjectField>,
}

/// A single named field of an object shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectField {
    /// Field name as it appears in payloads.
    pub name: String,
    /// Validator node accepted for this field's value.
    pub node: SchemaNode,
}

impl ObjectShape {
    /// Builds a shape from ordered `(name, node)` field pairs.
    #[must_use]
    pub fn new<I, N>(fields: I) -> Self
    where
        I: IntoIterator<Item = (N, SchemaNode)>,
        N: Into<String>,
    {
        Self {
            fields: fields
                .into_iter()
                .map(|(name, node)| ObjectField {
                    name: name.into(),
                    node,
                })
                .collect(),
        }
    }

    /// Returns the node for a named field, if declared.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&SchemaNode> {
        self.fields.iter().find(|field| field.name == name).map(|field| &field.node)
    }

    /// Returns true when the shape declares no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns the number of declared fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Iterates the declared fields in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &ObjectField> {
        self.fields.iter()
    }

    /// Appends a field, preserving declaration order.
    pub fn push(&mut self, name: impl Into<String>, node: SchemaNode) {
        self.fields.push(ObjectField {
            name: name.into(),
            node,
        });
    }

    /// Returns a copy of this shape with the named fields removed.
    ///
    /// Remaining fields keep their declaration order.
    #[must_use]
    pub fn without_fields(&self, names: &[String]) -> Self {
        Self {
            fields: self
                .fields
                .iter()
                .filter(|field| !names.contains(&field.name))
                .cloned()
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ObjectShape {
    type IntoIter = std::slice::Iter<'a, ObjectField>;
    type Item = &'a ObjectField;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}
