// crates/procdoc-openapi/src/fragments.rs
// ============================================================================
// Module: OpenAPI Fragment Types
// Description: Typed parameter, request-body, and response object shapes.
// Purpose: Serialize derivation results directly into OpenAPI document entries.
// Dependencies: procdoc-schema, serde, serde_json
// ============================================================================

//! ## Overview
//! Typed shapes for the OpenAPI fragments the derivers produce. All of them
//! serialize to the plain nested mapping/array/string/boolean structures the
//! OpenAPI parameter, requestBody, and responses objects require, so a
//! document assembler can merge them without further translation.
//!
//! Maps are `BTreeMap` so serialized key order is deterministic; ordered
//! field sequences are `Vec` and preserve the schema's declared field order.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use procdoc_schema::ObjectShape;
use procdoc_schema::SchemaNode;
use procdoc_schema::to_json_schema;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

// ============================================================================
// CONSTANTS: Content types
// ============================================================================

/// Content type used when a procedure declares none explicitly.
pub const DEFAULT_CONTENT_TYPE: &str = "application/json";

// ============================================================================
// SECTION: Parameter Objects
// ============================================================================

/// Location of a documented parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterLocation {
    /// Named segment of the route template.
    Path,
    /// Query-string field.
    Query,
    /// Request header field.
    Header,
}

/// A single documented parameter.
///
/// # Invariants
/// - Every `path` parameter has `required == true`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterObject {
    /// Parameter name.
    pub name: String,
    /// Parameter location.
    #[serde(rename = "in")]
    pub location: ParameterLocation,
    /// True when the parameter must be supplied.
    pub required: bool,
    /// JSON schema for the parameter value.
    pub schema: Value,
}

// ============================================================================
// SECTION: Request Body and Response Objects
// ============================================================================

/// Media-type entry holding a body schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaTypeObject {
    /// JSON schema for the payload.
    pub schema: Value,
}

/// Request-body document fragment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestBodyObject {
    /// True when the body must be supplied.
    pub required: bool,
    /// Body schema per content type.
    pub content: BTreeMap<String, MediaTypeObject>,
}

/// Response header entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderObject {
    /// True when the header is always present.
    pub required: bool,
    /// JSON schema for the header value.
    pub schema: Value,
}

/// A single response entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseObject {
    /// Human-readable response description.
    pub description: String,
    /// Documented response headers, when declared.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<BTreeMap<String, HeaderObject>>,
    /// Response schema per content type.
    pub content: BTreeMap<String, MediaTypeObject>,
}

/// Responses fragment keyed by status code or `default`.
pub type ResponsesObject = BTreeMap<String, ResponseObject>;

// ============================================================================
// SECTION: Parameter Partition
// ============================================================================

/// Result of partitioning an input schema into parameter locations.
///
/// # Invariants
/// - `path` entries are never optional-wrapped.
/// - `query` entries are optional-wrapped exactly when not required, so the
///   partition preserves required/optional semantics as schema shape.
/// - `header` is the declared header schema, passed through unvalidated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterPartition {
    /// Declared header schema, untouched by the engine.
    pub header: Option<SchemaNode>,
    /// Fields bound to route-template segments.
    pub path: ObjectShape,
    /// Fields supplied through the query string.
    pub query: ObjectShape,
}

impl ParameterPartition {
    /// Flattens the partition into an ordered parameter list: path fields,
    /// then query fields, then header fields.
    ///
    /// Header fields are documented by name and optionality only; their
    /// schemas are never string/coercion checked.
    #[must_use]
    pub fn parameter_objects(&self) -> Vec<ParameterObject> {
        let mut parameters = Vec::with_capacity(self.path.len() + self.query.len());
        for field in &self.path {
            parameters.push(ParameterObject {
                name: field.name.clone(),
                location: ParameterLocation::Path,
                required: true,
                schema: to_json_schema(&field.node),
            });
        }
        for field in &self.query {
            parameters.push(ParameterObject {
                name: field.name.clone(),
                location: ParameterLocation::Query,
                required: !field.node.is_optional(),
                schema: to_json_schema(field.node.unwrap_optional()),
            });
        }
        if let Some(shape) = self.header.as_ref().and_then(SchemaNode::as_object_shape) {
            for field in shape {
                parameters.push(ParameterObject {
                    name: field.name.clone(),
                    location: ParameterLocation::Header,
                    required: !field.node.is_optional(),
                    schema: to_json_schema(field.node.unwrap_optional()),
                });
            }
        }
        parameters
    }
}
