// crates/procdoc-schema/src/json.rs
// ============================================================================
// Module: JSON Schema Rendering
// Description: Renders validator nodes as OpenAPI-compatible JSON schema objects.
// Purpose: Turn typed node trees into plain mapping/array/string structures.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! Converts a [`SchemaNode`] tree into the plain JSON-schema object shape that
//! OpenAPI documents embed. Presence is a property of the *containing* object
//! (its `required` list), so an `Optional` layer renders as its inner node;
//! absence kinds render as the empty schema (`Void`, no constraints) or the
//! accepts-nothing marker (`Undefined`/`Never`, `{"not": {}}`).
//!
//! Object keys are sorted by `serde_json`'s default map, keeping regeneration
//! deterministic.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Map;
use serde_json::Value;
use serde_json::json;

use crate::node::ObjectShape;
use crate::node::SchemaNode;

// ============================================================================
// SECTION: Rendering
// ============================================================================

/// Renders a validator node as an OpenAPI-compatible JSON schema object.
#[must_use]
pub fn to_json_schema(node: &SchemaNode) -> Value {
    match node {
        SchemaNode::String => json!({ "type": "string" }),
        SchemaNode::Number => json!({ "type": "number" }),
        SchemaNode::Boolean => json!({ "type": "boolean" }),
        SchemaNode::BigInt => json!({ "type": "integer", "format": "int64" }),
        SchemaNode::Date => json!({ "type": "string", "format": "date-time" }),
        SchemaNode::Literal(value) => json!({ "const": value }),
        SchemaNode::Enumeration(values) => json!({ "type": "string", "enum": values }),
        SchemaNode::Object(shape) => object_schema(shape),
        SchemaNode::Array(element) => json!({
            "type": "array",
            "items": to_json_schema(element)
        }),
        SchemaNode::Any | SchemaNode::Void => json!({}),
        SchemaNode::Optional(inner) | SchemaNode::Effect(inner) => to_json_schema(inner),
        SchemaNode::Nullable(inner) => json!({
            "anyOf": [to_json_schema(inner), { "type": "null" }]
        }),
        SchemaNode::Default {
            inner,
            value,
        } => defaulted_schema(inner, value),
        SchemaNode::Undefined | SchemaNode::Never => json!({ "not": {} }),
    }
}

/// Renders an object shape with properties, a required list, and closed
/// additional properties.
fn object_schema(shape: &ObjectShape) -> Value {
    let mut properties = Map::new();
    let mut required = Vec::new();
    for field in shape {
        if !field.node.is_optional() {
            required.push(Value::String(field.name.clone()));
        }
        properties.insert(field.name.clone(), to_json_schema(&field.node));
    }
    let mut schema = Map::new();
    schema.insert("type".to_string(), Value::String("object".to_string()));
    schema.insert("properties".to_string(), Value::Object(properties));
    if !required.is_empty() {
        schema.insert("required".to_string(), Value::Array(required));
    }
    schema.insert("additionalProperties".to_string(), Value::Bool(false));
    Value::Object(schema)
}

/// Renders a default-wrapped node as the inner schema plus a `default` key.
fn defaulted_schema(inner: &SchemaNode, value: &Value) -> Value {
    match to_json_schema(inner) {
        Value::Object(mut schema) => {
            schema.insert("default".to_string(), value.clone());
            Value::Object(schema)
        }
        other => other,
    }
}
