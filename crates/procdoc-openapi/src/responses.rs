// crates/procdoc-openapi/src/responses.rs
// ============================================================================
// Module: Response Deriver and Error Envelope
// Description: Success and fallback response fragments for one procedure.
// Purpose: Document the output schema and the uniform error envelope.
// Dependencies: procdoc-schema, serde_json
// ============================================================================

//! ## Overview
//! Derives the responses fragment: exactly one success entry (`200`) wrapping
//! the output schema, and one fallback entry (`default`) carrying the
//! process-wide error envelope. The envelope schema's `Error` title is stable
//! so repeated references in a generated document deduplicate to one
//! component.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use procdoc_schema::ObjectShape;
use procdoc_schema::SchemaNode;
use procdoc_schema::TypeDescriptor;
use procdoc_schema::to_json_schema;
use serde_json::Value;
use serde_json::json;

use crate::SchemaDeriver;
use crate::error::DeriveError;
use crate::fragments::DEFAULT_CONTENT_TYPE;
use crate::fragments::HeaderObject;
use crate::fragments::MediaTypeObject;
use crate::fragments::ResponseObject;
use crate::fragments::ResponsesObject;

// ============================================================================
// CONSTANTS: Response entries and the envelope title
// ============================================================================

/// Status key of the success entry.
pub const SUCCESS_STATUS: &str = "200";

/// Key of the fallback error entry.
pub const DEFAULT_STATUS: &str = "default";

/// Stable title/ref metadata for the error envelope schema. Reused verbatim
/// so repeated references deduplicate to one document component.
pub const ERROR_SCHEMA_TITLE: &str = "Error";

// ============================================================================
// SECTION: Error Envelope
// ============================================================================

/// Returns the process-wide error envelope schema.
///
/// The envelope is identical for every derivation call: a message, the stable
/// symbolic code, and an optional ordered list of sub-error messages.
#[must_use]
pub fn error_envelope_schema() -> Value {
    json!({
        "title": ERROR_SCHEMA_TITLE,
        "type": "object",
        "properties": {
            "message": { "type": "string" },
            "code": { "type": "string" },
            "issues": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "message": { "type": "string" }
                    },
                    "required": ["message"],
                    "additionalProperties": false
                }
            }
        },
        "required": ["message", "code"],
        "additionalProperties": false
    })
}

/// Returns the fallback (`default`) response entry wrapping the envelope.
#[must_use]
pub fn error_response_object() -> ResponseObject {
    let mut content = BTreeMap::new();
    content.insert(DEFAULT_CONTENT_TYPE.to_string(), MediaTypeObject {
        schema: error_envelope_schema(),
    });
    ResponseObject {
        description: "Error response".to_string(),
        headers: None,
        content,
    }
}

// ============================================================================
// SECTION: Response Derivation
// ============================================================================

impl SchemaDeriver {
    /// Derives the responses fragment from a procedure's output schema.
    ///
    /// The success body is the empty schema for a void output (no
    /// constraints), the accepts-nothing marker for a never/undefined output,
    /// and the schema itself otherwise. The fallback entry is always present
    /// and structurally identical to the error envelope.
    ///
    /// # Errors
    /// Returns [`DeriveError::NotAValidator`] when the output descriptor is
    /// not a validator node.
    pub fn derive_responses(
        &self,
        output: &TypeDescriptor,
        headers: Option<&SchemaNode>,
    ) -> Result<ResponsesObject, DeriveError> {
        let schema = output.as_validator().ok_or(DeriveError::NotAValidator)?;
        let body = if schema.is_void_like() {
            json!({})
        } else if schema.is_never_like() || schema.is_undefined_like() {
            json!({ "not": {} })
        } else {
            to_json_schema(schema)
        };
        let mut content = BTreeMap::new();
        content.insert(DEFAULT_CONTENT_TYPE.to_string(), MediaTypeObject {
            schema: body,
        });
        let mut responses = ResponsesObject::new();
        responses.insert(SUCCESS_STATUS.to_string(), ResponseObject {
            description: "Successful response".to_string(),
            headers: headers.and_then(SchemaNode::as_object_shape).map(header_objects),
            content,
        });
        responses.insert(DEFAULT_STATUS.to_string(), error_response_object());
        Ok(responses)
    }
}

/// Maps an object-shaped header schema to documented response headers.
///
/// Headers are passed through opaquely: documented by name and optionality
/// only, never string/coercion checked.
fn header_objects(shape: &ObjectShape) -> BTreeMap<String, HeaderObject> {
    let mut headers = BTreeMap::new();
    for field in shape {
        headers.insert(field.name.clone(), HeaderObject {
            required: !field.node.is_optional(),
            schema: to_json_schema(field.node.unwrap_optional()),
        });
    }
    headers
}
