// crates/procdoc-openapi/src/body.rs
// ============================================================================
// Module: Request Body Deriver
// Description: Extracts the body subset of an object-shaped input schema.
// Purpose: Document the input fields not consumed by path parameters.
// Dependencies: procdoc-schema
// ============================================================================

//! ## Overview
//! Derives the request-body fragment for one procedure: the input's object
//! shape minus every field bound to a path parameter. When the path binding
//! consumes the entire input, the body is absent rather than an empty object.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use procdoc_schema::SchemaNode;
use procdoc_schema::TypeDescriptor;
use procdoc_schema::to_json_schema;

use crate::SchemaDeriver;
use crate::error::DeriveError;
use crate::fragments::DEFAULT_CONTENT_TYPE;
use crate::fragments::MediaTypeObject;
use crate::fragments::RequestBodyObject;
use crate::parameters::input_object;

// ============================================================================
// SECTION: Request Body Derivation
// ============================================================================

impl SchemaDeriver {
    /// Derives the request-body fragment from a procedure's input schema.
    ///
    /// Returns `Ok(None)` when there is nothing to document: a void input
    /// with no path binding, or an input consumed entirely by its declared
    /// path parameters. When `content_types` is empty the body schema is
    /// published under [`DEFAULT_CONTENT_TYPE`].
    ///
    /// # Errors
    /// Returns [`DeriveError`] when the input descriptor is not a validator
    /// node or the unwrapped input is not object-shaped.
    pub fn derive_request_body(
        &self,
        input: &TypeDescriptor,
        path_parameters: &[String],
        content_types: &[String],
    ) -> Result<Option<RequestBodyObject>, DeriveError> {
        let Some(object) = input_object(input, path_parameters)? else {
            return Ok(None);
        };
        let deduped = object.shape.without_fields(path_parameters);
        if !path_parameters.is_empty() && deduped.is_empty() {
            return Ok(None);
        }
        let schema = to_json_schema(&SchemaNode::Object(deduped));
        let mut content = BTreeMap::new();
        if content_types.is_empty() {
            content.insert(DEFAULT_CONTENT_TYPE.to_string(), MediaTypeObject {
                schema,
            });
        } else {
            for content_type in content_types {
                content.insert(content_type.clone(), MediaTypeObject {
                    schema: schema.clone(),
                });
            }
        }
        Ok(Some(RequestBodyObject {
            required: object.required,
            content,
        }))
    }
}
