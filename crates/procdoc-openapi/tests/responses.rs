// crates/procdoc-openapi/tests/responses.rs
// ============================================================================
// Module: Response Deriver Tests
// Description: Success-entry schema mapping and the fixed error envelope.
// Purpose: Ensure every responses fragment carries 200 plus the default entry.
// ============================================================================

//! Integration coverage for response derivation and the error envelope.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions and helpers are permitted."
)]

use procdoc_openapi::CoercionCaps;
use procdoc_openapi::DEFAULT_CONTENT_TYPE;
use procdoc_openapi::DeriveError;
use procdoc_openapi::ERROR_SCHEMA_TITLE;
use procdoc_openapi::SchemaDeriver;
use procdoc_openapi::error_envelope_schema;
use procdoc_openapi::error_response_object;
use procdoc_schema::SchemaNode;
use procdoc_schema::TypeDescriptor;
use serde_json::json;

// ============================================================================
// SECTION: Test Helpers
// ============================================================================

fn deriver() -> SchemaDeriver {
    SchemaDeriver::new(CoercionCaps::enabled())
}

fn success_schema(output: SchemaNode) -> Result<serde_json::Value, Box<dyn std::error::Error>> {
    let responses = deriver().derive_responses(&TypeDescriptor::Validator(output), None)?;
    let success = responses.get("200").ok_or("missing success entry")?;
    let media = success.content.get(DEFAULT_CONTENT_TYPE).ok_or("missing content")?;
    Ok(media.schema.clone())
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[test]
fn void_output_documents_no_constraint() -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!(success_schema(SchemaNode::Void)?, json!({}));
    assert_eq!(success_schema(SchemaNode::Void.effect())?, json!({}));
    Ok(())
}

#[test]
fn never_and_undefined_outputs_document_accepts_nothing()
-> Result<(), Box<dyn std::error::Error>> {
    assert_eq!(success_schema(SchemaNode::Never)?, json!({ "not": {} }));
    assert_eq!(success_schema(SchemaNode::Undefined)?, json!({ "not": {} }));
    Ok(())
}

#[test]
fn other_outputs_pass_through_unchanged() -> Result<(), Box<dyn std::error::Error>> {
    let output = SchemaNode::object([("ok", SchemaNode::Boolean)]);
    assert_eq!(
        success_schema(output)?,
        json!({
            "type": "object",
            "properties": { "ok": { "type": "boolean" } },
            "required": ["ok"],
            "additionalProperties": false
        })
    );
    assert_eq!(success_schema(SchemaNode::String)?, json!({ "type": "string" }));
    Ok(())
}

#[test]
fn responses_always_contain_success_and_default_entries()
-> Result<(), Box<dyn std::error::Error>> {
    let responses =
        deriver().derive_responses(&TypeDescriptor::Validator(SchemaNode::String), None)?;
    let keys: Vec<&str> = responses.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["200", "default"]);
    let success = responses.get("200").ok_or("missing success entry")?;
    assert_eq!(success.description, "Successful response");
    let fallback = responses.get("default").ok_or("missing default entry")?;
    assert_eq!(fallback, &error_response_object());
    assert_eq!(fallback.description, "Error response");
    Ok(())
}

#[test]
fn error_envelope_shape_is_fixed() -> Result<(), Box<dyn std::error::Error>> {
    let envelope = error_envelope_schema();
    assert_eq!(envelope.get("title"), Some(&json!(ERROR_SCHEMA_TITLE)));
    assert_eq!(envelope.get("required"), Some(&json!(["message", "code"])));
    let issues = envelope
        .pointer("/properties/issues/items/properties/message/type")
        .ok_or("missing issues shape")?;
    assert_eq!(issues, &json!("string"));
    // Identical for every call.
    assert_eq!(error_envelope_schema(), envelope);
    Ok(())
}

#[test]
fn response_headers_map_object_fields() -> Result<(), Box<dyn std::error::Error>> {
    let headers = SchemaNode::object([
        ("x-cache", SchemaNode::String.optional()),
        ("x-trace", SchemaNode::String),
    ]);
    let responses = deriver()
        .derive_responses(&TypeDescriptor::Validator(SchemaNode::String), Some(&headers))?;
    let success = responses.get("200").ok_or("missing success entry")?;
    let documented = success.headers.as_ref().ok_or("missing headers")?;
    assert!(!documented.get("x-cache").ok_or("missing x-cache")?.required);
    assert!(documented.get("x-trace").ok_or("missing x-trace")?.required);
    Ok(())
}

#[test]
fn opaque_output_descriptor_is_rejected() {
    let result = deriver().derive_responses(&TypeDescriptor::Opaque(json!("custom")), None);
    assert_eq!(result, Err(DeriveError::NotAValidator));
}

#[test]
fn derive_errors_render_envelope_values() {
    let error = DeriveError::UnknownPathParameter {
        name: "id".to_string(),
    };
    let envelope = error.envelope();
    assert_eq!(envelope.get("code"), Some(&json!("INTERNAL_SERVER_ERROR")));
    assert!(
        envelope.get("message").and_then(serde_json::Value::as_str).is_some_and(|m| m
            .contains("id"))
    );
}
