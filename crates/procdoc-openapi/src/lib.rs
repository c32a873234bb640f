// crates/procdoc-openapi/src/lib.rs
// ============================================================================
// Module: procdoc OpenAPI Derivation Library
// Description: Derives OpenAPI fragments from procedure validator trees.
// Purpose: Expose a typed RPC surface as a standards-compliant HTTP description.
// Dependencies: procdoc-schema, serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! This crate derives machine-readable API documentation from the validator
//! trees attached to remote-procedure definitions: parameter lists split
//! between path and query, request-body objects, and response objects with a
//! uniform error envelope. Each deriver is a pure, synchronous function of
//! its inputs; nothing is cached or mutated across calls, so derivation is
//! safe to run concurrently across any number of procedures.
//!
//! ### Design Notes
//! - A malformed procedure schema is a programming error, not a runtime
//!   condition: every failure aborts derivation for that procedure and
//!   carries the stable code [`ERROR_CODE`].
//! - Output fragments are plain nested mapping/array/string/boolean values in
//!   the OpenAPI parameter/requestBody/responses shapes, ready for direct
//!   inclusion by a document assembler.
//! - The string-coercion capability is injected at construction; the deriver
//!   itself holds no other state.
//!
//! ## Index
//! - Entry point: [`SchemaDeriver`], [`ProcedureIo`], [`OperationFragments`]
//! - Fragments: [`ParameterObject`], [`RequestBodyObject`], [`ResponsesObject`]
//! - Envelope: [`error_envelope_schema`], [`ERROR_SCHEMA_TITLE`]
//! - Failures: [`DeriveError`], [`ERROR_CODE`]

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod body;
pub mod error;
pub mod fragments;
pub mod operation;
pub mod parameters;
pub mod responses;

// ============================================================================
// SECTION: Imports
// ============================================================================

pub use procdoc_schema::CoercionCaps;

pub use crate::error::DeriveError;
pub use crate::error::ERROR_CODE;
pub use crate::fragments::DEFAULT_CONTENT_TYPE;
pub use crate::fragments::HeaderObject;
pub use crate::fragments::MediaTypeObject;
pub use crate::fragments::ParameterLocation;
pub use crate::fragments::ParameterObject;
pub use crate::fragments::ParameterPartition;
pub use crate::fragments::RequestBodyObject;
pub use crate::fragments::ResponseObject;
pub use crate::fragments::ResponsesObject;
pub use crate::operation::OperationFragments;
pub use crate::operation::ProcedureIo;
pub use crate::parameters::ParameterScope;
pub use crate::responses::ERROR_SCHEMA_TITLE;
pub use crate::responses::error_envelope_schema;
pub use crate::responses::error_response_object;

// ============================================================================
// SECTION: Deriver
// ============================================================================

/// Schema derivation engine configured with the build's coercion capability.
///
/// # Invariants
/// - Holds no mutable state; every derivation is a pure function of its
///   arguments and the injected capability.
///
/// # Examples
/// ```
/// use procdoc_openapi::{ParameterScope, SchemaDeriver};
/// use procdoc_schema::{CoercionCaps, SchemaNode, TypeDescriptor};
///
/// # fn main() -> Result<(), procdoc_openapi::DeriveError> {
/// let deriver = SchemaDeriver::new(CoercionCaps::detect());
/// let input = TypeDescriptor::Validator(SchemaNode::object([
///     ("id", SchemaNode::String),
///     ("name", SchemaNode::String.optional()),
/// ]));
/// let path = vec!["id".to_string()];
/// let partition = deriver
///     .derive_parameters(&input, &path, None, ParameterScope::All)?
///     .ok_or(procdoc_openapi::DeriveError::InputNotObject)?;
/// assert_eq!(partition.parameter_objects().len(), 2);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SchemaDeriver {
    /// Injected coercion capability of the validator build.
    caps: CoercionCaps,
}

impl SchemaDeriver {
    /// Creates a deriver with the given coercion capability.
    #[must_use]
    pub const fn new(caps: CoercionCaps) -> Self {
        Self {
            caps,
        }
    }

    /// Returns the injected coercion capability.
    #[must_use]
    pub const fn caps(&self) -> CoercionCaps {
        self.caps
    }

    /// Expectation text for unsupported-field errors under this capability.
    pub(crate) const fn expected_field_types(&self) -> &'static str {
        if self.caps.string_coercion { error::EXPECT_COERCIBLE } else { error::EXPECT_STRING }
    }
}
