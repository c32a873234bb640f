// crates/procdoc-openapi/src/operation.rs
// ============================================================================
// Module: Per-Procedure Operation Derivation
// Description: Bundles the three derivers behind one per-procedure call.
// Purpose: Provide the seam a document assembler invokes per procedure/method.
// Dependencies: procdoc-schema
// ============================================================================

//! ## Overview
//! A document assembler walks its procedure collection and calls
//! [`SchemaDeriver::derive_operation`] once per exposed procedure and method.
//! Body-accepting methods document path fields as parameters and everything
//! else in the request body; query-style methods document all fields as
//! parameters and carry no body. Responses are derived either way.

// ============================================================================
// SECTION: Imports
// ============================================================================

use procdoc_schema::SchemaNode;
use procdoc_schema::TypeDescriptor;

use crate::SchemaDeriver;
use crate::error::DeriveError;
use crate::fragments::ParameterObject;
use crate::fragments::RequestBodyObject;
use crate::fragments::ResponsesObject;
use crate::parameters::ParameterScope;

// ============================================================================
// SECTION: Procedure Inputs and Outputs
// ============================================================================

/// Boundary inputs for one exposed procedure.
#[derive(Debug, Clone, Copy)]
pub struct ProcedureIo<'a> {
    /// Input type descriptor.
    pub input: &'a TypeDescriptor,
    /// Output type descriptor.
    pub output: &'a TypeDescriptor,
    /// Path-parameter names extracted from the route template, in order.
    pub path_parameters: &'a [String],
    /// Declared request header schema, if any.
    pub headers: Option<&'a SchemaNode>,
    /// Declared response header schema, if any.
    pub response_headers: Option<&'a SchemaNode>,
    /// Request content types, in declaration order.
    pub content_types: &'a [String],
}

/// Document fragments derived for one procedure and method.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationFragments {
    /// Ordered parameter list (path, then query, then header fields).
    pub parameters: Vec<ParameterObject>,
    /// Request-body fragment, absent for query-style methods and for inputs
    /// consumed entirely by the path binding.
    pub request_body: Option<RequestBodyObject>,
    /// Responses fragment with the success and fallback entries.
    pub responses: ResponsesObject,
}

// ============================================================================
// SECTION: Operation Derivation
// ============================================================================

impl SchemaDeriver {
    /// Derives all document fragments for one procedure and method.
    ///
    /// # Errors
    /// Propagates any [`DeriveError`] from the parameter, request-body, or
    /// response derivation for this procedure.
    pub fn derive_operation(
        &self,
        io: &ProcedureIo<'_>,
        accepts_body: bool,
    ) -> Result<OperationFragments, DeriveError> {
        let scope = if accepts_body { ParameterScope::Path } else { ParameterScope::All };
        let partition =
            self.derive_parameters(io.input, io.path_parameters, io.headers, scope)?;
        let parameters =
            partition.map(|partition| partition.parameter_objects()).unwrap_or_default();
        let request_body = if accepts_body {
            self.derive_request_body(io.input, io.path_parameters, io.content_types)?
        } else {
            None
        };
        let responses = self.derive_responses(io.output, io.response_headers)?;
        Ok(OperationFragments {
            parameters,
            request_body,
            responses,
        })
    }
}
