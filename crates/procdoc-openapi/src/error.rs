// crates/procdoc-openapi/src/error.rs
// ============================================================================
// Module: Derivation Errors
// Description: Uniform error type for schema derivation failures.
// Purpose: Report malformed procedure schemas loudly at document-build time.
// Dependencies: serde_json, thiserror
// ============================================================================

//! ## Overview
//! Every derivation failure represents a misconfiguration of the procedure's
//! own declared schema, not a caller fault, so all variants map to the single
//! stable symbolic code [`ERROR_CODE`]. There is no recovery path: a failure
//! aborts derivation for that procedure and propagates to the document
//! assembler, which surfaces it as a build-time failure.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Value;
use serde_json::json;
use thiserror::Error;

// ============================================================================
// CONSTANTS: Stable error code and expectation texts
// ============================================================================

/// Stable symbolic code carried by every derivation failure.
pub const ERROR_CODE: &str = "INTERNAL_SERVER_ERROR";

/// Expectation text when string coercion is unavailable in this build.
pub const EXPECT_STRING: &str = "a string";

/// Expectation text when string coercion is available in this build.
pub const EXPECT_COERCIBLE: &str = "a string, number, boolean, big-integer, or date";

// ============================================================================
// SECTION: Error Type
// ============================================================================

/// Errors raised by the derivation engine.
///
/// # Invariants
/// - Variant meanings are stable for automation and tests.
/// - [`DeriveError::code`] returns [`ERROR_CODE`] for every variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeriveError {
    /// A schema argument is not a recognized validator node.
    #[error("procedure schema is not a recognized validator node")]
    NotAValidator,
    /// An input schema is not object-shaped while path or body fields are
    /// expected.
    #[error("input schema must be an object after unwrapping")]
    InputNotObject,
    /// A declared path-parameter name has no matching input field.
    #[error("unknown path parameter `{name}` is not a field of the input schema")]
    UnknownPathParameter {
        /// Declared path-parameter name with no matching field.
        name: String,
    },
    /// A path or query field is neither string-like nor coercible.
    #[error("input field `{name}` must be {expected}")]
    UnsupportedFieldType {
        /// Offending field name.
        name: String,
        /// Expectation text, varying with the build's coercion capability.
        expected: &'static str,
    },
    /// A path-parameter field is declared optional, which is structurally
    /// invalid: a path segment cannot be absent.
    #[error("path parameter `{name}` must not be optional")]
    OptionalPathParameter {
        /// Offending path-parameter name.
        name: String,
    },
}

impl DeriveError {
    /// Returns the stable symbolic failure code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        ERROR_CODE
    }

    /// Renders this error as an error-envelope value (`{message, code}`).
    #[must_use]
    pub fn envelope(&self) -> Value {
        json!({
            "message": self.to_string(),
            "code": self.code(),
        })
    }
}
