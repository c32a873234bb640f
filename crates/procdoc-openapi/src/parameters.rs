// crates/procdoc-openapi/src/parameters.rs
// ============================================================================
// Module: Parameter Deriver
// Description: Partitions an input schema into path and query parameters.
// Purpose: Classify every input field exactly once by route-binding membership.
// Dependencies: procdoc-schema
// ============================================================================

//! ## Overview
//! Derives the parameters fragment for one procedure. Every field of the
//! object-shaped input schema is classified exactly once as `path` or `query`
//! by membership in the declared path-parameter name set, validated for
//! string transportability, and re-wrapped so required/optional semantics
//! survive as schema shape in the partition.

// ============================================================================
// SECTION: Imports
// ============================================================================

use procdoc_schema::ObjectShape;
use procdoc_schema::SchemaKind;
use procdoc_schema::SchemaNode;
use procdoc_schema::TypeDescriptor;

use crate::SchemaDeriver;
use crate::error::DeriveError;
use crate::fragments::ParameterPartition;

// ============================================================================
// SECTION: Scope
// ============================================================================

/// Field filter applied while partitioning an input schema.
///
/// Body-accepting methods document only their path fields as parameters (the
/// rest travels in the request body); query-style methods document all
/// fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterScope {
    /// Document path and query fields.
    All,
    /// Document path fields only.
    Path,
    /// Document query fields only.
    Query,
}

impl ParameterScope {
    /// True when a field with the given path-membership passes this filter.
    #[must_use]
    pub const fn includes(self, is_path: bool) -> bool {
        match self {
            Self::All => true,
            Self::Path => is_path,
            Self::Query => !is_path,
        }
    }
}

// ============================================================================
// SECTION: Shared Input Validation
// ============================================================================

/// Validated object-shaped input schema with its outer presence flag.
pub(crate) struct InputObject<'a> {
    /// True when the input schema itself is not optional-wrapped.
    pub required: bool,
    /// Fully unwrapped object shape of the input schema.
    pub shape: &'a ObjectShape,
}

/// Resolves a procedure input descriptor to its object shape.
///
/// Returns `Ok(None)` for the nothing-to-document case: a void input with no
/// declared path parameters.
pub(crate) fn input_object<'a>(
    input: &'a TypeDescriptor,
    path_parameters: &[String],
) -> Result<Option<InputObject<'a>>, DeriveError> {
    let schema = input.as_validator().ok_or(DeriveError::NotAValidator)?;
    let required = !schema.is_optional();
    let unwrapped = schema.unwrap(true);
    if path_parameters.is_empty() && unwrapped.kind() == SchemaKind::Void {
        return Ok(None);
    }
    let SchemaNode::Object(shape) = unwrapped else {
        return Err(DeriveError::InputNotObject);
    };
    Ok(Some(InputObject {
        required,
        shape,
    }))
}

// ============================================================================
// SECTION: Parameter Derivation
// ============================================================================

impl SchemaDeriver {
    /// Partitions a procedure's input schema into path and query parameter
    /// maps, passing the declared header schema through untouched.
    ///
    /// Returns `Ok(None)` when a procedure with no path binding declares a
    /// void input: there is nothing to document.
    ///
    /// # Errors
    /// Returns [`DeriveError`] when the input descriptor is not a validator
    /// node, the unwrapped input is not object-shaped, a declared path
    /// parameter has no matching field, a field in scope is neither
    /// string-like nor coercible, or a path-parameter field is optional.
    pub fn derive_parameters(
        &self,
        input: &TypeDescriptor,
        path_parameters: &[String],
        headers: Option<&SchemaNode>,
        scope: ParameterScope,
    ) -> Result<Option<ParameterPartition>, DeriveError> {
        let Some(object) = input_object(input, path_parameters)? else {
            return Ok(None);
        };
        for name in path_parameters {
            if object.shape.get(name).is_none() {
                return Err(DeriveError::UnknownPathParameter {
                    name: name.clone(),
                });
            }
        }
        let mut path = ObjectShape::default();
        let mut query = ObjectShape::default();
        for field in object.shape {
            let is_path = path_parameters.contains(&field.name);
            if !scope.includes(is_path) {
                continue;
            }
            let unwrapped = field.node.unwrap(true);
            if !unwrapped.is_string_like() && !unwrapped.is_coercible(self.caps()) {
                return Err(DeriveError::UnsupportedFieldType {
                    name: field.name.clone(),
                    expected: self.expected_field_types(),
                });
            }
            let field_optional = field.node.is_optional();
            if is_path && field_optional {
                return Err(DeriveError::OptionalPathParameter {
                    name: field.name.clone(),
                });
            }
            // Strip the presence layer here; step below re-applies it from
            // the combined required flag so outer optionality is preserved.
            let documented = field.node.unwrap_optional().clone();
            if is_path {
                path.push(field.name.clone(), documented);
            } else {
                let required = object.required && !field_optional;
                let node = if required { documented } else { documented.optional() };
                query.push(field.name.clone(), node);
            }
        }
        Ok(Some(ParameterPartition {
            header: headers.cloned(),
            path,
            query,
        }))
    }
}
