// crates/procdoc-schema/src/lib.rs
// ============================================================================
// Module: procdoc Schema Library
// Description: Validator-node trees and the schema capability classifier.
// Purpose: Provide the typed schema model consumed by the derivation engine.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! This crate models the type descriptors attached to remote-procedure
//! definitions: a closed, recursively-composable tree of validator nodes
//! ([`SchemaNode`]) plus the classification surface the derivation engine
//! reasons with (structural kinds, string-like and coercible capability
//! tests, and the generic pass-through unwrap loop).
//!
//! ### Design Notes
//! - The node kind set is closed by contract; classification is exhaustive
//!   matching over a tagged union, never runtime reflection.
//! - Coercion support is a build capability (`coerce` feature), resolved once
//!   through [`CoercionCaps::detect`] and injected into consumers.
//! - All types are pure data: no interior mutability, no shared state.
//!
//! ## Index
//! - Node model: [`SchemaNode`], [`ObjectShape`], [`ObjectField`]
//! - Classifier: [`SchemaKind`], [`CoercionCaps`]
//! - Boundary: [`TypeDescriptor`]
//! - Rendering: [`to_json_schema`]

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod classify;
pub mod descriptor;
pub mod json;
pub mod node;

// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use classify::CoercionCaps;
pub use classify::SchemaKind;
pub use descriptor::TypeDescriptor;
pub use json::to_json_schema;
pub use node::ObjectField;
pub use node::ObjectShape;
pub use node::SchemaNode;
