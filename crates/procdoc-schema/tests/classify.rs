// crates/procdoc-schema/tests/classify.rs
// ============================================================================
// Module: Classifier Tests
// Description: Kind predicates, capability tests, and unwrap-loop coverage.
// Purpose: Ensure shape classification is stable over wrapper composition.
// ============================================================================

//! Unit coverage for the schema capability classifier.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions and helpers are permitted."
)]

use procdoc_schema::CoercionCaps;
use procdoc_schema::SchemaKind;
use procdoc_schema::SchemaNode;
use serde_json::json;

#[test]
fn string_like_accepts_strings_enums_and_string_literals() {
    assert!(SchemaNode::String.is_string_like());
    assert!(SchemaNode::Enumeration(vec!["a".to_string(), "b".to_string()]).is_string_like());
    assert!(SchemaNode::Literal(json!("fixed")).is_string_like());
    assert!(!SchemaNode::Literal(json!(7)).is_string_like());
    assert!(!SchemaNode::Number.is_string_like());
    assert!(!SchemaNode::Object(procdoc_schema::ObjectShape::default()).is_string_like());
}

#[test]
fn coercible_kinds_require_the_build_capability() {
    let on = CoercionCaps::enabled();
    let off = CoercionCaps::disabled();
    for node in [SchemaNode::Number, SchemaNode::Boolean, SchemaNode::BigInt, SchemaNode::Date] {
        assert!(node.is_coercible(on));
        assert!(!node.is_coercible(off));
    }
    assert!(!SchemaNode::String.is_coercible(on));
    assert!(!SchemaNode::Array(Box::new(SchemaNode::Number)).is_coercible(on));
}

#[test]
fn detect_reads_the_coerce_feature() {
    let caps = CoercionCaps::detect();
    assert_eq!(caps.string_coercion, cfg!(feature = "coerce"));
    assert_eq!(CoercionCaps::default(), caps);
}

#[test]
fn optional_tests_are_single_layer() {
    let node = SchemaNode::String.optional();
    assert!(node.is_optional());
    assert_eq!(node.unwrap_optional(), &SchemaNode::String);
    // A pass-through wrapper over an optional hides it from the outer test.
    let wrapped = SchemaNode::String.optional().nullable();
    assert!(!wrapped.is_optional());
    assert_eq!(wrapped.unwrap_optional(), &wrapped);
}

#[test]
fn unwrap_strips_pass_through_layers_in_any_order() {
    let node = SchemaNode::String
        .with_default(json!("x"))
        .nullable()
        .effect()
        .with_default(json!("y"))
        .nullable();
    assert_eq!(node.unwrap(false), &SchemaNode::String);
    assert_eq!(node.unwrap(true), &SchemaNode::String);
}

#[test]
fn unwrap_through_optional_is_opt_in() {
    let node = SchemaNode::Number.optional().effect();
    assert_eq!(node.unwrap(false), &SchemaNode::Number.optional());
    assert_eq!(node.unwrap(true), &SchemaNode::Number);
}

#[test]
fn unwrap_terminates_on_structural_nodes() {
    let object = SchemaNode::object([("a", SchemaNode::String)]);
    assert_eq!(object.unwrap(true), &object);
    assert_eq!(SchemaNode::Void.unwrap(true), &SchemaNode::Void);
    assert_eq!(SchemaNode::Never.unwrap(true), &SchemaNode::Never);
}

#[test]
fn object_like_sees_through_wrapper_stacks() {
    let node = SchemaNode::object([("a", SchemaNode::String)])
        .optional()
        .nullable()
        .with_default(json!({}));
    assert!(node.is_object_like());
    let shape = node.as_object_shape().unwrap();
    assert_eq!(shape.len(), 1);
    assert!(shape.get("a").is_some());
    assert!(shape.get("b").is_none());
    assert!(!SchemaNode::String.nullable().is_object_like());
}

#[test]
fn absence_kind_helpers_unwrap_first() {
    assert!(SchemaNode::Void.effect().is_void_like());
    assert!(SchemaNode::Never.nullable().is_never_like());
    assert!(SchemaNode::Undefined.with_default(json!(null)).is_undefined_like());
    assert!(!SchemaNode::Void.is_never_like());
}

#[test]
fn kind_tags_the_outermost_layer() {
    assert_eq!(SchemaNode::String.kind(), SchemaKind::String);
    assert_eq!(SchemaNode::String.optional().kind(), SchemaKind::Optional);
    assert_eq!(SchemaNode::String.nullable().kind(), SchemaKind::Nullable);
    assert_eq!(SchemaNode::String.with_default(json!("d")).kind(), SchemaKind::Default);
    assert_eq!(SchemaNode::String.effect().kind(), SchemaKind::Effect);
}

#[test]
fn without_fields_preserves_declaration_order() {
    let shape = procdoc_schema::ObjectShape::new([
        ("a", SchemaNode::String),
        ("b", SchemaNode::Number),
        ("c", SchemaNode::Boolean),
    ]);
    let trimmed = shape.without_fields(&["b".to_string()]);
    let names: Vec<&str> = trimmed.iter().map(|field| field.name.as_str()).collect();
    assert_eq!(names, vec!["a", "c"]);
    assert!(shape.without_fields(&["a".to_string(), "b".to_string(), "c".to_string()]).is_empty());
}
