//! Tests for composite keys
//!
//! These tests verify:
//! - Field set construction and case-insensitive access
//! - Exact-set matching semantics
//! - Partial (subset) matching semantics
//! - Display rendering

use keyrack::{Key, Value};

// =============================================================================
// Helper Functions
// =============================================================================

fn widget_key() -> Key {
    Key::new()
        .with("CreationClassName", "Widget")
        .with("InstanceId", 1u64)
}

// =============================================================================
// Construction Tests
// =============================================================================

#[test]
fn test_empty_key() {
    let key = Key::new();
    assert_eq!(key.len(), 0);
    assert!(key.is_empty());
    assert_eq!(key.value_of("anything"), None);
}

#[test]
fn test_with_appends_fields_in_order() {
    let key = widget_key();
    assert_eq!(key.len(), 2);
    assert_eq!(key.fields()[0].name, "CreationClassName");
    assert_eq!(key.fields()[1].name, "InstanceId");
}

#[test]
fn test_with_replaces_same_name_case_insensitively() {
    let key = widget_key().with("instanceid", 2u64);

    assert_eq!(key.len(), 2);
    assert_eq!(key.value_of("InstanceId"), Some(&Value::Uint64(2)));
}

#[test]
fn test_value_of_is_case_insensitive() {
    let key = widget_key();
    assert_eq!(
        key.value_of("creationclassname"),
        Some(&Value::String("Widget".to_string()))
    );
    assert_eq!(key.value_of("INSTANCEID"), Some(&Value::Uint64(1)));
}

// =============================================================================
// Exact Match Tests
// =============================================================================

#[test]
fn test_exact_match_is_order_independent() {
    let forward = widget_key();
    let backward = Key::new()
        .with("InstanceId", 1u64)
        .with("CreationClassName", "Widget");

    assert!(forward.exact_match(&backward));
    assert!(backward.exact_match(&forward));
}

#[test]
fn test_exact_match_requires_equal_field_counts() {
    let full = widget_key();
    let partial = Key::new().with("InstanceId", 1u64);

    assert!(!full.exact_match(&partial));
    assert!(!partial.exact_match(&full));
}

#[test]
fn test_exact_match_requires_equal_values() {
    let one = widget_key();
    let two = Key::new()
        .with("CreationClassName", "Widget")
        .with("InstanceId", 2u64);

    assert!(!one.exact_match(&two));
}

#[test]
fn test_empty_keys_match_exactly() {
    assert!(Key::new().exact_match(&Key::new()));
}

// =============================================================================
// Partial Match Tests
// =============================================================================

#[test]
fn test_partial_match_accepts_subset_queries() {
    let stored = widget_key();

    assert!(stored.partial_match(&Key::new().with("InstanceId", 1u64)));
    assert!(stored.partial_match(&Key::new().with("CreationClassName", "Widget")));
    assert!(stored.partial_match(&widget_key()));
}

#[test]
fn test_partial_match_rejects_wrong_values() {
    let stored = widget_key();

    assert!(!stored.partial_match(&Key::new().with("InstanceId", 2u64)));
}

#[test]
fn test_partial_match_rejects_fields_absent_from_stored_key() {
    let stored = widget_key();

    assert!(!stored.partial_match(&Key::new().with("SerialNumber", 1u64)));
}

#[test]
fn test_partial_match_empty_query_is_vacuously_true() {
    assert!(widget_key().partial_match(&Key::new()));
    assert!(Key::new().partial_match(&Key::new()));
}

// =============================================================================
// Display Tests
// =============================================================================

#[test]
fn test_display_quotes_text_values() {
    let key = widget_key();
    assert_eq!(key.to_string(), "CreationClassName=\"Widget\",InstanceId=1");
}

#[test]
fn test_display_renders_booleans_bare() {
    let key = Key::new().with("Active", true);
    assert_eq!(key.to_string(), "Active=true");
}
