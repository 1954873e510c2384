//! Tests for the scalar value model
//!
//! These tests verify:
//! - Canonical string rendering per variant
//! - Typed equality across variants
//! - Ordering extraction and its fallbacks
//! - Timestamp literal validation

use keyrack::{KeyrackError, Record, Timestamp, Value, ValueType};

// =============================================================================
// Rendering Tests
// =============================================================================

#[test]
fn test_canonical_rendering() {
    assert_eq!(Value::Boolean(true).to_string(), "true");
    assert_eq!(Value::Boolean(false).to_string(), "false");
    assert_eq!(Value::Uint8(42).to_string(), "42");
    assert_eq!(Value::Uint64(6400).to_string(), "6400");
    assert_eq!(Value::Sint16(-1600).to_string(), "-1600");
    assert_eq!(Value::Real32(1.5).to_string(), "1.5");
    assert_eq!(Value::Char('x').to_string(), "x");
    assert_eq!(Value::String("hello".to_string()).to_string(), "hello");
}

#[test]
fn test_timestamp_rendering() {
    let ts = Timestamp::parse("20010515104354.000000:000").unwrap();
    assert_eq!(ts.to_string(), "20010515104354.000000:000");
    assert_eq!(
        Value::Timestamp(ts).to_string(),
        "20010515104354.000000:000"
    );
}

#[test]
fn test_array_rendering() {
    let array = Value::Array(vec![Value::Uint8(1), Value::Uint8(2), Value::Uint8(3)]);
    assert_eq!(array.to_string(), "{1,2,3}");
    assert_eq!(Value::Array(Vec::new()).to_string(), "{}");
}

// =============================================================================
// Typed Equality Tests
// =============================================================================

#[test]
fn test_same_variant_equality() {
    assert_eq!(Value::Uint32(7), Value::Uint32(7));
    assert_ne!(Value::Uint32(7), Value::Uint32(8));
    assert_eq!(Value::String("7".to_string()), Value::String("7".to_string()));
}

#[test]
fn test_cross_variant_values_never_compare_equal() {
    // Same rendered text, different types
    assert_ne!(Value::Uint32(7), Value::String("7".to_string()));
    assert_ne!(Value::Uint8(1), Value::Uint16(1));
    assert_ne!(Value::Sint32(5), Value::Uint32(5));
    assert_ne!(Value::Boolean(true), Value::String("true".to_string()));
}

#[test]
fn test_type_tags() {
    assert_eq!(Value::Boolean(true).type_of(), ValueType::Boolean);
    assert_eq!(Value::Uint64(1).type_of(), ValueType::Uint64);
    assert_eq!(Value::Sint8(-1).type_of(), ValueType::Sint8);
    assert_eq!(Value::Real64(1.0).type_of(), ValueType::Real64);
    assert_eq!(
        Value::Array(vec![Value::Uint8(1)]).type_of(),
        ValueType::Array
    );
}

// =============================================================================
// Ordering Extraction Tests
// =============================================================================

#[test]
fn test_unsigned_widths_widen() {
    assert_eq!(Value::Uint8(250).as_ordering(), Some(250));
    assert_eq!(Value::Uint16(1600).as_ordering(), Some(1600));
    assert_eq!(Value::Uint32(3200).as_ordering(), Some(3200));
    assert_eq!(Value::Uint64(u64::MAX).as_ordering(), Some(u64::MAX));
}

#[test]
fn test_signed_values_must_be_non_negative() {
    assert_eq!(Value::Sint32(3200).as_ordering(), Some(3200));
    assert_eq!(Value::Sint32(-3200).as_ordering(), None);
    assert_eq!(Value::Sint64(-1).as_ordering(), None);
    assert_eq!(Value::Sint8(0).as_ordering(), Some(0));
}

#[test]
fn test_decimal_strings_parse() {
    assert_eq!(Value::String("123".to_string()).as_ordering(), Some(123));
    assert_eq!(Value::String(" 44 ".to_string()).as_ordering(), Some(44));
    assert_eq!(Value::String("12x".to_string()).as_ordering(), None);
    assert_eq!(Value::String("-3".to_string()).as_ordering(), None);
}

#[test]
fn test_non_numeric_variants_have_no_ordering() {
    assert_eq!(Value::Boolean(true).as_ordering(), None);
    assert_eq!(Value::Real64(3.5).as_ordering(), None);
    assert_eq!(Value::Char('9').as_ordering(), None);
    assert_eq!(Value::Array(vec![Value::Uint8(1)]).as_ordering(), None);
}

#[test]
fn test_record_ordering_value_falls_back_to_zero() {
    let record = Record::new().with("Name", "anonymous");
    assert_eq!(record.ordering_value("InstanceId"), 0);

    let record = Record::new().with("InstanceId", true);
    assert_eq!(record.ordering_value("InstanceId"), 0);

    let record = Record::new().with("InstanceId", 17u64);
    assert_eq!(record.ordering_value("InstanceId"), 17);
}

// =============================================================================
// Timestamp Validation Tests
// =============================================================================

#[test]
fn test_timestamp_accepts_well_formed_literals() {
    for text in [
        "20010515104354.000000:000",
        "19991231235959.999999+060",
        "20260101000000.000000-300",
    ] {
        let ts = Timestamp::parse(text).unwrap();
        assert_eq!(ts.as_str(), text);
    }
}

#[test]
fn test_timestamp_rejects_malformed_literals() {
    for text in [
        "",
        "20010515104354",
        "20010515104354.000000:00",
        "20010515104354.000000:0000",
        "20010515104354,000000:000",
        "20010515104354.000000x000",
        "2001051510435a.000000:000",
        "20010515104354.00000a:000",
    ] {
        let result = Timestamp::parse(text);
        assert!(
            matches!(result, Err(KeyrackError::InvalidParameter(_))),
            "accepted malformed literal {:?}",
            text
        );
    }
}

// =============================================================================
// Conversion Tests
// =============================================================================

#[test]
fn test_from_impls_pick_the_matching_variant() {
    assert_eq!(Value::from(true), Value::Boolean(true));
    assert_eq!(Value::from(7u8), Value::Uint8(7));
    assert_eq!(Value::from(7u64), Value::Uint64(7));
    assert_eq!(Value::from(-7i16), Value::Sint16(-7));
    assert_eq!(Value::from(1.5f64), Value::Real64(1.5));
    assert_eq!(Value::from('c'), Value::Char('c'));
    assert_eq!(Value::from("text"), Value::String("text".to_string()));
}
