// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[yare::parameterized(
    bool_true  = { Value::Bool(true), Some(true), None, None },
    int_seven  = { Value::Int(7), None, Some(7), Some(7.0) },
    float_half = { Value::Float(0.5), None, None, Some(0.5) },
)]
fn accessors_agree_with_the_variant(
    value: Value,
    expect_bool: Option<bool>,
    expect_int: Option<i64>,
    expect_float: Option<f64>,
) {
    assert_eq!(value.as_bool(), expect_bool);
    assert_eq!(value.as_int(), expect_int);
    assert_eq!(value.as_float(), expect_float);
}

#[test]
fn primitives_round_trip_through_accessors() {
    assert_eq!(Value::Bool(true).as_bool(), Some(true));
    assert_eq!(Value::Int(7).as_int(), Some(7));
    assert_eq!(Value::Float(1.5).as_float(), Some(1.5));
    assert_eq!(Value::Int(3).as_float(), Some(3.0));
    assert_eq!(Value::Str("hi".into()).as_str(), Some("hi"));
    assert!(Value::Null.is_null());
    assert!(!Value::Int(0).is_null());
}

#[test]
fn into_value_for_primitives() {
    assert!(matches!(1i32.into_value(), Value::Int(1)));
    assert!(matches!(1.5f64.into_value(), Value::Float(f) if f == 1.5));
    assert!(matches!("x".into_value(), Value::Str(s) if s == "x"));
    assert!(matches!(().into_value(), Value::Null));
    assert!(matches!(None::<i32>.into_value(), Value::Null));
    assert!(matches!(Some(2i32).into_value(), Value::Int(2)));
}

#[test]
fn into_value_for_vec_is_seq() {
    let v = vec![1i32, 2, 3].into_value();
    match v {
        Value::Seq(items) => {
            assert_eq!(items.len(), 3);
            assert_eq!(items[1].as_int(), Some(2));
        }
        other => panic!("expected Seq, got {other:?}"),
    }
}

#[test]
fn into_value_for_map_is_map() {
    let mut m = IndexMap::new();
    m.insert("a".to_string(), 1i32);
    m.insert("b".to_string(), 2i32);
    let v = m.into_value();
    match v {
        Value::Map(entries) => assert_eq!(entries.len(), 2),
        other => panic!("expected Map, got {other:?}"),
    }
}
