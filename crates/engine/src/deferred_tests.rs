// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use detstep_cache::InMemoryStepCache;
use detstep_core::det_hash;
use detstep_core::test_support::FakeStep;
use std::sync::Arc;

fn sum_builder(args: &[Value], _kwargs: &Kwargs) -> Result<i64, EngineError> {
    Ok(args.iter().filter_map(Value::as_int).sum())
}

#[test]
fn hash_parts_is_stable_for_equal_construction() {
    let a = DeferredConstruction::new("make_thing", vec![Value::Int(1), Value::Int(2)], Kwargs::new(), sum_builder);
    let b = DeferredConstruction::new("make_thing", vec![Value::Int(1), Value::Int(2)], Kwargs::new(), sum_builder);
    assert_eq!(det_hash(&a.hash_parts()), det_hash(&b.hash_parts()));
}

#[test]
fn hash_parts_differs_for_different_args() {
    let a = DeferredConstruction::new("make_thing", vec![Value::Int(1)], Kwargs::new(), sum_builder);
    let b = DeferredConstruction::new("make_thing", vec![Value::Int(2)], Kwargs::new(), sum_builder);
    assert_ne!(det_hash(&a.hash_parts()), det_hash(&b.hash_parts()));
}

#[test]
fn hash_parts_differs_for_different_constructor_names() {
    let a = DeferredConstruction::new("make_thing", vec![Value::Int(1)], Kwargs::new(), sum_builder);
    let b = DeferredConstruction::new("make_other_thing", vec![Value::Int(1)], Kwargs::new(), sum_builder);
    assert_ne!(det_hash(&a.hash_parts()), det_hash(&b.hash_parts()));
}

#[test]
fn materialize_invokes_the_constructor_with_resolved_args() {
    let cache = InMemoryStepCache::new().unwrap();
    let deferred = DeferredConstruction::new(
        "make_thing",
        vec![Value::Int(1), Value::Int(2), Value::Int(3)],
        Kwargs::new(),
        sum_builder,
    );

    let result = deferred.materialize_value(&cache).unwrap();
    assert_eq!(result.as_int(), Some(6));
}

#[test]
fn materialize_substitutes_nested_steps_before_constructing() {
    let cache = InMemoryStepCache::new().unwrap();
    cache.write_bytes("Add-deadbeef", b"ignored").unwrap();

    fn count_builder(args: &[Value], _kwargs: &Kwargs) -> Result<i64, EngineError> {
        Ok(args.len() as i64)
    }

    let deferred = DeferredConstruction::new(
        "make_thing",
        vec![
            Value::Int(1),
            Value::Step(Arc::new(FakeStep::new("Add-deadbeef"))),
        ],
        Kwargs::new(),
        count_builder,
    );

    let result = deferred.materialize_value(&cache).unwrap();
    assert_eq!(result.as_int(), Some(2));
}
