// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::deferred::DeferredConstruction;
use detstep_core::test_support::FakeStep;
use std::sync::Arc;

fn step_value(id: &str) -> Value {
    Value::Step(Arc::new(FakeStep::new(id)) as Arc<dyn StepLike>)
}

#[test]
fn direct_dependencies_finds_a_step_value() {
    let mut kwargs = Kwargs::new();
    kwargs.insert("a".to_string(), step_value("A"));
    let deps = direct_dependencies_of_kwargs(&kwargs);
    assert_eq!(deps.len(), 1);
    assert_eq!(deps[0].unique_id(), "A");
}

#[test]
fn direct_dependencies_recurse_through_seq_set_and_map() {
    let mut inner_map = Vec::new();
    inner_map.push(("k".to_string(), step_value("InMap")));

    let mut kwargs = Kwargs::new();
    kwargs.insert(
        "seq".to_string(),
        Value::Seq(vec![step_value("InSeq")]),
    );
    kwargs.insert(
        "set".to_string(),
        Value::Set(vec![step_value("InSet")]),
    );
    kwargs.insert("map".to_string(), Value::Map(inner_map));

    let mut ids: Vec<&str> = direct_dependencies_of_kwargs(&kwargs)
        .iter()
        .map(|s| s.unique_id())
        .collect();
    ids.sort_unstable();
    assert_eq!(ids, vec!["InMap", "InSeq", "InSet"]);
}

#[test]
fn direct_dependencies_do_not_cross_a_deferred_boundary() {
    let deferred = DeferredConstruction::new(
        "wrap",
        vec![step_value("HiddenBehindDeferred")],
        Kwargs::new(),
        |args, _kwargs| Ok(args.len() as i64),
    );
    let mut kwargs = Kwargs::new();
    kwargs.insert(
        "d".to_string(),
        Value::Deferred(Arc::new(deferred)),
    );

    assert!(direct_dependencies_of_kwargs(&kwargs).is_empty());
}

#[test]
fn direct_dependencies_ignore_plain_strings_and_bytes() {
    let mut kwargs = Kwargs::new();
    kwargs.insert("label".to_string(), Value::Str("not-a-step".to_string()));
    kwargs.insert("blob".to_string(), Value::Bytes(vec![1, 2, 3]));
    assert!(direct_dependencies_of_kwargs(&kwargs).is_empty());
}

#[test]
fn direct_dependencies_dedup_a_shared_step() {
    let mut kwargs = Kwargs::new();
    kwargs.insert("x".to_string(), step_value("A"));
    kwargs.insert("y".to_string(), step_value("A"));

    let deps = direct_dependencies_of_kwargs(&kwargs);
    assert_eq!(deps.len(), 1);
    assert_eq!(deps[0].unique_id(), "A");
}

#[test]
fn recursive_dependencies_cross_a_deferred_boundary() {
    let deferred = DeferredConstruction::new(
        "wrap",
        vec![step_value("HiddenBehindDeferred")],
        Kwargs::new(),
        |args, _kwargs| Ok(args.len() as i64),
    );
    let mut kwargs = Kwargs::new();
    kwargs.insert("d".to_string(), Value::Deferred(Arc::new(deferred)));

    let deps = recursive_dependencies_of_kwargs(&kwargs);
    assert_eq!(deps.len(), 1);
    assert_eq!(deps[0].unique_id(), "HiddenBehindDeferred");
}

#[test]
fn recursive_dependencies_walk_transitively_through_discovered_steps() {
    let mut b_kwargs = Kwargs::new();
    b_kwargs.insert("upstream".to_string(), step_value("A"));
    let b: Arc<dyn StepLike> = Arc::new(FakeStep::with_kwargs("B", b_kwargs));

    let mut kwargs = Kwargs::new();
    kwargs.insert("b".to_string(), Value::Step(b));

    let mut ids: Vec<&str> = recursive_dependencies_of_kwargs(&kwargs)
        .iter()
        .map(|s| s.unique_id())
        .collect();
    ids.sort_unstable();
    assert_eq!(ids, vec!["A", "B"]);
}

#[test]
fn recursive_dependencies_dedup_a_diamond() {
    let mut b_kwargs = Kwargs::new();
    b_kwargs.insert("upstream".to_string(), step_value("A"));
    let b: Arc<dyn StepLike> = Arc::new(FakeStep::with_kwargs("B", b_kwargs));

    let mut c_kwargs = Kwargs::new();
    c_kwargs.insert("upstream".to_string(), step_value("A"));
    let c: Arc<dyn StepLike> = Arc::new(FakeStep::with_kwargs("C", c_kwargs));

    let mut kwargs = Kwargs::new();
    kwargs.insert("b".to_string(), Value::Step(b));
    kwargs.insert("c".to_string(), Value::Step(c));

    let deps = recursive_dependencies_of_kwargs(&kwargs);
    assert_eq!(deps.iter().filter(|s| s.unique_id() == "A").count(), 1);
    assert_eq!(deps.len(), 3);
}
