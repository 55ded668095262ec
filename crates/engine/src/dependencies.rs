// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Dependency traversal over a step's `kwargs` (§4.2 `dependencies` /
//! `recursive_dependencies`).
//!
//! Both queries recurse into ordered sequences, sets, and mappings
//! (values only), and deliberately stop at strings/bytes (leaves, never
//! walked character-by-character). They differ only in whether they cross
//! a `DeferredConstruction` boundary: `direct_dependencies_of_kwargs` does
//! not (a deferred construction's embedded steps are not *this* step's
//! direct dependencies), while `recursive_dependencies_of_kwargs` does, by
//! walking the deferred's own `hash_parts()` representation.

use detstep_core::{DeferredLike, Kwargs, StepLike, Value};
use std::collections::HashSet;
use std::sync::Arc;

/// Every `Step` reachable directly inside `kwargs`, without crossing a
/// `Deferred` boundary. A set by `unique_id`: a step referenced under two
/// different parameter names appears once.
pub fn direct_dependencies_of_kwargs(kwargs: &Kwargs) -> Vec<Arc<dyn StepLike>> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for value in kwargs.values() {
        collect_direct(value, &mut seen, &mut out);
    }
    out
}

fn collect_direct(value: &Value, seen: &mut HashSet<String>, out: &mut Vec<Arc<dyn StepLike>>) {
    match value {
        Value::Step(s) => {
            if seen.insert(s.unique_id().to_string()) {
                out.push(s.clone());
            }
        }
        Value::Seq(items) | Value::Set(items) => {
            for item in items {
                collect_direct(item, seen, out);
            }
        }
        Value::Map(entries) => {
            for (_, v) in entries {
                collect_direct(v, seen, out);
            }
        }
        _ => {}
    }
}

/// The transitive closure of `direct_dependencies_of_kwargs`: also
/// recurses through each discovered step's own `kwargs`, and crosses
/// `Deferred` boundaries by walking their `hash_parts()`.
pub fn recursive_dependencies_of_kwargs(kwargs: &Kwargs) -> Vec<Arc<dyn StepLike>> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for value in kwargs.values() {
        collect_recursive(value, &mut seen, &mut out);
    }
    out
}

fn collect_recursive(value: &Value, seen: &mut HashSet<String>, out: &mut Vec<Arc<dyn StepLike>>) {
    match value {
        Value::Step(s) => {
            if seen.insert(s.unique_id().to_string()) {
                out.push(s.clone());
                for v in s.kwargs().values() {
                    collect_recursive(v, seen, out);
                }
            }
        }
        Value::Seq(items) | Value::Set(items) => {
            for item in items {
                collect_recursive(item, seen, out);
            }
        }
        Value::Map(entries) => {
            for (_, v) in entries {
                collect_recursive(v, seen, out);
            }
        }
        Value::Deferred(d) => collect_recursive(&d.hash_parts(), seen, out),
        _ => {}
    }
}

#[cfg(test)]
#[path = "dependencies_tests.rs"]
mod tests;
