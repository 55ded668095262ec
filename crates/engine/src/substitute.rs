// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Result substitution (§4.4): recursively replace embedded steps and
//! deferred constructions with their computed values, preserving container
//! kind and never mutating the input.

use detstep_core::{EngineError, Kwargs, StepCache, Value};
use tracing::trace;

/// Substitute `value`, recursing into sequences, sets, and maps; leaving
/// strings, bytes, and other primitives untouched.
pub fn substitute(value: &Value, cache: &dyn StepCache) -> Result<Value, EngineError> {
    match value {
        Value::Step(step) => {
            trace!(unique_id = step.unique_id(), "substituting step dependency");
            step.result_value(cache)
        }
        Value::Deferred(deferred) => {
            trace!("substituting deferred construction");
            deferred.materialize_value(cache)
        }
        Value::Seq(items) => Ok(Value::Seq(substitute_all(items, cache)?)),
        Value::Set(items) => Ok(Value::Set(substitute_all(items, cache)?)),
        Value::Map(entries) => {
            let mut out = Vec::with_capacity(entries.len());
            for (k, v) in entries {
                out.push((k.clone(), substitute(v, cache)?));
            }
            Ok(Value::Map(out))
        }
        // Primitives and opaque values are leaves: returned as-is.
        other => Ok(other.clone()),
    }
}

fn substitute_all(items: &[Value], cache: &dyn StepCache) -> Result<Vec<Value>, EngineError> {
    items.iter().map(|item| substitute(item, cache)).collect()
}

/// Substitute every value in a `kwargs` map, keys untouched.
pub fn substitute_kwargs(kwargs: &Kwargs, cache: &dyn StepCache) -> Result<Kwargs, EngineError> {
    let mut out = Kwargs::with_capacity(kwargs.len());
    for (k, v) in kwargs {
        out.insert(k.clone(), substitute(v, cache)?);
    }
    Ok(out)
}

#[cfg(test)]
#[path = "substitute_tests.rs"]
mod tests;
