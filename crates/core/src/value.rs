// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The dynamic value model used for step `kwargs`.
//!
//! Rust's `run()` contract for a concrete step is strongly typed (see
//! `StepDefinition::Input` in `detstep-engine`), but the *engine* has to
//! treat `kwargs` generically: walk it for dependencies, hash it for
//! identity, and substitute nested steps/deferred constructions with their
//! results before handing it to a step's typed constructor. `Value` is the
//! tagged-variant representation that makes that generic treatment
//! possible, matching the "dynamic-typed kwargs" design note.

use crate::error::EngineError;
use crate::step_cache::StepCache;
use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

/// Ordered mapping from parameter name to value; the dynamic form of a
/// step's `kwargs`. Insertion order is preserved (mirrors Python's `dict`
/// so that positional-ish `run(**kwargs)` diagnostics read naturally).
pub type Kwargs = IndexMap<String, Value>;

/// Handle to a step, type-erased enough to live inside a `Value`.
///
/// Implemented by `detstep-engine`'s `StepInstance<S>` for every concrete
/// step definition `S`. Only what the engine needs to traverse, hash, and
/// substitute a step is exposed here — the rest of the `Step` surface
/// (`result`, `ensure_result`, `dependencies`, ...) is generic and lives in
/// `detstep-engine` where the concrete `S` is still known.
pub trait StepLike: Send + Sync + fmt::Debug {
    /// Stable identity, `<ClassName>[-<VERSION>]-<hash32>`.
    fn unique_id(&self) -> &str;

    /// Human-readable label (defaults to `unique_id`).
    fn name(&self) -> &str;

    /// This step's own (unsubstituted) kwargs, for dependency traversal.
    fn kwargs(&self) -> &Kwargs;

    /// Run (or fetch from cache) and return the result as a `Value`, for
    /// embedding into a dependent step's substituted kwargs.
    fn result_value(&self, cache: &dyn StepCache) -> Result<Value, EngineError>;
}

/// Handle to a `DeferredConstruction`, type-erased for the same reason as
/// [`StepLike`].
pub trait DeferredLike: Send + Sync + fmt::Debug {
    /// `(constructor qualified name, args, kwargs)`, as a `Value`, for
    /// det-hashing. Matches §4.3's identity rule exactly.
    fn hash_parts(&self) -> Value;

    /// Recursively resolve args/kwargs (steps → results, nested deferred →
    /// materialized) and invoke the stored constructor, returning the
    /// constructed value as a `Value`.
    fn materialize_value(&self, cache: &dyn StepCache) -> Result<Value, EngineError>;
}

/// A structural fallback hook for values that are neither primitives,
/// containers, steps, nor deferred constructions: "class-qualified name
/// plus public state", per §4.1.
pub trait DetHashObject: Send + Sync + fmt::Debug {
    fn det_hash_object(&self) -> Value;
}

/// The dynamic, tagged-variant value used for `kwargs`, dependency
/// traversal, substitution, and identity hashing.
#[derive(Clone, Debug)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Bytes(Vec<u8>),
    /// An ordered sequence (list/tuple equivalents).
    Seq(Vec<Value>),
    /// An unordered collection; hashed with sorted element digests.
    Set(Vec<Value>),
    /// An ordered mapping; hashed with sorted (key-digest, value-digest) pairs.
    Map(Vec<(Value, Value)>),
    Step(Arc<dyn StepLike>),
    Deferred(Arc<dyn DeferredLike>),
    Opaque(Arc<dyn DetHashObject>),
}

impl Value {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_seq(&self) -> Option<&[Value]> {
        match self {
            Value::Seq(v) => Some(v.as_slice()),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&[(Value, Value)]> {
        match self {
            Value::Map(m) => Some(m.as_slice()),
            _ => None,
        }
    }

    pub fn as_step(&self) -> Option<&Arc<dyn StepLike>> {
        match self {
            Value::Step(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_deferred(&self) -> Option<&Arc<dyn DeferredLike>> {
        match self {
            Value::Deferred(d) => Some(d),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

/// Converts a typed Rust value into the dynamic [`Value`] representation,
/// so a step's typed `Output` can be embedded into a dependent step's
/// kwargs after substitution.
pub trait IntoValue {
    fn into_value(self) -> Value;
}

impl IntoValue for Value {
    fn into_value(self) -> Value {
        self
    }
}

impl IntoValue for () {
    fn into_value(self) -> Value {
        Value::Null
    }
}

impl IntoValue for bool {
    fn into_value(self) -> Value {
        Value::Bool(self)
    }
}

macro_rules! impl_into_value_int {
    ($($t:ty),+) => {
        $(impl IntoValue for $t {
            fn into_value(self) -> Value {
                Value::Int(self as i64)
            }
        })+
    };
}
// `u8` is deliberately excluded: `Vec<u8>` has its own dedicated `Bytes`
// impl below, and a `u8: IntoValue` impl would make it also match the
// blanket `impl<T: IntoValue> IntoValue for Vec<T>`, an overlapping impl
// the compiler rejects. Use `Value::Int` directly for a standalone byte.
impl_into_value_int!(i8, i16, i32, i64, u16, u32, usize, isize);

impl IntoValue for f32 {
    fn into_value(self) -> Value {
        Value::Float(self as f64)
    }
}

impl IntoValue for f64 {
    fn into_value(self) -> Value {
        Value::Float(self)
    }
}

impl IntoValue for String {
    fn into_value(self) -> Value {
        Value::Str(self)
    }
}

impl IntoValue for &str {
    fn into_value(self) -> Value {
        Value::Str(self.to_string())
    }
}

impl IntoValue for Vec<u8> {
    fn into_value(self) -> Value {
        Value::Bytes(self)
    }
}

impl<T: IntoValue> IntoValue for Vec<T> {
    fn into_value(self) -> Value {
        Value::Seq(self.into_iter().map(IntoValue::into_value).collect())
    }
}

impl<T: IntoValue> IntoValue for Option<T> {
    fn into_value(self) -> Value {
        match self {
            Some(v) => v.into_value(),
            None => Value::Null,
        }
    }
}

impl<V: IntoValue> IntoValue for std::collections::HashMap<String, V> {
    fn into_value(self) -> Value {
        Value::Map(
            self.into_iter()
                .map(|(k, v)| (Value::Str(k), v.into_value()))
                .collect(),
        )
    }
}

impl<V: IntoValue> IntoValue for IndexMap<String, V> {
    fn into_value(self) -> Value {
        Value::Map(
            self.into_iter()
                .map(|(k, v)| (Value::Str(k), v.into_value()))
                .collect(),
        )
    }
}

#[cfg(test)]
#[path = "value_tests.rs"]
mod tests;
