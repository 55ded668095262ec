// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared fakes for `Value`-graph tests, used across crates.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`; `detstep-engine`
//! enables the feature in its dev-dependencies since its substitution and
//! dry-run tests need stand-in `StepLike`/`DeferredLike` graphs without
//! depending back on the engine's own step machinery.

use crate::error::EngineError;
use crate::step_cache::StepCache;
use crate::value::{DeferredLike, DetHashObject, Kwargs, StepLike, Value};

/// A minimal, already-identified step. Its `result_value` is driven by a
/// `StepCache` lookup alone, matching how a real cached step behaves once
/// its `unique_id` is known; it never computes anything itself.
#[derive(Debug)]
pub struct FakeStep {
    pub id: String,
    pub kwargs: Kwargs,
}

impl FakeStep {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kwargs: Kwargs::new(),
        }
    }

    pub fn with_kwargs(id: impl Into<String>, kwargs: Kwargs) -> Self {
        Self {
            id: id.into(),
            kwargs,
        }
    }
}

impl StepLike for FakeStep {
    fn unique_id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.id
    }

    fn kwargs(&self) -> &Kwargs {
        &self.kwargs
    }

    fn result_value(&self, cache: &dyn StepCache) -> Result<Value, EngineError> {
        let bytes = cache.read_bytes(&self.id)?;
        Ok(Value::Bytes(bytes))
    }
}

/// A minimal deferred construction: a constructor name plus already-resolved
/// argument values, standing in for a real `DeferredConstruction<...>`.
#[derive(Debug)]
pub struct FakeDeferred {
    pub ctor: &'static str,
    pub args: Vec<Value>,
}

impl FakeDeferred {
    pub fn new(ctor: &'static str, args: Vec<Value>) -> Self {
        Self { ctor, args }
    }
}

impl DeferredLike for FakeDeferred {
    fn hash_parts(&self) -> Value {
        Value::Seq(vec![
            Value::Str(self.ctor.to_string()),
            Value::Seq(self.args.clone()),
        ])
    }

    fn materialize_value(&self, _cache: &dyn StepCache) -> Result<Value, EngineError> {
        Ok(Value::Seq(self.args.clone()))
    }
}

/// A minimal opaque object hashing to a fixed tag plus an integer payload.
#[derive(Debug)]
pub struct FakeOpaque(pub i64);

impl DetHashObject for FakeOpaque {
    fn det_hash_object(&self) -> Value {
        Value::Seq(vec![
            Value::Str("FakeOpaque".to_string()),
            Value::Int(self.0),
        ])
    }
}
