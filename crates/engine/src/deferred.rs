// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `DeferredConstruction<T>` (§4.3): a late-bound call whose arguments may
//! include steps, materialized only once those steps resolve. Lets a
//! step's input be "construct this once these upstream steps have run"
//! without the wrapping step special-casing the pattern.

use crate::substitute::{substitute, substitute_kwargs};
use detstep_core::{DeferredLike, EngineError, IntoValue, Kwargs, StepCache, Value};
use std::fmt;

type Builder<T> = Box<dyn Fn(&[Value], &Kwargs) -> Result<T, EngineError> + Send + Sync>;

/// Wraps `(constructor, positional args, keyword args)`, where any of the
/// args/kwargs may themselves be `Step`s or nested `DeferredConstruction`s.
pub struct DeferredConstruction<T> {
    ctor_name: &'static str,
    args: Vec<Value>,
    kwargs: Kwargs,
    build: Builder<T>,
}

impl<T> DeferredConstruction<T>
where
    T: IntoValue + Send + Sync + 'static,
{
    pub fn new(
        ctor_name: &'static str,
        args: Vec<Value>,
        kwargs: Kwargs,
        build: impl Fn(&[Value], &Kwargs) -> Result<T, EngineError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            ctor_name,
            args,
            kwargs,
            build: Box::new(build),
        }
    }
}

impl<T> fmt::Debug for DeferredConstruction<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeferredConstruction")
            .field("ctor_name", &self.ctor_name)
            .field("args", &self.args)
            .field("kwargs", &self.kwargs)
            .finish_non_exhaustive()
    }
}

impl<T> DeferredLike for DeferredConstruction<T>
where
    T: IntoValue + Send + Sync + 'static,
{
    fn hash_parts(&self) -> Value {
        Value::Seq(vec![
            Value::Str(self.ctor_name.to_string()),
            Value::Seq(self.args.clone()),
            self.kwargs.clone().into_value(),
        ])
    }

    fn materialize_value(&self, cache: &dyn StepCache) -> Result<Value, EngineError> {
        let resolved_args: Vec<Value> = self
            .args
            .iter()
            .map(|v| substitute(v, cache))
            .collect::<Result<_, _>>()?;
        let resolved_kwargs = substitute_kwargs(&self.kwargs, cache)?;
        let built = (self.build)(&resolved_args, &resolved_kwargs)?;
        Ok(built.into_value())
    }
}

#[cfg(test)]
#[path = "deferred_tests.rs"]
mod tests;
