// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `StepInstance<S>` (§4, §6.4): the per-construction bookkeeping around a
//! concrete [`crate::StepDefinition`] — resolved identity, resolved
//! cacheability, and the reentrancy/work-directory machinery that guards a
//! single `run`. `S` itself carries no state; every field here is about
//! *this particular construction* of it.

use crate::context::RunContext;
use crate::definition::{StepDefinition, RESERVED_PARAMETER_NAMES};
use crate::dependencies;
use crate::error::RuntimeError;
use crate::{identity, workdir};
use detstep_core::{ConfigError, EngineError, IntoValue, Kwargs, StepCache, StepLike, Value};
use parking_lot::Mutex;
use std::fmt;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};

/// A concrete, constructed step: `S`'s static declarations plus the kwargs,
/// optional name/format/config overrides, and resolved `cache_results` for
/// this particular construction.
pub struct StepInstance<S: StepDefinition> {
    kwargs: Kwargs,
    name: Option<String>,
    format: S::Format,
    cache_results: bool,
    config: Option<Value>,
    unique_id: OnceLock<String>,
    running: AtomicBool,
    work_dir_for_run: Mutex<Option<PathBuf>>,
}

impl<S: StepDefinition> StepInstance<S> {
    /// Construct a step, validating `VERSION`, reserved-parameter
    /// collisions (S10), and resolving `cache_results` per the §3 table.
    pub fn construct(
        kwargs: Kwargs,
        step_name: Option<String>,
        cache_results: Option<bool>,
        step_format: Option<S::Format>,
        step_config: Option<Value>,
    ) -> Result<Arc<Self>, ConfigError> {
        if let Some(version) = S::VERSION {
            identity::validate_version(version)?;
        }
        identity::check_reserved_parameter_collision(
            S::CLASS_NAME,
            S::INPUT_FIELDS,
            RESERVED_PARAMETER_NAMES,
        )?;
        let cache_results =
            identity::resolve_cacheable(S::CLASS_NAME, cache_results, S::DETERMINISTIC, S::CACHEABLE)?;

        Ok(Arc::new(Self {
            kwargs,
            name: step_name,
            format: step_format.unwrap_or_default(),
            cache_results,
            config: step_config,
            unique_id: OnceLock::new(),
            running: AtomicBool::new(false),
            work_dir_for_run: Mutex::new(None),
        }))
    }

    /// `<ClassName>[-<VERSION>]-<hash32>`, memoized on first access.
    pub fn unique_id(&self) -> &str {
        self.unique_id.get_or_init(|| {
            if S::DETERMINISTIC {
                identity::deterministic_unique_id(
                    S::CLASS_NAME,
                    S::VERSION,
                    self.format.identity(),
                    &self.kwargs,
                )
            } else {
                identity::non_deterministic_unique_id(S::CLASS_NAME, S::VERSION)
            }
        })
    }

    pub fn cache_results(&self) -> bool {
        self.cache_results
    }

    /// Resolve this step's result: a cache hit if `cache_results` and the
    /// entry already exists, otherwise substitute dependencies, run, and
    /// (if cacheable) write through before returning.
    ///
    /// A cacheable run's return value is re-decoded from what was just
    /// written rather than the freshly computed value directly, so a
    /// lazily-produced output (e.g. `LazySeq`) is handed back fully
    /// replayable, matching what a later cache read would produce (§4.2
    /// point 4).
    pub fn result(&self, cache: &dyn StepCache) -> Result<S::Output, EngineError> {
        let id = self.unique_id().to_string();

        if self.cache_results && cache.contains(&id) {
            let bytes = cache.read_bytes(&id)?;
            return self.format.decode(&bytes).map_err(EngineError::other);
        }

        let resolved_kwargs = crate::substitute::substitute_kwargs(&self.kwargs, cache)?;
        let input = S::from_kwargs(&resolved_kwargs)?;
        let output = self.run(input, cache, &id)?;

        if self.cache_results {
            let bytes = self.format.encode(&output).map_err(EngineError::other)?;
            cache.write_bytes(&id, &bytes)?;
            let reread = cache.read_bytes(&id)?;
            self.format.decode(&reread).map_err(EngineError::other)
        } else {
            Ok(output)
        }
    }

    /// Run the step solely for its cache side effect. Errors if this step
    /// was never resolved as cacheable.
    pub fn ensure_result(&self, cache: &dyn StepCache) -> Result<(), EngineError> {
        if !self.cache_results {
            return Err(EngineError::other(RuntimeError::NotCacheableForEnsure(
                self.unique_id().to_string(),
            )));
        }
        if cache.contains(self.unique_id()) {
            return Ok(());
        }
        self.result(cache)?;
        Ok(())
    }

    /// Steps directly reachable through this step's own kwargs (§4.2).
    pub fn dependencies(&self) -> Vec<Arc<dyn StepLike>> {
        dependencies::direct_dependencies_of_kwargs(&self.kwargs)
    }

    /// The transitive closure of `dependencies`, crossing `Deferred`
    /// boundaries (§4.2).
    pub fn recursive_dependencies(&self) -> Vec<Arc<dyn StepLike>> {
        dependencies::recursive_dependencies_of_kwargs(&self.kwargs)
    }

    /// The work directory assigned to the run currently in progress.
    /// Only valid to call from within `S::run`.
    pub fn work_dir(&self) -> Result<PathBuf, EngineError> {
        self.work_dir_for_run
            .lock()
            .clone()
            .ok_or_else(|| EngineError::other(RuntimeError::WorkDirOutsideRun(self.unique_id().to_string())))
    }

    /// This step's attached `step_config`, if one was supplied at
    /// construction.
    pub fn config(&self) -> Result<&Value, EngineError> {
        self.config
            .as_ref()
            .ok_or_else(|| EngineError::other(RuntimeError::NoConfig(self.unique_id().to_string())))
    }

    fn run(&self, input: S::Input, cache: &dyn StepCache, id: &str) -> Result<S::Output, EngineError> {
        if self.running.swap(true, Ordering::SeqCst) {
            return Err(EngineError::other(RuntimeError::ReentrantRun(id.to_string())));
        }
        let _guard = ReentrancyGuard(&self.running);

        let lease = workdir::prepare(cache, id).map_err(EngineError::other)?;
        *self.work_dir_for_run.lock() = Some(lease.path.clone());

        let mut ctx = RunContext::new(lease.path.clone(), S::DETERMINISTIC);
        let outcome = S::run(input, &mut ctx);

        *self.work_dir_for_run.lock() = None;
        workdir::teardown(&lease, id);

        outcome.map_err(EngineError::other)
    }
}

/// Resets the reentrancy flag on drop, including on an early return or
/// `run`'s panic unwinding past this instance.
struct ReentrancyGuard<'a>(&'a AtomicBool);

impl Drop for ReentrancyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl<S: StepDefinition> fmt::Debug for StepInstance<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StepInstance")
            .field("class_name", &S::CLASS_NAME)
            .field("name", &self.name)
            .field("cache_results", &self.cache_results)
            .finish_non_exhaustive()
    }
}

impl<S: StepDefinition> StepLike for StepInstance<S> {
    fn unique_id(&self) -> &str {
        StepInstance::unique_id(self)
    }

    fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_else(|| StepInstance::unique_id(self))
    }

    fn kwargs(&self) -> &Kwargs {
        &self.kwargs
    }

    fn result_value(&self, cache: &dyn StepCache) -> Result<Value, EngineError> {
        Ok(self.result(cache)?.into_value())
    }
}

/// Lets a constructed step be embedded directly as a dependency value in a
/// dependent step's kwargs.
impl<S: StepDefinition> IntoValue for Arc<StepInstance<S>> {
    fn into_value(self) -> Value {
        Value::Step(self)
    }
}

#[cfg(test)]
#[path = "instance_tests.rs"]
mod tests;
