// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Engine-level error types (§7): everything that only makes sense once a
//! step is actually running, as opposed to `detstep_core::ConfigError`
//! (misdeclared at construction) or `detstep_core::CacheError`/`FormatError`
//! (a cache or format implementation misbehaving).

use thiserror::Error;

/// A violation of the engine's own runtime contract — never a step
/// author's fault, never retried.
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("run is already in progress on step '{0}'")]
    ReentrantRun(String),

    #[error("work_dir accessed outside of run on step '{0}'")]
    WorkDirOutsideRun(String),

    #[error("no config was attached to step '{0}'")]
    NoConfig(String),

    #[error("ensure_result called on non-cacheable step '{0}'")]
    NotCacheableForEnsure(String),
}

/// A step's own `run` raised. Propagated verbatim to the caller; per §7 the
/// work directory is still cleaned up according to §4.6 and the cache is
/// never written.
#[derive(Debug, Error)]
#[error("step '{step}' failed: {source}")]
pub struct StepError {
    pub step: String,
    #[source]
    pub source: Box<dyn std::error::Error + Send + Sync>,
}

impl StepError {
    pub fn new(step: impl Into<String>, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self {
            step: step.into(),
            source: Box::new(source),
        }
    }
}
