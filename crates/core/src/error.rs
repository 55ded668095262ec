// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types shared by the contracts this crate defines.
//!
//! Engine-level errors (re-entrant `run`, `work_dir` misuse, a step's own
//! `run` failing) live in `detstep-engine`, since they only make sense in
//! terms of a running step. This crate only needs to describe what can go
//! wrong constructing a step's static declarations, and what can go wrong
//! talking to a cache or a format.

use thiserror::Error;

/// A step was misdeclared. Always fatal for that step; never retried.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid VERSION '{0}': must match ^[A-Za-z0-9]+$")]
    InvalidVersion(String),

    #[error("step '{0}' is configured with cache_results=true but CACHEABLE=false")]
    NotCacheable(String),

    #[error("step '{0}' declares a run-input field named '{1}', which collides with a reserved step-construction parameter")]
    ReservedParameterCollision(String, &'static str),

    #[error("missing required kwarg '{0}'")]
    MissingKwarg(String),

    #[error("kwarg '{0}' has the wrong shape: expected {1}")]
    WrongShape(String, &'static str),
}

/// A cache implementation failed to read or write an entry.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("encode error: {0}")]
    Encode(String),

    #[error("decode error: {0}")]
    Decode(String),

    #[error("no entry for step '{0}'")]
    NotFound(String),
}

/// A format implementation failed to encode or decode a value.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("serialize error: {0}")]
    Serialize(String),

    #[error("deserialize error: {0}")]
    Deserialize(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Erased error type for [`crate::value::StepLike::result_value`] and
/// [`crate::value::DeferredLike::materialize_value`].
///
/// The concrete, structured errors a running step can raise
/// (re-entrant `run`, a step's own `run` failing, ...) are defined in
/// `detstep-engine`, which depends on this crate — so they can't appear
/// here by name without a cycle. `EngineError` carries the structured
/// errors this crate *does* own directly, and boxes everything else.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("cache error: {0}")]
    Cache(#[from] CacheError),

    #[error("{0}")]
    Other(Box<dyn std::error::Error + Send + Sync>),
}

impl EngineError {
    pub fn other(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        EngineError::Other(Box::new(err))
    }
}
