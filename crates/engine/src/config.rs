// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The engine's own operating knobs (§6.5) — distinct from the declarative
//! step-construction layer, which stays out of scope. Never read implicitly
//! by `StepInstance` methods; a caller builds one explicitly and passes its
//! `cache_root`/`default_format` on to whichever `StepCache`/`Format` it
//! constructs, matching the "default cache as process-wide state" redesign
//! decision in §9.

use std::path::PathBuf;

const CACHE_ROOT_ENV: &str = "DETSTEP_CACHE_ROOT";

/// Default cache root directory and default serialization format, resolved
/// once by the caller rather than read implicitly by steps.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub cache_root: PathBuf,
}

impl EngineConfig {
    /// Build from `DETSTEP_CACHE_ROOT`, falling back to this platform's
    /// conventional user state directory (`dirs::state_dir()`, or
    /// `dirs::data_local_dir()` where no state directory convention
    /// exists) joined with `detstep`.
    pub fn from_env() -> Self {
        let cache_root = std::env::var_os(CACHE_ROOT_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(Self::default_cache_root);
        Self { cache_root }
    }

    fn default_cache_root() -> PathBuf {
        dirs::state_dir()
            .or_else(dirs::data_local_dir)
            .unwrap_or_else(std::env::temp_dir)
            .join("detstep")
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
