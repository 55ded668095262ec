// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The `StepCache` contract (§6.1): the persistence interface the engine
//! requires. The core consumes this trait but never implements it —
//! concrete implementations (`InMemoryStepCache`, `FsStepCache`) live in
//! `detstep-cache`.

use crate::error::CacheError;
use std::path::PathBuf;

/// Persists and retrieves encoded step results, keyed by `unique_id`.
///
/// Implementations must guarantee that `contains`, `read_bytes`, and
/// `write_bytes` for a given key are mutually consistent: once
/// `write_bytes` returns `Ok`, `contains` must return `true` and
/// `read_bytes` must return bytes equal to what was written. A losing
/// writer in a write/write race is only tolerated if its write is
/// idempotent, which it is for deterministic steps with equal inputs
/// (same `unique_id` implies same bytes).
pub trait StepCache: Send + Sync {
    /// Whether an entry for this step's identity already exists.
    fn contains(&self, unique_id: &str) -> bool;

    /// Read the encoded bytes of a previously written result.
    ///
    /// Errors with [`CacheError::NotFound`] if `contains` would return
    /// `false`.
    fn read_bytes(&self, unique_id: &str) -> Result<Vec<u8>, CacheError>;

    /// Write the encoded bytes of a result. Implementations must leave no
    /// partial state visible to `contains`/`read_bytes` if interrupted
    /// mid-write (§7, cache I/O).
    fn write_bytes(&self, unique_id: &str, bytes: &[u8]) -> Result<(), CacheError>;

    /// The directory under which this step's persistent `work/` directory
    /// may live, if this cache is persistent. Ephemeral (in-memory-only)
    /// caches return `None`, which routes the engine to a temporary work
    /// directory that is deleted on return (§4.6).
    fn step_dir(&self, unique_id: &str) -> Option<PathBuf>;
}
