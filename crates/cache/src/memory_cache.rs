// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! An ephemeral, process-local [`StepCache`].
//!
//! Results live only in a guarded map and never survive process exit.
//! `step_dir` still returns `Some` — backed by a process-lifetime temporary
//! directory — so steps whose `cache_results` is true but whose results
//! aren't yet computed can still get a stable, persistent-looking work
//! directory across retries within a single run (§4.6).

use detstep_core::{CacheError, StepCache};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct InMemoryStepCache {
    results: Mutex<HashMap<String, Vec<u8>>>,
    work_root: TempDir,
}

impl InMemoryStepCache {
    /// # Errors
    /// Returns the I/O error from creating the backing temporary directory.
    pub fn new() -> Result<Self, CacheError> {
        Ok(Self {
            results: Mutex::new(HashMap::new()),
            work_root: TempDir::new()?,
        })
    }
}

impl StepCache for InMemoryStepCache {
    fn contains(&self, unique_id: &str) -> bool {
        self.results.lock().contains_key(unique_id)
    }

    fn read_bytes(&self, unique_id: &str) -> Result<Vec<u8>, CacheError> {
        self.results
            .lock()
            .get(unique_id)
            .cloned()
            .ok_or_else(|| CacheError::NotFound(unique_id.to_string()))
    }

    fn write_bytes(&self, unique_id: &str, bytes: &[u8]) -> Result<(), CacheError> {
        self.results
            .lock()
            .insert(unique_id.to_string(), bytes.to_vec());
        Ok(())
    }

    fn step_dir(&self, unique_id: &str) -> Option<PathBuf> {
        let dir = self.work_root.path().join(unique_id);
        std::fs::create_dir_all(&dir).ok()?;
        Some(dir)
    }
}

#[cfg(test)]
#[path = "memory_cache_tests.rs"]
mod tests;
