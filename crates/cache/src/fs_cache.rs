// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! A durable, disk-backed [`StepCache`] rooted at a directory.
//!
//! Layout: `<root>/<unique_id>/result.<ext>` holds the encoded bytes,
//! written via temp file + fsync + rename + parent-dir fsync so a crash
//! never leaves a partial entry visible. A sibling `result.<ext>.done`
//! marker is created only after the rename succeeds; `contains` requires
//! both files so a reader can never observe a result whose rename raced
//! it (§7).
//!
//! The format extension is fixed per cache instance, since `StepCache` is
//! format-agnostic by contract (§6.1) — the engine picks one extension per
//! cache the same way it picks one format per step's `Format` association,
//! and passes it in at construction.

use detstep_core::{CacheError, StepCache};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

const RESULT_FILE_STEM: &str = "result";
const DEFAULT_EXTENSION: &str = "bin";

pub struct FsStepCache {
    root: PathBuf,
    extension: String,
}

impl FsStepCache {
    /// Root the cache at `root`, using `extension` (without a leading dot,
    /// e.g. `"json"`) for result files.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_extension(root, DEFAULT_EXTENSION)
    }

    pub fn with_extension(root: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            extension: extension.into(),
        }
    }

    fn entry_dir(&self, unique_id: &str) -> PathBuf {
        self.root.join(unique_id)
    }

    fn result_path(&self, unique_id: &str) -> PathBuf {
        self.entry_dir(unique_id)
            .join(format!("{RESULT_FILE_STEM}.{}", self.extension))
    }

    fn done_marker_path(&self, unique_id: &str) -> PathBuf {
        self.entry_dir(unique_id)
            .join(format!("{RESULT_FILE_STEM}.{}.done", self.extension))
    }

    fn tmp_path(&self, unique_id: &str) -> PathBuf {
        self.entry_dir(unique_id)
            .join(format!("{RESULT_FILE_STEM}.{}.tmp", self.extension))
    }
}

fn fsync_file(path: &Path) -> Result<(), CacheError> {
    File::open(path)?.sync_all()?;
    Ok(())
}

fn fsync_dir(path: &Path) -> Result<(), CacheError> {
    File::open(path)?.sync_all()?;
    Ok(())
}

impl StepCache for FsStepCache {
    fn contains(&self, unique_id: &str) -> bool {
        self.result_path(unique_id).is_file() && self.done_marker_path(unique_id).is_file()
    }

    fn read_bytes(&self, unique_id: &str) -> Result<Vec<u8>, CacheError> {
        if !self.contains(unique_id) {
            return Err(CacheError::NotFound(unique_id.to_string()));
        }
        Ok(std::fs::read(self.result_path(unique_id))?)
    }

    fn write_bytes(&self, unique_id: &str, bytes: &[u8]) -> Result<(), CacheError> {
        let dir = self.entry_dir(unique_id);
        std::fs::create_dir_all(&dir)?;

        let tmp = self.tmp_path(unique_id);
        {
            let mut file = File::create(&tmp)?;
            file.write_all(bytes)?;
        }
        fsync_file(&tmp)?;

        let result_path = self.result_path(unique_id);
        std::fs::rename(&tmp, &result_path)?;
        fsync_dir(&dir)?;

        File::create(self.done_marker_path(unique_id))?;
        fsync_dir(&dir)?;

        debug!(unique_id, bytes = bytes.len(), "wrote cache entry");
        Ok(())
    }

    fn step_dir(&self, unique_id: &str) -> Option<PathBuf> {
        let dir = self.entry_dir(unique_id);
        std::fs::create_dir_all(&dir).ok()?;
        Some(dir)
    }
}

#[cfg(test)]
#[path = "fs_cache_tests.rs"]
mod tests;
