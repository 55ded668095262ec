// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Work-directory lifecycle (§4.6): where a running step's scratch
//! directory lives, and whether it's retained after `run` returns.

use detstep_core::StepCache;
use std::path::PathBuf;
use tracing::trace;

/// A work directory and whether it should be retained after `run` exits.
pub struct WorkDirLease {
    pub path: PathBuf,
    pub persistent: bool,
}

/// Prepare the work directory for a step about to run.
///
/// If `cache` exposes a persistent `step_dir` for `unique_id`, the work
/// directory is `step_dir/work`, created if absent and retained on return.
/// Otherwise it's a fresh temporary directory prefixed with `unique_id`,
/// to be deleted on return.
pub fn prepare(cache: &dyn StepCache, unique_id: &str) -> std::io::Result<WorkDirLease> {
    if let Some(step_dir) = cache.step_dir(unique_id) {
        let work_dir = step_dir.join("work");
        std::fs::create_dir_all(&work_dir)?;
        trace!(unique_id, path = %work_dir.display(), "persistent work dir ready");
        Ok(WorkDirLease {
            path: work_dir,
            persistent: true,
        })
    } else {
        let parent = std::env::temp_dir();
        let path = parent.join(format!("{unique_id}-{}", unique_suffix()));
        std::fs::create_dir_all(&path)?;
        trace!(unique_id, path = %path.display(), "ephemeral work dir created");
        Ok(WorkDirLease {
            path,
            persistent: false,
        })
    }
}

/// Tear down a lease once `run` has returned, per its retention policy.
pub fn teardown(lease: &WorkDirLease, unique_id: &str) {
    if lease.persistent {
        trace!(unique_id, path = %lease.path.display(), "retaining persistent work dir");
        return;
    }
    trace!(unique_id, path = %lease.path.display(), "removing ephemeral work dir");
    if let Err(err) = std::fs::remove_dir_all(&lease.path) {
        if err.kind() != std::io::ErrorKind::NotFound {
            tracing::warn!(unique_id, error = %err, "failed to remove ephemeral work dir");
        }
    }
}

fn unique_suffix() -> String {
    use rand::RngCore;
    format!("{:016x}", rand::thread_rng().next_u64())
}

#[cfg(test)]
#[path = "workdir_tests.rs"]
mod tests;
