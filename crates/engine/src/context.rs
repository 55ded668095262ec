// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-run context handed to a step's `run` (§4.7, REDESIGN FLAGS §9).
//!
//! The original system reseeds a process-global random source at the start
//! of every deterministic `run`. This design deliberately replaces that
//! with an explicit, per-run source: deterministic steps get a source seeded
//! from a fixed constant, non-deterministic steps get one seeded from OS
//! entropy, and nothing here is ever process-global.

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::{Path, PathBuf};

/// The fixed seed installed for every deterministic step's `run`. Any
/// pseudorandom behavior inside a deterministic step is reproducible as
/// long as it draws only from the `rng` handed to it here.
pub const DETERMINISTIC_SEED: u64 = 784_507_111;

/// What a step's `run` receives: a scoped work directory and a seeded RNG.
pub struct RunContext {
    work_dir: PathBuf,
    rng: StdRng,
}

impl RunContext {
    pub(crate) fn new(work_dir: PathBuf, deterministic: bool) -> Self {
        let rng = if deterministic {
            StdRng::seed_from_u64(DETERMINISTIC_SEED)
        } else {
            StdRng::from_entropy()
        };
        Self { work_dir, rng }
    }

    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
