// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! detstep-cache: concrete [`detstep_core::StepCache`] implementations
//! (§4.8). The engine depends on the trait alone; this crate supplies the
//! two implementations most programs need, ephemeral and durable.

mod fs_cache;
mod memory_cache;

pub use fs_cache::FsStepCache;
pub use memory_cache::InMemoryStepCache;
