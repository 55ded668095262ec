// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! detstep-engine: the execution engine (§4) built on top of
//! `detstep-core`'s value model and `detstep-cache`/`detstep-format`'s
//! concrete implementations — step construction and identity (§3, §4.1),
//! dependency substitution (§4.4), the dry-run planner (§4.5), work
//! directory lifecycle (§4.6), and per-run context (§4.7).

mod config;
mod context;
mod definition;
mod dependencies;
mod deferred;
mod dry_run;
mod error;
mod identity;
mod instance;
mod lazy_seq;
mod substitute;
mod workdir;

pub use config::EngineConfig;
pub use context::RunContext;
pub use deferred::DeferredConstruction;
pub use definition::{StepDefinition, RESERVED_PARAMETER_NAMES};
pub use dependencies::{direct_dependencies_of_kwargs, recursive_dependencies_of_kwargs};
pub use dry_run::{plan, PlanEntry};
pub use error::{RuntimeError, StepError};
pub use instance::StepInstance;
pub use lazy_seq::LazySeq;
pub use substitute::{substitute, substitute_kwargs};
