// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `StepDefinition` — a concrete step's static declarations (§3
//! class-level declarations, §9 design note). Implementors are
//! zero-sized marker types; all per-instance state (kwargs, resolved
//! `cache_results`, memoized `unique_id`, ...) lives in [`crate::StepInstance`].

use crate::context::RunContext;
use crate::error::StepError;
use detstep_core::{ConfigError, IntoValue, Kwargs};
use detstep_format::Format;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// The static contract a concrete step type implements.
///
/// `Self` is never constructed; it exists purely to carry the associated
/// types and consts that `StepInstance<Self>` reads when resolving
/// identity and cacheability, and to host the `run` logic itself.
pub trait StepDefinition: Send + Sync + 'static {
    /// The strongly-typed record `run` actually receives, built from the
    /// resolved (substituted) `kwargs` by [`StepDefinition::from_kwargs`].
    type Input: Send + 'static;

    /// The strongly-typed result of `run`. Must round-trip through
    /// `Self::Format` and be embeddable into a dependent step's kwargs via
    /// [`IntoValue`].
    type Output: Serialize + DeserializeOwned + IntoValue + Send + Sync + 'static;

    /// The serialization adapter used to cache this step's `Output`.
    type Format: Format<Self::Output> + Default + Send + Sync + 'static;

    /// Used as the `<ClassName>` component of `unique_id` and in log/error
    /// messages. Must be a valid Rust identifier-like name; it is not
    /// itself validated (unlike `VERSION`), since it comes from source,
    /// not from a caller-supplied string.
    const CLASS_NAME: &'static str;

    /// §3: if false, same inputs may produce different outputs; identity
    /// becomes random, and the step can't be cached without an explicit,
    /// warned-about override.
    const DETERMINISTIC: bool;

    /// §3: tri-state. `None` means "cache iff deterministic".
    const CACHEABLE: Option<bool> = None;

    /// §3: optional tag participating in identity, matching
    /// `^[A-Za-z0-9]+$`. Validated at construction, not here.
    const VERSION: Option<&'static str> = None;

    /// Field names of `Self::Input`, checked against the reserved
    /// step-construction parameter names of §6.4 at construction time
    /// (S10). Steps with no reserved-name risk may leave this empty.
    const INPUT_FIELDS: &'static [&'static str] = &[];

    /// Build `Self::Input` from fully-substituted `kwargs`.
    fn from_kwargs(kwargs: &Kwargs) -> Result<Self::Input, ConfigError>;

    /// The step's actual computation. Never called directly by users —
    /// only by the engine, which guarantees a work directory is already in
    /// place and `ctx` carries the seeding rules of §4.7.
    fn run(input: Self::Input, ctx: &mut RunContext) -> Result<Self::Output, StepError>;
}

/// Step-construction parameter names reserved by the (out-of-scope)
/// declarative configuration layer (§6.4). Collision between any of these
/// and an `Input` field name is a structural error in the step's
/// definition (S10), checked at `StepInstance::construct` time.
pub const RESERVED_PARAMETER_NAMES: &[&str] =
    &["step_name", "cache_results", "step_format", "step_config"];
