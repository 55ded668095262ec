// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pure, standalone pieces of step identity (§3, §4.1, §4.2): `VERSION`
//! validation, the cacheability-resolution table, reserved-parameter
//! collision detection, and the `unique_id` hash itself. Kept free of
//! `StepInstance` so the table in §3 and the regex in §4.2 can be
//! exercised directly, without constructing a step.

use detstep_core::{det_hash, ConfigError, FormatIdentity, Kwargs, Value};
use rand::RngCore;

/// `^[A-Za-z0-9]+$`, spelled out by hand rather than pulling in `regex`
/// for a single-character-class check.
pub fn validate_version(version: &str) -> Result<(), ConfigError> {
    if !version.is_empty() && version.chars().all(|c| c.is_ascii_alphanumeric()) {
        Ok(())
    } else {
        Err(ConfigError::InvalidVersion(version.to_string()))
    }
}

/// Reject a step definition whose `Input` shadows a reserved
/// step-construction parameter name (§6.4, S10).
pub fn check_reserved_parameter_collision(
    step_name: &str,
    input_fields: &[&'static str],
    reserved: &[&'static str],
) -> Result<(), ConfigError> {
    for field in input_fields {
        if let Some(&collision) = reserved.iter().find(|r| r == field) {
            return Err(ConfigError::ReservedParameterCollision(
                step_name.to_string(),
                collision,
            ));
        }
    }
    Ok(())
}

/// The cacheability-resolution table of §3, exactly.
pub fn resolve_cacheable(
    step_name: &str,
    explicit: Option<bool>,
    deterministic: bool,
    cacheable_class_flag: Option<bool>,
) -> Result<bool, ConfigError> {
    match (explicit, cacheable_class_flag) {
        (Some(true), Some(false)) => Err(ConfigError::NotCacheable(step_name.to_string())),
        (Some(true), _) => {
            if !deterministic {
                tracing::warn!(
                    step = step_name,
                    "cache_results=true requested explicitly on a non-deterministic step; \
                     its cache key is random, so each construction is a guaranteed miss"
                );
            }
            Ok(true)
        }
        (Some(false), _) => Ok(false),
        (None, Some(flag)) => {
            if flag && !deterministic {
                tracing::warn!(
                    step = step_name,
                    "CACHEABLE=true on a non-deterministic step; \
                     its cache key is random, so each construction is a guaranteed miss"
                );
            }
            Ok(flag)
        }
        (None, None) => Ok(deterministic),
    }
}

/// Render `<ClassName>[-<VERSION>]-<hash32>` for a deterministic step,
/// hashing `(format identity, format version, kwargs)` per §3/§4.2.
pub fn deterministic_unique_id(
    class_name: &str,
    version: Option<&str>,
    format: FormatIdentity,
    kwargs: &Kwargs,
) -> String {
    let composite = identity_composite(format, kwargs);
    render_unique_id(class_name, version, &det_hash(&composite))
}

/// Render `<ClassName>[-<VERSION>]-<hash32>` for a non-deterministic step:
/// a hash of a freshly drawn random seed, uncorrelated with `kwargs`.
pub fn non_deterministic_unique_id(class_name: &str, version: Option<&str>) -> String {
    let seed = rand::thread_rng().next_u64();
    let digest = det_hash(&Value::Int(seed as i64));
    render_unique_id(class_name, version, &digest)
}

fn identity_composite(format: FormatIdentity, kwargs: &Kwargs) -> Value {
    Value::Map(vec![
        (
            Value::Str("format_type".to_string()),
            Value::Str(format.type_name.to_string()),
        ),
        (
            Value::Str("format_version".to_string()),
            Value::Str(format.version.to_string()),
        ),
        (
            Value::Str("kwargs".to_string()),
            Value::Map(
                kwargs
                    .iter()
                    .map(|(k, v)| (Value::Str(k.clone()), v.clone()))
                    .collect(),
            ),
        ),
    ])
}

fn render_unique_id(class_name: &str, version: Option<&str>, full_digest: &str) -> String {
    let hash32 = &full_digest[..32];
    match version {
        Some(v) => format!("{class_name}-{v}-{hash32}"),
        None => format!("{class_name}-{hash32}"),
    }
}

#[cfg(test)]
#[path = "identity_tests.rs"]
mod tests;
