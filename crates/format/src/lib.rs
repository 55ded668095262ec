// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! detstep-format: the encode/decode half of the format contract (§6.2,
//! §4.9). Consumed by `detstep-cache`; the engine itself only ever touches
//! a format's *identity* (`detstep_core::FormatId`), never its bytes.

mod bincode_format;
mod json_format;

pub use bincode_format::BincodeFormat;
pub use json_format::JsonFormat;

use detstep_core::{FormatError, FormatId};
use serde::{de::DeserializeOwned, Serialize};

/// A serialization adapter for a step's result type `T`.
///
/// Only `FormatId::identity()` (the type name plus `VERSION`) ever enters
/// a step's `unique_id` — the `encode`/`decode` methods here are consumed
/// exclusively by cache implementations.
pub trait Format<T>: FormatId {
    fn encode(&self, value: &T) -> Result<Vec<u8>, FormatError>;
    fn decode(&self, bytes: &[u8]) -> Result<T, FormatError>;

    /// File extension used by `FsStepCache` for this format's result file
    /// (without the leading dot).
    fn extension(&self) -> &'static str;
}

/// Blanket-friendly helper so concrete formats only need to implement
/// serde's traits once per format, not once per `T`.
pub(crate) fn json_encode<T: Serialize>(value: &T) -> Result<Vec<u8>, FormatError> {
    serde_json::to_vec_pretty(value).map_err(|e| FormatError::Serialize(e.to_string()))
}

pub(crate) fn json_decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, FormatError> {
    serde_json::from_slice(bytes).map_err(|e| FormatError::Deserialize(e.to_string()))
}

pub(crate) fn bincode_encode<T: Serialize>(value: &T) -> Result<Vec<u8>, FormatError> {
    bincode::serialize(value).map_err(|e| FormatError::Serialize(e.to_string()))
}

pub(crate) fn bincode_decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, FormatError> {
    bincode::deserialize(bytes).map_err(|e| FormatError::Deserialize(e.to_string()))
}
