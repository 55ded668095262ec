// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Human-inspectable default format, via `serde_json`.

use crate::{json_decode, json_encode, Format};
use detstep_core::{FormatError, FormatId};
use serde::{de::DeserializeOwned, Serialize};

/// Serializes results as pretty-printed JSON (`serde_json::to_vec_pretty`).
/// The crate's overall default format, since it keeps `FsStepCache`
/// directories debuggable without extra tooling.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormat;

impl FormatId for JsonFormat {
    const VERSION: &'static str = "1";
}

impl<T: Serialize + DeserializeOwned> Format<T> for JsonFormat {
    fn encode(&self, value: &T) -> Result<Vec<u8>, FormatError> {
        json_encode(value)
    }

    fn decode(&self, bytes: &[u8]) -> Result<T, FormatError> {
        json_decode(bytes)
    }

    fn extension(&self) -> &'static str {
        "json"
    }
}

#[cfg(test)]
#[path = "json_format_tests.rs"]
mod tests;
