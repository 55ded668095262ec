// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Compact binary format, via `bincode`. Mirrors the original system's
//! default binary-pickle format for large intermediate results where
//! human inspection of the cache directory doesn't matter.

use crate::{bincode_decode, bincode_encode, Format};
use detstep_core::{FormatError, FormatId};
use serde::{de::DeserializeOwned, Serialize};

#[derive(Debug, Clone, Copy, Default)]
pub struct BincodeFormat;

impl FormatId for BincodeFormat {
    const VERSION: &'static str = "1";
}

impl<T: Serialize + DeserializeOwned> Format<T> for BincodeFormat {
    fn encode(&self, value: &T) -> Result<Vec<u8>, FormatError> {
        bincode_encode(value)
    }

    fn decode(&self, bytes: &[u8]) -> Result<T, FormatError> {
        bincode_decode(bytes)
    }

    fn extension(&self) -> &'static str {
        "bin"
    }
}

#[cfg(test)]
#[path = "bincode_format_tests.rs"]
mod tests;
