// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Deterministic structural hashing (§4.1).
//!
//! `det_hash` renders a 256-bit digest of a [`Value`] as a lowercase hex
//! string, stable across process invocations. Every variant is framed with
//! an explicit tag before its bytes are mixed in, and composite variants
//! mix in their children's *digests* (not their raw bytes), so distinct
//! structures can never collide by virtue of byte-stream concatenation
//! (e.g. the sequence `["a", "bc"]` cannot collide with `["ab", "c"]`).

use crate::value::{DeferredLike, DetHashObject, StepLike, Value};
use sha2::{Digest, Sha256};

// Tags are part of the stable wire format of the hash: never renumber an
// existing tag, only append new ones.
const TAG_NULL: u8 = 0;
const TAG_BOOL: u8 = 1;
const TAG_INT: u8 = 2;
const TAG_FLOAT: u8 = 3;
const TAG_STR: u8 = 4;
const TAG_BYTES: u8 = 5;
const TAG_SEQ: u8 = 6;
const TAG_SET: u8 = 7;
const TAG_MAP: u8 = 8;
const TAG_STEP: u8 = 9;
const TAG_DEFERRED: u8 = 10;
const TAG_OPAQUE: u8 = 11;

/// Hash a [`Value`], returning the raw 32-byte (256-bit) digest.
pub fn det_hash_bytes(value: &Value) -> [u8; 32] {
    let mut hasher = Sha256::new();
    mix_value(&mut hasher, value);
    hasher.finalize().into()
}

/// Hash a [`Value`], returning a lowercase hex string.
///
/// This is the primary entry point: a `Step`'s `unique_id` suffix is the
/// first 32 characters of `det_hash(&kwargs_as_value)` (see
/// `detstep-engine::step::unique_id`).
pub fn det_hash(value: &Value) -> String {
    hex::encode(det_hash_bytes(value))
}

fn mix_tag_len(hasher: &mut Sha256, tag: u8, len: u64) {
    hasher.update([tag]);
    hasher.update(len.to_le_bytes());
}

fn mix_value(hasher: &mut Sha256, value: &Value) {
    match value {
        Value::Null => mix_tag_len(hasher, TAG_NULL, 0),
        Value::Bool(b) => {
            mix_tag_len(hasher, TAG_BOOL, 1);
            hasher.update([*b as u8]);
        }
        Value::Int(i) => {
            mix_tag_len(hasher, TAG_INT, 8);
            hasher.update(i.to_le_bytes());
        }
        Value::Float(f) => {
            mix_tag_len(hasher, TAG_FLOAT, 8);
            hasher.update(f.to_bits().to_le_bytes());
        }
        Value::Str(s) => {
            mix_tag_len(hasher, TAG_STR, s.len() as u64);
            hasher.update(s.as_bytes());
        }
        Value::Bytes(b) => {
            mix_tag_len(hasher, TAG_BYTES, b.len() as u64);
            hasher.update(b);
        }
        Value::Seq(items) => {
            mix_tag_len(hasher, TAG_SEQ, items.len() as u64);
            for item in items {
                hasher.update(det_hash_bytes(item));
            }
        }
        Value::Set(items) => {
            let mut digests: Vec<[u8; 32]> = items.iter().map(det_hash_bytes).collect();
            digests.sort_unstable();
            mix_tag_len(hasher, TAG_SET, digests.len() as u64);
            for digest in digests {
                hasher.update(digest);
            }
        }
        Value::Map(entries) => {
            let mut digests: Vec<([u8; 32], [u8; 32])> = entries
                .iter()
                .map(|(k, v)| (det_hash_bytes(k), det_hash_bytes(v)))
                .collect();
            digests.sort_unstable();
            mix_tag_len(hasher, TAG_MAP, digests.len() as u64);
            for (k, v) in digests {
                hasher.update(k);
                hasher.update(v);
            }
        }
        Value::Step(step) => {
            // Delegate to the step's own identity, matching the original
            // system's `Step.det_hash_object() -> self.unique_id`: a step
            // contributes its already-computed identity, not its kwargs
            // re-hashed from scratch.
            let id = step.unique_id();
            mix_tag_len(hasher, TAG_STEP, id.len() as u64);
            hasher.update(id.as_bytes());
        }
        Value::Deferred(deferred) => {
            let parts = deferred.hash_parts();
            let digest = det_hash_bytes(&parts);
            mix_tag_len(hasher, TAG_DEFERRED, 32);
            hasher.update(digest);
        }
        Value::Opaque(obj) => {
            let repr = obj.det_hash_object();
            let digest = det_hash_bytes(&repr);
            mix_tag_len(hasher, TAG_OPAQUE, 32);
            hasher.update(digest);
        }
    }
}

#[cfg(test)]
#[path = "hash_tests.rs"]
mod tests;
