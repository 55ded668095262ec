// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `LazySeq<Item>` — the statically-typed stand-in for the original
//! system's "lazy iterator" result kind (§9 Open Questions, GLOSSARY).
//!
//! A step whose output is conceptually a lazy sequence declares
//! `type Output = LazySeq<Item>`. Iterating it pulls items on demand; the
//! `Format` impl used to cache it drains it fully into a `Vec<Item>` on
//! encode (matching "the write must fully materialize it", §4.2 point 4),
//! and a decoded `LazySeq` is backed by that `Vec`, replayable in full.

use parking_lot::Mutex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

pub struct LazySeq<Item> {
    inner: Mutex<Box<dyn Iterator<Item = Item> + Send>>,
}

impl<Item> LazySeq<Item> {
    pub fn new(iter: impl Iterator<Item = Item> + Send + 'static) -> Self {
        Self {
            inner: Mutex::new(Box::new(iter)),
        }
    }

    pub fn from_vec(items: Vec<Item>) -> Self
    where
        Item: Send + 'static,
    {
        Self::new(items.into_iter())
    }

    /// Pull the next item, driving the underlying iterator lazily.
    pub fn next(&self) -> Option<Item> {
        self.inner.lock().next()
    }

    /// Drain all remaining items eagerly. Used by this type's own `Serialize`
    /// impl to materialize before a cache write; also available directly to
    /// a caller that wants the full sequence without round-tripping through
    /// a cache.
    pub fn collect_remaining(&self) -> Vec<Item> {
        self.inner.lock().by_ref().collect()
    }
}

impl<Item> fmt::Debug for LazySeq<Item> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazySeq").finish_non_exhaustive()
    }
}

impl<Item: Serialize> Serialize for LazySeq<Item> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.collect_remaining().serialize(serializer)
    }
}

impl<'de, Item: Deserialize<'de> + Send + 'static> Deserialize<'de> for LazySeq<Item> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let items = Vec::<Item>::deserialize(deserializer)?;
        Ok(LazySeq::from_vec(items))
    }
}

#[cfg(test)]
#[path = "lazy_seq_tests.rs"]
mod tests;
