// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use tempfile::TempDir;

fn fresh_cache() -> (TempDir, FsStepCache) {
    let dir = TempDir::new().unwrap();
    let cache = FsStepCache::with_extension(dir.path(), "json");
    (dir, cache)
}

#[test]
fn unwritten_entry_is_absent() {
    let (_dir, cache) = fresh_cache();
    assert!(!cache.contains("Add-deadbeef"));
    assert!(matches!(
        cache.read_bytes("Add-deadbeef"),
        Err(CacheError::NotFound(_))
    ));
}

#[test]
fn write_then_read_round_trips() {
    let (_dir, cache) = fresh_cache();
    cache.write_bytes("Add-deadbeef", b"{}").unwrap();
    assert!(cache.contains("Add-deadbeef"));
    assert_eq!(cache.read_bytes("Add-deadbeef").unwrap(), b"{}");
}

#[test]
fn result_file_uses_the_configured_extension() {
    let (dir, cache) = fresh_cache();
    cache.write_bytes("Add-deadbeef", b"{}").unwrap();
    assert!(dir.path().join("Add-deadbeef/result.json").is_file());
}

#[test]
fn write_leaves_a_done_marker() {
    let (dir, cache) = fresh_cache();
    cache.write_bytes("Add-deadbeef", b"{}").unwrap();
    assert!(dir
        .path()
        .join("Add-deadbeef/result.json.done")
        .is_file());
}

#[test]
fn no_done_marker_means_not_contained() {
    let (dir, cache) = fresh_cache();
    let entry_dir = dir.path().join("Add-deadbeef");
    std::fs::create_dir_all(&entry_dir).unwrap();
    std::fs::write(entry_dir.join("result.json"), b"{}").unwrap();

    assert!(!cache.contains("Add-deadbeef"));
}

#[test]
fn no_tmp_file_left_behind_after_a_successful_write() {
    let (dir, cache) = fresh_cache();
    cache.write_bytes("Add-deadbeef", b"{}").unwrap();
    assert!(!dir.path().join("Add-deadbeef/result.json.tmp").is_file());
}

#[test]
fn step_dir_is_created_and_stable() {
    let (dir, cache) = fresh_cache();
    let step_dir = cache.step_dir("Add-deadbeef").unwrap();
    assert_eq!(step_dir, dir.path().join("Add-deadbeef"));
    assert!(step_dir.is_dir());
}

#[test]
fn survives_a_fresh_instance_over_the_same_root() {
    let dir = TempDir::new().unwrap();
    {
        let cache = FsStepCache::with_extension(dir.path(), "json");
        cache.write_bytes("Add-deadbeef", b"{}").unwrap();
    }
    let cache = FsStepCache::with_extension(dir.path(), "json");
    assert!(cache.contains("Add-deadbeef"));
    assert_eq!(cache.read_bytes("Add-deadbeef").unwrap(), b"{}");
}
