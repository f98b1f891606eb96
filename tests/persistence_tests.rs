// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Persistence round-trip and compatibility tests.
//!
//! Saved workouts must read back exactly, including kind, click counts and
//! derived metrics, and data written by the older array format must still load.

use chrono::{TimeZone, Utc};
use std::fs;
use workout_tracker::models::{Coordinates, WorkoutKind, WorkoutMetrics, WorkoutRecord};
use workout_tracker::services::persistence::{decode, encode};
use workout_tracker::services::{
    BlobStore, FileBlobStore, PersistenceAdapter, WorkoutFactory, WorkoutStore,
};

mod common;
use common::test_factory;

/// Mixed running/cycling store with some clicks registered.
fn mixed_store(factory: &WorkoutFactory) -> WorkoutStore {
    let mut store = WorkoutStore::new();
    let inputs = [
        (WorkoutKind::Running, 5.0, 25.0, 178.0),
        (WorkoutKind::Cycling, 27.0, 95.0, 523.0),
        (WorkoutKind::Running, 3.3, 21.7, 165.5),
        (WorkoutKind::Cycling, 12.0, 33.0, -14.0),
        (WorkoutKind::Cycling, 0.7, 3.1, 0.0),
    ];
    for (i, (kind, distance, duration, extra)) in inputs.into_iter().enumerate() {
        let at = Coordinates::new(40.0 + i as f64 * 0.01, -74.0 - i as f64 * 0.01);
        store.add(factory.create(kind, at, distance, duration, extra).unwrap());
    }
    store.register_click("2");
    store.register_click("2");
    store.register_click("5");
    store
}

#[test]
fn test_roundtrip_through_file_store() {
    let dir = tempfile::tempdir().unwrap();
    let store = mixed_store(&test_factory());

    let mut adapter =
        PersistenceAdapter::new(FileBlobStore::open(dir.path()).unwrap(), "workouts");
    adapter.save(store.all()).unwrap();

    // A fresh adapter over the same directory sees the same workouts
    let reopened = PersistenceAdapter::new(FileBlobStore::open(dir.path()).unwrap(), "workouts");
    let loaded = reopened.load();
    assert_eq!(loaded, store.all());
    assert_eq!(loaded[1].click_count(), 2);
    assert_eq!(loaded[4].click_count(), 1);
    assert!(dir.path().join("workouts.json").exists());
}

#[test]
fn test_roundtrip_restores_store() {
    let store = mixed_store(&test_factory());
    let decoded = decode(&encode(store.all()).unwrap()).unwrap();

    let mut restored = WorkoutStore::new();
    restored.replace_all(decoded);
    assert_eq!(restored, store);
}

#[test]
fn test_save_overwrites_previous_value() {
    let dir = tempfile::tempdir().unwrap();
    let factory = test_factory();
    let store = mixed_store(&factory);

    let mut adapter =
        PersistenceAdapter::new(FileBlobStore::open(dir.path()).unwrap(), "workouts");
    adapter.save(store.all()).unwrap();
    adapter.save(&store.all()[..2]).unwrap();

    assert_eq!(adapter.load(), &store.all()[..2]);
}

#[test]
fn test_clear_then_load_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = mixed_store(&test_factory());

    let mut adapter =
        PersistenceAdapter::new(FileBlobStore::open(dir.path()).unwrap(), "workouts");
    adapter.save(store.all()).unwrap();
    adapter.clear().unwrap();

    assert!(adapter.load().is_empty());
    assert!(!dir.path().join("workouts.json").exists());
}

#[test]
fn test_load_legacy_array_format() {
    let dir = tempfile::tempdir().unwrap();
    let legacy = fs::read_to_string("tests/fixtures/legacy_workouts.json")
        .expect("Failed to read legacy fixture");

    let mut blob = FileBlobStore::open(dir.path()).unwrap();
    blob.set("workouts", &legacy).unwrap();
    let adapter = PersistenceAdapter::new(blob, "workouts");

    // The third record has a non-numeric distance and is dropped
    let workouts = adapter.try_load().unwrap();
    assert_eq!(workouts.len(), 2);

    let run = &workouts[0];
    assert_eq!(run.id(), "9501342318");
    assert_eq!(run.kind(), WorkoutKind::Running);
    assert_eq!(
        run.created_at(),
        Utc.with_ymd_and_hms(2026, 10, 2, 7, 15, 42).unwrap()
            + chrono::Duration::milliseconds(318)
    );
    assert_eq!(run.coords(), Coordinates::new(40.7128, -74.006));
    assert_eq!(
        *run.metrics(),
        WorkoutMetrics::Running {
            cadence_spm: 178.0,
            pace_min_per_km: 24.0 / 5.2
        }
    );
    // Stored descriptions are kept as written
    assert_eq!(run.description(), "Running on November 2");

    let ride = &workouts[1];
    assert_eq!(ride.kind(), WorkoutKind::Cycling);
    assert_eq!(ride.speed(), Some(27.0 / (95.0 / 60.0)));
}

#[test]
fn test_legacy_data_is_rewritten_in_current_format() {
    let legacy = fs::read_to_string("tests/fixtures/legacy_workouts.json")
        .expect("Failed to read legacy fixture");
    let workouts: Vec<WorkoutRecord> = decode(&legacy).unwrap();

    let rewritten = encode(&workouts).unwrap();
    let json: serde_json::Value = serde_json::from_str(&rewritten).unwrap();
    assert_eq!(json["version"], 1);
    assert_eq!(json["workouts"][0]["kind"], "running");
    assert_eq!(json["workouts"][0]["clickCount"], 0);
    assert!(json["workouts"][0].get("type").is_none());

    assert_eq!(decode(&rewritten).unwrap(), workouts);
}
