// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout persistence on top of a [`BlobStore`].
//!
//! The blob under the configured key holds a versioned envelope:
//!
//! ```json
//! { "version": 1, "workouts": [ { "kind": "running", "id": "...", ... } ] }
//! ```
//!
//! Older data written as a bare array with `type`/`date`/`clicks` field
//! names is still readable. Derived fields are written out and restored
//! verbatim; they are only recomputed when a record lacks them.

use crate::models::workout::describe;
use crate::models::{Coordinates, WorkoutKind, WorkoutMetrics, WorkoutRecord};
use crate::services::blob::{BlobStore, StorageError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Version written by [`PersistenceAdapter::save`].
pub const SCHEMA_VERSION: u32 = 1;

/// Flattened workout as stored in the blob.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PersistedWorkout {
    #[serde(alias = "type")]
    kind: WorkoutKind,
    id: String,
    #[serde(alias = "date")]
    created_at: DateTime<Utc>,
    coords: Coordinates,
    distance: f64,
    duration: f64,
    #[serde(default, alias = "clicks")]
    click_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    cadence: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pace: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    elevation_gain: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    speed: Option<f64>,
}

impl From<&WorkoutRecord> for PersistedWorkout {
    fn from(workout: &WorkoutRecord) -> Self {
        let (cadence, pace, elevation_gain, speed) = match *workout.metrics() {
            WorkoutMetrics::Running {
                cadence_spm,
                pace_min_per_km,
            } => (Some(cadence_spm), Some(pace_min_per_km), None, None),
            WorkoutMetrics::Cycling {
                elevation_gain_m,
                speed_kmh,
            } => (None, None, Some(elevation_gain_m), Some(speed_kmh)),
        };

        Self {
            kind: workout.kind(),
            id: workout.id().to_string(),
            created_at: workout.created_at(),
            coords: workout.coords(),
            distance: workout.distance_km(),
            duration: workout.duration_min(),
            click_count: workout.click_count(),
            description: Some(workout.description().to_string()),
            cadence,
            pace,
            elevation_gain,
            speed,
        }
    }
}

impl TryFrom<PersistedWorkout> for WorkoutRecord {
    type Error = StorageError;

    fn try_from(p: PersistedWorkout) -> Result<Self, Self::Error> {
        if p.id.is_empty() {
            return Err(StorageError::Malformed("workout without id".to_string()));
        }
        if !(p.distance.is_finite() && p.distance > 0.0) {
            return Err(malformed_field(&p.id, "distance"));
        }
        if !(p.duration.is_finite() && p.duration > 0.0) {
            return Err(malformed_field(&p.id, "duration"));
        }

        let metrics = match p.kind {
            WorkoutKind::Running => {
                let cadence_spm = p
                    .cadence
                    .filter(|c| c.is_finite() && *c > 0.0)
                    .ok_or_else(|| malformed_field(&p.id, "cadence"))?;
                match p.pace.filter(|v| v.is_finite()) {
                    Some(pace_min_per_km) => WorkoutMetrics::Running {
                        cadence_spm,
                        pace_min_per_km,
                    },
                    None => WorkoutMetrics::running(p.distance, p.duration, cadence_spm),
                }
            }
            WorkoutKind::Cycling => {
                let elevation_gain_m = p
                    .elevation_gain
                    .filter(|e| e.is_finite())
                    .ok_or_else(|| malformed_field(&p.id, "elevationGain"))?;
                match p.speed.filter(|v| v.is_finite()) {
                    Some(speed_kmh) => WorkoutMetrics::Cycling {
                        elevation_gain_m,
                        speed_kmh,
                    },
                    None => WorkoutMetrics::cycling(p.distance, p.duration, elevation_gain_m),
                }
            }
        };

        let description = p
            .description
            .unwrap_or_else(|| describe(p.kind, p.created_at));

        Ok(WorkoutRecord::from_parts(
            p.id,
            p.created_at,
            p.coords,
            p.distance,
            p.duration,
            p.click_count,
            description,
            metrics,
        ))
    }
}

fn malformed_field(id: &str, field: &str) -> StorageError {
    StorageError::Malformed(format!("workout {} has an invalid {}", id, field))
}

#[derive(Serialize)]
struct Envelope {
    version: u32,
    workouts: Vec<PersistedWorkout>,
}

/// Any blob shape `load` understands. Items stay untyped so one bad
/// record does not sink the rest.
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredBlob {
    Versioned {
        version: u32,
        workouts: Vec<serde_json::Value>,
    },
    Legacy(Vec<serde_json::Value>),
}

/// Serialize workouts into the persisted envelope.
pub fn encode(workouts: &[WorkoutRecord]) -> Result<String, StorageError> {
    let envelope = Envelope {
        version: SCHEMA_VERSION,
        workouts: workouts.iter().map(PersistedWorkout::from).collect(),
    };
    serde_json::to_string(&envelope).map_err(|e| StorageError::Serialize(e.to_string()))
}

/// Parse a persisted blob back into workouts.
///
/// Fails if the blob as a whole cannot be read. Individual records that
/// cannot be reconstructed are dropped with a warning.
pub fn decode(raw: &str) -> Result<Vec<WorkoutRecord>, StorageError> {
    let blob: StoredBlob =
        serde_json::from_str(raw).map_err(|e| StorageError::Malformed(e.to_string()))?;

    let items = match blob {
        StoredBlob::Versioned { version, workouts } if version <= SCHEMA_VERSION => workouts,
        StoredBlob::Versioned { version, .. } => {
            return Err(StorageError::Malformed(format!(
                "unsupported schema version {}",
                version
            )))
        }
        StoredBlob::Legacy(workouts) => {
            tracing::debug!(count = workouts.len(), "Reading legacy workout format");
            workouts
        }
    };

    let total = items.len();
    let workouts: Vec<WorkoutRecord> = items
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| {
            let result = serde_json::from_value::<PersistedWorkout>(value)
                .map_err(|e| StorageError::Malformed(e.to_string()))
                .and_then(WorkoutRecord::try_from);
            match result {
                Ok(workout) => Some(workout),
                Err(e) => {
                    tracing::warn!(index, error = %e, "Dropping unreadable workout");
                    None
                }
            }
        })
        .collect();

    if workouts.len() < total {
        tracing::warn!(
            kept = workouts.len(),
            dropped = total - workouts.len(),
            "Some persisted workouts were unreadable"
        );
    }
    Ok(workouts)
}

/// Saves and restores the workout list under a single blob key.
pub struct PersistenceAdapter<B: BlobStore> {
    blob: B,
    key: String,
}

impl<B: BlobStore> PersistenceAdapter<B> {
    pub fn new(blob: B, key: impl Into<String>) -> Self {
        Self {
            blob,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn blob(&self) -> &B {
        &self.blob
    }

    /// Overwrite the persisted list with `workouts`.
    pub fn save(&mut self, workouts: &[WorkoutRecord]) -> Result<(), StorageError> {
        let raw = encode(workouts)?;
        self.blob.set(&self.key, &raw).map_err(|e| {
            tracing::error!(key = %self.key, error = %e, "Failed to persist workouts");
            e
        })?;
        tracing::info!(key = %self.key, count = workouts.len(), "Workouts saved");
        Ok(())
    }

    /// Read persisted workouts, reporting read and parse failures.
    ///
    /// An absent key is not an error and yields an empty list.
    pub fn try_load(&self) -> Result<Vec<WorkoutRecord>, StorageError> {
        match self.blob.get(&self.key)? {
            Some(raw) => decode(&raw),
            None => Ok(Vec::new()),
        }
    }

    /// Read persisted workouts, treating any failure as "no workouts".
    pub fn load(&self) -> Vec<WorkoutRecord> {
        match self.try_load() {
            Ok(workouts) => {
                tracing::info!(key = %self.key, count = workouts.len(), "Workouts loaded");
                workouts
            }
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Ignoring unreadable saved workouts");
                Vec::new()
            }
        }
    }

    /// Remove the persisted entry. The in-memory store is not touched.
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.blob.remove(&self.key)?;
        tracing::info!(key = %self.key, "Saved workouts cleared");
        Ok(())
    }
}
