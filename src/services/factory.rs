// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout construction from raw form input.
//!
//! The factory validates all-or-nothing, assigns an id, computes the
//! derived metric and the description once, and hands back a finished
//! record. It never touches the store or persistence.

use crate::models::workout::{describe, Coordinates, WorkoutKind, WorkoutMetrics, WorkoutRecord};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::sync::atomic::{AtomicU64, Ordering};

/// Default number of trailing timestamp digits kept in generated ids.
pub const DEFAULT_ID_LENGTH: usize = 10;

/// Strategy for assigning workout ids.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self, created_at: DateTime<Utc>) -> String;
}

/// Time-derived ids: the trailing digits of the creation time in milliseconds.
///
/// Best-effort unique, not cryptographically unique. Two workouts created
/// within the same millisecond get the same id.
#[derive(Debug, Clone)]
pub struct TimestampIdGenerator {
    length: usize,
}

impl TimestampIdGenerator {
    pub fn new(length: usize) -> Self {
        Self {
            length: length.max(1),
        }
    }
}

impl Default for TimestampIdGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_ID_LENGTH)
    }
}

impl IdGenerator for TimestampIdGenerator {
    fn next_id(&self, created_at: DateTime<Utc>) -> String {
        let millis = created_at.timestamp_millis().to_string();
        let start = millis.len().saturating_sub(self.length);
        millis[start..].to_string()
    }
}

/// Deterministic ids ("1", "2", ...), independent of the clock.
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    next: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first.saturating_sub(1)),
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self, _created_at: DateTime<Utc>) -> String {
        (self.next.fetch_add(1, Ordering::Relaxed) + 1).to_string()
    }
}

/// Rejected workout input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Unknown workout type: {0:?}")]
    UnknownKind(String),

    #[error("{field} must be a number (got {value:?})")]
    NotANumber { field: &'static str, value: String },

    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },

    #[error("{field} must be a positive number (got {value})")]
    NotPositive { field: &'static str, value: f64 },

    #[error("Click on the map to choose where the workout happened")]
    MissingLocation,
}

/// Form fields as typed by the user.
///
/// Empty fields read as 0, so an empty elevation is a valid 0 m climb
/// while an empty distance fails the positivity check.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawWorkoutInput {
    #[serde(rename = "type")]
    pub kind: String,
    pub distance: String,
    pub duration: String,
    pub cadence: String,
    pub elevation: String,
}

impl RawWorkoutInput {
    pub fn running(distance: &str, duration: &str, cadence: &str) -> Self {
        Self {
            kind: WorkoutKind::Running.as_str().to_string(),
            distance: distance.to_string(),
            duration: duration.to_string(),
            cadence: cadence.to_string(),
            elevation: String::new(),
        }
    }

    pub fn cycling(distance: &str, duration: &str, elevation: &str) -> Self {
        Self {
            kind: WorkoutKind::Cycling.as_str().to_string(),
            distance: distance.to_string(),
            duration: duration.to_string(),
            cadence: String::new(),
            elevation: elevation.to_string(),
        }
    }
}

/// Builds workout records.
pub struct WorkoutFactory {
    ids: Box<dyn IdGenerator>,
}

impl Default for WorkoutFactory {
    fn default() -> Self {
        Self::new(Box::new(TimestampIdGenerator::default()))
    }
}

impl WorkoutFactory {
    pub fn new(ids: Box<dyn IdGenerator>) -> Self {
        Self { ids }
    }

    /// Create a workout stamped with the current time.
    pub fn create(
        &self,
        kind: WorkoutKind,
        coords: Coordinates,
        distance_km: f64,
        duration_min: f64,
        kind_specific: f64,
    ) -> Result<WorkoutRecord, ValidationError> {
        self.create_at(
            kind,
            coords,
            distance_km,
            duration_min,
            kind_specific,
            Utc::now(),
        )
    }

    /// Create a workout with an explicit creation time.
    ///
    /// `kind_specific` is the cadence (spm) for running and the elevation
    /// gain (m) for cycling. Elevation has no sign constraint.
    pub fn create_at(
        &self,
        kind: WorkoutKind,
        coords: Coordinates,
        distance_km: f64,
        duration_min: f64,
        kind_specific: f64,
        created_at: DateTime<Utc>,
    ) -> Result<WorkoutRecord, ValidationError> {
        finite("lat", coords.lat)?;
        finite("lng", coords.lng)?;
        let distance_km = positive("distance", distance_km)?;
        let duration_min = positive("duration", duration_min)?;

        let metrics = match kind {
            WorkoutKind::Running => {
                let cadence = positive("cadence", kind_specific)?;
                WorkoutMetrics::running(distance_km, duration_min, cadence)
            }
            WorkoutKind::Cycling => {
                let elevation = finite("elevation", kind_specific)?;
                WorkoutMetrics::cycling(distance_km, duration_min, elevation)
            }
        };

        let id = self.ids.next_id(created_at);
        let record = WorkoutRecord::from_parts(
            id,
            created_at,
            coords,
            distance_km,
            duration_min,
            0,
            describe(kind, created_at),
            metrics,
        );

        tracing::info!(id = record.id(), kind = %kind, "Workout created");
        Ok(record)
    }

    /// Parse and validate raw form fields, then create the workout.
    pub fn create_from_form(
        &self,
        coords: Coordinates,
        input: &RawWorkoutInput,
    ) -> Result<WorkoutRecord, ValidationError> {
        let kind = WorkoutKind::from_name(&input.kind)
            .ok_or_else(|| ValidationError::UnknownKind(input.kind.clone()))?;
        let distance = parse_field("distance", &input.distance)?;
        let duration = parse_field("duration", &input.duration)?;
        let kind_specific = match kind {
            WorkoutKind::Running => parse_field("cadence", &input.cadence)?,
            WorkoutKind::Cycling => parse_field("elevation", &input.elevation)?,
        };

        self.create(kind, coords, distance, duration, kind_specific)
    }
}

/// Numeric form value; empty means 0.
fn parse_field(field: &'static str, raw: &str) -> Result<f64, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    trimmed
        .parse::<f64>()
        .map_err(|_| ValidationError::NotANumber {
            field,
            value: raw.to_string(),
        })
}

fn finite(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ValidationError::NotFinite { field })
    }
}

fn positive(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    let value = finite(field, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(ValidationError::NotPositive { field, value })
    }
}
