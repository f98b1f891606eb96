// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout record model.
//!
//! A record is built once (by the factory or by persistence reconstruction)
//! and only its click counter changes afterwards. Derived metrics and the
//! description are stored values, never recomputed on read.

use crate::time_utils::month_day_label;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Latitude/longitude pair, stored as `[lat, lng]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl From<[f64; 2]> for Coordinates {
    fn from([lat, lng]: [f64; 2]) -> Self {
        Self { lat, lng }
    }
}

impl From<Coordinates> for [f64; 2] {
    fn from(c: Coordinates) -> Self {
        [c.lat, c.lng]
    }
}

/// GeoJSON and `geo` use (x, y) = (lng, lat).
impl From<Coordinates> for geo::Point<f64> {
    fn from(c: Coordinates) -> Self {
        geo::Point::new(c.lng, c.lat)
    }
}

/// Workout kind discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutKind {
    Running,
    Cycling,
}

impl WorkoutKind {
    /// Look up a kind by its persisted/form name ("running", "cycling").
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim() {
            "running" => Some(WorkoutKind::Running),
            "cycling" => Some(WorkoutKind::Cycling),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "running",
            WorkoutKind::Cycling => "cycling",
        }
    }

    /// Capitalized name used in descriptions.
    pub fn label(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "Running",
            WorkoutKind::Cycling => "Cycling",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "🏃‍♂️",
            WorkoutKind::Cycling => "🚴‍♀️",
        }
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind-specific input and its derived metric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WorkoutMetrics {
    Running {
        /// Steps per minute
        cadence_spm: f64,
        /// Minutes per kilometer
        pace_min_per_km: f64,
    },
    Cycling {
        /// Meters climbed (may be zero or negative)
        elevation_gain_m: f64,
        /// Kilometers per hour
        speed_kmh: f64,
    },
}

impl WorkoutMetrics {
    pub fn running(distance_km: f64, duration_min: f64, cadence_spm: f64) -> Self {
        WorkoutMetrics::Running {
            cadence_spm,
            pace_min_per_km: duration_min / distance_km,
        }
    }

    pub fn cycling(distance_km: f64, duration_min: f64, elevation_gain_m: f64) -> Self {
        WorkoutMetrics::Cycling {
            elevation_gain_m,
            speed_kmh: distance_km / (duration_min / 60.0),
        }
    }

    pub fn kind(&self) -> WorkoutKind {
        match self {
            WorkoutMetrics::Running { .. } => WorkoutKind::Running,
            WorkoutMetrics::Cycling { .. } => WorkoutKind::Cycling,
        }
    }
}

/// Build the "<Kind> on <Month> <day>" description.
pub fn describe(kind: WorkoutKind, created_at: DateTime<Utc>) -> String {
    format!("{} on {}", kind.label(), month_day_label(created_at))
}

/// A single logged workout.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutRecord {
    id: String,
    created_at: DateTime<Utc>,
    coords: Coordinates,
    distance_km: f64,
    duration_min: f64,
    click_count: u32,
    description: String,
    metrics: WorkoutMetrics,
}

impl WorkoutRecord {
    /// Assemble a record from already validated parts.
    ///
    /// Only the factory and persistence reconstruction call this.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn from_parts(
        id: String,
        created_at: DateTime<Utc>,
        coords: Coordinates,
        distance_km: f64,
        duration_min: f64,
        click_count: u32,
        description: String,
        metrics: WorkoutMetrics,
    ) -> Self {
        Self {
            id,
            created_at,
            coords,
            distance_km,
            duration_min,
            click_count,
            description,
            metrics,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> WorkoutKind {
        self.metrics.kind()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn coords(&self) -> Coordinates {
        self.coords
    }

    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    pub fn duration_min(&self) -> f64 {
        self.duration_min
    }

    pub fn click_count(&self) -> u32 {
        self.click_count
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn metrics(&self) -> &WorkoutMetrics {
        &self.metrics
    }

    /// Pace in min/km, for running workouts.
    pub fn pace(&self) -> Option<f64> {
        match self.metrics {
            WorkoutMetrics::Running {
                pace_min_per_km, ..
            } => Some(pace_min_per_km),
            WorkoutMetrics::Cycling { .. } => None,
        }
    }

    /// Speed in km/h, for cycling workouts.
    pub fn speed(&self) -> Option<f64> {
        match self.metrics {
            WorkoutMetrics::Cycling { speed_kmh, .. } => Some(speed_kmh),
            WorkoutMetrics::Running { .. } => None,
        }
    }

    /// Increment the click counter, returning the new count.
    pub(crate) fn register_click(&mut self) -> u32 {
        self.click_count = self.click_count.saturating_add(1);
        self.click_count
    }
}
