// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! View-models handed to the list view and the map popups.

use crate::models::workout::{Coordinates, WorkoutKind, WorkoutMetrics, WorkoutRecord};
use crate::time_utils::format_utc_rfc3339;
use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// One rendered list item.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct WorkoutSummary {
    pub id: String,
    pub kind: WorkoutKind,
    pub title: String,
    /// Creation time (RFC3339, UTC)
    pub date: String,
    pub details: Vec<WorkoutDetail>,
}

/// A single icon/value/unit cell of a list item.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct WorkoutDetail {
    pub icon: String,
    pub value: String,
    pub unit: String,
}

impl WorkoutDetail {
    fn new(icon: &str, value: String, unit: &str) -> Self {
        Self {
            icon: icon.to_string(),
            value,
            unit: unit.to_string(),
        }
    }
}

impl From<&WorkoutRecord> for WorkoutSummary {
    fn from(workout: &WorkoutRecord) -> Self {
        let mut details = vec![
            WorkoutDetail::new(
                workout.kind().icon(),
                workout.distance_km().to_string(),
                "km",
            ),
            WorkoutDetail::new("⏱", workout.duration_min().to_string(), "min"),
        ];

        match *workout.metrics() {
            WorkoutMetrics::Running {
                cadence_spm,
                pace_min_per_km,
            } => {
                details.push(WorkoutDetail::new(
                    "⚡️",
                    format!("{:.1}", pace_min_per_km),
                    "min/km",
                ));
                details.push(WorkoutDetail::new("🦶🏼", cadence_spm.to_string(), "spm"));
            }
            WorkoutMetrics::Cycling {
                elevation_gain_m,
                speed_kmh,
            } => {
                details.push(WorkoutDetail::new("⚡️", format!("{:.1}", speed_kmh), "km/h"));
                details.push(WorkoutDetail::new("⛰", elevation_gain_m.to_string(), "m"));
            }
        }

        Self {
            id: workout.id().to_string(),
            kind: workout.kind(),
            title: workout.description().to_string(),
            date: format_utc_rfc3339(workout.created_at()),
            details,
        }
    }
}

/// Popup bound to a map marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerPopup {
    pub workout_id: String,
    pub coords: Coordinates,
    pub content: String,
    pub class_name: String,
    pub max_width: u32,
    pub min_width: u32,
    /// Popups stay open when another opens or the map is clicked.
    pub keep_open: bool,
}

impl From<&WorkoutRecord> for MarkerPopup {
    fn from(workout: &WorkoutRecord) -> Self {
        Self {
            workout_id: workout.id().to_string(),
            coords: workout.coords(),
            content: format!("{} {}", workout.kind().icon(), workout.description()),
            class_name: format!("{}-popup", workout.kind()),
            max_width: 250,
            min_width: 100,
            keep_open: true,
        }
    }
}
