// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Map and view stand-ins that report through `tracing`.
//!
//! Used by the headless driver in place of a browser map and DOM.

use crate::models::{Coordinates, MarkerPopup, WorkoutKind, WorkoutSummary};
use crate::services::map::{MapCollaborator, MapError};
use crate::services::view::WorkoutView;

/// Map that logs what it would draw.
#[derive(Debug, Default)]
pub struct TracingMap {
    markers: usize,
}

impl MapCollaborator for TracingMap {
    fn initialize(&mut self, center: Coordinates, zoom: u8) -> Result<(), MapError> {
        tracing::info!(lat = center.lat, lng = center.lng, zoom, "map: view set");
        Ok(())
    }

    fn add_marker(&mut self, popup: &MarkerPopup) {
        self.markers += 1;
        tracing::info!(
            id = %popup.workout_id,
            lat = popup.coords.lat,
            lng = popup.coords.lng,
            class = %popup.class_name,
            content = %popup.content,
            "map: marker added"
        );
    }

    fn remove_markers(&mut self) {
        tracing::info!(count = self.markers, "map: markers removed");
        self.markers = 0;
    }

    fn pan_to(&mut self, coords: Coordinates, zoom: u8) {
        tracing::info!(lat = coords.lat, lng = coords.lng, zoom, "map: pan");
    }
}

/// View that logs list renders and messages.
#[derive(Debug, Default)]
pub struct TracingView;

impl WorkoutView for TracingView {
    fn render_list(&mut self, workouts: &[WorkoutSummary]) {
        for workout in workouts {
            let details: Vec<String> = workout
                .details
                .iter()
                .map(|d| format!("{} {} {}", d.icon, d.value, d.unit))
                .collect();
            tracing::info!(
                id = %workout.id,
                title = %workout.title,
                details = %details.join(" | "),
                "view: workout"
            );
        }
        tracing::info!(count = workouts.len(), "view: list rendered");
    }

    fn show_form(&mut self, coords: Coordinates) {
        tracing::info!(lat = coords.lat, lng = coords.lng, "view: form shown");
    }

    fn show_kind_fields(&mut self, kind: WorkoutKind) {
        tracing::info!(kind = %kind, "view: form fields switched");
    }

    fn hide_form(&mut self) {
        tracing::info!("view: form hidden");
    }

    fn show_validation_error(&mut self, message: &str) {
        tracing::warn!(text = message, "view: validation error");
    }

    fn show_notice(&mut self, message: &str) {
        tracing::warn!(text = message, "view: notice");
    }
}
