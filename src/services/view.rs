// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Form and workout list view.

use crate::models::{Coordinates, WorkoutKind, WorkoutSummary};

/// External DOM-side view. User input comes back as controller events.
pub trait WorkoutView {
    /// Replace the rendered list with `workouts`, in creation order.
    fn render_list(&mut self, workouts: &[WorkoutSummary]);

    /// Open the input form for a workout at `coords`.
    fn show_form(&mut self, coords: Coordinates);

    /// Show the cadence field for running or the elevation field for cycling.
    fn show_kind_fields(&mut self, kind: WorkoutKind);

    /// Clear and hide the input form.
    fn hide_form(&mut self);

    fn show_validation_error(&mut self, message: &str);

    /// Non-validation message (storage, location, map problems).
    fn show_notice(&mut self, message: &str);
}
