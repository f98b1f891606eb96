// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod summary;
pub mod workout;

pub use summary::{MarkerPopup, WorkoutDetail, WorkoutSummary};
pub use workout::{Coordinates, WorkoutKind, WorkoutMetrics, WorkoutRecord};
