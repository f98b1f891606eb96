// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Workout-Tracker: log runs and rides on a map
//!
//! This crate provides the workout model, its persistence, and the
//! controller that ties form input, the workout list and the map together.

pub mod config;
pub mod controller;
pub mod error;
pub mod headless;
pub mod models;
pub mod services;
pub mod time_utils;

use config::Config;
use models::{Coordinates, WorkoutKind};
use services::WorkoutStore;

/// Application state owned by the controller.
#[derive(Debug)]
pub struct AppState {
    pub config: Config,
    pub store: WorkoutStore,
    /// Map click waiting for the form to be submitted
    pub pending_location: Option<Coordinates>,
    /// Workout kind currently selected in the form
    pub form_kind: WorkoutKind,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            store: WorkoutStore::new(),
            pending_location: None,
            form_kind: WorkoutKind::Running,
        }
    }
}
