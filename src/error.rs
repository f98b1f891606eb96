// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types with consistent user-facing messages.

use crate::services::blob::StorageError;
use crate::services::factory::ValidationError;
use crate::services::geolocation::GeolocationError;
use crate::services::map::MapError;

/// Application error type surfaced by the controller.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid workout: {0}")]
    Validation(#[from] ValidationError),

    #[error("Geolocation unavailable: {0}")]
    GeolocationUnavailable(#[from] GeolocationError),

    #[error("Failed to read saved workouts: {0}")]
    PersistenceRead(StorageError),

    #[error("Failed to save workouts: {0}")]
    PersistenceWrite(StorageError),

    #[error("Map error: {0}")]
    Map(#[from] MapError),

    #[error("Workout not found: {0}")]
    NotFound(String),
}

impl AppError {
    /// Message suitable for showing to the user.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(e) => e.to_string(),
            AppError::GeolocationUnavailable(_) => {
                "Couldn't get your position, showing the default map location".to_string()
            }
            AppError::PersistenceRead(_) => {
                "Saved workouts could not be read and were ignored".to_string()
            }
            AppError::PersistenceWrite(StorageError::QuotaExceeded { .. }) => {
                "Storage is full, the workout was not saved".to_string()
            }
            AppError::PersistenceWrite(_) => "The workout could not be saved".to_string(),
            AppError::Map(_) => "The map could not be loaded".to_string(),
            AppError::NotFound(_) => "That workout no longer exists".to_string(),
        }
    }

    /// Errors caused by user input or environment rather than a fault.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            AppError::Validation(_) | AppError::GeolocationUnavailable(_) | AppError::NotFound(_)
        )
    }
}

/// Result type alias for controller operations
pub type Result<T> = std::result::Result<T, AppError>;
