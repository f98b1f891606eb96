// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use workout_tracker::error::AppError;
use workout_tracker::services::{GeolocationError, MapError, StorageError, ValidationError};

#[test]
fn test_validation_message_names_the_field() {
    let err = AppError::from(ValidationError::NotPositive {
        field: "distance",
        value: -2.0,
    });
    assert_eq!(
        err.user_message(),
        "distance must be a positive number (got -2)"
    );
    assert!(err.is_user_error());
}

#[test]
fn test_quota_write_error_message() {
    let err = AppError::PersistenceWrite(StorageError::QuotaExceeded {
        needed: 10,
        quota: 5,
    });
    assert_eq!(err.user_message(), "Storage is full, the workout was not saved");
    assert!(!err.is_user_error());

    let err = AppError::PersistenceWrite(StorageError::Serialize("boom".to_string()));
    assert_eq!(err.user_message(), "The workout could not be saved");
}

#[test]
fn test_environment_errors_classification() {
    assert!(AppError::from(GeolocationError::PermissionDenied).is_user_error());
    assert!(AppError::NotFound("42".to_string()).is_user_error());
    assert!(!AppError::from(MapError::NotReady).is_user_error());
    assert!(!AppError::PersistenceRead(StorageError::Malformed("x".to_string())).is_user_error());
}

#[test]
fn test_display_includes_source() {
    let err = AppError::from(MapError::InitializationFailed("no container".to_string()));
    assert_eq!(
        err.to_string(),
        "Map error: Map initialization failed: no container"
    );
}
