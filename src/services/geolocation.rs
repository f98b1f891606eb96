// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Device position lookup.

use crate::models::Coordinates;
use serde::{Deserialize, Serialize};
use std::future::Future;

/// Why a position could not be determined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[serde(rename_all = "snake_case")]
pub enum GeolocationError {
    #[error("Location permission denied")]
    PermissionDenied,

    #[error("Location unavailable")]
    Unavailable,

    #[error("Location request timed out")]
    Timeout,
}

/// One-shot position lookup. No retries; the user re-triggers.
pub trait Geolocation {
    fn current_position(&self) -> impl Future<Output = Result<Coordinates, GeolocationError>>;
}

/// Always answers with the same result.
#[derive(Debug, Clone)]
pub struct FixedGeolocation {
    result: Result<Coordinates, GeolocationError>,
}

impl FixedGeolocation {
    pub fn at(coords: Coordinates) -> Self {
        Self { result: Ok(coords) }
    }

    pub fn failing(error: GeolocationError) -> Self {
        Self { result: Err(error) }
    }
}

impl Geolocation for FixedGeolocation {
    async fn current_position(&self) -> Result<Coordinates, GeolocationError> {
        self.result.clone()
    }
}
