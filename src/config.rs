// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.

use crate::models::Coordinates;
use crate::services::factory::DEFAULT_ID_LENGTH;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory of the file-backed blob store
    pub storage_dir: PathBuf,
    /// Blob key holding the saved workouts
    pub storage_key: String,
    /// Optional size limit for stored blobs (bytes)
    pub storage_quota_bytes: Option<usize>,
    /// Zoom level for the initial view and pan-to
    pub map_zoom_level: u8,
    /// Map center used when the device position is unknown
    pub default_center: Coordinates,
    /// Trailing timestamp digits kept in workout ids
    pub id_length: usize,
    /// Fixed device position for the headless driver (unset means unavailable)
    pub device_position: Option<Coordinates>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_dir: PathBuf::from(".workouts"),
            storage_key: "workouts".to_string(),
            storage_quota_bytes: None,
            map_zoom_level: 13,
            default_center: Coordinates::new(51.505, -0.09),
            id_length: DEFAULT_ID_LENGTH,
            device_position: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let defaults = Self::default();
        Ok(Self {
            storage_dir: env::var("WORKOUTS_STORAGE_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.storage_dir),
            storage_key: env::var("WORKOUTS_STORAGE_KEY")
                .map(|v| v.trim().to_string())
                .unwrap_or(defaults.storage_key),
            storage_quota_bytes: parse_var::<usize>("STORAGE_QUOTA_BYTES")?,
            map_zoom_level: parse_var("MAP_ZOOM_LEVEL")?.unwrap_or(defaults.map_zoom_level),
            default_center: Coordinates::new(
                parse_var("MAP_DEFAULT_LAT")?.unwrap_or(defaults.default_center.lat),
                parse_var("MAP_DEFAULT_LNG")?.unwrap_or(defaults.default_center.lng),
            ),
            id_length: parse_var("WORKOUT_ID_LENGTH")?.unwrap_or(defaults.id_length),
            device_position: match (parse_var("DEVICE_LAT")?, parse_var("DEVICE_LNG")?) {
                (Some(lat), Some(lng)) => Some(Coordinates::new(lat, lng)),
                _ => None,
            },
        })
    }
}

/// Parse an optional environment variable; unset means `None`.
fn parse_var<T: FromStr>(name: &'static str) -> Result<Option<T>, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { var: name, value: raw }),
        Err(_) => Ok(None),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}
