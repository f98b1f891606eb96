// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Map widget integration.
//!
//! The widget itself is external; [`MapCollaborator`] is the slice of it
//! the app needs. Map clicks arrive as controller events rather than
//! through a registered callback.

use crate::models::{Coordinates, MarkerPopup, WorkoutRecord};
use geojson::{Feature, FeatureCollection, Geometry, JsonObject};

/// Errors from the map widget.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MapError {
    #[error("Map initialization failed: {0}")]
    InitializationFailed(String),

    #[error("Map is not ready yet")]
    NotReady,
}

/// External interactive map.
pub trait MapCollaborator {
    /// Create the map centered on `center`. Tiles load in the background.
    fn initialize(&mut self, center: Coordinates, zoom: u8) -> Result<(), MapError>;

    /// Add a marker with an open popup.
    fn add_marker(&mut self, popup: &MarkerPopup);

    /// Remove every workout marker.
    fn remove_markers(&mut self);

    /// Animate the view to `coords`.
    fn pan_to(&mut self, coords: Coordinates, zoom: u8);
}

/// Tracks map readiness and the markers rendered on it.
pub struct MapController<M: MapCollaborator> {
    map: M,
    zoom: u8,
    ready: bool,
    markers: Vec<MarkerPopup>,
}

impl<M: MapCollaborator> MapController<M> {
    pub fn new(map: M, zoom: u8) -> Self {
        Self {
            map,
            zoom,
            ready: false,
            markers: Vec::new(),
        }
    }

    pub fn map(&self) -> &M {
        &self.map
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    /// Initialize the widget. Only the first successful call has an effect.
    pub fn initialize(&mut self, center: Coordinates) -> Result<(), MapError> {
        if self.ready {
            tracing::debug!("Map already initialized");
            return Ok(());
        }
        self.map.initialize(center, self.zoom).map_err(|e| {
            tracing::error!(error = %e, "Map initialization failed");
            e
        })?;
        self.ready = true;
        tracing::info!(lat = center.lat, lng = center.lng, zoom = self.zoom, "Map ready");
        Ok(())
    }

    /// Add the marker and popup for one workout.
    pub fn render_marker(&mut self, workout: &WorkoutRecord) -> Result<(), MapError> {
        if !self.ready {
            return Err(MapError::NotReady);
        }
        let popup = MarkerPopup::from(workout);
        self.map.add_marker(&popup);
        self.markers.push(popup);
        Ok(())
    }

    /// Add markers for every workout, in order.
    pub fn render_all(&mut self, workouts: &[WorkoutRecord]) -> Result<(), MapError> {
        for workout in workouts {
            self.render_marker(workout)?;
        }
        Ok(())
    }

    pub fn pan_to(&mut self, coords: Coordinates) -> Result<(), MapError> {
        if !self.ready {
            return Err(MapError::NotReady);
        }
        self.map.pan_to(coords, self.zoom);
        Ok(())
    }

    pub fn clear_markers(&mut self) {
        if self.ready {
            self.map.remove_markers();
        }
        self.markers.clear();
    }

    /// Popups of the markers currently on the map.
    pub fn markers(&self) -> &[MarkerPopup] {
        &self.markers
    }

    /// Rendered markers as a GeoJSON FeatureCollection of points.
    pub fn markers_geojson(&self) -> FeatureCollection {
        let features = self
            .markers
            .iter()
            .map(|marker| {
                let point: geo::Point<f64> = marker.coords.into();
                let mut properties = JsonObject::new();
                properties.insert("workoutId".to_string(), marker.workout_id.clone().into());
                properties.insert("popup".to_string(), marker.content.clone().into());
                properties.insert("className".to_string(), marker.class_name.clone().into());

                Feature {
                    bbox: None,
                    geometry: Some(Geometry::new(geojson::Value::from(&point))),
                    id: None,
                    properties: Some(properties),
                    foreign_members: None,
                }
            })
            .collect();

        FeatureCollection {
            bbox: None,
            features,
            foreign_members: None,
        }
    }
}
