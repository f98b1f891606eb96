// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application controller.
//!
//! Handles the core workflow:
//! 1. Restore saved workouts and render the list
//! 2. Initialize the map once the device position is known (or not)
//! 3. Turn form submissions into workouts, render and save them
//! 4. Count list selections and pan the map to the selected workout
//!
//! Events are handled one at a time, each to completion, on a single task.

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::models::{Coordinates, WorkoutKind, WorkoutSummary};
use crate::services::blob::BlobStore;
use crate::services::factory::{RawWorkoutInput, ValidationError, WorkoutFactory};
use crate::services::geolocation::{Geolocation, GeolocationError};
use crate::services::map::{MapCollaborator, MapController, MapError};
use crate::services::persistence::PersistenceAdapter;
use crate::services::store::WorkoutStore;
use crate::services::view::WorkoutView;
use crate::AppState;
use serde::Deserialize;
use tokio::sync::mpsc::UnboundedReceiver;

/// Input delivered to the controller.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum AppEvent {
    PositionAcquired { coords: Coordinates },
    PositionUnavailable { reason: GeolocationError },
    MapClicked { coords: Coordinates },
    KindChanged { kind: WorkoutKind },
    FormSubmitted { input: RawWorkoutInput },
    WorkoutSelected { id: String },
    Reset,
}

/// Orchestrates the store, persistence, map and view.
pub struct AppController<M: MapCollaborator, V: WorkoutView, B: BlobStore> {
    state: AppState,
    factory: WorkoutFactory,
    persistence: PersistenceAdapter<B>,
    map: MapController<M>,
    view: V,
}

impl<M: MapCollaborator, V: WorkoutView, B: BlobStore> AppController<M, V, B> {
    pub fn new(config: Config, factory: WorkoutFactory, blob: B, map: M, view: V) -> Self {
        let persistence = PersistenceAdapter::new(blob, config.storage_key.clone());
        let map = MapController::new(map, config.map_zoom_level);
        Self {
            state: AppState::new(config),
            factory,
            persistence,
            map,
            view,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn store(&self) -> &WorkoutStore {
        &self.state.store
    }

    pub fn map(&self) -> &MapController<M> {
        &self.map
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn persistence(&self) -> &PersistenceAdapter<B> {
        &self.persistence
    }

    /// Restore saved workouts and render the list.
    ///
    /// Markers wait for the map; unreadable saved data counts as none.
    pub fn start(&mut self) {
        let workouts = match self.persistence.try_load() {
            Ok(workouts) => workouts,
            Err(e) => {
                let err = AppError::PersistenceRead(e);
                tracing::warn!(error = %err, "Starting without saved workouts");
                self.view.show_notice(&err.user_message());
                Vec::new()
            }
        };
        tracing::info!(count = workouts.len(), "Restored workouts");
        self.state.store.replace_all(workouts);
        self.render_list();
        if self.map.is_ready() {
            self.render_markers();
        }
    }

    /// Handle one event to completion.
    ///
    /// Errors have already been shown to the user when this returns.
    pub fn handle(&mut self, event: AppEvent) -> Result<()> {
        match event {
            AppEvent::PositionAcquired { coords } => self.init_map(coords),
            AppEvent::PositionUnavailable { reason } => self.position_unavailable(reason),
            AppEvent::MapClicked { coords } => {
                self.state.pending_location = Some(coords);
                self.view.show_form(coords);
                Ok(())
            }
            AppEvent::KindChanged { kind } => {
                self.state.form_kind = kind;
                self.view.show_kind_fields(kind);
                Ok(())
            }
            AppEvent::FormSubmitted { input } => self.submit(&input),
            AppEvent::WorkoutSelected { id } => self.select(&id),
            AppEvent::Reset => self.reset(),
        }
    }

    /// Run the event loop until the event channel closes.
    ///
    /// The position lookup runs alongside event processing; its outcome is
    /// handled as an event like any other.
    pub async fn run<G: Geolocation>(
        mut self,
        geolocation: &G,
        mut events: UnboundedReceiver<AppEvent>,
    ) -> Self {
        self.start();

        let position = geolocation.current_position();
        tokio::pin!(position);
        let mut position_pending = true;

        loop {
            let event = tokio::select! {
                biased;
                result = &mut position, if position_pending => {
                    position_pending = false;
                    position_event(result)
                }
                next = events.recv() => match next {
                    Some(event) => event,
                    None => break,
                },
            };
            self.dispatch(event);
        }

        if position_pending {
            let event = position_event(position.await);
            self.dispatch(event);
        }

        tracing::info!(workouts = self.state.store.len(), "Event loop finished");
        self
    }

    fn dispatch(&mut self, event: AppEvent) {
        if let Err(e) = self.handle(event) {
            if e.is_user_error() {
                tracing::info!(error = %e, "Event rejected");
            } else {
                tracing::error!(error = %e, "Event failed");
            }
        }
    }

    fn init_map(&mut self, center: Coordinates) -> Result<()> {
        if let Err(e) = self.map.initialize(center) {
            let err = AppError::Map(e);
            self.view.show_notice(&err.user_message());
            return Err(err);
        }
        self.render_markers();
        Ok(())
    }

    fn position_unavailable(&mut self, reason: GeolocationError) -> Result<()> {
        tracing::warn!(reason = %reason, "Falling back to default map center");
        let err = AppError::GeolocationUnavailable(reason);
        self.view.show_notice(&err.user_message());
        self.init_map(self.state.config.default_center)?;
        Err(err)
    }

    fn submit(&mut self, input: &RawWorkoutInput) -> Result<()> {
        // A form without an explicit type uses the kind selected in the form
        let defaulted;
        let input = if input.kind.trim().is_empty() {
            defaulted = RawWorkoutInput {
                kind: self.state.form_kind.as_str().to_string(),
                ..input.clone()
            };
            &defaulted
        } else {
            input
        };

        let created = self
            .state
            .pending_location
            .ok_or(ValidationError::MissingLocation)
            .and_then(|coords| self.factory.create_from_form(coords, input));

        let workout = match created {
            Ok(workout) => workout,
            Err(e) => {
                self.view.show_validation_error(&e.to_string());
                return Err(e.into());
            }
        };

        self.state.store.add(workout);
        self.state.pending_location = None;
        self.render_list();

        if let Some(workout) = self.state.store.all().last() {
            match self.map.render_marker(workout) {
                Ok(()) => {}
                // Rendered with the rest once the map comes up
                Err(MapError::NotReady) => {
                    tracing::warn!(id = workout.id(), "Map not ready, marker deferred")
                }
                Err(e) => return Err(e.into()),
            }
        }

        self.view.hide_form();
        self.save()
    }

    fn select(&mut self, id: &str) -> Result<()> {
        if self.state.store.register_click(id).is_none() {
            tracing::debug!(id, "Selected workout not in store");
            return Err(AppError::NotFound(id.to_string()));
        }

        let coords = match self.state.store.find_by_id(id) {
            Some(workout) => workout.coords(),
            None => return Err(AppError::NotFound(id.to_string())),
        };

        match self.map.pan_to(coords) {
            Ok(()) => Ok(()),
            Err(MapError::NotReady) => {
                tracing::warn!(id, "Map not ready, skipping pan");
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }

    fn reset(&mut self) -> Result<()> {
        if let Err(e) = self.persistence.clear() {
            let err = AppError::PersistenceWrite(e);
            self.view.show_notice(&err.user_message());
            return Err(err);
        }

        self.state.store.clear();
        self.state.pending_location = None;
        self.map.clear_markers();
        self.view.hide_form();
        self.render_list();
        tracing::info!("Workouts reset");
        Ok(())
    }

    /// Persist the whole store. The in-memory state stays valid on failure.
    fn save(&mut self) -> Result<()> {
        if let Err(e) = self.persistence.save(self.state.store.all()) {
            let err = AppError::PersistenceWrite(e);
            self.view.show_notice(&err.user_message());
            return Err(err);
        }
        Ok(())
    }

    fn render_list(&mut self) {
        let summaries: Vec<WorkoutSummary> = self
            .state
            .store
            .all()
            .iter()
            .map(WorkoutSummary::from)
            .collect();
        self.view.render_list(&summaries);
    }

    fn render_markers(&mut self) {
        self.map.clear_markers();
        if let Err(e) = self.map.render_all(self.state.store.all()) {
            tracing::warn!(error = %e, "Could not render workout markers");
        }
    }
}

fn position_event(result: std::result::Result<Coordinates, GeolocationError>) -> AppEvent {
    match result {
        Ok(coords) => AppEvent::PositionAcquired { coords },
        Err(reason) => AppEvent::PositionUnavailable { reason },
    }
}
