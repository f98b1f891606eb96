// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use workout_tracker::config::Config;
use workout_tracker::controller::AppController;
use workout_tracker::models::{Coordinates, MarkerPopup, WorkoutKind, WorkoutSummary};
use workout_tracker::services::{
    MapCollaborator, MapError, MemoryBlobStore, SequentialIdGenerator, WorkoutFactory,
    WorkoutView,
};

/// Map that records every call.
#[derive(Debug, Default)]
pub struct RecordingMap {
    pub fail_init: bool,
    pub centers: Vec<(Coordinates, u8)>,
    pub markers: Vec<MarkerPopup>,
    pub pans: Vec<(Coordinates, u8)>,
}

impl MapCollaborator for RecordingMap {
    fn initialize(&mut self, center: Coordinates, zoom: u8) -> Result<(), MapError> {
        if self.fail_init {
            return Err(MapError::InitializationFailed("no map container".to_string()));
        }
        self.centers.push((center, zoom));
        Ok(())
    }

    fn add_marker(&mut self, popup: &MarkerPopup) {
        self.markers.push(popup.clone());
    }

    fn remove_markers(&mut self) {
        self.markers.clear();
    }

    fn pan_to(&mut self, coords: Coordinates, zoom: u8) {
        self.pans.push((coords, zoom));
    }
}

/// View that records every call.
#[derive(Debug, Default)]
pub struct RecordingView {
    pub lists: Vec<Vec<WorkoutSummary>>,
    pub forms: Vec<Coordinates>,
    pub kind_fields: Vec<WorkoutKind>,
    pub hidden: usize,
    pub validation_errors: Vec<String>,
    pub notices: Vec<String>,
}

#[allow(dead_code)]
impl RecordingView {
    /// Ids of the most recently rendered list.
    pub fn last_list_ids(&self) -> Vec<String> {
        self.lists
            .last()
            .map(|list| list.iter().map(|w| w.id.clone()).collect())
            .unwrap_or_default()
    }
}

impl WorkoutView for RecordingView {
    fn render_list(&mut self, workouts: &[WorkoutSummary]) {
        self.lists.push(workouts.to_vec());
    }

    fn show_form(&mut self, coords: Coordinates) {
        self.forms.push(coords);
    }

    fn show_kind_fields(&mut self, kind: WorkoutKind) {
        self.kind_fields.push(kind);
    }

    fn hide_form(&mut self) {
        self.hidden += 1;
    }

    fn show_validation_error(&mut self, message: &str) {
        self.validation_errors.push(message.to_string());
    }

    fn show_notice(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }
}

pub type TestController = AppController<RecordingMap, RecordingView, MemoryBlobStore>;

/// Deterministic-id factory ("1", "2", ...).
#[allow(dead_code)]
pub fn test_factory() -> WorkoutFactory {
    WorkoutFactory::new(Box::new(SequentialIdGenerator::default()))
}

/// Controller over the given blob store with recording collaborators.
#[allow(dead_code)]
pub fn test_controller_with(blob: MemoryBlobStore, map: RecordingMap) -> TestController {
    AppController::new(
        Config::default(),
        test_factory(),
        blob,
        map,
        RecordingView::default(),
    )
}

/// Controller over an empty in-memory blob store.
#[allow(dead_code)]
pub fn test_controller() -> TestController {
    test_controller_with(MemoryBlobStore::new(), RecordingMap::default())
}

#[allow(dead_code)]
pub fn new_york() -> Coordinates {
    Coordinates::new(40.7, -74.0)
}
