// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory ordered workout collection.

use crate::models::WorkoutRecord;

/// Workouts in creation order, which is also rendering order.
///
/// Lookups are linear scans; a user has tens to low hundreds of workouts.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct WorkoutStore {
    workouts: Vec<WorkoutRecord>,
}

impl WorkoutStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a workout.
    pub fn add(&mut self, workout: WorkoutRecord) {
        self.workouts.push(workout);
    }

    /// All workouts in creation order.
    pub fn all(&self) -> &[WorkoutRecord] {
        &self.workouts
    }

    pub fn len(&self) -> usize {
        self.workouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty()
    }

    pub fn find_by_id(&self, id: &str) -> Option<&WorkoutRecord> {
        self.workouts.iter().find(|w| w.id() == id)
    }

    /// Count a click on the workout, returning its new click count.
    ///
    /// Unknown ids leave the store untouched and return `None`.
    pub fn register_click(&mut self, id: &str) -> Option<u32> {
        let workout = self.workouts.iter_mut().find(|w| w.id() == id)?;
        let clicks = workout.register_click();
        tracing::debug!(id, clicks, "Workout click registered");
        Some(clicks)
    }

    /// Replace the whole collection in one step.
    pub fn replace_all(&mut self, workouts: Vec<WorkoutRecord>) {
        self.workouts = workouts;
    }

    pub fn clear(&mut self) {
        self.workouts.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Coordinates, WorkoutKind};
    use crate::services::factory::{SequentialIdGenerator, WorkoutFactory};

    fn factory() -> WorkoutFactory {
        WorkoutFactory::new(Box::new(SequentialIdGenerator::default()))
    }

    fn run(f: &WorkoutFactory, distance: f64) -> WorkoutRecord {
        f.create(
            WorkoutKind::Running,
            Coordinates::new(0.0, 0.0),
            distance,
            30.0,
            170.0,
        )
        .unwrap()
    }

    #[test]
    fn test_add_keeps_creation_order() {
        let f = factory();
        let mut store = WorkoutStore::new();
        store.add(run(&f, 1.0));
        store.add(run(&f, 2.0));
        store.add(run(&f, 3.0));

        let ids: Vec<&str> = store.all().iter().map(|w| w.id()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_find_by_id() {
        let f = factory();
        let mut store = WorkoutStore::new();
        store.add(run(&f, 1.0));
        store.add(run(&f, 2.0));

        assert_eq!(store.find_by_id("2").map(|w| w.distance_km()), Some(2.0));
        assert!(store.find_by_id("nope").is_none());
    }

    #[test]
    fn test_register_click_does_not_reorder() {
        let f = factory();
        let mut store = WorkoutStore::new();
        store.add(run(&f, 1.0));
        store.add(run(&f, 2.0));

        assert_eq!(store.register_click("1"), Some(1));
        assert_eq!(store.register_click("1"), Some(2));

        let ids: Vec<&str> = store.all().iter().map(|w| w.id()).collect();
        assert_eq!(ids, vec!["1", "2"]);
        assert_eq!(store.find_by_id("1").unwrap().click_count(), 2);
        assert_eq!(store.find_by_id("2").unwrap().click_count(), 0);
    }

    #[test]
    fn test_register_click_unknown_id_is_noop() {
        let f = factory();
        let mut store = WorkoutStore::new();
        store.add(run(&f, 1.0));
        let before = store.clone();

        assert_eq!(store.register_click("missing"), None);
        assert_eq!(store, before);
    }

    #[test]
    fn test_replace_all_and_clear() {
        let f = factory();
        let mut store = WorkoutStore::new();
        store.add(run(&f, 1.0));

        store.replace_all(vec![run(&f, 5.0), run(&f, 6.0)]);
        let ids: Vec<&str> = store.all().iter().map(|w| w.id()).collect();
        assert_eq!(ids, vec!["2", "3"]);

        store.clear();
        assert!(store.is_empty());
    }
}
