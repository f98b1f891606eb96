// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod blob;
pub mod factory;
pub mod geolocation;
pub mod map;
pub mod persistence;
pub mod store;
pub mod view;

pub use blob::{BlobStore, FileBlobStore, MemoryBlobStore, StorageError};
pub use factory::{
    IdGenerator, RawWorkoutInput, SequentialIdGenerator, TimestampIdGenerator, ValidationError,
    WorkoutFactory,
};
pub use geolocation::{FixedGeolocation, Geolocation, GeolocationError};
pub use map::{MapCollaborator, MapController, MapError};
pub use persistence::PersistenceAdapter;
pub use store::WorkoutStore;
pub use view::WorkoutView;
