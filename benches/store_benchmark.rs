use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use workout_tracker::models::{Coordinates, WorkoutKind};
use workout_tracker::services::persistence::{decode, encode};
use workout_tracker::services::{SequentialIdGenerator, WorkoutFactory, WorkoutStore};

/// Upper end of a single user's history.
const WORKOUT_COUNT: usize = 500;

fn build_store() -> WorkoutStore {
    let factory = WorkoutFactory::new(Box::new(SequentialIdGenerator::default()));
    let mut store = WorkoutStore::new();
    for i in 0..WORKOUT_COUNT {
        let kind = if i % 2 == 0 {
            WorkoutKind::Running
        } else {
            WorkoutKind::Cycling
        };
        let coords = Coordinates::new(40.0 + i as f64 * 0.001, -74.0);
        let workout = factory
            .create(kind, coords, 5.0 + i as f64 % 20.0, 30.0, 170.0)
            .expect("valid workout");
        store.add(workout);
    }
    store
}

fn benchmark_store(c: &mut Criterion) {
    let store = build_store();
    let last_id = WORKOUT_COUNT.to_string();
    let encoded = encode(store.all()).expect("Failed to encode workouts");

    let mut group = c.benchmark_group("workout_store");

    group.bench_function("find_last_by_id", |b| {
        b.iter(|| store.find_by_id(black_box(&last_id)))
    });

    group.bench_function("encode_all", |b| b.iter(|| encode(black_box(store.all()))));

    group.bench_function("decode_all", |b| b.iter(|| decode(black_box(&encoded))));

    group.finish();
}

criterion_group!(benches, benchmark_store);
criterion_main!(benches);
