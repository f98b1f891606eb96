// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout-Tracker headless driver
//!
//! Reads controller events as JSON lines from stdin, e.g.
//! `{"event":"map_clicked","coords":[40.7,-74.0]}`, runs them through the
//! controller, and prints the resulting markers as GeoJSON on stdout.
//!
//! Blank lines and lines starting with `#` are ignored. A line that is not
//! a valid event is skipped with a warning in the log and does not stop
//! the run.

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc::UnboundedSender;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use workout_tracker::{
    config::Config,
    controller::{AppController, AppEvent},
    headless::{TracingMap, TracingView},
    services::{FileBlobStore, FixedGeolocation, GeolocationError, TimestampIdGenerator, WorkoutFactory},
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries the GeoJSON result
    init_logging();

    // Load configuration from environment
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(
        storage_dir = %config.storage_dir.display(),
        key = %config.storage_key,
        "Starting workout tracker"
    );

    let blob = FileBlobStore::open(&config.storage_dir)
        .context("Failed to open workout storage")?
        .with_quota(config.storage_quota_bytes);
    let factory = WorkoutFactory::new(Box::new(TimestampIdGenerator::new(config.id_length)));
    let geolocation = match config.device_position {
        Some(coords) => FixedGeolocation::at(coords),
        None => FixedGeolocation::failing(GeolocationError::Unavailable),
    };

    let controller =
        AppController::new(config, factory, blob, TracingMap::default(), TracingView);

    let (tx, rx) = tokio::sync::mpsc::unbounded_channel();
    let reader = tokio::spawn(forward_events(tx));

    let controller = controller.run(&geolocation, rx).await;
    reader
        .await
        .context("Event reader task panicked")?
        .context("Failed to read events from stdin")?;

    let markers = serde_json::to_string_pretty(&controller.map().markers_geojson())?;
    println!("{}", markers);
    Ok(())
}

/// Forward JSON-line events from stdin until EOF.
async fn forward_events(tx: UnboundedSender<AppEvent>) -> std::io::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if let Some(event) = parse_event_line(&line) {
            if tx.send(event).is_err() {
                break;
            }
        }
    }
    Ok(())
}

/// Parse one input line. Blank, comment and unparseable lines yield `None`.
fn parse_event_line(line: &str) -> Option<AppEvent> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    match serde_json::from_str::<AppEvent>(line) {
        Ok(event) => Some(event),
        Err(e) => {
            tracing::warn!(error = %e, line, "Skipping unparseable event");
            None
        }
    }
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("workout_tracker=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
