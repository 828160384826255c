//! Headless fly-through of the free-fly camera.
//!
//! Usage: `flycam [options.toml]`

mod tour;

use std::path::Path;

use flycam_engine::{FlyApp, FlyAppConfig, FlycamError, Options};

use tour::Tour;

const FRAME_TIME: f32 = 1.0 / 60.0;

fn main() -> Result<(), FlycamError> {
    tracing_subscriber::fmt()
        .with_max_level(if cfg!(debug_assertions) {
            tracing::Level::TRACE
        } else {
            tracing::Level::INFO
        })
        .init();

    let options = match std::env::args_os().nth(1) {
        Some(path) => Options::load(Path::new(&path))?,
        None => Options::default(),
    };

    let tour = Tour::default();
    let frames = tour.frames();

    let mut config = FlyAppConfig::from_options(&options);
    config.controllers.push(Box::new(tour));
    let mut app = FlyApp::new(config);

    for frame in 0..frames {
        let camera = app.frame(FRAME_TIME);
        tracing::trace!(frame, position = ?camera.position, zoom = camera.zoom, "Frame");
    }

    let camera = app.camera();
    tracing::info!(
        position = ?camera.position(),
        direction = ?camera.direction(),
        zoom = camera.zoom(),
        "Tour finished after {frames} frames"
    );
    tracing::info!("View matrix: {:?}", camera.view_matrix());

    Ok(())
}
