//! UI components and application module
//!
//! This module provides the egui/eframe-based window: code console on the
//! left, narrative text in the centre, controls and the spoken intro on the
//! right.

mod app;
pub mod components;
mod state;
mod theme;

pub use app::JarvisApp;
pub use state::{AppState, Warning};
pub use theme::Theme;

use crate::integration::{AppConfig, Orchestrator};
use tracing::error;

pub const WINDOW_TITLE: &str = "J.A.R.V.I.S. AI System";

/// Start the orchestrator and run the window until it closes
pub fn run(config: AppConfig) -> eframe::Result<()> {
    let mut state = AppState::new(config.models.keys().map(str::to_string).collect());

    match Orchestrator::from_config(&config).and_then(|(orchestrator, handle)| {
        let worker = orchestrator.start()?;
        Ok((handle, worker))
    }) {
        Ok((handle, worker)) => state = state.with_handle(handle).with_worker(worker),
        Err(e) => {
            error!("Failed to start orchestrator: {}", e);
            state.warning = Some(Warning::new("Error", e.user_message()));
        }
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1920.0, 1080.0])
            .with_min_inner_size([960.0, 540.0])
            .with_title(WINDOW_TITLE),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(|cc| Ok(Box::new(JarvisApp::new(cc, state)))),
    )
}
