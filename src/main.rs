//! Indimap - Pipeline Indication Data Viewer & Interactive Map
//!
//! A Rust application for visualizing pipeline inspection indication data.

use anyhow::Result;
use eframe::egui;
use indimap::gui::IndimapApp;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Diagnostics go to stderr; RUST_LOG overrides the default filter.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("indimap=info")),
        )
        .init();
    tracing::info!("Starting Indimap");

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 800.0])
            .with_min_inner_size([1100.0, 650.0])
            .with_title("Indimap"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Indimap",
        options,
        Box::new(|cc| Ok(Box::new(IndimapApp::new(cc)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {e}"))
}
