//! SkySafe - Airline Safety Statistics Dashboard
//!
//! Loads the bundled airline safety dataset once and renders its table and
//! chart panels in a single window.

mod charts;
mod data;
mod gui;

use anyhow::Context;
use eframe::egui;
use gui::DashboardApp;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const DATASET_PATH: &str = "data/airline-safety.csv";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // One-shot load; any problem with the dataset is fatal.
    let table = data::SafetyTable::load(DATASET_PATH)
        .with_context(|| format!("failed to load dataset from {DATASET_PATH}"))?;
    info!(rows = table.len(), "dataset loaded");
    if table.is_empty() {
        warn!("dataset has no rows; every panel will render empty");
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 900.0])
            .with_min_inner_size([900.0, 700.0])
            .with_title("Airline Safety Dashboard"),
        ..Default::default()
    };

    eframe::run_native(
        "Airline Safety Dashboard",
        options,
        Box::new(move |cc| {
            let app = DashboardApp::new(cc, table)?;
            Ok(Box::new(app) as Box<dyn eframe::App>)
        }),
    )
    .map_err(|e| anyhow::anyhow!("failed to run dashboard window: {e}"))
}
