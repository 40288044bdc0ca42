// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Touchboard - editor and play console for a camera-based touch board.
//!
//! A desktop client for the touch-detection backend: draw audio-triggering
//! regions of interest on a project's background image, manage projects,
//! and watch live detection status while touched regions fire their clips.

mod api;
mod app;
mod config;
mod models;
mod ui;
mod util;

use anyhow::Result;
use app::TouchboardApp;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let config = config::load();
    log::info!("Using backend at {}", config.server_url);

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Touchboard"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Touchboard",
        options,
        Box::new(move |cc| Ok(Box::new(TouchboardApp::new(config, &cc.egui_ctx)))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
