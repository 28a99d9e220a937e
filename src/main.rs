//! 903 Header Analyzer - CSV Analysis & Chart Viewer
//!
//! A Rust application for analyzing 903 header data exports and displaying
//! summary charts (sex breakdown, ethnicity shares).

mod charts;
mod data;
mod gui;
mod stats;

use eframe::egui;
use gui::HeaderApp;

fn main() -> eframe::Result<()> {
    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([900.0, 640.0])
            .with_title("903 Header Analyzer"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "903 Header Analyzer",
        options,
        Box::new(|cc| Ok(Box::new(HeaderApp::new(cc)))),
    )
}
