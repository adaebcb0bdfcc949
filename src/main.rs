#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;
use tracing::info;

mod app;
mod logger;
mod modules;
mod settings;
mod style;

fn main() -> eframe::Result<()> {
    logger::init();
    info!("Starting Image Converter");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([460.0, 420.0])
            .with_min_inner_size([420.0, 380.0])
            .with_title("Image Converter"),
        ..Default::default()
    };
    eframe::run_native(
        "Image Converter",
        options,
        Box::new(|cc| Ok(Box::new(app::ImageConverterApp::new(cc)))),
    )
}
