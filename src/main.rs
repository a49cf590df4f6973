#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;
use flashdeck::gui::FlashdeckApp;

fn main() -> eframe::Result {
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Flashdeck")
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([820.0, 560.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Flashdeck",
        native_options,
        Box::new(|cc| Ok(Box::new(FlashdeckApp::new(cc)))),
    )
}
