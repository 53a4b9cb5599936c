#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 560.0])
            .with_min_inner_size([640.0, 440.0])
            .with_drag_and_drop(true),
        ..Default::default()
    };
    eframe::run_native(
        "eframe pen",
        native_options,
        Box::new(|cc| Ok(Box::new(eframe_pen::PathEditorApp::new(cc)))),
    )
}
