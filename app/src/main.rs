mod app;
mod ui;

use app::PlaygroundApp;

fn main() -> eframe::Result<()> {
    let native_options = eframe::NativeOptions::default();
    eframe::run_native(
        "ML Playground",
        native_options,
        Box::new(|_cc| Ok(Box::new(PlaygroundApp::default()))),
    )
}
