mod app;
mod color;
mod config;
mod data;
mod i18n;
mod state;
mod ui;

use app::MacroTrackerApp;
use config::AppConfig;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let config = AppConfig::from_env();
    log::info!(
        "Starting with data file {} ({:?})",
        config.data_path.display(),
        config.language
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Morocco Macro Tracker")
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Morocco Macro Tracker",
        options,
        Box::new(|_cc| Ok(Box::new(MacroTrackerApp::new(config)))),
    )
}
