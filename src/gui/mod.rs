pub mod app;
pub mod colors;
pub mod search;

use crate::{logging, AppConfig, TimeMachineError};

/// Entry point: launch the native GUI window
pub fn run(config: AppConfig) -> crate::Result<()> {
    logging::separator("GUI START");

    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title("TimeMachine Search")
            .with_inner_size([1024.0, 800.0])
            .with_min_inner_size([480.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "TimeMachine",
        native_options,
        Box::new(move |cc| Ok(Box::new(app::TimeMachineApp::new(cc, config)))),
    )
    .map_err(|e| TimeMachineError::Gui(e.to_string()))
}
