//! Full-screen terminal front end

pub mod app;
pub mod colors;
pub mod results;
pub mod search;
pub mod ui;

use crate::{logging, AppConfig, TimeMachineError};

/// Entry point: take over the terminal until the user quits
pub fn run(config: AppConfig) -> crate::Result<()> {
    logging::separator("TUI START");

    let mut terminal =
        ratatui::try_init().map_err(|e| TimeMachineError::terminal("terminal setup", e))?;
    let result = app::App::new(config).run(&mut terminal);
    ratatui::restore();

    logging::info("TUI", "Terminal restored");
    result
}
