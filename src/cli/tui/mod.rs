//! Interactive TUI board
//!
//! Shows the active and finished lists side by side, with a popup form for
//! new projects and keyboard drag-and-drop between the lists.

mod app;
mod event;
mod ui;
mod utils;
mod views;

use std::panic::{self, AssertUnwindSafe};
use std::time::Duration;

use anyhow::{anyhow, Result};

use crate::board::Board;
use crate::config::BoardConfig;
use app::App;
use event::EventHandler;

/// Launch the TUI
pub fn run(config: &BoardConfig) -> Result<()> {
    let mut terminal = ui::init_terminal()?;
    let mut app = App::new(Board::new(config.input.clone()));
    let events = EventHandler::new(Duration::from_millis(config.tui.tick_rate_ms));

    // Restore the terminal even if drawing panics
    let result = panic::catch_unwind(AssertUnwindSafe(|| app.run(&mut terminal, &events)));
    let restore_result = ui::restore_terminal();

    match result {
        Ok(inner_result) => {
            restore_result?;
            inner_result
        }
        Err(panic_payload) => {
            let _ = restore_result;
            let message = panic_payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| panic_payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown error".to_string());
            Err(anyhow!("TUI panicked: {}", message))
        }
    }
}
