// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Catalog browser TUI
//!
//! A single-screen terminal UI over the product catalog.
//! Uses ratatui for rendering and crossterm for input handling.

pub mod app;
pub mod events;
pub mod input;
pub mod state;
pub mod ui;

use std::io;
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::catalog::CatalogSource;
use crate::error::{BlushError, Result};
use app::{App, AppResult};

/// Run the interactive catalog browser until the user quits
pub async fn run_catalog_tui(
    source: Arc<dyn CatalogSource>,
    initial_query: Option<String>,
    tick_rate: Duration,
) -> Result<()> {
    // Restores the terminal on panic, on error and on normal exit
    let _guard = TerminalGuard::install(restore_terminal);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(source);
    if let Some(query) = initial_query {
        app.screen.set_query(query);
    }
    app.start();

    run_app(&mut terminal, &mut app, tick_rate).await
}

/// Leave raw mode and the alternate screen. Safe to call more than once.
fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
}

/// Panic hook plus drop-time restore around a TUI session
struct TerminalGuard {
    restore: fn(),
}

impl TerminalGuard {
    fn install(restore: fn()) -> Self {
        let original_panic_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            restore();
            original_panic_hook(panic_info);
        }));
        Self { restore }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        // Drop our hook before restoring
        let _ = std::panic::take_hook();
        (self.restore)();
    }
}

/// Main application loop
async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    tick_rate: Duration,
) -> Result<()> {
    loop {
        app.pump_events();

        terminal
            .draw(|f| ui::draw(f, &app.screen))
            .map_err(|e| BlushError::Tui(e.to_string()))?;

        match input::handle_pending_input(app)? {
            AppResult::Continue => {}
            AppResult::Quit => break,
        }

        // Redraw as soon as a load settles, or once per tick for the spinner
        app.wait_for_event(tick_rate).await;
    }

    Ok(())
}

/// Run a single draw of the app loop (for testing)
#[cfg(test)]
fn run_app_iteration<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<usize> {
    let applied = app.pump_events();
    terminal
        .draw(|f| ui::draw(f, &app.screen))
        .map_err(|e| BlushError::Tui(e.to_string()))?;
    Ok(applied)
}
