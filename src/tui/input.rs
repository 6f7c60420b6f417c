// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Input handling for the TUI
//!
//! Handles keyboard input and maps to application actions.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::{App, AppResult};
use crate::error::Result;

/// Rows moved by PageUp/PageDown
const PAGE_ROWS: isize = 5;

/// Handle every terminal event that is already queued, without blocking
pub fn handle_pending_input(app: &mut App) -> Result<AppResult> {
    while event::poll(Duration::ZERO)? {
        if let Event::Key(key) = event::read()? {
            // Only handle key press events (not release)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if handle_key(app, key) == AppResult::Quit {
                return Ok(AppResult::Quit);
            }
        }
    }

    Ok(AppResult::Continue)
}

/// Map a key press to an action on the app
pub fn handle_key(app: &mut App, key: KeyEvent) -> AppResult {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    // Ctrl+C quits from anywhere
    if ctrl && key.code == KeyCode::Char('c') {
        return AppResult::Quit;
    }

    // The loading screen has no list or search box to drive
    if app.screen.loading {
        return match key.code {
            KeyCode::Esc => AppResult::Quit,
            _ => AppResult::Continue,
        };
    }

    match key.code {
        KeyCode::F(5) => {
            app.refresh();
        }
        KeyCode::Char('r') if ctrl => {
            app.refresh();
        }
        KeyCode::Char('u') if ctrl => app.screen.clear_query(),
        KeyCode::Esc => {
            if app.screen.query().is_empty() {
                return AppResult::Quit;
            }
            app.screen.clear_query();
        }

        // Navigation
        KeyCode::Up => app.screen.select_previous(),
        KeyCode::Down => app.screen.select_next(),
        KeyCode::PageUp => app.screen.move_selection(-PAGE_ROWS),
        KeyCode::PageDown => app.screen.move_selection(PAGE_ROWS),
        KeyCode::Home => app.screen.select_first(),
        KeyCode::End => app.screen.select_last(),

        // Search box
        KeyCode::Backspace => app.screen.pop_query_char(),
        KeyCode::Char(c) if !ctrl => app.screen.push_query_char(c),

        _ => {}
    }

    AppResult::Continue
}
