// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Application state and logic
//!
//! Binds the catalog screen to a catalog source and the background load
//! channel.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::catalog::CatalogSource;

use super::events::{create_event_channel, spawn_load, CatalogEvent, EventReceiver, EventSender};
use super::state::{CatalogScreen, LoadTrigger};

#[cfg(test)]
mod tests;

/// Result of input handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppResult {
    /// Continue running
    Continue,
    /// Quit the application
    Quit,
}

/// The running catalog browser
pub struct App {
    pub screen: CatalogScreen,
    source: Arc<dyn CatalogSource>,
    tx: EventSender,
    rx: EventReceiver,
}

impl App {
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        let (tx, rx) = create_event_channel();
        Self {
            screen: CatalogScreen::new(),
            source,
            tx,
            rx,
        }
    }

    /// Start the initial load. Must be called from inside a tokio runtime.
    pub fn start(&mut self) -> JoinHandle<()> {
        self.load(LoadTrigger::Initial)
    }

    /// Raise `refreshing` and reload the catalog.
    pub fn refresh(&mut self) -> JoinHandle<()> {
        self.load(LoadTrigger::Refresh)
    }

    /// Kick off a background fetch.
    pub fn load(&mut self, trigger: LoadTrigger) -> JoinHandle<()> {
        self.screen.begin_load(trigger);
        spawn_load(Arc::clone(&self.source), trigger, self.tx.clone())
    }

    /// Apply every event that has already arrived. Returns how many were applied.
    pub fn pump_events(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.rx.try_recv() {
            self.apply(event);
            applied += 1;
        }
        applied
    }

    /// Wait for the next event and apply it.
    pub async fn next_event(&mut self) -> bool {
        match self.rx.recv().await {
            Some(event) => {
                self.apply(event);
                true
            }
            None => false,
        }
    }

    /// Wait up to one tick for a load to settle. Advances the spinner when
    /// the tick runs out first.
    pub async fn wait_for_event(&mut self, tick_rate: Duration) -> bool {
        let settled = tokio::select! {
            received = self.next_event() => received,
            _ = tokio::time::sleep(tick_rate) => false,
        };
        if !settled {
            self.screen.advance_tick();
        }
        settled
    }

    fn apply(&mut self, event: CatalogEvent) {
        match event {
            CatalogEvent::LoadSettled { trigger, outcome } => {
                tracing::debug!(
                    target: "blush.tui",
                    ?trigger,
                    endpoint = self.source.endpoint(),
                    ok = outcome.is_ok(),
                    "load settled"
                );
                self.screen.settle(outcome);
            }
        }
    }
}
