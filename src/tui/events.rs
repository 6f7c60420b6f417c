// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Event system for the catalog TUI
//!
//! Loads run as tokio tasks and report back to the UI loop over an
//! unbounded mpsc channel, so input stays responsive while a fetch is
//! pending.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::catalog::{CatalogSource, Product};
use crate::error::Result;

use super::state::LoadTrigger;

/// Events sent from background tasks to the UI loop
#[derive(Debug)]
pub enum CatalogEvent {
    /// A load finished, successfully or not
    LoadSettled {
        trigger: LoadTrigger,
        outcome: Result<Vec<Product>>,
    },
}

/// Type alias for the event sender
pub type EventSender = mpsc::UnboundedSender<CatalogEvent>;

/// Type alias for the event receiver
pub type EventReceiver = mpsc::UnboundedReceiver<CatalogEvent>;

/// Create a new event channel
pub fn create_event_channel() -> (EventSender, EventReceiver) {
    mpsc::unbounded_channel()
}

/// Helper for sending events, ignoring errors if receiver is dropped
pub fn send_event(tx: &EventSender, event: CatalogEvent) {
    let _ = tx.send(event);
}

/// Fetch the catalog on a background task and report the outcome.
///
/// Nothing cancels or de-duplicates these tasks; concurrent loads settle
/// in whatever order their responses arrive.
pub fn spawn_load(
    source: Arc<dyn CatalogSource>,
    trigger: LoadTrigger,
    tx: EventSender,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let outcome = source.fetch_products().await;
        send_event(&tx, CatalogEvent::LoadSettled { trigger, outcome });
    })
}
