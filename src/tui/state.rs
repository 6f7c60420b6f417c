// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Catalog screen state
//!
//! Holds the last good catalog, the two load flags, the search query and
//! the list selection. All mutation happens on the UI loop; loads report
//! back through [`CatalogScreen::settle`].

use chrono::{DateTime, Local};

use crate::catalog::{filter_products, Product};
use crate::error::Result;

/// What started a load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadTrigger {
    /// The load issued when the screen first appears
    Initial,
    /// A user-requested refresh
    Refresh,
}

/// State of the single catalog screen
#[derive(Debug, Clone)]
pub struct CatalogScreen {
    products: Vec<Product>,
    /// True only until the first load settles
    pub loading: bool,
    /// True while a refresh-triggered load is pending
    pub refreshing: bool,
    query: String,
    last_error: Option<String>,
    last_loaded_at: Option<DateTime<Local>>,
    selected: usize,
    pending_loads: usize,
    /// Spinner frame counter
    pub tick: usize,
}

impl Default for CatalogScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogScreen {
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
            loading: true,
            refreshing: false,
            query: String::new(),
            last_error: None,
            last_loaded_at: None,
            selected: 0,
            pending_loads: 0,
            tick: 0,
        }
    }

    /// The full catalog, in server order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Most recent load failure, cleared by the next successful load.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn last_loaded_at(&self) -> Option<DateTime<Local>> {
        self.last_loaded_at
    }

    /// Index of the highlighted row in the filtered view.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Loads started but not yet settled.
    pub fn pending_loads(&self) -> usize {
        self.pending_loads
    }

    /// Products matching the current query, recomputed on every call.
    pub fn filtered(&self) -> Vec<&Product> {
        filter_products(&self.products, &self.query)
    }

    /// Store the query verbatim.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
        self.selected = 0;
    }

    pub fn push_query_char(&mut self, c: char) {
        let mut text = std::mem::take(&mut self.query);
        text.push(c);
        self.set_query(text);
    }

    pub fn pop_query_char(&mut self) {
        let mut text = std::mem::take(&mut self.query);
        text.pop();
        self.set_query(text);
    }

    pub fn clear_query(&mut self) {
        self.set_query(String::new());
    }

    /// Record that a load is starting.
    ///
    /// A refresh raises `refreshing`; the initial load relies on `loading`,
    /// which is only ever true before the first settle.
    pub fn begin_load(&mut self, trigger: LoadTrigger) {
        self.pending_loads += 1;
        if trigger == LoadTrigger::Refresh {
            self.refreshing = true;
        }
        tracing::debug!(
            target: "blush.screen",
            ?trigger,
            pending = self.pending_loads,
            "load started"
        );
    }

    /// Apply the outcome of a load.
    ///
    /// Success replaces the catalog wholesale. Failure is logged and kept
    /// in `last_error`; the previous catalog stays. Either way both flags
    /// drop.
    pub fn settle(&mut self, outcome: Result<Vec<Product>>) {
        self.pending_loads = self.pending_loads.saturating_sub(1);

        match outcome {
            Ok(products) => {
                tracing::info!(target: "blush.screen", count = products.len(), "catalog loaded");
                self.products = products;
                self.last_error = None;
                self.last_loaded_at = Some(Local::now());
            }
            Err(e) => {
                tracing::error!(target: "blush.screen", error = %e, "failed to load products");
                self.last_error = Some(e.to_string());
            }
        }

        self.loading = false;
        self.refreshing = false;
        self.clamp_selection();
    }

    pub fn select_next(&mut self) {
        self.move_selection(1);
    }

    pub fn select_previous(&mut self) {
        self.move_selection(-1);
    }

    /// Move the selection by `delta` rows, stopping at either end.
    pub fn move_selection(&mut self, delta: isize) {
        let len = self.filtered().len();
        if len == 0 {
            self.selected = 0;
            return;
        }
        let target = self.selected as isize + delta;
        self.selected = target.clamp(0, len as isize - 1) as usize;
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.filtered().len().saturating_sub(1);
    }

    /// The highlighted product, if the filtered view is non-empty.
    pub fn selected_product(&self) -> Option<&Product> {
        self.filtered().get(self.selected).copied()
    }

    pub fn advance_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    fn clamp_selection(&mut self) {
        let len = self.filtered().len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }
}
