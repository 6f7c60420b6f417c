// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Mock catalog source for testing
//!
//! Replays a script of outcomes, one per fetch, without touching the
//! network. Each outcome can carry a delay so tests can make loads settle
//! out of order.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use super::{CatalogSource, Product};
use crate::error::{ApiError, Result};

/// One scripted fetch result
#[derive(Debug, Clone)]
enum MockOutcome {
    Products(Vec<Product>),
    Failure(String),
}

#[derive(Debug, Clone)]
struct ScriptedFetch {
    outcome: MockOutcome,
    delay: Option<Duration>,
}

/// A scripted catalog source
#[derive(Clone, Default)]
pub struct MockCatalogSource {
    script: Arc<Mutex<VecDeque<ScriptedFetch>>>,
    call_count: Arc<AtomicUsize>,
}

impl MockCatalogSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful fetch.
    pub fn push_products(&self, products: Vec<Product>) -> &Self {
        self.push(MockOutcome::Products(products), None)
    }

    /// Queue a successful fetch that settles after `delay`.
    pub fn push_products_after(&self, products: Vec<Product>, delay: Duration) -> &Self {
        self.push(MockOutcome::Products(products), Some(delay))
    }

    /// Queue a network failure.
    pub fn push_failure(&self, message: impl Into<String>) -> &Self {
        self.push(MockOutcome::Failure(message.into()), None)
    }

    /// Queue a network failure that settles after `delay`.
    pub fn push_failure_after(&self, message: impl Into<String>, delay: Duration) -> &Self {
        self.push(MockOutcome::Failure(message.into()), Some(delay))
    }

    /// Number of fetches performed so far.
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    fn push(&self, outcome: MockOutcome, delay: Option<Duration>) -> &Self {
        if let Ok(mut script) = self.script.lock() {
            script.push_back(ScriptedFetch { outcome, delay });
        }
        self
    }

    fn next(&self) -> Option<ScriptedFetch> {
        self.script.lock().ok().and_then(|mut s| s.pop_front())
    }
}

#[async_trait]
impl CatalogSource for MockCatalogSource {
    async fn fetch_products(&self) -> Result<Vec<Product>> {
        self.call_count.fetch_add(1, Ordering::SeqCst);

        let Some(fetch) = self.next() else {
            return Err(ApiError::Network("no scripted response left".to_string()).into());
        };

        if let Some(delay) = fetch.delay {
            tokio::time::sleep(delay).await;
        }

        match fetch.outcome {
            MockOutcome::Products(products) => Ok(products),
            MockOutcome::Failure(message) => Err(ApiError::Network(message).into()),
        }
    }

    fn endpoint(&self) -> &str {
        "mock://catalog"
    }
}
