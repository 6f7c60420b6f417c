// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use std::sync::Arc;
use std::time::Duration;

use super::*;
use crate::catalog::{MockCatalogSource, Product};

fn lipstick() -> Product {
    Product::new(1, "Red Lipstick")
        .with_brand("Acme")
        .with_price("9.99")
        .with_product_type("lipstick")
}

fn app_with(source: &MockCatalogSource) -> App {
    App::new(Arc::new(source.clone()))
}

#[tokio::test]
async fn test_initial_load_clears_loading() {
    let source = MockCatalogSource::new();
    source.push_products(vec![lipstick()]);
    let mut app = app_with(&source);

    app.start().await.unwrap();
    assert!(app.screen.loading);
    assert_eq!(app.pump_events(), 1);

    assert!(!app.screen.loading);
    assert!(!app.screen.refreshing);
    assert_eq!(app.screen.products().len(), 1);
}

#[tokio::test]
async fn test_initial_failure_clears_loading() {
    let source = MockCatalogSource::new();
    source.push_failure("connection reset");
    let mut app = app_with(&source);

    app.start();
    assert!(app.next_event().await);

    assert!(!app.screen.loading);
    assert!(app.screen.products().is_empty());
    assert!(app.screen.last_error().is_some());
}

#[tokio::test]
async fn test_refresh_sets_and_clears_refreshing() {
    let source = MockCatalogSource::new();
    source
        .push_products(vec![lipstick()])
        .push_products(vec![Product::new(2, "Gloss"), Product::new(3, "Liner")]);
    let mut app = app_with(&source);

    app.start();
    app.next_event().await;

    app.refresh();
    assert!(app.screen.refreshing);
    assert!(!app.screen.loading);
    app.next_event().await;

    assert!(!app.screen.refreshing);
    let ids: Vec<i64> = app.screen.products().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![2, 3]);
    assert_eq!(source.call_count(), 2);
}

#[tokio::test]
async fn test_refresh_failure_keeps_last_good_catalog() {
    let source = MockCatalogSource::new();
    source.push_products(vec![lipstick()]).push_failure("502");
    let mut app = app_with(&source);

    app.start();
    app.next_event().await;
    app.refresh();
    app.next_event().await;

    assert!(!app.screen.refreshing);
    assert_eq!(app.screen.products(), &[lipstick()]);
}

#[tokio::test]
async fn test_overlapping_loads_last_settled_wins() {
    let source = MockCatalogSource::new();
    source
        .push_products_after(vec![Product::new(1, "Slow")], Duration::from_millis(150))
        .push_products(vec![Product::new(2, "Fast")]);
    let mut app = app_with(&source);

    app.start();
    app.refresh();
    assert_eq!(app.screen.pending_loads(), 2);

    // The fast refresh settles first and clears both flags.
    app.next_event().await;
    assert!(!app.screen.refreshing);
    assert!(!app.screen.loading);
    assert_eq!(app.screen.products()[0].name, "Fast");

    // The slow initial load lands afterwards and overwrites it.
    app.next_event().await;
    assert_eq!(app.screen.products()[0].name, "Slow");
    assert_eq!(app.screen.pending_loads(), 0);
}

#[tokio::test]
async fn test_query_changes_while_load_pending() {
    let source = MockCatalogSource::new();
    source.push_products_after(vec![lipstick()], Duration::from_millis(20));
    let mut app = app_with(&source);

    app.start();
    app.screen.set_query("red");
    assert_eq!(app.screen.query(), "red");

    app.next_event().await;
    assert_eq!(app.screen.filtered().len(), 1);
}

#[tokio::test]
async fn test_pump_events_with_nothing_pending() {
    let source = MockCatalogSource::new();
    let mut app = app_with(&source);
    assert_eq!(app.pump_events(), 0);
    assert!(app.screen.loading);
}

#[tokio::test]
async fn test_wait_for_event_applies_settled_load() {
    let source = MockCatalogSource::new();
    source.push_products(vec![lipstick()]);
    let mut app = app_with(&source);

    app.start();
    assert!(app.wait_for_event(Duration::from_secs(5)).await);
    assert!(!app.screen.loading);
    assert_eq!(app.screen.tick, 0);
}

#[tokio::test]
async fn test_wait_for_event_ticks_when_idle() {
    let mut app = app_with(&MockCatalogSource::new());

    assert!(!app.wait_for_event(Duration::from_millis(10)).await);
    assert!(!app.wait_for_event(Duration::from_millis(10)).await);
    assert_eq!(app.screen.tick, 2);
    assert!(app.screen.loading);
}
