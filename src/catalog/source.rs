// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Catalog source trait
//!
//! The seam between the screen and whatever produces the catalog.

use async_trait::async_trait;

use super::Product;
use crate::error::Result;

/// Something that can fetch the full product catalog
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch the complete catalog, in server order.
    async fn fetch_products(&self) -> Result<Vec<Product>>;

    /// Human-readable description of where products come from (for logs).
    fn endpoint(&self) -> &str;
}
