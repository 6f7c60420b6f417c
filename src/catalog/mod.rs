// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Product catalog
//!
//! The product model, the derived filtered view, and the sources that
//! fetch the catalog from the remote API.

pub mod client;
pub mod filter;
pub mod mock_source;
pub mod product;
pub mod source;

pub use client::{parse_catalog, HttpCatalogClient};
pub use filter::filter_products;
pub use mock_source::MockCatalogSource;
pub use product::{Product, PRICE_FALLBACK};
pub use source::CatalogSource;
