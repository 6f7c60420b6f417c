// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Derived filtered view of the catalog

use super::Product;

/// Products whose name contains `query`, ignoring case, in catalog order.
///
/// An empty query returns the whole catalog without scanning names.
/// Only `name` is searched; brand, type and price are not.
pub fn filter_products<'a>(products: &'a [Product], query: &str) -> Vec<&'a Product> {
    if query.is_empty() {
        return products.iter().collect();
    }

    let needle = query.to_lowercase();
    products
        .iter()
        .filter(|product| product.name_contains(&needle))
        .collect()
}
