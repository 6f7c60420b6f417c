// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Settings management for Blush
//!
//! Handles loading and saving settings from ~/.blush/settings.json

use serde::{Deserialize, Serialize};

mod io;
mod migration;
mod validation;

pub use validation::SETTABLE_KEYS;

/// Public makeup API root.
pub const DEFAULT_API_BASE_URL: &str = "https://makeup-api.herokuapp.com/api/v1";

/// Catalog resource below the API root.
pub const DEFAULT_PRODUCTS_PATH: &str = "/products.json";

/// Environment variable overriding `api.base_url`.
pub const BASE_URL_ENV: &str = "BLUSH_API_BASE_URL";

/// Main settings structure, stored in ~/.blush/settings.json
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Catalog endpoint configuration
    #[serde(default)]
    pub api: ApiConfig,

    /// Terminal UI settings
    #[serde(default)]
    pub ui: UiConfig,

    /// Set when `--base-url` was given, so the env var is ignored
    #[serde(skip)]
    base_url_pinned: bool,
}

/// Catalog endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the API, without the products path
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Path of the products resource, appended to `base_url`
    #[serde(default = "default_products_path")]
    pub products_path: String,

    /// Request timeout in seconds (None = rely on the transport)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            products_path: default_products_path(),
            timeout_secs: None,
        }
    }
}

/// Terminal UI settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Idle redraw interval and spinner tick, in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_products_path() -> String {
    DEFAULT_PRODUCTS_PATH.to_string()
}

fn default_tick_rate_ms() -> u64 {
    100
}
