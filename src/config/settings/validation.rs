// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use std::time::Duration;

use reqwest::Url;

use crate::error::{BlushError, Result};

use super::{Settings, BASE_URL_ENV};

impl Settings {
    /// Get the API base URL, checking the env var first.
    pub fn effective_base_url(&self) -> String {
        self.base_url_with_env(std::env::var(BASE_URL_ENV).ok())
    }

    /// Resolve the base URL given an optional env override.
    /// Priority: env var > config file.
    pub fn base_url_with_env(&self, env_value: Option<String>) -> String {
        env_value
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| self.api.base_url.clone())
    }

    /// Apply a command-line override, which beats both env and file.
    pub fn with_base_url_override(mut self, base_url: Option<String>) -> Self {
        if let Some(url) = base_url {
            self.api.base_url = url;
            // Pin the value so the env var no longer applies.
            self.base_url_pinned = true;
        }
        self
    }

    /// Full URL of the products resource.
    pub fn products_url(&self) -> String {
        let base = if self.base_url_pinned {
            self.api.base_url.clone()
        } else {
            self.effective_base_url()
        };
        join_url(&base, &self.api.products_path)
    }

    /// Request timeout, if one is configured.
    pub fn request_timeout(&self) -> Option<Duration> {
        self.api.timeout_secs.map(Duration::from_secs)
    }

    /// Tick interval for the UI loop.
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.ui.tick_rate_ms)
    }

    /// Check that the settings describe a usable configuration.
    pub fn validate(&self) -> Result<()> {
        let url = self.products_url();
        let parsed = Url::parse(&url)
            .map_err(|e| BlushError::Config(format!("invalid catalog URL '{}': {}", url, e)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(BlushError::Config(format!(
                "catalog URL must use http or https, got '{}'",
                parsed.scheme()
            )));
        }
        if self.ui.tick_rate_ms == 0 {
            return Err(BlushError::Config(
                "ui.tick_rate_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Keys accepted by [`Settings::set_value`].
pub const SETTABLE_KEYS: &[&str] = &[
    "api.base_url",
    "api.products_path",
    "api.timeout_secs",
    "ui.tick_rate_ms",
];

impl Settings {
    /// Set one setting from its dotted key and textual value.
    ///
    /// An empty value for `api.timeout_secs` clears the timeout.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "api.base_url" => self.api.base_url = value.trim().to_string(),
            "api.products_path" => self.api.products_path = value.trim().to_string(),
            "api.timeout_secs" => {
                self.api.timeout_secs = if value.trim().is_empty() {
                    None
                } else {
                    Some(parse_number(key, value)?)
                };
            }
            "ui.tick_rate_ms" => self.ui.tick_rate_ms = parse_number(key, value)?,
            _ => {
                return Err(BlushError::InvalidInput(format!(
                    "unknown setting '{}' (expected one of: {})",
                    key,
                    SETTABLE_KEYS.join(", ")
                )))
            }
        }
        Ok(())
    }
}

fn parse_number(key: &str, value: &str) -> Result<u64> {
    value.trim().parse().map_err(|_| {
        BlushError::InvalidInput(format!("{} expects a whole number, got '{}'", key, value))
    })
}

fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.is_empty() {
        return base.to_string();
    }
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}
