// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! HTTP catalog client
//!
//! Fetches `products.json` with a single unauthenticated GET and checks
//! that the body really is an array of products before handing it out.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use super::{CatalogSource, Product};
use crate::config::Settings;
use crate::error::{ApiError, BlushError, Result};

/// Catalog source backed by the makeup REST API
pub struct HttpCatalogClient {
    client: Client,
    url: String,
}

impl HttpCatalogClient {
    /// Create a client for a fully-qualified products URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }

    /// Create a client from settings, honouring the configured timeout.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = settings.request_timeout() {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            url: settings.products_url(),
        })
    }

    fn map_send_error(e: reqwest::Error) -> BlushError {
        if e.is_timeout() {
            BlushError::Api(ApiError::Timeout)
        } else if e.is_connect() {
            BlushError::Api(ApiError::Network(format!(
                "could not reach catalog at {}: {}",
                e.url().map(|u| u.as_str()).unwrap_or("<unknown>"),
                e
            )))
        } else {
            BlushError::Http(e)
        }
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogClient {
    async fn fetch_products(&self) -> Result<Vec<Product>> {
        tracing::debug!(target: "blush.catalog", url = %self.url, "fetching catalog");

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(Self::map_send_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(BlushError::Api(ApiError::ServerError {
                status: status.as_u16(),
                message: status
                    .canonical_reason()
                    .unwrap_or("catalog request failed")
                    .to_string(),
            }));
        }

        let body = response.text().await.map_err(Self::map_send_error)?;
        let products = parse_catalog(&body)?;

        tracing::debug!(target: "blush.catalog", count = products.len(), "catalog fetched");
        Ok(products)
    }

    fn endpoint(&self) -> &str {
        &self.url
    }
}

/// Parse a response body into products.
///
/// The top-level value must be a JSON array and every element must decode
/// as a [`Product`]; anything else is an [`ApiError::InvalidResponse`].
pub fn parse_catalog(body: &str) -> Result<Vec<Product>> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| ApiError::InvalidResponse(format!("body is not JSON: {}", e)))?;

    if !value.is_array() {
        return Err(ApiError::InvalidResponse(format!(
            "expected an array of products, got {}",
            json_kind(&value)
        ))
        .into());
    }

    serde_json::from_value(value)
        .map_err(|e| ApiError::InvalidResponse(format!("malformed product: {}", e)).into())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
