// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Error types for Blush
//!
//! This module defines all error types used throughout the application.

use thiserror::Error;

/// Main error type for Blush operations
#[derive(Error, Debug)]
pub enum BlushError {
    /// Catalog API errors
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// HTTP request errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Terminal rendering errors
    #[error("TUI error: {0}")]
    Tui(String),
}

/// Catalog API error types
#[derive(Error, Debug)]
pub enum ApiError {
    /// Network connectivity error
    #[error("Network error: {0}")]
    Network(String),

    /// Timeout waiting for response
    #[error("Request timed out")]
    Timeout,

    /// API answered with a non-success status
    #[error("API error ({status}): {message}")]
    ServerError { status: u16, message: String },

    /// Response body is not a catalog
    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

/// Result type alias for Blush operations
pub type Result<T> = std::result::Result<T, BlushError>;
