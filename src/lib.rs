// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Blush - a terminal browser for the open makeup product catalog.
//!
//! This crate exposes the runtime used by the `blush` CLI (`src/main.rs`):
//! - `catalog`: product model, filtering, and catalog sources (HTTP and mock)
//! - `tui`: the single catalog screen, its load lifecycle and rendering
//! - `commands`: non-interactive listing and settings inspection
//! - `config`, `cli`, `error`: settings, argument parsing, error types

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod tui;

pub use error::{BlushError, Result};
