// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! CLI argument definitions using Clap
//!
//! Defines all command-line arguments and subcommands for Blush.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Blush - browse the makeup catalog from your terminal
#[derive(Parser, Debug)]
#[command(name = "blush")]
#[command(version, about = "Browse the makeup catalog from your terminal")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Settings file path (defaults to ~/.blush/settings.json)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Catalog API base URL, overriding settings and environment
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the interactive catalog browser (default when no command given)
    Browse(BrowseArgs),

    /// Fetch the catalog once and print it
    #[command(alias = "ls")]
    List(ListArgs),

    /// Inspect configuration
    #[command(alias = "config")]
    Settings(SettingsArgs),
}

/// Arguments for the browse subcommand
#[derive(clap::Args, Debug, Default)]
pub struct BrowseArgs {
    /// Start with this search query
    #[arg(short, long)]
    pub query: Option<String>,
}

/// Arguments for the list subcommand
#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Only show products whose name contains this text (case-insensitive)
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Print at most this many products
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,
}

/// Output format for non-interactive listing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One product per line
    #[default]
    Text,
    /// Pretty-printed JSON array
    Json,
}

/// Arguments for the settings subcommand
#[derive(clap::Args, Debug)]
pub struct SettingsArgs {
    #[command(subcommand)]
    pub command: SettingsCommands,
}

/// Settings subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum SettingsCommands {
    /// Print the effective settings as JSON
    Show,
    /// Print the settings file path
    Path,
    /// Write one setting to the settings file
    Set {
        /// Dotted key, e.g. api.base_url
        key: String,
        /// New value (empty clears api.timeout_secs)
        value: String,
    },
}
