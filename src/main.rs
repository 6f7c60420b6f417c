// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Blush - browse the makeup catalog from your terminal
//!
//! Entry point for the Blush CLI application.

use std::fs::OpenOptions;
use std::sync::{Arc, Mutex};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use blush::catalog::HttpCatalogClient;
use blush::cli::{BrowseArgs, Cli, Commands};
use blush::commands::{run_list, run_settings};
use blush::config::Settings;
use blush::error::Result;
use blush::tui::run_catalog_tui;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let interactive = matches!(cli.command, None | Some(Commands::Browse(_)));

    init_tracing(cli.verbose, interactive)?;

    // Load settings
    let settings_path = cli.config.clone().unwrap_or_else(Settings::default_path);
    let settings = Settings::load_from(&settings_path)?.with_base_url_override(cli.base_url);

    match cli.command {
        None => run_browse(BrowseArgs::default(), &settings).await?,
        Some(Commands::Browse(args)) => run_browse(args, &settings).await?,
        Some(Commands::List(args)) => {
            settings.validate()?;
            let client = HttpCatalogClient::from_settings(&settings)?;
            run_list(&args, &client, &mut std::io::stdout().lock()).await?;
        }
        Some(Commands::Settings(args)) => {
            run_settings(
                args.command,
                &settings,
                &settings_path,
                &mut std::io::stdout().lock(),
            )?;
        }
    }

    Ok(())
}

async fn run_browse(args: BrowseArgs, settings: &Settings) -> Result<()> {
    settings.validate()?;
    let client = HttpCatalogClient::from_settings(settings)?;
    tracing::info!(target: "blush.tui", endpoint = %settings.products_url(), "starting catalog browser");
    run_catalog_tui(Arc::new(client), args.query, settings.tick_rate()).await
}

/// Initialize tracing.
///
/// The interactive screen owns the terminal, so its diagnostics go to the
/// log file under the blush home directory; everything else logs to stderr.
fn init_tracing(verbose: u8, interactive: bool) -> Result<()> {
    let mut env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into());

    if verbose > 0 {
        let level = if verbose > 1 { "trace" } else { "debug" };
        if let Ok(parsed) = format!("blush={}", level).parse() {
            env_filter = env_filter.add_directive(parsed);
        }
    }

    if interactive {
        Settings::ensure_directories()?;
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(Settings::log_path())?;
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .init();
    }

    Ok(())
}
