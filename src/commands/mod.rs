// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Non-interactive commands
//!
//! `list` fetches the catalog once and prints the filtered view; unlike
//! the interactive screen it reports a failed fetch to the caller.

use std::io::Write;

use crate::catalog::{filter_products, CatalogSource, Product};
use crate::cli::{ListArgs, OutputFormat, SettingsCommands};
use crate::config::Settings;
use crate::error::Result;

/// Fetch, filter and print the catalog
pub async fn run_list(
    args: &ListArgs,
    source: &dyn CatalogSource,
    out: &mut dyn Write,
) -> Result<()> {
    let products = source.fetch_products().await?;

    let mut view = filter_products(&products, &args.query);
    if let Some(limit) = args.limit {
        view.truncate(limit);
    }

    tracing::debug!(
        target: "blush.commands",
        total = products.len(),
        shown = view.len(),
        "listing catalog"
    );

    let rendered = render_listing(&view, args.format)?;
    out.write_all(rendered.as_bytes())?;
    Ok(())
}

/// Render a filtered view in the requested format
pub fn render_listing(view: &[&Product], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(view)?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Text => {
            if view.is_empty() {
                return Ok("No results.\n".to_string());
            }
            let mut text = String::new();
            for product in view {
                text.push_str(&format_product_line(product));
                text.push('\n');
            }
            Ok(text)
        }
    }
}

fn format_product_line(product: &Product) -> String {
    format!(
        "{:>6}  {:<40}  {:<20}  {:<14}  $ {}",
        product.id,
        product.name,
        product.brand,
        product.product_type,
        product.display_price()
    )
}

/// Handle `settings show` / `settings path` / `settings set`
pub fn run_settings(
    command: SettingsCommands,
    settings: &Settings,
    path: &std::path::Path,
    out: &mut dyn Write,
) -> Result<()> {
    match command {
        SettingsCommands::Show => {
            let mut value = serde_json::to_value(settings)?;
            value["effective_products_url"] = serde_json::Value::String(settings.products_url());
            writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
        }
        SettingsCommands::Path => {
            writeln!(out, "{}", path.display())?;
        }
        SettingsCommands::Set { key, value } => {
            // Edit what is on disk, not the env/flag-resolved view.
            let mut stored = Settings::load_from(path)?;
            stored.set_value(&key, &value)?;
            let pinned_base = Some(stored.api.base_url.clone());
            stored.clone().with_base_url_override(pinned_base).validate()?;
            stored.save_to(path)?;

            tracing::info!(target: "blush.commands", %key, path = %path.display(), "setting saved");
            writeln!(out, "{} = {} ({})", key, value, path.display())?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MockCatalogSource;
    use tempfile::TempDir;

    fn args(query: &str, format: OutputFormat, limit: Option<usize>) -> ListArgs {
        ListArgs {
            query: query.to_string(),
            format,
            limit,
        }
    }

    fn source() -> MockCatalogSource {
        let source = MockCatalogSource::new();
        source.push_products(vec![
            Product::new(1, "Red Lipstick").with_price("9.99"),
            Product::new(2, "Blue Eyeliner"),
            Product::new(3, "Redwood Bronzer").with_price("14"),
        ]);
        source
    }

    #[tokio::test]
    async fn test_run_list_text_filters() {
        let mut out = Vec::new();
        run_list(&args("red", OutputFormat::Text, None), &source(), &mut out)
            .await
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 2);
        assert!(text.contains("Red Lipstick"));
        assert!(text.contains("$ 9.99"));
        assert!(!text.contains("Blue Eyeliner"));
    }

    #[tokio::test]
    async fn test_run_list_json_with_limit() {
        let mut out = Vec::new();
        run_list(&args("", OutputFormat::Json, Some(2)), &source(), &mut out)
            .await
            .unwrap();

        let parsed: Vec<Product> = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[1].name, "Blue Eyeliner");
    }

    #[tokio::test]
    async fn test_run_list_reports_failure() {
        let source = MockCatalogSource::new();
        source.push_failure("dns failure");
        let mut out = Vec::new();

        let err = run_list(&args("", OutputFormat::Text, None), &source, &mut out)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("dns failure"));
        assert!(out.is_empty());
    }

    #[test]
    fn test_render_listing_empty_text() {
        assert_eq!(
            render_listing(&[], OutputFormat::Text).unwrap(),
            "No results.\n"
        );
    }

    #[test]
    fn test_text_line_uses_price_fallback() {
        let product = Product::new(5, "Primer");
        assert!(format_product_line(&product).ends_with("$ 0.00"));
    }

    #[test]
    fn test_run_settings_path_and_show() {
        let settings =
            Settings::default().with_base_url_override(Some("http://localhost:7".to_string()));
        let path = std::path::Path::new("/tmp/blush/settings.json");

        let mut out = Vec::new();
        run_settings(SettingsCommands::Path, &settings, path, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap().trim(), "/tmp/blush/settings.json");

        let mut out = Vec::new();
        run_settings(SettingsCommands::Show, &settings, path, &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(
            value["effective_products_url"],
            "http://localhost:7/products.json"
        );
    }

    fn set(key: &str, value: &str) -> SettingsCommands {
        SettingsCommands::Set {
            key: key.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn test_run_settings_set_writes_file_and_keeps_unknown_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"api": {"note": "hand edit"}, "theme": "rose"}"#).unwrap();

        // The flag override must not leak into the saved file.
        let resolved =
            Settings::default().with_base_url_override(Some("http://flag.local".to_string()));
        let mut out = Vec::new();
        run_settings(set("api.timeout_secs", "12"), &resolved, &path, &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("api.timeout_secs = 12"));

        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["api"]["timeout_secs"], 12);
        assert_eq!(raw["api"]["note"], "hand edit");
        assert_eq!(raw["theme"], "rose");
        assert_eq!(raw["api"]["base_url"], crate::config::DEFAULT_API_BASE_URL);

        let loaded = Settings::load_from(&path).unwrap();
        assert_eq!(loaded.api.timeout_secs, Some(12));
    }

    #[test]
    fn test_run_settings_set_rejects_invalid_value_without_writing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        let settings = Settings::default();

        let mut out = Vec::new();
        let err = run_settings(set("api.base_url", "not a url"), &settings, &path, &mut out)
            .unwrap_err();
        assert!(err.to_string().contains("invalid catalog URL"));
        assert!(!path.exists());

        assert!(run_settings(set("ui.tick_rate_ms", "0"), &settings, &path, &mut out).is_err());
        assert!(!path.exists());
    }
}
