// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! UI rendering for the TUI
//!
//! Handles layout and rendering of the catalog screen using ratatui.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use reqwest::Url;

use super::state::CatalogScreen;
use crate::catalog::Product;

const HEADER_COLOR: Color = Color::Rgb(0x77, 0x3f, 0x7a);
const BRAND_COLOR: Color = Color::Rgb(0x8f, 0x2a, 0x8f);
const PRICE_COLOR: Color = Color::Rgb(0x4c, 0xaf, 0x50);
const ACCENT_COLOR: Color = Color::Rgb(0x93, 0x20, 0x97);

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub const LOADING_MESSAGE: &str = "Loading products...";
pub const EMPTY_MESSAGE: &str = "No results.";
pub const SEARCH_PLACEHOLDER: &str = "Search products...";

/// Main draw function
pub fn draw(frame: &mut Frame, screen: &CatalogScreen) {
    let area = frame.area();
    if screen.loading {
        draw_loading(frame, area, screen);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Length(3), // Search
            Constraint::Min(0),    // Products
            Constraint::Length(2), // Status/Help
        ])
        .split(area);

    draw_header(frame, chunks[0]);
    draw_search(frame, chunks[1], screen);
    draw_products(frame, chunks[2], screen);
    draw_status(frame, chunks[3], screen);
}

/// Spinner and message shown until the first load settles
fn draw_loading(frame: &mut Frame, area: Rect, screen: &CatalogScreen) {
    let spinner = SPINNER_FRAMES[screen.tick % SPINNER_FRAMES.len()];
    let text = vec![
        Line::from(Span::styled(
            spinner,
            Style::default()
                .fg(ACCENT_COLOR)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            LOADING_MESSAGE,
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let inner = centered_rect(60, 20, area);
    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), inner);
}

fn draw_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new("💄 Makeup Catalog")
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(HEADER_COLOR)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(header, area);
}

fn draw_search(frame: &mut Frame, area: Rect, screen: &CatalogScreen) {
    let (text, style) = if screen.query().is_empty() {
        (
            SEARCH_PLACEHOLDER.to_string(),
            Style::default().fg(Color::DarkGray),
        )
    } else {
        (screen.query().to_string(), Style::default())
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT_COLOR))
        .title(" Search ");

    frame.render_widget(Paragraph::new(text).style(style).block(block), area);

    if let Some(position) = search_cursor(area, screen.query()) {
        frame.set_cursor_position(position);
    }
}

/// Cursor position after the typed text, if it still fits inside the box.
///
/// Measured in display columns, so wide characters count twice.
pub fn search_cursor(area: Rect, query: &str) -> Option<Position> {
    let typed = u16::try_from(Line::from(query).width()).unwrap_or(u16::MAX);
    let cursor_x = area.x.saturating_add(1).saturating_add(typed);
    let right_edge = area.x.saturating_add(area.width.saturating_sub(1));
    (cursor_x < right_edge).then(|| Position::new(cursor_x, area.y.saturating_add(1)))
}

fn draw_products(frame: &mut Frame, area: Rect, screen: &CatalogScreen) {
    let filtered = screen.filtered();

    let mut title = format!(" Products ({}) ", filtered.len());
    if screen.refreshing {
        title.push_str("⟳ refreshing ");
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(title);

    if filtered.is_empty() {
        let placeholder = List::new(vec![ListItem::new(Span::styled(
            EMPTY_MESSAGE,
            Style::default().fg(Color::DarkGray),
        ))])
        .block(block);
        frame.render_widget(placeholder, area);
        return;
    }

    let items: Vec<ListItem> = filtered
        .iter()
        .map(|product| ListItem::new(product_lines(product)))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_symbol("▶ ")
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = ListState::default().with_selected(Some(screen.selected()));
    frame.render_stateful_widget(list, area, &mut state);
}

/// The lines of one product row
pub fn product_lines(product: &Product) -> Vec<Line<'static>> {
    vec![
        Line::from(vec![
            Span::styled(
                format!("[{}] ", image_badge(product)),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(
                product.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            product.brand.clone(),
            Style::default().fg(BRAND_COLOR),
        )),
        Line::from(Span::styled(
            product.product_type.clone(),
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            price_label(product),
            Style::default()
                .fg(PRICE_COLOR)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
    ]
}

/// Price line text, using the fallback when no price is set
pub fn price_label(product: &Product) -> String {
    format!("$ {}", product.display_price())
}

/// Short description of the product image.
///
/// Images are never fetched; the link is only inspected, so empty or
/// broken links simply read as "no image".
pub fn image_badge(product: &Product) -> String {
    let link = product.image_link.trim();
    if link.is_empty() {
        return "no image".to_string();
    }

    // The API sometimes hands out scheme-relative links
    let absolute = if link.starts_with("//") {
        format!("https:{}", link)
    } else {
        link.to_string()
    };

    Url::parse(&absolute)
        .ok()
        .and_then(|url| url.host_str().map(|host| format!("img {}", host)))
        .unwrap_or_else(|| "no image".to_string())
}

/// Status bar text: the highlighted product, key help, last update time
pub fn status_text(screen: &CatalogScreen) -> String {
    let mut text = String::new();
    if let Some(product) = screen.selected_product() {
        text.push_str(&format!(" {}", product.name));
        if !product.brand.is_empty() {
            text.push_str(&format!(" · {}", product.brand));
        }
        text.push_str(" |");
    }
    text.push_str(" type: Search | ↑↓: Scroll | F5/Ctrl+R: Refresh | Esc: Clear/Quit");
    if let Some(at) = screen.last_loaded_at() {
        text.push_str(&format!(" | updated {}", at.format("%H:%M:%S")));
    }
    text
}

fn draw_status(frame: &mut Frame, area: Rect, screen: &CatalogScreen) {
    let text = status_text(screen);

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(Color::DarkGray));

    let status = Paragraph::new(text)
        .style(Style::default().fg(Color::DarkGray))
        .block(block);

    frame.render_widget(status, area);
}

/// Helper function to create a centered rect
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
