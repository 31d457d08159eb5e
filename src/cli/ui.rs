use crate::core::SharpeCategory;
use crate::core::format::{MISSING_VALUE, format_pct, format_ratio};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Defines different styles for text elements.
pub enum StyleType {
    Title,
    Label,
    Success,
    Error,
    Subtle,
}

/// Applies a consistent style to a string.
pub fn style_text(text: &str, style_type: StyleType) -> String {
    let styled = match style_type {
        StyleType::Title => style(text).bold().underlined(),
        StyleType::Label => style(text).bold(),
        StyleType::Success => style(text).green().bold(),
        StyleType::Error => style(text).red(),
        StyleType::Subtle => style(text).dim(),
    };
    styled.to_string()
}

/// Creates a new `comfy_table::Table` with standard styling.
pub fn new_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Creates a styled header cell for a table.
pub fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

/// Percentage cell, green for gains and red for losses.
pub fn pct_cell(value: Option<f64>) -> Cell {
    let cell = Cell::new(format_pct(value, 2)).set_alignment(CellAlignment::Right);
    match value {
        Some(v) if v >= 0.0 => cell.fg(Color::Green),
        Some(_) => cell.fg(Color::Red),
        None => cell.fg(Color::DarkGrey),
    }
}

/// Percentage cell without gain/loss colouring; `None` is shown dimmed.
pub fn volatility_cell(value: Option<f64>) -> Cell {
    let cell = Cell::new(format_pct(value, 2)).set_alignment(CellAlignment::Right);
    if value.is_some() {
        cell
    } else {
        cell.fg(Color::DarkGrey)
    }
}

/// Sharpe ratio cell coloured by its quality bucket.
pub fn sharpe_cell(value: Option<f64>) -> Cell {
    let color = match SharpeCategory::from_ratio(value) {
        SharpeCategory::Excellent => Color::Green,
        SharpeCategory::Good => Color::Yellow,
        SharpeCategory::Poor => Color::Red,
        SharpeCategory::Unknown => Color::DarkGrey,
    };
    Cell::new(format_ratio(value, 2))
        .fg(color)
        .set_alignment(CellAlignment::Right)
}

pub fn recommendation_cell(value: Option<&str>) -> Cell {
    match value.filter(|v| !v.is_empty()) {
        Some(text) => {
            let color = match text.to_uppercase().as_str() {
                "STRONG BUY" | "BUY" => Color::Green,
                "HOLD" => Color::Yellow,
                "AVOID" | "SELL" => Color::Red,
                _ => Color::Reset,
            };
            Cell::new(text).fg(color).add_attribute(Attribute::Bold)
        }
        None => Cell::new(MISSING_VALUE).fg(Color::DarkGrey),
    }
}

/// Spinner shown while waiting on the service.
pub fn new_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg} [{elapsed_precise}]")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Prints a separator line matching the terminal width.
pub fn print_separator() {
    let term_width = console::Term::stdout()
        .size_checked()
        .map(|(_, w)| w as usize)
        .unwrap_or(80);
    println!("\n{}", "─".repeat(term_width));
}
