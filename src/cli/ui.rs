use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Defines different styles for text elements.
pub enum StyleType {
    Title,
    Label,
    Value,
    Error,
    Warning,
    Subtle,
}

/// Applies a consistent style to a string.
pub fn style_text(text: &str, style_type: StyleType) -> String {
    let styled = match style_type {
        StyleType::Title => style(text).bold().underlined(),
        StyleType::Label => style(text).bold(),
        StyleType::Value => style(text).green().bold(),
        StyleType::Error => style(text).red(),
        StyleType::Warning => style(text).yellow(),
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

/// Shows a spinner for a fixed `duration`.
///
/// Purely decorative: it does not track any request. A zero duration skips it.
pub async fn show_loading(message: &str, duration: Duration) {
    if duration.is_zero() {
        return;
    }

    let spinner = ProgressBar::new_spinner();
    if let Ok(spinner_style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}")
    {
        spinner.set_style(spinner_style);
    }
    spinner.set_message(format!("{message}..."));
    spinner.enable_steady_tick(Duration::from_millis(100));
    tokio::time::sleep(duration).await;
    spinner.finish_and_clear();
}

/// Prints a separator line matching the terminal width.
pub fn print_separator() {
    let term_width = console::Term::stdout()
        .size_checked()
        .map(|(_, w)| w as usize)
        .unwrap_or(80);
    println!("\n{}", "─".repeat(term_width.min(60)));
}

pub fn print_error(message: &str) {
    println!("{}", style_text(message, StyleType::Error));
}

pub fn print_welcome() {
    print_separator();
    println!(
        "{}",
        style_text("Welcome to the Currency Exchange tool", StyleType::Title)
    );
    println!(
        "{}",
        style_text(
            "Live rates from the open currency API. Enter 3-letter codes such as USD or EUR.",
            StyleType::Subtle
        )
    );
    print_separator();
}

pub fn print_goodbye() {
    println!(
        "\n{}",
        style_text(
            "Thank you for using the Currency Exchange tool. Goodbye!",
            StyleType::Label
        )
    );
}

pub fn print_menu() {
    println!("\n{}", style_text("Main menu", StyleType::Title));
    println!("  1. View exchange rate");
    println!("  2. Convert currency");
    println!("  3. List supported currencies");
    println!("  4. Exit");
}

/// Formats a rate for display, with more precision than amounts.
pub fn format_rate(rate: f64) -> String {
    format!("{rate:.4}")
}

pub fn format_amount(amount: f64) -> String {
    format!("{amount:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_formatting() {
        assert_eq!(format_amount(92.0), "92.00");
        assert_eq!(format_amount(1.005_1), "1.01");
        assert_eq!(format_rate(0.92), "0.9200");
    }

    #[tokio::test]
    async fn test_zero_duration_loading_returns_immediately() {
        let start = std::time::Instant::now();
        show_loading("Fetching", Duration::ZERO).await;
        assert!(start.elapsed() < Duration::from_millis(100));
    }
}
