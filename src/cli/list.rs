use super::interactive::Step;
use super::session::Session;
use super::ui;
use crate::core::SupportedCurrencies;
use anyhow::Result;
use comfy_table::Cell;
use tracing::warn;

pub fn render_currency_table(currencies: &SupportedCurrencies) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![ui::header_cell("Code"), ui::header_cell("Name")]);

    for (code, name) in currencies.iter() {
        table.add_row(vec![Cell::new(code.to_ascii_uppercase()), Cell::new(name)]);
    }

    format!(
        "{}\n\n{}\n{}",
        ui::style_text("Supported currencies", ui::StyleType::Title),
        table,
        ui::style_text(
            &format!("{} currencies", currencies.len()),
            ui::StyleType::Subtle
        )
    )
}

/// Fetches the list if the session does not have it yet, then prints it.
pub async fn run(session: &mut Session<'_>) -> Result<()> {
    if session.currencies().is_empty() {
        session.load_currencies().await?;
    }
    println!("{}", render_currency_table(session.currencies()));
    Ok(())
}

pub(crate) async fn interactive(session: &mut Session<'_>) -> Result<Step> {
    if session.currencies().is_empty()
        && let Err(e) = session.load_currencies().await
    {
        warn!(error = %e, "Currency list still unavailable");
        ui::print_error(&e.to_string());
        return Ok(Step::Done);
    }
    println!("\n{}", render_currency_table(session.currencies()));
    Ok(Step::Done)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_currency_table_lists_codes_in_order() {
        let mut currencies = SupportedCurrencies::new();
        currencies.populate(HashMap::from([
            ("usd".to_string(), "US Dollar".to_string()),
            ("eur".to_string(), "Euro".to_string()),
        ]));

        let text = console::strip_ansi_codes(&render_currency_table(&currencies)).to_string();
        let eur = text.find("EUR").unwrap();
        let usd = text.find("USD").unwrap();
        assert!(eur < usd);
        assert!(text.contains("US Dollar"));
        assert!(text.contains("2 currencies"));
    }
}
