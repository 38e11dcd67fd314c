use super::interactive::Step;
use super::prompt::Prompt;
use super::session::Session;
use super::ui;
use crate::core::ValidationError;
use crate::core::validate::{display_code, validate_currency_code};
use anyhow::{Result, anyhow};
use tokio::io::AsyncBufRead;

pub fn render_rate(from: &str, to: &str, rate: f64) -> String {
    format!(
        "1 {} = {} {}",
        ui::style_text(&display_code(from), ui::StyleType::Label),
        ui::style_text(&ui::format_rate(rate), ui::StyleType::Value),
        ui::style_text(&display_code(to), ui::StyleType::Label),
    )
}

fn rate_unavailable(from: &str, to: &str) -> String {
    format!(
        "Exchange rate from {} to {} is not available.",
        display_code(from),
        display_code(to)
    )
}

/// Prints the rate for one pair, or an error when it cannot be fetched.
pub async fn run(session: &Session<'_>, from: &str, to: &str) -> Result<()> {
    for code in [from, to] {
        if !validate_currency_code(code) {
            return Err(ValidationError::CurrencyCode(code.to_string()).into());
        }
    }

    match session.rate(from, to).await? {
        Some(rate) => {
            println!("{}", render_rate(from, to, rate));
            Ok(())
        }
        None => Err(anyhow!(rate_unavailable(from, to))),
    }
}

pub(crate) async fn interactive<R: AsyncBufRead + Unpin>(
    session: &Session<'_>,
    prompt: &mut Prompt<R>,
) -> Result<Step> {
    let Some(from) = prompt
        .currency("Enter the base currency code (e.g. USD): ", session.currencies())
        .await?
    else {
        return Ok(Step::InputClosed);
    };
    let Some(to) = prompt
        .currency("Enter the target currency code (e.g. EUR): ", session.currencies())
        .await?
    else {
        return Ok(Step::InputClosed);
    };

    match session.rate(&from, &to).await {
        Ok(Some(rate)) => println!("\n{}", render_rate(&from, &to, rate)),
        Ok(None) => ui::print_error(&rate_unavailable(&from, &to)),
        Err(e) => ui::print_error(&e.to_string()),
    }
    Ok(Step::Done)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_rate_contains_codes() {
        let text = console::strip_ansi_codes(&render_rate("usd", "eur", 0.92)).to_string();
        assert_eq!(text, "1 USD = 0.9200 EUR");
    }
}
