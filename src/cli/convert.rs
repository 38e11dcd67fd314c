use super::interactive::Step;
use super::prompt::Prompt;
use super::session::Session;
use super::ui;
use crate::core::ValidationError;
use crate::core::validate::{display_code, validate_amount, validate_currency_code};
use anyhow::{Result, anyhow};
use tokio::io::AsyncBufRead;

pub fn render_conversion(amount: f64, from: &str, converted: f64, to: &str) -> String {
    format!(
        "{} {} = {} {}",
        ui::format_amount(amount),
        display_code(from),
        ui::style_text(&ui::format_amount(converted), ui::StyleType::Value),
        ui::style_text(&display_code(to), ui::StyleType::Label),
    )
}

fn conversion_unavailable(from: &str, to: &str) -> String {
    format!(
        "Could not convert {} to {}: no exchange rate available.",
        display_code(from),
        display_code(to)
    )
}

pub async fn run(session: &Session<'_>, amount: &str, from: &str, to: &str) -> Result<()> {
    let value =
        validate_amount(amount).ok_or_else(|| ValidationError::Amount(amount.to_string()))?;
    for code in [from, to] {
        if !validate_currency_code(code) {
            return Err(ValidationError::CurrencyCode(code.to_string()).into());
        }
    }

    match session.convert(value, from, to).await? {
        Some(converted) => {
            println!("{}", render_conversion(value, from, converted, to));
            Ok(())
        }
        None => Err(anyhow!(conversion_unavailable(from, to))),
    }
}

pub(crate) async fn interactive<R: AsyncBufRead + Unpin>(
    session: &Session<'_>,
    prompt: &mut Prompt<R>,
) -> Result<Step> {
    let Some(from) = prompt
        .currency("Convert from (e.g. USD): ", session.currencies())
        .await?
    else {
        return Ok(Step::InputClosed);
    };
    let Some(to) = prompt
        .currency("Convert to (e.g. EUR): ", session.currencies())
        .await?
    else {
        return Ok(Step::InputClosed);
    };
    let Some(amount) = prompt.amount(&format!("Amount in {from}: ")).await? else {
        return Ok(Step::InputClosed);
    };

    match session.convert(amount, &from, &to).await {
        Ok(Some(converted)) => println!("\n{}", render_conversion(amount, &from, converted, &to)),
        Ok(None) => ui::print_error(&conversion_unavailable(&from, &to)),
        Err(e) => ui::print_error(&e.to_string()),
    }
    Ok(Step::Done)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_conversion_two_decimals() {
        let text =
            console::strip_ansi_codes(&render_conversion(100.0, "usd", 92.0, "eur")).to_string();
        assert_eq!(text, "100.00 USD = 92.00 EUR");
    }
}
