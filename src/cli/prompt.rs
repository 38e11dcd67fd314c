//! Line-oriented prompts that re-ask until the input is valid

use super::ui;
use crate::core::cache::SupportedCurrencies;
use crate::core::validate::{display_code, validate_amount, validate_currency_code};
use anyhow::Result;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines, Stdin};

/// Reads answers from any async line source. Returns `Ok(None)` from every
/// method once input is exhausted.
pub struct Prompt<R> {
    lines: Lines<R>,
}

impl Prompt<BufReader<Stdin>> {
    pub fn stdin() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()))
    }
}

impl<R: AsyncBufRead + Unpin> Prompt<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
        }
    }

    /// Prints `question` and reads one trimmed line.
    pub async fn ask(&mut self, question: &str) -> Result<Option<String>> {
        print!("{question}");
        std::io::stdout().flush()?;
        let line = self.lines.next_line().await?;
        Ok(line.map(|l| l.trim().to_string()))
    }

    /// Asks until the answer is a currency code `cache` accepts. The result is uppercase.
    pub async fn currency(
        &mut self,
        question: &str,
        cache: &SupportedCurrencies,
    ) -> Result<Option<String>> {
        loop {
            let Some(answer) = self.ask(question).await? else {
                return Ok(None);
            };
            if !validate_currency_code(&answer) {
                ui::print_error("Please enter a valid 3-letter currency code (e.g. USD, EUR).");
                continue;
            }
            if !cache.accepts(&answer) {
                ui::print_error(&format!(
                    "'{}' is not a supported currency. Choose option 3 to list them.",
                    display_code(&answer)
                ));
                continue;
            }
            return Ok(Some(display_code(&answer)));
        }
    }

    pub async fn amount(&mut self, question: &str) -> Result<Option<f64>> {
        loop {
            let Some(answer) = self.ask(question).await? else {
                return Ok(None);
            };
            match validate_amount(&answer) {
                Some(amount) => return Ok(Some(amount)),
                None => ui::print_error("Please enter a positive number (e.g. 100 or 12.50)."),
            }
        }
    }

    /// Yes/no question. `Ok(None)` only when input ends.
    pub async fn confirm(&mut self, question: &str) -> Result<Option<bool>> {
        loop {
            let Some(answer) = self.ask(question).await? else {
                return Ok(None);
            };
            match answer.to_ascii_lowercase().as_str() {
                "y" | "yes" => return Ok(Some(true)),
                "n" | "no" => return Ok(Some(false)),
                _ => ui::print_error("Please answer 'y' or 'n'."),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn prompt(input: &'static str) -> Prompt<&'static [u8]> {
        Prompt::new(input.as_bytes())
    }

    #[tokio::test]
    async fn test_currency_retries_until_valid() {
        let mut p = prompt("us\n12$\n eur \n");
        let cache = SupportedCurrencies::new();
        let code = p.currency("From: ", &cache).await.unwrap();
        assert_eq!(code.as_deref(), Some("EUR"));
    }

    #[tokio::test]
    async fn test_currency_rejects_unknown_when_cache_populated() {
        let mut cache = SupportedCurrencies::new();
        cache.populate(HashMap::from([("usd".to_string(), "US Dollar".to_string())]));

        let mut p = prompt("xyz\nusd\n");
        let code = p.currency("From: ", &cache).await.unwrap();
        assert_eq!(code.as_deref(), Some("USD"));
    }

    #[tokio::test]
    async fn test_amount_retries_until_positive() {
        let mut p = prompt("abc\n-5\n0\n12.5\n");
        assert_eq!(p.amount("Amount: ").await.unwrap(), Some(12.5));
    }

    #[tokio::test]
    async fn test_confirm_and_end_of_input() {
        let mut p = prompt("maybe\nY\nno\n");
        assert_eq!(p.confirm("? ").await.unwrap(), Some(true));
        assert_eq!(p.confirm("? ").await.unwrap(), Some(false));
        assert_eq!(p.confirm("? ").await.unwrap(), None);
        assert_eq!(p.amount("Amount: ").await.unwrap(), None);
    }
}
