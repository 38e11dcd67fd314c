use crate::core::currency::{ExchangeRateProvider, RateTable};
use crate::core::error::ExchangeError;
use anyhow::Result;
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Client for the fawazahmed0 currency API and compatible mirrors.
pub struct CurrencyApiProvider {
    base_url: String,
    client: reqwest::Client,
}

impl CurrencyApiProvider {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("xrate/0.1")
            .timeout(timeout)
            .build()?;
        Ok(CurrencyApiProvider {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    async fn get_json(&self, url: &str) -> Result<Map<String, Value>, ExchangeError> {
        debug!("Requesting {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExchangeError::Request(format!(
                "HTTP error: {status} for {url}"
            )));
        }

        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}

#[async_trait]
impl ExchangeRateProvider for CurrencyApiProvider {
    #[instrument(name = "CurrencyListFetch", skip(self))]
    async fn fetch_currencies(&self) -> Result<HashMap<String, String>, ExchangeError> {
        let url = format!("{}/currencies.json", self.base_url);
        let data = self.get_json(&url).await?;

        let currencies = data
            .into_iter()
            .map(|(code, name)| {
                let name = match name {
                    Value::String(s) => s,
                    other => other.to_string(),
                };
                (code, name)
            })
            .collect::<HashMap<_, _>>();
        debug!(count = currencies.len(), "Received currency list");
        Ok(currencies)
    }

    #[instrument(name = "RateTableFetch", skip(self), fields(base = %base))]
    async fn fetch_rate_table(&self, base: &str) -> Result<RateTable, ExchangeError> {
        let url = format!("{}/currencies/{}.json", self.base_url, base);
        let mut data = self.get_json(&url).await?;

        let date = data
            .get("date")
            .and_then(Value::as_str)
            .map(str::to_string);

        let rates = match data.remove(base) {
            Some(Value::Object(table)) => table
                .into_iter()
                .filter_map(|(code, rate)| rate.as_f64().map(|r| (code, r)))
                .collect(),
            Some(other) => {
                return Err(ExchangeError::Decode(format!(
                    "expected an object of rates for '{base}', got {other}"
                )));
            }
            None => {
                warn!("Response has no rate table for '{}'", base);
                HashMap::new()
            }
        };

        Ok(RateTable {
            base: base.to_string(),
            date,
            rates,
        })
    }
}
