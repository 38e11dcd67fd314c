//! Exchange rate abstractions

use crate::core::error::ExchangeError;
use async_trait::async_trait;
use std::collections::HashMap;

/// Rates from one base currency to every target the API knows about.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RateTable {
    pub base: String,
    pub date: Option<String>,
    pub rates: HashMap<String, f64>,
}

impl RateTable {
    pub fn rate(&self, to: &str) -> Option<f64> {
        self.rates.get(to).copied()
    }
}

#[async_trait]
pub trait ExchangeRateProvider: Send + Sync {
    /// All supported currencies as lowercase code to display name.
    async fn fetch_currencies(&self) -> Result<HashMap<String, String>, ExchangeError>;

    /// Rate table for `base`, which is passed in lowercase.
    async fn fetch_rate_table(&self, base: &str) -> Result<RateTable, ExchangeError>;
}
