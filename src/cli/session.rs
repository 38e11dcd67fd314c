use super::ui;
use crate::core::validate::normalize_code;
use crate::core::{
    ExchangeError, ExchangeRateProvider, SupportedCurrencies, convert_currency,
    fetch_supported_currencies, get_exchange_rate,
};
use std::time::Duration;

/// State shared by every command during one run: the provider, the
/// supported-currency cache and the loading animation setting.
pub struct Session<'a> {
    provider: &'a dyn ExchangeRateProvider,
    currencies: SupportedCurrencies,
    loading: Duration,
}

impl<'a> Session<'a> {
    pub fn new(provider: &'a dyn ExchangeRateProvider, loading: Duration) -> Self {
        Self {
            provider,
            currencies: SupportedCurrencies::new(),
            loading,
        }
    }

    pub fn currencies(&self) -> &SupportedCurrencies {
        &self.currencies
    }

    pub async fn load_currencies(&mut self) -> Result<usize, ExchangeError> {
        ui::show_loading("Fetching supported currencies", self.loading).await;
        fetch_supported_currencies(self.provider, &mut self.currencies).await
    }

    pub async fn rate(&self, from: &str, to: &str) -> Result<Option<f64>, ExchangeError> {
        self.loading_for(from, to).await;
        get_exchange_rate(self.provider, from, to).await
    }

    pub async fn convert(
        &self,
        amount: f64,
        from: &str,
        to: &str,
    ) -> Result<Option<f64>, ExchangeError> {
        self.loading_for(from, to).await;
        convert_currency(self.provider, amount, from, to).await
    }

    // No request is made for a same-currency pair, so nothing to wait for.
    async fn loading_for(&self, from: &str, to: &str) {
        if normalize_code(from) != normalize_code(to) {
            ui::show_loading("Fetching exchange rate", self.loading).await;
        }
    }
}
