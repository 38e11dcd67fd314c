//! Exchange operations and amount conversion

use crate::core::cache::SupportedCurrencies;
use crate::core::currency::ExchangeRateProvider;
use crate::core::error::ExchangeError;
use crate::core::validate::normalize_code;
use tracing::{debug, instrument};

/// Fetches the supported currencies into `cache`, returning how many were stored.
///
/// An empty response is an error and leaves `cache` untouched.
pub async fn fetch_supported_currencies(
    provider: &dyn ExchangeRateProvider,
    cache: &mut SupportedCurrencies,
) -> Result<usize, ExchangeError> {
    let currencies = provider.fetch_currencies().await?;
    if currencies.is_empty() {
        return Err(ExchangeError::Empty);
    }
    cache.populate(currencies);
    Ok(cache.len())
}

/// Rate to multiply an amount in `from` by to get `to`.
///
/// Identical codes always yield 1.0 without a request. `Ok(None)` means the
/// API answered but had no rate for the pair.
#[instrument(skip(provider))]
pub async fn get_exchange_rate(
    provider: &dyn ExchangeRateProvider,
    from: &str,
    to: &str,
) -> Result<Option<f64>, ExchangeError> {
    let from = normalize_code(from);
    let to = normalize_code(to);
    if from == to {
        debug!("Same currency, skipping fetch");
        return Ok(Some(1.0));
    }

    let table = provider.fetch_rate_table(&from).await?;
    let rate = table.rate(&to);
    debug!(?rate, date = ?table.date, "Looked up rate");
    Ok(rate)
}

pub async fn convert_currency(
    provider: &dyn ExchangeRateProvider,
    amount: f64,
    from: &str,
    to: &str,
) -> Result<Option<f64>, ExchangeError> {
    let rate = get_exchange_rate(provider, from, to).await?;
    Ok(rate.map(|r| amount * r))
}
