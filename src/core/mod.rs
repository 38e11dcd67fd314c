//! Core business logic abstractions

pub mod cache;
pub mod config;
pub mod conversion;
pub mod currency;
pub mod error;
pub mod log;
pub mod validate;

// Re-export main types for cleaner imports
pub use cache::SupportedCurrencies;
pub use conversion::{convert_currency, fetch_supported_currencies, get_exchange_rate};
pub use currency::{ExchangeRateProvider, RateTable};
pub use error::{ExchangeError, ValidationError};
pub use validate::{validate_amount, validate_currency_code};
