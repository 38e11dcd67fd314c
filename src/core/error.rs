//! Error kinds reported by the exchange client and argument validation

use thiserror::Error;

/// Failure of a single call against the exchange rate API.
///
/// The client never prints; the command layer decides how to render these.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ExchangeError {
    #[error("Request timed out.")]
    Timeout,
    #[error("Cannot connect to the API.")]
    Connection,
    #[error("API request failed: {0}")]
    Request(String),
    #[error("Invalid format from API: {0}")]
    Decode(String),
    #[error("No currencies data")]
    Empty,
}

impl From<reqwest::Error> for ExchangeError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ExchangeError::Timeout
        } else if err.is_connect() {
            ExchangeError::Connection
        } else if err.is_decode() {
            ExchangeError::Decode(err.to_string())
        } else {
            ExchangeError::Request(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ExchangeError {
    fn from(err: serde_json::Error) -> Self {
        ExchangeError::Decode(err.to_string())
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Invalid currency code '{0}': expected 3 letters, e.g. USD")]
    CurrencyCode(String),
    #[error("Invalid amount '{0}': expected a positive number")]
    Amount(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_from_serde() {
        let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let converted: ExchangeError = err.into();
        assert!(matches!(converted, ExchangeError::Decode(_)));
        assert!(converted.to_string().starts_with("Invalid format from API"));
    }

    #[test]
    fn test_messages() {
        assert_eq!(ExchangeError::Timeout.to_string(), "Request timed out.");
        assert_eq!(
            ExchangeError::Connection.to_string(),
            "Cannot connect to the API."
        );
        assert_eq!(ExchangeError::Empty.to_string(), "No currencies data");
        assert_eq!(
            ValidationError::CurrencyCode("US".to_string()).to_string(),
            "Invalid currency code 'US': expected 3 letters, e.g. USD"
        );
    }
}
