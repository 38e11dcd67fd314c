//! Input validation for currency codes and amounts

/// Returns true if `code` is exactly three ASCII letters once trimmed.
///
/// Case is ignored. This is a shape check only; see
/// [`SupportedCurrencies::accepts`](crate::core::cache::SupportedCurrencies::accepts)
/// for the check against the currencies the API knows about.
pub fn validate_currency_code(code: &str) -> bool {
    let code = code.trim();
    code.len() == 3 && code.chars().all(|c| c.is_ascii_alphabetic())
}

/// Parses a positive, finite amount. Returns `None` for anything else.
pub fn validate_amount(text: &str) -> Option<f64> {
    match text.trim().parse::<f64>() {
        Ok(amount) if amount.is_finite() && amount > 0.0 => Some(amount),
        _ => None,
    }
}

/// Lowercase form used for API paths and lookups.
pub fn normalize_code(code: &str) -> String {
    code.trim().to_ascii_lowercase()
}

/// Uppercase form used for display.
pub fn display_code(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_currency_codes() {
        for code in ["USD", "usd", "eUr", " gbp ", "XAU"] {
            assert!(validate_currency_code(code), "{code} should be valid");
        }
    }

    #[test]
    fn test_invalid_currency_codes() {
        for code in ["", "US", "USDT", "U5D", "12$", "   ", "é€$", "U S"] {
            assert!(!validate_currency_code(code), "{code:?} should be invalid");
        }
    }

    #[test]
    fn test_valid_amounts() {
        assert_eq!(validate_amount("12.5"), Some(12.5));
        assert_eq!(validate_amount("100"), Some(100.0));
        assert_eq!(validate_amount(" 0.01 "), Some(0.01));
        assert_eq!(validate_amount("1e9"), Some(1e9));
    }

    #[test]
    fn test_invalid_amounts() {
        for text in ["0", "-5", "0.0", "-0.01", "abc", "", "12,5", "inf", "NaN"] {
            assert_eq!(validate_amount(text), None, "{text:?} should be rejected");
        }
    }

    #[test]
    fn test_code_forms() {
        assert_eq!(normalize_code(" USD "), "usd");
        assert_eq!(display_code("eur"), "EUR");
    }
}
