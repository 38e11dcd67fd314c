use crate::core::validate::{normalize_code, validate_currency_code};
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

/// Currencies the API reports as supported, keyed by lowercase code.
///
/// Starts empty and is filled by the first successful fetch. Nothing expires;
/// the set lives as long as the session that owns it.
#[derive(Debug, Clone, Default)]
pub struct SupportedCurrencies {
    inner: BTreeMap<String, String>,
}

impl SupportedCurrencies {
    pub fn new() -> Self {
        Self {
            inner: BTreeMap::new(),
        }
    }

    /// Replaces the current contents with `currencies`.
    pub fn populate(&mut self, currencies: HashMap<String, String>) {
        self.inner = currencies
            .into_iter()
            .map(|(code, name)| (normalize_code(&code), name))
            .collect();
        debug!(count = self.inner.len(), "Supported currencies cached");
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn contains(&self, code: &str) -> bool {
        self.inner.contains_key(&normalize_code(code))
    }

    pub fn name(&self, code: &str) -> Option<&str> {
        self.inner.get(&normalize_code(code)).map(String::as_str)
    }

    /// Shape check plus membership when the set is known. An empty set
    /// accepts any well-formed code.
    pub fn accepts(&self, code: &str) -> bool {
        if !validate_currency_code(code) {
            return false;
        }
        if self.is_empty() {
            debug!("Supported currencies unavailable, checking shape only");
            return true;
        }
        self.contains(code)
    }

    /// Iterates in code order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.inner.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> HashMap<String, String> {
        HashMap::from([
            ("usd".to_string(), "US Dollar".to_string()),
            ("EUR".to_string(), "Euro".to_string()),
        ])
    }

    #[test]
    fn test_empty_cache_accepts_any_shape() {
        let cache = SupportedCurrencies::new();
        assert!(cache.is_empty());
        assert!(cache.accepts("xyz"));
        assert!(!cache.accepts("xy"));
    }

    #[test]
    fn test_populated_cache_lookup() {
        let mut cache = SupportedCurrencies::new();
        cache.populate(sample());

        assert_eq!(cache.len(), 2);
        assert!(cache.contains("USD"));
        assert_eq!(cache.name("eur"), Some("Euro"));
        assert!(cache.accepts("Eur"));
        assert!(!cache.accepts("xyz"));
        assert!(cache.name("gbp").is_none());
    }

    #[test]
    fn test_populate_replaces_and_orders() {
        let mut cache = SupportedCurrencies::new();
        cache.populate(sample());
        cache.populate(HashMap::from([
            ("jpy".to_string(), "Japanese Yen".to_string()),
            ("chf".to_string(), "Swiss Franc".to_string()),
        ]));

        let codes: Vec<_> = cache.iter().map(|(code, _)| code).collect();
        assert_eq!(codes, vec!["chf", "jpy"]);
        assert!(!cache.contains("usd"));
    }
}
