//! Exchange rate abstractions.

use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;

/// A snapshot of exchange rates anchored at a base currency.
///
/// Codes keep the order the rate service returned them in; lookups go
/// through the map. A table is replaced wholesale on every fetch, never
/// merged with a previous one.
#[derive(Debug, Clone)]
pub struct RateTable {
    base: String,
    codes: Vec<String>,
    rates: HashMap<String, f64>,
}

impl RateTable {
    pub fn new(base: &str, entries: Vec<(String, f64)>) -> Self {
        let codes = entries.iter().map(|(code, _)| code.clone()).collect();
        let rates = entries.into_iter().collect();
        RateTable {
            base: base.to_string(),
            codes,
            rates,
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Currency codes in rate service response order.
    pub fn codes(&self) -> &[String] {
        &self.codes
    }

    pub fn rate(&self, code: &str) -> Option<f64> {
        self.rates.get(code).copied()
    }
}

#[async_trait]
pub trait RateProvider: Send + Sync {
    async fn fetch_rates(&self, base: &str) -> Result<RateTable>;
}
