//! Country lookup abstractions.

use anyhow::Result;
use async_trait::async_trait;

/// Resolves the two-letter country code of the first country using a
/// given currency.
#[async_trait]
pub trait CountryProvider: Send + Sync {
    async fn country_for_currency(&self, currency: &str) -> Result<String>;
}
