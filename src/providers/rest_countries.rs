use anyhow::{Result, anyhow};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::countries::CountryProvider;

// RestCountriesProvider implementation for CountryProvider
pub struct RestCountriesProvider {
    base_url: String,
}

impl RestCountriesProvider {
    pub fn new(base_url: &str) -> Self {
        RestCountriesProvider {
            base_url: base_url.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct CountryRecord {
    cca2: String,
}

#[async_trait]
impl CountryProvider for RestCountriesProvider {
    async fn country_for_currency(&self, currency: &str) -> Result<String> {
        let url = format!("{}/v3.1/currency/{}", self.base_url, currency);
        debug!("Requesting country data from {}", url);

        let client = reqwest::Client::builder().user_agent("fxc/1.0").build()?;
        let response = client
            .get(&url)
            .send()
            .await
            .map_err(|e| anyhow!("Request error: {} for currency: {}", e, currency))?;

        if !response.status().is_success() {
            return Err(anyhow!(
                "HTTP error: {} for currency: {}",
                response.status(),
                currency
            ));
        }

        let records = response
            .json::<Vec<CountryRecord>>()
            .await
            .map_err(|e| anyhow!("Failed to parse country response for {}: {}", currency, e))?;

        let first = records
            .into_iter()
            .next()
            .ok_or_else(|| anyhow!("No country found for currency: {}", currency))?;

        Ok(first.cca2)
    }
}
