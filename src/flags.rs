//! Derives flag image URLs for currency codes.

use crate::countries::CountryProvider;
use futures::future::join_all;
use indicatif::ProgressBar;
use std::collections::HashMap;
use tracing::debug;

/// Currency code to flag image URL. Codes whose lookup failed have no
/// entry; nothing records the failure beyond a log line.
pub type FlagMap = HashMap<String, String>;

/// Builds the CDN image URL for a two-letter country code.
pub fn flag_url(cdn_base: &str, country_code: &str) -> String {
    format!("{}/w80/{}.png", cdn_base, country_code.to_lowercase())
}

/// INR is pinned to India; the country service's first match for it is
/// not India.
fn country_code_for(currency: &str, fetched: &str) -> String {
    if currency == "INR" {
        "in".to_string()
    } else {
        fetched.to_lowercase()
    }
}

/// Resolves flag URLs for every code concurrently and returns the merged
/// map once all lookups have settled. Lookups are issued in one burst
/// with no concurrency cap.
pub async fn resolve_flags(
    provider: &(dyn CountryProvider + Send + Sync),
    cdn_base: &str,
    codes: &[String],
    pb: ProgressBar,
) -> FlagMap {
    let lookups = codes.iter().map(|code| {
        let pb_clone = pb.clone();
        async move {
            let result = provider.country_for_currency(code).await;
            pb_clone.inc(1);
            match result {
                Ok(country) => Some((
                    code.clone(),
                    flag_url(cdn_base, &country_code_for(code, &country)),
                )),
                Err(e) => {
                    debug!("Flag lookup failed for {}: {}", code, e);
                    None
                }
            }
        }
    });

    let resolved = join_all(lookups).await;
    pb.finish_and_clear();

    resolved.into_iter().flatten().collect()
}
