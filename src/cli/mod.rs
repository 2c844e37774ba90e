pub mod convert;
pub mod currencies;
pub mod form;
pub mod setup;
pub mod ui;

use crate::config::AppConfig;
use crate::countries::CountryProvider;
use crate::flags;
use crate::form::ConverterForm;
use crate::rates::RateProvider;
use tracing::error;

/// Loads the selectable currency list and resolves its flags.
///
/// A loader failure is logged and leaves the list empty; the caller
/// renders whatever ends up in the form. Flags resolve concurrently
/// behind a progress bar and are published as one map.
pub(crate) async fn load_currencies(
    form: &mut ConverterForm,
    rate_provider: &(dyn RateProvider + Send + Sync),
    country_provider: &(dyn CountryProvider + Send + Sync),
    config: &AppConfig,
) {
    match rate_provider.fetch_rates(&config.base_currency).await {
        Ok(table) => form.currencies_loaded(table.codes().to_vec()),
        Err(e) => {
            error!("Error fetching currencies: {e}");
            return;
        }
    }

    let pb = ui::new_progress_bar(form.currencies().len() as u64, true);
    pb.set_message("Resolving flags...");

    let resolved = flags::resolve_flags(
        country_provider,
        config.flags_base_url(),
        form.currencies(),
        pb,
    )
    .await;
    form.flags_resolved(resolved);
}
