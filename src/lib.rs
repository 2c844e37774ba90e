pub mod cli;
pub mod config;
pub mod countries;
pub mod flags;
pub mod form;
pub mod log;
pub mod providers;
pub mod rates;

use anyhow::Result;
use tracing::debug;

pub enum AppCommand {
    Currencies,
    Convert {
        from: String,
        to: String,
        amount: String,
    },
    Form,
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    let config = match config_path {
        Some(path) => config::AppConfig::load_from_path(path)?,
        None => config::AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let rate_provider =
        providers::exchange_rate_api::ExchangeRateApiProvider::new(config.rates_base_url());
    let country_provider =
        providers::rest_countries::RestCountriesProvider::new(config.countries_base_url());

    match command {
        AppCommand::Currencies => {
            cli::currencies::run(&rate_provider, &country_provider, &config).await
        }
        AppCommand::Convert { from, to, amount } => {
            cli::convert::run(&rate_provider, &from, &to, &amount).await
        }
        AppCommand::Form => cli::form::run(&rate_provider, &country_provider, &config).await,
    }
}
