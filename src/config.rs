use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

pub const DEFAULT_RATES_URL: &str = "https://api.exchangerate-api.com";
pub const DEFAULT_COUNTRIES_URL: &str = "https://restcountries.com";
pub const DEFAULT_FLAGS_URL: &str = "https://flagcdn.com";

const DEFAULT_BASE_CURRENCY: &str = "USD";

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RatesProviderConfig {
    pub base_url: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CountriesProviderConfig {
    pub base_url: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct FlagsProviderConfig {
    pub base_url: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ProvidersConfig {
    pub rates: Option<RatesProviderConfig>,
    pub countries: Option<CountriesProviderConfig>,
    pub flags: Option<FlagsProviderConfig>,
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        ProvidersConfig {
            rates: Some(RatesProviderConfig {
                base_url: DEFAULT_RATES_URL.to_string(),
            }),
            countries: Some(CountriesProviderConfig {
                base_url: DEFAULT_COUNTRIES_URL.to_string(),
            }),
            flags: Some(FlagsProviderConfig {
                base_url: DEFAULT_FLAGS_URL.to_string(),
            }),
        }
    }
}

fn default_base_currency() -> String {
    DEFAULT_BASE_CURRENCY.to_string()
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub providers: ProvidersConfig,
    /// Base currency used to enumerate the selectable currency list.
    #[serde(default = "default_base_currency")]
    pub base_currency: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            providers: ProvidersConfig::default(),
            base_currency: default_base_currency(),
        }
    }
}

impl AppConfig {
    /// Loads the config file from the default location. A missing file is
    /// not an error: the converter runs fully on defaults.
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!("No config file at {}, using defaults", config_path.display());
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("dev", "fxc", "fxc")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }

    pub fn rates_base_url(&self) -> &str {
        self.providers
            .rates
            .as_ref()
            .map_or(DEFAULT_RATES_URL, |p| &p.base_url)
    }

    pub fn countries_base_url(&self) -> &str {
        self.providers
            .countries
            .as_ref()
            .map_or(DEFAULT_COUNTRIES_URL, |p| &p.base_url)
    }

    pub fn flags_base_url(&self) -> &str {
        self.providers
            .flags
            .as_ref()
            .map_or(DEFAULT_FLAGS_URL, |p| &p.base_url)
    }
}
