//! CLI configuration

use std::path::PathBuf;

use clap::Args;
use storefront::config::{CatalogConfig, find_currency};

use crate::errors::CliError;

/// Log output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "info", global = true)]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact, global = true)]
    pub log_format: LogFormat,
}

/// Content backend settings.
#[derive(Debug, Args)]
pub struct CatalogArgs {
    /// Content backend project identifier
    #[arg(long, env = "STOREFRONT_PROJECT_ID", default_value = "cort95rk")]
    pub project_id: String,

    /// Dataset to query
    #[arg(long, env = "STOREFRONT_DATASET", default_value = "production")]
    pub dataset: String,

    /// Dated API version
    #[arg(long, env = "STOREFRONT_API_VERSION", default_value = "2025-01-13")]
    pub api_version: String,

    /// Read through the edge cache
    #[arg(
        long,
        env = "STOREFRONT_USE_CDN",
        default_value_t = true,
        action = clap::ArgAction::Set
    )]
    pub use_cdn: bool,

    /// Query API base URL override (mock backends)
    #[arg(long, env = "STOREFRONT_API_HOST")]
    pub api_host: Option<String>,

    /// ISO code of the currency prices are expressed in
    #[arg(long, env = "STOREFRONT_CURRENCY", default_value = "USD")]
    pub currency: String,

    /// Read products from a YAML fixture instead of the content backend
    #[arg(long, env = "STOREFRONT_FIXTURE")]
    pub fixture: Option<PathBuf>,
}

impl CatalogArgs {
    /// Build the catalog identity handed to the fetch adapter.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::UnknownCurrency`] if the currency code isn't an ISO code.
    pub fn catalog_config(&self) -> Result<CatalogConfig, CliError> {
        let currency = find_currency(&self.currency)
            .ok_or_else(|| CliError::UnknownCurrency(self.currency.clone()))?;

        let config = CatalogConfig::new(&self.project_id, &self.dataset, &self.api_version)
            .with_cdn(self.use_cdn)
            .with_currency(currency);

        Ok(match &self.api_host {
            Some(host) => config.with_api_host(host),
            None => config,
        })
    }
}
