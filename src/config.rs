//! Catalog Config

use rusty_money::iso::{self, Currency};

/// Identity of the hosted catalog a [`crate::client::ContentClient`] reads from.
///
/// Built once at the composition root and handed to the adapters that need
/// it, so tests can point the same code at a local mock backend.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogConfig {
    /// Content backend project identifier.
    pub project_id: String,

    /// Dataset within the project, e.g. `"production"`.
    pub dataset: String,

    /// Dated API version, e.g. `"2025-01-13"`.
    pub api_version: String,

    /// Read through the edge cache instead of the live API.
    pub use_cdn: bool,

    /// Base URL override for the query API (mock backends, proxies).
    pub api_host: Option<String>,

    /// Currency product prices are expressed in.
    pub currency: &'static Currency,
}

impl CatalogConfig {
    /// Create a config for the given project, dataset and API version.
    ///
    /// Defaults to the CDN, the hosted API host and US dollars.
    pub fn new(
        project_id: impl Into<String>,
        dataset: impl Into<String>,
        api_version: impl Into<String>,
    ) -> Self {
        Self {
            project_id: project_id.into(),
            dataset: dataset.into(),
            api_version: api_version.into(),
            use_cdn: true,
            api_host: None,
            currency: iso::USD,
        }
    }

    /// Toggle the edge cache.
    #[must_use]
    pub fn with_cdn(mut self, use_cdn: bool) -> Self {
        self.use_cdn = use_cdn;
        self
    }

    /// Send queries to `api_host` instead of the hosted API.
    #[must_use]
    pub fn with_api_host(mut self, api_host: impl Into<String>) -> Self {
        self.api_host = Some(api_host.into());
        self
    }

    /// Set the currency used when pricing products.
    #[must_use]
    pub fn with_currency(mut self, currency: &'static Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Base URL of the query API, without a trailing slash.
    pub fn api_base_url(&self) -> String {
        match &self.api_host {
            Some(host) => host.trim_end_matches('/').to_string(),
            None => {
                let domain = if self.use_cdn {
                    "apicdn.sanity.io"
                } else {
                    "api.sanity.io"
                };

                format!("https://{}.{domain}", self.project_id)
            }
        }
    }
}

/// Look up an ISO currency by its alpha code, e.g. `"USD"`.
pub fn find_currency(code: &str) -> Option<&'static Currency> {
    iso::find(&code.to_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> CatalogConfig {
        CatalogConfig::new("abc123", "production", "2025-01-13")
    }

    #[test]
    fn new_defaults_to_cdn_and_usd() {
        let config = config();

        assert!(config.use_cdn);
        assert_eq!(config.api_host, None);
        assert_eq!(config.currency, iso::USD);
    }

    #[test]
    fn api_base_url_uses_cdn_domain() {
        assert_eq!(config().api_base_url(), "https://abc123.apicdn.sanity.io");
    }

    #[test]
    fn api_base_url_uses_live_domain_without_cdn() {
        let config = config().with_cdn(false);

        assert_eq!(config.api_base_url(), "https://abc123.api.sanity.io");
    }

    #[test]
    fn api_base_url_prefers_host_override() {
        let config = config().with_api_host("http://localhost:3333/");

        assert_eq!(config.api_base_url(), "http://localhost:3333");
    }

    #[test]
    fn with_currency_replaces_default() {
        let config = config().with_currency(iso::GBP);

        assert_eq!(config.currency, iso::GBP);
    }

    #[test]
    fn find_currency_is_case_insensitive() {
        assert_eq!(find_currency("gbp"), Some(iso::GBP));
        assert_eq!(find_currency("XXX-not-a-code"), None);
    }
}
