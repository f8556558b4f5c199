//! Content API client for reading the product catalog.

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::{config::CatalogConfig, products::Product, query::ProductQuery};

/// Errors that can occur while fetching the catalog.
#[derive(Debug, Error)]
pub enum FetchError {
    /// An HTTP transport error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status.
    #[error("content backend returned {status}: {message}")]
    Backend {
        /// HTTP status code.
        status: u16,

        /// Backend-provided error description, or the raw body.
        message: String,
    },

    /// The response body didn't match the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Anything that can produce the product catalog.
pub trait CatalogSource {
    /// Fetch every product, in the order the source returns them.
    async fn fetch_products(&self) -> Result<Vec<Product>, FetchError>;
}

/// HTTP client for the hosted content query API.
#[derive(Debug, Clone)]
pub struct ContentClient {
    config: CatalogConfig,
    query: ProductQuery,
    http: Client,
}

impl ContentClient {
    /// Create a new client for the catalog described by `config`.
    #[must_use]
    pub fn new(config: CatalogConfig) -> Self {
        Self {
            config,
            query: ProductQuery::all(),
            http: Client::new(),
        }
    }

    /// The catalog this client reads from.
    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// The query sent on every fetch.
    pub fn query(&self) -> ProductQuery {
        self.query
    }

    /// Query endpoint, without the `query` parameter.
    pub fn query_url(&self) -> String {
        format!(
            "{}/v{}/data/query/{}",
            self.config.api_base_url(),
            self.config.api_version.trim_start_matches('v'),
            self.config.dataset
        )
    }
}

impl CatalogSource for ContentClient {
    #[tracing::instrument(
        name = "content.client.fetch_products",
        skip(self),
        fields(project_id = %self.config.project_id, dataset = %self.config.dataset),
        err
    )]
    async fn fetch_products(&self) -> Result<Vec<Product>, FetchError> {
        let url = self.query_url();
        let groq = self.query.to_groq();

        debug!(%url, query = %groq, "querying catalog");

        let response = self
            .http
            .get(&url)
            .query(&[("query", groq.as_str())])
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        let products = decode_response(status, &body)?;

        info!(count = products.len(), "fetched products");

        Ok(products)
    }
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
    result: Option<Vec<Product>>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    description: Option<String>,

    #[serde(rename = "type")]
    kind: Option<String>,
}

/// Decode a query API response body received with `status`.
///
/// A `null` result decodes to an empty catalog.
///
/// # Errors
///
/// Returns [`FetchError::Backend`] for non-2xx statuses and
/// [`FetchError::Decode`] when a successful body can't be parsed.
pub fn decode_response(status: u16, body: &str) -> Result<Vec<Product>, FetchError> {
    if !(200..300).contains(&status) {
        return Err(FetchError::Backend {
            status,
            message: backend_error_message(body),
        });
    }

    let parsed: QueryResponse = serde_json::from_str(body)?;

    Ok(parsed.result.unwrap_or_default())
}

fn backend_error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(ErrorResponse {
            error:
                ErrorBody {
                    description: Some(description),
                    kind,
                },
        }) => match kind {
            Some(kind) => format!("{description} ({kind})"),
            None => description,
        },
        _ if body.trim().is_empty() => "empty response body".to_string(),
        _ => body.trim().to_string(),
    }
}
