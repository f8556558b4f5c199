//! CLI errors.

use std::io;

use storefront::{cart::CartError, client::FetchError, fixtures::FixtureError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("unknown currency code: {0}")]
    UnknownCurrency(String),

    #[error("failed to load fixture catalog")]
    Fixture(#[from] FixtureError),

    #[error("failed to fetch products")]
    Fetch(#[from] FetchError),

    #[error("product not found: {0}")]
    ProductNotFound(String),

    #[error("failed to compute cart total")]
    Cart(#[from] CartError),

    #[error("failed to initialise logging: {0}")]
    Logging(String),

    #[error("failed to write output")]
    Io(#[from] io::Error),
}
