//! Fixtures
//!
//! Offline product catalogs loaded from YAML, shaped like query results:
//!
//! ```yaml
//! products:
//!   - _id: mug
//!     title: Mug
//!     price: 9.99
//!     tags: [kitchen]
//! ```

use std::{fs, path::Path};

use serde::Deserialize;
use thiserror::Error;

use crate::{
    client::{CatalogSource, FetchError},
    products::Product,
};

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),
}

#[derive(Debug, Deserialize)]
struct ProductsFixture {
    #[serde(default)]
    products: Vec<Product>,
}

/// Catalog source serving a fixed product list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FixtureCatalog {
    products: Vec<Product>,
}

impl FixtureCatalog {
    /// Serve `products` as-is.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Parse a YAML fixture.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed or a product is invalid.
    pub fn from_yaml(yaml: &str) -> Result<Self, FixtureError> {
        let fixture: ProductsFixture = serde_norway::from_str(yaml)?;

        Ok(Self::new(fixture.products))
    }

    /// Read and parse a YAML fixture file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let contents = fs::read_to_string(path)?;

        Self::from_yaml(&contents)
    }

    /// Products in fixture order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }
}

impl CatalogSource for FixtureCatalog {
    async fn fetch_products(&self) -> Result<Vec<Product>, FetchError> {
        Ok(self.products.clone())
    }
}
