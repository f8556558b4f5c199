use std::io;

use clap::{Parser, Subcommand};
use storefront::{
    cards::product_cards,
    cart::Cart,
    catalog::CatalogView,
    client::{CatalogSource, ContentClient, FetchError},
    config::CatalogConfig,
    fixtures::FixtureCatalog,
    images::ImageUrlBuilder,
    products::Product,
};
use tracing::info;

use crate::{
    config::{CatalogArgs, LoggingConfig},
    errors::CliError,
    render,
};

#[derive(Debug, Parser)]
#[command(name = "storefront-cli", about = "Storefront CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    pub(crate) logging: LoggingConfig,

    #[command(flatten)]
    catalog: CatalogArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch the catalog and render one row per product card
    Products,

    /// Add products to a fresh cart by id (repeats allowed) and show the summary
    Cart {
        /// Product ids, in the order they are added
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Print the catalog query and the endpoint it is sent to
    Query,
}

/// Where products are read from.
#[derive(Debug)]
enum Source {
    Content(ContentClient),
    Fixture(FixtureCatalog),
}

impl Source {
    fn from_args(args: &CatalogArgs, config: CatalogConfig) -> Result<Self, CliError> {
        match &args.fixture {
            Some(path) => {
                info!(path = %path.display(), "reading fixture catalog");

                Ok(Self::Fixture(FixtureCatalog::from_path(path)?))
            }
            None => Ok(Self::Content(ContentClient::new(config))),
        }
    }
}

impl CatalogSource for Source {
    async fn fetch_products(&self) -> Result<Vec<Product>, FetchError> {
        match self {
            Self::Content(client) => client.fetch_products().await,
            Self::Fixture(fixture) => fixture.fetch_products().await,
        }
    }
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), CliError> {
        let config = self.catalog.catalog_config()?;

        match self.command {
            Commands::Products => {
                let source = Source::from_args(&self.catalog, config.clone())?;

                show_products(&source, &config, io::stdout().lock()).await
            }
            Commands::Cart { ids } => {
                let source = Source::from_args(&self.catalog, config.clone())?;

                fill_cart(&source, &config, &ids, io::stdout().lock()).await
            }
            Commands::Query => show_query(config, io::stdout().lock()),
        }
    }
}

/// Fetch the catalog, surfacing a failure as an error instead of an empty grid.
async fn load_catalog(source: &impl CatalogSource) -> Result<CatalogView, CliError> {
    let products = source.fetch_products().await?;

    info!(count = products.len(), "loaded catalog");

    let mut view = CatalogView::new();

    view.apply(Ok(products));

    Ok(view)
}

async fn show_products(
    source: &impl CatalogSource,
    config: &CatalogConfig,
    out: impl io::Write,
) -> Result<(), CliError> {
    let view = load_catalog(source).await?;
    let images = ImageUrlBuilder::new(config);
    let cards = product_cards(view.products(), &images, config.currency);

    render::write_cards(out, &cards)?;

    Ok(())
}

async fn fill_cart(
    source: &impl CatalogSource,
    config: &CatalogConfig,
    ids: &[String],
    mut out: impl io::Write,
) -> Result<(), CliError> {
    let view = load_catalog(source).await?;
    let mut cart = Cart::new(config.currency);

    for id in ids {
        let product = view
            .find(id)
            .cloned()
            .ok_or_else(|| CliError::ProductNotFound(id.clone()))?;

        let message = cart.add(product);

        writeln!(out, "{message}")?;
    }

    render::write_cart_summary(out, &cart.summary()?)?;

    Ok(())
}

fn show_query(config: CatalogConfig, mut out: impl io::Write) -> Result<(), CliError> {
    let client = ContentClient::new(config);

    writeln!(out, "{}", client.query())?;
    writeln!(out, "{}", client.query_url())?;

    Ok(())
}
