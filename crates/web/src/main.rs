//! Storefront web front end.

use leptos::prelude::*;
use storefront::{client::ContentClient, config::CatalogConfig};

mod cart;
mod products;
mod toasts;

const DEFAULT_PROJECT_ID: &str = "cort95rk";
const DEFAULT_DATASET: &str = "production";
const DEFAULT_API_VERSION: &str = "2025-01-13";

/// Catalog identity, overridable at build time through `STOREFRONT_*` variables.
fn catalog_config() -> CatalogConfig {
    let config = CatalogConfig::new(
        option_env!("STOREFRONT_PROJECT_ID").unwrap_or(DEFAULT_PROJECT_ID),
        option_env!("STOREFRONT_DATASET").unwrap_or(DEFAULT_DATASET),
        option_env!("STOREFRONT_API_VERSION").unwrap_or(DEFAULT_API_VERSION),
    )
    .with_cdn(option_env!("STOREFRONT_USE_CDN").is_none_or(|value| value != "false"));

    match option_env!("STOREFRONT_API_HOST") {
        Some(host) => config.with_api_host(host),
        None => config,
    }
}

/// Main app shell.
#[component]
fn App() -> impl IntoView {
    let client = ContentClient::new(catalog_config());

    view! {
        <main class="min-h-screen bg-slate-50 text-slate-900">
            <products::ProductCards client=client />
        </main>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(App);
}
