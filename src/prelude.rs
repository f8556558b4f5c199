//! Storefront prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cards::{CardImage, ProductCard, product_cards},
    cart::{Cart, CartError, CartSummary},
    catalog::{CatalogView, FetchStatus},
    client::{CatalogSource, ContentClient, FetchError},
    config::{CatalogConfig, find_currency},
    fixtures::{FixtureCatalog, FixtureError},
    images::{AssetRef, ImageRef, ImageUrlBuilder},
    notifications::{Notification, NotificationId, Notifications},
    pricing::{discount_badge, format_amount, format_price},
    products::Product,
    query::ProductQuery,
    tags::ProductTags,
};
