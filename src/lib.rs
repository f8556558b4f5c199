//! Storefront
//!
//! Product catalog and shopping-cart building blocks: a content API client,
//! the product model, image URL resolution, an append-only cart and the render
//! models the front ends draw from.

pub mod cards;
pub mod cart;
pub mod catalog;
pub mod client;
pub mod config;
pub mod fixtures;
pub mod images;
pub mod notifications;
pub mod prelude;
pub mod pricing;
pub mod products;
pub mod query;
pub mod tags;
