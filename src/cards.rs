//! Product Cards
//!
//! Render models for the catalog grid, shared by every front end.

use rusty_money::iso::Currency;

use crate::{
    images::ImageUrlBuilder,
    pricing::{discount_badge, format_amount},
    products::Product,
};

/// Image element of a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardImage {
    /// Resolved image URL.
    pub src: String,

    /// Alternative text; the product title.
    pub alt: String,
}

/// Render model for a single product card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    /// Stable key (product id).
    pub key: String,

    /// Card heading.
    pub title: String,

    /// Body text.
    pub description: String,

    /// Formatted shelf price.
    pub price: String,

    /// `{n}% OFF`, only for discounted products.
    pub discount_badge: Option<String>,

    /// Image element, only when the product has a usable asset reference.
    pub image: Option<CardImage>,

    /// Tag pills in query order.
    pub tags: Vec<String>,
}

impl ProductCard {
    /// Build the card for `product`.
    pub fn new(product: &Product, images: &ImageUrlBuilder, currency: &Currency) -> Self {
        let image = product.image_ref().map(|reference| CardImage {
            src: images.url(reference),
            alt: product.title.clone(),
        });

        Self {
            key: product.id.clone(),
            title: product.title.clone(),
            description: product.description.clone(),
            price: format_amount(product.price, currency),
            discount_badge: discount_badge(product.discount_percentage),
            image,
            tags: product.tags.to_vec(),
        }
    }
}

/// Build one card per product, in order.
pub fn product_cards(
    products: &[Product],
    images: &ImageUrlBuilder,
    currency: &Currency,
) -> Vec<ProductCard> {
    products
        .iter()
        .map(|product| ProductCard::new(product, images, currency))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use rust_decimal::Decimal;
    use rusty_money::iso;
    use testresult::TestResult;

    use super::*;
    use crate::{config::CatalogConfig, images::ImageRef, tags::ProductTags};

    fn images() -> ImageUrlBuilder {
        ImageUrlBuilder::new(&CatalogConfig::new("proj", "production", "2025-01-13"))
    }

    fn mug() -> TestResult<Product> {
        let mut product = Product::new("a", "Mug", Decimal::from_str("9.999")?);

        product.tags = ProductTags::from_strs(&["kitchen"]);

        Ok(product)
    }

    #[test]
    fn mug_card_matches_expected_rendering() -> TestResult {
        let card = ProductCard::new(&mug()?, &images(), iso::USD);

        assert_eq!(card.key, "a");
        assert_eq!(card.title, "Mug");
        assert_eq!(card.price, "$10.00");
        assert_eq!(card.tags, ["kitchen"]);
        assert_eq!(card.discount_badge, None);
        assert_eq!(card.image, None);

        Ok(())
    }

    #[test]
    fn discounted_product_has_badge() -> TestResult {
        let mut product = mug()?;

        product.discount_percentage = Decimal::from_str("12.5")?;

        let card = ProductCard::new(&product, &images(), iso::USD);

        assert_eq!(card.discount_badge.as_deref(), Some("12.5% OFF"));

        Ok(())
    }

    #[test]
    fn image_uses_title_as_alt_text() -> TestResult {
        let mut product = mug()?;

        product.image = Some(ImageRef::new("image-abc-10x20-png"));

        let card = ProductCard::new(&product, &images(), iso::USD);

        assert_eq!(
            card.image,
            Some(CardImage {
                src: "https://cdn.sanity.io/images/proj/production/abc-10x20.png".to_string(),
                alt: "Mug".to_string(),
            })
        );

        Ok(())
    }

    #[test]
    fn empty_image_reference_has_no_image() -> TestResult {
        let mut product = mug()?;

        product.image = Some(ImageRef::new(""));

        let card = ProductCard::new(&product, &images(), iso::USD);

        assert_eq!(card.image, None);

        Ok(())
    }

    #[test]
    fn one_card_per_product_in_order() -> TestResult {
        let products = vec![
            mug()?,
            Product::new("b", "Bowl", Decimal::from(12)),
            Product::new("c", "Cup", Decimal::from(3)),
        ];

        let cards = product_cards(&products, &images(), iso::USD);

        assert_eq!(cards.len(), products.len());
        assert_eq!(
            cards.iter().map(|card| card.key.as_str()).collect::<Vec<_>>(),
            ["a", "b", "c"]
        );

        Ok(())
    }
}
