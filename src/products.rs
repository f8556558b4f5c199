//! Products

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use crate::{images::ImageRef, tags::ProductTags};

/// Catalog product as projected by [`crate::query::ProductQuery`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Document identifier, unique per catalog.
    #[serde(rename = "_id")]
    pub id: String,

    /// Display title
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,

    /// Shelf price
    pub price: Decimal,

    /// Long-form description
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,

    /// Discount percentage (0-100); zero when absent.
    #[serde(
        rename = "discountPercentage",
        default,
        deserialize_with = "null_as_default"
    )]
    pub discount_percentage: Decimal,

    /// Product image
    #[serde(rename = "productImage", default)]
    pub image: Option<ImageRef>,

    /// Tags
    #[serde(default)]
    pub tags: ProductTags,
}

impl Product {
    /// Create a product with no discount, image or tags.
    pub fn new(id: impl Into<String>, title: impl Into<String>, price: Decimal) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            price,
            description: String::new(),
            discount_percentage: Decimal::ZERO,
            image: None,
            tags: ProductTags::default(),
        }
    }

    /// Whether a discount badge applies to this product.
    pub fn has_discount(&self) -> bool {
        self.discount_percentage > Decimal::ZERO
    }

    /// The asset reference of the product image, if it has a usable one.
    pub fn image_ref(&self) -> Option<&str> {
        self.image.as_ref().and_then(ImageRef::asset_ref)
    }
}

/// Projected fields come back as `null` when a document doesn't set them.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
