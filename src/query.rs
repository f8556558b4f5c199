//! Catalog Query

use std::fmt;

/// Document type holding catalog products.
pub const PRODUCT_DOCUMENT_TYPE: &str = "product";

/// Fields projected for every product, in wire order.
pub const PRODUCT_PROJECTION: [&str; 7] = [
    "_id",
    "title",
    "price",
    "description",
    "discountPercentage",
    "productImage",
    "tags",
];

/// Read-only GROQ query selecting documents of one type with a fixed projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductQuery {
    document_type: &'static str,
    projection: &'static [&'static str],
}

impl ProductQuery {
    /// Every product document, unfiltered, unsorted and unpaginated.
    pub const fn all() -> Self {
        Self {
            document_type: PRODUCT_DOCUMENT_TYPE,
            projection: &PRODUCT_PROJECTION,
        }
    }

    /// Render the query string sent to the backend.
    pub fn to_groq(&self) -> String {
        format!(
            "*[_type == \"{}\"] {{ {} }}",
            self.document_type,
            self.projection.join(", ")
        )
    }
}

impl fmt::Display for ProductQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_groq())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_products_query() {
        assert_eq!(
            ProductQuery::all().to_groq(),
            r#"*[_type == "product"] { _id, title, price, description, discountPercentage, productImage, tags }"#
        );
    }

    #[test]
    fn projection_omits_is_new_flag() {
        assert!(!ProductQuery::all().to_groq().contains("isNew"));
    }

    #[test]
    fn display_matches_groq() {
        let query = ProductQuery::all();

        assert_eq!(query.to_string(), query.to_groq());
    }
}
