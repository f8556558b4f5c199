//! Catalog View State
//!
//! The product list a presentation component displays, plus the status of the
//! fetch that fills it.

use crate::{client::FetchError, products::Product};

/// Where the catalog fetch currently stands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FetchStatus {
    /// No fetch has started yet.
    #[default]
    Idle,

    /// A fetch is in flight.
    Loading,

    /// The last fetch succeeded.
    Ready,

    /// The last fetch failed; the previous list is still shown.
    Failed(String),
}

/// Products shown by a mounted component.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogView {
    products: Vec<Product>,
    status: FetchStatus,
}

impl CatalogView {
    /// An empty catalog that hasn't been fetched.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a fetch as started.
    ///
    /// Returns `false` (and changes nothing) if one is already in flight.
    pub fn begin_fetch(&mut self) -> bool {
        if self.status == FetchStatus::Loading {
            return false;
        }

        self.status = FetchStatus::Loading;

        true
    }

    /// Record the outcome of a fetch.
    ///
    /// On success the list is replaced wholesale. On failure the error message
    /// is recorded and the previously displayed list is left untouched; logging
    /// the failure is up to the caller.
    pub fn apply(&mut self, outcome: Result<Vec<Product>, FetchError>) {
        match outcome {
            Ok(products) => {
                self.products = products;
                self.status = FetchStatus::Ready;
            }
            Err(fetch_error) => {
                self.status = FetchStatus::Failed(fetch_error.to_string());
            }
        }
    }

    /// Products in display order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a displayed product by id.
    pub fn find(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    /// Current fetch status.
    pub fn status(&self) -> &FetchStatus {
        &self.status
    }

    /// Error message of the last failed fetch, if the last fetch failed.
    pub fn error_message(&self) -> Option<&str> {
        match &self.status {
            FetchStatus::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Whether a fetch is in flight.
    pub fn is_loading(&self) -> bool {
        self.status == FetchStatus::Loading
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    fn products() -> Vec<Product> {
        vec![
            Product::new("a", "Mug", Decimal::from(10)),
            Product::new("b", "Bowl", Decimal::from(12)),
        ]
    }

    fn failure() -> FetchError {
        FetchError::Backend {
            status: 500,
            message: "boom".to_string(),
        }
    }

    #[test]
    fn starts_empty_and_idle() {
        let view = CatalogView::new();

        assert!(view.products().is_empty());
        assert_eq!(view.status(), &FetchStatus::Idle);
    }

    #[test]
    fn begin_fetch_allows_one_in_flight() {
        let mut view = CatalogView::new();

        assert!(view.begin_fetch());
        assert!(view.is_loading());
        assert!(!view.begin_fetch());
    }

    #[test]
    fn apply_success_replaces_products() {
        let mut view = CatalogView::new();

        view.begin_fetch();
        view.apply(Ok(products()));

        assert_eq!(view.products().len(), 2);
        assert_eq!(view.status(), &FetchStatus::Ready);
        assert_eq!(view.find("b").map(|p| p.title.as_str()), Some("Bowl"));
    }

    #[test]
    fn apply_failure_on_first_load_stays_empty() {
        let mut view = CatalogView::new();

        view.begin_fetch();
        view.apply(Err(failure()));

        assert!(view.products().is_empty());
        assert_eq!(
            view.error_message(),
            Some("content backend returned 500: boom")
        );
    }

    #[test]
    fn apply_failure_keeps_previous_products() {
        let mut view = CatalogView::new();

        view.apply(Ok(products()));
        view.begin_fetch();
        view.apply(Err(failure()));

        assert_eq!(view.products(), products().as_slice());
        assert!(!view.is_loading());
    }

    #[test]
    fn begin_fetch_is_allowed_again_after_failure() {
        let mut view = CatalogView::new();

        view.begin_fetch();
        view.apply(Err(failure()));

        assert!(view.begin_fetch());
        assert_eq!(view.error_message(), None);
    }
}
