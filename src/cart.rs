//! Cart

use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};
use thiserror::Error;

use crate::{pricing::format_price, products::Product};

/// Errors related to cart totals.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    /// The sum of item prices doesn't fit in a decimal.
    #[error("cart total overflowed after {0} items")]
    Overflow(usize),
}

/// Session-local, append-only list of selected products.
///
/// Adding the same product twice yields two entries; there are no quantities.
#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    items: Vec<Product>,
    currency: &'static Currency,
}

impl Cart {
    /// Create an empty cart priced in `currency`.
    pub fn new(currency: &'static Currency) -> Self {
        Cart {
            items: Vec::new(),
            currency,
        }
    }

    /// Append a copy of `product` and return the notification to show for it.
    pub fn add(&mut self, product: Product) -> String {
        let message = format!("{} added to cart", product.title);

        self.items.push(product);

        message
    }

    /// Sum of every entry's price.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Overflow`] if the sum exceeds the decimal range.
    pub fn total(&self) -> Result<Money<'static, Currency>, CartError> {
        let total = self
            .items
            .iter()
            .enumerate()
            .try_fold(Decimal::ZERO, |acc, (index, item)| {
                acc.checked_add(item.price)
                    .ok_or(CartError::Overflow(index + 1))
            })?;

        Ok(Money::from_decimal(total, self.currency))
    }

    /// Entries in the order they were added.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.items.iter()
    }

    /// Get the number of entries in the cart.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the currency of the cart.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// Count and total lines for the cart summary panel.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Overflow`] if the total can't be computed.
    pub fn summary(&self) -> Result<CartSummary, CartError> {
        Ok(CartSummary {
            total_items: self.len(),
            total_price: format_price(&self.total()?),
        })
    }
}

/// Display model for the cart summary panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartSummary {
    /// Number of entries.
    pub total_items: usize,

    /// Formatted total price.
    pub total_price: String,
}

impl CartSummary {
    /// `Total Items: {n}`
    pub fn items_line(&self) -> String {
        format!("Total Items: {}", self.total_items)
    }

    /// `Total Price: {price}`
    pub fn price_line(&self) -> String {
        format!("Total Price: {}", self.total_price)
    }
}
