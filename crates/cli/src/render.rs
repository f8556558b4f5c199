//! Terminal rendering of product cards and the cart summary.

use std::io;

use storefront::{cards::ProductCard, cart::CartSummary};
use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};

/// Write the card grid as a table, one row per card, followed by the count.
pub(crate) fn write_cards(mut out: impl io::Write, cards: &[ProductCard]) -> io::Result<()> {
    if cards.is_empty() {
        return writeln!(out, "No products.");
    }

    let mut builder = Builder::default();

    builder.push_record(["Title", "Price", "Discount", "Tags", "Image"]);

    for card in cards {
        builder.push_record([
            card.title.clone(),
            card.price.clone(),
            card.discount_badge.clone().unwrap_or_default(),
            card.tags.join(", "),
            card.image
                .as_ref()
                .map(|image| image.src.clone())
                .unwrap_or_default(),
        ]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Columns::new(1..3), Alignment::right());

    let label = if cards.len() == 1 {
        "product"
    } else {
        "products"
    };

    writeln!(out, "{table}")?;
    writeln!(out, "{} {label}", cards.len())
}

/// Write the cart summary panel.
pub(crate) fn write_cart_summary(mut out: impl io::Write, summary: &CartSummary) -> io::Result<()> {
    writeln!(out, "Cart Summary")?;
    writeln!(out, "{}", summary.items_line())?;
    writeln!(out, "{}", summary.price_line())
}
