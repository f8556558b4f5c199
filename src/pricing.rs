//! Pricing
//!
//! Display formatting for prices and percentages. Amounts are shown with
//! exactly two decimal places, rounded the way a binary double holding the
//! amount rounds: `1.005` is stored just below the midpoint and shows as
//! `1.00`, while exact midpoints such as `0.125` round away from zero.

use rust_decimal::{Decimal, RoundingStrategy};
use rusty_money::{Money, iso::Currency};

/// Format money as a two-decimal price with its currency symbol.
pub fn format_price(money: &Money<'_, Currency>) -> String {
    format_amount(*money.amount(), money.currency())
}

/// Format a decimal amount in `currency`, e.g. `$10.00` or `12.50 JPY`.
pub fn format_amount(amount: Decimal, currency: &Currency) -> String {
    let mut rounded = nearest_double(amount.abs())
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

    rounded.rescale(2);

    let sign = if amount.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    let symbol = match currency.iso_alpha_code {
        "GBP" => "£",
        "USD" => "$",
        "EUR" => "€",
        _ => "",
    };

    if symbol.is_empty() {
        format!("{sign}{rounded} {}", currency.iso_alpha_code)
    } else {
        format!("{sign}{symbol}{rounded}")
    }
}

/// The exact value of the `f64` closest to `amount`.
fn nearest_double(amount: Decimal) -> Decimal {
    amount
        .to_string()
        .parse::<f64>()
        .ok()
        .and_then(Decimal::from_f64_retain)
        .unwrap_or(amount)
}

/// Format a percentage in its shortest form, e.g. `15` or `12.5`.
pub fn format_percentage(percentage: Decimal) -> String {
    percentage.normalize().to_string()
}

/// Badge text for a discount percentage, `None` when there is no discount.
pub fn discount_badge(percentage: Decimal) -> Option<String> {
    (percentage > Decimal::ZERO).then(|| format!("{}% OFF", format_percentage(percentage)))
}
