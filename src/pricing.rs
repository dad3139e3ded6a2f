//! Pricing

use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};

use crate::cart::CartLineItem;

/// Price of a single line: unit price times quantity.
///
/// Saturates at [`Decimal::MAX`] rather than overflowing.
pub fn line_total(item: &CartLineItem) -> Decimal {
    item.price()
        .saturating_mul(Decimal::from(item.quantity().get()))
}

/// Calculates the total price of a list of line items.
///
/// An empty list totals zero.
pub fn total_price(items: &[CartLineItem]) -> Decimal {
    items
        .iter()
        .fold(Decimal::ZERO, |acc, item| acc.saturating_add(line_total(item)))
}

/// Wrap an amount in the given currency for display.
pub fn to_money(amount: Decimal, currency: &Currency) -> Money<'_, Currency> {
    Money::from_decimal(amount, currency)
}
