//! Cart

use std::num::NonZeroU32;

use rust_decimal::Decimal;

use crate::pricing::total_price;

pub mod line_item;

pub use line_item::{CartLineItem, LineItemError, LineItemKey};

/// The line items chosen in the current session and their running total.
///
/// The total is a projection of the items and is recomputed after every mutation. Mutation is
/// only possible from within the crate, through [`CartStore`](crate::store::CartStore).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    items: Vec<CartLineItem>,
    total: Decimal,
}

impl Cart {
    /// Create a new, empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a cart from items, merging any repeated keys the way [`Cart::add`] does.
    pub(crate) fn from_items(items: impl IntoIterator<Item = CartLineItem>) -> Self {
        let mut cart = Self::new();

        for item in items {
            cart.merge(item);
        }

        cart.recompute_total();

        cart
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Iterate over the items in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &CartLineItem> {
        self.items.iter()
    }

    /// Sum of `price * quantity` over all items.
    pub fn total(&self) -> Decimal {
        self.total
    }

    /// Look up the item for a service and maker.
    pub fn get(&self, service_id: &str, maker_id: &str) -> Option<&CartLineItem> {
        self.items
            .iter()
            .find(|item| item.matches(service_id, maker_id))
    }

    /// Number of distinct line items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total number of units across all line items.
    pub fn item_count(&self) -> u64 {
        self.items
            .iter()
            .map(|item| u64::from(item.quantity().get()))
            .sum()
    }

    /// Add an item, or increase the quantity of the existing item with the same key.
    ///
    /// When the key already exists the stored price and names are kept.
    pub(crate) fn add(&mut self, item: CartLineItem) {
        self.merge(item);
        self.recompute_total();
    }

    /// Remove the item for a service and maker. Returns whether anything was removed.
    pub(crate) fn remove(&mut self, service_id: &str, maker_id: &str) -> bool {
        let before = self.items.len();

        self.items.retain(|item| !item.matches(service_id, maker_id));

        let removed = self.items.len() != before;

        if removed {
            self.recompute_total();
        }

        removed
    }

    /// Set the quantity for a service and maker. Zero or negative quantities remove the item.
    ///
    /// Returns whether the cart changed.
    pub(crate) fn set_quantity(&mut self, service_id: &str, maker_id: &str, quantity: i64) -> bool {
        let Some(quantity) = clamp_quantity(quantity) else {
            return self.remove(service_id, maker_id);
        };

        let Some(item) = self
            .items
            .iter_mut()
            .find(|item| item.matches(service_id, maker_id))
        else {
            return false;
        };

        item.set_quantity(quantity);

        self.recompute_total();

        true
    }

    /// Remove every item.
    pub(crate) fn clear(&mut self) {
        self.items.clear();
        self.total = Decimal::ZERO;
    }

    fn merge(&mut self, item: CartLineItem) {
        match self
            .items
            .iter_mut()
            .find(|existing| existing.key() == item.key())
        {
            Some(existing) => existing.increase_quantity(item.quantity()),
            None => self.items.push(item),
        }
    }

    fn recompute_total(&mut self) {
        self.total = total_price(&self.items);
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a CartLineItem;
    type IntoIter = std::slice::Iter<'a, CartLineItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

fn clamp_quantity(quantity: i64) -> Option<NonZeroU32> {
    if quantity <= 0 {
        return None;
    }

    NonZeroU32::new(u32::try_from(quantity).unwrap_or(u32::MAX))
}
