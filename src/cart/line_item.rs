//! Line Items

use std::{fmt, num::NonZeroU32};

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised when a line item would break the cart's invariants.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LineItemError {
    /// The service identifier was empty.
    #[error("line item has an empty service id")]
    EmptyServiceId,

    /// The maker identifier was empty.
    #[error("line item has an empty maker id")]
    EmptyMakerId,

    /// The unit price was below zero.
    #[error("line item price {0} is negative")]
    NegativePrice(Decimal),

    /// The quantity was zero.
    #[error("line item quantity must be at least 1")]
    ZeroQuantity,
}

/// Identity of a line item within a cart: the service and the maker selling it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineItemKey {
    /// Service identifier
    pub service_id: String,

    /// Maker identifier
    pub maker_id: String,
}

impl LineItemKey {
    /// Creates a key from a service and maker identifier.
    pub fn new(service_id: impl Into<String>, maker_id: impl Into<String>) -> Self {
        Self {
            service_id: service_id.into(),
            maker_id: maker_id.into(),
        }
    }
}

impl fmt::Display for LineItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.service_id, self.maker_id)
    }
}

/// A service chosen from a maker, with its name and price captured when it was added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLineItem {
    key: LineItemKey,
    service_name: String,
    maker_name: String,
    price: Decimal,
    quantity: NonZeroU32,
}

impl CartLineItem {
    /// Creates a validated line item.
    ///
    /// # Errors
    ///
    /// - [`LineItemError::EmptyServiceId`] / [`LineItemError::EmptyMakerId`]: an identifier was empty.
    /// - [`LineItemError::NegativePrice`]: the unit price was below zero.
    /// - [`LineItemError::ZeroQuantity`]: the quantity was zero.
    pub fn new(
        service_id: impl Into<String>,
        maker_id: impl Into<String>,
        service_name: impl Into<String>,
        maker_name: impl Into<String>,
        price: Decimal,
        quantity: u32,
    ) -> Result<Self, LineItemError> {
        let key = LineItemKey::new(service_id, maker_id);

        if key.service_id.is_empty() {
            return Err(LineItemError::EmptyServiceId);
        }

        if key.maker_id.is_empty() {
            return Err(LineItemError::EmptyMakerId);
        }

        if price.is_sign_negative() && !price.is_zero() {
            return Err(LineItemError::NegativePrice(price));
        }

        let quantity = NonZeroU32::new(quantity).ok_or(LineItemError::ZeroQuantity)?;

        Ok(Self {
            key,
            service_name: service_name.into(),
            maker_name: maker_name.into(),
            price,
            quantity,
        })
    }

    /// Returns the line item key
    pub fn key(&self) -> &LineItemKey {
        &self.key
    }

    /// Returns the service identifier
    pub fn service_id(&self) -> &str {
        &self.key.service_id
    }

    /// Returns the maker identifier
    pub fn maker_id(&self) -> &str {
        &self.key.maker_id
    }

    /// Returns the service name captured at add-time
    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    /// Returns the maker name captured at add-time
    pub fn maker_name(&self) -> &str {
        &self.maker_name
    }

    /// Returns the unit price captured at add-time
    pub fn price(&self) -> Decimal {
        self.price
    }

    /// Returns the quantity
    pub fn quantity(&self) -> NonZeroU32 {
        self.quantity
    }

    /// Whether this item is identified by the given service and maker.
    pub fn matches(&self, service_id: &str, maker_id: &str) -> bool {
        self.key.service_id == service_id && self.key.maker_id == maker_id
    }

    pub(crate) fn increase_quantity(&mut self, by: NonZeroU32) {
        self.quantity = self.quantity.saturating_add(by.get());
    }

    pub(crate) fn set_quantity(&mut self, quantity: NonZeroU32) {
        self.quantity = quantity;
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::dec;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn new_keeps_snapshot_fields() -> TestResult {
        let item = CartLineItem::new("s1", "m1", "Print", "Lab", dec!(10.00), 2)?;

        assert_eq!(item.key(), &LineItemKey::new("s1", "m1"));
        assert_eq!(item.service_name(), "Print");
        assert_eq!(item.maker_name(), "Lab");
        assert_eq!(item.price(), dec!(10.00));
        assert_eq!(item.quantity().get(), 2);

        Ok(())
    }

    #[test]
    fn new_accepts_free_services() -> TestResult {
        let item = CartLineItem::new("s1", "m1", "Consult", "Lab", Decimal::ZERO, 1)?;

        assert!(item.price().is_zero());

        Ok(())
    }

    #[test]
    fn new_rejects_invalid_input() {
        assert_eq!(
            CartLineItem::new("", "m1", "Print", "Lab", dec!(1), 1),
            Err(LineItemError::EmptyServiceId)
        );
        assert_eq!(
            CartLineItem::new("s1", "", "Print", "Lab", dec!(1), 1),
            Err(LineItemError::EmptyMakerId)
        );
        assert_eq!(
            CartLineItem::new("s1", "m1", "Print", "Lab", dec!(-0.01), 1),
            Err(LineItemError::NegativePrice(dec!(-0.01)))
        );
        assert_eq!(
            CartLineItem::new("s1", "m1", "Print", "Lab", dec!(1), 0),
            Err(LineItemError::ZeroQuantity)
        );
    }

    #[test]
    fn increase_quantity_saturates() -> TestResult {
        let mut item = CartLineItem::new("s1", "m1", "Print", "Lab", dec!(1), u32::MAX - 1)?;

        item.increase_quantity(NonZeroU32::MIN.saturating_add(4));

        assert_eq!(item.quantity().get(), u32::MAX);

        Ok(())
    }

    #[test]
    fn matches_requires_both_ids() -> TestResult {
        let item = CartLineItem::new("s1", "m1", "Print", "Lab", dec!(1), 1)?;

        assert!(item.matches("s1", "m1"));
        assert!(!item.matches("s1", "m2"));
        assert!(!item.matches("s2", "m1"));

        Ok(())
    }

    #[test]
    fn key_displays_service_at_maker() {
        assert_eq!(LineItemKey::new("s1", "m1").to_string(), "s1@m1");
    }
}
