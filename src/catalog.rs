//! Catalog
//!
//! Read-side view of a service as the catalog presents it at the moment a buyer adds it to their
//! cart. The cart copies what it needs from a listing and never looks the listing up again.

use rust_decimal::Decimal;

use crate::cart::{CartLineItem, LineItemError};

/// Maker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MakerProfile {
    /// Maker identifier
    pub maker_id: String,

    /// Maker display name
    pub maker_name: String,
}

/// A service offered by a maker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceListing {
    /// Service identifier
    pub service_id: String,

    /// Service display name
    pub service_name: String,

    /// Current unit price
    pub price: Decimal,

    /// Maker offering the service
    pub maker: MakerProfile,
}

impl ServiceListing {
    /// Snapshot this listing into a line item with the given quantity.
    ///
    /// # Errors
    ///
    /// Returns a [`LineItemError`] if the listing has empty identifiers, a negative price, or the
    /// quantity is zero.
    pub fn line_item(&self, quantity: u32) -> Result<CartLineItem, LineItemError> {
        CartLineItem::new(
            self.service_id.clone(),
            self.maker.maker_id.clone(),
            self.service_name.clone(),
            self.maker.maker_name.clone(),
            self.price,
            quantity,
        )
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::dec;
    use testresult::TestResult;

    use super::*;

    fn listing() -> ServiceListing {
        ServiceListing {
            service_id: "s1".to_string(),
            service_name: "Resin print".to_string(),
            price: dec!(12.50),
            maker: MakerProfile {
                maker_id: "m1".to_string(),
                maker_name: "Print Lab".to_string(),
            },
        }
    }

    #[test]
    fn line_item_copies_listing() -> TestResult {
        let item = listing().line_item(3)?;

        assert_eq!(item.service_id(), "s1");
        assert_eq!(item.maker_id(), "m1");
        assert_eq!(item.service_name(), "Resin print");
        assert_eq!(item.maker_name(), "Print Lab");
        assert_eq!(item.price(), dec!(12.50));
        assert_eq!(item.quantity().get(), 3);

        Ok(())
    }

    #[test]
    fn line_item_is_detached_from_later_changes() -> TestResult {
        let mut listing = listing();
        let item = listing.line_item(1)?;

        listing.price = dec!(99);
        listing.service_name = "Renamed".to_string();

        assert_eq!(item.price(), dec!(12.50));
        assert_eq!(item.service_name(), "Resin print");

        Ok(())
    }

    #[test]
    fn line_item_rejects_zero_quantity() {
        assert_eq!(listing().line_item(0), Err(LineItemError::ZeroQuantity));
    }
}
