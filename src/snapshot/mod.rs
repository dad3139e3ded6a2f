//! Snapshots
//!
//! The persisted form of a cart is JSON shaped as `{ "items": [...], "total": number }` with
//! camel-cased line item fields. There is no version field: anything that does not decode into a
//! valid cart is rejected as a whole.

use rustc_hash::FxHashSet;
use thiserror::Error;
use tracing::debug;

use crate::cart::{Cart, CartLineItem, LineItemError, LineItemKey};

mod records;

use records::{CartRecord, StoredCartRecord};

/// Errors that can occur while encoding or decoding a cart snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The value was not JSON of the expected shape.
    #[error("malformed cart snapshot")]
    Malformed(#[source] serde_json::Error),

    /// A line item failed validation.
    #[error("invalid line item at index {index}")]
    InvalidItem {
        /// Position of the item in the snapshot
        index: usize,

        /// The validation failure
        source: LineItemError,
    },

    /// Two line items share a key.
    #[error("duplicate line item {0}")]
    DuplicateKey(LineItemKey),

    /// The cart could not be serialized.
    #[error("failed to encode cart snapshot")]
    Encode(#[source] serde_json::Error),
}

/// Serialize a cart into its persisted form.
///
/// # Errors
///
/// Returns [`SnapshotError::Encode`] if serialization fails.
pub fn encode(cart: &Cart) -> Result<String, SnapshotError> {
    serde_json::to_string(&CartRecord::from(cart)).map_err(SnapshotError::Encode)
}

/// Restore a cart from its persisted form.
///
/// The stored total is not trusted: it is recomputed from the items, and a stored total that is
/// not a representable decimal is ignored.
///
/// # Errors
///
/// - [`SnapshotError::Malformed`]: the value is not JSON of the expected shape.
/// - [`SnapshotError::InvalidItem`]: a line item has an empty id, negative price or zero quantity.
/// - [`SnapshotError::DuplicateKey`]: two line items share a service and maker.
pub fn decode(raw: &str) -> Result<Cart, SnapshotError> {
    let record: StoredCartRecord = serde_json::from_str(raw).map_err(SnapshotError::Malformed)?;

    let mut seen = FxHashSet::default();
    let mut items = Vec::with_capacity(record.items.len());

    for (index, item) in record.items.into_iter().enumerate() {
        let item = CartLineItem::new(
            item.service_id,
            item.maker_id,
            item.service_name,
            item.maker_name,
            item.price,
            item.quantity,
        )
        .map_err(|source| SnapshotError::InvalidItem { index, source })?;

        if !seen.insert(item.key().clone()) {
            return Err(SnapshotError::DuplicateKey(item.key().clone()));
        }

        items.push(item);
    }

    let cart = Cart::from_items(items);

    match record.total {
        Some(stored) if stored == cart.total() => {}
        Some(stored) => debug!(
            %stored,
            computed = %cart.total(),
            "stored cart total disagrees with items, using computed total"
        ),
        None => debug!(
            computed = %cart.total(),
            "stored cart total is out of range, using computed total"
        ),
    }

    Ok(cart)
}
