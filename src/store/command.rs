//! Cart commands

use crate::cart::{Cart, CartLineItem, LineItemKey};

/// A mutation requested of a [`CartStore`](super::CartStore).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartCommand {
    /// Add an item, or add to the quantity of the item with the same key.
    Add(CartLineItem),

    /// Remove the item with this key.
    Remove(LineItemKey),

    /// Set the quantity of the item with this key; zero or below removes it.
    UpdateQuantity {
        /// Item to update
        key: LineItemKey,

        /// New quantity
        quantity: i64,
    },

    /// Remove every item.
    Clear,
}

impl CartCommand {
    /// Apply the command to a cart. Returns whether the cart changed.
    pub(crate) fn apply(self, cart: &mut Cart) -> bool {
        match self {
            CartCommand::Add(item) => {
                cart.add(item);
                true
            }
            CartCommand::Remove(key) => cart.remove(&key.service_id, &key.maker_id),
            CartCommand::UpdateQuantity { key, quantity } => {
                cart.set_quantity(&key.service_id, &key.maker_id, quantity)
            }
            CartCommand::Clear => {
                let changed = !cart.is_empty();
                cart.clear();
                changed
            }
        }
    }
}
