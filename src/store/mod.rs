//! Cart Store
//!
//! [`CartStore`] owns the session's cart, mirrors it into a [`KeyValueStore`] after every
//! mutation and restores it from there once at startup.
//!
//! A store starts out [`StoreState::Loading`]. Mutations made before [`CartStore::restore`]
//! are queued and replayed on top of the restored cart, and nothing is written to storage until
//! the stored snapshot has been read. Storage and snapshot failures never reach the caller: a
//! failed read starts an empty cart, a failed write is logged and the in-memory cart stays
//! authoritative.

use std::{fmt, mem};

use slotmap::{SlotMap, new_key_type};
use tracing::{debug, warn};

use crate::{
    cart::{Cart, CartLineItem, LineItemKey},
    snapshot,
    storage::{KeyValueStore, StorageError},
};

mod command;

pub use command::CartCommand;

/// Storage key the cart is persisted under.
pub const CART_STORAGE_KEY: &str = "makercart.cart";

new_key_type! {
    /// Listener Key
    pub struct ListenerKey;
}

type Listener = Box<dyn FnMut(&Cart)>;

/// Whether the stored cart has been read yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreState {
    /// The stored cart has not been read yet.
    Loading,

    /// The cart is restored and mutations apply immediately.
    Ready,
}

/// Owner of the session's cart.
pub struct CartStore<S> {
    storage: S,
    state: StoreState,
    cart: Cart,
    pending: Vec<CartCommand>,
    listeners: SlotMap<ListenerKey, Listener>,
}

impl<S: KeyValueStore> CartStore<S> {
    /// Create a store over `storage` without reading it yet.
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            state: StoreState::Loading,
            cart: Cart::new(),
            pending: Vec::new(),
            listeners: SlotMap::with_key(),
        }
    }

    /// Create a store over `storage` and restore the stored cart straight away.
    pub fn open(storage: S) -> Self {
        let mut store = Self::new(storage);

        store.restore();

        store
    }

    /// Read the stored cart and become ready.
    ///
    /// Does nothing if the store is already ready.
    pub fn restore(&mut self) {
        if self.state == StoreState::Ready {
            return;
        }

        let stored = self.storage.get(CART_STORAGE_KEY);

        self.restore_with(stored);
    }

    /// Become ready using the result of a read the host performed itself, for hosts where the
    /// read happens asynchronously.
    ///
    /// Does nothing if the store is already ready.
    pub fn restore_with(&mut self, stored: Result<Option<String>, StorageError>) {
        if self.state == StoreState::Ready {
            return;
        }

        self.cart = restored_cart(stored);
        self.state = StoreState::Ready;

        let pending = mem::take(&mut self.pending);

        if !pending.is_empty() {
            debug!("replaying {} cart commands queued while loading", pending.len());

            for command in pending {
                command.apply(&mut self.cart);
            }

            self.persist();
        }

        self.notify();
    }

    /// The current loading state.
    pub fn state(&self) -> StoreState {
        self.state
    }

    /// Whether the stored cart is still being read.
    pub fn is_loading(&self) -> bool {
        self.state == StoreState::Loading
    }

    /// The current cart.
    ///
    /// While loading this is empty and does not yet reflect queued mutations.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Add an item, or add its quantity to the existing item with the same service and maker.
    ///
    /// The existing item's price and names are kept when merging.
    pub fn add_to_cart(&mut self, item: CartLineItem) {
        self.dispatch(CartCommand::Add(item));
    }

    /// Remove the item for a service and maker, if present.
    pub fn remove_from_cart(&mut self, service_id: &str, maker_id: &str) {
        self.dispatch(CartCommand::Remove(LineItemKey::new(service_id, maker_id)));
    }

    /// Set the quantity for a service and maker. Zero or below removes the item.
    pub fn update_quantity(&mut self, service_id: &str, maker_id: &str, quantity: i64) {
        self.dispatch(CartCommand::UpdateQuantity {
            key: LineItemKey::new(service_id, maker_id),
            quantity,
        });
    }

    /// Remove every item.
    pub fn clear_cart(&mut self) {
        self.dispatch(CartCommand::Clear);
    }

    /// Apply a command, or queue it while loading.
    pub fn dispatch(&mut self, command: CartCommand) {
        if self.is_loading() {
            debug!(?command, "queueing cart command until the stored cart is restored");

            self.pending.push(command);

            return;
        }

        debug!(?command, "applying cart command");

        let changed = command.apply(&mut self.cart);

        self.persist();

        if changed {
            self.notify();
        }
    }

    /// Register a callback run after the cart is restored and after every change.
    pub fn subscribe(&mut self, listener: impl FnMut(&Cart) + 'static) -> ListenerKey {
        self.listeners.insert(Box::new(listener))
    }

    /// Remove a callback. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, key: ListenerKey) -> bool {
        self.listeners.remove(key).is_some()
    }

    fn persist(&self) {
        let encoded = match snapshot::encode(&self.cart) {
            Ok(encoded) => encoded,
            Err(source) => {
                warn!("failed to encode cart, keeping it in memory only: {source}");
                return;
            }
        };

        if let Err(source) = self.storage.set(CART_STORAGE_KEY, &encoded) {
            warn!("failed to persist cart, keeping it in memory only: {source}");
        }
    }

    fn notify(&mut self) {
        for listener in self.listeners.values_mut() {
            listener(&self.cart);
        }
    }
}

fn restored_cart(stored: Result<Option<String>, StorageError>) -> Cart {
    match stored {
        Ok(Some(raw)) => match snapshot::decode(&raw) {
            Ok(cart) => {
                debug!(items = cart.len(), "restored stored cart");
                cart
            }
            Err(source) => {
                warn!("discarding unreadable stored cart: {source}");
                Cart::new()
            }
        },
        Ok(None) => {
            debug!("no stored cart, starting empty");
            Cart::new()
        }
        Err(source) => {
            warn!("failed to read stored cart, starting empty: {source}");
            Cart::new()
        }
    }
}

impl<S: fmt::Debug> fmt::Debug for CartStore<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("storage", &self.storage)
            .field("state", &self.state)
            .field("cart", &self.cart)
            .field("pending", &self.pending)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
