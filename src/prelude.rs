//! Makercart prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartLineItem, LineItemError, LineItemKey},
    catalog::{MakerProfile, ServiceListing},
    pricing::{line_total, to_money, total_price},
    snapshot::SnapshotError,
    storage::{DisabledStorage, FileStorage, KeyValueStore, MemoryStorage, StorageError},
    store::{CART_STORAGE_KEY, CartCommand, CartStore, ListenerKey, StoreState},
    summary::{SummaryError, write_summary},
};
