//! Makercart
//!
//! Makercart is the client-side shopping cart of a maker marketplace: line items snapshotted from
//! the service catalog, quantity aggregation, exact totals and a cart that survives restarts by
//! mirroring itself into durable key-value storage.

pub mod cart;
pub mod catalog;
pub mod prelude;
pub mod pricing;
pub mod snapshot;
pub mod storage;
pub mod store;
pub mod summary;
