//! Flat-file persistence for the vehicle inventory.
//!
//! The whole inventory lives in one pretty-printed JSON array. Every write
//! rewrites the file; writes are refused unless explicitly enabled because
//! the hosting target may mount the data directory read-only.

pub mod repositories;
pub mod store;

pub use store::{Change, StoreError, VehicleStore};
