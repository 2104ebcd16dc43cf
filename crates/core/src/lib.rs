//! Domain layer for the dealership site.
//!
//! Pure logic only: the vehicle record, display formatters, the similarity
//! ranking used for "similar vehicles" suggestions, browse filtering, and
//! financing estimates. Nothing in this crate touches the filesystem or
//! the network.

pub mod constants;
pub mod error;
pub mod finance;
pub mod format;
pub mod inventory;
pub mod similarity;
pub mod types;
pub mod vehicle;
