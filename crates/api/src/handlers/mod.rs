//! Request handlers, grouped by surface.
//!
//! - [`vehicles`] -- JSON inventory API under `/api/vehicles`.
//! - [`pages`] -- server-rendered site, including the admin area.

pub mod pages;
pub mod vehicles;
