//! Route tables. Each submodule returns a `Router<AppState>` merged at the
//! root by [`crate::router::build_app_router`].

pub mod health;
pub mod pages;
pub mod vehicles;
