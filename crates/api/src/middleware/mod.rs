//! Request middleware.
//!
//! - [`admin_gate::admin_gate`] -- Redirects `/admin` requests without a
//!   session cookie to the login page.

pub mod admin_gate;
