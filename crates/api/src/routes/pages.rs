//! Route definitions for the server-rendered site.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::pages;
use crate::state::AppState;

/// Page routes. Everything under `/admin` sits behind the admin gate.
///
/// ```text
/// GET       /                              -> home
/// GET       /about                         -> about
/// GET|POST  /contact                       -> contact / submit_contact
/// GET       /financing                     -> financing
/// GET       /faq                           -> faq
/// GET       /inventory                     -> inventory
/// GET       /inventory/{id}                -> vehicle_detail
/// GET|POST  /login                         -> login_form / login
/// GET       /logout                        -> logout
/// GET       /admin                         -> admin_dashboard
/// POST      /admin/vehicles                -> admin_create_vehicle
/// POST      /admin/vehicles/{id}/delete    -> admin_delete_vehicle
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::home))
        .route("/about", get(pages::about))
        .route("/contact", get(pages::contact).post(pages::submit_contact))
        .route("/financing", get(pages::financing))
        .route("/faq", get(pages::faq))
        .route("/inventory", get(pages::inventory))
        .route("/inventory/{id}", get(pages::vehicle_detail))
        .route("/login", get(pages::login_form).post(pages::login))
        .route("/logout", get(pages::logout))
        .route("/admin", get(pages::admin_dashboard))
        .route("/admin/vehicles", post(pages::admin_create_vehicle))
        .route(
            "/admin/vehicles/{id}/delete",
            post(pages::admin_delete_vehicle),
        )
}
