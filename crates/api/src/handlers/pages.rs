//! Handlers for the server-rendered site.
//!
//! Public pages read the inventory on every request. The admin handlers
//! reuse the JSON API's validation and persistence and render failures
//! inline instead of as JSON.

use std::collections::HashMap;

use autolot_core::constants::{DEFAULT_APR, DEFAULT_DOWN_PAYMENT_RATIO, DEFAULT_LOAN_TERM};
use autolot_core::error::CoreError;
use autolot_core::finance::estimate_loan;
use autolot_core::inventory::{distinct_makes, featured, InventoryFilter};
use autolot_core::similarity::{SimilarCriteria, DEFAULT_SIMILAR_LIMIT};
use autolot_core::vehicle::NewVehicle;
use autolot_store::repositories::VehicleRepo;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::http::header::SET_COOKIE;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::AppError;
use crate::handlers::vehicles::ensure_writable;
use crate::middleware::admin_gate::{has_session_cookie, safe_redirect_target, SESSION_COOKIE};
use crate::pages::{self, admin::AdminNotice, marketing::ContactNotice, marketing::FinancingView};
use crate::state::AppState;

/// Vehicles shown in the home page's featured row.
const FEATURED_COUNT: usize = 6;

/// Price pre-filled on the financing page when none is given.
const DEFAULT_FINANCE_PRICE: i64 = 25_000;

// ---------------------------------------------------------------------------
// Marketing pages
// ---------------------------------------------------------------------------

/// GET /
pub async fn home(State(state): State<AppState>) -> Html<String> {
    let vehicles = VehicleRepo::list(&state.store).await;
    let picks = featured(&vehicles, FEATURED_COUNT);
    Html(pages::home::render(&picks, vehicles.len()))
}

/// GET /about
pub async fn about(State(state): State<AppState>) -> Html<String> {
    let count = VehicleRepo::list(&state.store).await.len();
    Html(pages::marketing::about(count))
}

/// GET /faq
pub async fn faq() -> Html<String> {
    Html(pages::marketing::faq())
}

/// GET /contact
pub async fn contact() -> Html<String> {
    Html(pages::marketing::contact(ContactNotice::None))
}

/// Fields posted by the contact form.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ContactForm {
    fn problem(&self) -> Option<&'static str> {
        if self.name.trim().is_empty() {
            Some("Please tell us your name.")
        } else if !self.email.contains('@') {
            Some("Please enter a valid email address.")
        } else if self.message.trim().is_empty() {
            Some("Please include a message.")
        } else {
            None
        }
    }
}

/// POST /contact
///
/// Inquiries are logged, not stored or emailed.
pub async fn submit_contact(Form(form): Form<ContactForm>) -> Response {
    if let Some(problem) = form.problem() {
        return (
            StatusCode::BAD_REQUEST,
            Html(pages::marketing::contact(ContactNotice::Invalid(problem))),
        )
            .into_response();
    }

    tracing::info!(
        name = %form.name.trim(),
        email = %form.email.trim(),
        phone = %form.phone.trim(),
        message_len = form.message.len(),
        "Contact inquiry received",
    );

    Html(pages::marketing::contact(ContactNotice::Sent(form.name.trim()))).into_response()
}

/// Query parameters for `/financing`. All optional and parsed leniently.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FinancingParams {
    pub price: Option<String>,
    pub down_payment: Option<String>,
    pub apr: Option<String>,
    pub term: Option<String>,
}

fn parse_amount(raw: Option<&str>) -> Option<i64> {
    let cleaned: String = raw?
        .chars()
        .filter(|c| !matches!(c, '$' | ',' | ' '))
        .collect();
    cleaned
        .parse::<f64>()
        .ok()
        .filter(|f| f.is_finite())
        .map(|f| f.round() as i64)
}

impl FinancingParams {
    fn into_view(self) -> FinancingView {
        let price = parse_amount(self.price.as_deref()).unwrap_or(DEFAULT_FINANCE_PRICE);
        let down_payment = parse_amount(self.down_payment.as_deref())
            .unwrap_or_else(|| (price as f64 * DEFAULT_DOWN_PAYMENT_RATIO).round() as i64);
        let apr_percent = self
            .apr
            .as_deref()
            .and_then(|raw| raw.trim().trim_end_matches('%').parse::<f64>().ok())
            .unwrap_or(DEFAULT_APR);
        let term_months = self
            .term
            .as_deref()
            .and_then(|raw| raw.trim().parse::<u32>().ok())
            .unwrap_or(DEFAULT_LOAN_TERM);

        let estimate =
            estimate_loan(price, down_payment, apr_percent, term_months).map_err(|e| match e {
                CoreError::Validation(msg) => msg,
                other => other.to_string(),
            });

        FinancingView {
            price,
            down_payment,
            apr_percent,
            term_months,
            estimate,
        }
    }
}

/// GET /financing?price&down_payment&apr&term
pub async fn financing(Query(params): Query<FinancingParams>) -> Html<String> {
    Html(pages::marketing::financing(&params.into_view()))
}

// ---------------------------------------------------------------------------
// Inventory pages
// ---------------------------------------------------------------------------

/// GET /inventory
///
/// A query string that cannot be parsed shows the unfiltered inventory.
pub async fn inventory(
    State(state): State<AppState>,
    filter: Result<Query<InventoryFilter>, QueryRejection>,
) -> Html<String> {
    let filter = match filter {
        Ok(Query(filter)) => filter,
        Err(rejection) => {
            tracing::debug!(error = %rejection.body_text(), "Ignoring malformed inventory filter");
            InventoryFilter::default()
        }
    };

    let vehicles = VehicleRepo::list(&state.store).await;
    let makes = distinct_makes(&vehicles);
    let results = filter.apply(&vehicles);

    Html(pages::inventory::list(
        &filter,
        &results,
        &makes,
        vehicles.len(),
    ))
}

/// GET /inventory/{id}
pub async fn vehicle_detail(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let Some(vehicle) = VehicleRepo::find_by_id(&state.store, &id).await else {
        return (
            StatusCode::NOT_FOUND,
            Html(pages::message_page(
                "Vehicle not found",
                "This vehicle may have been sold or removed from our inventory.",
            )),
        )
            .into_response();
    };

    let criteria = SimilarCriteria::like(&vehicle, DEFAULT_SIMILAR_LIMIT);
    let similar = VehicleRepo::find_similar(&state.store, &criteria).await;

    Html(pages::inventory::detail(&vehicle, &similar)).into_response()
}

/// Fallback for unmatched paths.
pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Html(pages::message_page(
            "Page not found",
            "The page you are looking for does not exist.",
        )),
    )
        .into_response()
}

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginParams {
    pub redirect: Option<String>,
}

/// Fields posted by the login form.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    pub redirect: Option<String>,
    pub username: String,
    pub password: String,
}

fn session_cookie() -> String {
    format!("{SESSION_COOKIE}=1; Path=/; HttpOnly; SameSite=Lax")
}

fn cleared_session_cookie() -> String {
    format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}

/// GET /login?redirect=...
///
/// Visitors who already hold a session go straight to their destination.
pub async fn login_form(headers: HeaderMap, Query(params): Query<LoginParams>) -> Response {
    let target = safe_redirect_target(params.redirect.as_deref());
    if has_session_cookie(&headers) {
        return Redirect::to(target).into_response();
    }
    Html(pages::admin::login(target, None)).into_response()
}

/// POST /login
///
/// Any non-empty username and password are accepted. The cookie only marks
/// presence; it carries no identity.
pub async fn login(Form(form): Form<LoginForm>) -> Response {
    let target = safe_redirect_target(form.redirect.as_deref());

    if form.username.trim().is_empty() || form.password.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Html(pages::admin::login(
                target,
                Some("Enter a username and password."),
            )),
        )
            .into_response();
    }

    tracing::info!(username = %form.username.trim(), "Admin session started");

    ([(SET_COOKIE, session_cookie())], Redirect::to(target)).into_response()
}

/// GET /logout
pub async fn logout() -> Response {
    ([(SET_COOKIE, cleared_session_cookie())], Redirect::to("/")).into_response()
}

// ---------------------------------------------------------------------------
// Admin
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AdminParams {
    pub status: Option<String>,
}

/// GET /admin
pub async fn admin_dashboard(
    State(state): State<AppState>,
    Query(params): Query<AdminParams>,
) -> Html<String> {
    let notice = match params.status.as_deref() {
        Some("created") => AdminNotice::Created,
        Some("deleted") => AdminNotice::Deleted,
        _ => AdminNotice::None,
    };
    let vehicles = VehicleRepo::list(&state.store).await;
    Html(pages::admin::dashboard(
        &vehicles,
        state.store.is_writable(),
        notice,
    ))
}

/// Re-render the dashboard with an error banner, using the status the JSON
/// API would have answered with.
async fn admin_error(state: &AppState, err: AppError) -> Response {
    let (status, _code, message) = err.classify();
    let vehicles = VehicleRepo::list(&state.store).await;
    (
        status,
        Html(pages::admin::dashboard(
            &vehicles,
            state.store.is_writable(),
            AdminNotice::Error(&message),
        )),
    )
        .into_response()
}

/// POST /admin/vehicles
///
/// Form fields use the JSON API's names; values arrive as strings and are
/// validated by the same routine. The write gate is checked first, as in
/// the JSON handler.
pub async fn admin_create_vehicle(
    State(state): State<AppState>,
    Form(form): Form<HashMap<String, String>>,
) -> Response {
    if let Err(err) = ensure_writable(&state) {
        return admin_error(&state, err).await;
    }

    let fields: Map<String, Value> = form
        .into_iter()
        .map(|(key, value)| (key, Value::String(value)))
        .collect();

    let result = match NewVehicle::from_fields(&fields) {
        Ok(input) => VehicleRepo::create(&state.store, input)
            .await
            .map_err(AppError::from),
        Err(e) => Err(AppError::from(e)),
    };

    match result {
        Ok(vehicle) => {
            tracing::info!(vehicle_id = %vehicle.id, title = %vehicle.title, "Vehicle created from admin form");
            Redirect::to("/admin?status=created").into_response()
        }
        Err(err) => admin_error(&state, err).await,
    }
}

/// POST /admin/vehicles/{id}/delete
pub async fn admin_delete_vehicle(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    match VehicleRepo::delete(&state.store, &id).await {
        Ok(true) => {
            tracing::info!(vehicle_id = %id, "Vehicle deleted from admin form");
            Redirect::to("/admin?status=deleted").into_response()
        }
        Ok(false) => {
            admin_error(
                &state,
                CoreError::NotFound {
                    entity: "Vehicle",
                    id,
                }
                .into(),
            )
            .await
        }
        Err(e) => admin_error(&state, e.into()).await,
    }
}
