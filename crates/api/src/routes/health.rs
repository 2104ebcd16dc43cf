use autolot_store::repositories::VehicleRepo;
use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether create and delete can persist.
    pub writes_enabled: bool,
    /// Number of vehicles currently readable from the inventory file.
    pub vehicle_count: usize,
}

/// GET /health -- returns service status and inventory summary.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let vehicle_count = VehicleRepo::list(&state.store).await.len();

    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        writes_enabled: state.store.is_writable(),
        vehicle_count,
    })
}

/// Mount health check routes at the root.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
