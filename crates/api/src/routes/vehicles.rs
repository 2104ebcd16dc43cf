//! Route definitions for the JSON inventory API.

use axum::routing::get;
use axum::Router;

use crate::handlers::vehicles;
use crate::state::AppState;

/// Inventory API routes.
///
/// ```text
/// GET    /api/vehicles            -> list_vehicles
/// POST   /api/vehicles            -> create_vehicle
/// DELETE /api/vehicles?id=X       -> delete_vehicle
/// GET    /api/vehicles/similar    -> similar_vehicles
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/vehicles",
            get(vehicles::list_vehicles)
                .post(vehicles::create_vehicle)
                .delete(vehicles::delete_vehicle),
        )
        .route("/api/vehicles/similar", get(vehicles::similar_vehicles))
}
