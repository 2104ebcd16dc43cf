//! Handlers for the JSON inventory API.
//!
//! Create and delete check the write-enable flag before anything else, so a
//! read-only deployment answers 501 regardless of the request's content.

use autolot_core::error::CoreError;
use autolot_core::similarity::{clamp_limit, SimilarCriteria};
use autolot_core::vehicle::NewVehicle;
use autolot_store::repositories::VehicleRepo;
use autolot_store::StoreError;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Query parameters for `DELETE /api/vehicles`.
#[derive(Debug, Deserialize)]
pub struct DeleteParams {
    pub id: Option<String>,
}

/// Query parameters for `GET /api/vehicles/similar`.
///
/// `limit` is taken as text so a malformed value falls back to the default
/// instead of rejecting the request.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarParams {
    pub make: Option<String>,
    pub model: Option<String>,
    pub body_type: Option<String>,
    pub exclude: Option<String>,
    pub limit: Option<String>,
}

impl SimilarParams {
    pub fn into_criteria(self) -> SimilarCriteria {
        let limit = self.limit.and_then(|raw| raw.trim().parse::<usize>().ok());
        SimilarCriteria {
            make: self.make,
            model: self.model,
            body_type: self.body_type,
            exclude: self.exclude,
            limit: clamp_limit(limit),
        }
    }
}

/// 501 `PERSISTENCE_DISABLED` before any input is looked at.
pub(crate) fn ensure_writable(state: &AppState) -> AppResult<()> {
    if state.store.is_writable() {
        Ok(())
    } else {
        Err(StoreError::WritesDisabled.into())
    }
}

/// GET /api/vehicles
///
/// The full inventory as a bare array, in insertion order.
pub async fn list_vehicles(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let vehicles = VehicleRepo::list(&state.store).await;
    Ok(Json(vehicles))
}

/// POST /api/vehicles
///
/// Validate the body's fields, assign an id and timestamp, append, persist.
/// Responds 201 with the stored record.
pub async fn create_vehicle(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    ensure_writable(&state)?;

    let Json(body) = body.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let fields = body
        .as_object()
        .ok_or_else(|| AppError::BadRequest("Request body must be a JSON object".into()))?;

    let input = NewVehicle::from_fields(fields)?;
    let vehicle = VehicleRepo::create(&state.store, input).await?;

    tracing::info!(vehicle_id = %vehicle.id, title = %vehicle.title, "Vehicle created");

    Ok((StatusCode::CREATED, Json(vehicle)))
}

/// DELETE /api/vehicles?id=X
///
/// Remove the first vehicle with the given id.
pub async fn delete_vehicle(
    State(state): State<AppState>,
    Query(params): Query<DeleteParams>,
) -> AppResult<impl IntoResponse> {
    ensure_writable(&state)?;

    let id = params
        .id
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AppError::BadRequest("Vehicle id is required".into()))?;

    if !VehicleRepo::delete(&state.store, &id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Vehicle",
            id,
        }));
    }

    tracing::info!(vehicle_id = %id, "Vehicle deleted");

    Ok(Json(json!({ "success": true })))
}

/// GET /api/vehicles/similar?make&model&bodyType&exclude&limit
///
/// Vehicles ranked by weighted make/model/body type matches.
pub async fn similar_vehicles(
    State(state): State<AppState>,
    Query(params): Query<SimilarParams>,
) -> AppResult<impl IntoResponse> {
    let criteria = params.into_criteria();
    let vehicles = VehicleRepo::find_similar(&state.store, &criteria).await;
    Ok(Json(vehicles))
}

#[cfg(test)]
mod tests {
    use super::*;
    use autolot_core::similarity::{DEFAULT_SIMILAR_LIMIT, MAX_SIMILAR_LIMIT};

    fn params(limit: Option<&str>) -> SimilarParams {
        SimilarParams {
            make: Some("Honda".into()),
            model: None,
            body_type: None,
            exclude: None,
            limit: limit.map(str::to_string),
        }
    }

    #[test]
    fn limit_parsing() {
        assert_eq!(params(None).into_criteria().limit, DEFAULT_SIMILAR_LIMIT);
        assert_eq!(params(Some("5")).into_criteria().limit, 5);
        assert_eq!(params(Some("lots")).into_criteria().limit, DEFAULT_SIMILAR_LIMIT);
        assert_eq!(params(Some("-1")).into_criteria().limit, DEFAULT_SIMILAR_LIMIT);
        assert_eq!(params(Some("9999")).into_criteria().limit, MAX_SIMILAR_LIMIT);
    }
}
