use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::error::ApiError;
use super::state::AppState;
use crate::core::{CreateLocationRequest, Location, NearestLocation};

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

// ─── GET / ───────────────────────────────────────────────────────

pub async fn hello() -> &'static str {
    "Hello!"
}

// ─── POST /locations ─────────────────────────────────────────────

pub async fn create_location(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateLocationRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Location>), ApiError> {
    let Json(req) = payload.map_err(|rejection| {
        tracing::warn!("Failed to bind location request: {}", rejection.body_text());
        ApiError::bad_request(rejection.body_text())
    })?;

    let created = state
        .service
        .create_location(req)
        .await
        .map_err(|e| ApiError::from_domain(e, "Failed to create location"))?;

    Ok((StatusCode::CREATED, Json(created)))
}

// ─── GET /locations ──────────────────────────────────────────────

pub async fn list_locations(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Location>>, ApiError> {
    let locations = state
        .service
        .get_all_locations()
        .await
        .map_err(|e| ApiError::from_domain(e, "Failed to get locations"))?;
    Ok(Json(locations))
}

// ─── GET /locations/nearest ──────────────────────────────────────

#[derive(Deserialize)]
pub struct NearestQuery {
    pub lat: Option<String>,
    pub lng: Option<String>,
}

fn parse_coordinate(raw: &str, field: &str) -> Result<f64, ApiError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| ApiError::bad_request(format!("Invalid {} value", field)))
}

pub async fn nearest_location(
    State(state): State<Arc<AppState>>,
    query: Result<Query<NearestQuery>, QueryRejection>,
) -> Result<Json<NearestLocation>, ApiError> {
    let Query(params) = query.map_err(|rejection| {
        tracing::warn!("Failed to bind nearest query: {}", rejection.body_text());
        ApiError::bad_request(rejection.body_text())
    })?;
    let (lat, lng) = match (params.lat.as_deref(), params.lng.as_deref()) {
        (Some(lat), Some(lng)) if !lat.is_empty() && !lng.is_empty() => (lat, lng),
        _ => {
            return Err(ApiError::bad_request(
                "lat and lng query parameters are required",
            ))
        }
    };
    let lat = parse_coordinate(lat, "latitude")?;
    let lng = parse_coordinate(lng, "longitude")?;

    let nearest = state
        .service
        .find_nearest(lat, lng)
        .await
        .map_err(|e| ApiError::from_domain(e, "Failed to find nearest location"))?;
    Ok(Json(nearest))
}

// ─── DELETE /locations/{name} ────────────────────────────────────

pub async fn delete_location(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    delete_named(&state, &name).await
}

/// `/locations/nearest` is a static route, so a location literally named
/// "nearest" is deleted through here.
pub async fn delete_location_named_nearest(
    State(state): State<Arc<AppState>>,
) -> Result<Json<MessageResponse>, ApiError> {
    delete_named(&state, "nearest").await
}

pub async fn delete_without_name() -> ApiError {
    ApiError::bad_request("Location name is required")
}

async fn delete_named(state: &AppState, name: &str) -> Result<Json<MessageResponse>, ApiError> {
    if name.trim().is_empty() {
        return Err(ApiError::bad_request("Location name is required"));
    }

    state
        .service
        .delete_location_by_name(name)
        .await
        .map_err(|e| ApiError::from_domain(e, "Failed to delete location"))?;

    Ok(Json(MessageResponse {
        message: "Location deleted successfully".to_string(),
    }))
}
