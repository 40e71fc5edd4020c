//! CRUD handlers for the `/plants` routes.
//!
//! Each handler extracts its key and/or payload, performs exactly one
//! service call, and either serializes the record or hands a classified
//! failure to [`ApiError`].

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use plantarium_core::Plant;

use crate::api_error::ApiError;
use crate::api_types::{CreatePlantRequest, UpdatePlantRequest};
use crate::AppState;

/// `POST /plants` — 201 with the created record; the stored name is
/// uppercased.
pub async fn create_plant(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreatePlantRequest>,
) -> Result<(StatusCode, Json<Plant>), ApiError> {
    let plant = state
        .plants
        .create(req.into())
        .await
        .map_err(|e| ApiError::from_op(e, "Failed to create plant"))?;
    Ok((StatusCode::CREATED, Json(plant)))
}

/// `GET /plants/{name}` — 200 with the record, 404 when absent.
pub async fn get_plant(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<Plant>, ApiError> {
    let plant = state
        .plants
        .get(&name)
        .await
        .map_err(|e| ApiError::from_op(e, "Failed to fetch plant"))?;
    Ok(Json(plant))
}

/// `PATCH /plants/{name}` — 200 with the record after the update. Supplied
/// fields are applied verbatim; the name is not re-normalized.
pub async fn update_plant(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    Json(req): Json<UpdatePlantRequest>,
) -> Result<Json<Plant>, ApiError> {
    let plant = state
        .plants
        .update(&name, req.into())
        .await
        .map_err(|e| ApiError::from_op(e, "Failed to update plant"))?;
    Ok(Json(plant))
}

/// `DELETE /plants/{name}` — 200 with the record as it existed before
/// deletion.
pub async fn delete_plant(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<Plant>, ApiError> {
    let plant = state
        .plants
        .delete(&name)
        .await
        .map_err(|e| ApiError::from_op(e, "Failed to delete plant"))?;
    Ok(Json(plant))
}
