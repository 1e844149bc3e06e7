//! Ads handlers: create, read, delete. Listing and update are not offered.

use crate::error::AppError;
use crate::model::AdView;
use crate::response::{created, deleted};
use crate::service::AdService;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::IntoResponse,
    Json,
};
use serde_json::Value;

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(body) = body.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let ad = AdService::create(state.ads.as_ref(), &body).await?;
    Ok(created(ad.id))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<Json<AdView>, AppError> {
    let view = AdService::read(state.ads.as_ref(), &id_str).await?;
    Ok(Json(view))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    AdService::delete(state.ads.as_ref(), &id_str).await?;
    Ok(deleted())
}

pub async fn list() -> AppError {
    AppError::MethodNotAllowed("Listing ads is not supported.".into())
}
