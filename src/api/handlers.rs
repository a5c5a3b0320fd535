//! API handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::api::AppState;
use crate::types::{Item, ItemId, ItemRequest, MessageResponse};
use crate::Error;

pub const WELCOME_MESSAGE: &str = "Welcome to the CRUD API!";

/// Error body, `{"detail": ...}`
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

/// Map a service error onto a status code and error body.
fn error_response(err: Error) -> ApiError {
    let (status, detail) = match &err {
        Error::NotFound(_) => (StatusCode::NOT_FOUND, "Item not found".to_string()),
        Error::StoreUnavailable { .. } => (StatusCode::SERVICE_UNAVAILABLE, err.to_string()),
        _ => {
            tracing::error!(error = %err, "Request failed");
            (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
        }
    };
    (status, Json(ErrorResponse { detail }))
}

/// Landing route
pub async fn home() -> Json<MessageResponse> {
    Json(MessageResponse::new(WELCOME_MESSAGE))
}

/// Health check with store status
pub async fn health(State(state): State<AppState>) -> Response {
    let store = state.store();
    match store.ping().await {
        Ok(()) => Json(HealthResponse {
            status: "healthy".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            backend: store.kind().to_string(),
            store: "ready".to_string(),
        })
        .into_response(),
        Err(err) => {
            tracing::warn!(error = %err, "Health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "unavailable".to_string(),
                    version: env!("CARGO_PKG_VERSION").to_string(),
                    backend: store.kind().to_string(),
                    store: err.to_string(),
                }),
            )
                .into_response()
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub backend: String,
    pub store: String,
}

pub async fn create_item(
    State(state): State<AppState>,
    Json(payload): Json<ItemRequest>,
) -> Result<Json<Item>, ApiError> {
    let item = state.items.create(payload).await.map_err(error_response)?;
    Ok(Json(item))
}

pub async fn list_items(State(state): State<AppState>) -> Result<Json<Vec<Item>>, ApiError> {
    let items = state.items.list().await.map_err(error_response)?;
    Ok(Json(items))
}

pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<ItemId>,
    Json(payload): Json<ItemRequest>,
) -> Result<Json<Item>, ApiError> {
    let item = state
        .items
        .update(id, payload)
        .await
        .map_err(error_response)?;
    Ok(Json(item))
}

pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<ItemId>,
) -> Result<Json<MessageResponse>, ApiError> {
    let confirmation = state.items.delete(id).await.map_err(error_response)?;
    Ok(Json(confirmation))
}
