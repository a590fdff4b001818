use crate::domain::catalog::RestaurantCatalog;
use crate::domain::starred::{StarredStore, StoreError};
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;
use utoipa::ToSchema;

/// Shared state handed to every handler.
///
/// The catalog is immutable after startup and needs no lock. The starred
/// store takes an `RwLock` because axum serves requests in parallel: read
/// paths share the read lock, mutations take the write lock.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<RestaurantCatalog>,
    pub starred: Arc<RwLock<StarredStore>>,
}

/// Body of `POST /`: the id of the restaurant to star.
#[derive(Deserialize, Debug, ToSchema)]
pub struct StarRequest {
    pub id: String,
}

/// Body of `PUT /:id`: the replacement comment.
#[derive(Deserialize, Debug, ToSchema)]
pub struct UpdateCommentRequest {
    #[serde(rename = "newComment")]
    pub new_comment: String,
}

/// JSON payload returned on every failure path.
#[derive(Serialize, Debug, ToSchema)]
pub struct ErrorMessage {
    pub message: String,
}

pub fn json_422(err: JsonRejection, expected: &str) -> (StatusCode, Json<ErrorMessage>) {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ErrorMessage {
            message: format!("Invalid JSON body: {} (expected: {})", err, expected),
        }),
    )
}

/// Maps a store failure onto its HTTP status, prefixing the message with the
/// operation that failed (e.g. "Adding a starred restaurant").
pub fn store_error(operation: &str, err: &StoreError) -> (StatusCode, Json<ErrorMessage>) {
    let status = match err {
        StoreError::AlreadyStarred { .. } => StatusCode::BAD_REQUEST,
        StoreError::StarredNotFound { .. } | StoreError::RestaurantNotFound { .. } => {
            StatusCode::NOT_FOUND
        }
        StoreError::CatalogInconsistent { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (
        status,
        Json(ErrorMessage {
            message: format!("{} failed. {}.", operation, err),
        }),
    )
}
