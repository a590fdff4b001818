use crate::domain::starred::JoinedStarredRestaurant;
use crate::transport::http::types::{
    json_422, store_error, AppState, ErrorMessage, StarRequest, UpdateCommentRequest,
};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "All starred restaurants joined with their catalog names", body = [JoinedStarredRestaurant]),
        (status = 500, description = "A starred record references a restaurant missing from the catalog", body = ErrorMessage)
    )
)]
pub async fn list_starred_handler(State(state): State<AppState>) -> impl IntoResponse {
    let starred = state.starred.read().await;
    match starred.list_joined(&state.catalog) {
        Ok(list) => (StatusCode::OK, Json(list)).into_response(),
        Err(e) => store_error("Listing starred restaurants", &e).into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/{id}",
    params(
        ("id" = String, Path, description = "Starred restaurant id")
    ),
    responses(
        (status = 200, description = "The starred restaurant", body = JoinedStarredRestaurant),
        (status = 404, description = "No starred restaurant with that id", body = ErrorMessage)
    )
)]
pub async fn get_starred_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let starred = state.starred.read().await;
    match starred.get_joined_by_id(&state.catalog, &id) {
        Ok(found) => (StatusCode::OK, Json(found)).into_response(),
        Err(e) => store_error("Getting a specific starred restaurant", &e).into_response(),
    }
}

#[utoipa::path(
    post,
    path = "/",
    request_body = StarRequest,
    responses(
        (status = 200, description = "The newly starred restaurant", body = JoinedStarredRestaurant),
        (status = 400, description = "Restaurant is already starred", body = ErrorMessage),
        (status = 404, description = "Restaurant not found in the list of all restaurants", body = ErrorMessage),
        (status = 422, description = "Invalid JSON body", body = ErrorMessage)
    )
)]
pub async fn star_restaurant_handler(
    State(state): State<AppState>,
    request: Result<Json<StarRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match request {
        Ok(v) => v,
        Err(e) => return json_422(e, "{\"id\": \"...\"}").into_response(),
    };

    let mut starred = state.starred.write().await;
    match starred.create(&state.catalog, &request.id) {
        Ok(created) => (StatusCode::OK, Json(created)).into_response(),
        Err(e) => store_error("Adding a starred restaurant", &e).into_response(),
    }
}

#[utoipa::path(
    delete,
    path = "/{id}",
    params(
        ("id" = String, Path, description = "Starred restaurant id")
    ),
    responses(
        (status = 200, description = "Starred restaurant removed"),
        (status = 404, description = "No starred restaurant with that id", body = ErrorMessage)
    )
)]
pub async fn unstar_restaurant_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let mut starred = state.starred.write().await;
    match starred.delete_by_id(&id) {
        Ok(()) => StatusCode::OK.into_response(),
        Err(e) => store_error("Deleting a starred restaurant", &e).into_response(),
    }
}

#[utoipa::path(
    put,
    path = "/{id}",
    params(
        ("id" = String, Path, description = "Starred restaurant id")
    ),
    request_body = UpdateCommentRequest,
    responses(
        (status = 200, description = "Comment replaced"),
        (status = 404, description = "No starred restaurant with that id", body = ErrorMessage),
        (status = 422, description = "Invalid JSON body", body = ErrorMessage)
    )
)]
pub async fn update_comment_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    request: Result<Json<UpdateCommentRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match request {
        Ok(v) => v,
        Err(e) => return json_422(e, "{\"newComment\": \"...\"}").into_response(),
    };

    let mut starred = state.starred.write().await;
    match starred.update_comment(&id, request.new_comment) {
        Ok(()) => StatusCode::OK.into_response(),
        Err(e) => store_error("Updating a starred restaurant", &e).into_response(),
    }
}
