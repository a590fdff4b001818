use crate::domain::starred::JoinedStarredRestaurant;
use crate::transport::http::handlers::{health, starred};
use crate::transport::http::types::{ErrorMessage, StarRequest, UpdateCommentRequest};
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        starred::list_starred_handler,
        starred::get_starred_handler,
        starred::star_restaurant_handler,
        starred::unstar_restaurant_handler,
        starred::update_comment_handler
    ),
    components(schemas(
        JoinedStarredRestaurant,
        StarRequest,
        UpdateCommentRequest,
        ErrorMessage
    ))
)]
#[allow(dead_code)]
pub struct ApiDoc;

pub fn create_router(app_state: crate::transport::http::types::AppState) -> Router {
    // "/health" is a static segment, so it wins over the ":id" capture.
    Router::new()
        .route("/health", get(health::healthcheck_handler))
        .route(
            "/",
            get(starred::list_starred_handler).post(starred::star_restaurant_handler),
        )
        .route(
            "/:id",
            get(starred::get_starred_handler)
                .delete(starred::unstar_restaurant_handler)
                .put(starred::update_comment_handler),
        )
        .with_state(app_state)
}
