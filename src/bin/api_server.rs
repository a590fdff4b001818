// src/bin/api_server.rs

use starred_restaurants_api::infra::config;
use starred_restaurants_api::transport;
use starred_restaurants_api::{RestaurantCatalog, StarredStore};
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // --- Catalog Initialization ---
    println!("> Loading restaurant catalog...");
    let catalog = Arc::new(RestaurantCatalog::builtin());
    println!("> Catalog loaded ({} restaurants).", catalog.len());

    // --- Starred Store Initialization ---
    let starred = StarredStore::seeded();
    println!("> Starred store initialized ({} records).", starred.len());

    let app_state = transport::http::AppState {
        catalog,
        starred: Arc::new(RwLock::new(starred)),
    };

    // --- API Server Initialization ---
    println!("> Starting API server...");
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any);
    let app = transport::http::create_router(app_state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", transport::http::ApiDoc::openapi()))
        .layer(cors);
    let bind_addr = config::bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    println!("> API server listening on http://{}", bind_addr);
    println!("> Swagger UI available at /swagger-ui");
    println!("> Press Ctrl+C to shut down");

    tokio::select! {
        result = axum::serve(listener, app) => {
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            println!("\n> Shutdown signal received (Ctrl+C).");
        }
    }

    Ok(())
}
