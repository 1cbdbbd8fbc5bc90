pub mod dishes;
pub mod handlers;
pub mod models;
pub mod restaurants;

// Re-exports
pub use models::*;

use crate::storage::CatalogCounts;
use axum::{extract::State, routing::get, Json, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::warn;

/// Build the full router: health, restaurant and dish routes, permissive
/// CORS and request tracing.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .merge(restaurants::routes())
        .merge(dishes::routes())
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let (status, counts) = match handlers::with_catalog(&state, |catalog| catalog.counts()).await {
        Ok(counts) => ("healthy", counts),
        Err(e) => {
            warn!(error = ?e, "Health check could not read catalog");
            ("degraded", CatalogCounts::default())
        }
    };

    Json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        restaurants: counts.restaurants,
        dishes: counts.dishes,
    })
}
