use crate::api::models::AppState;
use crate::api::restaurants::handlers::*;
use axum::{routing::get, Router};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/restaurants", get(list_restaurants_handler))
        .route("/restaurants/details/{id}", get(restaurant_details_handler))
        .route("/restaurants/cuisine/{cuisine}", get(restaurants_by_cuisine_handler))
        .route("/restaurants/filter", get(filter_restaurants_handler))
        .route("/restaurants/sort-by-rating", get(restaurants_by_rating_handler))
}
