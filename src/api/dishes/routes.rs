use crate::api::dishes::handlers::*;
use crate::api::models::AppState;
use axum::{routing::get, Router};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/dishes", get(list_dishes_handler))
        .route("/dishes/details/{id}", get(dish_details_handler))
        .route("/dishes/filter", get(filter_dishes_handler))
        .route("/dishes/sort-by-price", get(dishes_by_price_handler))
}
