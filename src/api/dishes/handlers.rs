use crate::api::handlers::run_lookup;
use crate::api::models::*;
use crate::storage::{Lookup, Rows};
use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use tracing::info;

pub async fn list_dishes_handler(State(state): State<AppState>) -> Result<Json<Rows>, AppError> {
    info!("Listing dishes");
    run_lookup(&state, Lookup::AllDishes).await
}

pub async fn dish_details_handler(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<Rows>, AppError> {
    let Path(id) = id?;
    let id = parse_id(&id).map_err(AppError::BadRequest)?;

    info!(id, "Fetching dish");
    run_lookup(&state, Lookup::DishById(id)).await
}

pub async fn filter_dishes_handler(
    State(state): State<AppState>,
    query: Result<Query<DishFilterQuery>, QueryRejection>,
) -> Result<Json<Rows>, AppError> {
    let Query(query) = query?;
    let is_veg = query.parse().map_err(AppError::BadRequest)?;

    info!(is_veg, "Filtering dishes");
    run_lookup(&state, Lookup::DishesByFilter { is_veg }).await
}

pub async fn dishes_by_price_handler(State(state): State<AppState>) -> Result<Json<Rows>, AppError> {
    info!("Sorting dishes by price");
    run_lookup(&state, Lookup::DishesByPrice).await
}
