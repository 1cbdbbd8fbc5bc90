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

pub async fn list_restaurants_handler(
    State(state): State<AppState>,
) -> Result<Json<Rows>, AppError> {
    info!("Listing restaurants");
    run_lookup(&state, Lookup::AllRestaurants).await
}

pub async fn restaurant_details_handler(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<Rows>, AppError> {
    let Path(id) = id?;
    let id = parse_id(&id).map_err(AppError::BadRequest)?;

    info!(id, "Fetching restaurant");
    run_lookup(&state, Lookup::RestaurantById(id)).await
}

pub async fn restaurants_by_cuisine_handler(
    State(state): State<AppState>,
    cuisine: Result<Path<String>, PathRejection>,
) -> Result<Json<Rows>, AppError> {
    let Path(cuisine) = cuisine?;

    info!(cuisine = %cuisine, "Fetching restaurants by cuisine");
    run_lookup(&state, Lookup::RestaurantsByCuisine(cuisine)).await
}

pub async fn filter_restaurants_handler(
    State(state): State<AppState>,
    query: Result<Query<RestaurantFilterQuery>, QueryRejection>,
) -> Result<Json<Rows>, AppError> {
    let Query(query) = query?;
    let filter = query.parse().map_err(AppError::BadRequest)?;

    info!(
        is_veg = filter.is_veg,
        has_outdoor_seating = filter.has_outdoor_seating,
        is_luxury = filter.is_luxury,
        "Filtering restaurants"
    );
    run_lookup(&state, Lookup::RestaurantsByFilter(filter)).await
}

pub async fn restaurants_by_rating_handler(
    State(state): State<AppState>,
) -> Result<Json<Rows>, AppError> {
    info!("Sorting restaurants by rating");
    run_lookup(&state, Lookup::RestaurantsByRating).await
}
