use crate::api::models::*;
use crate::storage::{Catalog, Lookup, Rows, StoreError};
use axum::Json;
use tracing::info;

/// Run a blocking catalog call on the blocking pool, bounded by the
/// request timeout.
pub async fn with_catalog<T, F>(state: &AppState, f: F) -> Result<T, AppError>
where
    T: Send + 'static,
    F: FnOnce(&dyn Catalog) -> Result<T, StoreError> + Send + 'static,
{
    let catalog = state.catalog.clone();
    let task = tokio::task::spawn_blocking(move || f(catalog.as_ref()));

    tokio::time::timeout(state.query_timeout, task)
        .await
        .map_err(|_| {
            AppError::Timeout(format!(
                "Query timed out after {} ms",
                state.query_timeout.as_millis()
            ))
        })?
        .map_err(|e| AppError::Internal(format!("Query task failed: {}", e)))?
        .map_err(|e| AppError::Internal(e.to_string()))
}

/// Execute one lookup and shape the result: the envelope on a match,
/// a 404 message when nothing matched.
pub async fn run_lookup(state: &AppState, lookup: Lookup) -> Result<Json<Rows>, AppError> {
    let query = lookup.clone();
    let rows = with_catalog(state, move |catalog| catalog.fetch(&query)).await?;

    if rows.is_empty() {
        return Err(AppError::NotFound(lookup.not_found_message()));
    }

    info!(found = rows.len(), "Lookup complete");

    Ok(Json(rows))
}
