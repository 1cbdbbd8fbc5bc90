use foodie_finds_api::api::{self, AppState};
use foodie_finds_api::config::AppConfig;
use foodie_finds_api::storage::{Catalog, SqliteCatalog};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .init();

    info!("🚀 Starting FoodieFinds API Server");

    // Load configuration
    let config = AppConfig::load()?;
    info!("📋 Configuration loaded");
    info!("   - Database: {:?}", config.database.path);
    info!("   - Query timeout: {} ms", config.database.query_timeout_ms);
    info!("   - Boolean storage: {:?}", config.database.boolean_storage);
    info!("   - Server: {}:{}", config.server.host, config.server.port);

    // Open catalog
    info!("💾 Opening database...");
    let catalog = SqliteCatalog::open(&config.database.path, config.database.boolean_storage)?;
    match catalog.counts() {
        Ok(counts) => info!(
            "✅ Database ready ({} restaurants, {} dishes)",
            counts.restaurants, counts.dishes
        ),
        Err(e) => warn!("⚠️  Database opened but tables could not be read: {}", e),
    }

    let state = AppState::new(Arc::new(catalog), config.database.query_timeout());
    let app = api::router(state);

    // Start server
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("🌐 Server listening on http://{}", addr);
    info!("");
    info!("📡 Available endpoints:");
    info!("   GET  /health                        - Health check");
    info!("   GET  /restaurants                   - All restaurants");
    info!("   GET  /restaurants/details/{{id}}      - Restaurant by ID");
    info!("   GET  /restaurants/cuisine/{{cuisine}} - Restaurants by cuisine");
    info!("   GET  /restaurants/filter            - Filter by isVeg, hasOutdoorSeating, isLuxury");
    info!("   GET  /restaurants/sort-by-rating    - Restaurants by rating");
    info!("   GET  /dishes                        - All dishes");
    info!("   GET  /dishes/details/{{id}}           - Dish by ID");
    info!("   GET  /dishes/filter                 - Filter by isVeg");
    info!("   GET  /dishes/sort-by-price          - Dishes by price");
    info!("");
    info!("✨ Server is ready to accept requests!");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Server shutting down gracefully");

    Ok(())
}

/// Graceful shutdown handler
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("🛑 Shutdown signal received");
}
