//! Notes and recipes - a personal notebook web server.
//!
//! The application is organized into the following modules:
//!
//! - `models`: Rows for categories, notes and recipes, plus form payloads
//! - `db` / `repository`: SQLite pool, schema bootstrap and queries
//! - `extractor`: Recipe page title / preview image extraction
//! - `service`: Category and item operations
//! - `templates`: HTML rendering
//! - `handlers`: HTTP route handlers

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use recipe_notes::{build_router, config::Config, db, AppState};

// ============================================================================
// Main
// ============================================================================

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "recipe_notes=debug,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();

    let pool = db::create_pool(&config.database_url)
        .await
        .expect("Failed to open database");
    db::health_check(&pool)
        .await
        .expect("Database health check failed");
    db::init_schema(&pool)
        .await
        .expect("Failed to create database schema");
    tracing::info!(database_url = %config.database_url, "Database ready");

    let addr = config.bind_addr();
    let state = Arc::new(AppState::new(pool.clone(), &config).expect("Failed to build HTTP client"));
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| panic!("Failed to bind to {addr}: {e}"));
    tracing::info!("Notes server running at http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    pool.close().await;
    tracing::info!("Database closed, bye");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
