//! Notes and recipes library - re-exports for testing and external use.
//!
//! This module provides public access to all the application's modules
//! for testing purposes, plus the shared [`AppState`] and router builder
//! used by the binary.

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod db;
pub mod error;
pub mod extractor;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;
pub mod templates;

use config::Config;
use db::DbPool;
use extractor::MetadataExtractor;

// ============================================================================
// Application State
// ============================================================================

/// Everything a handler needs. Built once at startup and handed to the
/// router; the pool is closed by `main` after the server stops.
#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    pub extractor: MetadataExtractor,
}

impl AppState {
    /// Build the state from an open pool, configuring the page fetcher
    /// from `config`.
    pub fn new(pool: DbPool, config: &Config) -> Result<Self, reqwest::Error> {
        let extractor = MetadataExtractor::new(config.fetch_timeout, config.fetch_use_proxy)?;
        Ok(Self { pool, extractor })
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Notes
        .route("/", get(handlers::index))
        .route("/add_category", post(handlers::add_category))
        .route("/delete_category/{id}", post(handlers::delete_category))
        .route("/add_note", post(handlers::add_note))
        .route("/delete_note/{id}", post(handlers::delete_note))
        // Recipes
        .route("/recipes", get(handlers::recipes))
        .route("/add_category_recipe", post(handlers::add_category_recipe))
        .route(
            "/delete_category_recipe/{id}",
            post(handlers::delete_category_recipe),
        )
        .route("/add_recipe", post(handlers::add_recipe))
        .route("/delete_recipe/{id}", post(handlers::delete_recipe))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// Re-export commonly used types
pub use error::{AppError, AppResult};
pub use extractor::{parse_metadata, ExtractionError};
pub use models::{
    Category, CategoryKind, DbId, NewNote, NewRecipe, Note, Recipe, RecipeMetadata,
    UNTITLED_RECIPE,
};
