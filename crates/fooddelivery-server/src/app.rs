// File: src/app.rs
// Purpose: Shared state and router

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{routing::get, Router};
use restaurant_store::{MemoryCatalog, RestaurantLookup};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::handlers;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn RestaurantLookup>,
    pub app_name: Arc<str>,
    pub forward_to_lookup: bool,
}

impl AppState {
    pub fn new(config: &Config, catalog: Arc<dyn RestaurantLookup>) -> Self {
        Self {
            catalog,
            app_name: Arc::from(config.project.name.as_str()),
            forward_to_lookup: config.search.forward_to_lookup,
        }
    }

    /// Build state from config, loading the catalog seed if one is set
    pub async fn from_config(config: &Config) -> Result<Self> {
        let catalog = match &config.catalog.seed_file {
            Some(path) => MemoryCatalog::load_json(path)
                .await
                .with_context(|| format!("Failed to load restaurant catalog from {}", path.display()))?,
            None => {
                tracing::info!("no catalog seed configured, starting with an empty catalog");
                MemoryCatalog::new()
            }
        };

        Ok(Self::new(config, Arc::new(catalog)))
    }
}

/// All routes of the application
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/search", get(handlers::index).post(handlers::search))
        .route("/restaurants", get(handlers::restaurants_page))
        .route("/api/restaurants", get(handlers::api_lookup))
        .route("/api/restaurants/images", get(handlers::api_all))
        .route("/health", get(handlers::health))
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
