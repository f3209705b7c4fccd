//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::assets::AssetLoader;
use crate::models::AppConfig;
use crate::services::{CrawlService, HttpFetcher, PageService};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub crawler: Arc<CrawlService>,
    pub pages: Arc<PageService>,
}

/// Create application state from an asset loader.
pub fn create_app_state(asset_loader: Arc<AssetLoader>) -> anyhow::Result<AppState> {
    let config = Arc::new(AppConfig::load_from_assets(&asset_loader));
    create_app_state_with_config(config, asset_loader)
}

/// Create application state around an explicit config.
///
/// Tests use this to point the crawl targets at mock servers.
pub fn create_app_state_with_config(
    config: Arc<AppConfig>,
    asset_loader: Arc<AssetLoader>,
) -> anyhow::Result<AppState> {
    let fetcher = Arc::new(HttpFetcher::new(&config.fetch)?);
    let crawler = Arc::new(CrawlService::new(config, fetcher));
    let pages = Arc::new(PageService::new(asset_loader));

    Ok(AppState { crawler, pages })
}

/// Build the router with all endpoints and middleware.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(api::handle_index))
        .route("/get_palettes", post(api::handle_palettes))
        // Health check
        .route("/health", get(|| async { "OK" }))
        // Add state and tracing
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
