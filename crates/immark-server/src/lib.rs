//! Immark Server - Bookmark API
//!
//! HTTP surface for the bookmark service: four JSON endpoints over the
//! create/list operations. Each request is handled independently and
//! statelessly; the only shared state is the store gateway handle.

pub mod http;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use immark_core::service::BookmarkService;
use immark_core::store::StoreGateway;

/// Shared application state
pub struct AppState {
    pub bookmarks: BookmarkService,
}

impl AppState {
    /// The gateway is constructed once by the caller and reused for the
    /// process lifetime.
    pub fn new(store: Arc<dyn StoreGateway>) -> Self {
        Self {
            bookmarks: BookmarkService::new(store),
        }
    }
}

/// Create the API router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/bookmarks", post(http::create_bookmark))
        .route("/bookmarks/batch", post(http::create_bookmarks_batch))
        .route("/bookmarks/all", get(http::list_bookmarks))
        .route("/bookmarks/category", get(http::list_bookmarks_by_category))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Start the server
pub async fn serve(addr: &str, state: Arc<AppState>) -> Result<(), Box<dyn std::error::Error>> {
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Immark server listening on {}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
