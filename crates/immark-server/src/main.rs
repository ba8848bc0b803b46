//! Immark Server Binary
//!
//! Standalone server for the immark bookmark API.

use std::sync::Arc;

use immark_core::config::StoreConfig;
use immark_core::store::GraphqlStore;
use immark_server::{serve, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // The store gateway is constructed once and reused for the process
    // lifetime
    let config = StoreConfig::from_env();
    let store = Arc::new(GraphqlStore::new(&config));
    let state = Arc::new(AppState::new(store));

    let addr = std::env::var("IMMARK_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
    serve(&addr, state).await
}
