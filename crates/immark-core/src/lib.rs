//! Immark Core - Single-user bookmark manager over a hosted GraphQL store
//!
//! This crate provides the core functionality for the immark bookmark service:
//!
//! - **Bookmark**: domain model and create-input field contract
//! - **Service**: validation, id assignment, and store forwarding
//! - **Store**: gateway abstraction plus the reqwest-backed GraphQL client
//! - **Config**: store tenant/region settings with environment fallbacks
//! - **Error**: validation / store / data-shape error taxonomy
//!
//! # Architecture
//!
//! Every operation is a single request/response round trip to the external
//! store: bookmarks are never mutated or deleted, categories are derived at
//! read time, and identifiers are generated here rather than by the store so
//! batch inserts report deterministic client-visible ids.

pub mod bookmark;
pub mod config;
pub mod error;
pub mod service;
pub mod store;

pub use bookmark::{Bookmark, CategoryBookmark, NewBookmark};
pub use config::StoreConfig;
pub use error::{ImmarkError, Result};
pub use service::BookmarkService;
pub use store::{GraphqlStore, StoreGateway, StoreResponse};
