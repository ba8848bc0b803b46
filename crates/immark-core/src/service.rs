//! Bookmark service: validation, id assignment, and store forwarding
//!
//! The service enforces the input field contracts, generates identifiers,
//! and translates store responses into the error taxonomy. It holds no
//! state of its own beyond the shared gateway handle.

use std::sync::Arc;

use serde_json::{json, Value};
use uuid::Uuid;

use crate::bookmark::{Bookmark, CategoryBookmark, NewBookmark};
use crate::error::{ImmarkError, Result};
use crate::store::StoreGateway;

const INSERT_BOOKMARK: &str = r#"
mutation InsertBookmark($id: uuid!, $title: String!, $url: String!, $category: String!) {
  insert_bookmarks_one(object: {id: $id, title: $title, url: $url, category: $category}) {
    id
  }
}
"#;

const INSERT_BOOKMARKS: &str = r#"
mutation InsertMultipleBookmarks($objects: [bookmarks_insert_input!]!) {
  insert_bookmarks(objects: $objects) {
    returning {
      id
    }
  }
}
"#;

const ALL_BOOKMARKS: &str = r#"
query GetAllBookmarks {
  bookmarks {
    id
    title
    url
    category
    created_at
  }
}
"#;

const BOOKMARKS_BY_CATEGORY: &str = r#"
query GetBookmarksByCategory($category: String!) {
  bookmarks(where: {category: {_eq: $category}}) {
    id
    title
    url
    created_at
  }
}
"#;

/// Validates and forwards bookmark operations to the store.
///
/// Identifiers are generated here rather than by the store so that batch
/// inserts can report deterministic client-visible ids regardless of the
/// store's insert-returning mechanism.
pub struct BookmarkService {
    store: Arc<dyn StoreGateway>,
}

impl BookmarkService {
    pub fn new(store: Arc<dyn StoreGateway>) -> Self {
        Self { store }
    }

    /// Create a single bookmark and return its generated id
    pub async fn create_one(&self, input: NewBookmark) -> Result<Uuid> {
        if !input.is_complete() {
            tracing::debug!("bookmark create rejected: missing fields");
            return Err(ImmarkError::Validation(
                "Title, URL, and category are required".to_string(),
            ));
        }

        let id = Uuid::new_v4();
        let variables = json!({
            "id": id,
            "title": input.title,
            "url": input.url,
            "category": input.category,
        });

        let response = self.store.mutate(INSERT_BOOKMARK, variables).await;
        if let Some(message) = response.error {
            tracing::warn!(%id, error = %message, "store rejected bookmark insert");
            return Err(ImmarkError::Store(message));
        }

        // The store must echo the inserted row back before we report success
        response
            .data
            .as_ref()
            .and_then(|data| data.pointer("/insert_bookmarks_one/id"))
            .ok_or_else(|| {
                ImmarkError::DataShape("No data returned from database".to_string())
            })?;

        tracing::info!(%id, "bookmark created");
        Ok(id)
    }

    /// Create a batch of bookmarks in a single store operation.
    ///
    /// Validation is all-or-nothing: if any element is incomplete the whole
    /// batch is rejected before a write is attempted. The returned ids are
    /// in input order, one per element.
    pub async fn create_batch(&self, inputs: Vec<NewBookmark>) -> Result<Vec<Uuid>> {
        if inputs.is_empty() {
            return Err(ImmarkError::Validation(
                "Valid bookmarks array is required".to_string(),
            ));
        }
        if inputs.iter().any(|input| !input.is_complete()) {
            tracing::debug!(count = inputs.len(), "bookmark batch rejected: incomplete element");
            return Err(ImmarkError::Validation(
                "Each bookmark must have title, URL, and category".to_string(),
            ));
        }

        let ids: Vec<Uuid> = inputs.iter().map(|_| Uuid::new_v4()).collect();
        let objects: Vec<Value> = inputs
            .iter()
            .zip(&ids)
            .map(|(input, id)| {
                json!({
                    "id": id,
                    "title": input.title,
                    "url": input.url,
                    "category": input.category,
                })
            })
            .collect();

        let response = self
            .store
            .mutate(INSERT_BOOKMARKS, json!({ "objects": objects }))
            .await;
        if let Some(message) = response.error {
            tracing::warn!(count = ids.len(), error = %message, "store rejected bookmark batch");
            return Err(ImmarkError::Store(message));
        }

        response
            .data
            .as_ref()
            .and_then(|data| data.pointer("/insert_bookmarks/returning"))
            .ok_or_else(|| {
                ImmarkError::DataShape("No data returned from database".to_string())
            })?;

        tracing::info!(count = ids.len(), "bookmark batch created");
        Ok(ids)
    }

    /// Fetch every bookmark, in store-native order
    pub async fn list_all(&self) -> Result<Vec<Bookmark>> {
        let response = self.store.query(ALL_BOOKMARKS, json!({})).await;
        if let Some(message) = response.error {
            tracing::warn!(error = %message, "store rejected bookmark list");
            return Err(ImmarkError::Store(message));
        }

        let rows = response
            .data
            .and_then(|mut data| data.get_mut("bookmarks").map(Value::take))
            .ok_or_else(|| {
                ImmarkError::DataShape("No data returned from database".to_string())
            })?;

        serde_json::from_value(rows).map_err(|e| ImmarkError::DataShape(e.to_string()))
    }

    /// Fetch bookmarks whose category exactly equals `category`.
    ///
    /// Matching is case-sensitive and exact; the filter is evaluated by the
    /// store. The result rows use the narrower projection without the
    /// `category` field.
    pub async fn list_by_category(&self, category: &str) -> Result<Vec<CategoryBookmark>> {
        if category.is_empty() {
            return Err(ImmarkError::Validation(
                "Category parameter is required".to_string(),
            ));
        }

        let response = self
            .store
            .query(BOOKMARKS_BY_CATEGORY, json!({ "category": category }))
            .await;
        if let Some(message) = response.error {
            tracing::warn!(category, error = %message, "store rejected category list");
            return Err(ImmarkError::Store(message));
        }

        let rows = response
            .data
            .and_then(|mut data| data.get_mut("bookmarks").map(Value::take))
            .ok_or_else(|| {
                ImmarkError::DataShape("No data returned from database".to_string())
            })?;

        serde_json::from_value(rows).map_err(|e| ImmarkError::DataShape(e.to_string()))
    }
}
