//! HTTP endpoint handlers
//!
//! Handlers parse the payload, invoke the bookmark service, and map its
//! outcome onto a status code. All failures become a structured `{error}`
//! body (with `details` for unexpected internal failures); nothing
//! propagates as an unhandled fault.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use immark_core::bookmark::{Bookmark, CategoryBookmark, NewBookmark};
use immark_core::error::ImmarkError;

use crate::AppState;

/// JSON error body; `details` only appears for unexpected failures
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

type ErrorResponse = (StatusCode, Json<ErrorBody>);

fn error_body(message: impl Into<String>) -> ErrorBody {
    ErrorBody {
        error: message.into(),
        details: None,
    }
}

/// Map a service failure onto a status code and body.
///
/// `fallback` is the operation's generic message, used only for unexpected
/// internal failures where the underlying detail goes in `details`.
fn error_response(err: ImmarkError, fallback: &str) -> ErrorResponse {
    match err {
        ImmarkError::Validation(message) => (StatusCode::BAD_REQUEST, Json(error_body(message))),
        ImmarkError::Store(message) | ImmarkError::DataShape(message) => {
            (StatusCode::INTERNAL_SERVER_ERROR, Json(error_body(message)))
        }
        ImmarkError::Internal(message) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody {
                error: fallback.to_string(),
                details: Some(message),
            }),
        ),
    }
}

fn invalid_json(rejection: JsonRejection) -> ErrorResponse {
    tracing::debug!(error = %rejection, "request body rejected");
    (
        StatusCode::BAD_REQUEST,
        Json(error_body("Invalid JSON in request body")),
    )
}

fn invalid_query(rejection: QueryRejection) -> ErrorResponse {
    tracing::debug!(error = %rejection, "query string rejected");
    (
        StatusCode::BAD_REQUEST,
        Json(error_body("Invalid query string in request URL")),
    )
}

/// Response for a successful single create
#[derive(Debug, Serialize)]
pub struct CreateBookmarkResponse {
    pub message: String,
    pub id: Uuid,
}

/// POST /bookmarks
pub async fn create_bookmark(
    State(state): State<Arc<AppState>>,
    body: Result<Json<NewBookmark>, JsonRejection>,
) -> Result<Json<CreateBookmarkResponse>, ErrorResponse> {
    tracing::debug!("POST /bookmarks");
    let Json(input) = body.map_err(invalid_json)?;

    let id = state
        .bookmarks
        .create_one(input)
        .await
        .map_err(|e| error_response(e, "Failed to add bookmark"))?;

    Ok(Json(CreateBookmarkResponse {
        message: "Bookmark added successfully".to_string(),
        id,
    }))
}

/// Response for a successful batch create
#[derive(Debug, Serialize)]
pub struct CreateBatchResponse {
    pub message: String,
    pub ids: Vec<Uuid>,
}

/// POST /bookmarks/batch
///
/// The body must be a JSON array of bookmark objects. The shape check
/// happens here because a non-array payload can never reach the typed
/// service input.
pub async fn create_bookmarks_batch(
    State(state): State<Arc<AppState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<CreateBatchResponse>, ErrorResponse> {
    tracing::debug!("POST /bookmarks/batch");
    let Json(payload) = body.map_err(invalid_json)?;

    let Some(items) = payload.as_array() else {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(error_body("Valid bookmarks array is required")),
        ));
    };

    // Missing or non-string fields become empty so the service reports
    // them with its uniform validation message
    let inputs: Vec<NewBookmark> = items
        .iter()
        .map(|item| NewBookmark {
            title: string_field(item, "title"),
            url: string_field(item, "url"),
            category: string_field(item, "category"),
        })
        .collect();

    let ids = state
        .bookmarks
        .create_batch(inputs)
        .await
        .map_err(|e| error_response(e, "Failed to add bookmarks"))?;

    Ok(Json(CreateBatchResponse {
        message: format!("{} bookmarks added successfully", ids.len()),
        ids,
    }))
}

fn string_field(item: &Value, key: &str) -> String {
    item.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// GET /bookmarks/all
pub async fn list_bookmarks(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Bookmark>>, ErrorResponse> {
    tracing::debug!("GET /bookmarks/all");
    let bookmarks = state
        .bookmarks
        .list_all()
        .await
        .map_err(|e| error_response(e, "Failed to fetch bookmarks"))?;

    Ok(Json(bookmarks))
}

/// Query parameters for the category filter
#[derive(Debug, Deserialize)]
pub struct CategoryQuery {
    pub category: Option<String>,
}

/// GET /bookmarks/category?category=<value>
pub async fn list_bookmarks_by_category(
    State(state): State<Arc<AppState>>,
    query: Result<Query<CategoryQuery>, QueryRejection>,
) -> Result<Json<Vec<CategoryBookmark>>, ErrorResponse> {
    tracing::debug!("GET /bookmarks/category");
    let Query(query) = query.map_err(invalid_query)?;
    let category = query.category.unwrap_or_default();

    let bookmarks = state
        .bookmarks
        .list_by_category(&category)
        .await
        .map_err(|e| error_response(e, "Failed to fetch bookmarks by category"))?;

    Ok(Json(bookmarks))
}
