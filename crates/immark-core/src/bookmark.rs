//! Bookmark domain model
//!
//! A bookmark is the sole entity in the system. Categories are not a
//! separate entity; they are derived at read time as the distinct set of
//! `category` values across bookmarks.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored bookmark, as returned by the full list query.
///
/// `created_at` is assigned by the store at insertion and immutable
/// thereafter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bookmark {
    pub id: Uuid,
    pub title: String,
    pub url: String,
    pub category: String,
    pub created_at: DateTime<Utc>,
}

/// A bookmark row from the category-filtered query.
///
/// The filtered query projects a narrower shape that omits `category`:
/// callers already know the category they asked for. The asymmetry with
/// [`Bookmark`] is an observable contract, not an oversight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryBookmark {
    pub id: Uuid,
    pub title: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a bookmark; the id and timestamp are assigned later.
///
/// Fields default to empty strings on deserialization so that absent and
/// empty fields fail the same validation with the same message.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewBookmark {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub category: String,
}

impl NewBookmark {
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            category: category.into(),
        }
    }

    /// True when every required field is present and non-empty
    pub fn is_complete(&self) -> bool {
        !self.title.is_empty() && !self.url.is_empty() && !self.category.is_empty()
    }
}
