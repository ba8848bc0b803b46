//! Store gateway abstraction for the external GraphQL persistence service

mod graphql;

pub use graphql::GraphqlStore;

use async_trait::async_trait;
use serde_json::Value;

/// Outcome of a single store round trip.
///
/// `error == None` signals success; `data` is then trusted by the caller
/// to match the requested shape. A malformed or missing `data` on success
/// is the caller's concern, not the gateway's.
#[derive(Debug, Clone, Default)]
pub struct StoreResponse {
    pub data: Option<Value>,
    pub error: Option<String>,
}

impl StoreResponse {
    pub fn ok(data: Value) -> Self {
        Self {
            data: Some(data),
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Single point of contact with the external persistence service.
///
/// Implementations are opaque pass-throughs: they do not retry, do not
/// validate shapes, and surface the underlying transport or store error
/// verbatim in [`StoreResponse::error`].
#[async_trait]
pub trait StoreGateway: Send + Sync {
    async fn query(&self, document: &str, variables: Value) -> StoreResponse;
    async fn mutate(&self, document: &str, variables: Value) -> StoreResponse;
}
