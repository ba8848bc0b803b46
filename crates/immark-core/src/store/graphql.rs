//! reqwest-backed gateway for the hosted GraphQL store

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::config::StoreConfig;

use super::{StoreGateway, StoreResponse};

/// Wire shape of a GraphQL response envelope
#[derive(Debug, Deserialize)]
struct GraphqlEnvelope {
    data: Option<Value>,
    #[serde(default)]
    errors: Vec<GraphqlError>,
}

#[derive(Debug, Deserialize)]
struct GraphqlError {
    message: String,
}

/// GraphQL client for the external store.
///
/// Constructed once per process from [`StoreConfig`] and shared behind an
/// `Arc` for the process lifetime.
pub struct GraphqlStore {
    client: reqwest::Client,
    endpoint: String,
}

impl GraphqlStore {
    pub fn new(config: &StoreConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            endpoint: config.endpoint(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// One POST of `{query, variables}`; queries and mutations share the
    /// same wire shape.
    async fn request(&self, document: &str, variables: Value) -> StoreResponse {
        let body = json!({
            "query": document,
            "variables": variables,
        });

        let response = match self.client.post(&self.endpoint).json(&body).send().await {
            Ok(response) => response,
            Err(e) => return StoreResponse::err(e.to_string()),
        };

        let envelope: GraphqlEnvelope = match response.json().await {
            Ok(envelope) => envelope,
            Err(e) => return StoreResponse::err(e.to_string()),
        };

        if !envelope.errors.is_empty() {
            let message = envelope
                .errors
                .iter()
                .map(|e| e.message.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            return StoreResponse::err(message);
        }

        StoreResponse {
            data: envelope.data,
            error: None,
        }
    }
}

#[async_trait]
impl StoreGateway for GraphqlStore {
    async fn query(&self, document: &str, variables: Value) -> StoreResponse {
        self.request(document, variables).await
    }

    async fn mutate(&self, document: &str, variables: Value) -> StoreResponse {
        self.request(document, variables).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_with_errors() {
        let envelope: GraphqlEnvelope = serde_json::from_str(
            r#"{"errors": [{"message": "field not found"}, {"message": "bad type"}]}"#,
        )
        .unwrap();
        assert!(envelope.data.is_none());
        assert_eq!(envelope.errors.len(), 2);
        assert_eq!(envelope.errors[0].message, "field not found");
    }

    #[test]
    fn test_envelope_with_data() {
        let envelope: GraphqlEnvelope =
            serde_json::from_str(r#"{"data": {"bookmarks": []}}"#).unwrap();
        assert!(envelope.data.is_some());
        assert!(envelope.errors.is_empty());
    }

    #[test]
    fn test_store_uses_configured_endpoint() {
        let store = GraphqlStore::new(&StoreConfig::new("acme", "eu-central-1"));
        assert_eq!(store.endpoint(), "https://acme.graphql.eu-central-1.nhost.run/v1");
    }
}
