//! HTTP client for the Sage query API
//!
//! Sage answers a whole conversation in one synchronous round trip. The
//! wire format carries the conversation as a two-speaker message list with
//! the system prompt and persona as separate top-level fields.

use crate::{LLMError, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Persona sent with every query
///
/// Personas are a Sage-side behavioral profile selector with no
/// counterpart in the generic chat interface, so queries always use the
/// backend's default.
pub const DEFAULT_PERSONA: &str = "default";

/// Speaker of a Sage message
///
/// Sage's conversation encoding knows only the two chat participants;
/// there is no inline system speaker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    /// The human side of the conversation
    User,
    /// The model side of the conversation
    Gpt,
}

/// A single message in Sage's conversation encoding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SageMessage {
    /// Who said it
    pub user: Speaker,

    /// What was said
    pub message: String,
}

/// Request body for the query endpoint
#[derive(Debug, Clone, Serialize)]
pub struct QueryParams {
    /// Model identifier
    pub model: String,

    /// Conversation history, oldest first
    pub message: Vec<SageMessage>,

    /// System instruction; Sage accepts an empty string
    pub system_prompt: String,

    /// Behavioral profile selector
    pub persona: String,
}

/// Response body of the query endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct QueryResponse {
    /// The full completion text
    pub message: String,
}

/// The query operation providers are written against
///
/// Kept as a trait so provider logic can be exercised against a fake
/// backend.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QueryClient: Send + Sync {
    /// Issue one synchronous query
    async fn query(&self, params: QueryParams) -> Result<QueryResponse>;
}

/// Concrete client for a Sage deployment
///
/// Holds no connection state of its own; pooling, proxies, and deadlines
/// belong to the injected [`reqwest::Client`].
pub struct SageClient {
    http_client: reqwest::Client,
    api_key: String,
    api_url: String,
}

impl SageClient {
    /// Create a client bound to a deployment URL and API key
    ///
    /// Performs no I/O; a malformed URL or key surfaces as an error from
    /// the first query.
    pub fn new(
        api_key: impl Into<String>,
        http_client: reqwest::Client,
        api_url: impl Into<String>,
    ) -> Self {
        Self {
            http_client,
            api_key: api_key.into(),
            api_url: api_url.into(),
        }
    }
}

#[async_trait]
impl QueryClient for SageClient {
    #[instrument(skip(self, params), fields(model = %params.model))]
    async fn query(&self, params: QueryParams) -> Result<QueryResponse> {
        debug!("Sending query to Sage API");

        let response = self
            .http_client
            .post(format!("{}/query", self.api_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("content-type", "application/json")
            .json(&params)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;

            return Err(match status.as_u16() {
                401 => LLMError::AuthenticationFailed,
                429 => LLMError::RateLimitExceeded(error_text),
                400 => LLMError::InvalidRequest(error_text),
                404 => LLMError::ModelNotFound(params.model),
                _ => LLMError::RequestFailed(format!("HTTP {status}: {error_text}")),
            });
        }

        let query_response: QueryResponse = response.json().await.map_err(|e| {
            LLMError::UnexpectedResponse(format!("Failed to parse response: {e}"))
        })?;

        debug!(
            response_len = query_response.message.len(),
            "Received response from Sage API"
        );

        Ok(query_response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_params_serialization() {
        let params = QueryParams {
            model: "sage-base".to_string(),
            message: vec![
                SageMessage {
                    user: Speaker::User,
                    message: "hi".to_string(),
                },
                SageMessage {
                    user: Speaker::Gpt,
                    message: "hey".to_string(),
                },
            ],
            system_prompt: "be terse".to_string(),
            persona: DEFAULT_PERSONA.to_string(),
        };

        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json["model"], "sage-base");
        assert_eq!(json["message"][0]["user"], "user");
        assert_eq!(json["message"][1]["user"], "gpt");
        assert_eq!(json["system_prompt"], "be terse");
        assert_eq!(json["persona"], "default");
    }

    #[test]
    fn test_query_response_deserialization() {
        let response: QueryResponse = serde_json::from_str(r#"{"message":"ok"}"#).unwrap();
        assert_eq!(response.message, "ok");
    }

    #[test]
    fn test_client_creation_performs_no_io() {
        let client = SageClient::new("key", reqwest::Client::new(), "https://sage.invalid");
        assert_eq!(client.api_url, "https://sage.invalid");
    }
}
