use axum::http::StatusCode;
use reqwest::Client;
use serde_json::Value;

use crate::error::AppError;

const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";

const GENERATE_PATH: &str =
    "/v1beta/models/gemini-2.5-flash-preview-09-2025:generateContent";
const TTS_PATH: &str = "/v1beta/models/gemini-2.5-flash-preview-tts:generateContent";

/// What the upstream said: its exact status plus its JSON body, relayed to
/// the caller unchanged whether the status was a success or an error.
pub struct UpstreamReply {
    pub status: StatusCode,
    pub body: Value,
}

pub struct UpstreamClient {
    http: Client,
    api_key: Option<String>,
    base_url: String,
}

impl UpstreamClient {
    pub fn new(api_key: Option<String>, base_url: Option<String>) -> Self {
        Self {
            http: Client::new(),
            api_key,
            base_url: base_url.unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
        }
    }

    pub async fn generate(&self, payload: &Value) -> Result<UpstreamReply, AppError> {
        self.forward(GENERATE_PATH, payload).await
    }

    pub async fn tts(&self, payload: &Value) -> Result<UpstreamReply, AppError> {
        self.forward(TTS_PATH, payload).await
    }

    /// Forward `payload` to the upstream endpoint at `path`, authenticating
    /// with the server-held key as a query parameter.
    async fn forward(&self, path: &str, payload: &Value) -> Result<UpstreamReply, AppError> {
        // 1. Fail closed before touching the network
        let key = self
            .api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or(AppError::MissingApiKey)?;

        // 2. One outbound call, no retries
        let response = self
            .http
            .post(format!("{}{}", self.base_url, path))
            .query(&[("key", key)])
            .json(payload)
            .send()
            .await?;

        let status = response.status();

        // 3. Upstream error: relay its JSON body if it has one
        if status.is_client_error() || status.is_server_error() {
            return match response.json::<Value>().await {
                Ok(body) => Ok(UpstreamReply { status, body }),
                Err(e) => {
                    tracing::warn!("Upstream {} error body was not JSON: {}", status, e);
                    Err(AppError::UpstreamBody(status))
                }
            };
        }

        // 4. Success: relay body and status unchanged
        let body = response.json::<Value>().await?;
        Ok(UpstreamReply { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_key_fails_without_network() {
        let client = UpstreamClient::new(None, None);
        let err = client
            .generate(&serde_json::json!({}))
            .await
            .err()
            .expect("should fail closed");
        assert!(matches!(err, AppError::MissingApiKey));
    }

    #[tokio::test]
    async fn empty_key_fails_without_network() {
        let client = UpstreamClient::new(Some(String::new()), None);
        let err = client
            .tts(&serde_json::json!({"input": "hi"}))
            .await
            .err()
            .expect("should fail closed");
        assert!(matches!(err, AppError::MissingApiKey));
    }

    #[test]
    fn default_base_url_is_google() {
        let client = UpstreamClient::new(Some("k".to_string()), None);
        assert_eq!(client.base_url, DEFAULT_API_BASE);
    }

    #[test]
    fn endpoint_paths_differ_only_in_model() {
        assert!(GENERATE_PATH.ends_with(":generateContent"));
        assert!(TTS_PATH.ends_with(":generateContent"));
        assert_ne!(GENERATE_PATH, TTS_PATH);
    }
}
