use std::time::Duration;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use url::Url;
use log::debug;

use crate::app_config::ProviderConfig;
use crate::errors::ProviderError;
use super::{Provider, TranslationRequest, TranslationResponse};

/// Client for the public Google Translate `translate_a/single` endpoint
#[derive(Debug)]
pub struct GoogleTranslate {
    /// HTTP client for API requests
    client: Client,
    /// API endpoint URL
    endpoint: String,
}

impl GoogleTranslate {
    /// Create a new client
    pub fn new(endpoint: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_default(),
            endpoint: endpoint.into(),
        }
    }

    /// Create a client from the provider section of the configuration
    pub fn from_config(config: &ProviderConfig) -> Self {
        Self::new(config.endpoint.clone(), config.timeout_secs)
    }

    /// Build the request URL with its query parameters
    pub fn build_url(&self, request: &TranslationRequest) -> Result<Url, ProviderError> {
        Url::parse_with_params(
            &self.endpoint,
            &[
                ("client", "gtx"),
                ("sl", request.source_language.as_str()),
                ("tl", request.target_language.as_str()),
                ("dt", "t"),
                ("q", request.text.as_str()),
            ],
        )
        .map_err(|e| ProviderError::RequestFailed(format!("Invalid endpoint {}: {}", self.endpoint, e)))
    }

    /// Extract the translated text from a response body.
    ///
    /// The body is a nested JSON array whose first element lists the
    /// translated segments; segment `[i][0]` holds the translated text.
    pub fn parse_response(body: &str) -> Result<String, ProviderError> {
        let value: Value = serde_json::from_str(body)
            .map_err(|e| ProviderError::ParseError(e.to_string()))?;

        let segments = value
            .get(0)
            .and_then(Value::as_array)
            .ok_or_else(|| ProviderError::ParseError("Missing translation segments".to_string()))?;

        let parts: Vec<&str> = segments
            .iter()
            .filter_map(|segment| segment.get(0).and_then(Value::as_str))
            .collect();

        // An empty string is a valid translation, a response without any segment is not
        if parts.is_empty() {
            return Err(ProviderError::ParseError("Response contains no translated segment".to_string()));
        }

        Ok(parts.concat())
    }
}

#[async_trait]
impl Provider for GoogleTranslate {
    async fn complete(&self, request: TranslationRequest) -> Result<TranslationResponse, ProviderError> {
        let url = self.build_url(&request)?;
        debug!("Requesting {} -> {} translation ({} chars)",
            request.source_language, request.target_language, request.text.chars().count());

        let response = self.client.get(url)
            .send()
            .await
            .map_err(|e| ProviderError::ConnectionError(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(ProviderError::RateLimitExceeded(format!("HTTP {}", status)));
        }

        let body = response.text().await
            .map_err(|e| ProviderError::RequestFailed(format!("Failed to read response body: {}", e)))?;

        if !status.is_success() {
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message: body.chars().take(200).collect(),
            });
        }

        let text = Self::parse_response(&body)?;
        Ok(TranslationResponse { text })
    }

    fn name(&self) -> &str {
        "google"
    }
}
