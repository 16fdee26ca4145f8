//! # API Client
//!
//! Main HTTP client for the exchange REST API.

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use shared::{ApiEnvelope, ErrorResponse, SwapExecuteData, SwapQuoteData, SwapSide, WalletDto};

use crate::core::config::ClientConfig;
use crate::core::error::{AppError, Result};
use crate::core::service::SwapApi;

/// HTTP client for communicating with the exchange backend.
///
/// Holds one connection pool for all calls. Every request carries the
/// configured timeout so a hung backend surfaces as an error rather than an
/// endless loading state.
#[derive(Debug, Clone)]
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Create a new API client from configuration.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.http_timeout)
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            token: config.api_token.clone(),
        })
    }

    /// Get the base URL for API requests.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Start a request to `path` (relative to the base URL) with auth attached.
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self
            .client
            .request(method, format!("{}{}", self.base_url, path));
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }
}

/// Decode an enveloped response.
///
/// The outer `Result` is transport/decoding failure; the inner one is the
/// backend's own verdict, with its message verbatim, so each endpoint can map
/// a rejection to the error variant that fits it.
pub(crate) async fn read_envelope<T: DeserializeOwned>(
    response: Response,
) -> Result<std::result::Result<T, String>> {
    let status = response.status();
    let body = response.text().await?;

    match serde_json::from_str::<ApiEnvelope<T>>(&body) {
        Ok(envelope) => Ok(envelope.into_result()),
        Err(parse_err) if status.is_success() => {
            tracing::error!(status = status.as_u16(), error = %parse_err, "Malformed API response");
            Err(AppError::Api(format!("Failed to parse response: {}", parse_err)))
        }
        Err(_) => {
            let message = serde_json::from_str::<ErrorResponse>(&body)
                .map(|e| e.message)
                .unwrap_or_else(|_| format!("Request failed with status {}", status));
            Ok(Err(message))
        }
    }
}

// Implement SwapApi trait for ApiClient
#[async_trait]
impl SwapApi for ApiClient {
    async fn get_swap_pairs(&self) -> Result<Vec<String>> {
        crate::services::api::swap::get_swap_pairs(self).await
    }

    async fn calculate_swap(
        &self,
        pair: &str,
        side: SwapSide,
        amount: &str,
    ) -> Result<SwapQuoteData> {
        crate::services::api::swap::calculate_swap(self, pair, side, amount).await
    }

    async fn execute_swap(
        &self,
        pair: &str,
        side: SwapSide,
        amount: &str,
        pin: &str,
    ) -> Result<SwapExecuteData> {
        crate::services::api::swap::execute_swap(self, pair, side, amount, pin).await
    }

    async fn get_wallets(&self) -> Result<Vec<WalletDto>> {
        crate::services::api::wallet::get_wallets(self).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_is_trimmed() {
        let config = ClientConfig {
            api_base_url: "https://api.example.com/".to_string(),
            ..ClientConfig::default()
        };
        let client = ApiClient::new(&config).unwrap();
        assert_eq!(client.base_url(), "https://api.example.com");
    }

    #[test]
    fn test_request_targets_base_url() {
        let client = ApiClient::new(&ClientConfig::default()).unwrap();
        let request = client
            .request(Method::GET, "/api/v1/swap/pairs")
            .build()
            .unwrap();
        assert_eq!(request.url().as_str(), "http://127.0.0.1:3001/api/v1/swap/pairs");
        assert!(request.headers().get("authorization").is_none());
    }

    #[test]
    fn test_bearer_token_is_attached() {
        let config = ClientConfig {
            api_token: Some("secret".to_string()),
            ..ClientConfig::default()
        };
        let client = ApiClient::new(&config).unwrap();
        let request = client.request(Method::POST, "/api/v1/swap").build().unwrap();
        let auth = request.headers().get("authorization").unwrap();
        assert_eq!(auth.to_str().unwrap(), "Bearer secret");
    }
}
