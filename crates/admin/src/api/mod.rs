//! REST client for the Prizent pricing platform.
//!
//! All paths are relative to the configured base URL, which already carries
//! the `/api` prefix. Responses come either as bare JSON or wrapped in a
//! `{ success, message, ... }` envelope; see [`types`] for how both are read.
//!
//! # Endpoints
//!
//! - `admin/marketplaces` - marketplace CRUD and cost records
//! - `admin/categories` - category list, toggle, delete
//! - `admin/custom-fields` - definitions and per-entity values
//! - `admin/brands` - brand list

mod brands;
mod categories;
mod custom_fields;
mod marketplaces;
pub mod types;

pub use types::Page;

use std::sync::Arc;

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use url::Url;

use crate::config::{ApiConfig, bearer_value};
use types::StatusBody;

/// Errors that can occur when talking to the platform.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed before a response arrived.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Request URL could not be built.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Platform answered with a non-success status.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Platform answered 2xx with `success: false`.
    #[error("Request unsuccessful: {0}")]
    Unsuccessful(String),

    /// Failed to parse response.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Missing or rejected credentials.
    #[error("Unauthorized: invalid or expired token")]
    Unauthorized,

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),
}

impl ApiError {
    /// HTTP status of the failed response, when there was one.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Unauthorized => Some(401),
            Self::NotFound(_) => Some(404),
            _ => None,
        }
    }
}

/// Platform API client.
///
/// Cheap to clone; clones share one connection pool.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    client: reqwest::Client,
    /// Base URL without a trailing slash.
    base_url: String,
}

impl ApiClient {
    /// Create a new platform API client.
    ///
    /// # Errors
    ///
    /// Returns error if the token is not a valid header value or the HTTP
    /// client fails to build.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();

        if let Some(token) = &config.token {
            let mut value = HeaderValue::from_str(&bearer_value(token))
                .map_err(|e| ApiError::Parse(format!("Invalid token format: {e}")))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            inner: Arc::new(ApiClientInner {
                client: builder.build()?,
                base_url: config.base_url.as_str().trim_end_matches('/').to_string(),
            }),
        })
    }

    /// Base URL requests are resolved against.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Absolute URL for `path` with `query` appended.
    fn url(&self, path: &str, query: &[(&str, &str)]) -> Result<Url, ApiError> {
        let mut url = Url::parse(&format!(
            "{}/{}",
            self.inner.base_url,
            path.trim_start_matches('/')
        ))?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }

    /// Execute a GET request.
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let url = self.url(path, query)?;
        let response = self.inner.client.get(url).send().await?;
        Self::handle_response(response).await
    }

    /// Execute a POST request with a JSON body.
    pub(crate) async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.url(path, &[])?;
        let response = self.inner.client.post(url).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Execute a PUT request with a JSON body.
    pub(crate) async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.url(path, &[])?;
        let response = self.inner.client.put(url).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Execute a body-less PATCH request.
    pub(crate) async fn patch<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let url = self.url(path, query)?;
        let response = self.inner.client.patch(url).send().await?;
        Self::handle_response(response).await
    }

    /// Execute a DELETE request.
    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let url = self.url(path, &[])?;
        let response = self.inner.client.delete(url).send().await?;
        Self::handle_unit(response).await
    }

    /// Handle API response and parse JSON.
    async fn handle_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        if response.status().is_success() {
            return response
                .json()
                .await
                .map_err(|e| ApiError::Parse(format!("Failed to parse response: {e}")));
        }

        Err(Self::parse_error(response).await)
    }

    /// Accept any 2xx unless the body is an envelope with `success: false`.
    async fn handle_unit(response: reqwest::Response) -> Result<(), ApiError> {
        if !response.status().is_success() {
            return Err(Self::parse_error(response).await);
        }

        let body = response.text().await?;
        match serde_json::from_str::<StatusBody>(&body) {
            Ok(status) => status.check(),
            // Empty and non-envelope bodies carry no verdict
            Err(_) => Ok(()),
        }
    }

    /// Parse error response from the platform.
    async fn parse_error(response: reqwest::Response) -> ApiError {
        let status = response.status().as_u16();

        if status == 401 || status == 403 {
            return ApiError::Unauthorized;
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        let message = error_message(&body);

        if status == 404 {
            return ApiError::NotFound(message);
        }

        ApiError::Api { status, message }
    }
}

/// The `message` field of a JSON error body, or the raw body.
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from))
        .unwrap_or_else(|| body.trim().to_string())
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.inner.base_url)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use secrecy::SecretString;

    use super::*;

    fn client(base: &str) -> ApiClient {
        ApiClient::new(&ApiConfig::new(base).unwrap()).unwrap()
    }

    #[test]
    fn test_url_keeps_api_prefix() {
        let api = client("http://localhost:8080/api");
        let url = api.url("admin/categories", &[]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/admin/categories");

        let api = client("http://localhost:8080/api/");
        let url = api.url("/admin/categories", &[]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/admin/categories");
    }

    #[test]
    fn test_url_encodes_query() {
        let api = client("http://localhost:8080/api");
        let url = api
            .url("admin/custom-fields/values", &[("module", "c"), ("moduleId", "12")])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8080/api/admin/custom-fields/values?module=c&moduleId=12"
        );
    }

    #[test]
    fn test_error_message_prefers_json_field() {
        assert_eq!(
            error_message(r#"{"success":false,"message":"Marketplace not found"}"#),
            "Marketplace not found"
        );
        assert_eq!(error_message("Bad Gateway\n"), "Bad Gateway");
    }

    #[test]
    fn test_error_status() {
        let err = ApiError::Api {
            status: 503,
            message: "down".to_string(),
        };
        assert_eq!(err.status(), Some(503));
        assert_eq!(ApiError::Unsuccessful("no".to_string()).status(), None);
    }

    #[test]
    fn test_debug_hides_token() {
        let mut config = ApiConfig::new("http://localhost:8080/api").unwrap();
        config.token = Some(SecretString::from("eyJhbGciOiJIUzI1NiJ9.payload.sig"));
        let api = ApiClient::new(&config).unwrap();
        let debug = format!("{api:?}");
        assert!(debug.contains("localhost"));
        assert!(!debug.contains("eyJhbGci"));
    }
}
