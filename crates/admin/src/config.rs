//! Console configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `PRIZENT_API_BASE_URL` - Base URL of the platform REST API, including the
//!   `/api` prefix (e.g., `http://localhost:8080/api`)
//!
//! ## Optional
//! - `PRIZENT_API_TOKEN` - Bearer token sent with every request
//! - `PRIZENT_FANOUT_CONCURRENCY` - Max parallel per-entity requests (default: 8)
//! - `PRIZENT_HTTP_TIMEOUT_SECS` - Request timeout in seconds (default: none)

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;
use url::Url;

const DEFAULT_FANOUT_CONCURRENCY: usize = 8;

/// Prefixes of template tokens (case-insensitive)
const PLACEHOLDER_PREFIXES: &[&str] = &["your-", "your_", "put-your", "replace-", "<"];

/// Whole-value template tokens (case-insensitive)
const PLACEHOLDERS: &[&str] = &["changeme", "placeholder", "todo", "token", "secret"];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Console configuration.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    /// Platform REST API connection
    pub api: ApiConfig,
    /// Max in-flight requests when fetching per-entity data
    pub fanout_concurrency: usize,
}

/// Platform REST API configuration.
///
/// Implements `Debug` manually to redact the token.
#[derive(Clone)]
pub struct ApiConfig {
    /// Base URL, e.g. `http://localhost:8080/api`
    pub base_url: Url,
    /// Bearer token (optional for local gateways without auth)
    pub token: Option<SecretString>,
    /// Per-request timeout; `None` waits indefinitely
    pub timeout: Option<Duration>,
}

impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url.as_str())
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ApiConfig {
    /// Configuration for `base_url` with no token and no timeout.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` if the URL does not parse.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: parse_base_url("PRIZENT_API_BASE_URL", base_url)?,
            token: None,
            timeout: None,
        })
    }
}

impl AdminConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = Env(lookup);

        let base_url = env.required("PRIZENT_API_BASE_URL")?;
        let base_url = parse_base_url("PRIZENT_API_BASE_URL", &base_url)?;

        let token = env
            .optional("PRIZENT_API_TOKEN")
            .map(|token| {
                validate_token(&token, "PRIZENT_API_TOKEN")?;
                Ok::<_, ConfigError>(SecretString::from(token))
            })
            .transpose()?;

        let timeout = env
            .optional("PRIZENT_HTTP_TIMEOUT_SECS")
            .map(|raw| parse_var::<u64>("PRIZENT_HTTP_TIMEOUT_SECS", &raw))
            .transpose()?
            .map(Duration::from_secs);

        let fanout_concurrency = env
            .optional("PRIZENT_FANOUT_CONCURRENCY")
            .map(|raw| parse_var::<usize>("PRIZENT_FANOUT_CONCURRENCY", &raw))
            .transpose()?
            .unwrap_or(DEFAULT_FANOUT_CONCURRENCY);
        if fanout_concurrency == 0 {
            return Err(ConfigError::InvalidEnvVar(
                "PRIZENT_FANOUT_CONCURRENCY".to_string(),
                "must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            api: ApiConfig {
                base_url,
                token,
                timeout,
            },
            fanout_concurrency,
        })
    }

    /// Returns a reference to the API configuration.
    #[must_use]
    pub const fn api(&self) -> &ApiConfig {
        &self.api
    }
}

// =============================================================================
// Helpers
// =============================================================================

struct Env<F>(F);

impl<F: Fn(&str) -> Option<String>> Env<F> {
    fn required(&self, key: &str) -> Result<String, ConfigError> {
        self.optional(key)
            .ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()))
    }

    /// Unset and blank variables both count as absent.
    fn optional(&self, key: &str) -> Option<String> {
        (self.0)(key).filter(|v| !v.trim().is_empty())
    }
}

fn parse_var<T>(key: &str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|e: T::Err| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

fn parse_base_url(key: &str, raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw.trim())
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("unsupported scheme '{}'", url.scheme()),
        ));
    }
    Ok(url)
}

/// Reject tokens that are a template value as a whole.
///
/// Issued tokens are random base64url, so only the full value is matched.
fn validate_token(token: &str, var_name: &str) -> Result<(), ConfigError> {
    let lower = token.trim().to_lowercase();
    let is_placeholder = PLACEHOLDERS.contains(&lower.as_str())
        || PLACEHOLDER_PREFIXES.iter().any(|p| lower.starts_with(p))
        || lower.chars().all(|c| c == 'x');
    if is_placeholder {
        return Err(ConfigError::InvalidEnvVar(
            var_name.to_string(),
            "appears to be a placeholder".to_string(),
        ));
    }
    Ok(())
}

/// Expose the bearer token for building the `Authorization` header.
pub(crate) fn bearer_value(token: &SecretString) -> String {
    format!("Bearer {}", token.expose_secret())
}
