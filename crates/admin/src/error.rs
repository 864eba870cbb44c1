//! Unified error handling for the console services.

use thiserror::Error;

use crate::api::ApiError;
use crate::config::ConfigError;

/// Application-level error type for the console.
#[derive(Debug, Error)]
pub enum AppError {
    /// Platform API call failed.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Form input rejected before anything was sent.
    #[error("Invalid {field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl AppError {
    /// Shorthand for a [`AppError::Validation`] error.
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    /// Whether trying the same call again may succeed.
    ///
    /// True for transport failures and 5xx responses. Rejections, bad input
    /// and missing resources are final.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Api(ApiError::Http(_)) => true,
            Self::Api(ApiError::Api { status, .. }) => *status >= 500,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::NotFound("marketplace 7".to_string());
        assert_eq!(err.to_string(), "Not found: marketplace 7");

        let err = AppError::validation("name", "Marketplace name is required");
        assert_eq!(err.to_string(), "Invalid name: Marketplace name is required");
    }

    #[test]
    fn test_app_error_retryable() {
        let server = AppError::from(ApiError::Api {
            status: 502,
            message: "Bad Gateway".to_string(),
        });
        assert!(server.is_retryable());

        let client = AppError::from(ApiError::Api {
            status: 409,
            message: "Marketplace name already exists".to_string(),
        });
        assert!(!client.is_retryable());

        assert!(!AppError::from(ApiError::Unauthorized).is_retryable());
        assert!(!AppError::from(ApiError::Unsuccessful("no".to_string())).is_retryable());
        assert!(!AppError::validation("name", "required").is_retryable());
    }
}
