//! Subcommand implementations.

pub mod brands;
pub mod categories;
pub mod custom_fields;
pub mod marketplace;
pub mod role;

use prizent_admin::{AdminConfig, ApiClient, AppError};
use serde::Serialize;
use thiserror::Error;

/// Errors raised by the CLI itself rather than the console library.
#[derive(Debug, Error)]
pub enum CliError {
    /// Console operation failed.
    #[error(transparent)]
    App(#[from] AppError),

    /// Input file could not be read.
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    /// Input or output JSON was malformed.
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Argument could not be interpreted.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Shared state for one command invocation.
pub struct Context {
    pub client: ApiClient,
    pub concurrency: usize,
}

impl Context {
    /// Build the API client from environment configuration.
    ///
    /// # Errors
    ///
    /// Returns error if configuration is missing or the client cannot be built.
    pub fn from_env() -> Result<Self, CliError> {
        let config = AdminConfig::from_env().map_err(AppError::from)?;
        tracing::debug!(?config, "Loaded configuration");
        let client = ApiClient::new(config.api()).map_err(AppError::from)?;
        Ok(Self {
            client,
            concurrency: config.fanout_concurrency,
        })
    }
}

/// Pretty-print `value` as JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(value)?;
    #[allow(clippy::print_stdout)]
    {
        println!("{json}");
    }
    Ok(())
}

/// Read a JSON document from `path`.
pub fn read_json<T: serde::de::DeserializeOwned>(path: &str) -> Result<T, CliError> {
    let raw = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_owned(),
        source,
    })?;
    Ok(serde_json::from_str(&raw)?)
}
