//! Prizent admin console library.
//!
//! The console talks to the pricing platform's REST API and turns what it
//! gets into editor forms and list rows using the transforms in
//! `prizent_core`.
//!
//! # Layout
//!
//! - [`config`] - Environment configuration
//! - [`api`] - REST client and typed endpoint wrappers
//! - [`models`] - Editor forms and list rows
//! - [`services`] - Marketplace editor, category and brand lists, custom
//!   field fan-out
//! - [`error`] - Unified error type
//!
//! # Example
//!
//! ```rust,ignore
//! let config = AdminConfig::from_env()?;
//! let client = ApiClient::new(config.api())?;
//! let editor = MarketplaceEditor::new(client);
//! let form = editor.load(MarketplaceId::new(4)).await?;
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod services;

pub use api::{ApiClient, ApiError};
pub use config::{AdminConfig, ApiConfig, ConfigError};
pub use error::AppError;
