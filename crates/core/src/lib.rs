//! Prizent Core - Shared types and pricing transforms.
//!
//! This crate provides the types and pure transforms used by the Prizent
//! admin console components:
//! - `admin` - REST client and console services
//! - `cli` - Command-line front end
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! clients. Everything here works on data already fetched from the platform.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, module codes, statuses and roles
//! - [`cost`] - Marketplace cost records and the editor view codec
//! - [`custom_field`] - Custom field definitions, values and summaries
//! - [`category`] - Category hierarchy flattening for list rows
//! - [`marketplace`] / [`brand`] - Entity payloads exchanged with the platform
//! - [`partition`] - Splitting flat tagged record lists into buckets

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod brand;
pub mod category;
pub mod cost;
pub mod custom_field;
pub mod marketplace;
pub mod partition;
pub mod types;

pub use types::*;
