//! Core types for the Prizent console.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod module;
pub mod status;

pub use id::*;
pub use module::{Module, UnknownModule};
pub use status::*;
