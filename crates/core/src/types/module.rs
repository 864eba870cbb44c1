//! Entity module codes.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a module code is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown module code: {0}")]
pub struct UnknownModule(pub String);

/// The entity kind a custom field (or its value) belongs to.
///
/// Serialized as the platform's one-letter codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Module {
    #[serde(rename = "p", alias = "product")]
    Product,
    #[serde(rename = "m", alias = "marketplace")]
    Marketplace,
    #[serde(rename = "b", alias = "brand")]
    Brand,
    #[serde(rename = "c", alias = "category")]
    Category,
}

impl Module {
    /// One-letter wire code, as used in query strings.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Product => "p",
            Self::Marketplace => "m",
            Self::Brand => "b",
            Self::Category => "c",
        }
    }

    /// Human-readable name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Product => "product",
            Self::Marketplace => "marketplace",
            Self::Brand => "brand",
            Self::Category => "category",
        }
    }
}

impl std::fmt::Display for Module {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

impl std::str::FromStr for Module {
    type Err = UnknownModule;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "p" | "product" | "products" => Ok(Self::Product),
            "m" | "marketplace" | "marketplaces" => Ok(Self::Marketplace),
            "b" | "brand" | "brands" => Ok(Self::Brand),
            "c" | "category" | "categories" => Ok(Self::Category),
            _ => Err(UnknownModule(s.to_owned())),
        }
    }
}
