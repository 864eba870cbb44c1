//! Brand entities.

use serde::{Deserialize, Serialize};

use crate::types::{BrandId, ClientId, EntityStatus};

/// A product brand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    pub id: BrandId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<ClientId>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub enabled: bool,
}

impl Brand {
    #[must_use]
    pub const fn status(&self) -> EntityStatus {
        EntityStatus::from_enabled(self.enabled)
    }
}
