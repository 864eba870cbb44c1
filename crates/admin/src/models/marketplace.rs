//! Marketplace editor form.

use prizent_core::cost::{self, CostView};
use prizent_core::marketplace::{Marketplace, MarketplaceRequest};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Longest accepted marketplace name, in characters.
pub const MAX_NAME_LEN: usize = 255;
/// Longest accepted description, in characters.
pub const MAX_DESCRIPTION_LEN: usize = 500;
/// Longest accepted `costProductRange`, in characters.
pub const MAX_RANGE_LEN: usize = 100;

/// Editable state of one marketplace.
///
/// `costs` is the three-section editor view; it is encoded back into flat
/// cost records by [`MarketplaceForm::to_request`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MarketplaceForm {
    pub name: String,
    pub description: String,
    pub enabled: bool,
    pub costs: CostView,
}

impl MarketplaceForm {
    /// Form state for an existing marketplace.
    #[must_use]
    pub fn from_marketplace(marketplace: &Marketplace) -> Self {
        Self {
            name: marketplace.name.clone(),
            description: marketplace.description.clone().unwrap_or_default(),
            enabled: marketplace.enabled,
            costs: cost::decode(&marketplace.costs),
        }
    }

    /// Check the form before it is sent.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` naming the first offending field.
    pub fn validate(&self) -> Result<(), AppError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(AppError::validation("name", "Marketplace name is required"));
        }
        if name.chars().count() > MAX_NAME_LEN {
            return Err(AppError::validation(
                "name",
                format!("Marketplace name must not exceed {MAX_NAME_LEN} characters"),
            ));
        }
        if self.description.trim().chars().count() > MAX_DESCRIPTION_LEN {
            return Err(AppError::validation(
                "description",
                format!("Description must not exceed {MAX_DESCRIPTION_LEN} characters"),
            ));
        }
        let too_long = cost::encode(&self.costs)
            .into_iter()
            .find(|record| record.cost_product_range.to_string().chars().count() > MAX_RANGE_LEN);
        if let Some(record) = too_long {
            return Err(AppError::validation(
                "costs",
                format!(
                    "Cost product range '{}' must not exceed {MAX_RANGE_LEN} characters",
                    record.cost_product_range
                ),
            ));
        }
        Ok(())
    }

    /// Request body for create and update: trimmed text, encoded costs.
    #[must_use]
    pub fn to_request(&self) -> MarketplaceRequest {
        MarketplaceRequest {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            enabled: self.enabled,
            costs: cost::encode(&self.costs),
        }
    }
}
